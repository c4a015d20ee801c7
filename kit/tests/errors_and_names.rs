//! Structured errors, diagnostic naming and annotated printing.

use tandem::primitives::{any_char, char, digit, end, fail};
use tandem::{Color, ColorSpec, ErrorKind, ParseError, StringTarget, StyleSheet};

#[test]
fn named_failure_reports_the_label() {
    let syntax = fail::<&'static str, char, char, (), ()>("boom").named("foo");
    let err = syntax.parse_str("anything").unwrap_err();
    assert_eq!(err.context, vec!["foo".to_string()]);
    assert_eq!(err.payload(), Some(&"boom"));
}

#[test]
fn strip_removes_the_label_from_subsequent_reports() {
    let named = fail::<&'static str, char, char, (), ()>("boom").named("foo");
    let stripped = named.strip();
    let err = stripped.parse_str("anything").unwrap_err();
    assert_eq!(err.context, Vec::<String>::new());
    // Parse outcome is otherwise unchanged.
    assert_eq!(err, ParseError::failure("boom", 0));
}

#[test]
fn nested_labels_chain_innermost_first() {
    let syntax = fail::<&'static str, char, char, (), ()>("boom")
        .named("inner")
        .named("outer");
    let err = syntax.parse_str("").unwrap_err();
    assert_eq!(err.context, vec!["inner".to_string(), "outer".to_string()]);
}

#[test]
fn strip_unwinds_stacked_decorations() {
    let syntax = fail::<&'static str, char, char, (), ()>("boom")
        .named("inner")
        .named("outer")
        .strip();
    let err = syntax.parse_str("").unwrap_err();
    assert!(err.context.is_empty());
}

#[test]
fn error_equality_covers_payload_position_and_chain() {
    let make = || {
        fail::<&'static str, char, char, (), ()>("boom")
            .named("foo")
            .parse_str("xyz")
            .unwrap_err()
    };
    assert_eq!(make(), make());
    assert_ne!(make(), ParseError::failure("boom", 0));
}

#[test]
fn alternation_reports_the_fallback_error_when_both_fail() {
    let syntax = char::<&'static str>('a').or_else(char('b'));
    let err = syntax.parse_str("c").unwrap_err();
    assert_eq!(err, ParseError::unexpected("'b'", 0));
}

#[test]
fn end_reports_the_remaining_count() {
    let syntax = char::<&'static str>('a').zip(char('b')).zip_left(end());
    assert_eq!(syntax.parse_str("ab"), Ok(((), ())));
    assert_eq!(
        syntax.parse_str("abcd"),
        Err(ParseError::new(ErrorKind::NotConsumed { remaining: 2 }, 2))
    );
}

#[test]
fn printing_aborts_on_the_first_failing_sub_printer() {
    let lower = || any_char::<&'static str>().filter(|c| c.is_ascii_lowercase(), "not lowercase");
    let syntax = lower().zip(lower());

    let mut target = StringTarget::new();
    let result = syntax.print(&('a', 'X'), &mut target);

    assert_eq!(result, Err("not lowercase"));
    // No recovery, but the sink may hold the successfully printed prefix.
    assert_eq!(target.as_str(), "a");
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
enum NumberError {
    #[error("value out of range")]
    OutOfRange,
}

#[test]
fn domain_errors_carry_caller_defined_types() {
    let syntax = digit::<NumberError>()
        .transform(
            |c| c.to_digit(10).unwrap_or(0),
            |n: &u32| char::from_digit(*n, 10).unwrap_or('0'),
        )
        .filter(|n| *n < 8, NumberError::OutOfRange);

    assert_eq!(syntax.parse_str("7"), Ok(7));
    let err = syntax.parse_str("9").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Failure(NumberError::OutOfRange));
    assert_eq!(err.to_string(), "value out of range at position 1");

    assert_eq!(syntax.print_string(&9), Err(NumberError::OutOfRange));
}

#[test]
fn styled_printing_preserves_logical_content() {
    let syntax = digit::<&'static str>().named("num");

    let plain = syntax.print_string(&'5').unwrap();
    assert_eq!(plain, "5");

    let styles = StyleSheet::new().with("num", {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    });
    let styled = syntax.print_string_styled(&'5', &styles).unwrap();
    assert!(styled.contains('5'));
    assert!(styled.contains("\x1b["));

    // An empty sheet annotates nothing.
    let unstyled = syntax
        .print_string_styled(&'5', &StyleSheet::new())
        .unwrap();
    assert_eq!(unstyled, "5");
}
