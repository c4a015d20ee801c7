//! Backtracking-mode behavior of alternation, optionality and negation.

use tandem::primitives::{char, fail, index};
use tandem::{ErrorKind, ParseError, Syntax};

type Pair = Syntax<&'static str, char, char, ((), ()), ((), ())>;

fn ab() -> Pair {
    char::<&'static str>('a').zip(char('b'))
}

fn ac() -> Pair {
    char::<&'static str>('a').zip(char('c'))
}

#[test]
fn auto_mode_retries_the_fallback() {
    let syntax = ab().or_else(ac());
    assert_eq!(syntax.parse_str("ac"), Ok(((), ())));
}

#[test]
fn manual_mode_blocks_a_consuming_failure() {
    // `a` is consumed before the left branch fails at `c`; without a
    // backtrack marker the fallback never re-reads it.
    let syntax = ab().or_else(ac()).manual_backtracking();
    let err = syntax.parse_str("ac").unwrap_err();
    assert_eq!(err.position, 1);
    assert!(matches!(err.kind, ErrorKind::Unexpected { .. }));
}

#[test]
fn manual_mode_on_the_left_operand_blocks_too() {
    let syntax = ab().manual_backtracking().or_else(ac());
    assert!(syntax.parse_str("ac").is_err());
}

#[test]
fn explicit_marker_restores_the_fallback() {
    let syntax = ab().backtrack().manual_backtracking().or_else(ac());
    assert_eq!(syntax.parse_str("ac"), Ok(((), ())));
}

#[test]
fn inner_auto_override_wins_over_outer_manual() {
    let syntax = ab().auto_backtracking().or_else(ac()).manual_backtracking();
    assert_eq!(syntax.parse_str("ac"), Ok(((), ())));
}

#[test]
fn manual_mode_still_falls_back_on_non_consuming_failure() {
    // The left branch fails on the very first element, so nothing needs
    // restoring and the fallback is allowed even under manual mode.
    let syntax = ab().or_else(char('x').zip(char('y'))).manual_backtracking();
    assert_eq!(syntax.parse_str("xy"), Ok(((), ())));
}

#[test]
fn optional_rolls_back_under_auto() {
    let syntax = ab().optional().zip(index());
    assert_eq!(syntax.parse_str("ax"), Ok((None, 0)));
}

#[test]
fn optional_propagates_consuming_failure_under_manual() {
    let syntax = ab().optional().manual_backtracking();
    assert!(syntax.parse_str("ax").is_err());
    assert_eq!(syntax.parse_str("ab"), Ok(Some(((), ()))));
}

#[test]
fn not_succeeds_where_the_syntax_fails_and_consumes_nothing() {
    let syntax = ab().not("unexpected ab").zip(index());
    assert_eq!(syntax.parse_str("ax"), Ok(((), 0)));
}

#[test]
fn not_fails_where_the_syntax_succeeds() {
    let syntax = ab().not("unexpected ab");
    assert_eq!(
        syntax.parse_str("ab"),
        Err(ParseError::failure("unexpected ab", 0))
    );
}

#[test]
fn not_prints_nothing() {
    let syntax = ab().not("unexpected ab");
    assert_eq!(syntax.print_string(&()), Ok(String::new()));
}

#[test]
fn backtrack_rewinds_even_for_swallowing_combinators() {
    // The last attempt consumes `a` before failing at `x`. Under manual
    // mode that propagates - unless the marker rewinds it first, in which
    // case the repetition ends cleanly after the second element.
    let unmarked = ab().repeat0().manual_backtracking();
    assert!(unmarked.parse_str("ababax").is_err());

    let marked = ab().backtrack().repeat0().zip(index()).manual_backtracking();
    assert_eq!(
        marked.parse_str("ababax"),
        Ok((vec![((), ()), ((), ())], 4))
    );
}

#[test]
fn fail_never_consumes() {
    let syntax = fail::<&'static str, char, char, (), ()>("nope").or_else(char('z'));
    assert_eq!(syntax.parse_str("z"), Ok(()));
}
