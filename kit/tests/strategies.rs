//! Strategy equivalence and recursive grammars.
//!
//! The two cursor backends must be observably equivalent: same
//! success/failure outcome, same consumed position, for any syntax.

use tandem::primitives::{char, index, letter, string};
use tandem::{ErrorKind, ParseConfig, Strategy, Syntax};
use test_case::test_case;

fn list_syntax() -> Syntax<&'static str, char, char, (Vec<char>, usize), (Vec<char>, usize)> {
    letter::<&'static str>()
        .repeat_with_sep(char(','))
        .between(char('['), char(']'))
        .zip(index())
}

#[test_case("[a,b,c]"; "well formed list")]
#[test_case("[a]"; "singleton")]
#[test_case("[]"; "missing element")]
#[test_case("[a,b"; "unclosed")]
#[test_case("a,b]"; "unopened")]
#[test_case(""; "empty input")]
#[test_case("[a,,b]"; "double separator")]
fn both_strategies_agree_on_outcome_and_position(input: &str) {
    let syntax = list_syntax();
    let slice = syntax.parse_str_with(input, ParseConfig::new().with_strategy(Strategy::Slice));
    let buffered =
        syntax.parse_str_with(input, ParseConfig::new().with_strategy(Strategy::Buffered));
    assert_eq!(slice, buffered);
}

#[test_case(Strategy::Slice; "slice backend")]
#[test_case(Strategy::Buffered; "buffered backend")]
fn backtracking_is_strategy_independent(strategy: Strategy) {
    let left = char::<&'static str>('a').zip(char('b'));
    let right = char::<&'static str>('a').zip(char('c'));
    let syntax = left.or_else(right);

    let config = ParseConfig::new().with_strategy(strategy);
    assert_eq!(syntax.parse_str_with("ac", config), Ok(((), ())));
}

/// `tree = "x" | '(' tree ')'` - self-referential via `defer`.
fn tree() -> Syntax<&'static str, char, char, (), ()> {
    let leaf = string::<&'static str, _>("x", ());
    let nested = Syntax::defer(tree).between(char('('), char(')'));
    leaf.or_else(nested)
}

#[test_case(Strategy::Slice; "slice backend")]
#[test_case(Strategy::Buffered; "buffered backend")]
fn recursive_grammar_parses_and_prints(strategy: Strategy) {
    let syntax = tree();
    let config = ParseConfig::new().with_strategy(strategy);

    assert_eq!(syntax.parse_str_with("x", config), Ok(()));
    assert_eq!(syntax.parse_str_with("(((x)))", config), Ok(()));
    assert!(syntax.parse_str_with("((x)", config).is_err());

    assert_eq!(syntax.print_string(&()), Ok("x".to_string()));
}

#[test]
fn recursion_limit_bounds_deferred_nesting() {
    let syntax = tree();
    let config = ParseConfig::new().with_max_recursion_depth(4);

    assert_eq!(syntax.parse_str_with("((((x))))", config), Ok(()));

    let err = syntax
        .parse_str_with("(((((x)))))", config)
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::RecursionLimitExceeded { depth: 5, limit: 4 }
    );
}

#[test]
fn disabled_recursion_limit_allows_deep_nesting() {
    let syntax = tree();
    let config = ParseConfig::new().with_max_recursion_depth(1 << 20);

    let depth = 200;
    let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(syntax.parse_str_with(&input, config), Ok(()));
}
