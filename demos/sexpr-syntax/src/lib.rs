//! S-expression syntax built from tandem combinators.
//!
//! One declarative description acts as both the parser and the printer:
//! `parse` and `print` below share every production. The grammar is
//! self-referential (lists contain expressions), which is what
//! [`Syntax::defer`] exists for.

use tandem::primitives::{char, end, filter_char};
use tandem::{Either, ParseError, Syntax};

/// A parsed s-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sexpr {
    /// A bare atom, e.g. `add` or `x1`.
    Atom(String),
    /// A parenthesized list of expressions, e.g. `(add 1 2)`.
    List(Vec<Sexpr>),
}

/// Domain errors for the s-expression grammar.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SexprError {
    #[error("expected an atom character")]
    AtomExpected,

    #[error("cannot print: expected an atom")]
    NotAnAtom,

    #[error("cannot print: expected a list")]
    NotAList,
}

fn atom_char() -> Syntax<SexprError, char, char, char, char> {
    filter_char(
        |c| c.is_alphanumeric() || "+-*/_<>=!?".contains(c),
        SexprError::AtomExpected,
    )
}

fn atom() -> Syntax<SexprError, char, char, Sexpr, Sexpr> {
    atom_char()
        .repeat()
        .transform(
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
            |s: &String| s.chars().collect(),
        )
        .transform_to(
            Sexpr::Atom,
            |e: &Sexpr| match e {
                Sexpr::Atom(s) => Some(s.clone()),
                Sexpr::List(_) => None,
            },
            SexprError::NotAnAtom,
        )
}

/// One or more spaces; prints as a single space.
fn spaces() -> Syntax<SexprError, char, char, (), ()> {
    char(' ').repeat().transform(|_: Vec<()>| (), |_: &()| vec![()])
}

fn list() -> Syntax<SexprError, char, char, Sexpr, Sexpr> {
    Syntax::defer(sexpr)
        .repeat_with_sep0(spaces())
        .between(char('('), char(')'))
        .transform_to(
            Sexpr::List,
            |e: &Sexpr| match e {
                Sexpr::List(items) => Some(items.clone()),
                Sexpr::Atom(_) => None,
            },
            SexprError::NotAList,
        )
}

/// The expression syntax: `sexpr = atom | '(' sexpr (' ' sexpr)* ')'`.
pub fn sexpr() -> Syntax<SexprError, char, char, Sexpr, Sexpr> {
    atom().or_else_either(list()).transform(
        |tagged| match tagged {
            Either::Left(e) | Either::Right(e) => e,
        },
        |e: &Sexpr| match e {
            Sexpr::Atom(_) => Either::Left(e.clone()),
            Sexpr::List(_) => Either::Right(e.clone()),
        },
    )
}

/// A complete document: one expression, then end of input.
pub fn document() -> Syntax<SexprError, char, char, Sexpr, Sexpr> {
    sexpr().zip_left(end()).named("sexpr")
}

/// Parses a complete s-expression document.
pub fn parse(input: &str) -> Result<Sexpr, ParseError<SexprError>> {
    document().parse_str(input)
}

/// Prints an s-expression in canonical form (single spaces, no padding).
pub fn print(expr: &Sexpr) -> Result<String, SexprError> {
    document().print_string(expr)
}
