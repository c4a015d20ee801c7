//! Leaf syntax constructors.
//!
//! Character-level leaves are built atop the [`pattern`](crate::pattern)
//! engine; the element-generic leaves (`succeed`, `fail`, `index`, `end`)
//! work over any stream type.
//!
//! Leaves taking a `failure` parameter apply it symmetrically: the parse
//! side fails with it on mismatch and the print side refuses a value the
//! parse side would never have produced. Class leaves (`digit`, `letter`,
//! ...) report structural mismatches instead and print their value as
//! given.

use core::convert::Infallible;

use crate::config::ParseConfig;
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::pattern::{MatchOutcome, Matcher, Pattern};
use crate::syntax::Syntax;

/// Consumes nothing and yields `value`; prints nothing.
pub fn succeed<E, I, O, R>(value: R) -> Syntax<E, I, O, R, R>
where
    E: Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    Syntax::from_parts(move |_cursor| Ok(value.clone()), |_value, _target| Ok(()))
}

/// Always fails with `failure`, on both the parse and the print path.
pub fn fail<E, I, O, V, R>(failure: E) -> Syntax<E, I, O, V, R>
where
    E: Clone + Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
    V: Send + Sync + 'static,
    R: Send + Sync + 'static,
{
    let print_failure = failure.clone();
    Syntax::from_parts(
        move |cursor| Err(ParseError::failure(failure.clone(), cursor.pos())),
        move |_value, _target| Err(print_failure.clone()),
    )
}

/// Any single character, returned as the result and printed back as given.
pub fn any_char<E>() -> Syntax<E, char, char, char, char>
where
    E: Send + Sync + 'static,
{
    Syntax::from_parts(
        |cursor| match cursor.next() {
            Some(c) => Ok(c),
            None => Err(ParseError::unexpected_end(cursor.pos())),
        },
        |value, target| {
            target.push(*value);
            Ok(())
        },
    )
}

/// Exactly the character `expected`; prints it.
pub fn char<E>(expected: char) -> Syntax<E, char, char, (), ()>
where
    E: Send + Sync + 'static,
{
    let matcher = Pattern::Char(expected).compile();
    let description = matcher.pattern().describe();
    Syntax::from_parts(
        move |cursor| match matcher.apply(cursor) {
            MatchOutcome::Matched(len) => {
                cursor.advance(len);
                Ok(())
            }
            MatchOutcome::Mismatch => {
                Err(ParseError::unexpected(description.clone(), cursor.pos()))
            }
            MatchOutcome::End => Err(ParseError::unexpected_end(cursor.pos())),
        },
        move |_value, target| {
            target.push(expected);
            Ok(())
        },
    )
}

/// Any single character except `excluded`.
pub fn char_not<E>(excluded: char, failure: E) -> Syntax<E, char, char, char, char>
where
    E: Clone + Send + Sync + 'static,
{
    char_matching(Pattern::NotChar(excluded), failure)
}

/// Any character contained in `set`.
pub fn char_in<E>(set: impl IntoIterator<Item = char>, failure: E) -> Syntax<E, char, char, char, char>
where
    E: Clone + Send + Sync + 'static,
{
    char_matching(Pattern::In(set.into_iter().collect()), failure)
}

/// Any character not contained in `set`.
pub fn char_not_in<E>(
    set: impl IntoIterator<Item = char>,
    failure: E,
) -> Syntax<E, char, char, char, char>
where
    E: Clone + Send + Sync + 'static,
{
    char_matching(Pattern::NotIn(set.into_iter().collect()), failure)
}

/// Any character satisfying `pred`.
pub fn filter_char<E>(
    pred: impl Fn(char) -> bool + Send + Sync + 'static,
    failure: E,
) -> Syntax<E, char, char, char, char>
where
    E: Clone + Send + Sync + 'static,
{
    char_matching(Pattern::satisfy(pred), failure)
}

/// A decimal digit.
pub fn digit<E>() -> Syntax<E, char, char, char, char>
where
    E: Send + Sync + 'static,
{
    char_class(Pattern::Digit)
}

/// An alphabetic character.
pub fn letter<E>() -> Syntax<E, char, char, char, char>
where
    E: Send + Sync + 'static,
{
    char_class(Pattern::Letter)
}

/// An alphanumeric character.
pub fn alphanumeric<E>() -> Syntax<E, char, char, char, char>
where
    E: Send + Sync + 'static,
{
    char_class(Pattern::Alphanumeric)
}

/// A whitespace character.
pub fn whitespace<E>() -> Syntax<E, char, char, char, char>
where
    E: Send + Sync + 'static,
{
    char_class(Pattern::Whitespace)
}

/// The exact sequence `literal`, discarded into the caller-fixed `value`.
///
/// Printing emits `literal` regardless of the value supplied - the parsed
/// content is always constant, so nothing of the value is needed.
pub fn string<E, R>(literal: impl Into<String>, value: R) -> Syntax<E, char, char, R, R>
where
    E: Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    let literal = literal.into();
    let matcher = Pattern::Literal(literal.clone()).compile();
    let description = matcher.pattern().describe();
    Syntax::from_parts(
        move |cursor| match matcher.apply(cursor) {
            MatchOutcome::Matched(len) => {
                cursor.advance(len);
                Ok(value.clone())
            }
            MatchOutcome::Mismatch => {
                Err(ParseError::unexpected(description.clone(), cursor.pos()))
            }
            MatchOutcome::End => Err(ParseError::unexpected_end(cursor.pos())),
        },
        move |_value, target| {
            for c in literal.chars() {
                target.push(c);
            }
            Ok(())
        },
    )
}

/// The span matched by `pattern`, as a `String`.
///
/// Fails with `failure` on mismatch; printing validates the supplied span
/// against the same pattern and refuses spans the parse side could not have
/// produced.
pub fn pattern<E>(pattern: Pattern, failure: E) -> Syntax<E, char, char, String, String>
where
    E: Clone + Send + Sync + 'static,
{
    let matcher = pattern.compile();
    let print_matcher = matcher.clone();
    let print_failure = failure.clone();
    Syntax::from_parts(
        move |cursor| match matcher.apply(cursor) {
            MatchOutcome::Matched(len) => Ok(consume_span(cursor, len)),
            MatchOutcome::Mismatch => Err(ParseError::failure(failure.clone(), cursor.pos())),
            MatchOutcome::End => Err(ParseError::unexpected_end(cursor.pos())),
        },
        move |value: &String, target| {
            if span_matches(&print_matcher, value) {
                for c in value.chars() {
                    target.push(c);
                }
                Ok(())
            } else {
                Err(print_failure.clone())
            }
        },
    )
}

/// Like [`pattern`], asserting the pattern can never fail.
///
/// The error type admits no values; a mismatch can only surface as a
/// structural error. Use [`never_fails`](Syntax::never_fails) to place the
/// result alongside fallible syntaxes.
pub fn unsafe_pattern(pattern: Pattern) -> Syntax<Infallible, char, char, String, String> {
    let matcher = pattern.compile();
    let description = matcher.pattern().describe();
    Syntax::from_parts(
        move |cursor| match matcher.apply(cursor) {
            MatchOutcome::Matched(len) => Ok(consume_span(cursor, len)),
            MatchOutcome::Mismatch => {
                Err(ParseError::unexpected(description.clone(), cursor.pos()))
            }
            MatchOutcome::End => Err(ParseError::unexpected_end(cursor.pos())),
        },
        |value: &String, target| {
            for c in value.chars() {
                target.push(c);
            }
            Ok(())
        },
    )
}

/// The current stream position.
///
/// Parse-only information: printing always trivially succeeds and emits
/// nothing, since a position cannot be reconstructed from nothing.
pub fn index<E, I, O>() -> Syntax<E, I, O, usize, usize>
where
    E: Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
{
    Syntax::from_parts(|cursor| Ok(cursor.pos()), |_value, _target| Ok(()))
}

/// Asserts the end of the stream.
///
/// Fails if unconsumed elements remain; prints nothing.
pub fn end<E, I, O>() -> Syntax<E, I, O, (), ()>
where
    E: Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
{
    Syntax::from_parts(
        |cursor| {
            let remaining = cursor.remaining();
            if remaining == 0 {
                Ok(())
            } else {
                Err(ParseError::new(
                    ErrorKind::NotConsumed { remaining },
                    cursor.pos(),
                ))
            }
        },
        |_value, _target| Ok(()),
    )
}

/// Shared shape of the symmetric single-character leaves.
fn char_matching<E>(pattern: Pattern, failure: E) -> Syntax<E, char, char, char, char>
where
    E: Clone + Send + Sync + 'static,
{
    let matcher = pattern.clone().compile();
    let parse_failure = failure.clone();
    Syntax::from_parts(
        move |cursor| match matcher.apply(cursor) {
            MatchOutcome::Matched(_) => match cursor.next() {
                Some(c) => Ok(c),
                None => Err(ParseError::unexpected_end(cursor.pos())),
            },
            MatchOutcome::Mismatch => Err(ParseError::failure(parse_failure.clone(), cursor.pos())),
            MatchOutcome::End => Err(ParseError::unexpected_end(cursor.pos())),
        },
        move |value, target| {
            if pattern.admits(*value) {
                target.push(*value);
                Ok(())
            } else {
                Err(failure.clone())
            }
        },
    )
}

/// Class leaves report structural mismatches and print unvalidated.
fn char_class<E>(pattern: Pattern) -> Syntax<E, char, char, char, char>
where
    E: Send + Sync + 'static,
{
    let matcher = pattern.compile();
    let description = matcher.pattern().describe();
    Syntax::from_parts(
        move |cursor| match matcher.apply(cursor) {
            MatchOutcome::Matched(_) => match cursor.next() {
                Some(c) => Ok(c),
                None => Err(ParseError::unexpected_end(cursor.pos())),
            },
            MatchOutcome::Mismatch => {
                Err(ParseError::unexpected(description.clone(), cursor.pos()))
            }
            MatchOutcome::End => Err(ParseError::unexpected_end(cursor.pos())),
        },
        |value, target| {
            target.push(*value);
            Ok(())
        },
    )
}

fn consume_span(cursor: &mut Cursor<'_, char>, len: usize) -> String {
    let mut span = String::with_capacity(len);
    for _ in 0..len {
        if let Some(c) = cursor.next() {
            span.push(c);
        }
    }
    span
}

fn span_matches(matcher: &Matcher, value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let mut probe = Cursor::new(&chars, ParseConfig::default());
    matcher.apply(&mut probe) == MatchOutcome::Matched(chars.len())
}
