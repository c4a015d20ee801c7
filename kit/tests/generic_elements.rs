//! The algebra is element-generic: the same combinators drive a syntax over
//! a custom token type, parsed from a slice and printed into a vector sink.

use tandem::primitives::end;
use tandem::{ParseError, Syntax, VecTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok {
    LParen,
    RParen,
    Comma,
    Num(i64),
}

type TokSyntax<V, R> = Syntax<String, Tok, Tok, V, R>;

/// One fixed token, discarded like a literal character.
fn tok(expected: Tok) -> TokSyntax<(), ()> {
    Syntax::from_parts(
        move |cursor| match cursor.peek() {
            Some(t) if t == expected => {
                cursor.advance(1);
                Ok(())
            }
            Some(_) => Err(ParseError::unexpected(format!("{expected:?}"), cursor.pos())),
            None => Err(ParseError::unexpected_end(cursor.pos())),
        },
        move |_value, target| {
            target.push(expected);
            Ok(())
        },
    )
}

/// A number token, carrying its value through both directions.
fn num() -> TokSyntax<i64, i64> {
    Syntax::from_parts(
        |cursor| match cursor.peek() {
            Some(Tok::Num(n)) => {
                cursor.advance(1);
                Ok(n)
            }
            Some(_) => Err(ParseError::unexpected("number", cursor.pos())),
            None => Err(ParseError::unexpected_end(cursor.pos())),
        },
        |value, target| {
            target.push(Tok::Num(*value));
            Ok(())
        },
    )
}

/// `( 1 , 2 , 3 )` over tokens instead of characters.
fn tuple() -> TokSyntax<Vec<i64>, Vec<i64>> {
    num()
        .repeat_with_sep(tok(Tok::Comma))
        .between(tok(Tok::LParen), tok(Tok::RParen))
        .followed_by(end())
}

#[test]
fn parses_a_token_slice() {
    let input = [
        Tok::LParen,
        Tok::Num(1),
        Tok::Comma,
        Tok::Num(2),
        Tok::RParen,
    ];
    assert_eq!(tuple().parse(&input), Ok(vec![1, 2]));
}

#[test]
fn prints_into_a_vector_sink() {
    let syntax = tuple();
    let mut target = VecTarget::new();
    syntax.print(&vec![1, 2], &mut target).unwrap();
    assert_eq!(
        target.into_items(),
        vec![
            Tok::LParen,
            Tok::Num(1),
            Tok::Comma,
            Tok::Num(2),
            Tok::RParen,
        ]
    );
}

#[test]
fn token_round_trip() {
    let values = vec![4, 5, 6];
    let syntax = tuple();

    let mut target = VecTarget::new();
    syntax.print(&values, &mut target).unwrap();
    assert_eq!(syntax.parse(&target.into_items()), Ok(values));
}

#[test]
fn reports_token_level_mismatches() {
    let input = [Tok::LParen, Tok::Comma];
    let err = tuple().parse(&input).unwrap_err();
    assert_eq!(err, ParseError::unexpected("number", 1));
}
