//! Character-level pattern descriptions and their compiled matchers.
//!
//! A [`Pattern`] describes the shape a leaf syntax recognizes: a literal
//! character or string, set membership, an arbitrary predicate, a wildcard
//! or one of the standard character classes. [`Pattern::compile`] produces a
//! [`Matcher`] whose walk is deterministic - a single forward pass with no
//! internal backtracking, reporting either the consumed span length or the
//! reason it stopped.
//!
//! Leaf constructors in [`primitives`](crate::primitives) are built on this
//! module; it is also usable directly for custom leaves.

use std::sync::Arc;

use crate::cursor::Cursor;

/// A character-level shape.
#[derive(Clone)]
pub enum Pattern {
    /// Exactly this character.
    Char(char),
    /// Any single character except this one.
    NotChar(char),
    /// Any character contained in the set.
    In(Vec<char>),
    /// Any character not contained in the set.
    NotIn(Vec<char>),
    /// Any character satisfying the predicate.
    Satisfy(Arc<dyn Fn(char) -> bool + Send + Sync>),
    /// Any single character.
    Any,
    /// Exactly this sequence of characters.
    Literal(String),
    /// An ASCII-or-Unicode decimal digit (`char::is_ascii_digit`).
    Digit,
    /// An alphabetic character (`char::is_alphabetic`).
    Letter,
    /// An alphanumeric character (`char::is_alphanumeric`).
    Alphanumeric,
    /// A whitespace character (`char::is_whitespace`).
    Whitespace,
}

impl core::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Pattern::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Pattern::NotChar(c) => f.debug_tuple("NotChar").field(c).finish(),
            Pattern::In(set) => f.debug_tuple("In").field(set).finish(),
            Pattern::NotIn(set) => f.debug_tuple("NotIn").field(set).finish(),
            Pattern::Satisfy(_) => f.write_str("Satisfy(..)"),
            Pattern::Any => f.write_str("Any"),
            Pattern::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Pattern::Digit => f.write_str("Digit"),
            Pattern::Letter => f.write_str("Letter"),
            Pattern::Alphanumeric => f.write_str("Alphanumeric"),
            Pattern::Whitespace => f.write_str("Whitespace"),
        }
    }
}

impl Pattern {
    /// Builds a predicate pattern from any matching function.
    pub fn satisfy(pred: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        Pattern::Satisfy(Arc::new(pred))
    }

    /// Compiles this description into a deterministic matcher.
    pub fn compile(self) -> Matcher {
        Matcher { pattern: self }
    }

    /// A short human-readable description for structural error reports.
    pub fn describe(&self) -> String {
        match self {
            Pattern::Char(c) => format!("{c:?}"),
            Pattern::NotChar(c) => format!("any character but {c:?}"),
            Pattern::In(set) => format!("one of {:?}", set.iter().collect::<String>()),
            Pattern::NotIn(set) => format!("none of {:?}", set.iter().collect::<String>()),
            Pattern::Satisfy(_) => "a matching character".to_string(),
            Pattern::Any => "any character".to_string(),
            Pattern::Literal(s) => format!("{s:?}"),
            Pattern::Digit => "a digit".to_string(),
            Pattern::Letter => "a letter".to_string(),
            Pattern::Alphanumeric => "an alphanumeric character".to_string(),
            Pattern::Whitespace => "whitespace".to_string(),
        }
    }

    fn matches_char(&self, c: char) -> bool {
        match self {
            Pattern::Char(expected) => c == *expected,
            Pattern::NotChar(excluded) => c != *excluded,
            Pattern::In(set) => set.contains(&c),
            Pattern::NotIn(set) => !set.contains(&c),
            Pattern::Satisfy(pred) => pred(c),
            Pattern::Any => true,
            Pattern::Digit => c.is_ascii_digit(),
            Pattern::Letter => c.is_alphabetic(),
            Pattern::Alphanumeric => c.is_alphanumeric(),
            Pattern::Whitespace => c.is_whitespace(),
            // Literals are matched span-wise in `Matcher::apply`.
            Pattern::Literal(_) => false,
        }
    }

    /// Whether a single already-consumed character fits this shape.
    ///
    /// Used by the print side of symmetric leaves to refuse values the parse
    /// side would never have produced. Literal patterns validate against
    /// their first character.
    pub fn admits(&self, c: char) -> bool {
        match self {
            Pattern::Literal(s) => s.chars().next() == Some(c),
            other => other.matches_char(c),
        }
    }
}

/// Outcome of one matcher application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pattern matched, consuming this many elements from the cursor
    /// position.
    Matched(usize),
    /// The element at the failure offset did not fit the pattern.
    Mismatch,
    /// The input ended before the pattern could complete.
    End,
}

/// A compiled deterministic matcher.
///
/// Examines the stream via cursor lookahead only; the caller advances the
/// cursor on a successful match.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Pattern,
}

impl Matcher {
    /// Applies the matcher at the current cursor position.
    pub fn apply(&self, cursor: &mut Cursor<'_, char>) -> MatchOutcome {
        let start = cursor.pos();
        match &self.pattern {
            Pattern::Literal(s) => {
                for (offset, expected) in s.chars().enumerate() {
                    match cursor.at(start + offset) {
                        Some(c) if c == expected => {}
                        Some(_) => return MatchOutcome::Mismatch,
                        None => return MatchOutcome::End,
                    }
                }
                MatchOutcome::Matched(s.chars().count())
            }
            single => match cursor.at(start) {
                Some(c) if single.matches_char(c) => MatchOutcome::Matched(1),
                Some(_) => MatchOutcome::Mismatch,
                None => MatchOutcome::End,
            },
        }
    }

    /// The pattern this matcher was compiled from.
    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;

    fn cursor_over(s: &str) -> (Vec<char>, ParseConfig) {
        (s.chars().collect(), ParseConfig::default())
    }

    #[test]
    fn test_literal_matches_full_span() {
        let (input, config) = cursor_over("hello!");
        let mut cursor = Cursor::new(&input, config);
        let matcher = Pattern::Literal("hello".to_string()).compile();

        assert_eq!(matcher.apply(&mut cursor), MatchOutcome::Matched(5));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_literal_reports_end_on_short_input() {
        let (input, config) = cursor_over("he");
        let mut cursor = Cursor::new(&input, config);
        let matcher = Pattern::Literal("hello".to_string()).compile();

        assert_eq!(matcher.apply(&mut cursor), MatchOutcome::End);
    }

    #[test]
    fn test_set_membership() {
        let (input, config) = cursor_over("b");
        let mut cursor = Cursor::new(&input, config);

        let yes = Pattern::In(vec!['a', 'b', 'c']).compile();
        let no = Pattern::NotIn(vec!['a', 'b', 'c']).compile();

        assert_eq!(yes.apply(&mut cursor), MatchOutcome::Matched(1));
        assert_eq!(no.apply(&mut cursor), MatchOutcome::Mismatch);
    }

    #[test]
    fn test_classes() {
        let (input, config) = cursor_over("7");
        let mut cursor = Cursor::new(&input, config);

        assert_eq!(
            Pattern::Digit.compile().apply(&mut cursor),
            MatchOutcome::Matched(1)
        );
        assert_eq!(
            Pattern::Letter.compile().apply(&mut cursor),
            MatchOutcome::Mismatch
        );
        assert_eq!(
            Pattern::Alphanumeric.compile().apply(&mut cursor),
            MatchOutcome::Matched(1)
        );
    }

    #[test]
    fn test_admits_validates_print_side() {
        assert!(Pattern::Digit.admits('3'));
        assert!(!Pattern::Digit.admits('x'));
        assert!(Pattern::Literal("abc".into()).admits('a'));
        assert!(!Pattern::Literal("abc".into()).admits('b'));
    }
}
