//! Repetition combinators.
//!
//! All repetitions parse into an ordered `Vec` and print an ordered `Vec`
//! element by element. A repetition stops at the first failed attempt; what
//! happens to that attempt's partial consumption follows the underlying
//! syntax's backtracking mode, exactly as for
//! [`or_else`](crate::Syntax::or_else): rolled back under Auto, propagated
//! as a failure under Manual when input was consumed.

use crate::cursor::{Backtrack, Cursor};
use crate::error::{ErrorKind, ParseError};
use crate::syntax::{parse_fn, print_fn, Syntax};

/// Outcome of a failed repetition attempt under the effective mode.
enum Stop<E> {
    /// The repetition ends here.
    Done,
    /// The failure must propagate (manual mode, input consumed).
    Propagate(ParseError<E>),
}

/// Applies the mode rule to a failed attempt that started at `mark`.
fn settle_attempt<E, I: Clone>(
    cursor: &mut Cursor<'_, I>,
    mode: Backtrack,
    mark: usize,
    err: ParseError<E>,
) -> Stop<E> {
    match mode {
        Backtrack::Auto => {
            cursor.restore(mark);
            Stop::Done
        }
        Backtrack::Manual if cursor.pos() == mark => Stop::Done,
        Backtrack::Manual => Stop::Propagate(err),
    }
}

impl<E, I, O, V, R> Syntax<E, I, O, V, R>
where
    E: Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
    V: Send + Sync + 'static,
    R: Send + Sync + 'static,
{
    /// Zero or more occurrences.
    #[inline]
    pub fn repeat0(self) -> Syntax<E, I, O, Vec<V>, Vec<R>> {
        self.at_least(0)
    }

    /// One or more occurrences.
    #[inline]
    pub fn repeat(self) -> Syntax<E, I, O, Vec<V>, Vec<R>> {
        self.at_least(1)
    }

    /// At least `min` occurrences.
    ///
    /// The stream position lands exactly after the last successful element
    /// (under auto backtracking); fewer than `min` elements fail the whole
    /// repetition with `UnmetMinimum`.
    pub fn at_least(self, min: usize) -> Syntax<E, I, O, Vec<V>, Vec<R>> {
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let mut items = Vec::new();
                loop {
                    let mark = cursor.pos();
                    match (parser)(cursor) {
                        Ok(item) => {
                            items.push(item);
                            // A zero-width success cannot make progress.
                            if cursor.pos() == mark {
                                break;
                            }
                        }
                        Err(err) => {
                            let effective = mode.unwrap_or(cursor.mode());
                            match settle_attempt(cursor, effective, mark, err) {
                                Stop::Done => break,
                                Stop::Propagate(err) => return Err(err),
                            }
                        }
                    }
                }
                if items.len() < min {
                    return Err(ParseError::new(
                        ErrorKind::UnmetMinimum {
                            min,
                            actual: items.len(),
                        },
                        cursor.pos(),
                    ));
                }
                Ok(items)
            }),
            print_fn(move |values: &Vec<V>, target| {
                for value in values {
                    (printer)(value, target)?;
                }
                Ok(())
            }),
        )
    }

    /// One or more occurrences separated by `sep`.
    ///
    /// The separator is parsed and printed strictly between consecutive
    /// elements, never leading or trailing.
    pub fn repeat_with_sep(self, sep: Syntax<E, I, O, (), ()>) -> Syntax<E, I, O, Vec<V>, Vec<R>> {
        self.with_sep(sep, true)
    }

    /// Zero or more occurrences separated by `sep`.
    pub fn repeat_with_sep0(self, sep: Syntax<E, I, O, (), ()>) -> Syntax<E, I, O, Vec<V>, Vec<R>> {
        self.with_sep(sep, false)
    }

    fn with_sep(
        self,
        sep: Syntax<E, I, O, (), ()>,
        required: bool,
    ) -> Syntax<E, I, O, Vec<V>, Vec<R>> {
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        let (sep_parser, sep_printer) = (sep.parser, sep.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let mut items = Vec::new();
                let mark = cursor.pos();
                match (parser)(cursor) {
                    Ok(first) => items.push(first),
                    Err(err) if required => return Err(err),
                    Err(err) => {
                        let effective = mode.unwrap_or(cursor.mode());
                        return match settle_attempt(cursor, effective, mark, err) {
                            Stop::Done => Ok(items),
                            Stop::Propagate(err) => Err(err),
                        };
                    }
                }
                loop {
                    // The failed tail attempt rolls back past the separator,
                    // so a trailing separator is never consumed.
                    let mark = cursor.pos();
                    if let Err(err) = (sep_parser)(cursor) {
                        let effective = mode.unwrap_or(cursor.mode());
                        match settle_attempt(cursor, effective, mark, err) {
                            Stop::Done => break,
                            Stop::Propagate(err) => return Err(err),
                        }
                    }
                    match (parser)(cursor) {
                        Ok(item) => items.push(item),
                        Err(err) => {
                            let effective = mode.unwrap_or(cursor.mode());
                            match settle_attempt(cursor, effective, mark, err) {
                                Stop::Done => break,
                                Stop::Propagate(err) => return Err(err),
                            }
                        }
                    }
                }
                Ok(items)
            }),
            print_fn(move |values: &Vec<V>, target| {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        (sep_printer)(&(), target)?;
                    }
                    (printer)(value, target)?;
                }
                Ok(())
            }),
        )
    }

    /// Repeats until `stop` succeeds, checking after each element.
    ///
    /// The stop condition's result is discarded; its consumption is part of
    /// the parse but it contributes nothing on the print path, where only
    /// the elements are printed. A failed stop probe is always rewound -
    /// it is a lookahead, not an attempt.
    pub fn repeat_until<V2, R2>(
        self,
        stop: Syntax<E, I, O, V2, R2>,
    ) -> Syntax<E, I, O, Vec<V>, Vec<R>>
    where
        V2: Send + Sync + 'static,
        R2: Send + Sync + 'static,
    {
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        let stop_parser = stop.parser;
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let mut items = Vec::new();
                loop {
                    items.push((parser)(cursor)?);
                    let mark = cursor.pos();
                    match (stop_parser)(cursor) {
                        Ok(_) => break,
                        Err(_) => cursor.restore(mark),
                    }
                }
                Ok(items)
            }),
            print_fn(move |values: &Vec<V>, target| {
                for value in values {
                    (printer)(value, target)?;
                }
                Ok(())
            }),
        )
    }

    /// Zero or one occurrence.
    ///
    /// A parse failure converts to `None` under the same backtracking rule
    /// as [`or_else`](Self::or_else); printing `None` emits nothing.
    pub fn optional(self) -> Syntax<E, I, O, Option<V>, Option<R>> {
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let mark = cursor.pos();
                match (parser)(cursor) {
                    Ok(result) => Ok(Some(result)),
                    Err(err) => {
                        let effective = mode.unwrap_or(cursor.mode());
                        match settle_attempt(cursor, effective, mark, err) {
                            Stop::Done => Ok(None),
                            Stop::Propagate(err) => Err(err),
                        }
                    }
                }
            }),
            print_fn(move |value: &Option<V>, target| match value {
                Some(present) => (printer)(present, target),
                None => Ok(()),
            }),
        )
    }
}
