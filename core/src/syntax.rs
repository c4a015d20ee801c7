//! The invertible syntax type and its combinator algebra.
//!
//! A [`Syntax`] pairs a parse behavior and a print behavior over shared
//! value/result shapes. Combinators transform both sides together and never
//! inspect the opposite side at combination time - invertibility is a static
//! discipline carried by the combinator signatures (e.g. a discarded branch
//! must be a unit syntax, because a printer cannot invent a value for a type
//! it cannot reconstruct).
//!
//! A built `Syntax` is a plain immutable value: internally two `Arc`'d
//! function objects, cheap to clone and safe to share across threads. All
//! invocation state (position, ambient backtracking mode, recursion depth)
//! lives in the per-run [`Cursor`].
//!
//! # Backtracking
//!
//! Failure-recovering combinators ([`or_else`](Syntax::or_else),
//! [`optional`](Syntax::optional), the repetitions) consult the mode of the
//! attempted operand: a node carries an explicit mode set by
//! [`set_auto_backtracking`](Syntax::set_auto_backtracking), or inherits the
//! ambient mode of the run, which starts as `Auto` and is rewritten over a
//! sub-tree for the duration of its execution by the same combinator.
//! Explicit inner settings win over an enclosing rewrite.
//!
//! # Type parameters
//!
//! - `E` - error payload carried by failures on either side
//! - `I` - input element type consumed by the parser
//! - `O` - output element type produced by the printer
//! - `V` - value type fed to the printer
//! - `R` - result type produced by the parser

use core::convert::Infallible;
use core::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::ParseConfig;
use crate::cursor::{Backtrack, Cursor};
use crate::error::ParseError;
use crate::target::{StringTarget, StyleSheet, StyledStringTarget, Target};

pub(crate) type ParseFn<E, I, R> =
    Arc<dyn Fn(&mut Cursor<'_, I>) -> Result<R, ParseError<E>> + Send + Sync>;
pub(crate) type PrintFn<E, O, V> =
    Arc<dyn Fn(&V, &mut dyn Target<O>) -> Result<(), E> + Send + Sync>;

/// Erases a parse closure behind the shared function-object type.
pub(crate) fn parse_fn<E, I, R>(
    f: impl Fn(&mut Cursor<'_, I>) -> Result<R, ParseError<E>> + Send + Sync + 'static,
) -> ParseFn<E, I, R> {
    Arc::new(f)
}

/// Erases a print closure behind the shared function-object type.
pub(crate) fn print_fn<E, O, V>(
    f: impl Fn(&V, &mut dyn Target<O>) -> Result<(), E> + Send + Sync + 'static,
) -> PrintFn<E, O, V> {
    Arc::new(f)
}

/// One of two alternatives, tagged by which side produced it.
///
/// Returned by [`Syntax::or_else_either`]; printing dispatches on the tag.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Either<L, R> {
    /// The first alternative succeeded / should print.
    Left(L),
    /// The second alternative succeeded / should print.
    Right(R),
}

/// An immutable pairing of a parse behavior and a print behavior.
///
/// See the [module documentation](self) for the type-parameter legend.
pub struct Syntax<E, I, O, V, R> {
    pub(crate) parser: ParseFn<E, I, R>,
    pub(crate) printer: PrintFn<E, O, V>,
    // Explicit backtracking mode of this node; `None` inherits the ambient
    // mode of the run. Consulted by the enclosing recovery combinator.
    pub(crate) mode: Option<Backtrack>,
    // Pre-decoration view recorded by `named`, recovered by `strip`.
    undecorated: Option<Box<Syntax<E, I, O, V, R>>>,
}

impl<E, I, O, V, R> Clone for Syntax<E, I, O, V, R> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            printer: self.printer.clone(),
            mode: self.mode,
            undecorated: self.undecorated.clone(),
        }
    }
}

impl<E, I, O, V, R> fmt::Debug for Syntax<E, I, O, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Syntax")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
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
    /// Builds a syntax directly from a parse and a print function.
    ///
    /// This is the escape hatch the leaf constructors in
    /// [`primitives`](crate::primitives) are built on. The two functions
    /// must agree on the value/result shapes; nothing checks that they are
    /// inverses.
    pub fn from_parts(
        parser: impl Fn(&mut Cursor<'_, I>) -> Result<R, ParseError<E>> + Send + Sync + 'static,
        printer: impl Fn(&V, &mut dyn Target<O>) -> Result<(), E> + Send + Sync + 'static,
    ) -> Self {
        Self::with_parts(None, parse_fn(parser), print_fn(printer))
    }

    pub(crate) fn with_parts(
        mode: Option<Backtrack>,
        parser: ParseFn<E, I, R>,
        printer: PrintFn<E, O, V>,
    ) -> Self {
        Self {
            parser,
            printer,
            mode,
            undecorated: None,
        }
    }

    /// Defers construction of a syntax until it is first executed.
    ///
    /// The explicit indirection that makes self-referential grammars
    /// buildable: the factory runs once, on first use, and each entry into
    /// the deferred syntax is charged against the configured recursion
    /// limit.
    ///
    /// ```ignore
    /// fn value() -> Syntax<String, char, char, Sexpr, Sexpr> {
    ///     atom().or_else(Syntax::defer(list)) // `list` refers back to `value`
    /// }
    /// ```
    pub fn defer(factory: impl Fn() -> Self + Send + Sync + 'static) -> Self {
        let factory = Arc::new(factory);
        let cell: Arc<OnceCell<Self>> = Arc::new(OnceCell::new());

        let parse_cell = cell.clone();
        let parse_factory = factory.clone();
        Self::from_parts(
            move |cursor| {
                let syntax = parse_cell.get_or_init(|| parse_factory());
                cursor.enter_deferred()?;
                let result = (syntax.parser)(cursor);
                cursor.exit_deferred();
                result
            },
            move |value, target| {
                let syntax = cell.get_or_init(|| factory());
                (syntax.printer)(value, target)
            },
        )
    }

    // ------------------------------------------------------------------
    // Transform family
    // ------------------------------------------------------------------

    /// Maps the parse result by `to` and the print value by `from`.
    ///
    /// Both functions are total; whether they are true inverses is the
    /// caller's responsibility and not enforced.
    pub fn transform<V2, R2>(
        self,
        to: impl Fn(R) -> R2 + Send + Sync + 'static,
        from: impl Fn(&V2) -> V + Send + Sync + 'static,
    ) -> Syntax<E, I, O, V2, R2>
    where
        V2: Send + Sync + 'static,
        R2: Send + Sync + 'static,
    {
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| (parser)(cursor).map(&to)),
            print_fn(move |value, target| (printer)(&from(value), target)),
        )
    }

    /// Like [`transform`](Self::transform), but both directions may fail.
    ///
    /// A successful parse piped through a failing `to` surfaces as a parse
    /// error carrying the failure value at the current position; the printer
    /// applies `from` first and aborts identically on failure.
    pub fn transform_either<V2, R2>(
        self,
        to: impl Fn(R) -> Result<R2, E> + Send + Sync + 'static,
        from: impl Fn(&V2) -> Result<V, E> + Send + Sync + 'static,
    ) -> Syntax<E, I, O, V2, R2>
    where
        V2: Send + Sync + 'static,
        R2: Send + Sync + 'static,
    {
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let result = (parser)(cursor)?;
                to(result).map_err(|e| ParseError::failure(e, cursor.pos()))
            }),
            print_fn(move |value, target| (printer)(&from(value)?, target)),
        )
    }

    /// Like [`transform_either`](Self::transform_either), with absence as
    /// the failure signal.
    ///
    /// The error channel becomes `Option<E>`: failures of the mappings
    /// arrive as `None`, failures of the underlying syntax as `Some(e)`.
    pub fn transform_option<V2, R2>(
        self,
        to: impl Fn(R) -> Option<R2> + Send + Sync + 'static,
        from: impl Fn(&V2) -> Option<V> + Send + Sync + 'static,
    ) -> Syntax<Option<E>, I, O, V2, R2>
    where
        V2: Send + Sync + 'static,
        R2: Send + Sync + 'static,
    {
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| match (parser)(cursor) {
                Ok(result) => match to(result) {
                    Some(mapped) => Ok(mapped),
                    None => Err(ParseError::failure(None, cursor.pos())),
                },
                Err(err) => Err(err.map_payload(Some)),
            }),
            print_fn(move |value, target| match from(value) {
                Some(narrowed) => (printer)(&narrowed, target).map_err(Some),
                None => Err(None),
            }),
        )
    }

    /// Total `to`, partial `from`.
    ///
    /// `try_narrow` is defined only on a subset of printed values; printing
    /// a value outside that subset fails with `failure`. This is how a
    /// closed family of variant syntaxes combines into one supertype syntax,
    /// each constraining what it can print via its own narrowing.
    pub fn transform_to<V2, R2>(
        self,
        to: impl Fn(R) -> R2 + Send + Sync + 'static,
        try_narrow: impl Fn(&V2) -> Option<V> + Send + Sync + 'static,
        failure: E,
    ) -> Syntax<E, I, O, V2, R2>
    where
        E: Clone,
        V2: Send + Sync + 'static,
        R2: Send + Sync + 'static,
    {
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| (parser)(cursor).map(&to)),
            print_fn(move |value, target| match try_narrow(value) {
                Some(narrowed) => (printer)(&narrowed, target),
                None => Err(failure.clone()),
            }),
        )
    }

    /// Broadens the result type via `Into`, supplying the narrowing back.
    ///
    /// Convenience over [`transform_to`](Self::transform_to) for widening a
    /// variant syntax to its enclosing enum.
    pub fn widen_with<U>(
        self,
        try_narrow: impl Fn(&U) -> Option<V> + Send + Sync + 'static,
        failure: E,
    ) -> Syntax<E, I, O, U, U>
    where
        E: Clone,
        R: Into<U>,
        U: Send + Sync + 'static,
    {
        self.transform_to(Into::into, try_narrow, failure)
    }

    /// Transforms the domain-error payload on both sides.
    ///
    /// Structural errors and position/context metadata pass through
    /// untouched.
    pub fn map_error<E2>(
        self,
        f: impl Fn(E) -> E2 + Send + Sync + 'static,
    ) -> Syntax<E2, I, O, V, R>
    where
        E2: Send + Sync + 'static,
    {
        let f = Arc::new(f);
        let parse_f = f.clone();
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| (parser)(cursor).map_err(|e| e.map_payload(&*parse_f))),
            print_fn(move |value, target| (printer)(value, target).map_err(&*f)),
        )
    }

    // ------------------------------------------------------------------
    // Sequencing
    // ------------------------------------------------------------------

    /// Concatenates two syntaxes, pairing their results and values.
    pub fn zip<V2, R2>(self, that: Syntax<E, I, O, V2, R2>) -> Syntax<E, I, O, (V, V2), (R, R2)>
    where
        V2: Send + Sync + 'static,
        R2: Send + Sync + 'static,
    {
        let (mode, pa, qa) = (self.mode, self.parser, self.printer);
        let (pb, qb) = (that.parser, that.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let left = (pa)(cursor)?;
                let right = (pb)(cursor)?;
                Ok((left, right))
            }),
            print_fn(move |value: &(V, V2), target| {
                (qa)(&value.0, target)?;
                (qb)(&value.1, target)
            }),
        )
    }

    /// Concatenates with a trailing unit syntax, discarding its result.
    ///
    /// Only unit syntaxes may occupy the discarded position: the printer
    /// cannot synthesize an arbitrary value for a type it cannot
    /// reconstruct, so the discarded side is driven with the unit
    /// placeholder.
    pub fn zip_left(self, that: Syntax<E, I, O, (), ()>) -> Syntax<E, I, O, V, R> {
        let (mode, pa, qa) = (self.mode, self.parser, self.printer);
        let (pb, qb) = (that.parser, that.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let result = (pa)(cursor)?;
                (pb)(cursor)?;
                Ok(result)
            }),
            print_fn(move |value, target| {
                (qa)(value, target)?;
                (qb)(&(), target)
            }),
        )
    }

    /// Alias for [`zip_left`](Self::zip_left).
    #[inline]
    pub fn followed_by(self, that: Syntax<E, I, O, (), ()>) -> Syntax<E, I, O, V, R> {
        self.zip_left(that)
    }

    /// Sandwiches this syntax between two unit syntaxes.
    pub fn between(
        self,
        left: Syntax<E, I, O, (), ()>,
        right: Syntax<E, I, O, (), ()>,
    ) -> Syntax<E, I, O, V, R> {
        let (pl, ql) = (left.parser, left.printer);
        let (mode, pa, qa) = (self.mode, self.parser, self.printer);
        let (pr, qr) = (right.parser, right.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                (pl)(cursor)?;
                let result = (pa)(cursor)?;
                (pr)(cursor)?;
                Ok(result)
            }),
            print_fn(move |value, target| {
                (ql)(&(), target)?;
                (qa)(value, target)?;
                (qr)(&(), target)
            }),
        )
    }

    /// Sandwiches this syntax between two occurrences of `other`.
    #[inline]
    pub fn surrounded_by(self, other: Syntax<E, I, O, (), ()>) -> Syntax<E, I, O, V, R> {
        self.between(other.clone(), other)
    }

    // ------------------------------------------------------------------
    // Alternation
    // ------------------------------------------------------------------

    /// Attempts this syntax; on failure attempts `that`.
    ///
    /// If this syntax runs in auto-backtracking mode, its failure restores
    /// the pre-attempt position before the fallback runs. In manual mode
    /// the fallback only runs if the failed branch left the position
    /// untouched - either because it consumed nothing or because an
    /// explicit [`backtrack`](Self::backtrack) marker rewound it.
    ///
    /// Printing always uses this syntax's printer; the alternative never
    /// prints here. Use [`or_else_either`](Self::or_else_either) when both
    /// sides must be printable.
    pub fn or_else(self, that: Syntax<E, I, O, V, R>) -> Syntax<E, I, O, V, R> {
        let (mode, pa) = (self.mode, self.parser);
        let pb = that.parser;
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let mark = cursor.pos();
                match (pa)(cursor) {
                    Ok(result) => Ok(result),
                    Err(first) => match mode.unwrap_or(cursor.mode()) {
                        Backtrack::Auto => {
                            cursor.restore(mark);
                            (pb)(cursor)
                        }
                        Backtrack::Manual if cursor.pos() == mark => (pb)(cursor),
                        Backtrack::Manual => Err(first),
                    },
                }
            }),
            self.printer,
        )
    }

    /// Like [`or_else`](Self::or_else), but tags which side succeeded.
    ///
    /// Printing dispatches on the tag: a `Left` value prints with this
    /// syntax, a `Right` value with `that`.
    pub fn or_else_either<V2, R2>(
        self,
        that: Syntax<E, I, O, V2, R2>,
    ) -> Syntax<E, I, O, Either<V, V2>, Either<R, R2>>
    where
        V2: Send + Sync + 'static,
        R2: Send + Sync + 'static,
    {
        let (mode, pa, qa) = (self.mode, self.parser, self.printer);
        let (pb, qb) = (that.parser, that.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                let mark = cursor.pos();
                match (pa)(cursor) {
                    Ok(result) => Ok(Either::Left(result)),
                    Err(first) => match mode.unwrap_or(cursor.mode()) {
                        Backtrack::Auto => {
                            cursor.restore(mark);
                            (pb)(cursor).map(Either::Right)
                        }
                        Backtrack::Manual if cursor.pos() == mark => {
                            (pb)(cursor).map(Either::Right)
                        }
                        Backtrack::Manual => Err(first),
                    },
                }
            }),
            print_fn(move |value: &Either<V, V2>, target| match value {
                Either::Left(left) => (qa)(left, target),
                Either::Right(right) => (qb)(right, target),
            }),
        )
    }

    // ------------------------------------------------------------------
    // Negation
    // ------------------------------------------------------------------

    /// Succeeds, consuming nothing net, exactly when this syntax would fail
    /// at the current position; fails with `failure` when it would succeed.
    ///
    /// There is no meaningful inverse: the print side is a fixed
    /// always-succeeding no-op.
    pub fn not(self, failure: E) -> Syntax<E, I, O, (), ()>
    where
        E: Clone,
    {
        let parser = self.parser;
        Syntax::from_parts(
            move |cursor| {
                let mark = cursor.pos();
                let probe = (parser)(cursor);
                cursor.restore(mark);
                match probe {
                    Ok(_) => Err(ParseError::failure(failure.clone(), mark)),
                    Err(_) => Ok(()),
                }
            },
            |_value, _target| Ok(()),
        )
    }

    // ------------------------------------------------------------------
    // Backtracking control
    // ------------------------------------------------------------------

    /// Restores the pre-attempt position on failure, unconditionally.
    ///
    /// The error still propagates; only the stream position is rewound, so
    /// an enclosing alternation in manual mode sees a non-consuming failure
    /// and may try its fallback.
    pub fn backtrack(self) -> Self {
        let (mode, parser) = (self.mode, self.parser);
        Self::with_parts(
            mode,
            parse_fn(move |cursor| {
                let mark = cursor.pos();
                match (parser)(cursor) {
                    Ok(result) => Ok(result),
                    Err(err) => {
                        cursor.restore(mark);
                        Err(err)
                    }
                }
            }),
            self.printer,
        )
    }

    /// Rewrites the backtracking mode over this entire sub-tree.
    ///
    /// The new mode becomes the ambient mode while the sub-tree executes,
    /// so nested nodes without an explicit setting of their own follow it;
    /// nested explicit settings win. The mode affects only the parse side;
    /// printing ignores it.
    pub fn set_auto_backtracking(self, enabled: bool) -> Self {
        let mode = if enabled {
            Backtrack::Auto
        } else {
            Backtrack::Manual
        };
        let parser = self.parser;
        Self::with_parts(
            Some(mode),
            parse_fn(move |cursor| {
                let prev = cursor.set_mode(mode);
                let result = (parser)(cursor);
                cursor.set_mode(prev);
                result
            }),
            self.printer,
        )
    }

    /// Enables automatic position restoration on failure for this sub-tree.
    #[inline]
    pub fn auto_backtracking(self) -> Self {
        self.set_auto_backtracking(true)
    }

    /// Disables automatic position restoration on failure for this sub-tree.
    #[inline]
    pub fn manual_backtracking(self) -> Self {
        self.set_auto_backtracking(false)
    }

    // ------------------------------------------------------------------
    // Naming
    // ------------------------------------------------------------------

    /// Attaches a diagnostic label to this syntax.
    ///
    /// Parse failures passing through pick up the label in their context
    /// chain; printing notifies the sink of the labelled region (used by
    /// styled sinks, ignored otherwise). Purely informational - removable
    /// via [`strip`](Self::strip) without changing outcomes.
    pub fn named(self, label: impl Into<String>) -> Self {
        let label: Arc<str> = Arc::from(label.into());
        let print_label = label.clone();
        let prior = self.clone();
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Self {
            parser: parse_fn(move |cursor| {
                (parser)(cursor).map_err(|e| e.in_context(&*label))
            }),
            printer: print_fn(move |value, target| {
                target.enter_name(&print_label);
                let result = (printer)(value, target);
                target.exit_name(&print_label);
                result
            }),
            mode,
            undecorated: Some(Box::new(prior)),
        }
    }

    /// Removes the diagnostic labels applied directly to this syntax.
    ///
    /// Labels baked into sub-syntaxes before composition are unaffected.
    pub fn strip(mut self) -> Self {
        while let Some(inner) = self.undecorated.take() {
            self = *inner;
        }
        self
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Runs the parse behavior over `input` with the default configuration.
    ///
    /// Full-input consumption is not required unless the syntax ends with
    /// the [`end`](crate::primitives::end) primitive.
    pub fn parse(&self, input: &[I]) -> Result<R, ParseError<E>> {
        self.parse_with(input, ParseConfig::default())
    }

    /// Runs the parse behavior over `input` with an explicit configuration.
    pub fn parse_with(&self, input: &[I], config: ParseConfig) -> Result<R, ParseError<E>> {
        let mut cursor = Cursor::new(input, config);
        (self.parser)(&mut cursor)
    }

    /// Runs the print behavior over `value`, writing to `target`.
    ///
    /// Printing never partially recovers: the first failing sub-printer
    /// aborts the invocation, and the sink may have received a prefix of
    /// the output.
    pub fn print(&self, value: &V, target: &mut dyn Target<O>) -> Result<(), E> {
        (self.printer)(value, target)
    }
}

impl<E, I, O> Syntax<E, I, O, (), ()>
where
    E: Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
{
    /// Concatenates this unit syntax with a following one, keeping the
    /// right side's result.
    ///
    /// The mirror image of [`zip_left`](Self::zip_left): the discarded
    /// position is on the left, so it is this syntax that must be unit.
    pub fn zip_right<V2, R2>(self, that: Syntax<E, I, O, V2, R2>) -> Syntax<E, I, O, V2, R2>
    where
        V2: Send + Sync + 'static,
        R2: Send + Sync + 'static,
    {
        let (mode, pa, qa) = (self.mode, self.parser, self.printer);
        let (pb, qb) = (that.parser, that.printer);
        Syntax::with_parts(
            mode,
            parse_fn(move |cursor| {
                (pa)(cursor)?;
                (pb)(cursor)
            }),
            print_fn(move |value, target| {
                (qa)(&(), target)?;
                (qb)(value, target)
            }),
        )
    }
}

impl<E, I, O, T> Syntax<E, I, O, T, T>
where
    E: Clone + Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    /// Accepts only values satisfying `condition`, in both directions.
    ///
    /// Parsing succeeds with `v` iff `condition(v)`; printing refuses a
    /// value failing `condition` before producing any output. The same
    /// predicate and failure value guard both paths, which is what keeps
    /// the two directions consistent.
    pub fn filter(self, condition: impl Fn(&T) -> bool + Send + Sync + 'static, failure: E) -> Self {
        let condition = Arc::new(condition);
        let parse_condition = condition.clone();
        let print_failure = failure.clone();
        let (mode, parser, printer) = (self.mode, self.parser, self.printer);
        Self::with_parts(
            mode,
            parse_fn(move |cursor| {
                let result = (parser)(cursor)?;
                if parse_condition(&result) {
                    Ok(result)
                } else {
                    Err(ParseError::failure(failure.clone(), cursor.pos()))
                }
            }),
            print_fn(move |value, target| {
                if condition(value) {
                    (printer)(value, target)
                } else {
                    Err(print_failure.clone())
                }
            }),
        )
    }
}

impl<I, O, V, R> Syntax<Infallible, I, O, V, R>
where
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
    V: Send + Sync + 'static,
    R: Send + Sync + 'static,
{
    /// Widens an infallible syntax into any error type.
    ///
    /// Domain failures cannot occur (`Infallible` admits no values), so the
    /// conversion is free.
    pub fn never_fails<E>(self) -> Syntax<E, I, O, V, R>
    where
        E: Send + Sync + 'static,
    {
        self.map_error(|never| match never {})
    }
}

impl<E, O, V, R> Syntax<E, char, O, V, R>
where
    E: Send + Sync + 'static,
    O: Send + Sync + 'static,
    V: Send + Sync + 'static,
    R: Send + Sync + 'static,
{
    /// Parses a string with the default configuration.
    ///
    /// Positions in reported errors are character indices, not byte
    /// offsets.
    pub fn parse_str(&self, input: &str) -> Result<R, ParseError<E>> {
        self.parse_str_with(input, ParseConfig::default())
    }

    /// Parses a string with an explicit configuration.
    pub fn parse_str_with(&self, input: &str, config: ParseConfig) -> Result<R, ParseError<E>> {
        let chars: Vec<char> = input.chars().collect();
        self.parse_with(&chars, config)
    }
}

impl<E, I, V, R> Syntax<E, I, char, V, R>
where
    E: Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
    R: Send + Sync + 'static,
{
    /// Prints `value` into a fresh string.
    pub fn print_string(&self, value: &V) -> Result<String, E> {
        let mut target = StringTarget::new();
        self.print(value, &mut target)?;
        Ok(target.into_string())
    }

    /// Prints `value` into a string with ANSI styling for named regions.
    ///
    /// The style lookup annotates display only; the logical character
    /// content is identical to [`print_string`](Self::print_string).
    pub fn print_string_styled(&self, value: &V, styles: &StyleSheet) -> Result<String, E> {
        let mut target = StyledStringTarget::new(styles.clone());
        self.print(value, &mut target)?;
        Ok(target.into_string())
    }
}
