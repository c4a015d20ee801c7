//! Structured parse errors.
//!
//! Every parse failure is reported as a [`ParseError`]: a kind (domain
//! payload or structural condition), the stream position at which the
//! failure occurred, and a chain of diagnostic labels collected from
//! [`named`](crate::Syntax::named) regions on the way out.
//!
//! Domain payloads are caller-supplied values of type `E`; the library never
//! invents them. Structural kinds originate in the engine itself and survive
//! [`map_error`](crate::Syntax::map_error) untouched.

use core::fmt;

/// What went wrong during a parse.
///
/// `Failure` carries a caller-supplied domain payload; all other variants
/// are structural and produced by the engine or by primitives.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind<E> {
    /// A caller-supplied failure value, attached via a `failure` parameter
    /// of a combinator or primitive.
    #[error("{0}")]
    Failure(E),

    /// The input ended while more elements were required.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// The element at the failure position did not match.
    #[error("expected {expected}")]
    Unexpected {
        /// Human-readable description of what was expected.
        expected: String,
    },

    /// A repetition produced fewer elements than its declared minimum.
    #[error("expected at least {min} occurrences, found {actual}")]
    UnmetMinimum {
        /// Required minimum number of elements.
        min: usize,
        /// Number of elements actually parsed.
        actual: usize,
    },

    /// The end-of-stream assertion failed: elements remain unconsumed.
    #[error("stream not fully consumed: {remaining} elements remaining")]
    NotConsumed {
        /// Number of remaining elements.
        remaining: usize,
    },

    /// Deferred-syntax nesting exceeded the configured limit.
    ///
    /// Input like `((((((...))))))` against a self-referential grammar would
    /// trigger this with the default limit of 128.
    #[error("recursion limit exceeded: depth {depth} > limit {limit}")]
    RecursionLimitExceeded {
        /// Depth when the limit was exceeded.
        depth: usize,
        /// Maximum allowed depth.
        limit: usize,
    },
}

/// A parse failure with its position and diagnostic context.
///
/// Supports equality so tests can assert on the full failure (payload,
/// position and context chain together).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError<E> {
    /// The failure kind.
    pub kind: ErrorKind<E>,
    /// Element index at which the failure occurred.
    pub position: usize,
    /// Diagnostic labels from enclosing `named` regions, innermost first.
    pub context: Vec<String>,
}

impl<E> ParseError<E> {
    /// A domain failure with the given payload at `position`.
    #[inline]
    pub fn failure(payload: E, position: usize) -> Self {
        Self::new(ErrorKind::Failure(payload), position)
    }

    /// A structural mismatch described by `expected` at `position`.
    #[inline]
    pub fn unexpected(expected: impl Into<String>, position: usize) -> Self {
        Self::new(
            ErrorKind::Unexpected {
                expected: expected.into(),
            },
            position,
        )
    }

    /// End of input reached at `position`.
    #[inline]
    pub fn unexpected_end(position: usize) -> Self {
        Self::new(ErrorKind::UnexpectedEnd, position)
    }

    /// Builds an error from a kind and a position with an empty context.
    #[inline]
    pub fn new(kind: ErrorKind<E>, position: usize) -> Self {
        Self {
            kind,
            position,
            context: Vec::new(),
        }
    }

    /// Pushes a diagnostic label onto the context chain.
    ///
    /// Labels accumulate innermost-first as the error propagates outward
    /// through `named` regions.
    #[inline]
    pub fn in_context(mut self, label: impl Into<String>) -> Self {
        self.context.push(label.into());
        self
    }

    /// Maps the domain payload, leaving structural kinds, the position and
    /// the context chain untouched.
    pub fn map_payload<E2>(self, f: impl FnOnce(E) -> E2) -> ParseError<E2> {
        let kind = match self.kind {
            ErrorKind::Failure(e) => ErrorKind::Failure(f(e)),
            ErrorKind::UnexpectedEnd => ErrorKind::UnexpectedEnd,
            ErrorKind::Unexpected { expected } => ErrorKind::Unexpected { expected },
            ErrorKind::UnmetMinimum { min, actual } => ErrorKind::UnmetMinimum { min, actual },
            ErrorKind::NotConsumed { remaining } => ErrorKind::NotConsumed { remaining },
            ErrorKind::RecursionLimitExceeded { depth, limit } => {
                ErrorKind::RecursionLimitExceeded { depth, limit }
            }
        };
        ParseError {
            kind,
            position: self.position,
            context: self.context,
        }
    }

    /// The domain payload, if this is a `Failure`.
    #[inline]
    pub fn payload(&self) -> Option<&E> {
        match &self.kind {
            ErrorKind::Failure(e) => Some(e),
            _ => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ParseError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)?;
        if !self.context.is_empty() {
            write!(f, " (in {})", self.context.join(" < "))?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for ParseError<E> {}
