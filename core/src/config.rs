//! Parse configuration: execution strategy and resource limits.
//!
//! [`ParseConfig`] selects the cursor [`Strategy`] for one invocation and
//! bounds how deep deferred (self-referential) syntaxes may nest.
//!
//! # Recursion limits
//!
//! Following the pattern established by `serde_json`, parse drivers enforce
//! a maximum nesting depth for deferred syntaxes so malicious or malformed
//! input cannot overflow the stack. The default limit of 128 balances
//! security with practical grammars.

use crate::error::{ErrorKind, ParseError};

/// How the cursor walks the input during one parse invocation.
///
/// Both strategies are observably equivalent: same success/failure outcome,
/// same final consumed position. They differ only in how elements are
/// materialized for inspection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Index directly into the input slice.
    #[default]
    Slice,
    /// Pull elements through an internal buffer on demand.
    ///
    /// Elements are copied into the buffer the first time a position is
    /// inspected, so backtracking re-reads never touch the source twice.
    Buffered,
}

/// Configuration for one parse invocation.
///
/// | Setting | Default |
/// |---------|---------|
/// | `strategy` | `Strategy::Slice` |
/// | `max_recursion_depth` | 128 |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// The cursor strategy to run with.
    pub strategy: Strategy,

    /// Maximum nesting depth for deferred syntaxes.
    ///
    /// Each entry into a [`defer`](crate::Syntax::defer)red syntax
    /// increments a depth counter; exceeding this limit fails the parse
    /// with [`ErrorKind::RecursionLimitExceeded`].
    pub max_recursion_depth: usize,
}

impl Default for ParseConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParseConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        strategy: Strategy::Slice,
        max_recursion_depth: 128,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the cursor strategy.
    #[inline]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the maximum deferred-syntax nesting depth.
    ///
    /// Use `usize::MAX` to disable the limit.
    #[inline]
    pub const fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Disables the recursion limit.
    ///
    /// # Warning
    ///
    /// Only use this when parsing trusted input. Untrusted deeply-nested
    /// input can overflow the stack.
    #[inline]
    pub const fn disable_recursion_limit(self) -> Self {
        self.with_max_recursion_depth(usize::MAX)
    }
}

/// Tracks deferred-syntax nesting depth during one invocation.
///
/// Owned by the invocation's cursor; never shared between invocations.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RecursionGuard {
    depth: usize,
}

impl RecursionGuard {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Enter a nested context, incrementing depth.
    ///
    /// Fails with `RecursionLimitExceeded` if the new depth would exceed
    /// `limit`. The error position is supplied by the caller.
    #[inline]
    pub(crate) fn enter<E>(&mut self, limit: usize, position: usize) -> Result<(), ParseError<E>> {
        self.depth = self.depth.saturating_add(1);
        if self.depth > limit {
            Err(ParseError::new(
                ErrorKind::RecursionLimitExceeded {
                    depth: self.depth,
                    limit,
                },
                position,
            ))
        } else {
            Ok(())
        }
    }

    /// Exit a nested context. Saturates so extra exits don't underflow.
    #[inline]
    pub(crate) fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
