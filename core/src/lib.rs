pub mod config;
mod cursor;
mod error;
pub mod pattern;
pub mod primitives;
mod repeat;
mod syntax;
mod target;

pub use config::{ParseConfig, Strategy};
pub use cursor::{Backtrack, Cursor};
pub use error::{ErrorKind, ParseError};
pub use pattern::{MatchOutcome, Matcher, Pattern};
pub use syntax::{Either, Syntax};
pub use target::{
    Color, ColorSpec, StringTarget, StyleSheet, StyledStringTarget, Target, VecTarget,
};
