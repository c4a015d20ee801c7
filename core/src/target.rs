//! Output sinks for the print side.
//!
//! A [`Target`] accepts produced output elements one at a time. Sinks also
//! receive `enter_name`/`exit_name` notifications when printing passes
//! through a [`named`](crate::Syntax::named) region; the notifications are
//! display annotations only and default to no-ops.
//!
//! [`StyledStringTarget`] maps region names to ANSI styles through a
//! [`StyleSheet`] - the logical character content is unchanged, only escape
//! sequences are woven around styled regions.

use std::collections::HashMap;
use std::io::Write;

use termcolor::{Ansi, WriteColor};

pub use termcolor::{Color, ColorSpec};

/// Destination for printed output elements.
pub trait Target<O> {
    /// Accepts one produced element.
    fn push(&mut self, item: O);

    /// Called when printing enters a named region. Display-only.
    fn enter_name(&mut self, _name: &str) {}

    /// Called when printing leaves a named region. Display-only.
    fn exit_name(&mut self, _name: &str) {}
}

/// Collects produced elements into a vector.
#[derive(Debug, Clone, Default)]
pub struct VecTarget<O> {
    items: Vec<O>,
}

impl<O> VecTarget<O> {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Consumes the sink and returns the collected elements.
    #[inline]
    pub fn into_items(self) -> Vec<O> {
        self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<O> Target<O> for VecTarget<O> {
    #[inline]
    fn push(&mut self, item: O) {
        self.items.push(item);
    }
}

/// Character-specialized sink building a `String`.
#[derive(Debug, Clone, Default)]
pub struct StringTarget {
    buf: String,
}

impl StringTarget {
    #[inline]
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Consumes the sink and returns the built string.
    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Target<char> for StringTarget {
    #[inline]
    fn push(&mut self, item: char) {
        self.buf.push(item);
    }
}

/// Name-to-style lookup for annotated printing.
///
/// Names come from [`named`](crate::Syntax::named) regions; unmapped names
/// print unstyled.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, ColorSpec>,
}

impl StyleSheet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates a region name with a style.
    pub fn with(mut self, name: impl Into<String>, spec: ColorSpec) -> Self {
        self.styles.insert(name.into(), spec);
        self
    }

    /// The style for a region name, if any.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&ColorSpec> {
        self.styles.get(name)
    }
}

/// Character sink that weaves ANSI styling around named regions.
///
/// Nested styled regions restore the enclosing style on exit.
pub struct StyledStringTarget {
    writer: Ansi<Vec<u8>>,
    styles: StyleSheet,
    active: Vec<ColorSpec>,
}

impl StyledStringTarget {
    pub fn new(styles: StyleSheet) -> Self {
        Self {
            writer: Ansi::new(Vec::new()),
            styles,
            active: Vec::new(),
        }
    }

    /// Consumes the sink and returns the annotated string.
    pub fn into_string(self) -> String {
        // The writer only ever receives UTF-8 we produced ourselves.
        String::from_utf8_lossy(&self.writer.into_inner()).into_owned()
    }
}

impl Target<char> for StyledStringTarget {
    fn push(&mut self, item: char) {
        let mut utf8 = [0u8; 4];
        // Writes into a Vec cannot fail.
        let _ = self.writer.write_all(item.encode_utf8(&mut utf8).as_bytes());
    }

    fn enter_name(&mut self, name: &str) {
        if let Some(spec) = self.styles.get(name) {
            let spec = spec.clone();
            let _ = self.writer.set_color(&spec);
            self.active.push(spec);
        }
    }

    fn exit_name(&mut self, name: &str) {
        if self.styles.get(name).is_some() {
            self.active.pop();
            let _ = match self.active.last() {
                Some(outer) => self.writer.set_color(outer),
                None => self.writer.reset(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_target_collects_chars() {
        let mut target = StringTarget::new();
        for c in "abc".chars() {
            target.push(c);
        }
        assert_eq!(target.into_string(), "abc");
    }

    #[test]
    fn test_vec_target_collects_elements() {
        let mut target = VecTarget::new();
        target.push(1u8);
        target.push(2u8);
        assert_eq!(target.into_items(), vec![1, 2]);
    }

    #[test]
    fn test_styled_target_without_styles_is_plain() {
        let mut target = StyledStringTarget::new(StyleSheet::new());
        target.enter_name("number");
        target.push('4');
        target.push('2');
        target.exit_name("number");
        assert_eq!(target.into_string(), "42");
    }

    #[test]
    fn test_styled_target_wraps_named_region() {
        let styles = StyleSheet::new().with("number", {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Cyan));
            spec
        });
        let mut target = StyledStringTarget::new(styles);
        target.push('[');
        target.enter_name("number");
        target.push('7');
        target.exit_name("number");
        target.push(']');

        let out = target.into_string();
        assert!(out.contains('7'));
        assert!(out.contains("\x1b["), "expected ANSI escapes in {out:?}");
        assert!(out.starts_with('['), "unstyled prefix stays plain");
    }
}
