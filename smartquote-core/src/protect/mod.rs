//! Inline span protection
//!
//! [`SpanProtector`] swaps every match of a recognizer for an opaque
//! placeholder token and records the original text in an arena indexed by
//! the token number. After conversion, [`SpanProtector::restore`] puts the
//! recorded text back. A span captured by a later pattern can contain tokens
//! of an earlier one, so restoration repeats until the text stops changing.
//!
//! A token is `U+E000`, the decimal arena index, then `U+E001`. Private-use
//! code points are neither letters nor quote characters, so tokens never
//! affect apostrophe detection next to them.
//!
//! Input may already contain the marker characters. [`escape_markers`]
//! rewrites each of them into a non-numeric sequence before protection and
//! [`unescape_markers`] reverses that after restoration, so literal text can
//! never be mistaken for a token.

pub mod patterns;

use crate::error::{CoreError, Result};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

pub use patterns::InlinePattern;

/// First character of a placeholder token
pub const PLACEHOLDER_PREFIX: char = '\u{E000}';
/// Last character of a placeholder token
pub const PLACEHOLDER_SUFFIX: char = '\u{E001}';
/// Default bound on restoration passes
pub const DEFAULT_MAX_RESTORE_PASSES: usize = 32;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}([0-9]+)\x{E001}").unwrap());

static ESCAPED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}([ps])\x{E001}").unwrap());

const ESCAPED_PREFIX: &str = "\u{E000}p\u{E001}";
const ESCAPED_SUFFIX: &str = "\u{E000}s\u{E001}";

fn is_marker(ch: char) -> bool {
    ch == PLACEHOLDER_PREFIX || ch == PLACEHOLDER_SUFFIX
}

/// Rewrite literal marker characters so no token can be read out of them
pub fn escape_markers(text: &str) -> Cow<'_, str> {
    if !text.contains(is_marker) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            PLACEHOLDER_PREFIX => escaped.push_str(ESCAPED_PREFIX),
            PLACEHOLDER_SUFFIX => escaped.push_str(ESCAPED_SUFFIX),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Inverse of [`escape_markers`], applied once after restoration
pub fn unescape_markers(text: &str) -> Cow<'_, str> {
    if !text.contains(PLACEHOLDER_PREFIX) {
        return Cow::Borrowed(text);
    }

    ESCAPED_MARKER.replace_all(text, |caps: &Captures| {
        if &caps[1] == "p" {
            PLACEHOLDER_PREFIX.to_string()
        } else {
            PLACEHOLDER_SUFFIX.to_string()
        }
    })
}

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}{PLACEHOLDER_SUFFIX}")
}

/// Per-line arena of protected spans
#[derive(Debug, Clone)]
pub struct SpanProtector {
    segments: Vec<String>,
    max_restore_passes: usize,
}

impl Default for SpanProtector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanProtector {
    pub fn new() -> Self {
        Self::with_max_restore_passes(DEFAULT_MAX_RESTORE_PASSES)
    }

    pub fn with_max_restore_passes(max_restore_passes: usize) -> Self {
        Self {
            segments: Vec::new(),
            max_restore_passes,
        }
    }

    /// Forget all recorded segments
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    /// Number of recorded segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Recorded segments in capture order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Replace every match of `pattern` with a placeholder token
    pub fn protect(&mut self, text: &str, pattern: &Regex) -> String {
        let segments = &mut self.segments;
        pattern
            .replace_all(text, |caps: &Captures| {
                let index = segments.len();
                segments.push(caps[0].to_string());
                placeholder(index)
            })
            .into_owned()
    }

    /// Apply `patterns` in order, each pass over the previous pass's output
    pub fn protect_all(&mut self, text: &str, patterns: &[InlinePattern]) -> String {
        let mut current = text.to_string();
        for pattern in patterns {
            let before = self.segments.len();
            current = self.protect(&current, pattern.regex());
            if self.segments.len() > before {
                log::trace!(
                    "protected {} {} span(s)",
                    self.segments.len() - before,
                    pattern.name()
                );
            }
        }
        current
    }

    /// Substitute placeholder tokens until the text reaches a fixed point
    ///
    /// Tokens whose index has no recorded segment are left as they are.
    /// Fails if the text still changes after the configured number of passes.
    pub fn restore(&self, text: &str) -> Result<String> {
        let mut current = text.to_string();

        for _ in 0..self.max_restore_passes {
            let next = self.substitute_once(&current).into_owned();
            if next == current {
                return Ok(current);
            }
            current = next;
        }

        if self.substitute_once(&current) == current.as_str() {
            Ok(current)
        } else {
            Err(CoreError::RestoreLimitExceeded {
                passes: self.max_restore_passes,
            })
        }
    }

    fn substitute_once<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !text.contains(PLACEHOLDER_PREFIX) {
            return Cow::Borrowed(text);
        }

        PLACEHOLDER.replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| self.segments.get(index))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
    }
}
