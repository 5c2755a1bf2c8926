//! Quote toggling
//!
//! Every straight quote in unprotected text is turned into an opening or a
//! closing glyph depending on a per-kind toggle. The toggle lives for a whole
//! document, so a quotation may open on one line and close on a later one.
//! Balance is never checked: an odd count leaves every following quote of
//! that kind with flipped polarity.

use crate::language::QuoteStyle;
use serde::Serialize;

/// Open/close flags carried across the lines of one document
///
/// A flag is `true` while the next quote of that kind opens a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleState {
    pub double_quote_open: bool,
    pub single_quote_open: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleState {
    pub fn new() -> Self {
        Self {
            double_quote_open: true,
            single_quote_open: true,
        }
    }

    /// Both kinds are outside a quotation
    pub fn is_balanced(&self) -> bool {
        self.double_quote_open && self.single_quote_open
    }
}

/// Map typographic double quotes to `"` and single quotes to `'`
pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{00AB}' | '\u{00BB}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2039}' | '\u{203A}' => '\'',
            other => other,
        })
        .collect()
}

/// Letters that make a single quote between them an apostrophe
pub fn is_word_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü' | 'ß')
}

fn is_apostrophe(prev: Option<char>, next: Option<char>) -> bool {
    matches!((prev, next), (Some(p), Some(n)) if is_word_letter(p) && is_word_letter(n))
}

/// Convert the quotes of one line, updating `state`
pub fn convert_quotes(line: &str, state: &mut ToggleState, style: &QuoteStyle) -> String {
    let chars: Vec<char> = normalize_quotes(line).chars().collect();
    let mut converted = String::with_capacity(line.len() + chars.len());

    for (i, &ch) in chars.iter().enumerate() {
        match ch {
            '"' => {
                converted.push(if state.double_quote_open {
                    style.open_double
                } else {
                    style.close_double
                });
                state.double_quote_open = !state.double_quote_open;
            }
            '\'' => {
                let prev = i.checked_sub(1).map(|j| chars[j]);
                let next = chars.get(i + 1).copied();

                if is_apostrophe(prev, next) {
                    converted.push('\'');
                } else {
                    converted.push(if state.single_quote_open {
                        style.open_single
                    } else {
                        style.close_single
                    });
                    state.single_quote_open = !state.single_quote_open;
                }
            }
            other => converted.push(other),
        }
    }

    converted
}
