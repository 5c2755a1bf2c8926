//! Languages and their quotation conventions
//!
//! A document is converted with exactly one [`Language`], chosen once by the
//! [`detector`] and never re-evaluated mid-file. Each language maps to a
//! fixed [`QuoteStyle`].

pub mod config;
pub mod detector;

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use config::{embedded_vocabulary, MarkerVocabulary};
pub use detector::{detect_language, Detection, DetectionSource, LanguageDetector};

/// Supported prose languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German conventions: „…“ and ‚…‘
    German,
    /// English conventions: “…” and ‘…’
    English,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 2] = [Language::German, Language::English];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Language::German => "German",
            Language::English => "English",
        }
    }

    /// Parse a language code or name (`de`, `german`, `en`, `english`)
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" | "german" | "deutsch" => Ok(Language::German),
            "en" | "english" => Ok(Language::English),
            _ => Err(CoreError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Quotation glyphs for this language
    pub fn quote_style(&self) -> &'static QuoteStyle {
        QuoteStyle::for_language(*self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four typographic glyphs used by one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteStyle {
    /// Opening double quotation mark
    pub open_double: char,
    /// Closing double quotation mark
    pub close_double: char,
    /// Opening single quotation mark
    pub open_single: char,
    /// Closing single quotation mark
    pub close_single: char,
}

/// „ “ ‚ ‘
pub const GERMAN_STYLE: QuoteStyle = QuoteStyle {
    open_double: '\u{201E}',
    close_double: '\u{201C}',
    open_single: '\u{201A}',
    close_single: '\u{2018}',
};

/// “ ” ‘ ’
pub const ENGLISH_STYLE: QuoteStyle = QuoteStyle {
    open_double: '\u{201C}',
    close_double: '\u{201D}',
    open_single: '\u{2018}',
    close_single: '\u{2019}',
};

impl QuoteStyle {
    /// Look up the constant style table
    pub fn for_language(language: Language) -> &'static QuoteStyle {
        match language {
            Language::German => &GERMAN_STYLE,
            Language::English => &ENGLISH_STYLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::German.code(), "de");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_from_code_accepts_codes_and_names() {
        assert_eq!(Language::from_code("de").unwrap(), Language::German);
        assert_eq!(Language::from_code("German").unwrap(), Language::German);
        assert_eq!(Language::from_code(" EN ").unwrap(), Language::English);
        assert_eq!(Language::from_code("english").unwrap(), Language::English);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        match Language::from_code("fr") {
            Err(CoreError::UnsupportedLanguage(code)) => assert_eq!(code, "fr"),
            other => panic!("Expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_german_style_glyphs() {
        let style = Language::German.quote_style();
        assert_eq!(style.open_double, '„');
        assert_eq!(style.close_double, '“');
        assert_eq!(style.open_single, '‚');
        assert_eq!(style.close_single, '‘');
    }

    #[test]
    fn test_english_style_glyphs() {
        let style = Language::English.quote_style();
        assert_eq!(style.open_double, '“');
        assert_eq!(style.close_double, '”');
        assert_eq!(style.open_single, '‘');
        assert_eq!(style.close_single, '’');
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Language::German.to_string(), "German");
        assert_eq!(format!("{}", Language::English), "English");
    }
}
