//! Document language detection
//!
//! Detection runs once per document:
//! 1. A `lang: de` / `lang: en` line inside leading `---` frontmatter wins.
//! 2. Otherwise marker words from both vocabularies are counted and English
//!    is chosen only when its count is strictly higher. Ties and documents
//!    without any marker word fall back to German.

use super::config::{embedded_vocabulary, MarkerVocabulary};
use super::Language;
use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static FRONTMATTER_LANG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*lang:[ \t]*(de|en)[ \t]*\r?$").unwrap());

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zäöüß]+").unwrap());

/// How the language of a document was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetectionSource {
    /// Set by the caller, detection skipped
    Forced,
    /// `lang:` key in the frontmatter
    Frontmatter,
    /// Marker word counts
    Heuristic {
        /// German marker words found
        german: usize,
        /// English marker words found
        english: usize,
    },
}

/// Outcome of language detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    pub source: DetectionSource,
}

/// Language classifier over a fixed marker vocabulary
#[derive(Debug, Clone)]
pub struct LanguageDetector<'a> {
    vocabulary: &'a MarkerVocabulary,
}

impl LanguageDetector<'static> {
    /// Detector using the built-in vocabulary
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            vocabulary: embedded_vocabulary()?,
        })
    }
}

impl<'a> LanguageDetector<'a> {
    pub fn new(vocabulary: &'a MarkerVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn detect(&self, text: &str) -> Detection {
        if let Some(language) = frontmatter_language(text) {
            return Detection {
                language,
                source: DetectionSource::Frontmatter,
            };
        }

        let (german, english) = self.count_markers(text);
        let language = if english > german {
            Language::English
        } else {
            Language::German
        };

        Detection {
            language,
            source: DetectionSource::Heuristic { german, english },
        }
    }

    /// Count marker words as `(german, english)`
    pub fn count_markers(&self, text: &str) -> (usize, usize) {
        let lowered = text.to_lowercase();
        let mut german = 0;
        let mut english = 0;

        for word in WORD.find_iter(&lowered).map(|m| m.as_str()) {
            if self.vocabulary.is_german_marker(word) {
                german += 1;
            }
            if self.vocabulary.is_english_marker(word) {
                english += 1;
            }
        }

        (german, english)
    }
}

/// Detect a document's language with the built-in vocabulary
pub fn detect_language(text: &str) -> Result<Language> {
    Ok(LanguageDetector::embedded()?.detect(text).language)
}

/// Language declared in leading frontmatter, if any
///
/// The block must open on the first line and be closed by a later `---`
/// line; an unterminated block declares nothing.
pub fn frontmatter_language(text: &str) -> Option<Language> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.first()?.trim() != "---" {
        return None;
    }

    let close = lines.iter().skip(1).position(|l| l.trim() == "---")? + 1;
    let block = lines[1..close].join("\n");

    let captures = FRONTMATTER_LANG.captures(&block)?;
    match &captures[1] {
        "de" => Some(Language::German),
        "en" => Some(Language::English),
        _ => None,
    }
}
