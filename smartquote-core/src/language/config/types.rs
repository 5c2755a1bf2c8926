use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub metadata: MetadataConfig,
    pub markers: MarkersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkersConfig {
    pub words: Vec<String>,
}

/// Marker word sets for the two supported languages
///
/// Words are stored lowercase; lookups expect lowercase tokens.
#[derive(Debug, Clone, Default)]
pub struct MarkerVocabulary {
    german: HashSet<String>,
    english: HashSet<String>,
}

impl MarkerVocabulary {
    /// Build a vocabulary from explicit word lists
    pub fn new<G, E, S>(german: G, english: E) -> Self
    where
        G: IntoIterator<Item = S>,
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            german: german
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            english: english
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_german_marker(&self, word: &str) -> bool {
        self.german.contains(word)
    }

    pub fn is_english_marker(&self, word: &str) -> bool {
        self.english.contains(word)
    }

    pub fn german_len(&self) -> usize {
        self.german.len()
    }

    pub fn english_len(&self) -> usize {
        self.english.len()
    }
}
