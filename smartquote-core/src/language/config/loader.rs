use super::types::{MarkerConfig, MarkerVocabulary};
use crate::error::{CoreError, Result};
use std::sync::OnceLock;

static EMBEDDED_VOCABULARY: OnceLock<MarkerVocabulary> = OnceLock::new();

macro_rules! embed_marker_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const GERMAN_CONFIG: (&str, &str) =
    embed_marker_config!("de", "../../../configs/languages/german.toml");
const ENGLISH_CONFIG: (&str, &str) =
    embed_marker_config!("en", "../../../configs/languages/english.toml");

/// Parse one vocabulary file and check it belongs to `expected_code`
pub fn parse_vocabulary_file(expected_code: &str, toml_content: &str) -> Result<MarkerConfig> {
    let config: MarkerConfig = toml::from_str(toml_content).map_err(|e| {
        CoreError::Configuration(format!("Failed to parse {expected_code} markers: {e}"))
    })?;

    if config.metadata.code != expected_code {
        return Err(CoreError::Configuration(format!(
            "Marker config code mismatch: expected {}, got {}",
            expected_code, config.metadata.code
        )));
    }

    if config.markers.words.is_empty() {
        return Err(CoreError::Configuration(format!(
            "Marker config for {expected_code} has no words"
        )));
    }

    Ok(config)
}

fn load_embedded_vocabulary() -> Result<MarkerVocabulary> {
    let german = parse_vocabulary_file(GERMAN_CONFIG.0, GERMAN_CONFIG.1)?;
    let english = parse_vocabulary_file(ENGLISH_CONFIG.0, ENGLISH_CONFIG.1)?;

    Ok(MarkerVocabulary::new(
        german.markers.words,
        english.markers.words,
    ))
}

/// The built-in marker vocabulary, parsed once and cached
pub fn embedded_vocabulary() -> Result<&'static MarkerVocabulary> {
    if let Some(vocabulary) = EMBEDDED_VOCABULARY.get() {
        return Ok(vocabulary);
    }

    let vocabulary = load_embedded_vocabulary()?;
    Ok(EMBEDDED_VOCABULARY.get_or_init(|| vocabulary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_vocabulary_loads() {
        let vocabulary = embedded_vocabulary().expect("embedded markers should parse");
        assert!(vocabulary.german_len() > 0);
        assert!(vocabulary.english_len() > 0);
        assert!(vocabulary.is_german_marker("und"));
        assert!(vocabulary.is_english_marker("the"));
    }

    #[test]
    fn test_embedded_vocabulary_is_cached() {
        let first = embedded_vocabulary().unwrap();
        let second = embedded_vocabulary().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_marker_sets_do_not_overlap() {
        let german = parse_vocabulary_file(GERMAN_CONFIG.0, GERMAN_CONFIG.1).unwrap();
        let english = parse_vocabulary_file(ENGLISH_CONFIG.0, ENGLISH_CONFIG.1).unwrap();

        for word in &german.markers.words {
            assert!(
                !english.markers.words.contains(word),
                "'{word}' is listed for both languages"
            );
        }
    }

    #[test]
    fn test_config_code_mismatch() {
        let content = r#"
[metadata]
code = "en"
name = "English"

[markers]
words = ["the"]
"#;
        match parse_vocabulary_file("de", content) {
            Err(CoreError::Configuration(msg)) => assert!(msg.contains("mismatch")),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let content = r#"
[metadata]
code = "de"
name = "German"

[markers]
words = []
"#;
        assert!(matches!(
            parse_vocabulary_file("de", content),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        match parse_vocabulary_file("de", "[metadata\ncode = ") {
            Err(CoreError::Configuration(msg)) => assert!(msg.contains("Failed to parse de")),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_vocabulary_lowercases_words() {
        let vocabulary = MarkerVocabulary::new(["Und"], ["The"]);
        assert!(vocabulary.is_german_marker("und"));
        assert!(vocabulary.is_english_marker("the"));
        assert!(!vocabulary.is_english_marker("The"));
    }
}
