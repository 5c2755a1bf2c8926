//! Document orchestration
//!
//! One [`QuoteProcessor::process`] call handles one document: classify
//! protected lines, detect the language, then fold every unprotected line
//! through protect → toggle → restore with a single [`ToggleState`].
//! All state is local to the call, so documents can be processed
//! concurrently with a shared processor.

use crate::block::ProtectedLines;
use crate::error::{CoreError, Result};
use crate::language::{DetectionSource, Language, LanguageDetector, MarkerVocabulary};
use crate::protect::{
    escape_markers, unescape_markers, InlinePattern, SpanProtector, DEFAULT_MAX_RESTORE_PASSES,
};
use crate::toggle::{convert_quotes, ToggleState};
use serde::Serialize;

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    language: Option<Language>,
    max_restore_passes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            max_restore_passes: DEFAULT_MAX_RESTORE_PASSES,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Forced language, if any
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn max_restore_passes(&self) -> usize {
        self.max_restore_passes
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Force a language, skipping frontmatter and heuristic detection
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = Some(language);
        self
    }

    /// Force a language if `Some`, detect otherwise
    pub fn language_opt(mut self, language: Option<Language>) -> Self {
        self.config.language = language;
        self
    }

    /// Bound on placeholder restoration passes per line
    pub fn max_restore_passes(mut self, passes: usize) -> Self {
        self.config.max_restore_passes = passes;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.max_restore_passes == 0 {
            return Err(CoreError::Configuration(
                "max_restore_passes must be greater than 0".to_string(),
            ));
        }

        Ok(self.config)
    }
}

/// Line counts for one processed document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub total_lines: usize,
    pub protected_lines: usize,
    pub changed_lines: usize,
}

/// Result of processing one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Converted document
    pub text: String,
    pub language: Language,
    pub source: DetectionSource,
    pub stats: ConversionStats,
    /// Toggle state after the last line was both open
    pub balanced: bool,
}

impl Output {
    pub fn is_changed(&self) -> bool {
        self.stats.changed_lines > 0
    }
}

/// Quote converter for whole documents
#[derive(Debug, Clone)]
pub struct QuoteProcessor<'v> {
    detector: LanguageDetector<'v>,
    config: Config,
}

impl QuoteProcessor<'static> {
    /// Processor with default configuration and the built-in vocabulary
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Processor with custom configuration and the built-in vocabulary
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            detector: LanguageDetector::embedded()?,
            config,
        })
    }
}

impl<'v> QuoteProcessor<'v> {
    /// Processor with a caller supplied marker vocabulary
    pub fn with_vocabulary(vocabulary: &'v MarkerVocabulary, config: Config) -> Self {
        Self {
            detector: LanguageDetector::new(vocabulary),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert one document
    pub fn process(&self, text: &str) -> Result<Output> {
        let lines: Vec<&str> = text.split('\n').collect();
        let protected = ProtectedLines::classify(&lines);

        for range in protected.ranges().iter().filter(|r| !r.is_terminated()) {
            log::warn!(
                "unterminated {:?} starting at line {} protects to end of document",
                range.kind,
                range.start + 1
            );
        }
        log::debug!("protected ranges: {:?}", protected.ranges());

        let (language, source) = match self.config.language {
            Some(language) => (language, DetectionSource::Forced),
            None => {
                let detection = self.detector.detect(text);
                (detection.language, detection.source)
            }
        };
        log::debug!("language {} ({:?})", language.code(), source);

        let style = language.quote_style();
        let mut state = ToggleState::new();
        let mut protector = SpanProtector::with_max_restore_passes(self.config.max_restore_passes);
        let mut stats = ConversionStats {
            total_lines: lines.len(),
            ..ConversionStats::default()
        };
        let mut converted = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            if protected.is_protected(index) {
                stats.protected_lines += 1;
                converted.push((*line).to_string());
                continue;
            }

            protector.reset();
            let escaped = escape_markers(line);
            let masked = protector.protect_all(&escaped, &InlinePattern::ORDER);
            let toggled = convert_quotes(&masked, &mut state, style);
            let restored = unescape_markers(&protector.restore(&toggled)?).into_owned();

            if restored != *line {
                stats.changed_lines += 1;
            }
            converted.push(restored);
        }

        let balanced = state.is_balanced();
        if !balanced {
            log::warn!("document ends inside a quotation: {:?}", state);
        }

        Ok(Output {
            text: converted.join("\n"),
            language,
            source,
            stats,
            balanced,
        })
    }
}

/// Convert one document with default settings
pub fn process_document(text: &str) -> Result<String> {
    Ok(QuoteProcessor::new()?.process(text)?.text)
}
