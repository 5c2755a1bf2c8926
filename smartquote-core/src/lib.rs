//! Typographic quotation marks for German and English prose
//!
//! This crate converts straight `"` and `'` characters in prose into the
//! quotation glyphs of the document's language, leaving technical syntax
//! untouched: frontmatter, fenced code blocks, code spans, templating tags,
//! markup attributes and link targets.
//!
//! # Architecture
//!
//! - [`block`]: whole-line protection (frontmatter, code fences)
//! - [`language`]: language enum, glyph tables and detection
//! - [`protect`]: placeholder substitution for inline technical spans
//! - [`toggle`]: the open/close toggling of straight quotes
//! - [`processor`]: per-document orchestration
//!
//! # Example
//!
//! ```rust
//! use smartquote_core::process_document;
//!
//! let converted = process_document(r#"Sie sagte: "Das ist wichtig.""#).unwrap();
//! assert_eq!(converted, "Sie sagte: „Das ist wichtig.“");
//!
//! let link = r#"[test](https://example.com "title")"#;
//! assert_eq!(process_document(link).unwrap(), link);
//! ```

pub mod block;
pub mod error;
pub mod language;
pub mod processor;
pub mod protect;
pub mod toggle;

pub use block::{BlockKind, ProtectedLines, ProtectedRange};
pub use error::{CoreError, Result};
pub use language::{
    detect_language, Detection, DetectionSource, Language, LanguageDetector, MarkerVocabulary,
    QuoteStyle,
};
pub use processor::{process_document, Config, ConfigBuilder, ConversionStats, Output, QuoteProcessor};
pub use protect::{InlinePattern, SpanProtector};
pub use toggle::{convert_quotes, normalize_quotes, ToggleState};
