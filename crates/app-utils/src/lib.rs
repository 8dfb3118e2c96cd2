//! # app-utils
//!
//! Utility modules for loading password rule collections.
//!
//! This crate provides non-core features:
//! - Quirks documents (JSON and TOML) mapping domains to rule strings
//! - Parent-domain lookup over an interpreted collection
//!
//! The rule language itself lives in `core-rules`, which stays `no_std`.

#![forbid(unsafe_code)]

pub mod error;
pub mod quirks;

pub mod parser {
    //! Quirks document parsing
    use crate::error::Result;
    use crate::quirks::{Quirks, QuirksDocument};

    /// Trait for quirks parsers (one per document format)
    pub trait QuirksParser {
        /// Parse and interpret a quirks document
        fn parse(&self, input: &str) -> Result<Quirks>;
    }

    /// JSON parser implementation
    #[derive(Debug, Clone, Copy, Default)]
    pub struct JsonQuirksParser;

    impl QuirksParser for JsonQuirksParser {
        fn parse(&self, input: &str) -> Result<Quirks> {
            let document: QuirksDocument = serde_json::from_str(input)?;
            Quirks::from_document(document)
        }
    }

    /// TOML parser implementation
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TomlQuirksParser;

    impl QuirksParser for TomlQuirksParser {
        fn parse(&self, input: &str) -> Result<Quirks> {
            let document: QuirksDocument = toml::from_str(input)?;
            Quirks::from_document(document)
        }
    }
}

/// Re-export commonly used types
pub use error::{Error, Result};
pub use parser::{JsonQuirksParser, QuirksParser, TomlQuirksParser};
pub use quirks::{normalize_domain, QuirkEntry, Quirks, QuirksDocument, SiteRule};
