//! Per-domain password rule collections
//!
//! Password managers share the rules of sites that reject generated
//! passwords in a "quirks" document keyed by domain:
//!
//! ```json
//! {
//!     "example.com": { "password-rules": "minlength: 8; required: digit;" }
//! }
//! ```
//!
//! Rules are interpreted once at load time; lookups return the resolved
//! [`Rule`] together with the diagnostics produced while interpreting it.

use crate::error::{Error, Result};
use crate::parser::{JsonQuirksParser, QuirksParser, TomlQuirksParser};
use core_rules::{Diagnostic, Rule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One entry of a quirks document, as written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuirkEntry {
    /// Raw rule string
    #[serde(rename = "password-rules")]
    pub password_rules: String,
}

/// Raw quirks document: domain to entry
pub type QuirksDocument = BTreeMap<String, QuirkEntry>;

/// A domain's interpreted rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRule {
    /// Normalized (lower-case) domain
    pub domain: String,
    /// Rule string as written in the document
    pub source: String,
    /// Interpreted rule
    pub rule: Rule,
    /// Adjustments made while interpreting `source`
    pub diagnostics: Vec<Diagnostic>,
}

/// Interpreted quirks document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quirks {
    sites: BTreeMap<String, SiteRule>,
}

impl Quirks {
    /// Interpret a raw document
    ///
    /// # Errors
    ///
    /// - `Error::InvalidDomain` if a key is empty or contains whitespace or `/`
    /// - `Error::DuplicateDomain` if two keys differ only in case
    pub fn from_document(document: QuirksDocument) -> Result<Self> {
        let mut sites = BTreeMap::new();

        for (key, entry) in document {
            let domain = normalize_domain(&key).ok_or_else(|| Error::InvalidDomain(key.clone()))?;
            if sites.contains_key(&domain) {
                return Err(Error::DuplicateDomain(domain));
            }

            let (rule, diagnostics) = Rule::parse_with_diagnostics(&entry.password_rules);
            if !diagnostics.is_empty() {
                tracing::debug!(
                    domain = %domain,
                    adjustments = diagnostics.len(),
                    "password rule interpreted with adjustments"
                );
            }

            sites.insert(
                domain.clone(),
                SiteRule {
                    domain,
                    source: entry.password_rules,
                    rule,
                    diagnostics,
                },
            );
        }

        Ok(Self { sites })
    }

    /// Load a quirks file, choosing the format by extension (`.json`, `.toml`)
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedFormat` for other extensions, `Error::Io` if
    /// the file cannot be read, and any error from the format's parser.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parser: &dyn QuirksParser = match extension.as_str() {
            "json" => &JsonQuirksParser,
            "toml" => &TomlQuirksParser,
            _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
        };

        let content = std::fs::read_to_string(path)?;
        let quirks = parser.parse(&content)?;
        tracing::debug!(path = %path.display(), sites = quirks.len(), "loaded quirks file");
        Ok(quirks)
    }

    /// Find the rule for `domain`, falling back to parent domains
    ///
    /// `login.example.com` matches an entry for `login.example.com` first,
    /// then `example.com`, then `com`.
    #[must_use]
    pub fn lookup(&self, domain: &str) -> Option<&SiteRule> {
        let mut candidate = normalize_domain(domain)?;

        loop {
            if let Some(site) = self.sites.get(&candidate) {
                return Some(site);
            }
            let (_, parent) = candidate.split_once('.')?;
            candidate = parent.to_string();
        }
    }

    /// Iterate sites in domain order
    pub fn iter(&self) -> impl Iterator<Item = &SiteRule> {
        self.sites.values()
    }

    /// Number of sites
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Check if the document had no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Convert back to a raw document with canonical rule strings
    #[must_use]
    pub fn to_document(&self) -> QuirksDocument {
        self.sites
            .iter()
            .map(|(domain, site)| {
                (
                    domain.clone(),
                    QuirkEntry {
                        password_rules: site.rule.to_string(),
                    },
                )
            })
            .collect()
    }
}

/// Normalize a domain the way [`Quirks::lookup`] does
///
/// Trims surrounding whitespace, drops a trailing root dot and lower-cases.
/// Returns `None` for names that cannot be domains (empty, inner whitespace,
/// `/`, empty labels).
///
/// ```
/// use app_utils::normalize_domain;
///
/// assert_eq!(normalize_domain(" Login.Example.COM. ").as_deref(), Some("login.example.com"));
/// assert_eq!(normalize_domain("example.com/login"), None);
/// ```
#[must_use]
pub fn normalize_domain(domain: &str) -> Option<String> {
    let domain = domain.trim().trim_end_matches('.');
    let valid = !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.contains("..")
        && !domain.chars().any(|c| c.is_whitespace() || c == '/');

    valid.then(|| domain.to_ascii_lowercase())
}
