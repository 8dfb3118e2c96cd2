// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Password Rules Contributors

//! # password-rules
//!
//! Parser for the password rules mini-language.
//!
//! Sites publish their password composition policy as a short string such as
//! `minlength: 8; maxlength: 32; required: upper; required: [!@#];`. This
//! crate turns such strings into typed policies a password generator can
//! consume:
//!
//! - **Rules**: tokenizer, character classes and the tolerant interpreter
//! - **Quirks**: per-domain rule collections loaded from JSON or TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use password_rules::Rule;
//!
//! let rule = Rule::parse("minlength: 8; maxlength: 2; required: digit;");
//! assert_eq!(rule.max_length(), Some(4));
//! assert_eq!(rule.min_length(), Some(4));
//! ```
//!
//! ## Architecture
//!
//! This facade crate re-exports the following modules:
//!
//! - [`rules`] - Rule language (from `core-rules`, `no_std`)
//! - [`quirks`] - Per-domain collections (from `app-utils`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Rule language module.
///
/// Re-exports `core_rules` for tokenizing and interpreting rule strings.
pub mod rules {
    pub use core_rules::*;
}

/// Quirks module.
///
/// Re-exports `app_utils` for loading per-domain rule collections.
pub mod quirks {
    pub use app_utils::*;
}

// Convenience re-exports at root level
pub use app_utils::Quirks;
pub use core_rules::{CharacterClass, Period, Rule};
