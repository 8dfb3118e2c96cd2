// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Password Rules Contributors

//! # core-rules
//!
//! Interpreter for the password rules mini-language, with no dependencies on
//! I/O, the standard library, or a regex engine.
//!
//! A rule string such as
//!
//! ```text
//! minlength: 8; maxlength: 64; required: lower; required: upper, digit; max-consecutive: 2
//! ```
//!
//! is resolved in three stages:
//! - [`tokenizer`]: raw string to an ordered property multimap
//! - [`character_class`]: `required` values to concrete character sets
//! - [`rule`]: property map to the immutable [`Rule`] policy object
//!
//! Interpretation is best-effort and never fails. Malformed properties leave
//! their field unset; [`Rule::parse_with_diagnostics`] reports why.
//!
//! ## Quick Start
//!
//! ```
//! use core_rules::Rule;
//!
//! let rule = Rule::parse("minlength: 8; required: upper; required: digit; max-consecutive: 3");
//!
//! assert_eq!(rule.min_length(), Some(8));
//! assert_eq!(rule.max_consecutive(), Some(3));
//! assert_eq!(rule.required().unwrap().len(), 2);
//! ```
//!
//! ## Limits
//!
//! - MIN_MAX_LENGTH = 4; smaller `maxlength` values are raised to it

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod builder;
pub mod character_class;
pub mod diagnostic;
pub mod error;
pub mod period;
pub mod rule;
pub mod tokenizer;

pub use builder::RuleBuilder;
pub use character_class::{CharacterClass, Included, NamedClass};
pub use diagnostic::Diagnostic;
/// Re-export commonly used types
pub use error::{Result, RuleError};
pub use period::{Period, PeriodUnit};
pub use rule::Rule;
pub use tokenizer::{tokenize, PropertyMap};

/// Smallest `maxlength` accepted by password managers
pub const MIN_MAX_LENGTH: u32 = 4;
