//! Error types for core-rules
//!
//! `Rule::parse` never fails; these errors surface only from the strict
//! entry points (`CharacterClass::parse`, `Period::parse`, `RuleBuilder::build`).

use alloc::string::String;
use core::fmt;

/// Result type alias for rule operations
pub type Result<T> = core::result::Result<T, RuleError>;

/// Errors that can occur when constructing rule components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Value is neither a named class nor a bracket expression
    InvalidCharacterClass(String),

    /// Value does not match `<digits>-<unit>`
    InvalidPeriod(String),

    // ===== Builder Invariant Errors =====
    /// Maximum length below the floor accepted by password managers
    MaxLengthTooSmall {
        /// Smallest accepted maximum length
        min: u32,
        /// Requested maximum length
        actual: u32,
    },

    /// Minimum length exceeds maximum length
    LengthRangeInverted {
        /// Requested minimum length
        min_length: i32,
        /// Requested maximum length
        max_length: u32,
    },

    /// `max-consecutive` must be at least 1
    InvalidMaxConsecutive(u32),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacterClass(spec) => {
                write!(f, "Invalid character class: '{}'", spec)
            }
            Self::InvalidPeriod(value) => write!(
                f,
                "Invalid period '{}': expected <amount>-<days|weeks|months|years>",
                value
            ),
            Self::MaxLengthTooSmall { min, actual } => write!(
                f,
                "Maximum length {} is below the minimum accepted value of {}",
                actual, min
            ),
            Self::LengthRangeInverted {
                min_length,
                max_length,
            } => write!(
                f,
                "Minimum length {} exceeds maximum length {}",
                min_length, max_length
            ),
            Self::InvalidMaxConsecutive(value) => {
                write!(f, "max-consecutive must be at least 1 (got: {})", value)
            }
        }
    }
}

impl core::error::Error for RuleError {}
