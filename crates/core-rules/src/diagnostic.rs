//! Diagnostics explaining best-effort interpretation decisions
//!
//! Rule interpretation never fails. Whenever a fragment of the input is
//! ignored, clamped, or adjusted, the interpreter records a [`Diagnostic`]
//! so tooling can show why the resulting rule looks the way it does.

use alloc::string::String;
use core::fmt;
use serde::Serialize;

/// A single interpretation decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Property name is not part of the language; ignored
    UnknownProperty {
        /// Lower-cased property name
        name: String,
    },

    /// Property is recognized but not interpreted (`allowed`)
    Unsupported {
        /// Lower-cased property name
        name: String,
    },

    /// Property requires exactly one value
    WrongValueCount {
        /// Property name
        property: String,
        /// Number of values supplied
        count: usize,
    },

    /// Value could not be interpreted for this property; ignored
    InvalidValue {
        /// Property name
        property: String,
        /// Offending raw value
        value: String,
    },

    /// `required` value is not a character class; dropped from the list
    InvalidCharacterClass {
        /// Offending raw value
        value: String,
    },

    /// `maxlength` below 4 was raised to 4
    MaxLengthClamped {
        /// Value as written
        from: i32,
    },

    /// `minlength` exceeded `maxlength` and was lowered to match it
    MinLengthLowered {
        /// Value as written
        from: i32,
        /// Resulting value
        to: i32,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty { name } => write!(f, "unknown property '{}' ignored", name),
            Self::Unsupported { name } => {
                write!(f, "property '{}' is not supported and was ignored", name)
            }
            Self::WrongValueCount { property, count } => write!(
                f,
                "property '{}' takes exactly one value (got: {})",
                property, count
            ),
            Self::InvalidValue { property, value } => {
                write!(f, "invalid value '{}' for property '{}'", value, property)
            }
            Self::InvalidCharacterClass { value } => {
                write!(f, "'{}' is not a character class", value)
            }
            Self::MaxLengthClamped { from } => write!(
                f,
                "maxlength {} raised to the minimum of {}",
                from,
                crate::MIN_MAX_LENGTH
            ),
            Self::MinLengthLowered { from, to } => {
                write!(f, "minlength {} lowered to maxlength {}", from, to)
            }
        }
    }
}
