//! Password rule interpretation
//!
//! This module turns a tokenized rule string into a [`Rule`]: the resolved
//! composition policy that validators and generators consume.
//!
//! ## Properties
//!
//! | Property          | Values         | Resolution                                  |
//! |-------------------|----------------|---------------------------------------------|
//! | `minlength`       | exactly one    | integer                                     |
//! | `maxlength`       | exactly one    | integer, raised to at least 4               |
//! | `max-consecutive` | any, repeated  | smallest integer >= 1                       |
//! | `required`        | any, repeated  | one character class per value               |
//! | `x-expires-after` | exactly one    | `<amount>-<days\|weeks\|months\|years>`     |
//!
//! `allowed` is tokenized but not interpreted. Anything else is ignored.
//!
//! ## Partial Success
//!
//! A malformed property leaves its field unset; it never aborts the parse.
//! Use [`Rule::parse_with_diagnostics`] to find out what was dropped.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::builder::RuleBuilder;
use crate::character_class::CharacterClass;
use crate::diagnostic::Diagnostic;
use crate::error::RuleError;
use crate::period::Period;
use crate::tokenizer::{tokenize, PropertyMap};
use crate::MIN_MAX_LENGTH;

pub(crate) const MIN_LENGTH: &str = "minlength";
pub(crate) const MAX_LENGTH: &str = "maxlength";
pub(crate) const MAX_CONSECUTIVE: &str = "max-consecutive";
pub(crate) const REQUIRED: &str = "required";
pub(crate) const ALLOWED: &str = "allowed";
pub(crate) const EXPIRES_AFTER: &str = "x-expires-after";

/// A resolved password composition policy
///
/// Immutable once built. Every field is optional: an unset field means the
/// rule string did not (validly) constrain it.
///
/// # Example
///
/// ```
/// use core_rules::{Period, Rule};
///
/// let rule = Rule::parse("minlength: 10; maxlength: 4; required: upper; x-expires-after: 3-months");
///
/// assert_eq!(rule.max_length(), Some(4));
/// assert_eq!(rule.min_length(), Some(4));
/// assert_eq!(rule.required().map(|r| r.len()), Some(1));
/// assert_eq!(rule.expires_after(), Some(Period::months(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleFields")]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_consecutive: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expires_after: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) required: Option<Vec<CharacterClass>>,
}

impl Rule {
    /// Interpret a raw rule string
    ///
    /// Never fails; see the module documentation for how each property is
    /// resolved.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_diagnostics(raw).0
    }

    /// Interpret a raw rule string and report every best-effort decision
    ///
    /// # Example
    ///
    /// ```
    /// use core_rules::{Diagnostic, Rule};
    ///
    /// let (rule, diagnostics) = Rule::parse_with_diagnostics("required: upper, bogus; colour: red");
    ///
    /// assert_eq!(rule.required().map(|r| r.len()), Some(1));
    /// assert!(diagnostics.contains(&Diagnostic::UnknownProperty { name: "colour".into() }));
    /// ```
    #[must_use]
    pub fn parse_with_diagnostics(raw: &str) -> (Self, Vec<Diagnostic>) {
        let mut interpreter = Interpreter::default();
        let properties = tokenize(raw);
        let rule = interpreter.interpret(&properties);
        (rule, interpreter.diagnostics)
    }

    /// Start building a rule programmatically
    #[must_use]
    pub fn builder() -> RuleBuilder {
        RuleBuilder::new()
    }

    /// Minimum password length, in characters
    ///
    /// Kept as written, so a rule string may yield a negative value; it
    /// never exceeds `max_length` when both are set.
    #[must_use]
    pub const fn min_length(&self) -> Option<i32> {
        self.min_length
    }

    /// Maximum password length, in characters; at least 4 and at least
    /// `min_length` when set
    #[must_use]
    pub const fn max_length(&self) -> Option<u32> {
        self.max_length
    }

    /// Maximum run of identical consecutive characters; at least 1 when set
    #[must_use]
    pub const fn max_consecutive(&self) -> Option<u32> {
        self.max_consecutive
    }

    /// Period after which the password expires (non-standard extension)
    #[must_use]
    pub const fn expires_after(&self) -> Option<Period> {
        self.expires_after
    }

    /// Required character classes, in the order they were written
    ///
    /// Every class must be represented by at least one character. `Some`
    /// with an empty slice means `required` was present but none of its
    /// values were valid classes.
    #[must_use]
    pub fn required(&self) -> Option<&[CharacterClass]> {
        self.required.as_deref()
    }
}

#[derive(Debug, Default)]
struct Interpreter {
    diagnostics: Vec<Diagnostic>,
}

impl Interpreter {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, "password rule fragment adjusted");
        self.diagnostics.push(diagnostic);
    }

    fn interpret(&mut self, properties: &PropertyMap) -> Rule {
        let mut rule = Rule::default();

        for (name, values) in properties.iter() {
            match name {
                MIN_LENGTH => rule.min_length = self.min_length(values),
                MAX_LENGTH => rule.max_length = self.max_length(values),
                MAX_CONSECUTIVE => rule.max_consecutive = self.max_consecutive(values),
                REQUIRED => rule.required = Some(self.required(values)),
                EXPIRES_AFTER => rule.expires_after = self.expires_after(values),
                ALLOWED => self.report(Diagnostic::Unsupported { name: name.into() }),
                _ => self.report(Diagnostic::UnknownProperty { name: name.into() }),
            }
        }

        // A maximum beyond i32::MAX can never be below the minimum
        if let (Some(min), Some(Ok(max))) =
            (rule.min_length, rule.max_length.map(i32::try_from))
        {
            if min > max {
                self.report(Diagnostic::MinLengthLowered { from: min, to: max });
                rule.min_length = Some(max);
            }
        }

        rule
    }

    fn single_value<'v>(&mut self, property: &str, values: &'v [String]) -> Option<&'v str> {
        match values {
            [value] => Some(value.as_str()),
            _ => {
                self.report(Diagnostic::WrongValueCount {
                    property: property.into(),
                    count: values.len(),
                });
                None
            }
        }
    }

    fn invalid_value(&mut self, property: &str, value: &str) {
        self.report(Diagnostic::InvalidValue {
            property: property.into(),
            value: value.into(),
        });
    }

    fn min_length(&mut self, values: &[String]) -> Option<i32> {
        let value = self.single_value(MIN_LENGTH, values)?;
        let length = parse_integer(value);
        if length.is_none() {
            self.invalid_value(MIN_LENGTH, value);
        }
        length
    }

    fn max_length(&mut self, values: &[String]) -> Option<u32> {
        let value = self.single_value(MAX_LENGTH, values)?;
        let Some(length) = parse_integer(value) else {
            self.invalid_value(MAX_LENGTH, value);
            return None;
        };

        let floor = MIN_MAX_LENGTH as i32;
        if length < floor {
            self.report(Diagnostic::MaxLengthClamped { from: length });
        }
        Some(length.max(floor).unsigned_abs())
    }

    fn max_consecutive(&mut self, values: &[String]) -> Option<u32> {
        let mut smallest: Option<u32> = None;

        for value in values {
            let parsed = parse_integer(value)
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n >= 1);
            match parsed {
                Some(n) => smallest = Some(smallest.map_or(n, |s| s.min(n))),
                None => self.invalid_value(MAX_CONSECUTIVE, value),
            }
        }

        smallest
    }

    fn required(&mut self, values: &[String]) -> Vec<CharacterClass> {
        let mut classes = Vec::with_capacity(values.len());

        for value in values {
            match CharacterClass::try_parse(value) {
                Some(class) => classes.push(class),
                None => self.report(Diagnostic::InvalidCharacterClass {
                    value: value.clone(),
                }),
            }
        }

        classes
    }

    fn expires_after(&mut self, values: &[String]) -> Option<Period> {
        let value = self.single_value(EXPIRES_AFTER, values)?;
        let period = Period::parse(value).ok();
        if period.is_none() {
            self.invalid_value(EXPIRES_AFTER, value);
        }
        period
    }
}

/// Decimal 32-bit integer with optional sign
fn parse_integer(value: &str) -> Option<i32> {
    value.parse::<i32>().ok()
}

impl fmt::Display for Rule {
    /// Render the canonical rule string
    ///
    /// Re-parsing the output yields an equal rule, except that a present but
    /// empty `required` list is not representable and is omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        if let Some(min) = self.min_length {
            write_property(f, &mut first, MIN_LENGTH, min)?;
        }
        if let Some(max) = self.max_length {
            write_property(f, &mut first, MAX_LENGTH, max)?;
        }
        if let Some(consecutive) = self.max_consecutive {
            write_property(f, &mut first, MAX_CONSECUTIVE, consecutive)?;
        }
        for class in self.required.iter().flatten() {
            write_property(f, &mut first, REQUIRED, class)?;
        }
        if let Some(period) = self.expires_after {
            write_property(f, &mut first, EXPIRES_AFTER, period)?;
        }

        Ok(())
    }
}

fn write_property(
    f: &mut fmt::Formatter<'_>,
    first: &mut bool,
    name: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    if !core::mem::take(first) {
        f.write_str(" ")?;
    }
    write!(f, "{}: {};", name, value)
}

impl FromStr for Rule {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Self::parse(s))
    }
}

/// Deserialization mirror of [`Rule`]; converted through [`RuleBuilder`]
/// so deserialized rules obey the same invariants as built ones.
#[derive(Deserialize)]
struct RuleFields {
    #[serde(default)]
    min_length: Option<i32>,
    #[serde(default)]
    max_length: Option<u32>,
    #[serde(default)]
    max_consecutive: Option<u32>,
    #[serde(default)]
    expires_after: Option<Period>,
    #[serde(default)]
    required: Option<Vec<CharacterClass>>,
}

impl TryFrom<RuleFields> for Rule {
    type Error = RuleError;

    fn try_from(fields: RuleFields) -> Result<Self, RuleError> {
        let mut builder = RuleBuilder::new();
        if let Some(min) = fields.min_length {
            builder = builder.min_length(min);
        }
        if let Some(max) = fields.max_length {
            builder = builder.max_length(max);
        }
        if let Some(consecutive) = fields.max_consecutive {
            builder = builder.max_consecutive(consecutive);
        }
        if let Some(period) = fields.expires_after {
            builder = builder.expires_after(period);
        }
        if let Some(required) = fields.required {
            builder = builder.require_all(required);
        }
        builder.build()
    }
}
