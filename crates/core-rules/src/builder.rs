//! Builder pattern for constructing rules without a rule string

use crate::character_class::CharacterClass;
use crate::error::{Result, RuleError};
use crate::period::Period;
use crate::rule::Rule;
use crate::MIN_MAX_LENGTH;
use alloc::vec::Vec;

/// Builder for [`Rule`] with a fluent API
///
/// Unlike [`Rule::parse`], which clamps out-of-range values, the builder
/// rejects them: a rule assembled in code with `max_length(2)` is a bug,
/// not untrusted input.
///
/// # Examples
///
/// ```
/// use core_rules::{CharacterClass, NamedClass, Period, RuleBuilder};
///
/// # fn example() -> Result<(), core_rules::RuleError> {
/// let rule = RuleBuilder::new()
///     .min_length(12)
///     .max_length(64)
///     .max_consecutive(3)
///     .require(NamedClass::Upper)
///     .require(NamedClass::Digit)
///     .require_spec("[!@#]")?
///     .expires_after(Period::days(90))
///     .build()?;
///
/// assert_eq!(rule.to_string(), "minlength: 12; maxlength: 64; max-consecutive: 3; \
///     required: upper; required: digit; required: [!@#]; x-expires-after: 90-days;");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Default, Clone)]
pub struct RuleBuilder {
    min_length: Option<i32>,
    max_length: Option<u32>,
    max_consecutive: Option<u32>,
    expires_after: Option<Period>,
    required: Option<Vec<CharacterClass>>,
}

impl RuleBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum password length
    #[must_use]
    pub const fn min_length(mut self, length: i32) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Set the maximum password length (at least 4)
    #[must_use]
    pub const fn max_length(mut self, length: u32) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Set the maximum run of identical consecutive characters (at least 1)
    #[must_use]
    pub const fn max_consecutive(mut self, run: u32) -> Self {
        self.max_consecutive = Some(run);
        self
    }

    /// Set the expiry period
    #[must_use]
    pub const fn expires_after(mut self, period: Period) -> Self {
        self.expires_after = Some(period);
        self
    }

    /// Append a required character class
    #[must_use]
    pub fn require(mut self, class: impl Into<CharacterClass>) -> Self {
        self.required
            .get_or_insert_with(Vec::new)
            .push(class.into());
        self
    }

    /// Append several required character classes, keeping their order
    ///
    /// An empty iterator still marks `required` as present.
    #[must_use]
    pub fn require_all(mut self, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        self.required.get_or_insert_with(Vec::new).extend(classes);
        self
    }

    /// Parse a class specifier and append it
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidCharacterClass` if `spec` is not a class
    pub fn require_spec(self, spec: &str) -> Result<Self> {
        let class = CharacterClass::parse(spec)?;
        Ok(self.require(class))
    }

    /// Build the rule
    ///
    /// # Errors
    ///
    /// - `RuleError::MaxLengthTooSmall` if the maximum length is below 4
    /// - `RuleError::LengthRangeInverted` if the minimum exceeds the maximum
    /// - `RuleError::InvalidMaxConsecutive` if `max_consecutive` is 0
    pub fn build(self) -> Result<Rule> {
        if let Some(max) = self.max_length {
            if max < MIN_MAX_LENGTH {
                return Err(RuleError::MaxLengthTooSmall {
                    min: MIN_MAX_LENGTH,
                    actual: max,
                });
            }
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if i64::from(min) > i64::from(max) {
                return Err(RuleError::LengthRangeInverted {
                    min_length: min,
                    max_length: max,
                });
            }
        }

        if self.max_consecutive == Some(0) {
            return Err(RuleError::InvalidMaxConsecutive(0));
        }

        Ok(Rule {
            min_length: self.min_length,
            max_length: self.max_length,
            max_consecutive: self.max_consecutive,
            expires_after: self.expires_after,
            required: self.required,
        })
    }
}
