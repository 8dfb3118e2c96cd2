//! Calendar periods for the `x-expires-after` extension
//!
//! A period is written `<amount>-<unit>`, e.g. `90-days` or `1-years`. The
//! whole value must match; units are case-sensitive.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

/// Unit of a [`Period`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodUnit {
    /// `days`
    Days,
    /// `weeks`
    Weeks,
    /// `months`
    Months,
    /// `years`
    Years,
}

impl PeriodUnit {
    /// Resolve a unit name (case-sensitive, plural form only)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "days" => Some(Self::Days),
            "weeks" => Some(Self::Weeks),
            "months" => Some(Self::Months),
            "years" => Some(Self::Years),
            _ => None,
        }
    }

    /// The unit's name as written in rule strings
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An amount of calendar time, kept in the unit it was written in
///
/// `3-months` stays three months; it is not normalized to days because
/// months and years have no fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Period {
    amount: u32,
    unit: PeriodUnit,
}

impl Period {
    /// Create a period
    #[must_use]
    pub const fn new(amount: u32, unit: PeriodUnit) -> Self {
        Self { amount, unit }
    }

    /// A period of `amount` days
    #[must_use]
    pub const fn days(amount: u32) -> Self {
        Self::new(amount, PeriodUnit::Days)
    }

    /// A period of `amount` weeks
    #[must_use]
    pub const fn weeks(amount: u32) -> Self {
        Self::new(amount, PeriodUnit::Weeks)
    }

    /// A period of `amount` months
    #[must_use]
    pub const fn months(amount: u32) -> Self {
        Self::new(amount, PeriodUnit::Months)
    }

    /// A period of `amount` years
    #[must_use]
    pub const fn years(amount: u32) -> Self {
        Self::new(amount, PeriodUnit::Years)
    }

    /// Number of units
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// The unit
    #[must_use]
    pub const fn unit(&self) -> PeriodUnit {
        self.unit
    }

    /// Parse `<digits>-<unit>`
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidPeriod` if the amount is not all ASCII
    /// digits, overflows `u32`, or the unit is not one of `days`, `weeks`,
    /// `months`, `years`.
    ///
    /// # Example
    ///
    /// ```
    /// use core_rules::period::{Period, PeriodUnit};
    ///
    /// let period = Period::parse("3-months").unwrap();
    /// assert_eq!(period.amount(), 3);
    /// assert_eq!(period.unit(), PeriodUnit::Months);
    ///
    /// assert!(Period::parse("3-fortnights").is_err());
    /// assert!(Period::parse("3-Months").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || RuleError::InvalidPeriod(value.into());

        let (amount, unit) = value.split_once('-').ok_or_else(invalid)?;

        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount = amount.parse::<u32>().map_err(|_| invalid())?;
        let unit = PeriodUnit::from_name(unit).ok_or_else(invalid)?;

        Ok(Self { amount, unit })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.amount, self.unit)
    }
}

impl FromStr for Period {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        alloc::format!("{}", period)
    }
}

impl TryFrom<String> for Period {
    type Error = RuleError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}
