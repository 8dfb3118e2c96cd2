//! # Character Classes
//!
//! A character class is the set of characters a `required` constraint draws
//! from. It is written either as one of the reserved names or as a bracket
//! expression listing its members.
//!
//! ## Named Classes
//!
//! | Name              | Members                                          |
//! |-------------------|--------------------------------------------------|
//! | `lower`           | `a`-`z`                                          |
//! | `upper`           | `A`-`Z`                                          |
//! | `digit`           | `0`-`9`                                          |
//! | `special`         | `` -~!@#$%^&*_+=`\|(){}[:;"'<>,.?] `` and space  |
//! | `ascii-printable` | U+0020 to U+007E                                 |
//! | `unicode`         | every Unicode scalar value                       |
//!
//! ## Bracket Classes
//!
//! `[...]` lists literal members. A backslash takes the next character
//! literally, and `-` never denotes a range: `[a-c]` has the three members
//! `a`, `-` and `c`. Duplicates collapse to one member.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

/// One of the reserved, predefined character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedClass {
    /// `lower`: ASCII lower-case letters
    Lower,
    /// `upper`: ASCII upper-case letters
    Upper,
    /// `digit`: ASCII digits
    Digit,
    /// `special`: ASCII punctuation except `/` and `\`, plus space
    Special,
    /// `unicode`: all Unicode scalar values
    Unicode,
    /// `ascii-printable`: space through `~`
    AsciiPrintable,
}

impl NamedClass {
    /// All named classes, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Lower,
        Self::Upper,
        Self::Digit,
        Self::Special,
        Self::Unicode,
        Self::AsciiPrintable,
    ];

    /// Resolve a reserved name (case-sensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    /// The reserved name of this class
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Digit => "digit",
            Self::Special => "special",
            Self::Unicode => "unicode",
            Self::AsciiPrintable => "ascii-printable",
        }
    }

    /// Check if `ch` is a member of this class
    #[must_use]
    pub fn contains(self, ch: char) -> bool {
        match self {
            Self::Lower => ch.is_ascii_lowercase(),
            Self::Upper => ch.is_ascii_uppercase(),
            Self::Digit => ch.is_ascii_digit(),
            Self::Special => ch == ' ' || (ch.is_ascii_punctuation() && ch != '/' && ch != '\\'),
            Self::Unicode => true,
            Self::AsciiPrintable => matches!(ch, ' '..='~'),
        }
    }

    /// Number of members
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Lower | Self::Upper => 26,
            Self::Digit => 10,
            Self::Special => 31,
            // 0x110000 code points minus the 0x800 surrogates
            Self::Unicode => 0x10_F800,
            Self::AsciiPrintable => 95,
        }
    }

    /// Smallest range of code points that covers every member
    fn span(self) -> RangeInclusive<char> {
        match self {
            Self::Lower => 'a'..='z',
            Self::Upper => 'A'..='Z',
            Self::Digit => '0'..='9',
            Self::Special | Self::AsciiPrintable => ' '..='~',
            Self::Unicode => char::MIN..=char::MAX,
        }
    }
}

impl fmt::Display for NamedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved character class
///
/// Each `required` value becomes one `CharacterClass`; a password satisfies
/// it when it contains at least one member.
///
/// # Example
///
/// ```
/// use core_rules::CharacterClass;
///
/// let digits = CharacterClass::try_parse("digit").unwrap();
/// assert_eq!(digits.len(), 10);
///
/// let custom = CharacterClass::try_parse("[!@]").unwrap();
/// assert_eq!(custom.included().collect::<String>(), "!@");
///
/// assert!(CharacterClass::try_parse("asdf").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CharacterClass {
    /// One of the reserved classes
    Named(NamedClass),
    /// Bracket expression; members in first-seen order, without duplicates
    Custom(Vec<char>),
}

impl CharacterClass {
    /// Parse a class specifier, returning `None` if it is not one
    ///
    /// `Some` with no members (from `[]`) is distinct from `None`.
    #[must_use]
    pub fn try_parse(spec: &str) -> Option<Self> {
        Self::parse(spec).ok()
    }

    /// Parse a class specifier
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidCharacterClass` if `spec` is neither a
    /// reserved name nor enclosed in `[` and `]`.
    pub fn parse(spec: &str) -> Result<Self> {
        if let Some(named) = NamedClass::from_name(spec) {
            return Ok(Self::Named(named));
        }

        match spec.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            Some(body) => Ok(Self::Custom(parse_bracket_body(body))),
            None => Err(RuleError::InvalidCharacterClass(spec.into())),
        }
    }

    /// Build a bracket class from explicit members, dropping duplicates
    #[must_use]
    pub fn custom(members: impl IntoIterator<Item = char>) -> Self {
        let mut unique = Vec::new();
        for ch in members {
            if !unique.contains(&ch) {
                unique.push(ch);
            }
        }
        Self::Custom(unique)
    }

    /// Iterate members in a deterministic order
    ///
    /// Named classes yield ascending code points; bracket classes yield
    /// members in the order they were written.
    #[must_use]
    pub fn included(&self) -> Included<'_> {
        let state = match self {
            Self::Named(class) => IncludedState::Named {
                class: *class,
                span: class.span(),
            },
            Self::Custom(members) => IncludedState::Custom(members.iter()),
        };
        Included { state }
    }

    /// Check if `ch` is a member
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        match self {
            Self::Named(class) => class.contains(ch),
            Self::Custom(members) => members.contains(&ch),
        }
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Named(class) => class.len(),
            Self::Custom(members) => members.len(),
        }
    }

    /// Check if the class has no members (only possible for `[]`)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collect the literal members of a bracket body
fn parse_bracket_body(body: &str) -> Vec<char> {
    let mut chars = body.chars();
    let mut members = Vec::new();

    while let Some(ch) = chars.next() {
        // A trailing lone backslash has nothing to escape and stays literal
        let member = match ch {
            '\\' => chars.next().unwrap_or('\\'),
            other => other,
        };
        if !members.contains(&member) {
            members.push(member);
        }
    }

    members
}

/// Iterator over the members of a [`CharacterClass`]
#[derive(Debug, Clone)]
pub struct Included<'a> {
    state: IncludedState<'a>,
}

#[derive(Debug, Clone)]
enum IncludedState<'a> {
    Named {
        class: NamedClass,
        span: RangeInclusive<char>,
    },
    Custom(core::slice::Iter<'a, char>),
}

impl Iterator for Included<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match &mut self.state {
            IncludedState::Named { class, span } => {
                let class = *class;
                span.find(|ch| class.contains(*ch))
            }
            IncludedState::Custom(members) => members.next().copied(),
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(class) => write!(f, "{}", class),
            Self::Custom(members) => {
                f.write_str("[")?;
                for ch in members {
                    if matches!(ch, '\\' | ']' | '-') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", ch)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl FromStr for CharacterClass {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NamedClass> for CharacterClass {
    fn from(class: NamedClass) -> Self {
        Self::Named(class)
    }
}

impl From<CharacterClass> for String {
    fn from(class: CharacterClass) -> Self {
        alloc::format!("{}", class)
    }
}

impl TryFrom<String> for CharacterClass {
    type Error = RuleError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for CharacterClass {
    type Error = RuleError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
