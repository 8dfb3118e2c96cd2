//! # Rule String Tokenizer
//!
//! Lexes a raw rule string into an ordered multimap from property name to
//! the raw values given for it.
//!
//! ## Syntax
//!
//! ```text
//! rule        ::= property (';' property)*
//! property    ::= name ':' value (',' value)*
//! value       ::= bracket | text
//! bracket     ::= '[' (escape | char)* ']'
//! escape      ::= '\' char
//! ```
//!
//! Separators inside a bracket expression are literal, so
//! `required: [;,]` yields the single value `[;,]`. Brackets do not nest.
//!
//! The scanner never fails: fragments without a `:` or without any value
//! are dropped, and an unterminated bracket swallows the rest of the input.

use alloc::string::String;
use alloc::vec::Vec;

/// Ordered multimap of lower-cased property names to their raw values
///
/// Repeated properties accumulate into one entry, so
/// `max-consecutive: 3; max-consecutive: 5` yields one entry with two values.
/// Entries keep the order in which each name was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, Vec<String>)>,
}

impl PropertyMap {
    /// Create an empty map
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Values recorded for `name`, in input order
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Check whether `name` appeared in the input
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Iterate property names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of distinct properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no property was recognized at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn append(&mut self, name: String, values: Vec<String>) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => existing.extend(values),
            None => self.entries.push((name, values)),
        }
    }
}

/// Tokenize a raw rule string
///
/// # Example
///
/// ```
/// use core_rules::tokenizer::tokenize;
///
/// let map = tokenize("MinLength: 8; required: upper, [;,]; required: digit");
///
/// assert_eq!(map.get("minlength"), Some(&["8".to_string()][..]));
/// assert_eq!(map.get("required").unwrap(), ["upper", "[;,]", "digit"]);
/// ```
#[must_use]
pub fn tokenize(raw: &str) -> PropertyMap {
    let mut map = PropertyMap::new();

    for property in split_outside_brackets(raw, ';') {
        let Some(colon) = find_outside_brackets(property, ':') else {
            continue;
        };

        let name = property[..colon].trim();
        if name.is_empty() {
            continue;
        }

        let values: Vec<String> = split_outside_brackets(&property[colon + 1..], ',')
            .into_iter()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
            .collect();

        if values.is_empty() {
            continue;
        }

        map.append(name.to_ascii_lowercase(), values);
    }

    tracing::trace!(properties = map.len(), "tokenized password rule");
    map
}

/// Byte offset of the first `separator` that is not inside a bracket expression
fn find_outside_brackets(input: &str, separator: char) -> Option<usize> {
    let mut in_brackets = false;
    let mut escaped = false;

    for (idx, ch) in input.char_indices() {
        if in_brackets {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                ']' => in_brackets = false,
                _ => {}
            }
        } else if ch == '[' {
            in_brackets = true;
        } else if ch == separator {
            return Some(idx);
        }
    }

    None
}

/// Split on `separator` outside bracket expressions
///
/// Every separator found this way sits outside brackets, so resuming the
/// scan right after it starts from a clean state.
fn split_outside_brackets(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = input;

    while let Some(idx) = find_outside_brackets(rest, separator) {
        parts.push(&rest[..idx]);
        rest = &rest[idx + separator.len_utf8()..];
    }
    parts.push(rest);

    parts
}
