// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity identifiers and attribute values.

extern crate alloc;

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// A stable identifier for a ranked entity.
///
/// Identifiers come from the external datasets and are treated as opaque;
/// the layout layer only compares, hashes, and echoes them back so a
/// renderer can key marks by entity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an identifier from any owned or borrowed string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A categorical attribute value attached to an entity.
///
/// The `Display` impl defines the string coercion used when attribute
/// values are concatenated into group keys: text is written verbatim,
/// numbers use Rust's `f64` formatting, flags print `true`/`false`.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A textual category.
    Text(String),
    /// A numeric category (stored as `f64`).
    Number(f64),
    /// A boolean category.
    Flag(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn attr_values_coerce_deterministically() {
        assert_eq!(AttrValue::from("west").to_string(), "west");
        assert_eq!(AttrValue::from(3_i64).to_string(), "3");
        assert_eq!(AttrValue::from(0.5).to_string(), "0.5");
        assert_eq!(AttrValue::from(true).to_string(), "true");
    }

    #[test]
    fn entity_ids_borrow_as_str() {
        let id = EntityId::from("n42");
        assert_eq!(id.as_str(), "n42");
        assert_eq!(<EntityId as core::borrow::Borrow<str>>::borrow(&id), "n42");
    }
}
