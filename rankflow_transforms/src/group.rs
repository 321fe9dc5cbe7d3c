// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group-key derivation from configured attributes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use rankflow_core::{BaseDataset, EntityId};

/// A categorical identity derived from an entity's attribute values.
///
/// Two entities share a key iff every configured attribute value matches
/// exactly. Keys double as color/aggregation identities for the renderer.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey(String);

impl GroupKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self(String::from(value))
    }
}

impl From<String> for GroupKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors returned while deriving a [`GroupKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKeyError {
    /// An entity lacks one of the configured grouping attributes.
    MissingAttribute {
        /// The entity whose record is incomplete.
        entity: EntityId,
        /// The attribute name that was not found.
        attribute: String,
    },
}

/// Derives [`GroupKey`]s by concatenating configured attribute values.
///
/// The key is the concatenation of the string form of each attribute's
/// value, in configured order, with no separator. The insertion order of
/// the underlying attribute map never matters; only the configured list
/// does. An empty list yields the empty key, putting every entity in a
/// single group.
#[derive(Clone, Debug, Default)]
pub struct GroupKeyBuilder {
    attributes: Vec<String>,
}

impl GroupKeyBuilder {
    /// Creates a builder over an ordered attribute-name list.
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the configured attribute names, in order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Derives the group key for one entity.
    pub fn key_for(&self, id: &EntityId, base: &BaseDataset) -> Result<GroupKey, GroupKeyError> {
        let mut key = String::new();
        for name in &self.attributes {
            let Some(value) = base.attribute(id, name) else {
                return Err(GroupKeyError::MissingAttribute {
                    entity: id.clone(),
                    attribute: name.clone(),
                });
            };
            // Writing into a `String` cannot fail.
            let _ = write!(key, "{value}");
        }
        Ok(GroupKey(key))
    }
}
