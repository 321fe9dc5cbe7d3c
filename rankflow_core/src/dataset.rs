// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable ranking snapshots and the brush selection.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::entity::{AttrValue, EntityId};

/// Rank plus score for one entity on one side of the comparison.
///
/// Ranks are 1-based and unique within a side; scores are the continuous
/// values the ranking was derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankEntry {
    /// 1-based position in the ranking.
    pub rank: u32,
    /// Continuous score backing the rank.
    pub score: f64,
}

impl RankEntry {
    /// Creates a rank entry.
    pub fn new(rank: u32, score: f64) -> Self {
        Self { rank, score }
    }
}

/// One entity's base-side record: categorical attributes plus its entry in
/// the base (topological) ranking.
#[derive(Clone, Debug)]
pub struct BaseRecord {
    /// Categorical attributes, keyed by attribute name.
    pub attributes: HashMap<String, AttrValue>,
    /// The entity's base ranking entry.
    pub entry: RankEntry,
}

impl BaseRecord {
    /// Creates a record with no attributes.
    pub fn new(entry: RankEntry) -> Self {
        Self {
            attributes: HashMap::new(),
            entry,
        }
    }

    /// Adds one attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// The base-side dataset: per-entity attributes and the base ranking.
#[derive(Clone, Debug, Default)]
pub struct BaseDataset {
    records: HashMap<EntityId, BaseRecord>,
}

impl BaseDataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) an entity's record.
    pub fn insert(&mut self, id: impl Into<EntityId>, record: BaseRecord) {
        self.records.insert(id.into(), record);
    }

    /// Returns an entity's record.
    pub fn record(&self, id: &EntityId) -> Option<&BaseRecord> {
        self.records.get(id)
    }

    /// Returns one attribute value for an entity.
    pub fn attribute(&self, id: &EntityId, name: &str) -> Option<&AttrValue> {
        self.records.get(id)?.attributes.get(name)
    }

    /// Returns an entity's base rank entry.
    pub fn rank_entry(&self, id: &EntityId) -> Option<RankEntry> {
        self.records.get(id).map(|r| r.entry)
    }

    /// Returns all entity ids, ascending by base rank.
    ///
    /// Ranks are unique per side; ids break ties deterministically if an
    /// input violates that.
    pub fn ids_by_rank(&self) -> Vec<EntityId> {
        let mut ids: Vec<&EntityId> = self.records.keys().collect();
        ids.sort_by(|a, b| {
            let ra = self.records[*a].entry.rank;
            let rb = self.records[*b].entry.rank;
            ra.cmp(&rb).then_with(|| a.cmp(b))
        });
        ids.into_iter().cloned().collect()
    }

    /// Returns the number of entities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no entities.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The target-side dataset: the downstream model's output ranking.
#[derive(Clone, Debug, Default)]
pub struct TargetDataset {
    results: HashMap<EntityId, RankEntry>,
}

impl TargetDataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) an entity's target rank entry.
    pub fn insert(&mut self, id: impl Into<EntityId>, entry: RankEntry) {
        self.results.insert(id.into(), entry);
    }

    /// Returns an entity's target rank entry.
    pub fn rank_entry(&self, id: &EntityId) -> Option<RankEntry> {
        self.results.get(id).copied()
    }

    /// Returns all entity ids, ascending by target rank.
    ///
    /// Ranks are unique per side; ids break ties deterministically if an
    /// input violates that.
    pub fn ids_by_rank(&self) -> Vec<EntityId> {
        let mut ids: Vec<&EntityId> = self.results.keys().collect();
        ids.sort_by(|a, b| {
            let ra = self.results[*a].rank;
            let rb = self.results[*b].rank;
            ra.cmp(&rb).then_with(|| a.cmp(b))
        });
        ids.into_iter().cloned().collect()
    }

    /// Returns the number of entities.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if the dataset has no entities.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A frozen snapshot of the brushed entity-id set.
///
/// The brushing UI owns the live selection; each layout pass receives an
/// immutable copy. An empty brush means "render nothing", not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Brush {
    selected: HashSet<EntityId>,
}

impl Brush {
    /// Creates an empty brush.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the entity is part of the selection.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.selected.contains(id)
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the number of selected entities.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Iterates over the selected ids (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &EntityId> {
        self.selected.iter()
    }
}

impl FromIterator<EntityId> for Brush {
    fn from_iter<T: IntoIterator<Item = EntityId>>(iter: T) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl From<HashSet<EntityId>> for Brush {
    fn from(selected: HashSet<EntityId>) -> Self {
        Self { selected }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn dataset() -> BaseDataset {
        let mut base = BaseDataset::new();
        base.insert(
            "b",
            BaseRecord::new(RankEntry::new(2, 0.6)).with_attribute("kind", "beta"),
        );
        base.insert(
            "a",
            BaseRecord::new(RankEntry::new(1, 0.9)).with_attribute("kind", "alpha"),
        );
        base.insert(
            "c",
            BaseRecord::new(RankEntry::new(3, 0.1)).with_attribute("kind", "alpha"),
        );
        base
    }

    #[test]
    fn base_ids_sort_by_rank() {
        let base = dataset();
        let ids = base.ids_by_rank();
        assert_eq!(
            ids,
            vec![EntityId::from("a"), EntityId::from("b"), EntityId::from("c")]
        );
    }

    #[test]
    fn attribute_lookup_goes_through_records() {
        let base = dataset();
        let got = base.attribute(&EntityId::from("b"), "kind");
        assert_eq!(got, Some(&AttrValue::from("beta")));
        assert_eq!(base.attribute(&EntityId::from("b"), "missing"), None);
    }

    #[test]
    fn target_ids_sort_by_rank() {
        let mut target = TargetDataset::new();
        target.insert("x", RankEntry::new(7, 0.2));
        target.insert("y", RankEntry::new(4, 0.8));
        assert_eq!(
            target.ids_by_rank(),
            vec![EntityId::from("y"), EntityId::from("x")]
        );
    }

    #[test]
    fn brush_is_a_set_snapshot() {
        let brush: Brush = [EntityId::from("a"), EntityId::from("b")]
            .into_iter()
            .collect();
        assert_eq!(brush.len(), 2);
        assert!(brush.contains(&EntityId::from("a")));
        assert!(!brush.contains(&EntityId::from("z")));
        assert!(Brush::new().is_empty());
    }
}
