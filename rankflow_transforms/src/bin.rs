// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Score binning with per-group instance counts.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use hashbrown::HashMap;
use rankflow_core::EntityId;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::group::GroupKey;

/// One scored, grouped observation to be binned.
///
/// Callers resolve scores and group keys upstream (where lookup failures
/// can be reported precisely); the binner itself is total over its input.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredItem {
    /// The entity this observation belongs to.
    pub id: EntityId,
    /// Continuous score driving the bin index.
    pub score: f64,
    /// Derived categorical identity.
    pub group: GroupKey,
}

impl ScoredItem {
    /// Creates a scored item.
    pub fn new(id: impl Into<EntityId>, score: f64, group: impl Into<GroupKey>) -> Self {
        Self {
            id: id.into(),
            score,
            group: group.into(),
        }
    }
}

/// Errors returned by [`bin_by_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinError {
    /// The requested bin count was zero.
    InvalidBinCount,
}

/// A score-interval bucket.
///
/// Member order is the traversal order of the input items and is
/// load-bearing: funnel geometry reads the first and last member as its
/// endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    index: usize,
    lead_group: GroupKey,
    members: Vec<EntityId>,
    counts: HashMap<GroupKey, usize>,
    group_order: Vec<GroupKey>,
}

impl Bin {
    fn new(index: usize, lead_group: GroupKey) -> Self {
        Self {
            index,
            lead_group,
            members: Vec::new(),
            counts: HashMap::new(),
            group_order: Vec::new(),
        }
    }

    fn record(&mut self, id: EntityId, group: GroupKey) {
        if !self.counts.contains_key(&group) {
            self.group_order.push(group.clone());
        }
        *self.counts.entry(group).or_insert(0) += 1;
        self.members.push(id);
    }

    /// Returns this bin's index in `[0, bin_count)`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the group of the first item recorded into this bin
    /// (informational only).
    pub fn lead_group(&self) -> &GroupKey {
        &self.lead_group
    }

    /// Returns the member ids in traversal order.
    pub fn members(&self) -> &[EntityId] {
        &self.members
    }

    /// Returns the distinct groups in first-seen order.
    pub fn groups(&self) -> &[GroupKey] {
        &self.group_order
    }

    /// Returns the instance count for one group (zero if absent).
    pub fn group_count(&self, group: &GroupKey) -> usize {
        self.counts.get(group).copied().unwrap_or(0)
    }

    /// Returns the total instance count.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the bin has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partitions scored items into at most `bin_count` bins.
///
/// The score extent is taken over `items`; `bandwidth = (max - min) /
/// bin_count`; each item lands at `ceil(score / bandwidth)` clamped to
/// `[0, bin_count - 1]`. A degenerate extent (all scores equal, or a
/// single item) puts everything in bin 0 instead of dividing by zero.
///
/// Only touched bins appear in the returned map, keyed by index; the map's
/// iteration order is ascending, so `.rev()` gives the descending layout
/// order summary tracks use.
pub fn bin_by_score(
    items: &[ScoredItem],
    bin_count: usize,
) -> Result<BTreeMap<usize, Bin>, BinError> {
    if bin_count == 0 {
        return Err(BinError::InvalidBinCount);
    }

    let mut bins = BTreeMap::new();
    if items.is_empty() {
        return Ok(bins);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for item in items {
        if !item.score.is_finite() {
            continue;
        }
        min = min.min(item.score);
        max = max.max(item.score);
    }
    let bandwidth = if min.is_finite() && max.is_finite() {
        (max - min) / bin_count as f64
    } else {
        0.0
    };

    for item in items {
        let index = bin_index(item.score, bandwidth, bin_count);
        let bin = bins
            .entry(index)
            .or_insert_with(|| Bin::new(index, item.group.clone()));
        bin.record(item.id.clone(), item.group.clone());
    }
    Ok(bins)
}

fn bin_index(score: f64, bandwidth: f64, bin_count: usize) -> usize {
    if bandwidth == 0.0 {
        return 0;
    }
    let raw = (score / bandwidth).ceil();
    if !raw.is_finite() || raw < 0.0 {
        return 0;
    }
    if raw >= bin_count as f64 {
        return bin_count - 1;
    }
    #[allow(clippy::cast_possible_truncation, reason = "clamped before cast")]
    {
        raw as usize
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use hashbrown::HashSet;

    use super::*;

    fn items(scores: &[(&str, f64)]) -> Vec<ScoredItem> {
        scores
            .iter()
            .map(|&(id, score)| ScoredItem::new(id, score, "g"))
            .collect()
    }

    #[test]
    fn zero_bins_is_rejected() {
        assert_eq!(bin_by_score(&[], 0), Err(BinError::InvalidBinCount));
    }

    #[test]
    fn bandwidth_and_clamp_follow_the_raw_index_formula() {
        // bandwidth = (0.9 - 0.1) / 2 = 0.4:
        //   a: ceil(0.1 / 0.4) = 1
        //   b: ceil(0.9 / 0.4) = 3, clamped to 1
        //   c: ceil(0.5 / 0.4) = 2, clamped to 1
        let bins = bin_by_score(&items(&[("a", 0.1), ("b", 0.9), ("c", 0.5)]), 2).unwrap();
        assert_eq!(bins.len(), 1);
        let bin = &bins[&1];
        assert_eq!(
            bin.members(),
            &[EntityId::from("a"), EntityId::from("b"), EntityId::from("c")]
        );
    }

    #[test]
    fn every_item_lands_in_exactly_one_bin() {
        let input = items(&[
            ("a", 0.05),
            ("b", 0.22),
            ("c", 0.41),
            ("d", 0.58),
            ("e", 0.77),
            ("f", 0.93),
        ]);
        let bins = bin_by_score(&input, 4).unwrap();

        let mut seen = HashSet::new();
        let mut total = 0;
        for (index, bin) in &bins {
            assert!(*index < 4, "bin index out of range");
            assert_eq!(*index, bin.index());
            total += bin.len();
            for id in bin.members() {
                assert!(seen.insert(id.clone()), "entity assigned twice");
            }
        }
        assert_eq!(total, input.len());
    }

    #[test]
    fn degenerate_extent_uses_bin_zero() {
        let bins = bin_by_score(&items(&[("a", 0.4), ("b", 0.4), ("c", 0.4)]), 5).unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[&0].len(), 3);
    }

    #[test]
    fn zero_score_lands_in_bin_zero() {
        // ceil(0 / bandwidth) = 0, no special case needed.
        let bins = bin_by_score(&items(&[("a", 0.0), ("b", 1.0)]), 4).unwrap();
        assert_eq!(bins[&0].members(), &[EntityId::from("a")]);
    }

    #[test]
    fn group_counts_and_first_seen_order_are_tracked() {
        let input = vec![
            ScoredItem::new("a", 0.4, "red"),
            ScoredItem::new("b", 0.4, "blue"),
            ScoredItem::new("c", 0.4, "red"),
        ];
        let bins = bin_by_score(&input, 1).unwrap();
        let bin = &bins[&0];
        assert_eq!(bin.lead_group(), &GroupKey::from("red"));
        assert_eq!(bin.groups(), &[GroupKey::from("red"), GroupKey::from("blue")]);
        assert_eq!(bin.group_count(&GroupKey::from("red")), 2);
        assert_eq!(bin.group_count(&GroupKey::from("blue")), 1);
        assert_eq!(bin.group_count(&GroupKey::from("green")), 0);
    }
}
