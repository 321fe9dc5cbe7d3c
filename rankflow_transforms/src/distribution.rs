// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-sided rank distribution for a single group.

extern crate alloc;

use alloc::vec::Vec;

use rankflow_core::{BaseDataset, EntityId, TargetDataset};

use crate::group::{GroupKey, GroupKeyBuilder, GroupKeyError};
use crate::window::RankWindow;

/// Which ranking a distribution mark belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The base (topological) ranking, drawn above the center line.
    Base,
    /// The target (model output) ranking, drawn below the center line.
    Target,
}

impl Side {
    /// Returns the signed unit offset of this side relative to the center
    /// line: `+1` for base, `-1` for target.
    pub fn polarity(self) -> i8 {
        match self {
            Self::Base => 1,
            Self::Target => -1,
        }
    }
}

/// One mark in the two-sided rank distribution of a group.
///
/// The base and target marks of the same entity are emitted independently;
/// `(side, entity)` is the unique key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionPoint {
    /// The entity this mark belongs to.
    pub entity: EntityId,
    /// Which ranking the mark reflects.
    pub side: Side,
    /// The entity's rank on that side.
    pub rank: u32,
}

/// Collects the distribution marks for one group inside a rank window.
///
/// Entities whose derived group key differs are skipped; for a matching
/// entity, a target mark is emitted if its target rank falls inside the
/// window and a base mark if its base rank does. An entity absent from the
/// target dataset simply contributes no target mark. Entities are visited
/// ascending by base rank so reruns over identical inputs produce
/// identical output.
pub fn group_distribution(
    group: &GroupKey,
    window: RankWindow,
    base: &BaseDataset,
    target: &TargetDataset,
    keys: &GroupKeyBuilder,
) -> Result<Vec<DistributionPoint>, GroupKeyError> {
    let mut out = Vec::new();
    for id in base.ids_by_rank() {
        if keys.key_for(&id, base)? != *group {
            continue;
        }
        if let Some(entry) = target.rank_entry(&id)
            && window.contains(entry.rank)
        {
            out.push(DistributionPoint {
                entity: id.clone(),
                side: Side::Target,
                rank: entry.rank,
            });
        }
        if let Some(entry) = base.rank_entry(&id)
            && window.contains(entry.rank)
        {
            out.push(DistributionPoint {
                entity: id,
                side: Side::Base,
                rank: entry.rank,
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rankflow_core::{BaseRecord, EntityId, RankEntry};

    use super::*;

    fn fixtures() -> (BaseDataset, TargetDataset, GroupKeyBuilder) {
        let mut base = BaseDataset::new();
        let mut target = TargetDataset::new();
        for (id, base_rank, target_rank, kind) in [
            ("a", 1, 4, "alpha"),
            ("b", 3, 2, "alpha"),
            ("c", 4, 9, "beta"),
            ("d", 8, 3, "alpha"),
        ] {
            base.insert(
                id,
                BaseRecord::new(RankEntry::new(base_rank, 0.5)).with_attribute("kind", kind),
            );
            target.insert(id, RankEntry::new(target_rank, 0.5));
        }
        (base, target, GroupKeyBuilder::new(["kind"]))
    }

    #[test]
    fn marks_are_restricted_to_group_and_window() {
        let (base, target, keys) = fixtures();
        let window = RankWindow { start: 2, end: 4 };
        let points =
            group_distribution(&GroupKey::from("alpha"), window, &base, &target, &keys).unwrap();

        // Visited ascending by base rank: a (target 4 in, base 1 out),
        // b (target 2 in, base 3 in), d (target 3 in, base 8 out).
        assert_eq!(
            points,
            [
                DistributionPoint {
                    entity: EntityId::from("a"),
                    side: Side::Target,
                    rank: 4,
                },
                DistributionPoint {
                    entity: EntityId::from("b"),
                    side: Side::Target,
                    rank: 2,
                },
                DistributionPoint {
                    entity: EntityId::from("b"),
                    side: Side::Base,
                    rank: 3,
                },
                DistributionPoint {
                    entity: EntityId::from("d"),
                    side: Side::Target,
                    rank: 3,
                },
            ]
        );
    }

    #[test]
    fn entity_missing_from_target_contributes_no_target_mark() {
        let (mut base, target, keys) = fixtures();
        base.insert(
            "e",
            BaseRecord::new(RankEntry::new(2, 0.5)).with_attribute("kind", "alpha"),
        );
        let window = RankWindow { start: 1, end: 10 };
        let points =
            group_distribution(&GroupKey::from("alpha"), window, &base, &target, &keys).unwrap();

        let e_points: alloc::vec::Vec<_> = points
            .iter()
            .filter(|p| p.entity == EntityId::from("e"))
            .collect();
        assert_eq!(e_points.len(), 1);
        assert_eq!(e_points[0].side, Side::Base);
    }

    #[test]
    fn polarity_is_signed_unit_offset() {
        assert_eq!(Side::Base.polarity(), 1);
        assert_eq!(Side::Target.polarity(), -1);
    }

    #[test]
    fn missing_attribute_propagates() {
        let (mut base, target, keys) = fixtures();
        base.insert("naked", BaseRecord::new(RankEntry::new(9, 0.5)));
        let window = RankWindow { start: 1, end: 10 };
        let err = group_distribution(&GroupKey::from("alpha"), window, &base, &target, &keys)
            .unwrap_err();
        assert!(matches!(err, GroupKeyError::MissingAttribute { .. }));
    }
}
