// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional segment layout for a bin's summary row.

extern crate alloc;

use alloc::vec::Vec;

use crate::bin::Bin;
use crate::group::GroupKey;

/// The proportional slot one group occupies inside a bin's summary row.
///
/// `pre_sum` is the combined count of the groups ordered before this one;
/// normalized geometry is `offset = pre_sum / total`, `width = count /
/// total`, scaled by the summary track's pixel length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSegment {
    /// The group this segment represents.
    pub group: GroupKey,
    /// Instance count of this group within the bin.
    pub count: usize,
    /// Combined count of the groups laid out before this one.
    pub pre_sum: usize,
    /// Total instance count of the bin.
    pub total: usize,
}

impl GroupSegment {
    /// Returns the normalized start offset in `[0, 1]`.
    pub fn offset_fraction(&self) -> f64 {
        self.pre_sum as f64 / self.total as f64
    }

    /// Returns the normalized width in `(0, 1]`.
    pub fn width_fraction(&self) -> f64 {
        self.count as f64 / self.total as f64
    }
}

/// Computes the ordered segment layout for one bin.
///
/// Groups are ordered by descending instance count; the sort is stable, so
/// ties keep their first-seen order. Segments tile `[0, 1]` with no gaps
/// or overlaps.
pub fn group_segments(bin: &Bin) -> Vec<GroupSegment> {
    let mut order: Vec<GroupKey> = bin.groups().to_vec();
    order.sort_by(|a, b| bin.group_count(b).cmp(&bin.group_count(a)));

    let total = bin.len();
    let mut pre_sum = 0;
    order
        .into_iter()
        .map(|group| {
            let count = bin.group_count(&group);
            let segment = GroupSegment {
                group,
                count,
                pre_sum,
                total,
            };
            pre_sum += count;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use crate::bin::{ScoredItem, bin_by_score};

    use super::*;

    fn one_bin(groups: &[&str]) -> Bin {
        let items: Vec<ScoredItem> = groups
            .iter()
            .enumerate()
            .map(|(i, &group)| ScoredItem::new(alloc::format!("n{i}"), 0.5, group))
            .collect();
        let mut bins = bin_by_score(&items, 1).unwrap();
        bins.remove(&0).unwrap()
    }

    #[test]
    fn segments_order_by_descending_count() {
        let bin = one_bin(&["blue", "red", "red", "red", "blue", "green"]);
        let segments = group_segments(&bin);

        let counts: Vec<usize> = segments.iter().map(|s| s.count).collect();
        assert_eq!(counts, [3, 2, 1]);
        assert_eq!(segments[0].group, GroupKey::from("red"));
        assert_eq!(segments[0].pre_sum, 0);
        assert_eq!(segments[1].pre_sum, 3);
        assert_eq!(segments[2].pre_sum, 5);
        for segment in &segments {
            assert_eq!(segment.total, 6);
        }
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let bin = one_bin(&["blue", "red", "red", "blue"]);
        let segments = group_segments(&bin);
        assert_eq!(segments[0].group, GroupKey::from("blue"));
        assert_eq!(segments[1].group, GroupKey::from("red"));
    }

    #[test]
    fn widths_tile_the_unit_interval() {
        let bin = one_bin(&["a", "b", "b", "c", "c", "c", "d"]);
        let segments = group_segments(&bin);

        let width_sum: f64 = segments.iter().map(GroupSegment::width_fraction).sum();
        assert!((width_sum - 1.0).abs() < 1e-9, "widths must sum to 1");

        let mut expected_offset = 0.0;
        for segment in &segments {
            assert!(
                (segment.offset_fraction() - expected_offset).abs() < 1e-9,
                "segments must abut"
            );
            expected_offset += segment.width_fraction();
        }
    }

    #[test]
    fn single_group_fills_the_row() {
        let bin = one_bin(&["only", "only"]);
        let segments = group_segments(&bin);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].offset_fraction(), 0.0);
        assert_eq!(segments[0].width_fraction(), 1.0);
    }
}
