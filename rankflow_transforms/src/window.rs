// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rank-window selection from the brushed cluster.

extern crate alloc;

use alloc::vec::Vec;

use rankflow_core::{BaseDataset, Brush, EntityId, TargetDataset};

/// An inclusive target-rank interval spanned by the brushed selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankWindow {
    /// Smallest rank in the window.
    pub start: u32,
    /// Largest rank in the window.
    pub end: u32,
}

impl RankWindow {
    /// Returns `true` if `rank` falls inside the window.
    pub fn contains(self, rank: u32) -> bool {
        self.start <= rank && rank <= self.end
    }

    /// Returns the number of ranks covered by the window.
    pub fn span(self) -> u32 {
        self.end - self.start + 1
    }
}

/// The scope of one render pass: the rank window plus the id lists each
/// side of the view iterates over.
#[derive(Clone, Debug, PartialEq)]
pub struct RankWindowSelection {
    /// Inclusive target-rank interval of the brushed selection.
    pub window: RankWindow,
    /// Brushed ids present in the target dataset, ascending by target rank.
    pub selected: Vec<EntityId>,
    /// Base ids whose base rank lies inside the window, ascending by base
    /// rank.
    pub base_window: Vec<EntityId>,
}

/// Scopes a render pass to the brushed selection.
///
/// Returns `None` when the brush is empty or none of the brushed ids exist
/// in the target dataset; the caller must skip the pass entirely (this is
/// the documented no-render short-circuit, not an error).
pub fn select_rank_window(
    brush: &Brush,
    base: &BaseDataset,
    target: &TargetDataset,
) -> Option<RankWindowSelection> {
    if brush.is_empty() {
        return None;
    }

    let selected: Vec<EntityId> = target
        .ids_by_rank()
        .into_iter()
        .filter(|id| brush.contains(id))
        .collect();
    let first = selected.first()?;
    let last = selected.last()?;
    let window = RankWindow {
        start: target.rank_entry(first)?.rank,
        end: target.rank_entry(last)?.rank,
    };

    let base_window = base
        .ids_by_rank()
        .into_iter()
        .filter(|id| {
            base.rank_entry(id)
                .is_some_and(|entry| window.contains(entry.rank))
        })
        .collect();

    Some(RankWindowSelection {
        window,
        selected,
        base_window,
    })
}
