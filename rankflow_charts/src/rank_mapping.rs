// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout assembly for the rank-mapping view.
//!
//! The view compares the base and target rankings over the brushed rank
//! window: an item track per side (one mark per entity, in rank order),
//! a summary track per side (one proportional row per non-empty bin, laid
//! out top to bottom by descending bin index), funnel bands tying rows to
//! their item spans, and straight links pairing each entity's two item
//! marks.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use rankflow_core::{BaseDataset, Brush, EntityId, TargetDataset};
use rankflow_transforms::{
    Bin, GroupKey, GroupKeyBuilder, GroupKeyError, GroupSegment, RankWindow, ScoredItem, Side,
    bin_by_score, group_segments, select_rank_window,
};

use crate::error::LayoutError;
use crate::link::{FunnelLink, FunnelStation, ItemLink};
use crate::palette::{GroupLegend, default_group_fills};
use crate::scale::BandScale;
use crate::view::RankMappingView;

/// Configuration of a rank-mapping layout pass.
#[derive(Clone, Debug)]
pub struct RankMappingSpec {
    /// Number of score bins per side (must be positive).
    pub bin_count: usize,
    /// Grouping attributes used to derive group keys.
    pub group_by: GroupKeyBuilder,
    /// Track geometry.
    pub view: RankMappingView,
}

impl RankMappingSpec {
    /// Creates a spec with the default view geometry.
    pub fn new(bin_count: usize, group_by: GroupKeyBuilder) -> Self {
        Self {
            bin_count,
            group_by,
            view: RankMappingView::default(),
        }
    }

    /// Sets the view geometry.
    pub fn with_view(mut self, view: RankMappingView) -> Self {
        self.view = view;
        self
    }
}

/// One item mark on an item track.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemMark {
    /// The entity this mark represents.
    pub entity: EntityId,
    /// The entity's derived group key.
    pub group: GroupKey,
    /// Index of the bin the entity landed in.
    pub bin: usize,
    /// Pixel rectangle of the mark.
    pub rect: Rect,
}

/// One proportional segment inside a summary row.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentMark {
    /// The underlying segment (group, counts, prefix sum).
    pub segment: GroupSegment,
    /// Pixel rectangle of the segment.
    pub rect: Rect,
}

/// One summary row: a bin's proportional group breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    /// Index of the bin this row summarizes.
    pub bin: usize,
    /// Pixel rectangle of the whole row.
    pub rect: Rect,
    /// Segments in layout order (descending count, ties first-seen).
    pub segments: Vec<SegmentMark>,
}

/// Everything laid out for one side of the view.
#[derive(Clone, Debug, PartialEq)]
pub struct SideLayout {
    /// Item marks in rank order.
    pub items: Vec<ItemMark>,
    /// Summary rows, top to bottom (descending bin index).
    pub rows: Vec<SummaryRow>,
    /// Funnel bands between rows and item spans, one per non-empty bin.
    pub funnels: Vec<FunnelLink>,
}

/// The complete rank-mapping layout of one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RankMappingLayout {
    /// The brushed target-rank window this pass covers.
    pub window: RankWindow,
    /// Base-side tracks.
    pub base: SideLayout,
    /// Target-side tracks.
    pub target: SideLayout,
    /// Item-to-item links for entities present on both item tracks.
    pub links: Vec<ItemLink>,
    /// Group legend over the brushed selection, descending by population.
    pub legend: Vec<GroupLegend>,
}

impl RankMappingLayout {
    /// Returns the two rank labels the item-track axis shows (the window's
    /// first and last target rank).
    pub fn rank_labels(&self) -> (u32, u32) {
        (self.window.start, self.window.end)
    }
}

/// Computes the rank-mapping layout for one frozen input snapshot.
///
/// Returns `Ok(None)` when the brush is empty (or disjoint from the
/// target dataset); the caller skips rendering entirely. Every call
/// recomputes from scratch; the result replaces any previous layout in
/// full.
pub fn compute_rank_mapping(
    base: &BaseDataset,
    target: &TargetDataset,
    brush: &Brush,
    spec: &RankMappingSpec,
) -> Result<Option<RankMappingLayout>, LayoutError> {
    let Some(selection) = select_rank_window(brush, base, target) else {
        return Ok(None);
    };

    let base_items = scored_items(&selection.base_window, base, &spec.group_by, |id| {
        base.rank_entry(id).map(|entry| entry.score)
    })?;
    let target_items = scored_items(&selection.selected, base, &spec.group_by, |id| {
        target.rank_entry(id).map(|entry| entry.score)
    })?;

    let base_bins = bin_by_score(&base_items, spec.bin_count)?;
    let target_bins = bin_by_score(&target_items, spec.bin_count)?;

    let view = &spec.view;
    let track = view.track_range();
    let base_band = BandScale::new(track, base_items.len());
    let target_band = BandScale::new(track, target_items.len());
    let base_rows = row_index(&base_items);
    let target_rows = row_index(&target_items);

    let base_side = side_layout(&base_items, &base_bins, base_band, &base_rows, view, Side::Base);
    let target_side = side_layout(
        &target_items,
        &target_bins,
        target_band,
        &target_rows,
        view,
        Side::Target,
    );

    let mut links = Vec::new();
    for (row, item) in base_items.iter().enumerate() {
        if !brush.contains(&item.id) {
            continue;
        }
        let Some(&target_row) = target_rows.get(&item.id) else {
            continue;
        };
        links.push(ItemLink {
            entity: item.id.clone(),
            from: Point::new(
                view.base_item_x + view.item_len,
                base_band.position(row) + base_band.bandwidth() / 2.0,
            ),
            to: Point::new(
                view.target_item_x,
                target_band.position(target_row) + target_band.bandwidth() / 2.0,
            ),
        });
    }

    Ok(Some(RankMappingLayout {
        window: selection.window,
        base: base_side,
        target: target_side,
        links,
        legend: build_legend(&target_items),
    }))
}

/// Resolves ids into scored, grouped observations using a per-side score
/// accessor. Ids the accessor cannot score are skipped.
fn scored_items(
    ids: &[EntityId],
    base: &BaseDataset,
    keys: &GroupKeyBuilder,
    score_of: impl Fn(&EntityId) -> Option<f64>,
) -> Result<Vec<ScoredItem>, GroupKeyError> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(score) = score_of(id) else {
            continue;
        };
        let group = keys.key_for(id, base)?;
        out.push(ScoredItem::new(id.clone(), score, group));
    }
    Ok(out)
}

fn row_index(items: &[ScoredItem]) -> HashMap<EntityId, usize> {
    items
        .iter()
        .enumerate()
        .map(|(row, item)| (item.id.clone(), row))
        .collect()
}

fn side_layout(
    items: &[ScoredItem],
    bins: &BTreeMap<usize, Bin>,
    band: BandScale,
    rows_by_id: &HashMap<EntityId, usize>,
    view: &RankMappingView,
    side: Side,
) -> SideLayout {
    let (item_x, summary_x) = match side {
        Side::Base => (view.base_item_x, view.base_summary_x),
        Side::Target => (view.target_item_x, view.target_summary_x),
    };

    let mut bin_by_id = HashMap::new();
    for (&index, bin) in bins {
        for id in bin.members() {
            bin_by_id.insert(id.clone(), index);
        }
    }

    let item_marks = items
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let y = band.position(row);
            ItemMark {
                entity: item.id.clone(),
                group: item.group.clone(),
                bin: bin_by_id.get(&item.id).copied().unwrap_or(0),
                rect: Rect::new(item_x, y, item_x + view.item_len, y + band.bandwidth()),
            }
        })
        .collect();

    let row_band = BandScale::new(view.track_range(), bins.len());
    let mut rows = Vec::with_capacity(bins.len());
    let mut funnels = Vec::with_capacity(bins.len());
    for (slot, (&index, bin)) in bins.iter().rev().enumerate() {
        let y = row_band.position(slot);
        let row_rect = Rect::new(summary_x, y, summary_x + view.summary_len, y + view.row_height);

        let segments = group_segments(bin)
            .into_iter()
            .map(|segment| {
                let x0 = summary_x + segment.offset_fraction() * view.summary_len;
                let x1 = x0 + segment.width_fraction() * view.summary_len;
                SegmentMark {
                    segment,
                    rect: Rect::new(x0, y, x1, y + view.row_height),
                }
            })
            .collect();

        if let Some((top, bottom)) = member_span(bin, rows_by_id, band) {
            let row_station = FunnelStation {
                x: match side {
                    Side::Base => summary_x + view.summary_len,
                    Side::Target => summary_x,
                },
                top: y,
                bottom: y + view.row_height,
            };
            let stations = match side {
                Side::Base => [
                    row_station,
                    FunnelStation {
                        x: item_x - view.funnel_inset,
                        top,
                        bottom,
                    },
                    FunnelStation {
                        x: item_x,
                        top,
                        bottom,
                    },
                ],
                Side::Target => [
                    FunnelStation {
                        x: item_x + view.item_len,
                        top,
                        bottom,
                    },
                    FunnelStation {
                        x: item_x + view.item_len + view.funnel_inset,
                        top,
                        bottom,
                    },
                    row_station,
                ],
            };
            funnels.push(FunnelLink {
                bin: index,
                stations,
            });
        }

        rows.push(SummaryRow {
            bin: index,
            rect: row_rect,
            segments,
        });
    }

    SideLayout {
        items: item_marks,
        rows,
        funnels,
    }
}

/// Vertical extent from the first member's mark top to the last member's
/// mark bottom. `None` for a memberless bin, which then contributes no
/// funnel geometry.
fn member_span(
    bin: &Bin,
    rows_by_id: &HashMap<EntityId, usize>,
    band: BandScale,
) -> Option<(f64, f64)> {
    let first = bin.members().first()?;
    let last = bin.members().last()?;
    let top = band.position(*rows_by_id.get(first)?);
    let bottom = band.position(*rows_by_id.get(last)?) + band.bandwidth();
    Some((top, bottom))
}

fn build_legend(target_items: &[ScoredItem]) -> Vec<GroupLegend> {
    let mut counts: HashMap<GroupKey, usize> = HashMap::new();
    let mut order: Vec<GroupKey> = Vec::new();
    for item in target_items {
        if !counts.contains_key(&item.group) {
            order.push(item.group.clone());
        }
        *counts.entry(item.group.clone()).or_insert(0) += 1;
    }
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));

    let fills = default_group_fills(order.len());
    order
        .into_iter()
        .zip(fills)
        .map(|(group, fill)| GroupLegend {
            count: counts[&group],
            group,
            fill,
        })
        .collect()
}
