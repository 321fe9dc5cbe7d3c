// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout assembly for the single-group distribution view.
//!
//! A two-sided bar chart over the brushed rank window: base-ranking marks
//! rise above a center line, target-ranking marks hang below it, one band
//! per rank in the window. Fill color is the group's legend fill from the
//! rank-mapping layout; bars carry no paint of their own.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use rankflow_core::{BaseDataset, Brush, EntityId, TargetDataset};
use rankflow_transforms::{
    GroupKey, GroupKeyBuilder, RankWindow, Side, group_distribution, select_rank_window,
};

use crate::error::LayoutError;
use crate::scale::{BandScale, LinearScale};
use crate::view::DistributionView;

/// Configuration of a single-group distribution layout pass.
#[derive(Clone, Debug)]
pub struct GroupDistributionSpec {
    /// The group to isolate.
    pub group: GroupKey,
    /// Grouping attributes used to derive group keys.
    pub group_by: GroupKeyBuilder,
    /// View geometry.
    pub view: DistributionView,
}

impl GroupDistributionSpec {
    /// Creates a spec with the default view geometry.
    pub fn new(group: impl Into<GroupKey>, group_by: GroupKeyBuilder) -> Self {
        Self {
            group: group.into(),
            group_by,
            view: DistributionView::default(),
        }
    }

    /// Sets the view geometry.
    pub fn with_view(mut self, view: DistributionView) -> Self {
        self.view = view;
        self
    }
}

/// One bar of the two-sided distribution chart.
///
/// `(side, entity)` is the unique key; the same entity can contribute one
/// bar per side.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionBar {
    /// The entity this bar belongs to.
    pub entity: EntityId,
    /// Which ranking the bar reflects.
    pub side: Side,
    /// The entity's rank on that side.
    pub rank: u32,
    /// Pixel rectangle of the bar.
    pub rect: Rect,
}

/// The complete distribution layout of one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupDistributionLayout {
    /// The brushed target-rank window this pass covers.
    pub window: RankWindow,
    /// Pixel y of the center line separating the two sides.
    pub baseline_y: f64,
    /// Bars for both sides, flat.
    pub bars: Vec<DistributionBar>,
}

/// Computes the single-group distribution layout for one frozen input
/// snapshot.
///
/// Returns `Ok(None)` when the brush is empty (or disjoint from the
/// target dataset), mirroring [`crate::compute_rank_mapping`].
pub fn compute_group_distribution(
    base: &BaseDataset,
    target: &TargetDataset,
    brush: &Brush,
    spec: &GroupDistributionSpec,
) -> Result<Option<GroupDistributionLayout>, LayoutError> {
    let Some(selection) = select_rank_window(brush, base, target) else {
        return Ok(None);
    };
    let window = selection.window;

    let points = group_distribution(&spec.group, window, base, target, &spec.group_by)?;

    let view = &spec.view;
    let band = BandScale::new(
        (view.margins.left, view.width - view.margins.right),
        window.span() as usize,
    );
    let polarity = LinearScale::new(
        (-1.0, 1.0),
        (view.height - view.margins.bottom, view.margins.top),
    );
    let baseline_y = polarity.map(0.0);

    let bars = points
        .into_iter()
        .map(|point| {
            let x0 = band.position((point.rank - window.start) as usize);
            let x1 = x0 + band.bandwidth();
            let rect = match point.side {
                Side::Base => Rect::new(x0, polarity.map(1.0), x1, baseline_y),
                Side::Target => Rect::new(x0, baseline_y, x1, polarity.map(-1.0)),
            };
            DistributionBar {
                entity: point.entity,
                side: point.side,
                rank: point.rank,
                rect,
            }
        })
        .collect();

    Ok(Some(GroupDistributionLayout {
        window,
        baseline_y,
        bars,
    }))
}
