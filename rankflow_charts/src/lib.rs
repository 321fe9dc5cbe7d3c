// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout geometry for rankflow.
//!
//! This crate turns the transform results from `rankflow_transforms` into
//! render-ready geometry:
//! - **Scales** map row indices and polarities into pixel coordinates.
//! - **Views** hold the track geometry (margins, track positions).
//! - **Layouts** are plain data: item-mark rects, summary rows with
//!   proportional segments, item links, funnel bands, and legend rows.
//!
//! Everything is recomputed from scratch per pass by two pure functions,
//! [`compute_rank_mapping`] and [`compute_group_distribution`]; a caller
//! holding an older layout discards it in full before applying a new one.
//! Actual drawing, hover emphasis, and axis tick rendering stay with an
//! external rendering collaborator, which may key its state by the
//! entity/bin/group identifiers the layouts carry.

#![no_std]

extern crate alloc;

mod distribution;
mod error;
mod link;
mod palette;
mod rank_mapping;
mod scale;
mod view;

pub use distribution::{
    DistributionBar, GroupDistributionLayout, GroupDistributionSpec, compute_group_distribution,
};
pub use error::LayoutError;
pub use link::{FunnelLink, FunnelStation, ItemLink};
pub use palette::{GroupLegend, default_group_fills};
pub use rank_mapping::{
    ItemMark, RankMappingLayout, RankMappingSpec, SegmentMark, SideLayout, SummaryRow,
    compute_rank_mapping,
};
pub use scale::{BandScale, LinearScale};
pub use view::{DistributionView, Margins, RankMappingView};
