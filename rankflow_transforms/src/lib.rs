// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-side transforms for rankflow.
//!
//! This crate turns the two ranking snapshots and the brush selection into
//! the aggregate structures a layout needs:
//! - [`GroupKeyBuilder`] derives categorical group identities,
//! - [`select_rank_window`] scopes a pass to the brushed rank interval,
//! - [`bin_by_score`] buckets scored items with per-group counts,
//! - [`group_segments`] computes the proportional segment layout of a bin,
//! - [`group_distribution`] collects the two-sided rank point set for one
//!   group.
//!
//! Everything is a pure function of its inputs; a render pass recomputes
//! from scratch and discards the previous results wholesale.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bin;
mod distribution;
#[cfg(not(feature = "std"))]
mod float;
mod group;
mod segment;
mod window;

pub use bin::{Bin, BinError, ScoredItem, bin_by_score};
pub use distribution::{DistributionPoint, Side, group_distribution};
pub use group::{GroupKey, GroupKeyBuilder, GroupKeyError};
pub use segment::{GroupSegment, group_segments};
pub use window::{RankWindow, RankWindowSelection, select_rank_window};
