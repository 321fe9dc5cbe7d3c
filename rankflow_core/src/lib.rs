// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core data model for rankflow.
//!
//! This crate provides the immutable inputs a layout pass reads:
//! - typed entity identifiers and categorical attribute values,
//! - the base-side dataset (attributes plus a topological ranking),
//! - the target-side dataset (a model's output ranking), and
//! - the frozen brush selection.
//!
//! Nothing here is mutated during layout computation; a render pass takes
//! these as snapshots and produces a wholly new layout.

#![no_std]

extern crate alloc;

mod dataset;
mod entity;

pub use dataset::{BaseDataset, BaseRecord, Brush, RankEntry, TargetDataset};
pub use entity::{AttrValue, EntityId};
