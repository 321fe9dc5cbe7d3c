// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced while computing a layout pass.

use rankflow_transforms::{BinError, GroupKeyError};

/// Errors returned by the top-level layout functions.
///
/// All errors are local to a single pass; a fresh brush or parameter
/// change simply triggers a new pass. An empty brush is not an error (the
/// layout functions return `Ok(None)` for it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Deriving a group key failed.
    Grouping(GroupKeyError),
    /// Binning was configured with an invalid bin count.
    Binning(BinError),
}

impl From<GroupKeyError> for LayoutError {
    fn from(err: GroupKeyError) -> Self {
        Self::Grouping(err)
    }
}

impl From<BinError> for LayoutError {
    fn from(err: BinError) -> Self {
        Self::Binning(err)
    }
}
