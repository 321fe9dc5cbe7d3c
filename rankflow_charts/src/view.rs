// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View configuration: margins and track geometry.

/// Pixel margins around a view's drawable area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margins {
    /// Creates margins from the four sides.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Track geometry for the rank-mapping view.
///
/// The view is read left to right: base summary track, base item track,
/// target item track, target summary track. Item marks and summary rows
/// share the vertical span between the top and bottom margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankMappingView {
    /// Canvas height in pixels.
    pub height: f64,
    /// Margins around the drawable area.
    pub margins: Margins,
    /// Left edge of the base summary track.
    pub base_summary_x: f64,
    /// Pixel length of both summary tracks.
    pub summary_len: f64,
    /// Left edge of the base item track.
    pub base_item_x: f64,
    /// Pixel width of an item mark on either item track.
    pub item_len: f64,
    /// Left edge of the target item track.
    pub target_item_x: f64,
    /// Left edge of the target summary track.
    pub target_summary_x: f64,
    /// Pixel height of one summary row.
    pub row_height: f64,
    /// Horizontal offset of the funnel's middle station from the item
    /// track it attaches to.
    pub funnel_inset: f64,
}

impl Default for RankMappingView {
    fn default() -> Self {
        Self {
            height: 600.0,
            margins: Margins::new(60.0, 20.0, 20.0, 65.0),
            base_summary_x: 50.0,
            summary_len: 150.0,
            base_item_x: 400.0,
            item_len: 50.0,
            target_item_x: 550.0,
            target_summary_x: 800.0,
            row_height: 30.0,
            funnel_inset: 50.0,
        }
    }
}

impl RankMappingView {
    /// Sets the canvas height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Returns the vertical pixel range shared by item marks and summary
    /// rows.
    pub fn track_range(&self) -> (f64, f64) {
        (self.margins.top, self.height - self.margins.bottom)
    }
}

/// View geometry for the single-group distribution chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistributionView {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Margins around the drawable area.
    pub margins: Margins,
}

impl Default for DistributionView {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 150.0,
            margins: Margins::new(45.0, 20.0, 20.0, 5.0),
        }
    }
}

impl DistributionView {
    /// Sets the canvas size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}
