// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical fills for group keys.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Brush;
use peniko::color::palette::css;

use rankflow_transforms::GroupKey;

/// One legend row: a group, its population within the brushed selection,
/// and the fill assigned to it.
///
/// Legend rows are ordered by descending population (ties first-seen), and
/// fills are assigned in that order, so the largest group always takes the
/// first palette color.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupLegend {
    /// The group this row represents.
    pub group: GroupKey,
    /// Number of brushed entities carrying this group key.
    pub count: usize,
    /// Fill paint assigned to the group.
    pub fill: Brush,
}

/// Returns a categorical fill palette suitable for group keys.
///
/// Colors are taken from named CSS colors and repeat if `count` exceeds
/// the palette length.
pub fn default_group_fills(count: usize) -> Vec<Brush> {
    const PALETTE: [peniko::Color; 10] = [
        css::STEEL_BLUE,
        css::DARK_ORANGE,
        css::INDIAN_RED,
        css::LIGHT_SEA_GREEN,
        css::MEDIUM_SEA_GREEN,
        css::GOLDENROD,
        css::MEDIUM_PURPLE,
        css::HOT_PINK,
        css::SADDLE_BROWN,
        css::GRAY,
    ];

    (0..count)
        .map(|i| Brush::Solid(PALETTE[i % PALETTE.len()]))
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn palette_repeats_past_its_length() {
        let fills = default_group_fills(12);
        assert_eq!(fills.len(), 12);
        assert_eq!(fills[0], fills[10]);
        assert_ne!(fills[0], fills[1]);
    }
}
