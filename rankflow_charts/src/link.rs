// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link geometry: item-to-item segments and funnel bands.

use kurbo::Point;

use rankflow_core::EntityId;

/// A straight 1:1 link between an entity's base and target item marks.
///
/// Links are keyed by entity id and ids are unique within a layout, so a
/// renderer can use them to cross-highlight the two marks and the link.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemLink {
    /// The entity both endpoints belong to.
    pub entity: EntityId,
    /// Anchor on the base item mark (its right-center).
    pub from: Point,
    /// Anchor on the target item mark (its left-center).
    pub to: Point,
}

impl ItemLink {
    /// Returns the ordered control points of the segment.
    pub fn points(&self) -> [Point; 2] {
        [self.from, self.to]
    }
}

/// One x-station along a funnel band: a vertical span at a fixed x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunnelStation {
    /// Horizontal position of the station.
    pub x: f64,
    /// Upper edge of the span.
    pub top: f64,
    /// Lower edge of the span.
    pub bottom: f64,
}

/// A funnel band connecting a bin's summary row with the vertical span of
/// its item marks.
///
/// The three stations are ordered left to right and are intended for a
/// smoothed area interpolation: the upper edge runs through the `top`
/// values, the lower edge through the `bottom` values.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelLink {
    /// Index of the bin this funnel belongs to.
    pub bin: usize,
    /// The stations, ordered by ascending x.
    pub stations: [FunnelStation; 3],
}

impl FunnelLink {
    /// Returns the ordered control points of the upper edge.
    pub fn upper_edge(&self) -> [Point; 3] {
        self.stations.map(|s| Point::new(s.x, s.top))
    }

    /// Returns the ordered control points of the lower edge.
    pub fn lower_edge(&self) -> [Point; 3] {
        self.stations.map(|s| Point::new(s.x, s.bottom))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn edges_read_stations_in_order() {
        let funnel = FunnelLink {
            bin: 2,
            stations: [
                FunnelStation {
                    x: 200.0,
                    top: 90.0,
                    bottom: 120.0,
                },
                FunnelStation {
                    x: 350.0,
                    top: 60.0,
                    bottom: 180.0,
                },
                FunnelStation {
                    x: 400.0,
                    top: 60.0,
                    bottom: 180.0,
                },
            ],
        };
        assert_eq!(
            funnel.upper_edge(),
            [
                Point::new(200.0, 90.0),
                Point::new(350.0, 60.0),
                Point::new(400.0, 60.0),
            ]
        );
        assert_eq!(
            funnel.lower_edge(),
            [
                Point::new(200.0, 120.0),
                Point::new(350.0, 180.0),
                Point::new(400.0, 180.0),
            ]
        );
    }
}
