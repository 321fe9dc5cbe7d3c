// Copyright 2026 the Rankflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! The layouts only need two mappings: evenly spaced bands for item marks
//! and summary rows, and a two-point linear map for the distribution
//! view's polarity axis. Both are fixed at assembly time, so there is no
//! domain inference or tick machinery here.

/// Evenly divides a pixel range into `count` contiguous bands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    range: (f64, f64),
    count: usize,
}

impl BandScale {
    /// Creates a band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self { range, count }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the width of one band (zero when the scale is empty).
    pub fn bandwidth(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let (r0, r1) = self.range;
        (r1 - r0) / self.count as f64
    }

    /// Returns the start position of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + self.bandwidth() * index as f64
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn bands_partition_the_range() {
        let scale = BandScale::new((60.0, 580.0), 4);
        assert_eq!(scale.bandwidth(), 130.0);
        assert_eq!(scale.position(0), 60.0);
        assert_eq!(scale.position(3), 450.0);
        assert_eq!(scale.position(3) + scale.bandwidth(), 580.0);
    }

    #[test]
    fn empty_band_scale_collapses() {
        let scale = BandScale::new((0.0, 100.0), 0);
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.position(0), 0.0);
    }

    #[test]
    fn linear_map_hits_endpoints_and_center() {
        // The distribution view's polarity axis: pixels grow downward.
        let scale = LinearScale::new((-1.0, 1.0), (130.0, 45.0));
        assert_eq!(scale.map(-1.0), 130.0);
        assert_eq!(scale.map(1.0), 45.0);
        assert_eq!(scale.map(0.0), 87.5);
    }

    #[test]
    fn degenerate_linear_domain_maps_to_range_start() {
        let scale = LinearScale::new((2.0, 2.0), (10.0, 20.0));
        assert_eq!(scale.map(2.0), 10.0);
    }
}
