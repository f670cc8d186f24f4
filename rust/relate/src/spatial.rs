// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial index over a geometry's segments.
//!
//! A grid-based spatial hash: the plane is divided into square cells and
//! each segment is registered in every cell its envelope overlaps. Queries
//! fetch the candidate segments of the cells an envelope covers. Built once
//! per prepared geometry and queried many times.

use rustc_hash::{FxHashMap, FxHashSet};

use planar_lite_geom::algorithm::intersection::SegmentIntersection;
use planar_lite_geom::{Coord, Envelope, Geometry};

/// A spatial hash grid over line segments.
#[derive(Debug)]
pub struct SegmentIndex {
    cell_size: f64,
    grid: FxHashMap<(i64, i64), Vec<usize>>,
    segments: Vec<(Coord, Coord)>,
}

impl SegmentIndex {
    /// Indexes every segment of a geometry. The cell size is derived from
    /// the geometry's extent so that cells hold a handful of segments each.
    pub fn build(geom: &Geometry) -> Self {
        let mut segments = Vec::new();
        geom.for_each_segment(&mut |a, b| segments.push((a, b)));

        let env = geom.envelope();
        let extent = env.width().max(env.height());
        let divisions = (segments.len() as f64).sqrt().ceil().max(1.0);
        let cell_size = if extent > 0.0 { extent / divisions } else { 1.0 };

        let mut index = Self {
            cell_size,
            grid: FxHashMap::default(),
            segments,
        };
        for i in 0..index.segments.len() {
            let (a, b) = index.segments[i];
            let (x0, y0, x1, y1) = index.cell_range(&Envelope::from_coords(a, b));
            for cx in x0..=x1 {
                for cy in y0..=y1 {
                    index.grid.entry((cx, cy)).or_default().push(i);
                }
            }
        }
        index
    }

    /// Number of indexed segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the geometry had no segments (points only).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All distinct segments whose cells overlap the query envelope. May
    /// include segments that do not actually intersect the envelope.
    pub fn query(&self, env: &Envelope) -> Vec<(Coord, Coord)> {
        if env.is_null() {
            return Vec::new();
        }
        let (x0, y0, x1, y1) = self.cell_range(env);
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for cx in x0..=x1 {
            for cy in y0..=y1 {
                if let Some(ids) = self.grid.get(&(cx, cy)) {
                    for &i in ids {
                        if seen.insert(i) {
                            out.push(self.segments[i]);
                        }
                    }
                }
            }
        }
        out
    }

    /// Returns `true` if any indexed segment intersects the probe segment.
    pub fn intersects_segment(&self, a: Coord, b: Coord) -> bool {
        for (s0, s1) in self.query(&Envelope::from_coords(a, b)) {
            if SegmentIntersection::compute(s0, s1, a, b).has_intersection() {
                return true;
            }
        }
        false
    }

    fn cell_range(&self, env: &Envelope) -> (i64, i64, i64, i64) {
        (
            (env.min_x / self.cell_size).floor() as i64,
            (env.min_y / self.cell_size).floor() as i64,
            (env.max_x / self.cell_size).floor() as i64,
            (env.max_y / self.cell_size).floor() as i64,
        )
    }
}
