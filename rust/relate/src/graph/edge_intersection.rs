// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intersection points recorded along an edge.
//!
//! Edges are never physically split. Instead each edge keeps a sorted list
//! of the points where another edge (or the same geometry's other edges)
//! crosses it, keyed by (segment index, distance along segment). The relate
//! layer walks this list to generate edge ends for every maximal noded
//! sub-segment.

use planar_lite_geom::Coord;

/// One intersection point on an edge, positioned by containing segment and
/// the edge-distance metric within that segment.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeIntersection {
    pub coord: Coord,
    pub segment_index: usize,
    pub dist: f64,
}

impl EdgeIntersection {
    fn key(&self) -> (usize, f64) {
        (self.segment_index, self.dist)
    }
}

/// Sorted, deduplicated list of intersections along one edge.
#[derive(Debug, Clone, Default)]
pub struct EdgeIntersectionList {
    list: Vec<EdgeIntersection>,
}

impl EdgeIntersectionList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an intersection, keeping the list sorted. A point already
    /// present at the same (segment, distance) key is not duplicated.
    pub fn add(&mut self, coord: Coord, segment_index: usize, dist: f64) {
        let key = (segment_index, dist);
        let pos = self.list.partition_point(|ei| {
            let (s, d) = ei.key();
            s < key.0 || (s == key.0 && d.total_cmp(&key.1).is_lt())
        });
        if let Some(existing) = self.list.get(pos) {
            if existing.key().0 == key.0 && existing.key().1 == key.1 {
                return;
            }
        }
        self.list.insert(
            pos,
            EdgeIntersection {
                coord,
                segment_index,
                dist,
            },
        );
    }

    /// Adds the edge's own endpoints, so that walking the list yields every
    /// maximal noded sub-segment of the edge. The final point is keyed past
    /// the last real segment so it always sorts to the end.
    pub fn add_endpoints(&mut self, first: Coord, last: Coord, num_points: usize) {
        self.add(first, 0, 0.0);
        self.add(last, num_points - 1, 0.0);
    }

    /// Returns `true` if no intersections have been recorded.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of recorded intersections.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// The intersections in edge order.
    pub fn iter(&self) -> std::slice::Iter<'_, EdgeIntersection> {
        self.list.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeIntersectionList {
    type Item = &'a EdgeIntersection;
    type IntoIter = std::slice::Iter<'a, EdgeIntersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
