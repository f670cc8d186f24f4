// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brute-force edge set intersection.
//!
//! Runs the pairwise segment intersection test over every segment pair of
//! one or two edge sets and records the discovered intersection points in
//! the edges' intersection lists. Trivial self-intersections (adjacent
//! segments of one edge sharing their common vertex, and a ring's closing
//! vertex) are filtered out.

use planar_lite_geom::algorithm::intersection::SegmentIntersection;
use planar_lite_geom::Coord;

use crate::graph::edge::Edge;
use crate::interrupt::CancellationToken;
use crate::Result;

/// Summary facts gathered while intersecting edge sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionStats {
    has_intersection: bool,
    has_proper: bool,
    has_proper_interior: bool,
    proper_intersection_point: Option<Coord>,
}

impl IntersectionStats {
    /// Returns `true` if any non-trivial intersection was found.
    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    /// Returns `true` if a proper intersection (strictly interior to both
    /// segments) was found.
    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }

    /// Returns `true` if a proper intersection was found that does not
    /// coincide with a boundary node of either geometry.
    pub fn has_proper_interior_intersection(&self) -> bool {
        self.has_proper_interior
    }

    /// One proper intersection point, if any was found.
    pub fn proper_intersection_point(&self) -> Option<Coord> {
        self.proper_intersection_point
    }
}

/// Intersects edge sets segment by segment.
///
/// `include_proper` controls whether proper intersection points are recorded
/// in the edge intersection lists (they are always reflected in the stats).
/// `record_isolated` marks every edge touched by any intersection as
/// non-isolated.
#[derive(Debug)]
pub struct SegmentIntersector {
    include_proper: bool,
    record_isolated: bool,
    boundary_nodes: Option<[Vec<Coord>; 2]>,
    stats: IntersectionStats,
}

impl SegmentIntersector {
    pub fn new(include_proper: bool, record_isolated: bool) -> Self {
        Self {
            include_proper,
            record_isolated,
            boundary_nodes: None,
            stats: IntersectionStats::default(),
        }
    }

    /// Supplies the boundary node coordinates of both geometries, needed to
    /// distinguish proper interior intersections from proper intersections
    /// at boundary points.
    pub fn set_boundary_nodes(&mut self, nodes_a: Vec<Coord>, nodes_b: Vec<Coord>) {
        self.boundary_nodes = Some([nodes_a, nodes_b]);
    }

    /// The facts gathered so far.
    pub fn stats(&self) -> &IntersectionStats {
        &self.stats
    }

    /// Intersects every edge of one set against every other edge of the same
    /// set. With `test_all` the edges are also tested against themselves;
    /// without it self-tests are skipped, which is valid when every edge is
    /// a ring of a valid polygon.
    pub fn compute_self_intersections(
        &mut self,
        edges: &mut [Edge],
        test_all: bool,
        token: &CancellationToken,
    ) -> Result<()> {
        for i in 0..edges.len() {
            for j in i..edges.len() {
                if i == j && !test_all {
                    continue;
                }
                token.check()?;
                if i == j {
                    self.intersect_edge_with_self(edges, i);
                } else {
                    self.intersect_edge_pair(edges, i, j);
                }
            }
        }
        Ok(())
    }

    /// Intersects every edge of `edges_a` against every edge of `edges_b`.
    pub fn compute_cross_intersections(
        &mut self,
        edges_a: &mut [Edge],
        edges_b: &mut [Edge],
        token: &CancellationToken,
    ) -> Result<()> {
        for ia in 0..edges_a.len() {
            for ib in 0..edges_b.len() {
                token.check()?;
                let segs_a = edges_a[ia].num_points().saturating_sub(1);
                let segs_b = edges_b[ib].num_points().saturating_sub(1);
                for s0 in 0..segs_a {
                    for s1 in 0..segs_b {
                        let sect = SegmentIntersection::compute(
                            edges_a[ia].coord(s0),
                            edges_a[ia].coord(s0 + 1),
                            edges_b[ib].coord(s1),
                            edges_b[ib].coord(s1 + 1),
                        );
                        if !sect.has_intersection() {
                            continue;
                        }
                        if self.record_isolated {
                            edges_a[ia].set_isolated(false);
                            edges_b[ib].set_isolated(false);
                        }
                        self.record(&sect);
                        if self.include_proper || !sect.is_proper() {
                            edges_a[ia].add_intersections(&sect, s0, 0);
                            edges_b[ib].add_intersections(&sect, s1, 1);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn intersect_edge_pair(&mut self, edges: &mut [Edge], i: usize, j: usize) {
        let segs_i = edges[i].num_points().saturating_sub(1);
        let segs_j = edges[j].num_points().saturating_sub(1);
        for s0 in 0..segs_i {
            for s1 in 0..segs_j {
                let sect = SegmentIntersection::compute(
                    edges[i].coord(s0),
                    edges[i].coord(s0 + 1),
                    edges[j].coord(s1),
                    edges[j].coord(s1 + 1),
                );
                if !sect.has_intersection() {
                    continue;
                }
                if self.record_isolated {
                    edges[i].set_isolated(false);
                    edges[j].set_isolated(false);
                }
                self.record(&sect);
                if self.include_proper || !sect.is_proper() {
                    edges[i].add_intersections(&sect, s0, 0);
                    edges[j].add_intersections(&sect, s1, 1);
                }
            }
        }
    }

    fn intersect_edge_with_self(&mut self, edges: &mut [Edge], i: usize) {
        let segs = edges[i].num_points().saturating_sub(1);
        let closed = edges[i].is_closed();
        for s0 in 0..segs {
            for s1 in (s0 + 1)..segs {
                let sect = SegmentIntersection::compute(
                    edges[i].coord(s0),
                    edges[i].coord(s0 + 1),
                    edges[i].coord(s1),
                    edges[i].coord(s1 + 1),
                );
                if !sect.has_intersection() {
                    continue;
                }
                if Self::is_trivial(&sect, closed, s0, s1, segs) {
                    continue;
                }
                if self.record_isolated {
                    edges[i].set_isolated(false);
                }
                self.record(&sect);
                if self.include_proper || !sect.is_proper() {
                    edges[i].add_intersections(&sect, s0, 0);
                    edges[i].add_intersections(&sect, s1, 1);
                }
            }
        }
    }

    /// A single-point intersection of two segments of the same edge is
    /// expected at the shared vertex of adjacent segments, and between the
    /// first and last segment of a ring.
    fn is_trivial(sect: &SegmentIntersection, closed: bool, s0: usize, s1: usize, segs: usize) -> bool {
        if sect.num_points() != 1 {
            return false;
        }
        if s1 == s0 + 1 {
            return true;
        }
        closed && s0 == 0 && s1 == segs - 1
    }

    fn record(&mut self, sect: &SegmentIntersection) {
        self.stats.has_intersection = true;
        if sect.is_proper() {
            self.stats.proper_intersection_point = Some(sect.point(0));
            self.stats.has_proper = true;
            if !self.is_boundary_point(sect) {
                self.stats.has_proper_interior = true;
            }
        }
    }

    fn is_boundary_point(&self, sect: &SegmentIntersection) -> bool {
        let Some(node_sets) = &self.boundary_nodes else {
            return false;
        };
        node_sets.iter().flatten().any(|&c| {
            (0..sect.num_points()).any(|i| sect.point(i) == c)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use planar_lite_geom::Location;

    fn line(coords: &[(f64, f64)]) -> Edge {
        Edge::new(
            coords.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
            Label::line_for(0, Location::Interior),
        )
    }

    #[test]
    fn cross_intersection_marks_edges_and_records_points() {
        let mut a = vec![line(&[(0.0, -1.0), (0.0, 1.0)])];
        let mut b = vec![line(&[(-1.0, 0.0), (1.0, 0.0)])];
        let mut si = SegmentIntersector::new(true, true);
        si.compute_cross_intersections(&mut a, &mut b, &CancellationToken::new())
            .unwrap();
        assert!(si.stats().has_intersection());
        assert!(si.stats().has_proper_intersection());
        assert!(!a[0].is_isolated());
        assert!(!b[0].is_isolated());
        assert_eq!(a[0].intersections().len(), 1);
    }

    #[test]
    fn proper_points_skipped_without_include_proper() {
        let mut a = vec![line(&[(0.0, -1.0), (0.0, 1.0)])];
        let mut b = vec![line(&[(-1.0, 0.0), (1.0, 0.0)])];
        let mut si = SegmentIntersector::new(false, true);
        si.compute_cross_intersections(&mut a, &mut b, &CancellationToken::new())
            .unwrap();
        assert!(si.stats().has_proper_intersection());
        assert!(a[0].intersections().is_empty());
        assert!(b[0].intersections().is_empty());
    }

    #[test]
    fn ring_closing_vertex_is_trivial() {
        let mut edges = vec![line(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ])];
        let mut si = SegmentIntersector::new(true, false);
        si.compute_self_intersections(&mut edges, true, &CancellationToken::new())
            .unwrap();
        assert!(!si.stats().has_intersection());
        assert!(edges[0].intersections().is_empty());
    }

    #[test]
    fn self_crossing_line_is_found() {
        // A bowtie path crossing itself at (1, 1).
        let mut edges = vec![line(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)])];
        let mut si = SegmentIntersector::new(true, false);
        si.compute_self_intersections(&mut edges, true, &CancellationToken::new())
            .unwrap();
        assert!(si.stats().has_intersection());
        assert!(si.stats().has_proper_intersection());
    }

    #[test]
    fn proper_interior_excludes_boundary_nodes() {
        let mut a = vec![line(&[(0.0, -1.0), (0.0, 1.0)])];
        let mut b = vec![line(&[(-1.0, 0.0), (1.0, 0.0)])];
        let mut si = SegmentIntersector::new(false, true);
        si.set_boundary_nodes(vec![Coord::new(0.0, 0.0)], vec![]);
        si.compute_cross_intersections(&mut a, &mut b, &CancellationToken::new())
            .unwrap();
        assert!(si.stats().has_proper_intersection());
        assert!(!si.stats().has_proper_interior_intersection());
    }

    #[test]
    fn cancelled_token_aborts() {
        let mut a = vec![line(&[(0.0, -1.0), (0.0, 1.0)])];
        let mut b = vec![line(&[(-1.0, 0.0), (1.0, 0.0)])];
        let token = CancellationToken::new();
        token.request();
        let mut si = SegmentIntersector::new(true, true);
        assert!(si
            .compute_cross_intersections(&mut a, &mut b, &token)
            .is_err());
    }
}
