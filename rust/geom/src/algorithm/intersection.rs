// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pairwise segment intersection.
//!
//! [`SegmentIntersection`] classifies the intersection of two line segments
//! as empty, a single point, or a collinear overlap, and records whether a
//! point intersection is *proper* (strictly interior to both segments).
//! Intersections at shared vertices snap exactly to the input coordinate, so
//! downstream node merging can key on exact coordinate equality.

use nalgebra::Vector3;

use crate::coord::Coord;
use crate::envelope::Envelope;
use crate::algorithm::orientation::{orientation_index, Orientation};

/// Classification of a segment/segment intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentIntersectionKind {
    /// The segments do not intersect.
    None,
    /// The segments intersect in a single point.
    Point,
    /// The segments overlap along a collinear sub-segment.
    Collinear,
}

/// The intersection of two segments `p1 -> p2` and `q1 -> q2`.
#[derive(Debug, Clone)]
pub struct SegmentIntersection {
    kind: SegmentIntersectionKind,
    pts: [Coord; 2],
    proper: bool,
    input: [[Coord; 2]; 2],
}

impl SegmentIntersection {
    /// Computes the intersection of segments `p1 -> p2` and `q1 -> q2`.
    pub fn compute(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Self {
        let mut result = Self {
            kind: SegmentIntersectionKind::None,
            pts: [p1, p1],
            proper: false,
            input: [[p1, p2], [q1, q2]],
        };

        if !Envelope::from_coords(p1, p2).intersects(&Envelope::from_coords(q1, q2)) {
            return result;
        }

        let pq1 = orientation_index(p1, p2, q1);
        let pq2 = orientation_index(p1, p2, q2);
        if (pq1 == Orientation::Clockwise && pq2 == Orientation::Clockwise)
            || (pq1 == Orientation::CounterClockwise && pq2 == Orientation::CounterClockwise)
        {
            return result;
        }

        let qp1 = orientation_index(q1, q2, p1);
        let qp2 = orientation_index(q1, q2, p2);
        if (qp1 == Orientation::Clockwise && qp2 == Orientation::Clockwise)
            || (qp1 == Orientation::CounterClockwise && qp2 == Orientation::CounterClockwise)
        {
            return result;
        }

        let collinear = pq1 == Orientation::Collinear
            && pq2 == Orientation::Collinear
            && qp1 == Orientation::Collinear
            && qp2 == Orientation::Collinear;
        if collinear {
            result.compute_collinear();
            return result;
        }

        // At least one endpoint lies exactly on the other segment: snap the
        // intersection to that vertex rather than recomputing it.
        if pq1 == Orientation::Collinear
            || pq2 == Orientation::Collinear
            || qp1 == Orientation::Collinear
            || qp2 == Orientation::Collinear
        {
            result.proper = false;
            let pt = if p1 == q1 || p1 == q2 {
                p1
            } else if p2 == q1 || p2 == q2 {
                p2
            } else if pq1 == Orientation::Collinear {
                q1
            } else if pq2 == Orientation::Collinear {
                q2
            } else if qp1 == Orientation::Collinear {
                p1
            } else {
                p2
            };
            result.pts[0] = pt;
            result.kind = SegmentIntersectionKind::Point;
        } else {
            result.proper = true;
            result.pts[0] = intersection_point(p1, p2, q1, q2);
            result.kind = SegmentIntersectionKind::Point;
        }
        result
    }

    fn compute_collinear(&mut self) {
        let [p1, p2] = self.input[0];
        let [q1, q2] = self.input[1];
        let p_env = Envelope::from_coords(p1, p2);
        let q_env = Envelope::from_coords(q1, q2);
        let p_q1 = p_env.contains_coord(q1);
        let p_q2 = p_env.contains_coord(q2);
        let q_p1 = q_env.contains_coord(p1);
        let q_p2 = q_env.contains_coord(p2);

        if p_q1 && p_q2 {
            self.set_points(q1, q2);
        } else if q_p1 && q_p2 {
            self.set_points(p1, p2);
        } else if p_q1 && q_p1 {
            self.set_overlap_or_point(q1, p1, !p_q2 && !q_p2);
        } else if p_q1 && q_p2 {
            self.set_overlap_or_point(q1, p2, !p_q2 && !q_p1);
        } else if p_q2 && q_p1 {
            self.set_overlap_or_point(q2, p1, !p_q1 && !q_p2);
        } else if p_q2 && q_p2 {
            self.set_overlap_or_point(q2, p2, !p_q1 && !q_p1);
        }
    }

    fn set_points(&mut self, a: Coord, b: Coord) {
        self.pts = [a, b];
        self.kind = if a == b {
            SegmentIntersectionKind::Point
        } else {
            SegmentIntersectionKind::Collinear
        };
    }

    fn set_overlap_or_point(&mut self, a: Coord, b: Coord, endpoint_touch: bool) {
        if a == b && endpoint_touch {
            self.pts = [a, a];
            self.kind = SegmentIntersectionKind::Point;
        } else {
            self.set_points(a, b);
        }
    }

    /// The classification of this intersection.
    pub fn kind(&self) -> SegmentIntersectionKind {
        self.kind
    }

    /// Returns `true` if the segments intersect at all.
    pub fn has_intersection(&self) -> bool {
        self.kind != SegmentIntersectionKind::None
    }

    /// Number of intersection points (0, 1 or 2).
    pub fn num_points(&self) -> usize {
        match self.kind {
            SegmentIntersectionKind::None => 0,
            SegmentIntersectionKind::Point => 1,
            SegmentIntersectionKind::Collinear => 2,
        }
    }

    /// The `i`-th intersection point.
    pub fn point(&self, i: usize) -> Coord {
        self.pts[i]
    }

    /// Returns `true` if the intersection is a single point strictly interior
    /// to both segments.
    pub fn is_proper(&self) -> bool {
        self.has_intersection() && self.proper
    }

    /// Distance metric of intersection point `int_index` along input segment
    /// `input_index`, used to order intersections along an edge. This is the
    /// maximum coordinate delta, not Euclidean distance: it is cheaper and
    /// cannot underflow for near-axis-parallel segments.
    pub fn edge_distance(&self, input_index: usize, int_index: usize) -> f64 {
        let [s0, s1] = self.input[input_index];
        Self::edge_distance_of(self.pts[int_index], s0, s1)
    }

    /// Distance metric of `p` along the segment `p0 -> p1`.
    pub fn edge_distance_of(p: Coord, p0: Coord, p1: Coord) -> f64 {
        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();
        if p == p0 {
            0.0
        } else if p == p1 {
            dx.max(dy)
        } else {
            let pdx = (p.x - p0.x).abs();
            let pdy = (p.y - p0.y).abs();
            let dist = if dx > dy { pdx } else { pdy };
            // Sanity fallback: a distinct point must not report distance 0.
            if dist == 0.0 {
                pdx.max(pdy)
            } else {
                dist
            }
        }
    }
}

/// Intersection point of two properly crossing segments, computed via
/// homogeneous coordinates after translating to the local origin to reduce
/// round-off. The inputs are known to cross strictly, so the homogeneous
/// w component is nonzero up to rounding; a degenerate result falls back to
/// the nearest input endpoint.
fn intersection_point(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Coord {
    let env = Envelope::from_coords(p1, p2);
    let ox = (env.min_x + env.max_x) / 2.0;
    let oy = (env.min_y + env.max_y) / 2.0;

    let h = |c: Coord| Vector3::new(c.x - ox, c.y - oy, 1.0);
    let line_p = h(p1).cross(&h(p2));
    let line_q = h(q1).cross(&h(q2));
    let x = line_p.cross(&line_q);

    if x.z == 0.0 || !x.z.is_finite() {
        return nearest_endpoint(p1, p2, q1, q2);
    }
    let pt = Coord::new(x.x / x.z + ox, x.y / x.z + oy);
    if !pt.is_finite() {
        return nearest_endpoint(p1, p2, q1, q2);
    }

    // Guard against a badly conditioned solve drifting outside both segments.
    let in_p = Envelope::from_coords(p1, p2).contains_coord(pt);
    let in_q = Envelope::from_coords(q1, q2).contains_coord(pt);
    if !in_p && !in_q {
        return nearest_endpoint(p1, p2, q1, q2);
    }
    pt
}

/// The input endpoint closest to the other segment, used as a safe fallback
/// intersection for near-degenerate inputs.
fn nearest_endpoint(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Coord {
    fn dist_to_segment(p: Coord, a: Coord, b: Coord) -> f64 {
        let ab = a.vector_to(b);
        let len2 = ab.norm_squared();
        if len2 == 0.0 {
            return p.distance(a);
        }
        let t = (a.vector_to(p).dot(&ab) / len2).clamp(0.0, 1.0);
        p.distance(Coord::new(a.x + t * ab.x, a.y + t * ab.y))
    }
    let mut best = p1;
    let mut best_dist = dist_to_segment(p1, q1, q2);
    for (c, d) in [
        (p2, dist_to_segment(p2, q1, q2)),
        (q1, dist_to_segment(q1, p1, p2)),
        (q2, dist_to_segment(q2, p1, p2)),
    ] {
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn disjoint_segments() {
        let s = SegmentIntersection::compute(c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0), c(1.0, 1.0));
        assert!(!s.has_intersection());
        assert_eq!(s.num_points(), 0);
    }

    #[test]
    fn proper_crossing() {
        let s = SegmentIntersection::compute(c(0.0, -1.0), c(0.0, 1.0), c(-1.0, 0.0), c(1.0, 0.0));
        assert_eq!(s.kind(), SegmentIntersectionKind::Point);
        assert!(s.is_proper());
        assert_relative_eq!(s.point(0).x, 0.0);
        assert_relative_eq!(s.point(0).y, 0.0);
    }

    #[test]
    fn endpoint_touch_is_not_proper() {
        let s = SegmentIntersection::compute(c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(2.0, 1.0));
        assert_eq!(s.kind(), SegmentIntersectionKind::Point);
        assert!(!s.is_proper());
        assert_eq!(s.point(0), c(1.0, 0.0));
    }

    #[test]
    fn vertex_on_interior_snaps_to_vertex() {
        let s = SegmentIntersection::compute(c(0.0, 0.0), c(2.0, 0.0), c(1.0, 0.0), c(1.0, 5.0));
        assert_eq!(s.kind(), SegmentIntersectionKind::Point);
        assert!(!s.is_proper());
        assert_eq!(s.point(0), c(1.0, 0.0));
    }

    #[test]
    fn collinear_overlap() {
        let s = SegmentIntersection::compute(c(0.0, 0.0), c(3.0, 0.0), c(1.0, 0.0), c(2.0, 0.0));
        assert_eq!(s.kind(), SegmentIntersectionKind::Collinear);
        assert_eq!(s.num_points(), 2);
        assert!(!s.is_proper());
    }

    #[test]
    fn collinear_endpoint_touch_is_point() {
        let s = SegmentIntersection::compute(c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(2.0, 0.0));
        assert_eq!(s.kind(), SegmentIntersectionKind::Point);
        assert_eq!(s.point(0), c(1.0, 0.0));
    }

    #[test]
    fn collinear_disjoint() {
        let s = SegmentIntersection::compute(c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0));
        assert!(!s.has_intersection());
    }

    #[test]
    fn edge_distance_orders_points_along_edge() {
        let p0 = c(0.0, 0.0);
        let p1 = c(10.0, 1.0);
        let near = SegmentIntersection::edge_distance_of(c(2.0, 0.2), p0, p1);
        let far = SegmentIntersection::edge_distance_of(c(7.0, 0.7), p0, p1);
        assert!(near < far);
        assert_eq!(SegmentIntersection::edge_distance_of(p0, p0, p1), 0.0);
    }

    #[test]
    fn near_collinear_crossing_stays_on_segment() {
        // Nearly parallel segments crossing at a shallow angle.
        let s = SegmentIntersection::compute(
            c(0.0, 0.0),
            c(100.0, 1.0),
            c(0.0, 1.0),
            c(100.0, 0.0),
        );
        assert!(s.has_intersection());
        let pt = s.point(0);
        assert!(pt.x > 0.0 && pt.x < 100.0);
        assert_relative_eq!(pt.x, 50.0, epsilon = 1e-6);
    }
}
