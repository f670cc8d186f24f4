// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Directed edge ends.
//!
//! An [`EdgeEnd`] is one directed half of a noded edge segment, anchored at a
//! node. Its direction is the vector to the next distinct coordinate along
//! the edge. Edge ends around a node are totally ordered by angle,
//! counter-clockwise from the positive x-axis; two ends whose normalized
//! directions differ by less than [`DIRECTION_EPSILON`] compare equal and are
//! bundled together downstream.

use std::cmp::Ordering;

use nalgebra::Vector2;
use planar_lite_geom::Coord;

use crate::graph::quadrant::quadrant;
use crate::label::Label;

/// Tolerance on the cross product of normalized direction vectors below
/// which two edge ends are considered collinear. Upstream intersection
/// computation snaps intersection points to input vertices, so genuinely
/// coincident directions compare exactly; the epsilon absorbs the rounding
/// of properly-computed interior intersection points on near-collinear
/// input.
pub const DIRECTION_EPSILON: f64 = 1e-12;

/// A directed half-edge anchored at a node.
#[derive(Debug, Clone)]
pub struct EdgeEnd {
    coord: Coord,
    dir_coord: Coord,
    dx: f64,
    dy: f64,
    quadrant: u8,
    label: Label,
}

impl EdgeEnd {
    /// Creates an edge end anchored at `coord`, pointing toward `dir_coord`.
    /// The two coordinates must be distinct.
    pub fn new(coord: Coord, dir_coord: Coord, label: Label) -> Self {
        let dx = dir_coord.x - coord.x;
        let dy = dir_coord.y - coord.y;
        debug_assert!(
            dx != 0.0 || dy != 0.0,
            "edge end with zero-length direction at {coord}"
        );
        Self {
            coord,
            dir_coord,
            dx,
            dy,
            quadrant: quadrant(dx, dy),
            label,
        }
    }

    /// The anchor coordinate (the node this end radiates from).
    pub fn coordinate(&self) -> Coord {
        self.coord
    }

    /// The coordinate the end points toward.
    pub fn directed_coordinate(&self) -> Coord {
        self.dir_coord
    }

    /// The quadrant of the direction vector.
    pub fn quadrant(&self) -> u8 {
        self.quadrant
    }

    /// The label inherited from the parent edge (flipped if this end runs
    /// against the edge direction).
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable access to the label.
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Angular comparison of two edge ends around a shared node:
    /// counter-clockwise from the positive x-axis. Directions within
    /// [`DIRECTION_EPSILON`] of collinear (same quadrant) compare equal.
    pub fn compare_direction(&self, other: &EdgeEnd) -> Ordering {
        if self.dx == other.dx && self.dy == other.dy {
            return Ordering::Equal;
        }
        if self.quadrant != other.quadrant {
            return self.quadrant.cmp(&other.quadrant);
        }
        let v_self = Vector2::new(self.dx, self.dy).normalize();
        let v_other = Vector2::new(other.dx, other.dy).normalize();
        // Positive when self lies counter-clockwise of other.
        let cross = v_other.x * v_self.y - v_other.y * v_self.x;
        if cross.abs() <= DIRECTION_EPSILON {
            Ordering::Equal
        } else if cross > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use planar_lite_geom::Location;

    fn end(dx: f64, dy: f64) -> EdgeEnd {
        EdgeEnd::new(
            Coord::new(0.0, 0.0),
            Coord::new(dx, dy),
            Label::line_for(0, Location::Interior),
        )
    }

    #[test]
    fn quadrant_ordering() {
        let e = end(1.0, 0.1);
        let n = end(-0.1, 1.0);
        let w = end(-1.0, -0.1);
        let s = end(0.1, -1.0);
        assert_eq!(e.compare_direction(&n), Ordering::Less);
        assert_eq!(n.compare_direction(&w), Ordering::Less);
        assert_eq!(w.compare_direction(&s), Ordering::Less);
        assert_eq!(s.compare_direction(&e), Ordering::Greater);
    }

    #[test]
    fn within_quadrant_ordering() {
        let low = end(1.0, 0.1);
        let high = end(0.1, 1.0);
        assert_eq!(low.compare_direction(&high), Ordering::Less);
        assert_eq!(high.compare_direction(&low), Ordering::Greater);
    }

    #[test]
    fn same_direction_different_length_is_equal() {
        let a = end(1.0, 1.0);
        let b = end(2.5, 2.5);
        assert_eq!(a.compare_direction(&b), Ordering::Equal);
    }

    #[test]
    fn nearly_collinear_within_epsilon_is_equal() {
        let a = end(1.0, 0.0);
        let b = end(1.0, 1e-13);
        assert_eq!(a.compare_direction(&b), Ordering::Equal);
    }

    #[test]
    fn direction_components_from_coordinates() {
        let e = EdgeEnd::new(
            Coord::new(1.0, 2.0),
            Coord::new(4.0, 6.0),
            Label::line_for(0, Location::Interior),
        );
        assert_relative_eq!(e.dx, 3.0);
        assert_relative_eq!(e.dy, 4.0);
        assert_eq!(e.quadrant(), 0);
    }

    #[test]
    fn distinct_directions_in_quadrant() {
        let a = end(1.0, 0.0);
        let b = end(1.0, 1e-6);
        assert_eq!(a.compare_direction(&b), Ordering::Less);
    }
}
