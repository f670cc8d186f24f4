// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Labelled graph edges.

use planar_lite_geom::algorithm::intersection::SegmentIntersection;
use planar_lite_geom::Coord;

use crate::graph::edge_intersection::EdgeIntersectionList;
use crate::label::{Label, Position};
use crate::matrix::IntersectionMatrix;

/// A labelled chain of coordinates: one line string or one polygon ring of
/// an input geometry. An edge starts out isolated and is marked otherwise as
/// soon as any intersection with the other geometry is found.
#[derive(Debug, Clone)]
pub struct Edge {
    pts: Vec<Coord>,
    label: Label,
    intersections: EdgeIntersectionList,
    isolated: bool,
}

impl Edge {
    /// Creates an edge over a coordinate chain with its parent label.
    pub fn new(pts: Vec<Coord>, label: Label) -> Self {
        Self {
            pts,
            label,
            intersections: EdgeIntersectionList::new(),
            isolated: true,
        }
    }

    /// Number of coordinates in the chain.
    pub fn num_points(&self) -> usize {
        self.pts.len()
    }

    /// The coordinate at chain position `i`.
    pub fn coord(&self, i: usize) -> Coord {
        self.pts[i]
    }

    /// The full coordinate chain.
    pub fn coords(&self) -> &[Coord] {
        &self.pts
    }

    /// Returns `true` if the chain is closed (a ring).
    pub fn is_closed(&self) -> bool {
        self.pts.len() > 1 && self.pts.first() == self.pts.last()
    }

    /// The edge's label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable access to the label.
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// The recorded intersections along this edge.
    pub fn intersections(&self) -> &EdgeIntersectionList {
        &self.intersections
    }

    /// Mutable access to the intersection list.
    pub fn intersections_mut(&mut self) -> &mut EdgeIntersectionList {
        &mut self.intersections
    }

    /// Returns `true` if no intersection with the other geometry touches
    /// this edge.
    pub fn is_isolated(&self) -> bool {
        self.isolated
    }

    /// Marks the edge as touched by the other geometry.
    pub fn set_isolated(&mut self, isolated: bool) {
        self.isolated = isolated;
    }

    /// Records all points of a computed segment intersection on this edge,
    /// where `seg_index` is the edge segment involved and `input_index`
    /// selects which input of the intersection this edge was.
    pub fn add_intersections(
        &mut self,
        sect: &SegmentIntersection,
        seg_index: usize,
        input_index: usize,
    ) {
        for i in 0..sect.num_points() {
            self.add_intersection(sect.point(i), seg_index, sect.edge_distance(input_index, i));
        }
    }

    /// Records one intersection point, normalizing a point at a segment's
    /// far vertex onto the start of the next segment so every point has a
    /// canonical (segment, distance) position.
    pub fn add_intersection(&mut self, pt: Coord, seg_index: usize, dist: f64) {
        let mut norm_seg = seg_index;
        let mut norm_dist = dist;
        let next = seg_index + 1;
        if next < self.pts.len() && pt == self.pts[next] {
            norm_seg = next;
            norm_dist = 0.0;
        }
        self.intersections.add(pt, norm_seg, norm_dist);
    }

    /// Contributes a (possibly merged) edge label to the intersection
    /// matrix: the On locations intersect with dimension 1, and, for area
    /// labels, each side pair contributes dimension 2.
    pub fn update_im(label: &Label, im: &mut IntersectionMatrix) {
        im.set_at_least_if_valid(
            label.location(0, Position::On),
            label.location(1, Position::On),
            1,
        );
        if label.is_area() {
            im.set_at_least_if_valid(
                label.location(0, Position::Left),
                label.location(1, Position::Left),
                2,
            );
            im.set_at_least_if_valid(
                label.location(0, Position::Right),
                label.location(1, Position::Right),
                2,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_lite_geom::Location;

    fn line_edge() -> Edge {
        Edge::new(
            vec![
                Coord::new(0.0, 0.0),
                Coord::new(1.0, 0.0),
                Coord::new(2.0, 0.0),
            ],
            Label::line_for(0, Location::Interior),
        )
    }

    #[test]
    fn new_edge_is_isolated() {
        assert!(line_edge().is_isolated());
    }

    #[test]
    fn intersection_at_vertex_normalizes_forward() {
        let mut e = line_edge();
        // Point (1,0) reported at the end of segment 0 must land on segment 1.
        e.add_intersection(Coord::new(1.0, 0.0), 0, 1.0);
        let ei = e.intersections().iter().next().unwrap();
        assert_eq!(ei.segment_index, 1);
        assert_eq!(ei.dist, 0.0);
    }

    #[test]
    fn closed_detection() {
        let ring = Edge::new(
            vec![
                Coord::new(0.0, 0.0),
                Coord::new(1.0, 0.0),
                Coord::new(0.0, 1.0),
                Coord::new(0.0, 0.0),
            ],
            Label::area_for(0, Location::Boundary, Location::Interior, Location::Exterior),
        );
        assert!(ring.is_closed());
        assert!(!line_edge().is_closed());
    }

    #[test]
    fn update_im_line_and_area() {
        let mut im = IntersectionMatrix::new();
        let mut label = Label::area_for(
            0,
            Location::Boundary,
            Location::Interior,
            Location::Exterior,
        );
        label.set_all_locations(1, Location::Interior);
        Edge::update_im(&label, &mut im);
        assert_eq!(im.get(Location::Boundary, Location::Interior), 1);
        assert_eq!(im.get(Location::Interior, Location::Interior), 2);
        assert_eq!(im.get(Location::Exterior, Location::Interior), 2);
    }
}
