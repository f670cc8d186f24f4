// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nodes of the relate node graph.

use planar_lite_geom::{Coord, Location};

use crate::label::Label;
use crate::matrix::IntersectionMatrix;
use crate::relate::bundle_star::EdgeEndBundleStar;

/// One node of the combined relate graph: its merged label for both input
/// geometries plus the star of edge-end bundles radiating from it.
#[derive(Debug, Clone)]
pub struct RelateNode {
    coord: Coord,
    label: Label,
    star: EdgeEndBundleStar,
}

impl RelateNode {
    /// Creates an unlabelled node with an empty star.
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            label: Label::new_line(),
            star: EdgeEndBundleStar::new(),
        }
    }

    /// The node's coordinate.
    pub fn coordinate(&self) -> Coord {
        self.coord
    }

    /// The node's label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable access to the label.
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// The star of edge-end bundles at this node.
    pub fn star(&self) -> &EdgeEndBundleStar {
        &self.star
    }

    /// Mutable access to the star.
    pub fn star_mut(&mut self) -> &mut EdgeEndBundleStar {
        &mut self.star
    }

    /// Sets the On location for one geometry, overwriting any previous value.
    pub fn set_label_on(&mut self, geom_index: usize, loc: Location) {
        self.label.set_location_on(geom_index, loc);
    }

    /// Records that a boundary edge of a geometry passes through this node:
    /// area boundaries crossing an even number of times cancel out, so the
    /// location toggles between Boundary and Interior.
    pub fn set_label_boundary(&mut self, geom_index: usize) {
        let new_loc = match self.label.location_on(geom_index) {
            Some(Location::Boundary) => Location::Interior,
            Some(Location::Interior) => Location::Boundary,
            _ => Location::Boundary,
        };
        self.label.set_location_on(geom_index, new_loc);
    }

    /// Returns `true` if this node carries information for exactly one
    /// geometry, meaning it never interacts with the other one.
    pub fn is_isolated(&self) -> bool {
        self.label.geometry_count() == 1
    }

    /// Contributes the node's own point intersection to the matrix.
    pub fn update_im(&self, im: &mut IntersectionMatrix) {
        im.set_at_least_if_valid(self.label.location_on(0), self.label.location_on(1), 0);
    }

    /// Contributes the labels of the node's edge-end bundles to the matrix.
    pub fn update_im_from_edges(&self, im: &mut IntersectionMatrix) {
        self.star.update_im(im);
    }
}
