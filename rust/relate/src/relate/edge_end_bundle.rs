// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bundles of coincident edge ends.
//!
//! All edge ends at a node that share a direction are merged into one
//! [`EdgeEndBundle`] with a single combined label. The On location per
//! geometry is derived from the number of boundary ends in the bundle under
//! the active boundary node rule; side locations take Interior over Exterior
//! since any end claiming interior contact wins.

use std::cmp::Ordering;

use smallvec::SmallVec;

use planar_lite_geom::{BoundaryNodeRule, Coord, Location};

use crate::graph::edge::Edge;
use crate::graph::edge_end::EdgeEnd;
use crate::label::{Label, Position};
use crate::matrix::IntersectionMatrix;

/// A set of same-direction edge ends at one node, with their merged label.
#[derive(Debug, Clone)]
pub struct EdgeEndBundle {
    ends: SmallVec<[EdgeEnd; 2]>,
    label: Label,
}

impl EdgeEndBundle {
    /// Creates a bundle seeded with one edge end.
    pub fn new(end: EdgeEnd) -> Self {
        let mut bundle = Self {
            ends: SmallVec::new(),
            label: Label::new_line(),
        };
        bundle.insert(end);
        bundle
    }

    /// Adds another end with the same direction.
    pub fn insert(&mut self, end: EdgeEnd) {
        self.ends.push(end);
    }

    /// The node coordinate.
    pub fn coordinate(&self) -> Coord {
        self.ends[0].coordinate()
    }

    /// A representative end, used for angular ordering.
    pub fn representative(&self) -> &EdgeEnd {
        &self.ends[0]
    }

    /// Angular comparison against another bundle around the shared node.
    pub fn compare_direction(&self, other: &EdgeEndBundle) -> Ordering {
        self.ends[0].compare_direction(&other.ends[0])
    }

    /// The merged label. Meaningful only after [`Self::compute_label`].
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable access to the merged label.
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Computes the merged label from the member ends.
    pub fn compute_label(&mut self, rule: BoundaryNodeRule) {
        let is_area = self.ends.iter().any(|e| e.label().is_area());
        self.label = if is_area {
            Label::new_area()
        } else {
            Label::new_line()
        };
        for geom_index in 0..2 {
            self.compute_label_on(geom_index, rule);
            if is_area {
                self.compute_label_side(geom_index, Position::Left);
                self.compute_label_side(geom_index, Position::Right);
            }
        }
    }

    /// Merged On location for one geometry: the number of boundary ends in
    /// the bundle is put through the boundary node rule; otherwise any
    /// interior end makes the bundle interior.
    fn compute_label_on(&mut self, geom_index: usize, rule: BoundaryNodeRule) {
        let mut boundary_count = 0u32;
        let mut found_interior = false;
        for e in &self.ends {
            match e.label().location_on(geom_index) {
                Some(Location::Boundary) => boundary_count += 1,
                Some(Location::Interior) => found_interior = true,
                _ => {}
            }
        }
        let mut loc = None;
        if found_interior {
            loc = Some(Location::Interior);
        }
        if boundary_count > 0 {
            loc = Some(if rule.is_in_boundary(boundary_count) {
                Location::Boundary
            } else {
                Location::Interior
            });
        }
        if let Some(loc) = loc {
            self.label.set_location_on(geom_index, loc);
        }
    }

    /// Merged side location: Interior wins over Exterior.
    fn compute_label_side(&mut self, geom_index: usize, pos: Position) {
        let mut loc = None;
        for e in &self.ends {
            if !e.label().is_area_for(geom_index) {
                continue;
            }
            match e.label().location(geom_index, pos) {
                Some(Location::Interior) => {
                    loc = Some(Location::Interior);
                    break;
                }
                Some(Location::Exterior) => loc = Some(Location::Exterior),
                _ => {}
            }
        }
        if let Some(loc) = loc {
            self.label.set_location(geom_index, pos, loc);
        }
    }

    /// Contributes this bundle's label to the intersection matrix.
    pub fn update_im(&self, im: &mut IntersectionMatrix) {
        Edge::update_im(&self.label, im);
    }
}
