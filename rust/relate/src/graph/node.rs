// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Labelled graph nodes.

use planar_lite_geom::{BoundaryNodeRule, Coord, Location};

use crate::label::Label;

/// A labelled vertex of a geometry graph: a line endpoint, a ring anchor
/// point or a discovered intersection point.
///
/// A node tracks, per input geometry, how many line endpoints of that
/// geometry terminate at it. The active [`BoundaryNodeRule`] turns that
/// count into an On location, which is how all four rules (not just Mod-2)
/// are supported uniformly.
#[derive(Debug, Clone)]
pub struct Node {
    coord: Coord,
    label: Label,
    boundary_count: [u32; 2],
}

impl Node {
    /// Creates an unlabelled node at a coordinate.
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            label: Label::new_line(),
            boundary_count: [0; 2],
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

    /// Number of line endpoints of a geometry terminating at this node.
    pub fn boundary_count(&self, geom_index: usize) -> u32 {
        self.boundary_count[geom_index]
    }

    /// Sets the On location for a geometry, unless it is already Boundary.
    /// Boundary is the strongest location and is never downgraded.
    pub fn set_location_on(&mut self, geom_index: usize, loc: Location) {
        if self.label.location_on(geom_index) == Some(Location::Boundary) {
            return;
        }
        self.label.set_location_on(geom_index, loc);
    }

    /// Registers one more line endpoint of a geometry terminating here and
    /// re-derives the On location from the updated count under `rule`.
    pub fn add_boundary_endpoint(&mut self, geom_index: usize, rule: BoundaryNodeRule) {
        self.boundary_count[geom_index] += 1;
        let loc = if rule.is_in_boundary(self.boundary_count[geom_index]) {
            Location::Boundary
        } else {
            Location::Interior
        };
        self.label.set_location_on(geom_index, loc);
    }

    /// Returns `true` if nothing is known about this node for a geometry.
    pub fn is_unlabelled_for(&self, geom_index: usize) -> bool {
        self.label.is_none_for(geom_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod2_rule_toggles_with_endpoint_count() {
        let mut n = Node::new(Coord::new(0.0, 0.0));
        n.add_boundary_endpoint(0, BoundaryNodeRule::Mod2);
        assert_eq!(n.label().location_on(0), Some(Location::Boundary));
        n.add_boundary_endpoint(0, BoundaryNodeRule::Mod2);
        assert_eq!(n.label().location_on(0), Some(Location::Interior));
        n.add_boundary_endpoint(0, BoundaryNodeRule::Mod2);
        assert_eq!(n.label().location_on(0), Some(Location::Boundary));
    }

    #[test]
    fn endpoint_rule_stays_boundary() {
        let mut n = Node::new(Coord::new(0.0, 0.0));
        n.add_boundary_endpoint(1, BoundaryNodeRule::EndPoint);
        n.add_boundary_endpoint(1, BoundaryNodeRule::EndPoint);
        assert_eq!(n.label().location_on(1), Some(Location::Boundary));
    }

    #[test]
    fn multivalent_rule_needs_repeat() {
        let mut n = Node::new(Coord::new(0.0, 0.0));
        n.add_boundary_endpoint(0, BoundaryNodeRule::MultivalentEndPoint);
        assert_eq!(n.label().location_on(0), Some(Location::Interior));
        n.add_boundary_endpoint(0, BoundaryNodeRule::MultivalentEndPoint);
        assert_eq!(n.label().location_on(0), Some(Location::Boundary));
    }

    #[test]
    fn boundary_location_is_sticky() {
        let mut n = Node::new(Coord::new(0.0, 0.0));
        n.set_location_on(0, Location::Boundary);
        n.set_location_on(0, Location::Interior);
        assert_eq!(n.label().location_on(0), Some(Location::Boundary));
    }
}
