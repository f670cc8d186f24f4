// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate-keyed node storage.

use std::collections::BTreeMap;

use planar_lite_geom::{Coord, Location};

use crate::graph::node::Node;

/// Map from exact coordinate to node. Nodes are merged by coordinate
/// equality; iteration order is the coordinate order, which keeps graph
/// traversal deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct NodeMap {
    nodes: BTreeMap<Coord, Node>,
}

impl NodeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The node at a coordinate, inserting an unlabelled one if absent.
    pub fn add_node(&mut self, coord: Coord) -> &mut Node {
        self.nodes.entry(coord).or_insert_with(|| Node::new(coord))
    }

    /// The node at a coordinate, if present.
    pub fn find(&self, coord: Coord) -> Option<&Node> {
        self.nodes.get(&coord)
    }

    /// Nodes in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Mutable iteration in coordinate order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the map holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Coordinates of all nodes located on a geometry's boundary.
    pub fn boundary_coords(&self, geom_index: usize) -> Vec<Coord> {
        self.nodes
            .values()
            .filter(|n| n.label().location_on(geom_index) == Some(Location::Boundary))
            .map(|n| n.coordinate())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_lite_geom::BoundaryNodeRule;

    #[test]
    fn merges_by_coordinate() {
        let mut map = NodeMap::new();
        map.add_node(Coord::new(1.0, 2.0));
        map.add_node(Coord::new(1.0, 2.0));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iterates_in_coordinate_order() {
        let mut map = NodeMap::new();
        map.add_node(Coord::new(2.0, 0.0));
        map.add_node(Coord::new(1.0, 5.0));
        map.add_node(Coord::new(1.0, 1.0));
        let xs: Vec<(f64, f64)> = map.iter().map(|n| (n.coordinate().x, n.coordinate().y)).collect();
        assert_eq!(xs, vec![(1.0, 1.0), (1.0, 5.0), (2.0, 0.0)]);
    }

    #[test]
    fn boundary_coords_filters_by_location() {
        let mut map = NodeMap::new();
        map.add_node(Coord::new(0.0, 0.0))
            .add_boundary_endpoint(0, BoundaryNodeRule::Mod2);
        map.add_node(Coord::new(1.0, 0.0));
        assert_eq!(map.boundary_coords(0), vec![Coord::new(0.0, 0.0)]);
        assert!(map.boundary_coords(1).is_empty());
    }
}
