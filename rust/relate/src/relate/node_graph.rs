// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The combined node graph of a relate computation.
//!
//! Merges the nodes of both geometry graphs plus every cross-intersection
//! point into one coordinate-keyed map of [`RelateNode`]s, and attaches the
//! generated edge ends to their nodes' stars.

use std::collections::BTreeMap;

use planar_lite_geom::{Coord, Location};

use crate::graph::edge_end::EdgeEnd;
use crate::graph::geometry_graph::GeometryGraph;
use crate::relate::relate_node::RelateNode;

/// Coordinate-keyed map of relate nodes. Iteration order is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RelateNodeGraph {
    nodes: BTreeMap<Coord, RelateNode>,
}

impl RelateNodeGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The node at a coordinate, inserting an unlabelled one if absent.
    pub fn add_node(&mut self, coord: Coord) -> &mut RelateNode {
        self.nodes
            .entry(coord)
            .or_insert_with(|| RelateNode::new(coord))
    }

    /// Nodes in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &RelateNode> {
        self.nodes.values()
    }

    /// Mutable iteration in coordinate order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RelateNode> {
        self.nodes.values_mut()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Promotes every cross-intersection point on `graph`'s edges to a node.
    /// A point on a boundary (ring) edge toggles the node's boundary state,
    /// so coincident ring crossings cancel pairwise; a point on an interior
    /// (line) edge marks the node interior unless it is already stronger.
    pub fn compute_intersection_nodes(&mut self, graph: &GeometryGraph<'_>, geom_index: usize) {
        for edge in graph.edges() {
            let e_loc = edge.label().location_on(geom_index);
            for ei in edge.intersections() {
                let node = self.add_node(ei.coord);
                if e_loc == Some(Location::Boundary) {
                    node.set_label_boundary(geom_index);
                } else if node.label().is_none_for(geom_index) {
                    node.set_label_on(geom_index, Location::Interior);
                }
            }
        }
    }

    /// Copies the nodes of a geometry graph, overwriting intersection-derived
    /// locations with the graph's own (endpoint-count-derived) labels.
    pub fn copy_nodes_and_labels(&mut self, graph: &GeometryGraph<'_>, geom_index: usize) {
        for graph_node in graph.nodes().iter() {
            if let Some(loc) = graph_node.label().location_on(geom_index) {
                self.add_node(graph_node.coordinate())
                    .set_label_on(geom_index, loc);
            }
        }
    }

    /// Attaches edge ends to the stars of their anchor nodes, creating the
    /// nodes as needed.
    pub fn insert_edge_ends(&mut self, ends: Vec<EdgeEnd>) {
        for end in ends {
            self.add_node(end.coordinate()).star_mut().insert(end);
        }
    }
}
