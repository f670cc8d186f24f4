// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The DE-9IM relate computation.
//!
//! Runs the full pipeline over two input geometries: builds their labelled
//! graphs, self-nodes each one, intersects the edge sets against each other,
//! merges everything into a relate node graph, labels the node stars and the
//! isolated components, and finally assembles the intersection matrix from
//! all the labelled pieces.
//!
//! Proper crossings between the two geometries are not noded into the
//! graphs: their entire matrix contribution is known from the input
//! dimensions alone and is applied directly, which keeps the node graph
//! small.

use tracing::debug;

use planar_lite_geom::geometry::{DIM_AREA, DIM_LINE};
use planar_lite_geom::algorithm::locate::PointLocator;
use planar_lite_geom::{BoundaryNodeRule, Geometry, Location};

use crate::graph::edge::Edge;
use crate::graph::geometry_graph::GeometryGraph;
use crate::graph::segment_intersector::IntersectionStats;
use crate::interrupt::CancellationToken;
use crate::matrix::IntersectionMatrix;
use crate::relate::edge_end_builder::compute_edge_ends;
use crate::relate::node_graph::RelateNodeGraph;
use crate::Result;

/// Computes the intersection matrix of two geometries.
pub struct RelateComputer<'a> {
    graphs: [GeometryGraph<'a>; 2],
    nodes: RelateNodeGraph,
    rule: BoundaryNodeRule,
    token: CancellationToken,
}

impl<'a> RelateComputer<'a> {
    /// Builds the geometry graphs of both inputs.
    pub fn new(
        a: &'a Geometry,
        b: &'a Geometry,
        rule: BoundaryNodeRule,
        token: CancellationToken,
    ) -> Result<Self> {
        Ok(Self {
            graphs: [
                GeometryGraph::new(a, 0, rule)?,
                GeometryGraph::new(b, 1, rule)?,
            ],
            nodes: RelateNodeGraph::new(),
            rule,
            token,
        })
    }

    /// Runs the computation and returns the finished matrix.
    pub fn compute_im(mut self) -> Result<IntersectionMatrix> {
        let mut im = IntersectionMatrix::new();
        // The exteriors of two bounded geometries always share the plane.
        im.set_at_least(Location::Exterior, Location::Exterior, 2);

        let env_a = self.graphs[0].geometry().envelope();
        let env_b = self.graphs[1].geometry().envelope();
        if !env_a.intersects(&env_b) {
            debug!("envelopes disjoint, taking fast path");
            self.compute_disjoint_im(&mut im);
            return Ok(im);
        }

        let token = self.token.clone();
        self.graphs[0].compute_self_nodes(&token)?;
        self.graphs[1].compute_self_nodes(&token)?;

        let [graph_a, graph_b] = &mut self.graphs;
        let intersector =
            GeometryGraph::compute_edge_intersections(graph_a, graph_b, false, &token)?;
        debug!(
            has_proper = intersector.stats().has_proper_intersection(),
            "cross intersections computed"
        );

        self.nodes.compute_intersection_nodes(&self.graphs[0], 0);
        self.nodes.compute_intersection_nodes(&self.graphs[1], 1);
        self.nodes.copy_nodes_and_labels(&self.graphs[0], 0);
        self.nodes.copy_nodes_and_labels(&self.graphs[1], 1);
        self.label_isolated_nodes();

        self.compute_proper_intersection_im(intersector.stats(), &mut im);

        let ends_a = compute_edge_ends(self.graphs[0].edges_mut());
        self.nodes.insert_edge_ends(ends_a);
        let ends_b = compute_edge_ends(self.graphs[1].edges_mut());
        self.nodes.insert_edge_ends(ends_b);

        self.label_node_edges()?;
        self.label_isolated_edges(0, 1)?;
        self.label_isolated_edges(1, 0)?;

        debug!(nodes = self.nodes.len(), "assembling matrix");
        self.update_im(&mut im);
        Ok(im)
    }

    /// Matrix for geometries with disjoint envelopes: each geometry lies
    /// entirely in the other's exterior.
    fn compute_disjoint_im(&self, im: &mut IntersectionMatrix) {
        let a = self.graphs[0].geometry();
        if !a.is_empty() {
            im.set(Location::Interior, Location::Exterior, a.dimension());
            im.set(Location::Boundary, Location::Exterior, a.boundary_dimension());
        }
        let b = self.graphs[1].geometry();
        if !b.is_empty() {
            im.set(Location::Exterior, Location::Interior, b.dimension());
            im.set(Location::Exterior, Location::Boundary, b.boundary_dimension());
        }
    }

    /// Applies the matrix contribution of proper crossings, which were
    /// detected but not noded. What a proper crossing implies depends only
    /// on the input dimensions.
    fn compute_proper_intersection_im(
        &self,
        stats: &IntersectionStats,
        im: &mut IntersectionMatrix,
    ) {
        let dim_a = self.graphs[0].geometry().dimension();
        let dim_b = self.graphs[1].geometry().dimension();
        let proper = stats.has_proper_intersection();
        let proper_interior = stats.has_proper_interior_intersection();

        if dim_a == DIM_AREA && dim_b == DIM_AREA {
            // Two areas crossing properly intersect in every way possible.
            if proper {
                im.set_at_least_pattern("212101212");
            }
        } else if dim_a == DIM_AREA && dim_b == DIM_LINE {
            if proper {
                im.set_at_least_pattern("FFF0FFFF2");
            }
            if proper_interior {
                im.set_at_least_pattern("1FFFFF1FF");
            }
        } else if dim_a == DIM_LINE && dim_b == DIM_AREA {
            if proper {
                im.set_at_least_pattern("F0FFFFFF2");
            }
            if proper_interior {
                im.set_at_least_pattern("1F1FFFFFF");
            }
        } else if dim_a == DIM_LINE && dim_b == DIM_LINE {
            if proper_interior {
                im.set_at_least_pattern("0FFFFFFFF");
            }
        }
    }

    /// Labels nodes that only one geometry knows about by locating them in
    /// the other geometry.
    fn label_isolated_nodes(&mut self) {
        let geoms = [self.graphs[0].geometry(), self.graphs[1].geometry()];
        for node in self.nodes.iter_mut() {
            if !node.is_isolated() {
                continue;
            }
            let target = if node.label().is_none_for(0) { 0 } else { 1 };
            let loc =
                PointLocator::new(self.rule).locate(node.coordinate(), geoms[target]);
            node.label_mut().set_all_locations(target, loc);
        }
    }

    /// Completes the labelling of every node's star.
    fn label_node_edges(&mut self) -> Result<()> {
        let geoms = [self.graphs[0].geometry(), self.graphs[1].geometry()];
        for node in self.nodes.iter_mut() {
            self.token.check()?;
            node.star_mut().compute_labelling(self.rule, geoms)?;
        }
        Ok(())
    }

    /// Labels the edges of one geometry that never touch the other by
    /// locating a representative point. A zero-dimensional target cannot
    /// contain any part of an edge, so the edge lies in its exterior.
    fn label_isolated_edges(&mut self, this_index: usize, target_index: usize) -> Result<()> {
        let target = self.graphs[target_index].geometry();
        let has_extent = target.dimension() > 0;
        for edge in self.graphs[this_index].edges_mut() {
            self.token.check()?;
            if !edge.is_isolated() {
                continue;
            }
            let loc = if has_extent {
                PointLocator::new(self.rule).locate(edge.coord(0), target)
            } else {
                Location::Exterior
            };
            edge.label_mut().set_all_locations(target_index, loc);
        }
        Ok(())
    }

    /// Folds isolated edges, node labels and node stars into the matrix.
    fn update_im(&self, im: &mut IntersectionMatrix) {
        for graph in &self.graphs {
            for edge in graph.edges() {
                if edge.is_isolated() {
                    Edge::update_im(edge.label(), im);
                }
            }
        }
        for node in self.nodes.iter() {
            node.update_im(im);
            node.update_im_from_edges(im);
        }
    }
}
