// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry-to-graph conversion.
//!
//! A [`GeometryGraph`] decomposes one input geometry of a relate operation
//! into labelled edges and nodes. Points become labelled nodes; line strings
//! become Interior-labelled edges whose endpoints are boundary candidates;
//! polygon rings become area edges labelled Boundary on the edge with the
//! ring's interior on the correct side regardless of ring winding.

use planar_lite_geom::coord::remove_repeated;
use planar_lite_geom::algorithm::orientation::is_ccw;
use planar_lite_geom::{BoundaryNodeRule, Coord, Error as GeomError, Geometry, Location};

use crate::graph::edge::Edge;
use crate::graph::node_map::NodeMap;
use crate::graph::segment_intersector::{IntersectionStats, SegmentIntersector};
use crate::interrupt::CancellationToken;
use crate::label::Label;
use crate::Result;

/// The labelled planar graph of one relate input.
#[derive(Debug)]
pub struct GeometryGraph<'a> {
    geom: &'a Geometry,
    arg_index: usize,
    rule: BoundaryNodeRule,
    nodes: NodeMap,
    edges: Vec<Edge>,
}

impl<'a> GeometryGraph<'a> {
    /// Builds the graph of `geom` as relate argument `arg_index` (0 or 1)
    /// under the given boundary node rule.
    pub fn new(geom: &'a Geometry, arg_index: usize, rule: BoundaryNodeRule) -> Result<Self> {
        let mut graph = Self {
            geom,
            arg_index,
            rule,
            nodes: NodeMap::new(),
            edges: Vec::new(),
        };
        graph.add(geom)?;
        Ok(graph)
    }

    /// The input geometry.
    pub fn geometry(&self) -> &'a Geometry {
        self.geom
    }

    /// Which relate argument this graph represents.
    pub fn arg_index(&self) -> usize {
        self.arg_index
    }

    /// The boundary node rule in effect.
    pub fn rule(&self) -> BoundaryNodeRule {
        self.rule
    }

    /// The graph's nodes.
    pub fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    /// The graph's edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Mutable access to the edges, used during intersection noding.
    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    /// Coordinates of all nodes on this geometry's boundary.
    pub fn boundary_nodes(&self) -> Vec<Coord> {
        self.nodes.boundary_coords(self.arg_index)
    }

    fn add(&mut self, geom: &Geometry) -> Result<()> {
        if geom.is_empty() {
            return Ok(());
        }
        match geom {
            Geometry::Point(c) => {
                self.insert_point(*c, Location::Interior);
                Ok(())
            }
            Geometry::MultiPoint(ps) => {
                for &c in ps {
                    self.insert_point(c, Location::Interior);
                }
                Ok(())
            }
            Geometry::LineString(l) => self.add_line_string(l.coords()),
            Geometry::MultiLineString(ls) => ls
                .iter()
                .filter(|l| !l.is_empty())
                .try_for_each(|l| self.add_line_string(l.coords())),
            Geometry::Polygon(p) => self.add_polygon(p.shell(), p.holes()),
            Geometry::MultiPolygon(ps) => ps
                .iter()
                .filter(|p| !p.is_empty())
                .try_for_each(|p| self.add_polygon(p.shell(), p.holes())),
            Geometry::Collection(gs) => gs.iter().try_for_each(|g| self.add(g)),
        }
    }

    fn add_line_string(&mut self, coords: &[Coord]) -> Result<()> {
        let pts = remove_repeated(coords);
        if pts.len() < 2 {
            return Err(GeomError::TooFewLinePoints.into());
        }
        // Endpoints of a closed line coincide: the endpoint count then
        // resolves them to Interior under the Mod-2 rule, giving closed
        // lines their empty boundary.
        self.insert_boundary_point(pts[0]);
        self.insert_boundary_point(pts[pts.len() - 1]);
        self.edges.push(Edge::new(
            pts,
            Label::line_for(self.arg_index, Location::Interior),
        ));
        Ok(())
    }

    fn add_polygon(&mut self, shell: &[Coord], holes: &[Vec<Coord>]) -> Result<()> {
        self.add_polygon_ring(shell, Location::Exterior, Location::Interior)?;
        for hole in holes {
            // Hole interiors face the opposite way from the shell.
            self.add_polygon_ring(hole, Location::Interior, Location::Exterior)?;
        }
        Ok(())
    }

    /// Adds one ring as an area edge. `cw_left`/`cw_right` are the side
    /// locations for a clockwise ring; a counter-clockwise ring gets them
    /// swapped so the labelled sides match the actual geometry.
    fn add_polygon_ring(&mut self, ring: &[Coord], cw_left: Location, cw_right: Location) -> Result<()> {
        let pts = remove_repeated(ring);
        if pts.len() < 4 {
            return Err(GeomError::InvalidRing(pts.first().copied().unwrap_or_default()).into());
        }
        let (left, right) = if is_ccw(&pts) {
            (cw_right, cw_left)
        } else {
            (cw_left, cw_right)
        };
        self.insert_point(pts[0], Location::Boundary);
        self.edges.push(Edge::new(
            pts,
            Label::area_for(self.arg_index, Location::Boundary, left, right),
        ));
        Ok(())
    }

    fn insert_point(&mut self, coord: Coord, loc: Location) {
        self.nodes.add_node(coord).set_location_on(self.arg_index, loc);
    }

    fn insert_boundary_point(&mut self, coord: Coord) {
        self.nodes
            .add_node(coord)
            .add_boundary_endpoint(self.arg_index, self.rule);
    }

    /// Finds self-intersections among this geometry's own edges and promotes
    /// the intersection points to graph nodes. Ring-only inputs skip the
    /// per-edge self test, since a valid ring cannot self-intersect.
    pub fn compute_self_nodes(&mut self, token: &CancellationToken) -> Result<IntersectionStats> {
        let test_all = !matches!(
            self.geom,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_)
        );
        let mut si = SegmentIntersector::new(true, false);
        si.compute_self_intersections(&mut self.edges, test_all, token)?;
        self.add_self_intersection_nodes();
        Ok(*si.stats())
    }

    fn add_self_intersection_nodes(&mut self) {
        let mut pending: Vec<(Coord, Location)> = Vec::new();
        for edge in &self.edges {
            let loc = edge
                .label()
                .location_on(self.arg_index)
                .unwrap_or(Location::Interior);
            for ei in edge.intersections() {
                pending.push((ei.coord, loc));
            }
        }
        for (coord, loc) in pending {
            // An existing boundary node wins over any self-intersection.
            if self
                .nodes
                .find(coord)
                .is_some_and(|n| n.label().location_on(self.arg_index) == Some(Location::Boundary))
            {
                continue;
            }
            if loc == Location::Boundary {
                self.insert_boundary_point(coord);
            } else {
                self.insert_point(coord, loc);
            }
        }
    }

    /// Intersects the edges of two graphs against each other, recording the
    /// intersection points on both edge sets. Proper intersection points are
    /// recorded only when `include_proper` is set; they are always reflected
    /// in the returned stats.
    pub fn compute_edge_intersections(
        ga: &mut GeometryGraph<'_>,
        gb: &mut GeometryGraph<'_>,
        include_proper: bool,
        token: &CancellationToken,
    ) -> Result<SegmentIntersector> {
        let mut si = SegmentIntersector::new(include_proper, true);
        si.set_boundary_nodes(ga.boundary_nodes(), gb.boundary_nodes());
        si.compute_cross_intersections(&mut ga.edges, &mut gb.edges, token)?;
        Ok(si)
    }
}
