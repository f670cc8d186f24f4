// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The planar graph built per input geometry.
//!
//! Each input of a relate operation is turned into a [`GeometryGraph`]: a
//! set of labelled [`Edge`]s (line strings and polygon rings) plus a
//! coordinate-keyed [`NodeMap`] of labelled vertices (line endpoints, ring
//! anchor points and discovered intersection points). Edges are noded
//! logically: intersection points are recorded in per-edge intersection
//! lists rather than by physically splitting coordinate arrays, and the
//! relate layer derives [`EdgeEnd`]s from those lists.

pub mod edge;
pub mod edge_end;
pub mod edge_intersection;
pub mod geometry_graph;
pub mod node;
pub mod node_map;
pub mod quadrant;
pub mod segment_intersector;

pub use edge::Edge;
pub use edge_end::EdgeEnd;
pub use edge_intersection::{EdgeIntersection, EdgeIntersectionList};
pub use geometry_graph::GeometryGraph;
pub use node::Node;
pub use node_map::NodeMap;
pub use segment_intersector::{IntersectionStats, SegmentIntersector};
