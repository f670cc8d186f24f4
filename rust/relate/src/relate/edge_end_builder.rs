// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge end generation from noded edges.
//!
//! Walks each edge's intersection list and emits an [`EdgeEnd`] for every
//! directed half of every maximal noded sub-segment. At each intersection
//! point two ends are created: one pointing back toward the previous
//! intersection (with a flipped label, since it runs against the edge
//! direction) and one pointing forward toward the next.

use crate::graph::edge::Edge;
use crate::graph::edge_end::EdgeEnd;
use crate::graph::edge_intersection::EdgeIntersection;

/// Builds the edge ends of a set of noded edges.
pub fn compute_edge_ends(edges: &mut [Edge]) -> Vec<EdgeEnd> {
    let mut ends = Vec::new();
    for edge in edges {
        compute_ends_for_edge(edge, &mut ends);
    }
    ends
}

fn compute_ends_for_edge(edge: &mut Edge, out: &mut Vec<EdgeEnd>) {
    let num_points = edge.num_points();
    let first = edge.coord(0);
    let last = edge.coord(num_points - 1);
    edge.intersections_mut()
        .add_endpoints(first, last, num_points);

    let list: Vec<EdgeIntersection> = edge.intersections().iter().cloned().collect();
    for (i, ei_curr) in list.iter().enumerate() {
        let ei_prev = if i > 0 { Some(&list[i - 1]) } else { None };
        let ei_next = list.get(i + 1);
        create_end_for_prev(edge, ei_curr, ei_prev, out);
        create_end_for_next(edge, ei_curr, ei_next, out);
    }
}

/// The end at `ei_curr` pointing back along the edge. Its direction point is
/// the previous vertex, unless a closer intersection lies between; it runs
/// against the edge direction, so the label sides are flipped.
fn create_end_for_prev(
    edge: &Edge,
    ei_curr: &EdgeIntersection,
    ei_prev: Option<&EdgeIntersection>,
    out: &mut Vec<EdgeEnd>,
) {
    let mut i_prev = ei_curr.segment_index;
    if ei_curr.dist == 0.0 {
        // The point is at a vertex: step back one segment, unless this is
        // the start of the edge.
        if i_prev == 0 {
            return;
        }
        i_prev -= 1;
    }
    let mut p_prev = edge.coord(i_prev);
    if let Some(prev) = ei_prev {
        if prev.segment_index >= i_prev {
            p_prev = prev.coord;
        }
    }
    let mut label = edge.label().clone();
    label.flip();
    out.push(EdgeEnd::new(ei_curr.coord, p_prev, label));
}

/// The end at `ei_curr` pointing forward along the edge, toward the next
/// vertex or the next intersection in the same segment.
fn create_end_for_next(
    edge: &Edge,
    ei_curr: &EdgeIntersection,
    ei_next: Option<&EdgeIntersection>,
    out: &mut Vec<EdgeEnd>,
) {
    let i_next = ei_curr.segment_index + 1;
    if i_next >= edge.num_points() && ei_next.is_none() {
        return;
    }
    let mut p_next = edge.coord(i_next);
    if let Some(next) = ei_next {
        if next.segment_index == ei_curr.segment_index {
            p_next = next.coord;
        }
    }
    out.push(EdgeEnd::new(ei_curr.coord, p_next, edge.label().clone()));
}
