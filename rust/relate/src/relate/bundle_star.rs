// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The star of edge-end bundles around a node.
//!
//! Bundles are kept in counter-clockwise angular order starting from the
//! positive x-axis. Labelling walks the star once to propagate area side
//! locations across the wedges between consecutive bundles, then fills any
//! remaining unknowns from a cached point-in-area probe of the node itself.

use planar_lite_geom::algorithm::locate::locate_in_areas;
use planar_lite_geom::{BoundaryNodeRule, Coord, Geometry, Location};

use crate::error::Error;
use crate::graph::edge_end::EdgeEnd;
use crate::label::Position;
use crate::matrix::IntersectionMatrix;
use crate::relate::edge_end_bundle::EdgeEndBundle;
use crate::Result;

/// Angularly ordered edge-end bundles at one node.
#[derive(Debug, Clone, Default)]
pub struct EdgeEndBundleStar {
    bundles: Vec<EdgeEndBundle>,
    // Lazily computed location of the node in each geometry's areas.
    pt_in_area: [Option<Location>; 2],
}

impl EdgeEndBundleStar {
    /// Creates an empty star.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an edge end, merging it into an existing bundle when its
    /// direction coincides with one.
    ///
    /// A linear scan keeps the near-equality of directions local to each
    /// comparison; the bundle count per node is small.
    pub fn insert(&mut self, end: EdgeEnd) {
        let probe = EdgeEndBundle::new(end.clone());
        for (i, bundle) in self.bundles.iter_mut().enumerate() {
            match probe.compare_direction(bundle) {
                std::cmp::Ordering::Equal => {
                    bundle.insert(end);
                    return;
                }
                std::cmp::Ordering::Less => {
                    self.bundles.insert(i, probe);
                    return;
                }
                std::cmp::Ordering::Greater => {}
            }
        }
        self.bundles.push(probe);
    }

    /// The bundles in counter-clockwise order.
    pub fn bundles(&self) -> &[EdgeEndBundle] {
        &self.bundles
    }

    /// Returns `true` if no edge ends radiate from the node.
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Computes merged labels for all bundles and completes them by side
    /// propagation and point-in-area probing.
    pub fn compute_labelling(
        &mut self,
        rule: BoundaryNodeRule,
        geoms: [&Geometry; 2],
    ) -> Result<()> {
        for bundle in &mut self.bundles {
            bundle.compute_label(rule);
        }
        self.propagate_side_labels(0)?;
        self.propagate_side_labels(1)?;

        // A line edge labelled Boundary for a geometry marks a dimensional
        // collapse: an area component of that geometry degenerated to a
        // line. Unknown locations at such a node are Exterior rather than
        // whatever the area probe would say.
        let mut has_collapse = [false, false];
        for bundle in &self.bundles {
            for (geom_index, flag) in has_collapse.iter_mut().enumerate() {
                if bundle.label().is_line_for(geom_index)
                    && bundle.label().location_on(geom_index) == Some(Location::Boundary)
                {
                    *flag = true;
                }
            }
        }

        for i in 0..self.bundles.len() {
            let coord = self.bundles[i].coordinate();
            for geom_index in 0..2 {
                if !self.bundles[i].label().is_any_none_for(geom_index) {
                    continue;
                }
                let loc = if has_collapse[geom_index] {
                    Location::Exterior
                } else {
                    self.node_location_in_areas(geom_index, coord, geoms[geom_index])
                };
                self.bundles[i]
                    .label_mut()
                    .set_all_locations_if_none(geom_index, loc);
            }
        }
        Ok(())
    }

    fn node_location_in_areas(
        &mut self,
        geom_index: usize,
        coord: Coord,
        geom: &Geometry,
    ) -> Location {
        *self.pt_in_area[geom_index].get_or_insert_with(|| locate_in_areas(coord, geom))
    }

    /// Walks the star in angular order carrying the area location of the
    /// current wedge, filling unknown sides and checking consistency of the
    /// known ones.
    fn propagate_side_labels(&mut self, geom_index: usize) -> Result<()> {
        let mut start_loc = None;
        for bundle in &self.bundles {
            let label = bundle.label();
            if label.is_area_for(geom_index) {
                if let Some(loc) = label.location(geom_index, Position::Left) {
                    start_loc = Some(loc);
                }
            }
        }
        // No area edge of this geometry touches the node.
        let Some(start_loc) = start_loc else {
            return Ok(());
        };

        let mut curr_loc = start_loc;
        for bundle in &mut self.bundles {
            let coord = bundle.coordinate();
            let label = bundle.label_mut();
            if label.location_on(geom_index).is_none() {
                label.set_location_on(geom_index, curr_loc);
            }
            if !label.is_area_for(geom_index) {
                continue;
            }
            let left = label.location(geom_index, Position::Left);
            let right = label.location(geom_index, Position::Right);
            match right {
                Some(right_loc) => {
                    if right_loc != curr_loc {
                        return Err(Error::TopologyException {
                            message: "side location conflict",
                            at: coord,
                        });
                    }
                    let Some(left_loc) = left else {
                        return Err(Error::TopologyException {
                            message: "side has location missing its pair",
                            at: coord,
                        });
                    };
                    curr_loc = left_loc;
                }
                None => {
                    label.set_location(geom_index, Position::Right, curr_loc);
                    label.set_location(geom_index, Position::Left, curr_loc);
                }
            }
        }
        Ok(())
    }

    /// Contributes every bundle's label to the intersection matrix.
    pub fn update_im(&self, im: &mut IntersectionMatrix) {
        for bundle in &self.bundles {
            bundle.update_im(im);
        }
    }
}
