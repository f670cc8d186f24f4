// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-in-ring test by counting ray crossings.
//!
//! Counts crossings of a rightward horizontal ray from the query point with
//! the ring's segments. An odd count means the point is inside; landing
//! exactly on a segment reports Boundary.

use crate::coord::Coord;
use crate::location::Location;
use crate::algorithm::orientation::{orientation_index, Orientation};

/// Incremental ray-crossing counter for a single query point.
#[derive(Debug)]
pub struct RayCrossingCounter {
    point: Coord,
    crossing_count: u32,
    on_segment: bool,
}

impl RayCrossingCounter {
    /// Starts a count for the given query point.
    pub fn new(point: Coord) -> Self {
        Self {
            point,
            crossing_count: 0,
            on_segment: false,
        }
    }

    /// Locates a point relative to a closed ring.
    pub fn locate_point_in_ring(point: Coord, ring: &[Coord]) -> Location {
        let mut counter = Self::new(point);
        for w in ring.windows(2) {
            counter.count_segment(w[0], w[1]);
            if counter.on_segment {
                break;
            }
        }
        counter.location()
    }

    /// Counts one segment against the ray.
    pub fn count_segment(&mut self, p1: Coord, p2: Coord) {
        let p = self.point;

        // Segment entirely to the left of the ray origin.
        if p1.x < p.x && p2.x < p.x {
            return;
        }

        // Query point is a segment endpoint.
        if p == p2 || p == p1 {
            self.on_segment = true;
            return;
        }

        // Horizontal segment at ray height: on it or not, never a crossing.
        if p1.y == p.y && p2.y == p.y {
            let min_x = p1.x.min(p2.x);
            let max_x = p1.x.max(p2.x);
            if p.x >= min_x && p.x <= max_x {
                self.on_segment = true;
            }
            return;
        }

        // The segment straddles the ray's y. Count it if the point is
        // strictly left of the upward-directed segment.
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation_index(p1, p2, p);
            if orient == Orientation::Collinear {
                self.on_segment = true;
                return;
            }
            // Re-orient downward segments so the left test is consistent.
            if p2.y < p1.y {
                orient = match orient {
                    Orientation::Clockwise => Orientation::CounterClockwise,
                    Orientation::CounterClockwise => Orientation::Clockwise,
                    Orientation::Collinear => Orientation::Collinear,
                };
            }
            if orient == Orientation::CounterClockwise {
                self.crossing_count += 1;
            }
        }
    }

    /// The location determined by the segments seen so far.
    pub fn location(&self) -> Location {
        if self.on_segment {
            Location::Boundary
        } else if self.crossing_count % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}
