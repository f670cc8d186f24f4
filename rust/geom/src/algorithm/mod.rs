// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Low-level computational-geometry algorithms.

pub mod intersection;
pub mod locate;
pub mod orientation;
pub mod ray_crossing;

pub use intersection::{SegmentIntersection, SegmentIntersectionKind};
pub use locate::{locate_in_areas, PointLocator};
pub use orientation::{is_ccw, orientation_index, Orientation};
pub use ray_crossing::RayCrossingCounter;
