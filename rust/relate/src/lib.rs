// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Planar-Lite Relate
//!
//! A DE-9IM topological relationship engine for planar geometries.
//!
//! The engine decomposes each input into a labelled planar graph, nodes the
//! graphs against each other, merges the edge ends around every node into
//! angular bundles, and assembles the 3x3 intersection matrix from the
//! labelled pieces. On top of the matrix sit the named OGC predicates
//! (intersects, touches, crosses, within, contains, overlaps, equals,
//! covers, coveredBy) and [`PreparedGeometry`] for repeated evaluation
//! against one indexed geometry.
//!
//! ```
//! use planar_lite_relate::{relate, Geometry};
//!
//! let a = Geometry::polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
//! let b = Geometry::point(1.0, 1.0);
//! let im = relate(&b, &a).unwrap();
//! assert_eq!(im.to_string(), "0FFFFF212");
//! assert!(im.is_within());
//! ```

pub mod error;
pub mod graph;
pub mod interrupt;
pub mod label;
pub mod matrix;
pub mod predicate;
pub mod prepared;
pub mod relate;
pub mod spatial;

pub use error::{Error, Result};
pub use interrupt::CancellationToken;
pub use matrix::IntersectionMatrix;
pub use predicate::{
    contains, covered_by, covers, crosses, disjoint, equals, intersects, overlaps,
    relate_pattern, touches, within,
};
pub use prepared::PreparedGeometry;
pub use relate::{relate, relate_with, RelateComputer};

// The geometry model is re-exported so predicate callers need only this crate.
pub use planar_lite_geom::{BoundaryNodeRule, Coord, Envelope, Geometry, Location};
