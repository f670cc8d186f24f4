// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Planar-Lite Geom
//!
//! Immutable planar geometry model (points, line strings, polygons and
//! collections thereof) together with the low-level computational-geometry
//! algorithms the topology engine is built on: orientation index, robust
//! segment intersection, ray-crossing point-in-ring tests and a full point
//! locator honoring pluggable boundary node rules.
//!
//! Geometries own their coordinate data and are never mutated by algorithms
//! in this workspace; everything above reads them through shared references.

pub mod algorithm;
pub mod boundary;
pub mod coord;
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod location;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

pub use boundary::BoundaryNodeRule;
pub use coord::Coord;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use geometry::{Geometry, LineString, Polygon};
pub use location::Location;
