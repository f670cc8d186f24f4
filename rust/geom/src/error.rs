// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for geometry validation.

use crate::coord::Coord;

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a geometry fails structural validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A coordinate contains NaN or infinity.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// A line string needs at least two points.
    #[error("line string has fewer than 2 points")]
    TooFewLinePoints,

    /// A polygon ring must be closed and have at least 4 points.
    #[error("invalid ring starting at {0}: rings must be closed with at least 4 points")]
    InvalidRing(Coord),
}
