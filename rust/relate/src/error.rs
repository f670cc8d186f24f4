// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for relate computations.
//!
//! The three failure classes are deliberately distinct so callers can tell
//! "your geometry is invalid" from "the algorithm hit an inconsistency" from
//! "the computation was interrupted".

use planar_lite_geom::Coord;

/// Result type alias for relate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a relate computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input geometry failed structural validation; rejected before any
    /// graph construction.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] planar_lite_geom::Error),

    /// A topological inconsistency was detected mid-computation, typically
    /// caused by unnoded self-intersections in the input.
    #[error("topology exception at {at}: {message}")]
    TopologyException {
        message: &'static str,
        at: Coord,
    },

    /// The computation was cancelled through its interrupt token. No partial
    /// matrix is ever returned.
    #[error("relate computation cancelled")]
    Cancelled,

    /// A DE-9IM pattern string was not 9 characters over `012TF*`.
    #[error("invalid DE-9IM pattern: {0:?}")]
    InvalidPattern(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = Error::TopologyException {
            message: "side location conflict",
            at: Coord::new(1.0, 2.0),
        };
        assert!(e.to_string().contains("side location conflict"));
        assert!(e.to_string().contains("(1, 2)"));
        assert!(Error::Cancelled.to_string().contains("cancelled"));
    }

    #[test]
    fn invalid_geometry_converts() {
        let ge = planar_lite_geom::Error::TooFewLinePoints;
        let e: Error = ge.into();
        assert!(matches!(e, Error::InvalidGeometry(_)));
    }
}
