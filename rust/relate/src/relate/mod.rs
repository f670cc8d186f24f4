// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relate engine entry points.

pub mod bundle_star;
pub mod computer;
pub mod edge_end_builder;
pub mod edge_end_bundle;
pub mod node_graph;
pub mod relate_node;

use planar_lite_geom::{BoundaryNodeRule, Geometry};

use crate::interrupt::CancellationToken;
use crate::matrix::IntersectionMatrix;
use crate::Result;

pub use bundle_star::EdgeEndBundleStar;
pub use computer::RelateComputer;
pub use edge_end_bundle::EdgeEndBundle;
pub use node_graph::RelateNodeGraph;
pub use relate_node::RelateNode;

/// Computes the DE-9IM intersection matrix of two geometries under the OGC
/// (Mod-2) boundary node rule.
pub fn relate(a: &Geometry, b: &Geometry) -> Result<IntersectionMatrix> {
    relate_with(a, b, BoundaryNodeRule::OGC, CancellationToken::new())
}

/// Computes the DE-9IM intersection matrix under an explicit boundary node
/// rule with cooperative cancellation.
pub fn relate_with(
    a: &Geometry,
    b: &Geometry,
    rule: BoundaryNodeRule,
    token: CancellationToken,
) -> Result<IntersectionMatrix> {
    a.validate()?;
    b.validate()?;
    RelateComputer::new(a, b, rule, token)?.compute_im()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_rejected_before_computation() {
        let bad = Geometry::point(f64::NAN, 0.0);
        let ok = Geometry::point(0.0, 0.0);
        assert!(matches!(
            relate(&bad, &ok),
            Err(crate::Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn swapped_arguments_transpose() {
        let a = Geometry::polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
        let b = Geometry::line_string(&[(1.0, 1.0), (3.0, 1.0)]);
        let ab = relate(&a, &b).unwrap();
        let ba = relate(&b, &a).unwrap();
        assert_eq!(ab.transposed(), ba);
    }
}
