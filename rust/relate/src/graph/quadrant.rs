// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Quadrant classification of direction vectors.
//!
//! Quadrants are numbered counter-clockwise starting from the positive
//! x-axis: 0 = NE, 1 = NW, 2 = SW, 3 = SE. Comparing quadrants first gives
//! edge-end ordering its coarse structure; the orientation test refines
//! within a quadrant.

/// Quadrant of a non-zero direction vector.
pub fn quadrant(dx: f64, dy: f64) -> u8 {
    debug_assert!(
        dx != 0.0 || dy != 0.0,
        "zero-length direction has no quadrant"
    );
    if dx >= 0.0 {
        if dy >= 0.0 {
            0
        } else {
            3
        }
    } else if dy >= 0.0 {
        1
    } else {
        2
    }
}
