// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Orientation index and ring winding tests.

use crate::coord::Coord;

/// The turn direction of a point relative to a directed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// Signed integer form: -1 clockwise, 0 collinear, +1 counter-clockwise.
    pub fn sign(self) -> i32 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }
}

/// Orientation of `q` relative to the directed segment `p1 -> p2`.
///
/// Computed as the sign of the cross product (p2 - p1) x (q - p1).
pub fn orientation_index(p1: Coord, p2: Coord, q: Coord) -> Orientation {
    let det = (p2.x - p1.x) * (q.y - p1.y) - (p2.y - p1.y) * (q.x - p1.x);
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Twice the signed area of a closed ring. Positive for counter-clockwise
/// winding.
pub fn signed_area2(ring: &[Coord]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for w in ring.windows(2) {
        sum += (w[0].x - w[1].x) * (w[0].y + w[1].y);
    }
    sum
}

/// Returns `true` if the closed ring is wound counter-clockwise.
pub fn is_ccw(ring: &[Coord]) -> bool {
    signed_area2(ring) > 0.0
}

/// Returns `true` if `p` lies on the closed segment `p0 -> p1`.
pub fn is_on_segment(p: Coord, p0: Coord, p1: Coord) -> bool {
    if orientation_index(p0, p1, p) != Orientation::Collinear {
        return false;
    }
    crate::envelope::Envelope::from_coords(p0, p1).contains_coord(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_directions() {
        let p1 = Coord::new(0.0, 0.0);
        let p2 = Coord::new(1.0, 0.0);
        assert_eq!(
            orientation_index(p1, p2, Coord::new(0.5, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation_index(p1, p2, Coord::new(0.5, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation_index(p1, p2, Coord::new(2.0, 0.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn ring_winding() {
        let ccw: Vec<Coord> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]
            .iter()
            .map(|&p| Coord::from(p))
            .collect();
        assert!(is_ccw(&ccw));
        let cw: Vec<Coord> = ccw.iter().rev().copied().collect();
        assert!(!is_ccw(&cw));
    }

    #[test]
    fn on_segment() {
        let p0 = Coord::new(0.0, 0.0);
        let p1 = Coord::new(2.0, 2.0);
        assert!(is_on_segment(Coord::new(1.0, 1.0), p0, p1));
        assert!(is_on_segment(p0, p0, p1));
        assert!(!is_on_segment(Coord::new(3.0, 3.0), p0, p1));
        assert!(!is_on_segment(Coord::new(1.0, 0.0), p0, p1));
    }
}
