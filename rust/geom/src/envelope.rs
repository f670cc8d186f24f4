// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding rectangles.

use crate::coord::Coord;

/// An axis-aligned bounding box. A null envelope (containing nothing) is
/// represented by `min > max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Envelope {
    /// Creates a null envelope.
    pub fn null() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: -1.0,
            max_y: -1.0,
        }
    }

    /// Envelope of the segment (or degenerate segment) between two coordinates.
    pub fn from_coords(a: Coord, b: Coord) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Envelope of an arbitrary coordinate sequence.
    pub fn from_slice(coords: &[Coord]) -> Self {
        let mut env = Self::null();
        for &c in coords {
            env.expand_to_include(c);
        }
        env
    }

    /// Returns `true` if this envelope contains nothing.
    pub fn is_null(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// Grows the envelope to cover a coordinate.
    pub fn expand_to_include(&mut self, c: Coord) {
        if self.is_null() {
            self.min_x = c.x;
            self.min_y = c.y;
            self.max_x = c.x;
            self.max_y = c.y;
        } else {
            self.min_x = self.min_x.min(c.x);
            self.min_y = self.min_y.min(c.y);
            self.max_x = self.max_x.max(c.x);
            self.max_y = self.max_y.max(c.y);
        }
    }

    /// Grows the envelope to cover another envelope.
    pub fn expand_to_include_envelope(&mut self, other: &Envelope) {
        if other.is_null() {
            return;
        }
        self.expand_to_include(Coord::new(other.min_x, other.min_y));
        self.expand_to_include(Coord::new(other.max_x, other.max_y));
    }

    /// Returns `true` if the two envelopes share at least one point.
    pub fn intersects(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// Returns `true` if the two envelopes share no points.
    pub fn disjoint(&self, other: &Envelope) -> bool {
        !self.intersects(other)
    }

    /// Returns `true` if the coordinate lies inside or on the envelope.
    pub fn contains_coord(&self, c: Coord) -> bool {
        !self.is_null()
            && c.x >= self.min_x
            && c.x <= self.max_x
            && c.y >= self.min_y
            && c.y <= self.max_y
    }

    /// Returns `true` if `other` lies entirely inside or on this envelope.
    pub fn contains_envelope(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Width of the envelope, 0 for a null envelope.
    pub fn width(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    /// Height of the envelope, 0 for a null envelope.
    pub fn height(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_envelope_intersects_nothing() {
        let null = Envelope::null();
        let unit = Envelope::from_coords(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0));
        assert!(null.is_null());
        assert!(!null.intersects(&unit));
        assert!(!unit.intersects(&null));
    }

    #[test]
    fn touching_envelopes_intersect() {
        let a = Envelope::from_coords(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0));
        let b = Envelope::from_coords(Coord::new(1.0, 0.0), Coord::new(2.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn disjoint_envelopes() {
        let a = Envelope::from_coords(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0));
        let b = Envelope::from_coords(Coord::new(2.0, 2.0), Coord::new(3.0, 3.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn expand_and_contain() {
        let mut env = Envelope::null();
        env.expand_to_include(Coord::new(1.0, 2.0));
        env.expand_to_include(Coord::new(-1.0, 0.0));
        assert!(env.contains_coord(Coord::new(0.0, 1.0)));
        assert!(!env.contains_coord(Coord::new(2.0, 1.0)));
        assert_eq!(env.width(), 2.0);
        assert_eq!(env.height(), 2.0);
    }
}
