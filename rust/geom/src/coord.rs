// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar coordinates.
//!
//! A [`Coord`] is an (x, y) pair of doubles. Equality is exact double
//! comparison; ordering is lexicographic (x then y) so that coordinate-keyed
//! maps iterate deterministically. Coordinates containing NaN or infinity are
//! rejected by geometry validation before any algorithm sees them, which is
//! what makes the manual `Eq`/`Ord` impls below sound.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Point2, Vector2};

/// A point in the plane with exact-equality semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both components are finite (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another coordinate.
    pub fn distance(&self, other: Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The vector from `self` to `other`.
    pub fn vector_to(&self, other: Coord) -> Vector2<f64> {
        Vector2::new(other.x - self.x, other.y - self.y)
    }

    // Collapse -0.0 onto 0.0 so Hash/Ord agree with `==`.
    fn canonical(v: f64) -> f64 {
        if v == 0.0 {
            0.0
        } else {
            v
        }
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// Valid only because NaN coordinates are rejected at the geometry boundary.
impl Eq for Coord {}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::canonical(self.x)
            .total_cmp(&Self::canonical(other.x))
            .then_with(|| Self::canonical(self.y).total_cmp(&Self::canonical(other.y)))
    }
}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::canonical(self.x).to_bits().hash(state);
        Self::canonical(self.y).to_bits().hash(state);
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2<f64>> for Coord {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Coord> for Point2<f64> {
    fn from(c: Coord) -> Self {
        Point2::new(c.x, c.y)
    }
}

/// Removes consecutive repeated coordinates from a sequence.
pub fn remove_repeated(coords: &[Coord]) -> Vec<Coord> {
    let mut out: Vec<Coord> = Vec::with_capacity(coords.len());
    for &c in coords {
        if out.last() != Some(&c) {
            out.push(c);
        }
    }
    out
}
