// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The immutable geometry tree.
//!
//! A [`Geometry`] is a typed tree of shapes: points, line strings, polygons
//! and homogeneous or heterogeneous collections thereof. Each geometry owns
//! its coordinate data; sub-geometries are owned by their collection. The
//! topology engine only ever reads geometries, so shapes can be shared freely
//! across concurrent computations.
//!
//! A linear ring is represented as a closed line string (first coordinate
//! equal to the last); polygons store their rings as raw closed coordinate
//! sequences.

use crate::coord::Coord;
use crate::envelope::Envelope;
use crate::error::{Error, Result};

/// Dimension value for an empty intersection, per the DE-9IM convention.
pub const DIM_FALSE: i8 = -1;
/// Dimension of a point.
pub const DIM_POINT: i8 = 0;
/// Dimension of a line.
pub const DIM_LINE: i8 = 1;
/// Dimension of an area.
pub const DIM_AREA: i8 = 2;

/// A chain of two or more coordinates. Closed (first == last) line strings
/// behave as linear rings: they have an empty boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coords: Vec<Coord>,
}

impl LineString {
    /// Creates a line string from a coordinate sequence.
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// The coordinate sequence.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Returns `true` if the line string has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns `true` if the first and last coordinates coincide.
    pub fn is_closed(&self) -> bool {
        self.coords.len() > 1 && self.coords.first() == self.coords.last()
    }
}

/// An area bounded by one outer shell ring and zero or more hole rings.
/// Rings are closed coordinate sequences with at least 4 points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    shell: Vec<Coord>,
    holes: Vec<Vec<Coord>>,
}

impl Polygon {
    /// Creates a polygon from a shell ring and hole rings.
    pub fn new(shell: Vec<Coord>, holes: Vec<Vec<Coord>>) -> Self {
        Self { shell, holes }
    }

    /// The outer shell ring.
    pub fn shell(&self) -> &[Coord] {
        &self.shell
    }

    /// The hole rings.
    pub fn holes(&self) -> &[Vec<Coord>] {
        &self.holes
    }

    /// Returns `true` if the polygon has no shell.
    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }
}

/// A typed tree of planar shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coord),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(Vec<Coord>),
    MultiLineString(Vec<LineString>),
    MultiPolygon(Vec<Polygon>),
    Collection(Vec<Geometry>),
}

impl Geometry {
    /// Convenience constructor for a point geometry.
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Coord::new(x, y))
    }

    /// Convenience constructor for a line string from (x, y) pairs.
    pub fn line_string(pts: &[(f64, f64)]) -> Self {
        Self::LineString(LineString::new(pts.iter().map(|&p| Coord::from(p)).collect()))
    }

    /// Convenience constructor for a polygon without holes.
    pub fn polygon(shell: &[(f64, f64)]) -> Self {
        Self::Polygon(Polygon::new(
            shell.iter().map(|&p| Coord::from(p)).collect(),
            Vec::new(),
        ))
    }

    /// Convenience constructor for a polygon with holes.
    pub fn polygon_with_holes(shell: &[(f64, f64)], holes: &[Vec<(f64, f64)>]) -> Self {
        Self::Polygon(Polygon::new(
            shell.iter().map(|&p| Coord::from(p)).collect(),
            holes
                .iter()
                .map(|h| h.iter().map(|&p| Coord::from(p)).collect())
                .collect(),
        ))
    }

    /// Returns `true` if this geometry contains no coordinates at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(l) => l.is_empty(),
            Geometry::Polygon(p) => p.is_empty(),
            Geometry::MultiPoint(ps) => ps.is_empty(),
            Geometry::MultiLineString(ls) => ls.iter().all(LineString::is_empty),
            Geometry::MultiPolygon(ps) => ps.iter().all(Polygon::is_empty),
            Geometry::Collection(gs) => gs.iter().all(Geometry::is_empty),
        }
    }

    /// Topological dimension: 0 for points, 1 for lines, 2 for areas.
    /// Collections report the maximum of their components; an empty
    /// collection reports [`DIM_FALSE`].
    pub fn dimension(&self) -> i8 {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => DIM_POINT,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => DIM_LINE,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => DIM_AREA,
            Geometry::Collection(gs) => gs
                .iter()
                .filter(|g| !g.is_empty())
                .map(Geometry::dimension)
                .max()
                .unwrap_or(DIM_FALSE),
        }
    }

    /// Dimension of the geometry's boundary. Points and closed lines have an
    /// empty boundary ([`DIM_FALSE`]); open lines have point boundaries;
    /// areas have line boundaries.
    pub fn boundary_dimension(&self) -> i8 {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => DIM_FALSE,
            Geometry::LineString(l) => {
                if l.is_closed() {
                    DIM_FALSE
                } else {
                    DIM_POINT
                }
            }
            Geometry::MultiLineString(ls) => {
                if ls.iter().all(|l| l.is_empty() || l.is_closed()) {
                    DIM_FALSE
                } else {
                    DIM_POINT
                }
            }
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => DIM_LINE,
            Geometry::Collection(gs) => gs
                .iter()
                .filter(|g| !g.is_empty())
                .map(Geometry::boundary_dimension)
                .max()
                .unwrap_or(DIM_FALSE),
        }
    }

    /// Bounding envelope of all coordinates.
    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::null();
        self.expand_envelope(&mut env);
        env
    }

    fn expand_envelope(&self, env: &mut Envelope) {
        match self {
            Geometry::Point(c) => env.expand_to_include(*c),
            Geometry::LineString(l) => {
                for &c in l.coords() {
                    env.expand_to_include(c);
                }
            }
            Geometry::Polygon(p) => {
                for &c in p.shell() {
                    env.expand_to_include(c);
                }
            }
            Geometry::MultiPoint(ps) => {
                for &c in ps {
                    env.expand_to_include(c);
                }
            }
            Geometry::MultiLineString(ls) => {
                for l in ls {
                    for &c in l.coords() {
                        env.expand_to_include(c);
                    }
                }
            }
            Geometry::MultiPolygon(ps) => {
                for p in ps {
                    for &c in p.shell() {
                        env.expand_to_include(c);
                    }
                }
            }
            Geometry::Collection(gs) => {
                for g in gs {
                    g.expand_envelope(env);
                }
            }
        }
    }

    /// Structural validation: rejects NaN/infinite coordinates, line strings
    /// with fewer than 2 points and unclosed or undersized rings. Runs before
    /// graph construction so the topology engine never sees malformed input.
    pub fn validate(&self) -> Result<()> {
        match self {
            Geometry::Point(c) => check_finite(*c),
            Geometry::LineString(l) => validate_line(l.coords()),
            Geometry::Polygon(p) => validate_polygon(p),
            Geometry::MultiPoint(ps) => ps.iter().try_for_each(|&c| check_finite(c)),
            Geometry::MultiLineString(ls) => ls
                .iter()
                .filter(|l| !l.is_empty())
                .try_for_each(|l| validate_line(l.coords())),
            Geometry::MultiPolygon(ps) => ps
                .iter()
                .filter(|p| !p.is_empty())
                .try_for_each(validate_polygon),
            Geometry::Collection(gs) => gs.iter().try_for_each(Geometry::validate),
        }
    }

    /// The first coordinate encountered in depth-first order, if any. Used as
    /// a representative point for containment probes.
    pub fn representative_coord(&self) -> Option<Coord> {
        match self {
            Geometry::Point(c) => Some(*c),
            Geometry::LineString(l) => l.coords().first().copied(),
            Geometry::Polygon(p) => p.shell().first().copied(),
            Geometry::MultiPoint(ps) => ps.first().copied(),
            Geometry::MultiLineString(ls) => {
                ls.iter().find_map(|l| l.coords().first().copied())
            }
            Geometry::MultiPolygon(ps) => ps.iter().find_map(|p| p.shell().first().copied()),
            Geometry::Collection(gs) => gs.iter().find_map(Geometry::representative_coord),
        }
    }

    /// Returns `true` if any component of this geometry is polygonal.
    pub fn has_area(&self) -> bool {
        match self {
            Geometry::Polygon(p) => !p.is_empty(),
            Geometry::MultiPolygon(ps) => ps.iter().any(|p| !p.is_empty()),
            Geometry::Collection(gs) => gs.iter().any(Geometry::has_area),
            _ => false,
        }
    }

    /// Visits every line segment of the geometry (line strings and polygon
    /// rings alike).
    pub fn for_each_segment<F: FnMut(Coord, Coord)>(&self, f: &mut F) {
        fn ring_segments<F: FnMut(Coord, Coord)>(ring: &[Coord], f: &mut F) {
            for w in ring.windows(2) {
                f(w[0], w[1]);
            }
        }
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => {}
            Geometry::LineString(l) => ring_segments(l.coords(), f),
            Geometry::MultiLineString(ls) => {
                for l in ls {
                    ring_segments(l.coords(), f);
                }
            }
            Geometry::Polygon(p) => {
                ring_segments(p.shell(), f);
                for h in p.holes() {
                    ring_segments(h, f);
                }
            }
            Geometry::MultiPolygon(ps) => {
                for p in ps {
                    ring_segments(p.shell(), f);
                    for h in p.holes() {
                        ring_segments(h, f);
                    }
                }
            }
            Geometry::Collection(gs) => {
                for g in gs {
                    g.for_each_segment(f);
                }
            }
        }
    }
}

fn check_finite(c: Coord) -> Result<()> {
    if c.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteCoordinate { x: c.x, y: c.y })
    }
}

fn validate_line(coords: &[Coord]) -> Result<()> {
    coords.iter().try_for_each(|&c| check_finite(c))?;
    if coords.len() < 2 {
        return Err(Error::TooFewLinePoints);
    }
    Ok(())
}

fn validate_ring(ring: &[Coord]) -> Result<()> {
    ring.iter().try_for_each(|&c| check_finite(c))?;
    if ring.len() < 4 || ring.first() != ring.last() {
        return Err(Error::InvalidRing(
            ring.first().copied().unwrap_or_default(),
        ));
    }
    Ok(())
}

fn validate_polygon(p: &Polygon) -> Result<()> {
    validate_ring(p.shell())?;
    p.holes().iter().try_for_each(|h| validate_ring(h))
}
