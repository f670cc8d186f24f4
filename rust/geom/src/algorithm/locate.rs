// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point location against arbitrary geometries.
//!
//! [`PointLocator`] computes the [`Location`] of a coordinate relative to a
//! full geometry tree. Boundary determination at line endpoints honors the
//! configured [`BoundaryNodeRule`]: the locator counts how many component
//! boundaries the point lies on and lets the rule decide whether that makes
//! it a boundary point of the whole geometry.

use crate::boundary::BoundaryNodeRule;
use crate::coord::Coord;
use crate::envelope::Envelope;
use crate::geometry::{Geometry, LineString, Polygon};
use crate::location::Location;
use crate::algorithm::orientation::is_on_segment;
use crate::algorithm::ray_crossing::RayCrossingCounter;

/// Locates points relative to geometries under a boundary node rule.
#[derive(Debug)]
pub struct PointLocator {
    rule: BoundaryNodeRule,
    is_in: bool,
    boundary_count: u32,
}

impl PointLocator {
    /// Creates a locator using the given boundary node rule.
    pub fn new(rule: BoundaryNodeRule) -> Self {
        Self {
            rule,
            is_in: false,
            boundary_count: 0,
        }
    }

    /// Computes the location of `p` relative to `geom`.
    pub fn locate(&mut self, p: Coord, geom: &Geometry) -> Location {
        if geom.is_empty() {
            return Location::Exterior;
        }
        self.is_in = false;
        self.boundary_count = 0;
        self.compute(p, geom);
        if self.rule.is_in_boundary(self.boundary_count) {
            return Location::Boundary;
        }
        if self.boundary_count > 0 || self.is_in {
            return Location::Interior;
        }
        Location::Exterior
    }

    fn compute(&mut self, p: Coord, geom: &Geometry) {
        match geom {
            Geometry::Point(c) => self.update(locate_on_point(p, *c)),
            Geometry::MultiPoint(cs) => {
                for &c in cs {
                    self.update(locate_on_point(p, c));
                }
            }
            Geometry::LineString(l) => self.update(locate_on_line(p, l)),
            Geometry::MultiLineString(ls) => {
                for l in ls {
                    self.update(locate_on_line(p, l));
                }
            }
            Geometry::Polygon(poly) => self.update(locate_in_polygon(p, poly)),
            Geometry::MultiPolygon(ps) => {
                for poly in ps {
                    self.update(locate_in_polygon(p, poly));
                }
            }
            Geometry::Collection(gs) => {
                for g in gs {
                    self.compute(p, g);
                }
            }
        }
    }

    fn update(&mut self, loc: Location) {
        match loc {
            Location::Interior => self.is_in = true,
            Location::Boundary => self.boundary_count += 1,
            Location::Exterior => {}
        }
    }
}

fn locate_on_point(p: Coord, pt: Coord) -> Location {
    if p == pt {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Location of `p` on a single line string, reporting endpoints of open
/// lines as Boundary (the caller's rule converts boundary counts).
fn locate_on_line(p: Coord, line: &LineString) -> Location {
    let coords = line.coords();
    if coords.is_empty() || !Envelope::from_slice(coords).contains_coord(p) {
        return Location::Exterior;
    }
    if !line.is_closed() && (Some(&p) == coords.first() || Some(&p) == coords.last()) {
        return Location::Boundary;
    }
    for w in coords.windows(2) {
        if is_on_segment(p, w[0], w[1]) {
            return Location::Interior;
        }
    }
    Location::Exterior
}

/// Location of `p` relative to a polygon's area.
fn locate_in_polygon(p: Coord, poly: &Polygon) -> Location {
    if poly.is_empty() {
        return Location::Exterior;
    }
    match RayCrossingCounter::locate_point_in_ring(p, poly.shell()) {
        Location::Exterior => Location::Exterior,
        Location::Boundary => Location::Boundary,
        Location::Interior => {
            for hole in poly.holes() {
                match RayCrossingCounter::locate_point_in_ring(p, hole) {
                    Location::Interior => return Location::Exterior,
                    Location::Boundary => return Location::Boundary,
                    Location::Exterior => {}
                }
            }
            Location::Interior
        }
    }
}

/// Locates `p` considering only the polygonal components of `geom`. Used for
/// labelling graph nodes against an area: non-area components can never
/// contribute an interior wedge, so they are ignored.
pub fn locate_in_areas(p: Coord, geom: &Geometry) -> Location {
    match geom {
        Geometry::Polygon(poly) => locate_in_polygon(p, poly),
        Geometry::MultiPolygon(ps) => {
            for poly in ps {
                let loc = locate_in_polygon(p, poly);
                if loc != Location::Exterior {
                    return loc;
                }
            }
            Location::Exterior
        }
        Geometry::Collection(gs) => {
            for g in gs {
                let loc = locate_in_areas(p, g);
                if loc != Location::Exterior {
                    return loc;
                }
            }
            Location::Exterior
        }
        _ => Location::Exterior,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Geometry {
        Geometry::polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
    }

    fn locate(p: (f64, f64), g: &Geometry) -> Location {
        PointLocator::new(BoundaryNodeRule::Mod2).locate(Coord::from(p), g)
    }

    #[test]
    fn point_geometry() {
        let g = Geometry::point(1.0, 2.0);
        assert_eq!(locate((1.0, 2.0), &g), Location::Interior);
        assert_eq!(locate((0.0, 0.0), &g), Location::Exterior);
    }

    #[test]
    fn open_line_endpoints_are_boundary() {
        let g = Geometry::line_string(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(locate((0.0, 0.0), &g), Location::Boundary);
        assert_eq!(locate((2.0, 0.0), &g), Location::Boundary);
        assert_eq!(locate((1.0, 0.0), &g), Location::Interior);
        assert_eq!(locate((0.5, 0.0), &g), Location::Interior);
        assert_eq!(locate((0.5, 1.0), &g), Location::Exterior);
    }

    #[test]
    fn closed_line_has_no_boundary() {
        let g = Geometry::line_string(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(locate((0.0, 0.0), &g), Location::Interior);
    }

    #[test]
    fn polygon_locations() {
        let g = unit_square();
        assert_eq!(locate((0.5, 0.5), &g), Location::Interior);
        assert_eq!(locate((1.0, 0.5), &g), Location::Boundary);
        assert_eq!(locate((2.0, 0.5), &g), Location::Exterior);
    }

    #[test]
    fn polygon_with_hole() {
        let g = Geometry::polygon_with_holes(
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
            &[vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0)]],
        );
        assert_eq!(locate((5.0, 5.0), &g), Location::Exterior);
        assert_eq!(locate((4.0, 5.0), &g), Location::Boundary);
        assert_eq!(locate((2.0, 2.0), &g), Location::Interior);
    }

    #[test]
    fn four_line_star_rule_sensitivity() {
        // Four line ends meet at the origin: even degree.
        let star = Geometry::MultiLineString(vec![
            LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)]),
            LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(0.0, 1.0)]),
            LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(-1.0, 0.0)]),
            LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(0.0, -1.0)]),
        ]);
        let origin = Coord::new(0.0, 0.0);
        let mut mod2 = PointLocator::new(BoundaryNodeRule::Mod2);
        assert_eq!(mod2.locate(origin, &star), Location::Interior);
        let mut endpoint = PointLocator::new(BoundaryNodeRule::EndPoint);
        assert_eq!(endpoint.locate(origin, &star), Location::Boundary);
        let mut multi = PointLocator::new(BoundaryNodeRule::MultivalentEndPoint);
        assert_eq!(multi.locate(origin, &star), Location::Boundary);
        let mut mono = PointLocator::new(BoundaryNodeRule::MonovalentEndPoint);
        assert_eq!(mono.locate(origin, &star), Location::Interior);
    }

    #[test]
    fn areas_only_locate_ignores_lines() {
        let mixed = Geometry::Collection(vec![
            Geometry::line_string(&[(5.0, 5.0), (6.0, 6.0)]),
            unit_square(),
        ]);
        assert_eq!(
            locate_in_areas(Coord::new(0.5, 0.5), &mixed),
            Location::Interior
        );
        assert_eq!(
            locate_in_areas(Coord::new(5.5, 5.5), &mixed),
            Location::Exterior
        );
    }
}
