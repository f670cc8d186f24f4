// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Prepared geometries for repeated predicate evaluation.
//!
//! A [`PreparedGeometry`] pays the validation, envelope and segment-index
//! cost once, then answers predicates against many probe geometries. The
//! intersects test runs entirely on the index plus per-component
//! point-in-geometry probes; the remaining predicates use envelope rejection
//! before falling back to the full relate engine. Prepared results always
//! agree with the plain predicates.

use planar_lite_geom::algorithm::locate::PointLocator;
use planar_lite_geom::{BoundaryNodeRule, Coord, Envelope, Geometry, Location};

use crate::matrix::IntersectionMatrix;
use crate::predicate;
use crate::relate::relate;
use crate::spatial::SegmentIndex;
use crate::Result;

/// A geometry preprocessed for repeated spatial predicate evaluation.
#[derive(Debug)]
pub struct PreparedGeometry {
    geom: Geometry,
    envelope: Envelope,
    index: SegmentIndex,
}

impl PreparedGeometry {
    /// Validates and indexes a geometry.
    pub fn new(geom: Geometry) -> Result<Self> {
        geom.validate()?;
        let envelope = geom.envelope();
        let index = SegmentIndex::build(&geom);
        Ok(Self {
            geom,
            envelope,
            index,
        })
    }

    /// The prepared geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geom
    }

    /// The precomputed envelope.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// True if the prepared geometry shares at least one point with `other`.
    ///
    /// Decided without the relate engine: any edge/edge intersection is
    /// found by the segment index, and once no edges meet, every component
    /// of either geometry lies entirely inside or entirely outside the
    /// other, so locating one probe point per component decides. Points
    /// contribute one probe each, lines and polygon shells their first
    /// vertex.
    pub fn intersects(&self, other: &Geometry) -> Result<bool> {
        other.validate()?;
        if !self.envelope.intersects(&other.envelope()) {
            return Ok(false);
        }

        let mut edge_hit = false;
        other.for_each_segment(&mut |a, b| {
            if !edge_hit && self.index.intersects_segment(a, b) {
                edge_hit = true;
            }
        });
        if edge_hit {
            return Ok(true);
        }

        let mut locator = PointLocator::new(BoundaryNodeRule::OGC);
        let mut probes = Vec::new();
        component_probe_coords(other, &mut probes);
        if probes
            .iter()
            .any(|&p| locator.locate(p, &self.geom) != Location::Exterior)
        {
            return Ok(true);
        }
        probes.clear();
        component_probe_coords(&self.geom, &mut probes);
        Ok(probes
            .iter()
            .any(|&p| locator.locate(p, other) != Location::Exterior))
    }

    /// True if the prepared geometry shares no points with `other`.
    pub fn disjoint(&self, other: &Geometry) -> Result<bool> {
        Ok(!self.intersects(other)?)
    }

    /// True if `other` lies entirely inside the prepared geometry with
    /// interior contact.
    pub fn contains(&self, other: &Geometry) -> Result<bool> {
        other.validate()?;
        if !self.envelope.contains_envelope(&other.envelope()) {
            return Ok(false);
        }
        Ok(relate(&self.geom, other)?.is_contains())
    }

    /// True if the prepared geometry lies entirely inside `other`.
    pub fn within(&self, other: &Geometry) -> Result<bool> {
        other.validate()?;
        if !other.envelope().contains_envelope(&self.envelope) {
            return Ok(false);
        }
        Ok(relate(&self.geom, other)?.is_within())
    }

    /// True if every point of `other` lies in the prepared geometry.
    pub fn covers(&self, other: &Geometry) -> Result<bool> {
        other.validate()?;
        if !self.envelope.contains_envelope(&other.envelope()) {
            return Ok(false);
        }
        Ok(relate(&self.geom, other)?.is_covers())
    }

    /// True if every point of the prepared geometry lies in `other`.
    pub fn covered_by(&self, other: &Geometry) -> Result<bool> {
        other.validate()?;
        if !other.envelope().contains_envelope(&self.envelope) {
            return Ok(false);
        }
        Ok(relate(&self.geom, other)?.is_covered_by())
    }

    /// True if the geometries touch at their boundaries only.
    pub fn touches(&self, other: &Geometry) -> Result<bool> {
        predicate::touches(&self.geom, other)
    }

    /// True if the geometries cross.
    pub fn crosses(&self, other: &Geometry) -> Result<bool> {
        predicate::crosses(&self.geom, other)
    }

    /// True if the geometries overlap.
    pub fn overlaps(&self, other: &Geometry) -> Result<bool> {
        predicate::overlaps(&self.geom, other)
    }

    /// The full intersection matrix against `other`.
    pub fn relate(&self, other: &Geometry) -> Result<IntersectionMatrix> {
        other.validate()?;
        relate(&self.geom, other)
    }
}

/// Collects one containment probe coordinate per connected component of the
/// geometry: every point of puntal parts, the first vertex of each line
/// string and each polygon shell.
fn component_probe_coords(geom: &Geometry, out: &mut Vec<Coord>) {
    match geom {
        Geometry::Point(c) => out.push(*c),
        Geometry::MultiPoint(ps) => out.extend_from_slice(ps),
        Geometry::LineString(l) => out.extend(l.coords().first().copied()),
        Geometry::MultiLineString(ls) => {
            for l in ls {
                out.extend(l.coords().first().copied());
            }
        }
        Geometry::Polygon(p) => out.extend(p.shell().first().copied()),
        Geometry::MultiPolygon(ps) => {
            for p in ps {
                out.extend(p.shell().first().copied());
            }
        }
        Geometry::Collection(gs) => {
            for g in gs {
                component_probe_coords(g, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Geometry {
        Geometry::polygon(&[
            (x, y),
            (x + size, y),
            (x + size, y + size),
            (x, y + size),
            (x, y),
        ])
    }

    #[test]
    fn rejects_invalid_geometry() {
        let open = Geometry::polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(PreparedGeometry::new(open).is_err());
    }

    #[test]
    fn intersects_via_edges() {
        let prep = PreparedGeometry::new(square(0.0, 0.0, 2.0)).unwrap();
        let line = Geometry::line_string(&[(-1.0, 1.0), (3.0, 1.0)]);
        assert!(prep.intersects(&line).unwrap());
    }

    #[test]
    fn intersects_via_containment_either_way() {
        let prep = PreparedGeometry::new(square(0.0, 0.0, 10.0)).unwrap();
        let inner = square(4.0, 4.0, 1.0);
        assert!(prep.intersects(&inner).unwrap());

        let small = PreparedGeometry::new(square(4.0, 4.0, 1.0)).unwrap();
        assert!(small.intersects(&square(0.0, 0.0, 10.0)).unwrap());
    }

    #[test]
    fn intersects_multipoint_probe() {
        let prep = PreparedGeometry::new(square(0.0, 0.0, 1.0)).unwrap();
        let pts = Geometry::MultiPoint(vec![Coord::new(5.0, 5.0), Coord::new(0.5, 0.5)]);
        assert!(prep.intersects(&pts).unwrap());
    }

    #[test]
    fn intersects_multipoint_base_checks_every_point() {
        // Only the second point of the prepared geometry hits the probe.
        let prep = PreparedGeometry::new(Geometry::MultiPoint(vec![
            Coord::new(10.0, 10.0),
            Coord::new(0.5, 0.5),
        ]))
        .unwrap();
        let probe = square(0.0, 0.0, 1.0);
        assert!(prep.intersects(&probe).unwrap());
        assert_eq!(
            prep.intersects(&probe).unwrap(),
            predicate::intersects(prep.geometry(), &probe).unwrap()
        );
    }

    #[test]
    fn intersects_collection_of_points_probe() {
        let prep = PreparedGeometry::new(square(0.0, 0.0, 1.0)).unwrap();
        let probe = Geometry::Collection(vec![
            Geometry::point(10.0, 10.0),
            Geometry::point(0.5, 0.5),
        ]);
        assert!(prep.intersects(&probe).unwrap());
        assert_eq!(
            prep.intersects(&probe).unwrap(),
            predicate::intersects(prep.geometry(), &probe).unwrap()
        );
    }

    #[test]
    fn intersects_multiline_component_inside_area() {
        // Neither line crosses the square's boundary; the second lies inside.
        let prep = PreparedGeometry::new(square(0.0, 0.0, 1.0)).unwrap();
        let probe = Geometry::MultiLineString(vec![
            planar_lite_geom::LineString::new(vec![
                Coord::new(5.0, 5.0),
                Coord::new(6.0, 5.0),
            ]),
            planar_lite_geom::LineString::new(vec![
                Coord::new(0.2, 0.2),
                Coord::new(0.8, 0.8),
            ]),
        ]);
        assert!(prep.intersects(&probe).unwrap());
    }

    #[test]
    fn envelope_rejection() {
        let prep = PreparedGeometry::new(square(0.0, 0.0, 1.0)).unwrap();
        assert!(!prep.intersects(&square(5.0, 5.0, 1.0)).unwrap());
        assert!(prep.disjoint(&square(5.0, 5.0, 1.0)).unwrap());
        assert!(!prep.contains(&square(5.0, 5.0, 1.0)).unwrap());
    }

    #[test]
    fn agrees_with_plain_predicates() {
        let a = square(0.0, 0.0, 2.0);
        let prep = PreparedGeometry::new(a.clone()).unwrap();
        let probes = [
            square(1.0, 1.0, 2.0),
            square(2.0, 0.0, 2.0),
            square(0.5, 0.5, 1.0),
            Geometry::line_string(&[(-1.0, 1.0), (3.0, 1.0)]),
            Geometry::point(1.0, 1.0),
            square(5.0, 5.0, 1.0),
        ];
        for probe in &probes {
            assert_eq!(
                prep.intersects(probe).unwrap(),
                predicate::intersects(&a, probe).unwrap()
            );
            assert_eq!(
                prep.contains(probe).unwrap(),
                predicate::contains(&a, probe).unwrap()
            );
            assert_eq!(
                prep.covers(probe).unwrap(),
                predicate::covers(&a, probe).unwrap()
            );
            assert_eq!(
                prep.within(probe).unwrap(),
                predicate::within(&a, probe).unwrap()
            );
        }
    }
}
