// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end relate scenarios across geometry type combinations.

use planar_lite_relate::{
    contains, crosses, disjoint, equals, intersects, overlaps, relate, relate_with, touches,
    within, BoundaryNodeRule, CancellationToken, Coord, Error, Geometry, PreparedGeometry,
};
use planar_lite_geom::LineString;

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
fn swapping_arguments_transposes_the_matrix() {
    let cases = [
        (square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)),
        (square(0.0, 0.0, 1.0), Geometry::point(0.5, 0.5)),
        (
            Geometry::line_string(&[(0.0, 0.0), (2.0, 0.0)]),
            Geometry::line_string(&[(1.0, -1.0), (1.0, 1.0)]),
        ),
        (square(0.0, 0.0, 1.0), square(3.0, 3.0, 1.0)),
    ];
    for (a, b) in &cases {
        let ab = relate(a, b).unwrap();
        let ba = relate(b, a).unwrap();
        assert_eq!(ab.transposed(), ba, "transpose failed for {ab}");
    }
}

#[test]
fn geometry_equals_itself() {
    let square = square(0.0, 0.0, 1.0);
    assert_eq!(relate(&square, &square.clone()).unwrap().to_string(), "2FFF1FFF2");
    assert!(equals(&square, &square.clone()).unwrap());

    let line = Geometry::line_string(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
    let im = relate(&line, &line.clone()).unwrap();
    assert_eq!(im.to_string(), "1FFF0FFF2");
    assert!(equals(&line, &line.clone()).unwrap());

    let point = Geometry::point(3.0, 4.0);
    assert_eq!(relate(&point, &point.clone()).unwrap().to_string(), "0FFFFFFF2");
}

#[test]
fn envelope_disjoint_fast_path_matrices() {
    let im = relate(&square(0.0, 0.0, 1.0), &square(9.0, 9.0, 1.0)).unwrap();
    assert_eq!(im.to_string(), "FF2FF1212");

    let im = relate(
        &Geometry::point(0.0, 0.0),
        &Geometry::line_string(&[(5.0, 5.0), (6.0, 5.0)]),
    )
    .unwrap();
    assert_eq!(im.to_string(), "FF0FFF102");
}

#[test]
fn point_and_square_containment_asymmetry() {
    let p = Geometry::point(0.5, 0.5);
    let s = square(0.0, 0.0, 1.0);
    let im = relate(&p, &s).unwrap();
    assert_eq!(im.to_string(), "0FFFFF212");
    assert!(within(&p, &s).unwrap());
    assert!(contains(&s, &p).unwrap());
    assert!(!contains(&p, &s).unwrap());
    assert!(!within(&s, &p).unwrap());
}

#[test]
fn point_in_polygon_hole_is_disjoint() {
    let donut = Geometry::polygon_with_holes(
        &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
        &[vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0)]],
    );
    let inside_hole = Geometry::point(5.0, 5.0);
    assert!(disjoint(&inside_hole, &donut).unwrap());
    let in_ring = Geometry::point(2.0, 2.0);
    assert!(within(&in_ring, &donut).unwrap());
}

#[test]
fn squares_sharing_an_edge_touch() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(1.0, 0.0, 1.0);
    let im = relate(&a, &b).unwrap();
    assert!(touches(&a, &b).unwrap());
    assert!(intersects(&a, &b).unwrap());
    assert!(!overlaps(&a, &b).unwrap());
    assert_eq!(im.to_string().chars().next().unwrap(), 'F');
    assert_eq!(im.to_string().as_bytes()[4], b'1');
}

#[test]
fn square_strictly_containing_square() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(4.0, 4.0, 1.0);
    let im = relate(&outer, &inner).unwrap();
    assert_eq!(im.to_string(), "212FF1FF2");
    assert!(contains(&outer, &inner).unwrap());
    assert!(!touches(&outer, &inner).unwrap());
}

#[test]
fn crossing_lines_matrix() {
    let a = Geometry::line_string(&[(0.0, -1.0), (0.0, 1.0)]);
    let b = Geometry::line_string(&[(-1.0, 0.0), (1.0, 0.0)]);
    let im = relate(&a, &b).unwrap();
    assert_eq!(im.to_string(), "0F1FF0102");
    assert!(crosses(&a, &b).unwrap());
    assert!(!touches(&a, &b).unwrap());
}

#[test]
fn collinear_overlapping_lines_overlap() {
    let a = Geometry::line_string(&[(0.0, 0.0), (2.0, 0.0)]);
    let b = Geometry::line_string(&[(1.0, 0.0), (3.0, 0.0)]);
    let im = relate(&a, &b).unwrap();
    assert_eq!(im.to_string(), "1010F0102");
    assert!(overlaps(&a, &b).unwrap());
    assert!(!crosses(&a, &b).unwrap());
}

#[test]
fn line_ending_on_square_boundary_touches() {
    let line = Geometry::line_string(&[(1.0, 0.5), (2.0, 0.5)]);
    let s = square(0.0, 0.0, 1.0);
    assert!(touches(&s, &line).unwrap());
    assert!(touches(&line, &s).unwrap());
    assert!(!crosses(&line, &s).unwrap());
}

#[test]
fn boundary_node_rule_changes_endpoint_topology() {
    // Four open lines meet at the origin: an even-degree endpoint. Under
    // the OGC Mod-2 rule the meeting point is interior, so a point there is
    // within the lines; under the EndPoint rule it is a boundary point, so
    // the point merely touches.
    let star = Geometry::MultiLineString(vec![
        LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)]),
        LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(0.0, 1.0)]),
        LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(-1.0, 0.0)]),
        LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(0.0, -1.0)]),
    ]);
    let origin = Geometry::point(0.0, 0.0);

    let mod2 = relate_with(
        &origin,
        &star,
        BoundaryNodeRule::Mod2,
        CancellationToken::new(),
    )
    .unwrap();
    assert!(mod2.is_within());
    assert!(!mod2.is_touches(0, 1));

    let endpoint = relate_with(
        &origin,
        &star,
        BoundaryNodeRule::EndPoint,
        CancellationToken::new(),
    )
    .unwrap();
    assert!(endpoint.is_touches(0, 1));
    assert!(!endpoint.is_within());
}

#[test]
fn prepared_geometry_agrees_with_engine() {
    let base = square(0.0, 0.0, 4.0);
    let prep = PreparedGeometry::new(base.clone()).unwrap();
    let probes = [
        square(2.0, 2.0, 4.0),
        square(4.0, 0.0, 2.0),
        square(1.0, 1.0, 1.0),
        square(8.0, 8.0, 1.0),
        Geometry::line_string(&[(-1.0, 2.0), (5.0, 2.0)]),
        Geometry::point(2.0, 2.0),
    ];
    for probe in &probes {
        assert_eq!(
            prep.intersects(probe).unwrap(),
            intersects(&base, probe).unwrap()
        );
        assert_eq!(
            prep.contains(probe).unwrap(),
            contains(&base, probe).unwrap()
        );
        assert_eq!(prep.within(probe).unwrap(), within(&base, probe).unwrap());
        assert_eq!(
            prep.touches(probe).unwrap(),
            touches(&base, probe).unwrap()
        );
    }
}

#[test]
fn cancelled_token_yields_cancelled_error() {
    let token = CancellationToken::new();
    token.request();
    let a = square(0.0, 0.0, 2.0);
    let b = square(1.0, 1.0, 2.0);
    assert_eq!(
        relate_with(&a, &b, BoundaryNodeRule::OGC, token),
        Err(Error::Cancelled)
    );
}

#[test]
fn invalid_inputs_are_rejected() {
    let nan = Geometry::point(f64::NAN, 0.0);
    let ok = Geometry::point(0.0, 0.0);
    assert!(matches!(
        relate(&nan, &ok),
        Err(Error::InvalidGeometry(_))
    ));
    let open_ring = Geometry::polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    assert!(matches!(
        intersects(&open_ring, &ok),
        Err(Error::InvalidGeometry(_))
    ));
}
