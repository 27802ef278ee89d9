#![cfg(feature = "geozero")]

use galileo_geometry::{
    ArrowLineString, Coord, Geom, GeometryCollection, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Point3d, Polygon, WellKnown,
};

fn ring(coords: &[(f64, f64)]) -> LinearRing {
    LinearRing::closed(coords.iter().map(|&c| Coord::from(c)).collect())
}

fn polygon() -> Polygon {
    Polygon::with_interiors(
        ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
        vec![ring(&[(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)])],
    )
}

fn line() -> LineString {
    LineString::new(vec![
        Coord::new(-1.5, 2.25),
        Coord::new(3.0, 4.0),
        Coord::new(7.125, -8.0),
    ])
}

fn geometries() -> Vec<Geom> {
    let triangle = Polygon::new(ring(&[(20.0, 20.0), (21.0, 20.0), (21.0, 21.0)]));

    vec![
        Point::new(1.0, -2.5).into(),
        line().into(),
        polygon().into(),
        MultiPoint::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 3.0)]).into(),
        MultiLineString::new(vec![line(), line().reversed()]).into(),
        MultiPolygon::new(vec![polygon(), triangle]).into(),
        GeometryCollection::new(vec![
            Point::new(5.0, 5.0).into(),
            line().into(),
            GeometryCollection::new(vec![polygon().into()]).into(),
        ])
        .into(),
    ]
}

/// Non-empty geometries that carry empty parts or a Z ordinate.
fn edge_cases() -> Vec<Geom> {
    vec![
        Point3d::new(1.0, 2.0, 3.0).into(),
        Point3d::new(-0.5, 0.0, 1e10).into(),
        MultiLineString::new(vec![line(), LineString::default()]).into(),
        MultiPolygon::new(vec![Polygon::default(), polygon()]).into(),
        GeometryCollection::new(vec![
            Point::empty().into(),
            LineString::default().into(),
            Polygon::default().into(),
            Point::new(1.0, 1.0).into(),
        ])
        .into(),
        GeometryCollection::new(vec![
            Point3d::new(1.0, 2.0, 3.0).into(),
            LineString::default().into(),
            GeometryCollection::new(vec![Point3d::new(4.0, 5.0, 6.0).into()]).into(),
        ])
        .into(),
    ]
}

#[test]
fn text_round_trip() {
    for geom in geometries().into_iter().chain(edge_cases()) {
        let text = geom.as_text().unwrap();
        assert_eq!(Geom::from_text(&text).unwrap(), geom, "{text}");
    }
}

#[test]
fn binary_round_trip() {
    for geom in geometries().into_iter().chain(edge_cases()) {
        let bytes = geom.as_binary().unwrap();
        assert_eq!(Geom::from_binary(&bytes).unwrap(), geom, "{geom:?}");
    }
}

#[test]
fn point_3d_round_trip() {
    let point = Point3d::new(1.0, 2.0, 3.0);
    let text = point.as_text().unwrap();
    assert_eq!(Geom::from_text(&text).unwrap(), Geom::Point3d(point));
    let bytes = point.as_binary().unwrap();
    assert_eq!(Geom::from_binary(&bytes).unwrap(), Geom::Point3d(point));
}

#[test]
fn empty_geometries_round_trip() {
    let empty: Vec<Geom> = vec![
        Point::empty().into(),
        LineString::default().into(),
        Polygon::default().into(),
        MultiPoint::default().into(),
        MultiLineString::default().into(),
        GeometryCollection::default().into(),
    ];

    for geom in empty {
        let text = geom.as_text().unwrap();
        assert_eq!(Geom::from_text(&text).unwrap(), geom, "{text}");
        let bytes = geom.as_binary().unwrap();
        assert_eq!(Geom::from_binary(&bytes).unwrap(), geom, "{text}");
    }
}

#[test]
fn curves_without_own_representation() {
    let ring = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    let decoded = Geom::from_text(&ring.as_text().unwrap()).unwrap();
    assert_eq!(decoded, Geom::LineString(ring.into_line_string()));

    let arrow = ArrowLineString::with_default_options(&Point::new(0.0, 0.0), &Point::new(4.0, 3.0))
        .unwrap();
    let decoded = Geom::from_binary(&arrow.as_binary().unwrap()).unwrap();
    assert_eq!(decoded, Geom::MultiLineString(arrow.into_multi_line_string()));
}
