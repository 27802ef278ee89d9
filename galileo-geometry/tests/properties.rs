use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use galileo_geometry::{
    ArrowLineString, ArrowOptions, BoundingBox, Circle, Coord, Curve, Geom, Geometry,
    GeometryCollection, GeometryError, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Transform,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn unit_square() -> LinearRing {
    LinearRing::new(vec![
        Coord::new(0.0, 0.0),
        Coord::new(1.0, 0.0),
        Coord::new(1.0, 1.0),
        Coord::new(0.0, 1.0),
        Coord::new(0.0, 0.0),
    ])
}

fn aggregates() -> Vec<Geom> {
    let lines = MultiLineString::new(vec![
        LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(3.0, 4.0)]),
        LineString::new(vec![Coord::new(-2.0, 1.0), Coord::new(-1.0, 8.0)]),
        LineString::default(),
    ]);
    let polygons = MultiPolygon::new(vec![
        Polygon::new(unit_square()),
        BoundingBox::new(5.0, 5.0, 7.0, 6.0).into(),
    ]);
    let points = MultiPoint::new(vec![
        Point::new(1.0, 1.0),
        Point::empty(),
        Point::new(-3.0, 2.0),
    ]);
    let collection = GeometryCollection::new(vec![
        lines.clone().into(),
        Circle::new(10.0, 10.0, 2.0).unwrap().into(),
        points.clone().into(),
    ]);

    vec![lines.into(), polygons.into(), points.into(), collection.into()]
}

fn children(geom: &Geom) -> Vec<Geom> {
    match geom {
        Geom::MultiLineString(v) => v.iter().cloned().map(Geom::from).collect(),
        Geom::MultiPolygon(v) => v.iter().cloned().map(Geom::from).collect(),
        Geom::MultiPoint(v) => v.iter().cloned().map(Geom::from).collect(),
        Geom::GeometryCollection(v) => v.iter().cloned().collect(),
        _ => vec![],
    }
}

#[test]
fn circle_distance_examples() {
    let circle = Circle::new(0.0, 0.0, 5.0).unwrap();
    assert_eq!(circle.distance(&Point::new(10.0, 0.0)).unwrap(), 5.0);
    assert_eq!(circle.distance(&Point::new(3.0, 0.0)).unwrap(), 0.0);
}

#[test]
fn distance_is_non_negative() {
    let queries = [
        Point::new(0.0, 0.0),
        Point::new(0.5, 0.5),
        Point::new(-10.0, 3.0),
        Point::new(100.0, -100.0),
    ];
    for geom in aggregates() {
        for query in &queries {
            assert!(geom.distance(query).unwrap() >= 0.0);
        }
    }
}

#[test]
fn polygon_area_with_hole() {
    let exterior = unit_square();
    assert_eq!(exterior.area(), 1.0);

    let hole = LinearRing::new(vec![
        Coord::new(0.25, 0.25),
        Coord::new(0.25, 0.75),
        Coord::new(0.75, 0.75),
        Coord::new(0.75, 0.25),
        Coord::new(0.25, 0.25),
    ]);
    assert_eq!(hole.area(), 0.25);
    assert_ne!(hole.is_ccw(), exterior.is_ccw());

    let polygon = Polygon::with_interiors(exterior, vec![hole]);
    assert_eq!(polygon.area(), 0.75);
}

#[test]
fn ring_orientation() {
    let ring = unit_square();
    assert!(ring.is_ccw());
    assert!(!ring.reversed().is_ccw());
}

#[test]
fn point_in_ring() {
    let ring = unit_square();
    assert!(ring.is_point_within(&Point::new(0.5, 0.5)).unwrap());
    assert!(!ring.is_point_within(&Point::new(2.0, 2.0)).unwrap());
}

#[test]
fn arrow_example() {
    init_logger();

    let options = ArrowOptions::default()
        .with_angle(45.0)
        .with_arrow_length(2.0)
        .with_position(1.0);
    let arrow =
        ArrowLineString::new(&Point::new(0.0, 0.0), &Point::new(10.0, 0.0), options).unwrap();

    assert_eq!(arrow.arrow_head(), Point::new(10.0, 0.0));
    assert_eq!(arrow.lines().num_lines(), 3);

    let [a, b] = arrow.arrow_extremities();
    let (a, b) = (a.coord().unwrap(), b.coord().unwrap());
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
    assert_abs_diff_eq!(a.y, -b.y, epsilon = 1e-12);
    assert!(a.x < 10.0);
    assert_abs_diff_eq!(a.distance(&Coord::new(10.0, 0.0)), 2.0, epsilon = 1e-12);
}

#[test]
fn arrow_from_coincident_points_is_defined() {
    init_logger();

    let point = Point::new(1.0, 1.0);
    let arrow = ArrowLineString::with_default_options(&point, &point).unwrap();
    assert_eq!(arrow.arrow_head(), point);
    for extremity in arrow.arrow_extremities() {
        assert!(extremity.x().unwrap().is_finite());
        assert!(extremity.y().unwrap().is_finite());
    }
}

#[test]
fn empty_state() {
    let mut point = Point::default();
    assert!(point.is_empty());
    assert_matches!(point.x(), Err(GeometryError::EmptyGeometry));
    point.set_y(2.0);
    assert!(!point.is_empty());
    assert_eq!(point, Point::new(0.0, 2.0));

    let mut circle = Circle::default();
    assert!(circle.is_empty());
    assert_matches!(circle.radius(), Err(GeometryError::EmptyGeometry));
    circle.set_x(1.0);
    assert!(!circle.is_empty());
    assert_eq!(circle.radius().unwrap(), 0.0);
}

#[test]
fn clones_are_independent() {
    let line = LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)]);
    let mut copy = line.clone();
    assert_eq!(copy, line);
    copy.push(Coord::new(2.0, 0.0));
    assert_eq!(line.num_vertices(), 2);
    assert_ne!(copy, line);

    let collection = GeometryCollection::new(aggregates());
    let mut copy = collection.clone();
    assert_eq!(copy, collection);
    if let Some(Geom::MultiPoint(points)) = copy.geometry_mut(2) {
        points.clear();
    }
    assert_ne!(copy, collection);
    assert_eq!(collection.geometry(2).map(|g| g.is_empty()), Some(false));
}

#[test]
fn aggregate_bounding_box_contains_children() {
    for geom in aggregates() {
        let bbox = geom.bounding_box().unwrap();
        for child in children(&geom) {
            if let Some(child_box) = child.bounding_box() {
                assert!(bbox.contains_box(&child_box), "{bbox} does not contain {child_box}");
            }
        }
    }
}

#[test]
fn envelope_is_closed_ring() {
    let polygon = Polygon::new(unit_square());
    let envelope = polygon.envelope().unwrap();
    let ring = envelope.exterior();
    assert_eq!(ring.num_vertices(), 5);
    assert!(ring.is_closed());
    assert_eq!(envelope.bounding_box(), polygon.bounding_box());
}

#[test]
fn transform_keeps_geometry_type() {
    let center = Point::new(0.0, 0.0);
    for geom in aggregates() {
        let rotated = geom.rotate(90.0, &center).unwrap();
        assert_eq!(rotated.geometry_type(), geom.geometry_type());
        let moved = geom.offset(1.0, -1.0).unwrap();
        assert_eq!(moved.geometry_type(), geom.geometry_type());

        let bbox = geom.bounding_box().unwrap();
        let moved_bbox = moved.bounding_box().unwrap();
        assert_abs_diff_eq!(moved_bbox.x_min(), bbox.x_min() + 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved_bbox.y_max(), bbox.y_max() - 1.0, epsilon = 1e-12);
    }
}
