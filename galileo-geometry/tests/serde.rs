#![cfg(feature = "serde")]

use galileo_geometry::{Circle, Coord, Geom, GeometryCollection, LineString, Point};

#[test]
fn json_round_trip() {
    let geom = Geom::from(GeometryCollection::new(vec![
        Point::new(1.0, 2.0).into(),
        Point::empty().into(),
        LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.5, -1.0)]).into(),
        Circle::new(3.0, 3.0, 0.5).unwrap().into(),
        Circle::empty().into(),
    ]));

    let json = serde_json::to_string(&geom).unwrap();
    let restored: Geom = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, geom);
}
