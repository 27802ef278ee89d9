//! Conversions between the crate geometries and [`geo_types`] geometries.
//!
//! Conversions into `geo_types` fail for values that have no counterpart there: empty points, circles and rasters.
//! Arrows are converted into their multi line string.

use crate::error::{GeometryError, Result};
use crate::geometry::Geom;
use crate::{
    BoundingBox, Coord, Curve, GeometryCollection, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

impl From<Coord> for geo_types::Coord<f64> {
    fn from(value: Coord) -> Self {
        geo_types::coord! { x: value.x, y: value.y }
    }
}

impl From<geo_types::Coord<f64>> for Coord {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Coord::new(value.x, value.y)
    }
}

impl TryFrom<&Point> for geo_types::Point<f64> {
    type Error = GeometryError;

    fn try_from(value: &Point) -> Result<Self> {
        Ok(geo_types::Point(value.coord()?.into()))
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::from(Coord::from(value.0))
    }
}

fn to_geo_line(vertices: &[Coord]) -> geo_types::LineString<f64> {
    geo_types::LineString::new(vertices.iter().map(|&c| c.into()).collect())
}

fn from_geo_line(line: &geo_types::LineString<f64>) -> Vec<Coord> {
    line.0.iter().map(|&c| c.into()).collect()
}

impl From<&LineString> for geo_types::LineString<f64> {
    fn from(value: &LineString) -> Self {
        to_geo_line(value.vertices())
    }
}

impl From<&LinearRing> for geo_types::LineString<f64> {
    fn from(value: &LinearRing) -> Self {
        to_geo_line(value.vertices())
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(value: geo_types::LineString<f64>) -> Self {
        LineString::new(from_geo_line(&value))
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        geo_types::Polygon::new(
            value.exterior().into(),
            value.interiors().iter().map(Into::into).collect(),
        )
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        Polygon::with_interiors(
            LinearRing::new(from_geo_line(value.exterior())),
            value
                .interiors()
                .iter()
                .map(|ring| LinearRing::new(from_geo_line(ring)))
                .collect(),
        )
    }
}

impl From<&BoundingBox> for geo_types::Rect<f64> {
    fn from(value: &BoundingBox) -> Self {
        geo_types::Rect::new(
            geo_types::coord! { x: value.x_min(), y: value.y_min() },
            geo_types::coord! { x: value.x_max(), y: value.y_max() },
        )
    }
}

impl From<geo_types::Rect<f64>> for BoundingBox {
    fn from(value: geo_types::Rect<f64>) -> Self {
        BoundingBox::from_corners(value.min().into(), value.max().into())
    }
}

impl TryFrom<&MultiPoint> for geo_types::MultiPoint<f64> {
    type Error = GeometryError;

    fn try_from(value: &MultiPoint) -> Result<Self> {
        Ok(geo_types::MultiPoint(
            value
                .iter()
                .map(geo_types::Point::<f64>::try_from)
                .collect::<Result<_>>()?,
        ))
    }
}

impl From<geo_types::MultiPoint<f64>> for MultiPoint {
    fn from(value: geo_types::MultiPoint<f64>) -> Self {
        value.0.into_iter().map(Point::from).collect()
    }
}

impl From<&MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(value: &MultiLineString) -> Self {
        geo_types::MultiLineString(value.iter().map(Into::into).collect())
    }
}

impl From<geo_types::MultiLineString<f64>> for MultiLineString {
    fn from(value: geo_types::MultiLineString<f64>) -> Self {
        value.0.into_iter().map(LineString::from).collect()
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        geo_types::MultiPolygon(value.iter().map(Into::into).collect())
    }
}

impl From<geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(value: geo_types::MultiPolygon<f64>) -> Self {
        value.0.into_iter().map(Polygon::from).collect()
    }
}

impl TryFrom<&GeometryCollection> for geo_types::GeometryCollection<f64> {
    type Error = GeometryError;

    fn try_from(value: &GeometryCollection) -> Result<Self> {
        Ok(geo_types::GeometryCollection(
            value
                .iter()
                .map(geo_types::Geometry::<f64>::try_from)
                .collect::<Result<_>>()?,
        ))
    }
}

impl From<geo_types::GeometryCollection<f64>> for GeometryCollection {
    fn from(value: geo_types::GeometryCollection<f64>) -> Self {
        value.0.into_iter().map(Geom::from).collect()
    }
}

impl TryFrom<&Geom> for geo_types::Geometry<f64> {
    type Error = GeometryError;

    fn try_from(value: &Geom) -> Result<Self> {
        use geo_types::Geometry as G;

        Ok(match value {
            Geom::Point(v) => G::Point(v.try_into()?),
            Geom::Point3d(v) => G::Point((&v.as_point()).try_into()?),
            Geom::LineString(v) => G::LineString(v.into()),
            Geom::LinearRing(v) => G::LineString(v.into()),
            Geom::Polygon(v) => G::Polygon(v.into()),
            Geom::ArrowLineString(v) => G::MultiLineString(v.lines().into()),
            Geom::MultiPoint(v) => G::MultiPoint(v.try_into()?),
            Geom::MultiLineString(v) => G::MultiLineString(v.into()),
            Geom::MultiPolygon(v) => G::MultiPolygon(v.into()),
            Geom::GeometryCollection(v) => G::GeometryCollection(v.try_into()?),
            Geom::Circle(_) => {
                return Err(GeometryError::Unsupported("circle conversion to geo-types"))
            }
            Geom::Raster(_) => {
                return Err(GeometryError::Unsupported("raster conversion to geo-types"))
            }
        })
    }
}

impl From<geo_types::Geometry<f64>> for Geom {
    fn from(value: geo_types::Geometry<f64>) -> Self {
        use geo_types::Geometry as G;

        match value {
            G::Point(v) => Point::from(v).into(),
            G::Line(v) => LineString::new(vec![v.start.into(), v.end.into()]).into(),
            G::LineString(v) => LineString::from(v).into(),
            G::Polygon(v) => Polygon::from(v).into(),
            G::MultiPoint(v) => MultiPoint::from(v).into(),
            G::MultiLineString(v) => MultiLineString::from(v).into(),
            G::MultiPolygon(v) => MultiPolygon::from(v).into(),
            G::GeometryCollection(v) => GeometryCollection::from(v).into(),
            G::Rect(v) => BoundingBox::from(v).to_polygon().into(),
            G::Triangle(v) => Polygon::from(v.to_polygon()).into(),
        }
    }
}
