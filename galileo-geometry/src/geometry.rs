use crate::error::Result;
use crate::{
    ArrowLineString, BoundingBox, Circle, GeometryCollection, GeometryType, LineString,
    LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point, Point3d, Polygon, Raster,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capabilities shared by all geometries.
pub trait Geometry {
    /// Kind of the geometry.
    fn geometry_type(&self) -> GeometryType;

    /// Whether the geometry has no content (no coordinates, vertices or non-empty members).
    fn is_empty(&self) -> bool;

    /// Smallest axis-aligned rectangle that contains the geometry. `None` for empty geometries.
    fn bounding_box(&self) -> Option<BoundingBox>;

    /// Shortest distance from the `point` to the geometry.
    ///
    /// Fails with [`GeometryError::EmptyGeometry`](crate::GeometryError::EmptyGeometry) if either the geometry or the
    /// point is empty.
    fn distance(&self, point: &Point) -> Result<f64>;

    /// Whether the `point` is inside the geometry (or on it, for points and curves). Empty geometries contain nothing.
    ///
    /// Fails with [`GeometryError::EmptyGeometry`](crate::GeometryError::EmptyGeometry) if the point is empty.
    fn contains(&self, point: &Point) -> Result<bool>;

    /// Bounding box converted into a polygon with a closed 5-vertex exterior ring.
    fn envelope(&self) -> Option<Polygon> {
        self.bounding_box().map(|bbox| bbox.to_polygon())
    }
}

/// Affine transformations that produce new geometries.
pub trait Transform: Sized {
    /// Rotates the geometry clockwise by `degrees` around the `center`.
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self>;

    /// Translates the geometry by `(dx, dy)`.
    fn offset(&self, dx: f64, dy: f64) -> Result<Self>;
}

/// Any of the geometries of the crate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geom {
    /// 2d point.
    Point(Point),
    /// 3d point.
    Point3d(Point3d),
    /// Line string.
    LineString(LineString),
    /// Linear ring.
    LinearRing(LinearRing),
    /// Polygon.
    Polygon(Polygon),
    /// Circle.
    Circle(Circle),
    /// Arrow.
    ArrowLineString(ArrowLineString),
    /// Multipoint.
    MultiPoint(MultiPoint),
    /// Multi line string.
    MultiLineString(MultiLineString),
    /// Multipolygon.
    MultiPolygon(MultiPolygon),
    /// Geometry collection.
    GeometryCollection(GeometryCollection),
    /// Raster.
    Raster(Raster),
}

impl Geometry for Geom {
    fn geometry_type(&self) -> GeometryType {
        match self {
            Geom::Point(v) => v.geometry_type(),
            Geom::Point3d(v) => v.geometry_type(),
            Geom::LineString(v) => v.geometry_type(),
            Geom::LinearRing(v) => v.geometry_type(),
            Geom::Polygon(v) => v.geometry_type(),
            Geom::Circle(v) => v.geometry_type(),
            Geom::ArrowLineString(v) => v.geometry_type(),
            Geom::MultiPoint(v) => v.geometry_type(),
            Geom::MultiLineString(v) => v.geometry_type(),
            Geom::MultiPolygon(v) => v.geometry_type(),
            Geom::GeometryCollection(v) => v.geometry_type(),
            Geom::Raster(v) => v.geometry_type(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Geom::Point(v) => Geometry::is_empty(v),
            Geom::Point3d(v) => Geometry::is_empty(v),
            Geom::LineString(v) => Geometry::is_empty(v),
            Geom::LinearRing(v) => Geometry::is_empty(v),
            Geom::Polygon(v) => Geometry::is_empty(v),
            Geom::Circle(v) => Geometry::is_empty(v),
            Geom::ArrowLineString(v) => Geometry::is_empty(v),
            Geom::MultiPoint(v) => Geometry::is_empty(v),
            Geom::MultiLineString(v) => Geometry::is_empty(v),
            Geom::MultiPolygon(v) => Geometry::is_empty(v),
            Geom::GeometryCollection(v) => Geometry::is_empty(v),
            Geom::Raster(v) => Geometry::is_empty(v),
        }
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Geom::Point(v) => v.bounding_box(),
            Geom::Point3d(v) => v.bounding_box(),
            Geom::LineString(v) => v.bounding_box(),
            Geom::LinearRing(v) => v.bounding_box(),
            Geom::Polygon(v) => v.bounding_box(),
            Geom::Circle(v) => v.bounding_box(),
            Geom::ArrowLineString(v) => v.bounding_box(),
            Geom::MultiPoint(v) => v.bounding_box(),
            Geom::MultiLineString(v) => v.bounding_box(),
            Geom::MultiPolygon(v) => v.bounding_box(),
            Geom::GeometryCollection(v) => v.bounding_box(),
            Geom::Raster(v) => v.bounding_box(),
        }
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        match self {
            Geom::Point(v) => Geometry::distance(v, point),
            Geom::Point3d(v) => Geometry::distance(v, point),
            Geom::LineString(v) => v.distance(point),
            Geom::LinearRing(v) => v.distance(point),
            Geom::Polygon(v) => v.distance(point),
            Geom::Circle(v) => v.distance(point),
            Geom::ArrowLineString(v) => v.distance(point),
            Geom::MultiPoint(v) => v.distance(point),
            Geom::MultiLineString(v) => v.distance(point),
            Geom::MultiPolygon(v) => v.distance(point),
            Geom::GeometryCollection(v) => v.distance(point),
            Geom::Raster(v) => v.distance(point),
        }
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        match self {
            Geom::Point(v) => v.contains(point),
            Geom::Point3d(v) => v.contains(point),
            Geom::LineString(v) => v.contains(point),
            Geom::LinearRing(v) => v.contains(point),
            Geom::Polygon(v) => v.contains(point),
            Geom::Circle(v) => v.contains(point),
            Geom::ArrowLineString(v) => v.contains(point),
            Geom::MultiPoint(v) => v.contains(point),
            Geom::MultiLineString(v) => v.contains(point),
            Geom::MultiPolygon(v) => v.contains(point),
            Geom::GeometryCollection(v) => v.contains(point),
            Geom::Raster(v) => v.contains(point),
        }
    }
}

impl Transform for Geom {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Ok(match self {
            Geom::Point(v) => Geom::Point(Transform::rotate(v, degrees, center)?),
            Geom::Point3d(v) => Geom::Point3d(Transform::rotate(v, degrees, center)?),
            Geom::LineString(v) => Geom::LineString(v.rotate(degrees, center)?),
            Geom::LinearRing(v) => Geom::LinearRing(v.rotate(degrees, center)?),
            Geom::Polygon(v) => Geom::Polygon(v.rotate(degrees, center)?),
            Geom::Circle(v) => Geom::Circle(v.rotate(degrees, center)?),
            Geom::ArrowLineString(v) => Geom::ArrowLineString(v.rotate(degrees, center)?),
            Geom::MultiPoint(v) => Geom::MultiPoint(v.rotate(degrees, center)?),
            Geom::MultiLineString(v) => Geom::MultiLineString(v.rotate(degrees, center)?),
            Geom::MultiPolygon(v) => Geom::MultiPolygon(v.rotate(degrees, center)?),
            Geom::GeometryCollection(v) => Geom::GeometryCollection(v.rotate(degrees, center)?),
            Geom::Raster(v) => Geom::Raster(v.rotate(degrees, center)?),
        })
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(match self {
            Geom::Point(v) => Geom::Point(Transform::offset(v, dx, dy)?),
            Geom::Point3d(v) => Geom::Point3d(Transform::offset(v, dx, dy)?),
            Geom::LineString(v) => Geom::LineString(v.offset(dx, dy)?),
            Geom::LinearRing(v) => Geom::LinearRing(v.offset(dx, dy)?),
            Geom::Polygon(v) => Geom::Polygon(v.offset(dx, dy)?),
            Geom::Circle(v) => Geom::Circle(v.offset(dx, dy)?),
            Geom::ArrowLineString(v) => Geom::ArrowLineString(v.offset(dx, dy)?),
            Geom::MultiPoint(v) => Geom::MultiPoint(v.offset(dx, dy)?),
            Geom::MultiLineString(v) => Geom::MultiLineString(v.offset(dx, dy)?),
            Geom::MultiPolygon(v) => Geom::MultiPolygon(v.offset(dx, dy)?),
            Geom::GeometryCollection(v) => Geom::GeometryCollection(v.offset(dx, dy)?),
            Geom::Raster(v) => Geom::Raster(v.offset(dx, dy)?),
        })
    }
}

impl From<Point> for Geom {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<Point3d> for Geom {
    fn from(value: Point3d) -> Self {
        Self::Point3d(value)
    }
}

impl From<LineString> for Geom {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<LinearRing> for Geom {
    fn from(value: LinearRing) -> Self {
        Self::LinearRing(value)
    }
}

impl From<Polygon> for Geom {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<Circle> for Geom {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<ArrowLineString> for Geom {
    fn from(value: ArrowLineString) -> Self {
        Self::ArrowLineString(value)
    }
}

impl From<MultiPoint> for Geom {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geom {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geom {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geom {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

impl From<Raster> for Geom {
    fn from(value: Raster) -> Self {
        Self::Raster(value)
    }
}

impl Geometry for Point {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn is_empty(&self) -> bool {
        Point::is_empty(self)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.try_coord().map(BoundingBox::from_coord)
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        Point::distance(self, point)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        let coord = point.coord()?;
        Ok(self.try_coord() == Some(coord))
    }
}

impl Transform for Point {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Point::rotate(self, degrees, center)
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Point::offset(self, dx, dy)
    }
}

impl Geometry for Point3d {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point3d
    }

    fn is_empty(&self) -> bool {
        Point3d::is_empty(self)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.as_point().bounding_box()
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        Point3d::distance(self, point)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        self.as_point().contains(point)
    }
}

impl Transform for Point3d {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Point3d::rotate(self, degrees, center)
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Point3d::offset(self, dx, dy)
    }
}
