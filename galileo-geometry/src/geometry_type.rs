//! See documentation for [`GeometryType`].

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a geometry.
///
/// Every concrete geometry reports its kind through [`Geometry::geometry_type`](crate::Geometry::geometry_type).
/// Types that have no OGC counterpart (`Circle`, `ArrowLineString`, `Raster`) are listed as separate kinds but map to
/// the nearest OGC code when one exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryType {
    /// 2d point.
    Point,
    /// Point with a Z ordinate.
    Point3d,
    /// Open or closed curve.
    LineString,
    /// Closed simple curve.
    LinearRing,
    /// Surface bounded by an exterior ring, with optional holes.
    Polygon,
    /// Analytic circle.
    Circle,
    /// Line with an arrowhead.
    ArrowLineString,
    /// Set of points.
    MultiPoint,
    /// Set of curves.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
    /// Heterogeneous set of geometries.
    GeometryCollection,
    /// Image bound by a rectangle.
    Raster,
}

impl GeometryType {
    /// Name of the type as used in well-known text.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::Point3d => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::LinearRing => "LinearRing",
            GeometryType::Polygon => "Polygon",
            GeometryType::Circle => "Circle",
            GeometryType::ArrowLineString => "ArrowLineString",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
            GeometryType::Raster => "Raster",
        }
    }

    /// ISO well-known binary type code. `None` for types that have no binary representation.
    pub fn wkb_code(&self) -> Option<u32> {
        match self {
            GeometryType::Point => Some(1),
            GeometryType::Point3d => Some(1001),
            GeometryType::LineString | GeometryType::LinearRing => Some(2),
            GeometryType::Polygon => Some(3),
            GeometryType::MultiPoint => Some(4),
            GeometryType::MultiLineString | GeometryType::ArrowLineString => Some(5),
            GeometryType::MultiPolygon => Some(6),
            GeometryType::GeometryCollection => Some(7),
            GeometryType::Circle | GeometryType::Raster => None,
        }
    }

    /// Topological dimension: 0 for points, 1 for curves, 2 for surfaces. Collections report the dimension of their
    /// element type; the heterogeneous collection reports `None`.
    pub fn dimension(&self) -> Option<u8> {
        match self {
            GeometryType::Point | GeometryType::Point3d | GeometryType::MultiPoint => Some(0),
            GeometryType::LineString
            | GeometryType::LinearRing
            | GeometryType::ArrowLineString
            | GeometryType::MultiLineString => Some(1),
            GeometryType::Polygon
            | GeometryType::Circle
            | GeometryType::MultiPolygon
            | GeometryType::Raster => Some(2),
            GeometryType::GeometryCollection => None,
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
