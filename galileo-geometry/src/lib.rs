//! Geometry model for planar vector data, following the OGC Simple Features hierarchy.
//!
//! The crate provides points (2d and 3d), line strings, linear rings, polygons with holes, circles, arrows, rasters
//! and homogeneous or heterogeneous aggregates of those. Every geometry implements [`Geometry`], which gives access to
//! the type, emptiness, bounding box, distance and containment tests, and [`Transform`] for rotation and translation.
//! [`Geom`] wraps any of the geometries into one value.
//!
//! All computations are planar, in the units of the coordinates.
//!
//! With the `geozero` feature the geometries can be written to and read from well-known text and binary, see
//! [`WellKnown`] and [`Geom::from_text`]. The `geo-types` feature adds conversions to and from
//! [geo-types](https://docs.rs/geo-types) geometries.
//!
//! ```
//! use galileo_geometry::{Coord, Geometry, LinearRing, Point, Polygon};
//!
//! let polygon = Polygon::new(LinearRing::closed(vec![
//!     Coord::new(0.0, 0.0),
//!     Coord::new(2.0, 0.0),
//!     Coord::new(2.0, 2.0),
//!     Coord::new(0.0, 2.0),
//! ]));
//!
//! assert_eq!(polygon.area(), 4.0);
//! assert!(polygon.contains(&Point::new(1.0, 1.0)).unwrap());
//! assert_eq!(polygon.distance(&Point::new(5.0, 1.0)).unwrap(), 3.0);
//! ```

pub mod error;
pub use error::{GeometryError, Result};

mod coord;
pub use coord::*;

mod point;
pub use point::*;

mod bounding_box;
pub use bounding_box::*;

pub mod segment;

pub mod curve;
pub use curve::*;

mod line_string;
pub use line_string::*;

mod linear_ring;
pub use linear_ring::*;

mod polygon;
pub use polygon::*;

mod circle;
pub use circle::*;

mod arrow;
pub use arrow::*;

mod multi_point;
pub use multi_point::*;

mod multi_line_string;
pub use multi_line_string::*;

mod multi_polygon;
pub use multi_polygon::*;

mod collection;
pub use collection::GeometryCollection;

mod raster;
pub use raster::*;

pub mod geometry_type;
pub use geometry_type::*;

mod geometry;
pub use geometry::*;

#[cfg(feature = "geozero")]
pub mod wkt_wkb;
#[cfg(feature = "geozero")]
pub use wkt_wkb::WellKnown;

#[cfg(feature = "geo-types")]
mod geo_types;
