//! Zero-dimensional geometries: [`Point`] and its three-dimensional extension [`Point3d`].
//!
//! Both types have an explicit *empty* state, which is different from a point at the origin. Reading a coordinate of
//! an empty point fails with [`GeometryError::EmptyGeometry`]; writing any ordinate makes the point non-empty, with the
//! remaining ordinates set to `0.0`.

use crate::error::{GeometryError, Result};
use crate::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2d point, possibly empty.
///
/// Points are compared exactly: two points are equal when both are empty, or when both have bit-for-bit equal
/// coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    coord: Option<Coord>,
}

impl Point {
    /// Number of ordinates of a 2d point.
    pub const NUM_ORDINATES: usize = 2;

    /// Creates a new non-empty point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            coord: Some(Coord::new(x, y)),
        }
    }

    /// Creates an empty point.
    pub const fn empty() -> Self {
        Self { coord: None }
    }

    /// Creates a point from a slice of exactly two values `[x, y]`.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(GeometryError::InvalidArgument(format!(
                "point requires 2 ordinates, got {}",
                values.len()
            ))),
        }
    }

    /// Returns true if the point has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    /// Returns coordinates of the point.
    pub fn coord(&self) -> Result<Coord> {
        self.coord.ok_or(GeometryError::EmptyGeometry)
    }

    /// Returns coordinates of the point, or `None` if it is empty.
    pub fn try_coord(&self) -> Option<Coord> {
        self.coord
    }

    /// X coordinate.
    pub fn x(&self) -> Result<f64> {
        Ok(self.coord()?.x)
    }

    /// Y coordinate.
    pub fn y(&self) -> Result<f64> {
        Ok(self.coord()?.y)
    }

    /// Sets X coordinate. An empty point becomes `(x, 0)`.
    pub fn set_x(&mut self, x: f64) {
        self.coord.get_or_insert_with(Coord::default).x = x;
    }

    /// Sets Y coordinate. An empty point becomes `(0, y)`.
    pub fn set_y(&mut self, y: f64) {
        self.coord.get_or_insert_with(Coord::default).y = y;
    }

    /// Sets both coordinates.
    pub fn set_coord(&mut self, coord: Coord) {
        self.coord = Some(coord);
    }

    /// Returns the number of ordinates (always 2).
    pub fn num_ordinates(&self) -> usize {
        Self::NUM_ORDINATES
    }

    /// Indexed ordinate access: `0` is X, `1` is Y.
    pub fn ordinate(&self, index: usize) -> Result<f64> {
        check_ordinate_index(index, Self::NUM_ORDINATES)?;
        Ok(self.to_array()?[index])
    }

    /// Indexed ordinate update: `0` is X, `1` is Y.
    pub fn set_ordinate(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.set_x(value),
            1 => self.set_y(value),
            _ => {
                return Err(GeometryError::OrdinateOutOfRange {
                    index,
                    dimensions: Self::NUM_ORDINATES,
                })
            }
        }

        Ok(())
    }

    /// Returns coordinates as `[x, y]`.
    pub fn to_array(&self) -> Result<[f64; 2]> {
        Ok(self.coord()?.to_array())
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Point) -> Result<f64> {
        Ok(self.coord()?.distance(&other.coord()?))
    }

    /// Returns a new point rotated clockwise by `degrees` around `center`. An empty point stays empty.
    ///
    /// Fails if the `center` is empty.
    pub fn rotate(&self, degrees: f64, center: &Point) -> Result<Point> {
        let center = center.coord()?;
        Ok(Self {
            coord: self.coord.map(|c| c.rotate(degrees, &center)),
        })
    }

    /// Returns a new point translated by `(dx, dy)`. An empty point stays empty.
    pub fn offset(&self, dx: f64, dy: f64) -> Result<Point> {
        Ok(Self {
            coord: self.coord.map(|c| c.offset(dx, dy)),
        })
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self { coord: Some(value) }
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = GeometryError;

    fn try_from(value: &[f64]) -> Result<Self> {
        Self::from_slice(value)
    }
}

/// Coordinates of a 3d point.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord3d {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Coord3d {
    /// Creates new coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Planar part of the coordinates.
    pub fn xy(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// A point with an additional Z ordinate, possibly empty.
///
/// `Point3d` can be used anywhere a [`Point`] is expected through [`Point3d::as_point`]. Planar operations ignore the
/// Z ordinate. The 3d distance is only used when both operands are `Point3d` (see [`Point3d::distance_3d`]).
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3d {
    coord: Option<Coord3d>,
}

impl Point3d {
    /// Number of ordinates of a 3d point.
    pub const NUM_ORDINATES: usize = 3;

    /// Creates a new non-empty point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: Some(Coord3d::new(x, y, z)),
        }
    }

    /// Creates an empty point.
    pub const fn empty() -> Self {
        Self { coord: None }
    }

    /// Creates a point from a slice of exactly three values `[x, y, z]`.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(GeometryError::InvalidArgument(format!(
                "3d point requires 3 ordinates, got {}",
                values.len()
            ))),
        }
    }

    /// Creates a 3d point from a planar point and a Z value. An empty `point` produces an empty result.
    pub fn from_point(point: &Point, z: f64) -> Self {
        Self {
            coord: point.try_coord().map(|c| Coord3d::new(c.x, c.y, z)),
        }
    }

    /// Returns true if the point has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    /// Returns coordinates of the point.
    pub fn coord(&self) -> Result<Coord3d> {
        self.coord.ok_or(GeometryError::EmptyGeometry)
    }

    /// X coordinate.
    pub fn x(&self) -> Result<f64> {
        Ok(self.coord()?.x)
    }

    /// Y coordinate.
    pub fn y(&self) -> Result<f64> {
        Ok(self.coord()?.y)
    }

    /// Z coordinate.
    pub fn z(&self) -> Result<f64> {
        Ok(self.coord()?.z)
    }

    /// Sets X coordinate.
    pub fn set_x(&mut self, x: f64) {
        self.coord.get_or_insert_with(Coord3d::default).x = x;
    }

    /// Sets Y coordinate.
    pub fn set_y(&mut self, y: f64) {
        self.coord.get_or_insert_with(Coord3d::default).y = y;
    }

    /// Sets Z coordinate.
    pub fn set_z(&mut self, z: f64) {
        self.coord.get_or_insert_with(Coord3d::default).z = z;
    }

    /// Returns the number of ordinates (always 3).
    pub fn num_ordinates(&self) -> usize {
        Self::NUM_ORDINATES
    }

    /// Indexed ordinate access: `0` is X, `1` is Y, `2` is Z.
    pub fn ordinate(&self, index: usize) -> Result<f64> {
        check_ordinate_index(index, Self::NUM_ORDINATES)?;
        Ok(self.to_array()?[index])
    }

    /// Indexed ordinate update: `0` is X, `1` is Y, `2` is Z.
    pub fn set_ordinate(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.set_x(value),
            1 => self.set_y(value),
            2 => self.set_z(value),
            _ => {
                return Err(GeometryError::OrdinateOutOfRange {
                    index,
                    dimensions: Self::NUM_ORDINATES,
                })
            }
        }

        Ok(())
    }

    /// Returns coordinates as `[x, y, z]`.
    pub fn to_array(&self) -> Result<[f64; 3]> {
        let c = self.coord()?;
        Ok([c.x, c.y, c.z])
    }

    /// Planar projection of the point, dropping Z.
    pub fn as_point(&self) -> Point {
        match self.coord {
            Some(c) => c.xy().into(),
            None => Point::empty(),
        }
    }

    /// Planar distance to a point.
    pub fn distance(&self, other: &Point) -> Result<f64> {
        self.as_point().distance(other)
    }

    /// Euclidean distance in 3d space.
    pub fn distance_3d(&self, other: &Point3d) -> Result<f64> {
        let a = self.coord()?;
        let b = other.coord()?;
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dz = a.z - b.z;
        Ok((dx * dx + dy * dy + dz * dz).sqrt())
    }

    /// Rotates the point in XY plane, keeping Z. An empty point stays empty.
    pub fn rotate(&self, degrees: f64, center: &Point) -> Result<Point3d> {
        let center = center.coord()?;
        Ok(Self {
            coord: self.coord.map(|c| {
                let rotated = c.xy().rotate(degrees, &center);
                Coord3d::new(rotated.x, rotated.y, c.z)
            }),
        })
    }

    /// Translates the point in XY plane, keeping Z. An empty point stays empty.
    pub fn offset(&self, dx: f64, dy: f64) -> Result<Point3d> {
        Ok(Self {
            coord: self.coord.map(|c| Coord3d::new(c.x + dx, c.y + dy, c.z)),
        })
    }
}

impl From<Coord3d> for Point3d {
    fn from(value: Coord3d) -> Self {
        Self { coord: Some(value) }
    }
}

pub(crate) fn check_ordinate_index(index: usize, dimensions: usize) -> Result<()> {
    if index < dimensions {
        Ok(())
    } else {
        Err(GeometryError::OrdinateOutOfRange { index, dimensions })
    }
}
