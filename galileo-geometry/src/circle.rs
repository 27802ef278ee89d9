use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::point::check_ordinate_index;
use crate::{BoundingBox, Coord, Geometry, GeometryType, LinearRing, Point, Polygon, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct CircleShape {
    center: Coord,
    radius: f64,
}

/// Analytic circle given by its center and radius.
///
/// Like [`Point`], a circle may be empty. Setting any of the center ordinates or the radius on an empty circle makes
/// it non-empty, with the other values set to `0.0`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    inner: Option<CircleShape>,
}

impl Circle {
    /// Number of values in the indexed accessors: X, Y and radius.
    pub const NUM_ORDINATES: usize = 3;

    /// Creates a new circle. Fails if the radius is negative or NaN.
    pub fn new(x: f64, y: f64, radius: f64) -> Result<Self> {
        check_radius(radius)?;
        Ok(Self {
            inner: Some(CircleShape {
                center: Coord::new(x, y),
                radius,
            }),
        })
    }

    /// Creates a new empty circle.
    pub fn empty() -> Self {
        Self { inner: None }
    }

    /// Creates a circle from `[x, y, radius]` values.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            &[x, y, radius] => Self::new(x, y, radius),
            _ => Err(GeometryError::InvalidArgument(format!(
                "circle requires {} values, got {}",
                Self::NUM_ORDINATES,
                values.len()
            ))),
        }
    }

    /// Whether the circle is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    fn shape(&self) -> Result<&CircleShape> {
        self.inner.as_ref().ok_or(GeometryError::EmptyGeometry)
    }

    fn shape_mut(&mut self) -> &mut CircleShape {
        self.inner.get_or_insert(CircleShape {
            center: Coord::default(),
            radius: 0.0,
        })
    }

    /// Center of the circle.
    pub fn center(&self) -> Result<Point> {
        Ok(self.shape()?.center.into())
    }

    /// X ordinate of the center.
    pub fn x(&self) -> Result<f64> {
        Ok(self.shape()?.center.x)
    }

    /// Y ordinate of the center.
    pub fn y(&self) -> Result<f64> {
        Ok(self.shape()?.center.y)
    }

    /// Radius.
    pub fn radius(&self) -> Result<f64> {
        Ok(self.shape()?.radius)
    }

    /// Sets the X ordinate of the center.
    pub fn set_x(&mut self, x: f64) {
        self.shape_mut().center.x = x;
    }

    /// Sets the Y ordinate of the center.
    pub fn set_y(&mut self, y: f64) {
        self.shape_mut().center.y = y;
    }

    /// Sets the center. Fails if the point is empty.
    pub fn set_center(&mut self, center: &Point) -> Result<()> {
        let center = center.coord()?;
        self.shape_mut().center = center;
        Ok(())
    }

    /// Sets the radius. Fails if the radius is negative or NaN.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        check_radius(radius)?;
        self.shape_mut().radius = radius;
        Ok(())
    }

    /// Value by index: 0 is X, 1 is Y, 2 is the radius.
    pub fn ordinate(&self, index: usize) -> Result<f64> {
        check_ordinate_index(index, Self::NUM_ORDINATES)?;
        let shape = self.shape()?;
        match index {
            0 => Ok(shape.center.x),
            1 => Ok(shape.center.y),
            2 => Ok(shape.radius),
            _ => Err(GeometryError::OrdinateOutOfRange {
                index,
                dimensions: Self::NUM_ORDINATES,
            }),
        }
    }

    /// Sets a value by index, see [`Circle::ordinate`].
    pub fn set_ordinate(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.set_x(value),
            1 => self.set_y(value),
            2 => self.set_radius(value)?,
            _ => {
                return Err(GeometryError::OrdinateOutOfRange {
                    index,
                    dimensions: Self::NUM_ORDINATES,
                })
            }
        }

        Ok(())
    }

    /// Area of the disc.
    pub fn area(&self) -> Result<f64> {
        let r = self.radius()?;
        Ok(PI * r * r)
    }

    /// Length of the circle.
    pub fn circumference(&self) -> Result<f64> {
        Ok(2.0 * PI * self.radius()?)
    }

    /// Approximates the circle with a regular polygon with the given number of vertices. The first vertex lies to the
    /// east of the center and the ring goes counter-clockwise.
    pub fn to_polygon(&self, segments: usize) -> Result<Polygon> {
        if segments < 3 {
            return Err(GeometryError::InvalidArgument(format!(
                "circle approximation requires at least 3 segments, got {segments}"
            )));
        }

        let shape = self.shape()?;
        let step = 2.0 * PI / segments as f64;
        let vertices = (0..segments)
            .map(|i| {
                let angle = step * i as f64;
                Coord::new(
                    shape.center.x + shape.radius * angle.cos(),
                    shape.center.y + shape.radius * angle.sin(),
                )
            })
            .collect();

        Ok(Polygon::new(LinearRing::closed(vertices)))
    }
}

fn check_radius(radius: f64) -> Result<()> {
    if radius >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidArgument(format!(
            "circle radius must be non-negative, got {radius}"
        )))
    }
}

impl Geometry for Circle {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Circle
    }

    fn is_empty(&self) -> bool {
        Circle::is_empty(self)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.inner.map(|CircleShape { center, radius }| {
            BoundingBox::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            )
        })
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        let shape = self.shape()?;
        let d = shape.center.distance(&point.coord()?);
        Ok((d - shape.radius).max(0.0))
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        let coord = point.coord()?;
        Ok(self
            .inner
            .is_some_and(|shape| shape.center.distance(&coord) <= shape.radius))
    }
}

impl Transform for Circle {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        let rotation_center = center.coord()?;
        let mut inner = self.inner;
        if let Some(shape) = &mut inner {
            shape.center = shape.center.rotate(degrees, &rotation_center);
        }

        Ok(Self { inner })
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        let mut inner = self.inner;
        if let Some(shape) = &mut inner {
            shape.center = shape.center.offset(dx, dy);
        }

        Ok(Self { inner })
    }
}
