use crate::collection::{all_empty, any_contains, join_bounding_boxes, min_distance, transform_all};
use crate::error::Result;
use crate::{BoundingBox, Geometry, GeometryType, Point, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Set of points.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    /// Creates a new multipoint.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Member points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, including empty ones.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Point with the given index.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Mutable reference to the point with the given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Point> {
        self.points.get_mut(index)
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Appends a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Removes and returns the point with the given index.
    pub fn remove(&mut self, index: usize) -> Option<Point> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Whether no two points are equal.
    pub fn is_simple(&self) -> bool {
        self.points
            .iter()
            .enumerate()
            .all(|(i, p)| !self.points[i + 1..].contains(p))
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MultiPoint {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Geometry for MultiPoint {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    fn is_empty(&self) -> bool {
        all_empty(&self.points)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        join_bounding_boxes(&self.points)
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        min_distance(&self.points, point)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        any_contains(&self.points, point)
    }
}

impl Transform for MultiPoint {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Ok(Self::new(transform_all(&self.points, |p| {
            p.rotate(degrees, center)
        })?))
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self::new(transform_all(&self.points, |p| {
            p.offset(dx, dy)
        })?))
    }
}
