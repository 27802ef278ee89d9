use crate::collection::{all_empty, any_contains, join_bounding_boxes, min_distance, transform_all};
use crate::error::Result;
use crate::{BoundingBox, Geometry, GeometryType, Point, Polygon, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Set of polygons.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a new multipolygon.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Member polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of polygons.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Polygon with the given index.
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// Mutable reference to the polygon with the given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Polygon> {
        self.polygons.get_mut(index)
    }

    /// Iterates over the polygons.
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Appends a polygon.
    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Removes and returns the polygon with the given index.
    pub fn remove(&mut self, index: usize) -> Option<Polygon> {
        (index < self.polygons.len()).then(|| self.polygons.remove(index))
    }

    /// Removes all polygons.
    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Sum of the member areas.
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MultiPolygon {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

impl Geometry for MultiPolygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }

    fn is_empty(&self) -> bool {
        all_empty(&self.polygons)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        join_bounding_boxes(&self.polygons)
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        min_distance(&self.polygons, point)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        any_contains(&self.polygons, point)
    }
}

impl Transform for MultiPolygon {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Ok(Self::new(transform_all(&self.polygons, |p| {
            p.rotate(degrees, center)
        })?))
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self::new(transform_all(&self.polygons, |p| {
            p.offset(dx, dy)
        })?))
    }
}
