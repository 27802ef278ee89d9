use crate::error::{GeometryError, Result};
use crate::{BoundingBox, Coord, Curve, Geometry, GeometryType, Point, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of vertices connected with straight segments.
///
/// A line string with zero or one vertex is degenerate: its length is zero. A line string without vertices is empty
/// and has no start or end point.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineString {
    vertices: Vec<Coord>,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(vertices: Vec<Coord>) -> Self {
        Self { vertices }
    }

    /// Creates a line string from points. Fails if any of the points is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Result<Self> {
        Ok(Self::new(
            points
                .into_iter()
                .map(Point::coord)
                .collect::<Result<Vec<_>>>()?,
        ))
    }

    /// Creates a line string from a flat array of ordinates `[x0, y0, x1, y1, ...]`.
    pub fn from_ordinates(ordinates: &[f64]) -> Result<Self> {
        if ordinates.len() % 2 != 0 {
            return Err(GeometryError::InvalidArgument(format!(
                "expected an even number of ordinates, got {}",
                ordinates.len()
            )));
        }

        Ok(Self::new(
            ordinates
                .chunks_exact(2)
                .map(|c| Coord::new(c[0], c[1]))
                .collect(),
        ))
    }

    /// Appends a vertex to the end.
    pub fn push(&mut self, vertex: Coord) {
        self.vertices.push(vertex);
    }

    /// Inserts a vertex at the `index` position. Fails if `index > num_vertices()`.
    pub fn insert(&mut self, index: usize, vertex: Coord) -> Result<()> {
        if index > self.vertices.len() {
            return Err(GeometryError::InvalidArgument(format!(
                "vertex index {index} is out of range"
            )));
        }

        self.vertices.insert(index, vertex);
        Ok(())
    }

    /// Replaces the vertex at `index`, returning the old value.
    pub fn set(&mut self, index: usize, vertex: Coord) -> Result<Coord> {
        let slot = self.vertices.get_mut(index).ok_or_else(|| {
            GeometryError::InvalidArgument(format!("vertex index {index} is out of range"))
        })?;
        Ok(std::mem::replace(slot, vertex))
    }

    /// Removes and returns the vertex at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Coord> {
        (index < self.vertices.len()).then(|| self.vertices.remove(index))
    }

    /// Removes all vertices.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Returns a line string with vertices in reverse order.
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// Consumes the line string returning its vertices.
    pub fn into_vertices(self) -> Vec<Coord> {
        self.vertices
    }

    pub(crate) fn map_vertices(&self, f: impl Fn(&Coord) -> Coord) -> Self {
        Self::new(self.vertices.iter().map(f).collect())
    }
}

impl Extend<Coord> for LineString {
    fn extend<T: IntoIterator<Item = Coord>>(&mut self, iter: T) {
        self.vertices.extend(iter);
    }
}

impl FromIterator<Coord> for LineString {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self::new(value)
    }
}

impl Curve for LineString {
    fn vertices(&self) -> &[Coord] {
        &self.vertices
    }
}

impl Geometry for LineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.vertices_bounding_box()
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        let coord = point.coord()?;
        self.distance_to_coord(&coord)
            .ok_or(GeometryError::EmptyGeometry)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        let coord = point.coord()?;
        Ok(self.distance_to_coord(&coord) == Some(0.0))
    }
}

impl Transform for LineString {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        let center = center.coord()?;
        Ok(self.map_vertices(|v| v.rotate(degrees, &center)))
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(self.map_vertices(|v| v.offset(dx, dy)))
    }
}
