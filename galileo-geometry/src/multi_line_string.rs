use crate::collection::{all_empty, any_contains, join_bounding_boxes, transform_all};
use crate::error::{GeometryError, Result};
use crate::{BoundingBox, Coord, Curve, Geometry, GeometryType, LineString, Point, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Set of line strings.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl MultiLineString {
    /// Creates a new multi line string.
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines }
    }

    /// Member lines.
    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    /// Number of lines.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Line with the given index.
    pub fn get(&self, index: usize) -> Option<&LineString> {
        self.lines.get(index)
    }

    /// Mutable reference to the line with the given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut LineString> {
        self.lines.get_mut(index)
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, LineString> {
        self.lines.iter()
    }

    /// Appends a line.
    pub fn push(&mut self, line: LineString) {
        self.lines.push(line);
    }

    /// Removes and returns the line with the given index.
    pub fn remove(&mut self, index: usize) -> Option<LineString> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Consumes the geometry returning the lines.
    pub fn into_lines(self) -> Vec<LineString> {
        self.lines
    }

    /// Sum of the member lengths.
    pub fn length(&self) -> f64 {
        self.lines.iter().map(LineString::length).sum()
    }

    /// Whether every member line is closed. `false` if there are no lines.
    pub fn is_closed(&self) -> bool {
        !self.lines.is_empty() && self.lines.iter().all(LineString::is_closed)
    }

    pub(crate) fn distance_to_coord(&self, coord: &Coord) -> Option<f64> {
        let segments = self
            .lines
            .iter()
            .flat_map(|line| line.segments())
            .map(|segment| segment.distance_to_point_sq(coord));

        // lines with a single vertex have no segments
        let lone_vertices = self
            .lines
            .iter()
            .filter(|line| line.num_vertices() == 1)
            .flat_map(|line| line.vertices())
            .map(|v| v.distance_sq(coord));

        segments
            .chain(lone_vertices)
            .min_by(f64::total_cmp)
            .map(f64::sqrt)
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<T: IntoIterator<Item = LineString>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MultiLineString {
    type Item = &'a LineString;
    type IntoIter = std::slice::Iter<'a, LineString>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl Geometry for MultiLineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    fn is_empty(&self) -> bool {
        all_empty(&self.lines)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        join_bounding_boxes(&self.lines)
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        let coord = point.coord()?;
        self.distance_to_coord(&coord)
            .ok_or(GeometryError::EmptyGeometry)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        any_contains(&self.lines, point)
    }
}

impl Transform for MultiLineString {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Ok(Self::new(transform_all(&self.lines, |l| {
            l.rotate(degrees, center)
        })?))
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self::new(transform_all(&self.lines, |l| l.offset(dx, dy))?))
    }
}
