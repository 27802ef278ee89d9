use crate::error::Result;
use crate::{BoundingBox, Coord, Curve, Geometry, GeometryType, LineString, Point, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed simple curve, used as a boundary of polygons.
///
/// The ring is expected to be closed (first vertex equal to the last one) and not self-intersecting. This is not
/// validated; use [`Curve::is_ring`] to check it. Algorithms of this type produce meaningless, but well-defined,
/// results for rings that violate these requirements.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearRing {
    line: LineString,
}

impl LinearRing {
    /// Creates a new ring. The last vertex must repeat the first one.
    pub fn new(vertices: Vec<Coord>) -> Self {
        Self {
            line: LineString::new(vertices),
        }
    }

    /// Creates a ring, appending the first vertex at the end if the vertices are not closed yet.
    pub fn closed(mut vertices: Vec<Coord>) -> Self {
        if let (Some(&first), Some(last)) = (vertices.first(), vertices.last()) {
            if first != *last {
                vertices.push(first);
            }
        }

        Self::new(vertices)
    }

    /// Line string with the same vertices.
    pub fn as_line_string(&self) -> &LineString {
        &self.line
    }

    /// Consumes the ring returning it as a line string.
    pub fn into_line_string(self) -> LineString {
        self.line
    }

    /// Appends a vertex to the end.
    pub fn push(&mut self, vertex: Coord) {
        self.line.push(vertex);
    }

    /// Inserts a vertex at the `index` position.
    pub fn insert(&mut self, index: usize, vertex: Coord) -> Result<()> {
        self.line.insert(index, vertex)
    }

    /// Replaces the vertex at `index`, returning the old value.
    pub fn set(&mut self, index: usize, vertex: Coord) -> Result<Coord> {
        self.line.set(index, vertex)
    }

    /// Removes and returns the vertex at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Coord> {
        self.line.remove(index)
    }

    /// Removes all vertices.
    pub fn clear(&mut self) {
        self.line.clear();
    }

    /// Returns a ring with the reverse vertex order (and so the opposite orientation).
    pub fn reversed(&self) -> Self {
        Self {
            line: self.line.reversed(),
        }
    }

    /// Area enclosed by the ring, always non-negative. Zero for rings with less than 3 vertices.
    pub fn area(&self) -> f64 {
        let vertices = self.vertices();
        if vertices.len() < 3 {
            return 0.0;
        }

        let a = vertices[0];
        let sum: f64 = vertices[1..]
            .windows(2)
            .map(|w| {
                let (b, c) = (w[0], w[1]);
                a.x * b.y - a.y * b.x + a.y * c.x - a.x * c.y + b.x * c.y - c.x * b.y
            })
            .sum();

        (sum / 2.0).abs()
    }

    /// Shoelace area with sign: positive for counter-clockwise rings, negative for clockwise ones.
    pub fn signed_area(&self) -> f64 {
        let sum: f64 = self
            .segments()
            .map(|s| s.0.x * s.1.y - s.1.x * s.0.y)
            .sum();

        sum / 2.0
    }

    /// Whether the vertices go counter-clockwise.
    ///
    /// The orientation is determined at the vertex with the largest Y coordinate (the first one if there are several).
    /// If that vertex and its neighbours are collinear, the ring is counter-clockwise when the previous vertex lies to
    /// the right of the next one.
    ///
    /// Rings with less than 4 vertices (3 distinct ones plus the closing vertex) are never counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        let vertices = self.vertices();
        let count = vertices.len();
        if count < 4 {
            return false;
        }

        let mut hip_index = 0;
        for (i, v) in vertices.iter().enumerate().skip(1) {
            if v.y > vertices[hip_index].y {
                hip_index = i;
            }
        }

        // the closing vertex duplicates the first one, so neighbours wrap around it
        let prev_index = if hip_index == 0 {
            count - 2
        } else {
            hip_index - 1
        };
        let next_index = if hip_index + 1 >= count {
            1
        } else {
            hip_index + 1
        };

        let hip = vertices[hip_index];
        let prev = vertices[prev_index];
        let next = vertices[next_index];

        let (prev_dx, prev_dy) = (prev.x - hip.x, prev.y - hip.y);
        let (next_dx, next_dy) = (next.x - hip.x, next.y - hip.y);
        let cross = next_dx * prev_dy - next_dy * prev_dx;

        if cross == 0.0 {
            log::trace!("Ring orientation is decided by a collinear vertex triplet at {hip:?}");
            return prev.x > next.x;
        }

        cross > 0.0
    }

    /// Even-odd (crossing number) test of whether the coordinate is inside the ring.
    pub fn is_point_within(&self, point: &Point) -> Result<bool> {
        Ok(self.contains_coord(&point.coord()?))
    }

    pub(crate) fn contains_coord(&self, p: &Coord) -> bool {
        let vertices = self.vertices();
        let Some(mut j) = vertices.len().checked_sub(1) else {
            return false;
        };

        let mut inside = false;
        for (i, vi) in vertices.iter().enumerate() {
            let vj = vertices[j];
            if ((vi.y <= p.y && p.y < vj.y) || (vj.y <= p.y && p.y < vi.y))
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// Area-weighted centroid of the enclosed surface. `None` if the ring has no area.
    pub fn centroid(&self) -> Option<Coord> {
        let area = self.signed_area();
        if area == 0.0 {
            return None;
        }

        let (mut cx, mut cy) = (0.0, 0.0);
        for s in self.segments() {
            let cross = s.0.x * s.1.y - s.1.x * s.0.y;
            cx += (s.0.x + s.1.x) * cross;
            cy += (s.0.y + s.1.y) * cross;
        }

        Some(Coord::new(cx / (6.0 * area), cy / (6.0 * area)))
    }
}

impl From<LineString> for LinearRing {
    fn from(value: LineString) -> Self {
        Self { line: value }
    }
}

impl From<Vec<Coord>> for LinearRing {
    fn from(value: Vec<Coord>) -> Self {
        Self::new(value)
    }
}

impl Curve for LinearRing {
    fn vertices(&self) -> &[Coord] {
        self.line.vertices()
    }
}

impl Geometry for LinearRing {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LinearRing
    }

    fn is_empty(&self) -> bool {
        Geometry::is_empty(&self.line)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.line.bounding_box()
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        self.line.distance(point)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        let coord = point.coord()?;
        if self.vertices().is_empty() {
            return Ok(false);
        }

        Ok(self.contains_coord(&coord) || self.distance_to_coord(&coord) == Some(0.0))
    }
}

impl Transform for LinearRing {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Ok(Self {
            line: self.line.rotate(degrees, center)?,
        })
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self {
            line: self.line.offset(dx, dy)?,
        })
    }
}
