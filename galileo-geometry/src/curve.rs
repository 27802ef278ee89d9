//! Curve is a sequence of vertices connected with straight segments.
//!
//! Both [`LineString`](crate::LineString) and [`LinearRing`](crate::LinearRing) are curves. Unlike contours that
//! describe closing implicitly, a curve follows OGC semantics: it is considered closed only when its first and last
//! vertices are exactly equal, and a closed curve stores the closing vertex explicitly.

use std::collections::HashSet;

use crate::error::{GeometryError, Result};
use crate::segment::Segment;
use crate::{Coord, LineString, Point};

/// Read-only operations shared by all curve types. Implementors only need to provide [`Curve::vertices`].
pub trait Curve {
    /// Vertices of the curve in order.
    fn vertices(&self) -> &[Coord];

    /// Number of vertices.
    fn num_vertices(&self) -> usize {
        self.vertices().len()
    }

    /// Returns the vertex with the given index as a point.
    fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices().get(index).map(|&c| c.into())
    }

    /// First vertex of the curve. Fails with [`GeometryError::EmptyGeometry`] if the curve has no vertices.
    fn start_point(&self) -> Result<Point> {
        self.vertices()
            .first()
            .map(|&c| c.into())
            .ok_or(GeometryError::EmptyGeometry)
    }

    /// Last vertex of the curve. Fails with [`GeometryError::EmptyGeometry`] if the curve has no vertices.
    fn end_point(&self) -> Result<Point> {
        self.vertices()
            .last()
            .map(|&c| c.into())
            .ok_or(GeometryError::EmptyGeometry)
    }

    /// Sum of the segment lengths. Zero for curves with less than two vertices.
    fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Whether the first and the last vertices are exactly equal. A curve without vertices is not closed.
    fn is_closed(&self) -> bool {
        match (self.vertices().first(), self.vertices().last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Whether no vertex is repeated, except for the closing vertex of a closed curve.
    fn is_simple(&self) -> bool {
        let vertices = self.vertices();
        let check = if vertices.len() > 1 && self.is_closed() {
            &vertices[..vertices.len() - 1]
        } else {
            vertices
        };

        // `+ 0.0` maps -0.0 to 0.0 so that the bit patterns agree with `==`
        let mut seen = HashSet::with_capacity(check.len());
        check
            .iter()
            .all(|c| seen.insert(((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits())))
    }

    /// Closed and simple.
    fn is_ring(&self) -> bool {
        self.is_closed() && self.is_simple()
    }

    /// Iterates over the segments between consecutive vertices.
    fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.vertices().windows(2).map(|w| Segment(&w[0], &w[1]))
    }

    /// Iterates over two-vertex line strings, one per pair of consecutive vertices. Every call starts over from the
    /// current vertices.
    fn line_segments(&self) -> impl Iterator<Item = LineString> {
        self.vertices()
            .windows(2)
            .map(|w| LineString::new(w.to_vec()))
    }

    /// Minimum distance from the coordinate to the curve. `None` if the curve has no vertices.
    fn distance_to_coord(&self, coord: &Coord) -> Option<f64> {
        match self.vertices() {
            [] => None,
            [single] => Some(single.distance(coord)),
            _ => self
                .segments()
                .map(|s| s.distance_to_point_sq(coord))
                .min_by(f64::total_cmp)
                .map(f64::sqrt),
        }
    }

    /// Point located at the given distance along the curve from its start. Distance is clamped to `[0, length]`.
    fn point_at(&self, distance: f64) -> Result<Point> {
        let vertices = self.vertices();
        let first = vertices.first().ok_or(GeometryError::EmptyGeometry)?;
        if distance <= 0.0 {
            return Ok((*first).into());
        }

        let mut remaining = distance;
        for segment in self.segments() {
            let length = segment.length();
            if remaining <= length && length > 0.0 {
                return Ok(segment.0.lerp(segment.1, remaining / length).into());
            }
            remaining -= length;
        }

        self.end_point()
    }

    /// Bounding box of the vertices.
    fn vertices_bounding_box(&self) -> Option<crate::BoundingBox> {
        crate::BoundingBox::from_coords(self.vertices().iter())
    }
}
