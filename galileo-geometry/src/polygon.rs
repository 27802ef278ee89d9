use crate::error::{GeometryError, Result};
use crate::{BoundingBox, Coord, Curve, Geometry, GeometryType, LinearRing, Point, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Polygon geometry. Polygon consists of one exterior ring and zero or more interior rings.
///
/// Interior rings represent *holes* in the polygon. They are expected to have orientation opposite to the exterior
/// ring; this is used by [`Polygon::area`] but is not validated.
///
/// Point containment and distance only consider the exterior ring: a point inside a hole is still contained by the
/// polygon.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    exterior: LinearRing,
    interiors: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a polygon without holes.
    pub fn new(exterior: LinearRing) -> Self {
        Self {
            exterior,
            interiors: vec![],
        }
    }

    /// Creates a polygon with holes.
    pub fn with_interiors(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Exterior ring.
    pub fn exterior(&self) -> &LinearRing {
        &self.exterior
    }

    /// Mutable reference to the exterior ring.
    pub fn exterior_mut(&mut self) -> &mut LinearRing {
        &mut self.exterior
    }

    /// Interior rings (holes).
    pub fn interiors(&self) -> &[LinearRing] {
        &self.interiors
    }

    /// Number of holes.
    pub fn num_interior_rings(&self) -> usize {
        self.interiors.len()
    }

    /// Interior ring with the given index.
    pub fn interior_ring(&self, index: usize) -> Option<&LinearRing> {
        self.interiors.get(index)
    }

    /// Mutable reference to the interior ring with the given index.
    pub fn interior_ring_mut(&mut self, index: usize) -> Option<&mut LinearRing> {
        self.interiors.get_mut(index)
    }

    /// Adds a hole.
    pub fn push_interior(&mut self, ring: LinearRing) {
        self.interiors.push(ring);
    }

    /// Removes and returns the hole with the given index.
    pub fn remove_interior(&mut self, index: usize) -> Option<LinearRing> {
        (index < self.interiors.len()).then(|| self.interiors.remove(index))
    }

    /// Iterates over all rings of the polygon starting with the exterior one.
    pub fn iter_rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Area of the polygon.
    ///
    /// A hole with orientation opposite to the exterior ring reduces the area, a hole with the same orientation
    /// increases it.
    pub fn area(&self) -> f64 {
        let exterior_ccw = self.exterior.is_ccw();
        self.interiors
            .iter()
            .fold(self.exterior.area(), |area, hole| {
                if hole.is_ccw() != exterior_ccw {
                    area - hole.area()
                } else {
                    area + hole.area()
                }
            })
    }

    /// Centroid of the exterior ring surface.
    pub fn centroid(&self) -> Result<Point> {
        if let Some(c) = self.exterior.centroid() {
            return Ok(c.into());
        }

        // zero-area exterior ring
        self.bounding_box()
            .map(|b| b.centroid().into())
            .ok_or(GeometryError::EmptyGeometry)
    }

    pub(crate) fn contains_coord(&self, coord: &Coord) -> bool {
        match self.bounding_box() {
            Some(bbox) if bbox.contains(coord) => self.exterior.contains_coord(coord),
            _ => false,
        }
    }

    pub(crate) fn distance_to_coord(&self, coord: &Coord) -> Option<f64> {
        if self.contains_coord(coord) {
            return Some(0.0);
        }

        self.exterior.distance_to_coord(coord)
    }
}

impl From<LinearRing> for Polygon {
    fn from(value: LinearRing) -> Self {
        Self::new(value)
    }
}

impl From<BoundingBox> for Polygon {
    fn from(value: BoundingBox) -> Self {
        value.to_polygon()
    }
}

impl Geometry for Polygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn is_empty(&self) -> bool {
        Geometry::is_empty(&self.exterior)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.exterior.bounding_box()
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        let coord = point.coord()?;
        self.distance_to_coord(&coord)
            .ok_or(GeometryError::EmptyGeometry)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        Ok(self.contains_coord(&point.coord()?))
    }
}

impl Transform for Polygon {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Ok(Self {
            exterior: self.exterior.rotate(degrees, center)?,
            interiors: self
                .interiors
                .iter()
                .map(|r| r.rotate(degrees, center))
                .collect::<Result<_>>()?,
        })
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self {
            exterior: self.exterior.offset(dx, dy)?,
            interiors: self
                .interiors
                .iter()
                .map(|r| r.offset(dx, dy))
                .collect::<Result<_>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn ring(coords: &[(f64, f64)]) -> LinearRing {
        LinearRing::new(coords.iter().map(|&c| c.into()).collect())
    }

    fn unit_square() -> LinearRing {
        ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
    }

    fn hole() -> LinearRing {
        // clockwise, area 0.25
        ring(&[
            (0.25, 0.25),
            (0.25, 0.75),
            (0.75, 0.75),
            (0.75, 0.25),
            (0.25, 0.25),
        ])
    }

    #[test]
    fn area_without_holes() {
        assert_eq!(Polygon::new(unit_square()).area(), 1.0);
        assert_eq!(Polygon::default().area(), 0.0);
    }

    #[test]
    fn area_opposite_hole_is_subtracted() {
        let polygon = Polygon::with_interiors(unit_square(), vec![hole()]);
        assert!(polygon.exterior().is_ccw());
        assert!(!hole().is_ccw());
        assert_eq!(polygon.area(), 0.75);
    }

    #[test]
    fn area_same_orientation_hole_is_added() {
        let polygon = Polygon::with_interiors(unit_square(), vec![hole().reversed()]);
        assert_eq!(polygon.area(), 1.25);
    }

    #[test]
    fn contains_ignores_holes() {
        let polygon = Polygon::with_interiors(unit_square(), vec![hole()]);
        assert!(polygon.contains(&Point::new(0.1, 0.1)).unwrap());
        assert!(polygon.contains(&Point::new(0.5, 0.5)).unwrap());
        assert!(!polygon.contains(&Point::new(1.5, 0.5)).unwrap());
        assert!(!Polygon::default().contains(&Point::new(0.0, 0.0)).unwrap());
        assert_matches!(
            polygon.contains(&Point::empty()),
            Err(GeometryError::EmptyGeometry)
        );
    }

    #[test]
    fn distance_uses_exterior_only() {
        let polygon = Polygon::with_interiors(unit_square(), vec![hole()]);
        assert_eq!(polygon.distance(&Point::new(0.5, 0.5)).unwrap(), 0.0);
        assert_eq!(polygon.distance(&Point::new(3.0, 0.5)).unwrap(), 2.0);
        assert_eq!(polygon.distance(&Point::new(4.0, 5.0)).unwrap(), 5.0);
        assert_matches!(
            Polygon::default().distance(&Point::new(0.0, 0.0)),
            Err(GeometryError::EmptyGeometry)
        );
    }

    #[test]
    fn bounding_box() {
        let polygon = Polygon::with_interiors(unit_square(), vec![hole()]);
        assert_eq!(
            polygon.bounding_box(),
            Some(BoundingBox::new(0.0, 0.0, 1.0, 1.0))
        );
        assert_eq!(Polygon::default().bounding_box(), None);
    }

    #[test]
    fn rotate_moves_all_rings() {
        let polygon = Polygon::with_interiors(unit_square(), vec![hole()]);
        let rotated = polygon.rotate(90.0, &Point::new(0.5, 0.5)).unwrap();
        assert_eq!(rotated.num_interior_rings(), 1);
        assert_abs_diff_eq!(rotated.area(), polygon.area(), epsilon = 1e-12);

        let hole_vertex = rotated.interior_ring(0).unwrap().vertices()[0];
        assert_abs_diff_eq!(hole_vertex.x, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(hole_vertex.y, 0.75, epsilon = 1e-12);

        let bbox = rotated.bounding_box().unwrap();
        assert_abs_diff_eq!(bbox.min.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bbox.max.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn offset() {
        let polygon = Polygon::with_interiors(unit_square(), vec![hole()]);
        let moved = polygon.offset(10.0, 0.0).unwrap();
        assert_eq!(moved.area(), polygon.area());
        assert!(moved.contains(&Point::new(10.5, 0.5)).unwrap());
        assert_eq!(
            moved.interior_ring(0).unwrap().vertices()[0],
            Coord::new(10.25, 0.25)
        );
    }

    #[test]
    fn centroid() {
        let polygon = Polygon::new(ring(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (0.0, 2.0),
            (0.0, 0.0),
        ]));
        let centroid = polygon.centroid().unwrap();
        assert_abs_diff_eq!(centroid.x().unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(centroid.y().unwrap(), 1.0, epsilon = 1e-12);
        assert!(Polygon::default().centroid().is_err());
    }

    #[test]
    fn ring_access() {
        let mut polygon = Polygon::new(unit_square());
        polygon.push_interior(hole());
        assert_eq!(polygon.iter_rings().count(), 2);
        assert_eq!(polygon.remove_interior(0), Some(hole()));
        assert_eq!(polygon.remove_interior(0), None);
        polygon.exterior_mut().clear();
        assert!(Geometry::is_empty(&polygon));
    }
}
