use std::fmt::{Display, Formatter};

use crate::{Coord, LinearRing, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle.
///
/// The corners are public and can be modified in place. Constructors keep `min` component-wise less or equal to
/// `max`, and callers that assign the corners directly are expected to maintain this.
///
/// An empty geometry has no bounding box, so functions returning bounding boxes of geometries return
/// `Option<BoundingBox>`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Lower-left corner.
    pub min: Coord,
    /// Upper-right corner.
    pub max: Coord,
}

impl BoundingBox {
    /// Creates a new bounding box. If the corners are given in the wrong order they are swapped.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self::from_corners(Coord::new(x_min, y_min), Coord::new(x_max, y_max))
    }

    /// Creates a bounding box from two opposite corners in any order.
    pub fn from_corners(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Bounding box of a single coordinate (zero width and height).
    pub fn from_coord(coord: Coord) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Smallest bounding box containing all the coordinates. Returns `None` if the iterator is empty.
    pub fn from_coords<'a>(mut coords: impl Iterator<Item = &'a Coord>) -> Option<Self> {
        let first = coords.next()?;
        let mut bbox = Self::from_coord(*first);

        for c in coords {
            if bbox.min.x > c.x {
                bbox.min.x = c.x;
            }
            if bbox.min.y > c.y {
                bbox.min.y = c.y;
            }
            if bbox.max.x < c.x {
                bbox.max.x = c.x;
            }
            if bbox.max.y < c.y {
                bbox.max.y = c.y;
            }
        }

        Some(bbox)
    }

    /// Joins all the boxes into one. Returns `None` if there are no boxes.
    pub fn join_all(boxes: impl IntoIterator<Item = BoundingBox>) -> Option<Self> {
        boxes.into_iter().reduce(|acc, b| acc.join(&b))
    }

    /// Left boundary.
    pub fn x_min(&self) -> f64 {
        self.min.x
    }

    /// Bottom boundary.
    pub fn y_min(&self) -> f64 {
        self.min.y
    }

    /// Right boundary.
    pub fn x_max(&self) -> f64 {
        self.max.x
    }

    /// Top boundary.
    pub fn y_max(&self) -> f64 {
        self.max.y
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Area of the box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center of the box.
    pub fn centroid(&self) -> Coord {
        Coord::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Smallest box containing both `self` and `other`.
    pub fn join(&self, other: &BoundingBox) -> BoundingBox {
        Self {
            min: Coord::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Coord::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Expands every side of the box by `amount`. Negative values shrink the box.
    pub fn grow(&self, amount: f64) -> BoundingBox {
        self.grow_xy(amount, amount)
    }

    /// Expands left and right sides by `dx` and top and bottom sides by `dy`.
    pub fn grow_xy(&self, dx: f64, dy: f64) -> BoundingBox {
        Self {
            min: Coord::new(self.min.x - dx, self.min.y - dy),
            max: Coord::new(self.max.x + dx, self.max.y + dy),
        }
    }

    /// Returns true if the coordinate is inside the box or on its boundary.
    pub fn contains(&self, coord: &Coord) -> bool {
        self.min.x <= coord.x
            && self.max.x >= coord.x
            && self.min.y <= coord.y
            && self.max.y >= coord.y
    }

    /// Returns true if the `other` box is completely inside this one.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }

    /// Returns true if the boxes have at least one common point.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(other.min.x > self.max.x
            || other.max.x < self.min.x
            || other.min.y > self.max.y
            || other.max.y < self.min.y)
    }

    /// Distance from the coordinate to the nearest point of the box. Zero if the coordinate is inside.
    pub fn distance(&self, coord: &Coord) -> f64 {
        let dx = (self.min.x - coord.x).max(0.0).max(coord.x - self.max.x);
        let dy = (self.min.y - coord.y).max(0.0).max(coord.y - self.max.y);

        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the box translated by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> BoundingBox {
        Self {
            min: self.min.offset(dx, dy),
            max: self.max.offset(dx, dy),
        }
    }

    /// Closed ring around the box: `min, (max.x, min.y), max, (min.x, max.y), min`.
    pub fn to_ring(&self) -> LinearRing {
        LinearRing::new(vec![
            self.min,
            Coord::new(self.max.x, self.min.y),
            self.max,
            Coord::new(self.min.x, self.max.y),
            self.min,
        ])
    }

    /// Polygon with the box outline as its exterior ring and no holes.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.to_ring())
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curve;

    #[test]
    fn new_swaps_corners() {
        let bbox = BoundingBox::new(5.0, 1.0, -5.0, -1.0);
        assert_eq!(bbox.min, Coord::new(-5.0, -1.0));
        assert_eq!(bbox.max, Coord::new(5.0, 1.0));
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 2.0);
    }

    #[test]
    fn from_coords() {
        let coords = [
            Coord::new(1.0, 5.0),
            Coord::new(-1.0, 2.0),
            Coord::new(3.0, 0.0),
        ];
        assert_eq!(
            BoundingBox::from_coords(coords.iter()),
            Some(BoundingBox::new(-1.0, 0.0, 3.0, 5.0))
        );
        assert_eq!(BoundingBox::from_coords(std::iter::empty()), None);
    }

    #[test]
    fn join() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::new(2.0, -1.0, 3.0, 0.5);
        assert_eq!(a.join(&b), BoundingBox::new(0.0, -1.0, 3.0, 1.0));
        assert_eq!(BoundingBox::join_all([a, b]), Some(a.join(&b)));
        assert_eq!(BoundingBox::join_all(std::iter::empty()), None);
    }

    #[test]
    fn grow() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).grow(1.0);
        assert_eq!(bbox, BoundingBox::new(-1.0, -1.0, 2.0, 2.0));
    }

    #[test]
    fn contains_is_closed() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(bbox.contains(&Coord::new(0.0, 0.0)));
        assert!(bbox.contains(&Coord::new(1.0, 0.5)));
        assert!(bbox.contains(&Coord::new(0.5, 0.5)));
        assert!(!bbox.contains(&Coord::new(1.1, 0.5)));
        assert!(bbox.contains_box(&BoundingBox::new(0.2, 0.2, 0.8, 1.0)));
        assert!(!bbox.contains_box(&BoundingBox::new(0.2, 0.2, 0.8, 1.1)));
    }

    #[test]
    fn intersects() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(bbox.intersects(&BoundingBox::new(1.0, 1.0, 2.0, 2.0)));
        assert!(bbox.intersects(&BoundingBox::new(-1.0, -1.0, 2.0, 2.0)));
        assert!(!bbox.intersects(&BoundingBox::new(1.5, 0.0, 2.0, 1.0)));
    }

    #[test]
    fn distance() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(bbox.distance(&Coord::new(0.5, 0.5)), 0.0);
        assert_eq!(bbox.distance(&Coord::new(3.0, 0.5)), 2.0);
        assert_eq!(bbox.distance(&Coord::new(0.5, -2.0)), 2.0);
        assert_eq!(bbox.distance(&Coord::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn centroid() {
        assert_eq!(
            BoundingBox::new(0.0, 0.0, 2.0, 4.0).centroid(),
            Coord::new(1.0, 2.0)
        );
    }

    #[test]
    fn envelope_ring_is_closed() {
        let ring = BoundingBox::new(0.0, 0.0, 2.0, 1.0).to_ring();
        assert_eq!(ring.num_vertices(), 5);
        assert!(ring.is_closed());
        assert_eq!(
            ring.vertices(),
            &[
                Coord::new(0.0, 0.0),
                Coord::new(2.0, 0.0),
                Coord::new(2.0, 1.0),
                Coord::new(0.0, 1.0),
                Coord::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            BoundingBox::new(0.0, 1.5, 2.0, 3.0).to_string(),
            "0 1.5, 2 3"
        );
    }
}
