use nalgebra::{Point2, Rotation2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pair of cartesian coordinates.
///
/// Unlike [`Point`](crate::Point), a coordinate is always present. It is the storage type for vertices of curves,
/// corners of bounding boxes and so on.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Coord {
    /// Creates a new coordinate pair.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns coordinates as an array `[x, y]`.
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Squared euclidean distance to the `other` coordinate.
    pub fn distance_sq(&self, other: &Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to the `other` coordinate.
    pub fn distance(&self, other: &Coord) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Rotates the coordinate clockwise by `degrees` around the `center`.
    ///
    /// With `θ` in radians and the coordinate translated relative to the center:
    /// `x' = x·cosθ + y·sinθ`, `y' = y·cosθ − x·sinθ`.
    pub fn rotate(&self, degrees: f64, center: &Coord) -> Coord {
        let rotation = Rotation2::new(-degrees.to_radians());
        let relative = Vector2::new(self.x - center.x, self.y - center.y);
        let rotated = Point2::new(center.x, center.y) + rotation * relative;

        Coord::new(rotated.x, rotated.y)
    }

    /// Returns the coordinate translated by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Coord {
        Coord::new(self.x + dx, self.y + dy)
    }

    /// Linear interpolation between `self` (`fraction = 0`) and `other` (`fraction = 1`).
    pub fn lerp(&self, other: &Coord, fraction: f64) -> Coord {
        Coord::new(
            self.x + (other.x - self.x) * fraction,
            self.y + (other.y - self.y) * fraction,
        )
    }
}

impl From<[f64; 2]> for Coord {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance() {
        assert_eq!(Coord::new(0.0, 0.0).distance(&Coord::new(3.0, 4.0)), 5.0);
        assert_eq!(Coord::new(1.0, 1.0).distance_sq(&Coord::new(2.0, 2.0)), 2.0);
    }

    #[test]
    fn rotate_clockwise() {
        let rotated = Coord::new(1.0, 0.0).rotate(90.0, &Coord::new(0.0, 0.0));
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, -1.0, epsilon = 1e-12);

        let rotated = Coord::new(2.0, 1.0).rotate(180.0, &Coord::new(1.0, 1.0));
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_matches_matrix() {
        let c = Coord::new(3.0, -2.0);
        let theta = 37f64.to_radians();
        let expected_x = c.x * theta.cos() + c.y * theta.sin();
        let expected_y = c.y * theta.cos() - c.x * theta.sin();

        let rotated = c.rotate(37.0, &Coord::default());
        assert_abs_diff_eq!(rotated.x, expected_x, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, expected_y, epsilon = 1e-12);
    }

    #[test]
    fn lerp() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(10.0, -4.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Coord::new(5.0, -2.0));
    }
}
