use crate::Coord;

/// A straight line segment between two coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment<'a>(pub &'a Coord, pub &'a Coord);

impl Segment<'_> {
    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.0.distance(self.1)
    }

    /// Shortest euclidean distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the squared length
    ///   of the normal
    /// * if the normal from the point to the segment ends outside of the segment, the returned value is the squared
    ///   distance to the nearest of the segment's endpoints
    pub fn distance_to_point_sq(&self, point: &Coord) -> f64 {
        if self.0 == self.1 {
            return self.0.distance_sq(point);
        }

        let ds_x = self.1.x - self.0.x;
        let ds_y = self.1.y - self.0.y;
        let dp_x = point.x - self.0.x;
        let dp_y = point.y - self.0.y;
        let ds_len = ds_x * ds_x + ds_y * ds_y;

        let r = (dp_x * ds_x + dp_y * ds_y) / ds_len;
        if r <= 0.0 {
            self.0.distance_sq(point)
        } else if r >= 1.0 {
            self.1.distance_sq(point)
        } else {
            let s = (dp_y * ds_x - dp_x * ds_y) / ds_len;
            (s * s) * ds_len
        }
    }

    /// Shortest euclidean distance between a point and the segment.
    pub fn distance_to_point(&self, point: &Coord) -> f64 {
        self.distance_to_point_sq(point).sqrt()
    }
}
