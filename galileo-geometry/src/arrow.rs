//! Line with an arrowhead, see [`ArrowLineString`].

use crate::error::{GeometryError, Result};
use crate::{
    BoundingBox, Coord, Geometry, GeometryType, LineString, MultiLineString, Point, Transform,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of the arrowhead.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrowOptions {
    angle: f64,
    arrow_length: f64,
    position: f64,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            angle: Self::DEFAULT_ANGLE,
            arrow_length: Self::DEFAULT_LENGTH,
            position: Self::DEFAULT_POSITION,
        }
    }
}

impl ArrowOptions {
    /// Default angle between the shaft and a side of the arrowhead, in degrees.
    pub const DEFAULT_ANGLE: f64 = 30.0;
    /// Default length of the arrowhead sides.
    pub const DEFAULT_LENGTH: f64 = 1.0;
    /// Default position of the arrowhead: at the end of the shaft.
    pub const DEFAULT_POSITION: f64 = 1.0;

    /// Sets the angle between the shaft and each side of the arrowhead, in degrees.
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    /// Sets the length of the arrowhead sides.
    pub fn with_arrow_length(mut self, length: f64) -> Self {
        self.arrow_length = length;
        self
    }

    /// Sets the position of the arrowhead along the shaft: `0.0` is the start point, `1.0` is the end point.
    ///
    /// The value is validated when the arrow is constructed.
    pub fn with_position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }

    /// Angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Length of the arrowhead sides.
    pub fn arrow_length(&self) -> f64 {
        self.arrow_length
    }

    /// Position of the arrowhead along the shaft.
    pub fn position(&self) -> f64 {
        self.position
    }

    fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.position) {
            Ok(())
        } else {
            Err(GeometryError::InvalidArgument(format!(
                "arrow position must be in [0, 1], got {}",
                self.position
            )))
        }
    }
}

/// Straight line from a start to an end point with an arrowhead placed somewhere along it.
///
/// The arrow consists of three line strings: the shaft from start to end, and two sides of the arrowhead, each going
/// from the arrowhead point to one of the extremities. The sides are derived from the shaft and [`ArrowOptions`] and are
/// recomputed every time the arrow changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrowLineString {
    start: Coord,
    end: Coord,
    options: ArrowOptions,
    head: Coord,
    extremities: [Coord; 2],
    lines: MultiLineString,
}

impl ArrowLineString {
    /// Creates a new arrow. Fails if either point is empty or the arrowhead position is out of `[0, 1]`.
    pub fn new(start: &Point, end: &Point, options: ArrowOptions) -> Result<Self> {
        Self::from_coords(start.coord()?, end.coord()?, options)
    }

    /// Creates an arrow with default [`ArrowOptions`].
    pub fn with_default_options(start: &Point, end: &Point) -> Result<Self> {
        Self::new(start, end, ArrowOptions::default())
    }

    fn from_coords(start: Coord, end: Coord, options: ArrowOptions) -> Result<Self> {
        options.validate()?;

        let head = start.lerp(&end, options.position);
        let extremities = arrow_extremities(&start, &end, &head, &options);
        let lines = MultiLineString::new(vec![
            LineString::new(vec![start, end]),
            LineString::new(vec![head, extremities[0]]),
            LineString::new(vec![head, extremities[1]]),
        ]);

        Ok(Self {
            start,
            end,
            options,
            head,
            extremities,
            lines,
        })
    }

    /// Start point of the shaft.
    pub fn start_point(&self) -> Point {
        self.start.into()
    }

    /// End point of the shaft.
    pub fn end_point(&self) -> Point {
        self.end.into()
    }

    /// Angle between the shaft and the arrowhead sides, in degrees.
    pub fn angle(&self) -> f64 {
        self.options.angle
    }

    /// Length of the arrowhead sides.
    pub fn arrow_length(&self) -> f64 {
        self.options.arrow_length
    }

    /// Position of the arrowhead along the shaft, in `[0, 1]`.
    pub fn position(&self) -> f64 {
        self.options.position
    }

    /// Construction parameters.
    pub fn options(&self) -> ArrowOptions {
        self.options
    }

    /// Point of the arrowhead on the shaft.
    pub fn arrow_head(&self) -> Point {
        self.head.into()
    }

    /// Free ends of the two arrowhead sides.
    pub fn arrow_extremities(&self) -> [Point; 2] {
        self.extremities.map(Point::from)
    }

    /// The shaft.
    pub fn shaft(&self) -> Option<&LineString> {
        self.lines.get(0)
    }

    /// The shaft followed by the two arrowhead sides.
    pub fn lines(&self) -> &MultiLineString {
        &self.lines
    }

    /// Consumes the arrow returning its lines.
    pub fn into_multi_line_string(self) -> MultiLineString {
        self.lines
    }

    /// Moves the start point. Fails if the point is empty.
    pub fn set_start_point(&mut self, start: &Point) -> Result<()> {
        *self = Self::from_coords(start.coord()?, self.end, self.options)?;
        Ok(())
    }

    /// Moves the end point. Fails if the point is empty.
    pub fn set_end_point(&mut self, end: &Point) -> Result<()> {
        *self = Self::from_coords(self.start, end.coord()?, self.options)?;
        Ok(())
    }

    /// Replaces the arrowhead parameters. Fails if the position is out of `[0, 1]`; the arrow is unchanged then.
    pub fn set_options(&mut self, options: ArrowOptions) -> Result<()> {
        *self = Self::from_coords(self.start, self.end, options)?;
        Ok(())
    }

    /// Changes the arrowhead angle.
    pub fn set_angle(&mut self, degrees: f64) -> Result<()> {
        self.set_options(self.options.with_angle(degrees))
    }

    /// Changes the length of the arrowhead sides.
    pub fn set_arrow_length(&mut self, length: f64) -> Result<()> {
        self.set_options(self.options.with_arrow_length(length))
    }

    /// Moves the arrowhead along the shaft.
    pub fn set_position(&mut self, position: f64) -> Result<()> {
        self.set_options(self.options.with_position(position))
    }
}

fn arrow_extremities(
    start: &Coord,
    end: &Coord,
    head: &Coord,
    options: &ArrowOptions,
) -> [Coord; 2] {
    let dx = start.x - end.x;
    let dy = start.y - end.y;

    let slope = if dx == 0.0 { f64::INFINITY } else { dy / dx };

    // sides point back towards the start point
    let orientation = if dx != 0.0 {
        dx.signum()
    } else if dy != 0.0 {
        dy.signum()
    } else {
        log::warn!(
            "Arrow start and end points coincide at {start:?}, arrowhead direction is undefined"
        );
        1.0
    };

    let direction = slope.atan();
    let angle = options.angle.to_radians();
    let length = orientation * options.arrow_length;

    [direction - angle, direction + angle]
        .map(|a| Coord::new(head.x + length * a.cos(), head.y + length * a.sin()))
}

impl From<ArrowLineString> for MultiLineString {
    fn from(value: ArrowLineString) -> Self {
        value.into_multi_line_string()
    }
}

impl Geometry for ArrowLineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::ArrowLineString
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_coords(
            [self.start, self.end, self.extremities[0], self.extremities[1]].iter(),
        )
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        self.lines.distance(point)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        self.lines.contains(point)
    }
}

impl Transform for ArrowLineString {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        let center = center.coord()?;
        Self::from_coords(
            self.start.rotate(degrees, &center),
            self.end.rotate(degrees, &center),
            self.options,
        )
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Self::from_coords(
            self.start.offset(dx, dy),
            self.end.offset(dx, dy),
            self.options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curve;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn arrow() -> ArrowLineString {
        ArrowLineString::new(
            &Point::new(0.0, 0.0),
            &Point::new(10.0, 0.0),
            ArrowOptions::default()
                .with_angle(45.0)
                .with_arrow_length(2.0)
                .with_position(1.0),
        )
        .unwrap()
    }

    fn assert_coord(actual: Point, x: f64, y: f64) {
        assert_abs_diff_eq!(actual.x().unwrap(), x, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.y().unwrap(), y, epsilon = 1e-9);
    }

    #[test]
    fn horizontal_arrow() {
        let arrow = arrow();
        assert_eq!(arrow.arrow_head(), Point::new(10.0, 0.0));
        assert_eq!(arrow.lines().num_lines(), 3);

        let half = 2.0_f64.sqrt();
        let [a, b] = arrow.arrow_extremities();
        assert_coord(a, 10.0 - half, half);
        assert_coord(b, 10.0 - half, -half);
    }

    #[test]
    fn lines_layout() {
        let arrow = arrow();
        let lines = arrow.lines();
        assert_eq!(
            lines.get(0).unwrap().vertices(),
            &[Coord::new(0.0, 0.0), Coord::new(10.0, 0.0)]
        );
        for side in &lines.lines()[1..] {
            assert_eq!(side.start_point().unwrap(), arrow.arrow_head());
            assert_abs_diff_eq!(side.length(), 2.0, epsilon = 1e-9);
        }
        assert_eq!(arrow.shaft(), lines.get(0));
    }

    #[test]
    fn leftwards_arrow() {
        let arrow = ArrowLineString::new(
            &Point::new(10.0, 0.0),
            &Point::new(0.0, 0.0),
            ArrowOptions::default().with_angle(45.0).with_arrow_length(2.0),
        )
        .unwrap();

        let half = 2.0_f64.sqrt();
        let [a, b] = arrow.arrow_extremities();
        assert_coord(a, half, -half);
        assert_coord(b, half, half);
    }

    #[test]
    fn vertical_arrow() {
        let up = ArrowLineString::new(
            &Point::new(0.0, 0.0),
            &Point::new(0.0, 10.0),
            ArrowOptions::default().with_angle(45.0),
        )
        .unwrap();
        let half = 0.5_f64.sqrt();
        let [a, b] = up.arrow_extremities();
        assert_coord(a, -half, 10.0 - half);
        assert_coord(b, half, 10.0 - half);

        let down = ArrowLineString::new(
            &Point::new(0.0, 10.0),
            &Point::new(0.0, 0.0),
            ArrowOptions::default().with_angle(0.0),
        )
        .unwrap();
        let [a, b] = down.arrow_extremities();
        assert_coord(a, 0.0, 1.0);
        assert_coord(b, 0.0, 1.0);
    }

    #[test]
    fn coincident_points() {
        let arrow =
            ArrowLineString::with_default_options(&Point::new(1.0, 1.0), &Point::new(1.0, 1.0))
            .unwrap();
        let [a, _] = arrow.arrow_extremities();
        assert!(a.x().unwrap().is_finite());
        assert!(a.y().unwrap().is_finite());
    }

    #[test]
    fn arrow_head_position() {
        let mut arrow = arrow();
        arrow.set_position(0.5).unwrap();
        assert_eq!(arrow.arrow_head(), Point::new(5.0, 0.0));
        arrow.set_position(0.0).unwrap();
        assert_eq!(arrow.arrow_head(), Point::new(0.0, 0.0));

        assert_matches!(
            arrow.set_position(1.5),
            Err(GeometryError::InvalidArgument(_))
        );
        assert_eq!(arrow.position(), 0.0);
        assert_matches!(
            ArrowLineString::new(
                &Point::new(0.0, 0.0),
                &Point::new(1.0, 0.0),
                ArrowOptions::default().with_position(-0.1)
            ),
            Err(GeometryError::InvalidArgument(_))
        );
    }

    #[test]
    fn empty_points_are_rejected() {
        assert_matches!(
            ArrowLineString::with_default_options(&Point::empty(), &Point::new(1.0, 0.0)),
            Err(GeometryError::EmptyGeometry)
        );
        let original = arrow();
        let mut changed = original.clone();
        assert!(changed.set_end_point(&Point::empty()).is_err());
        assert_eq!(changed, original);
    }

    #[test]
    fn setters_recompute_sides() {
        let mut arrow = arrow();
        arrow.set_end_point(&Point::new(20.0, 0.0)).unwrap();
        assert_eq!(arrow.arrow_head(), Point::new(20.0, 0.0));
        assert_eq!(arrow.lines().get(1).unwrap().start_point().unwrap(), Point::new(20.0, 0.0));

        arrow.set_arrow_length(4.0).unwrap();
        assert_abs_diff_eq!(arrow.lines().get(2).unwrap().length(), 4.0, epsilon = 1e-9);
        assert_eq!(arrow.arrow_length(), 4.0);
        arrow.set_angle(30.0).unwrap();
        assert_eq!(arrow.angle(), 30.0);
    }

    #[test]
    fn bounding_box_includes_extremities() {
        let bbox = arrow().bounding_box().unwrap();
        let half = 2.0_f64.sqrt();
        assert_eq!(bbox.min.x, 0.0);
        assert_eq!(bbox.max.x, 10.0);
        assert_abs_diff_eq!(bbox.min.y, -half, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.max.y, half, epsilon = 1e-9);
    }

    #[test]
    fn distance_and_contains() {
        let arrow = arrow();
        assert_abs_diff_eq!(arrow.distance(&Point::new(5.0, 3.0)).unwrap(), 3.0, epsilon = 1e-12);
        assert!(arrow.contains(&Point::new(5.0, 0.0)).unwrap());
        assert!(!arrow.contains(&Point::new(5.0, 1.0)).unwrap());
    }

    #[test]
    fn transform() {
        let arrow = arrow();
        let moved = arrow.offset(0.0, 5.0).unwrap();
        assert_eq!(moved.arrow_head(), Point::new(10.0, 5.0));

        let rotated = arrow.rotate(-90.0, &Point::new(0.0, 0.0)).unwrap();
        assert_coord(rotated.end_point(), 0.0, 10.0);
        let [a, b] = rotated.arrow_extremities();
        let half = 2.0_f64.sqrt();
        assert_coord(a, -half, 10.0 - half);
        assert_coord(b, half, 10.0 - half);
    }
}
