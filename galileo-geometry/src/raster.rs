use crate::error::{GeometryError, Result};
use crate::{BoundingBox, Geometry, GeometryType, Point, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Encoded image placed into an axis-aligned rectangle.
///
/// The crate does not interpret the image bytes. Geometric operations treat the raster as its bounding rectangle,
/// so a raster is never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Raster {
    data: Vec<u8>,
    bounding_box: BoundingBox,
}

impl Raster {
    /// Creates a new raster.
    pub fn new(data: Vec<u8>, bounding_box: BoundingBox) -> Self {
        Self { data, bounding_box }
    }

    /// Image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replaces the image bytes.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Rectangle covered by the image.
    pub fn extent(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Moves or scales the image to the given rectangle.
    pub fn set_extent(&mut self, bounding_box: BoundingBox) {
        self.bounding_box = bounding_box;
    }

    /// Consumes the raster returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Geometry for Raster {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Raster
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(self.bounding_box)
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        Ok(self.bounding_box.distance(&point.coord()?))
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        Ok(self.bounding_box.contains(&point.coord()?))
    }
}

impl Transform for Raster {
    fn rotate(&self, _degrees: f64, _center: &Point) -> Result<Self> {
        Err(GeometryError::Unsupported("raster rotation"))
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self {
            data: self.data.clone(),
            bounding_box: self.bounding_box.offset(dx, dy),
        })
    }
}
