//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A coordinate, radius or Z ordinate was read from a geometry in the empty state.
    #[error("geometry is empty")]
    EmptyGeometry,
    /// Input value cannot be used to construct or modify the geometry.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Indexed ordinate access outside of the geometry dimensions.
    #[error("ordinate index {index} is out of range for {dimensions} ordinates")]
    OrdinateOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of ordinates the geometry has.
        dimensions: usize,
    },
    /// Operation has no meaning for the given input.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    /// Operation is not supported by the geometry type.
    #[error("not supported: {0}")]
    Unsupported(&'static str),
    /// Error from the well-known text/binary codec.
    #[cfg(feature = "geozero")]
    #[error("codec error: {0}")]
    Codec(#[from] geozero::error::GeozeroError),
}

/// Result alias with [`GeometryError`] as the error type.
pub type Result<T> = std::result::Result<T, GeometryError>;
