//! imaging::errors — error types for the image filter pipeline.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for image validation and
//! filtering, together with a conversion layer to Python exceptions for
//! PyO3-based bindings. Failures here are structural: an image with no
//! pixels or with a channel count the pipeline does not understand.
//!
//! Key behaviors
//! -------------
//! - Define [`ImageResult`] and [`ImageError`] as the canonical result and
//!   error types for this subtree.
//! - Implement `From<ImageError> for PyErr` to map Rust-side failures into
//!   `ValueError` values visible to Python callers.
//!
//! Conventions
//! -----------
//! - Variants carry the offending dimension so messages can report the
//!   actual shape received.
//! - Error messages are phrased as input constraints ("color images must
//!   have exactly 3 channels") rather than pipeline internals.
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` formatting and payload embedding; emission
//!   sites are covered by the filter tests.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type ImageResult<T> = Result<T, ImageError>;

/// ImageError — failure conditions for image processing.
///
/// Variants
/// --------
/// - `EmptySpatialDim { rows: usize, cols: usize }`
///   The image has zero height or zero width; every filter requires at
///   least one pixel in each spatial dimension.
/// - `UnsupportedChannels(usize)`
///   A 3-dimensional input does not carry exactly 3 channels in its last
///   axis; only RGB color images are supported alongside grayscale.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`]; all
///   variants map to `ValueError` at the Python boundary with the `Display`
///   message preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// One of the spatial dimensions is zero.
    EmptySpatialDim { rows: usize, cols: usize },

    /// The channel axis does not hold exactly 3 channels.
    UnsupportedChannels(usize),
}

impl std::error::Error for ImageError {}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::EmptySpatialDim { rows, cols } => {
                write!(f, "Image must have at least one pixel in each spatial dimension; got {rows} x {cols}.")
            }
            ImageError::UnsupportedChannels(channels) => {
                write!(f, "Color images must have exactly 3 channels in the last axis; got {channels}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ImageError> for PyErr {
    fn from(err: ImageError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
