//! imaging — fixed image filter pipeline over `f64` arrays.
//!
//! Purpose
//! -------
//! Collect the image-processing surface of the crate: the tagged image form
//! ([`ImageData`]) covering grayscale and RGB inputs, the three filter
//! stages (luminance grayscale, σ = 2 Gaussian blur, Sobel edge magnitude),
//! and the bundled pipeline result ([`ProcessedImage`]).
//!
//! Key behaviors
//! -------------
//! - Resolve image kind at the API boundary: an [`ImageData`] is either a
//!   single plane or a channel-last RGB cube, so filters dispatch on the
//!   variant rather than on array rank.
//! - Validate shape once in [`ImageData::validate`], then run the stages as
//!   pure functions that preserve the input's spatial dimensions.
//! - Report all failures via [`ImageError`] / [`ImageResult`]; nothing in
//!   this subtree panics on user-facing invalid input.
//!
//! Invariants & assumptions
//! ------------------------
//! - Pixel values stay in the caller's units; no normalization, clipping,
//!   or integer quantization is applied anywhere in the pipeline.
//! - Filter parameters are fixed (BT.709 weights, σ = 2, classic Sobel);
//!   the pipeline trades configurability for a stable, reproducible result.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use ndarray::Array2;
//!   use rust_numerics::imaging::{ImageData, ProcessedImage};
//!
//!   let image = ImageData::Gray(Array2::from_elem((8, 8), 0.5));
//!   let processed = ProcessedImage::process(&image)?;
//!   # Ok::<(), rust_numerics::imaging::ImageError>(())
//!   ```
//!
//! - Python bindings build an [`ImageData`] from a 2-D or 3-D NumPy array
//!   and return the three outputs as a dict; they rely on
//!   `From<ImageError> for PyErr` for error mapping.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to the filters; the crate-level integration test
//!   runs the pipeline on a synthetic RGB scene and checks edge response
//!   against the known geometry.

pub mod errors;
pub mod filters;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ImageError, ImageResult};
pub use self::filters::{
    gaussian_blur, sobel_edges, to_grayscale, ImageData, ProcessedImage, BLUR_SIGMA,
    GRAYSCALE_WEIGHTS,
};
