//! imaging::filters — grayscale conversion, Gaussian blur, Sobel edges.
//!
//! Purpose
//! -------
//! Implement the three-stage image filter pipeline: luminance grayscale
//! conversion, spatial Gaussian smoothing at a fixed σ = 2, and Sobel
//! gradient-magnitude edge detection, composed into a single
//! [`ProcessedImage::process`] call over a validated [`ImageData`] input.
//!
//! Key behaviors
//! -------------
//! - Accept grayscale (`rows × cols`) and RGB (`rows × cols × 3`,
//!   channel-last) images through the [`ImageData`] tagged form; shape
//!   problems are rejected up front, never mid-pipeline.
//! - Convert RGB to grayscale with the ITU-R BT.709 luminance weights
//!   (0.2125, 0.7154, 0.0721); grayscale inputs pass through as a copy.
//! - Blur the *original* image: each channel of an RGB input is smoothed
//!   independently in the two spatial axes, so the blurred output keeps the
//!   input's variant and shape.
//! - Compute edges on the *grayscale* plane with the classic unnormalized
//!   3 × 3 Sobel kernels and report the gradient magnitude √(gx² + gy²).
//! - Handle borders by clamping sample coordinates to the nearest valid
//!   pixel (edge replication) in every convolution.
//!
//! Invariants & assumptions
//! ------------------------
//! - Pixel values are `f64` in arbitrary units; no range normalization or
//!   clipping is applied at any stage.
//! - The Gaussian kernel is truncated at radius ⌊4σ + 0.5⌋ and renormalized
//!   to unit sum, so constant images are preserved exactly up to rounding.
//! - All three outputs preserve the input's spatial dimensions.
//!
//! Conventions
//! -----------
//! - Arrays are indexed `(row, col)` with the channel axis last, matching
//!   the NumPy layout the bindings exchange.
//!
//! Downstream usage
//! ----------------
//! - Call [`ProcessedImage::process`] for the full pipeline, or the
//!   individual stages ([`to_grayscale`], [`gaussian_blur`],
//!   [`sobel_edges`]) when only one output is needed.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the luminance weights, blur mass preservation on
//!   constant images, zero Sobel response on constant planes, shape
//!   preservation across all stages, and rejection of malformed shapes.

use ndarray::{Array2, Array3, Axis};

use crate::imaging::errors::{ImageError, ImageResult};

/// ITU-R BT.709 luminance weights for R, G, B.
pub const GRAYSCALE_WEIGHTS: [f64; 3] = [0.2125, 0.7154, 0.0721];

/// Standard deviation of the pipeline's Gaussian smoothing stage.
pub const BLUR_SIGMA: f64 = 2.0;

/// ImageData — tagged image input and output form.
///
/// Purpose
/// -------
/// Distinguish grayscale and RGB images at the type level so every filter
/// can dispatch on the variant instead of inspecting array rank at each
/// call site.
///
/// Variants
/// --------
/// - `Gray(Array2<f64>)`
///   Single-plane image indexed `(row, col)`.
/// - `Rgb(Array3<f64>)`
///   Color image indexed `(row, col, channel)` with exactly 3 channels.
///
/// Invariants
/// ----------
/// - Construction does not validate; [`ImageData::validate`] is called once
///   at the pipeline boundary and filters assume a validated image.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    /// Single-plane grayscale image.
    Gray(Array2<f64>),

    /// Channel-last RGB image.
    Rgb(Array3<f64>),
}

impl ImageData {
    /// Spatial dimensions as `(rows, cols)`, ignoring any channel axis.
    pub fn spatial_dims(&self) -> (usize, usize) {
        match self {
            ImageData::Gray(plane) => plane.dim(),
            ImageData::Rgb(cube) => {
                let (rows, cols, _) = cube.dim();
                (rows, cols)
            }
        }
    }

    /// Check the structural constraints every filter relies on.
    ///
    /// Returns
    /// -------
    /// `ImageResult<()>`
    ///   `Ok(())` for a well-formed image.
    ///
    /// Errors
    /// ------
    /// - `ImageError::EmptySpatialDim` when either spatial dimension is 0.
    /// - `ImageError::UnsupportedChannels` when an RGB image does not carry
    ///   exactly 3 channels.
    pub fn validate(&self) -> ImageResult<()> {
        if let ImageData::Rgb(cube) = self {
            let channels = cube.dim().2;
            if channels != 3 {
                return Err(ImageError::UnsupportedChannels(channels));
            }
        }

        let (rows, cols) = self.spatial_dims();
        if rows == 0 || cols == 0 {
            return Err(ImageError::EmptySpatialDim { rows, cols });
        }

        Ok(())
    }
}

/// ProcessedImage — all three pipeline outputs for one input image.
///
/// Purpose
/// -------
/// Bundle the grayscale plane, the blurred image, and the edge-magnitude
/// plane produced by one [`ProcessedImage::process`] call, as an immutable
/// value object.
///
/// Fields
/// ------
/// - `grayscale`: `Array2<f64>`
///   Luminance plane; a copy of the input when it is already grayscale.
/// - `blurred`: [`ImageData`]
///   The input smoothed with a σ = 2 Gaussian; keeps the input's variant.
/// - `edges`: `Array2<f64>`
///   Sobel gradient magnitude of the grayscale plane, non-negative.
///
/// Invariants
/// ----------
/// - All three fields share the input's spatial dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    /// Luminance grayscale plane.
    pub grayscale: Array2<f64>,

    /// Gaussian-blurred image, same variant as the input.
    pub blurred: ImageData,

    /// Sobel edge magnitude of the grayscale plane.
    pub edges: Array2<f64>,
}

impl ProcessedImage {
    /// Run the full filter pipeline on one image.
    ///
    /// Parameters
    /// ----------
    /// - `image`: `&ImageData`
    ///   Grayscale or RGB input in arbitrary pixel units.
    ///
    /// Returns
    /// -------
    /// `ImageResult<ProcessedImage>`
    ///   Grayscale, blurred, and edge outputs sharing the input's spatial
    ///   dimensions.
    ///
    /// Errors
    /// ------
    /// - `ImageError::EmptySpatialDim` / `ImageError::UnsupportedChannels`
    ///   when the input shape is malformed; no stage runs in that case.
    pub fn process(image: &ImageData) -> ImageResult<Self> {
        image.validate()?;

        let grayscale = to_grayscale(image);
        let blurred = gaussian_blur(image, BLUR_SIGMA);
        let edges = sobel_edges(&grayscale);

        Ok(ProcessedImage { grayscale, blurred, edges })
    }
}

/// Convert an image to its luminance plane.
///
/// RGB inputs are reduced with [`GRAYSCALE_WEIGHTS`]; grayscale inputs are
/// returned as a copy. Assumes a validated image.
pub fn to_grayscale(image: &ImageData) -> Array2<f64> {
    match image {
        ImageData::Gray(plane) => plane.clone(),
        ImageData::Rgb(cube) => {
            let (rows, cols, _) = cube.dim();
            let mut plane = Array2::<f64>::zeros((rows, cols));
            for (channel, &weight) in GRAYSCALE_WEIGHTS.iter().enumerate() {
                plane.scaled_add(weight, &cube.index_axis(Axis(2), channel));
            }
            plane
        }
    }
}

/// Smooth an image with a truncated Gaussian of the given σ.
///
/// The kernel is separable, truncated at radius ⌊4σ + 0.5⌋, and normalized
/// to unit sum; borders replicate the nearest edge pixel. RGB channels are
/// smoothed independently. Assumes a validated image.
pub fn gaussian_blur(image: &ImageData, sigma: f64) -> ImageData {
    let kernel = gaussian_kernel(sigma);
    match image {
        ImageData::Gray(plane) => ImageData::Gray(blur_plane(plane, &kernel)),
        ImageData::Rgb(cube) => {
            let mut out = cube.clone();
            for channel in 0..cube.dim().2 {
                let blurred = blur_plane(&cube.index_axis(Axis(2), channel).to_owned(), &kernel);
                out.index_axis_mut(Axis(2), channel).assign(&blurred);
            }
            ImageData::Rgb(out)
        }
    }
}

/// Sobel gradient magnitude of a grayscale plane.
///
/// Applies the classic unnormalized 3 × 3 Sobel kernels in both spatial
/// directions with edge replication at the borders and returns
/// √(gx² + gy²) per pixel. Assumes non-empty spatial dimensions.
pub fn sobel_edges(plane: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = plane.dim();
    let mut edges = Array2::<f64>::zeros((rows, cols));

    // Classic Sobel: smoothing [1, 2, 1] across, difference [-1, 0, 1] along.
    for r in 0..rows {
        for c in 0..cols {
            let sample = |dr: isize, dc: isize| {
                let rr = clamp_index(r as isize + dr, rows);
                let cc = clamp_index(c as isize + dc, cols);
                plane[(rr, cc)]
            };

            let gx = (sample(-1, 1) + 2.0 * sample(0, 1) + sample(1, 1))
                - (sample(-1, -1) + 2.0 * sample(0, -1) + sample(1, -1));
            let gy = (sample(1, -1) + 2.0 * sample(1, 0) + sample(1, 1))
                - (sample(-1, -1) + 2.0 * sample(-1, 0) + sample(-1, 1));

            edges[(r, c)] = gx.hypot(gy);
        }
    }

    edges
}

/// Normalized 1-D Gaussian taps for one separable pass.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma + 0.5) as usize;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f64> = (-(radius as isize)..=radius as isize)
        .map(|offset| {
            let d = offset as f64;
            (-d * d / denom).exp()
        })
        .collect();

    let total: f64 = kernel.iter().sum();
    for tap in &mut kernel {
        *tap /= total;
    }
    kernel
}

/// One separable blur: horizontal pass, then vertical, with edge
/// replication at the borders.
fn blur_plane(plane: &Array2<f64>, kernel: &[f64]) -> Array2<f64> {
    let (rows, cols) = plane.dim();
    let radius = kernel.len() / 2;

    let mut horizontal = Array2::<f64>::zeros((rows, cols));
    for r in 0..rows {
        for c in 0..cols {
            let mut acc = 0.0;
            for (tap, &weight) in kernel.iter().enumerate() {
                let cc = clamp_index(c as isize + tap as isize - radius as isize, cols);
                acc += weight * plane[(r, cc)];
            }
            horizontal[(r, c)] = acc;
        }
    }

    let mut out = Array2::<f64>::zeros((rows, cols));
    for r in 0..rows {
        for c in 0..cols {
            let mut acc = 0.0;
            for (tap, &weight) in kernel.iter().enumerate() {
                let rr = clamp_index(r as isize + tap as isize - radius as isize, rows);
                acc += weight * horizontal[(rr, c)];
            }
            out[(r, c)] = acc;
        }
    }

    out
}

/// Clamp a possibly out-of-range index to `[0, len)`.
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}
