//! rust_numerics — numeric utilities with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the numeric routines to Python via the `_rust_numerics` extension
//! module. The crate collects four independent utilities: Fibonacci sequence
//! generation, descriptive statistics over flat and labeled data, pendulum
//! ODE simulation, and a fixed image filter pipeline.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`sequence`, `statistics`, `simulation`,
//!   `imaging`) as the public crate surface.
//! - Define the `#[pyfunction]` wrappers (`fibonacci_sequence`,
//!   `analyze_data`, `solve_pendulum_ode`, `image_processing`) and the
//!   `#[pymodule]` initializer for the `_rust_numerics` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Each core module owns its error enum and implements
//!   `From<...> for PyErr`, so the wrappers propagate failures with `?` and
//!   Python callers receive `ValueError` with the Rust `Display` message.
//! - Array results cross the boundary as NumPy arrays; scalar bundles cross
//!   as plain dicts keyed by statistic name.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_numerics` module defined
//!   here; external users interact with either the safe Rust APIs or the
//!   Python functions.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the crate-level integration test; Python smoke tests exercise the
//!   `_rust_numerics` module end to end.

pub mod imaging;
pub mod sequence;
pub mod simulation;
pub mod statistics;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyDict};

#[cfg(feature = "python-bindings")]
use crate::{
    imaging::{ImageData, ProcessedImage},
    sequence::fibonacci,
    simulation::{
        PendulumParams, SolverOptions, Trajectory, DEFAULT_GRAVITY, DEFAULT_LENGTH,
        DEFAULT_THETA0, DEFAULT_T_SPAN,
    },
    statistics::{Histogram, StatsSummary},
    utils::{extract_data_source, extract_image},
};

/// First `n` Fibonacci numbers as a Python list.
///
/// Raises `ValueError` when `n` is zero or the sequence leaves the `u64`
/// range (first overflowing index: 94).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(n, /)")]
fn fibonacci_sequence(n: usize) -> PyResult<Vec<u64>> {
    Ok(fibonacci(n)?)
}

/// Descriptive statistics and a histogram for a flat array or one column of
/// a dict of columns.
///
/// `data` is a 1-D float64 array-like, or a dict mapping column names to
/// equal-length 1-D arrays; for dicts, `column` selects the series to
/// analyze and is mandatory. Returns a dict with `mean`, `median`, `std`
/// (population), `min`, `max`, `histogram_counts`, and `bin_edges`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (data, column = None, bins = 10),
    text_signature = "(data, /, column=None, bins=10)"
)]
fn analyze_data<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, column: Option<&str>, bins: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let source = extract_data_source(py, data, column)?;
    let summary = StatsSummary::analyze(&source)?;
    let histogram = Histogram::compute(&source, bins)?;

    let out = PyDict::new(py);
    out.set_item("mean", summary.mean)?;
    out.set_item("median", summary.median)?;
    out.set_item("std", summary.std)?;
    out.set_item("min", summary.min)?;
    out.set_item("max", summary.max)?;
    out.set_item("histogram_counts", histogram.counts)?;
    out.set_item("bin_edges", histogram.edges.into_pyarray(py))?;
    Ok(out)
}

/// Simulate a pendulum and return `(times, states)` NumPy arrays.
///
/// `times` has 500 evenly spaced entries spanning `t_span`; `states` is the
/// matching `(500, 2)` matrix with θ in column 0 and ω in column 1. Raises
/// `ValueError` for non-finite parameters, `L <= 0`, a reversed span, or
/// integrator failure.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[allow(non_snake_case)]
#[pyo3(
    signature = (
        theta0 = DEFAULT_THETA0,
        omega0 = 0.0,
        t_span = DEFAULT_T_SPAN,
        g = DEFAULT_GRAVITY,
        L = DEFAULT_LENGTH,
    ),
    text_signature = "(theta0=0.7853981633974483, omega0=0.0, t_span=(0.0, 10.0), g=9.8, \
                      L=1.0)"
)]
fn solve_pendulum_ode<'py>(
    py: Python<'py>, theta0: f64, omega0: f64, t_span: (f64, f64), g: f64, L: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray2<f64>>)> {
    let params = PendulumParams::new(theta0, omega0, t_span, g, L)?;
    let trajectory = Trajectory::simulate(&params, &SolverOptions::default())?;

    let times = trajectory.times().to_owned().into_pyarray(py);
    let states = trajectory.states().clone().into_pyarray(py);
    Ok((times, states))
}

/// Run the image filter pipeline on a 2-D or 3-D float64 array.
///
/// Returns a dict with `grayscale` (2-D), `blurred` (same shape as the
/// input), and `edges` (2-D Sobel magnitude). Raises `ValueError` for empty
/// spatial dimensions or a channel count other than 3.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(image, /)")]
fn image_processing<'py>(
    py: Python<'py>, image: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyDict>> {
    let input = extract_image(image)?;
    let processed = ProcessedImage::process(&input)?;

    let out = PyDict::new(py);
    out.set_item("grayscale", processed.grayscale.into_pyarray(py))?;
    match processed.blurred {
        ImageData::Gray(plane) => out.set_item("blurred", plane.into_pyarray(py))?,
        ImageData::Rgb(cube) => out.set_item("blurred", cube.into_pyarray(py))?,
    }
    out.set_item("edges", processed.edges.into_pyarray(py))?;
    Ok(out)
}

/// _rust_numerics — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_numerics` Python module and register the four numeric
/// entry points on it.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_rust_numerics`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_numerics<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fibonacci_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_data, m)?)?;
    m.add_function(wrap_pyfunction!(solve_pendulum_ode, m)?)?;
    m.add_function(wrap_pyfunction!(image_processing, m)?)?;
    Ok(())
}
