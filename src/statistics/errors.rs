//! statistics::errors — error types for descriptive statistics.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the summary-statistics
//! and histogram routines, together with a conversion layer to Python
//! exceptions for PyO3-based bindings. Failures cover malformed tables,
//! missing columns, degenerate series, and invalid binning requests.
//!
//! Key behaviors
//! -------------
//! - Define [`StatsResult`] and [`StatsError`] as the canonical result and
//!   error types for this subtree.
//! - Attach human-readable `Display` messages to each variant so diagnostics
//!   and logs are meaningful without additional context.
//! - Implement `From<StatsError> for PyErr` to map Rust-side failures into
//!   `ValueError` values visible to Python callers.
//!
//! Conventions
//! -----------
//! - Error messages are phrased as domain constraints ("column must be
//!   specified", "series must not be empty") rather than low-level details.
//! - Variants carry offending names, indices, or values but never embed the
//!   data itself.
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` formatting and payload embedding; the PyO3
//!   conversion path is exercised by Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type StatsResult<T> = Result<T, StatsError>;

/// StatsError — failure conditions for descriptive statistics.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The working vector contains no observations, so the summary statistics
///   are undefined.
/// - `NonFiniteData { index: usize, value: f64 }`
///   An observation is NaN or ±∞ and cannot participate in the statistics.
/// - `UnknownColumn(name: String)`
///   The selected column does not exist in the table.
/// - `ColumnLengthMismatch { name: String, expected: usize, actual: usize }`
///   A column being added to a table does not match the established length.
/// - `DuplicateColumn(name: String)`
///   A column with the same name already exists in the table.
/// - `ZeroBins`
///   A histogram was requested with zero bins.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for idiomatic
///   `?`-based propagation; all variants map to `ValueError` at the Python
///   boundary with the `Display` message preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    // ---- Series validation ----
    /// Working vector is empty.
    EmptySeries,

    /// An observation is NaN or ±∞.
    NonFiniteData { index: usize, value: f64 },

    // ---- Table construction / lookup ----
    /// Selected column does not exist.
    UnknownColumn(String),

    /// Column length does not match the table.
    ColumnLengthMismatch { name: String, expected: usize, actual: usize },

    /// Column name already present.
    DuplicateColumn(String),

    // ---- Histogram options ----
    /// Histogram bin count is zero.
    ZeroBins,
}

impl std::error::Error for StatsError {}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::EmptySeries => {
                write!(f, "Series must not be empty; summary statistics are undefined.")
            }
            StatsError::NonFiniteData { index, value } => {
                write!(f, "Observation at index {index} is non-finite: {value}")
            }
            StatsError::UnknownColumn(name) => {
                write!(f, "Column {name:?} does not exist in the table.")
            }
            StatsError::ColumnLengthMismatch { name, expected, actual } => {
                write!(
                    f,
                    "Column {name:?} has length {actual}; expected {expected} to match the table."
                )
            }
            StatsError::DuplicateColumn(name) => {
                write!(f, "Column {name:?} already exists in the table.")
            }
            StatsError::ZeroBins => {
                write!(f, "Histogram bin count must be at least 1.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<StatsError> for PyErr {
    fn from(err: StatsError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
