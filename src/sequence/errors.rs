//! sequence::errors — error types for bounded sequence generation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the sequence-generation
//! routines, together with a conversion layer to Python exceptions for
//! PyO3-based bindings. Validation failures are reported as values rather
//! than panics so callers can recover by choosing different inputs.
//!
//! Key behaviors
//! -------------
//! - Define [`SequenceResult`] and [`SequenceError`] as the canonical result
//!   and error types for sequence generation.
//! - Attach human-readable `Display` messages to each variant so diagnostics
//!   are meaningful without additional context.
//! - Implement `From<SequenceError> for PyErr` to map Rust-side failures into
//!   `ValueError` instances visible to Python callers.
//!
//! Conventions
//! -----------
//! - Error messages are phrased as domain constraints ("n must be a positive
//!   integer") rather than implementation details.
//! - Variants carry just enough payload (e.g., the offending term index) to
//!   support logging and debugging without embedding large structures.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages are non-empty and embed their
//!   payloads; the PyO3 conversion is exercised by Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type SequenceResult<T> = Result<T, SequenceError>;

/// SequenceError — failure conditions for sequence generation.
///
/// Variants
/// --------
/// - `ZeroLength`
///   The requested term count is zero; at least one term must be generated.
/// - `TermOverflow { index: usize }`
///   The term at `index` does not fit in the 64-bit unsigned representation
///   used for sequence elements (the first Fibonacci overflow occurs at
///   index 94).
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for idiomatic
///   `?`-based propagation.
/// - At the Python boundary both variants surface as `ValueError` with the
///   `Display` message preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    // ---- Input validation ----
    /// Requested term count is zero.
    ZeroLength,

    // ---- Representation limits ----
    /// A term exceeds the range of `u64`.
    TermOverflow { index: usize },
}

impl std::error::Error for SequenceError {}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceError::ZeroLength => {
                write!(f, "n must be a positive integer; got 0.")
            }
            SequenceError::TermOverflow { index } => {
                write!(f, "Sequence term at index {index} exceeds the u64 range.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SequenceError> for PyErr {
    fn from(err: SequenceError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
