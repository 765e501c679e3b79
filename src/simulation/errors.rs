//! simulation::errors — error types for ODE simulation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for pendulum simulation and the
//! underlying Runge–Kutta integrator, together with a conversion layer to
//! Python exceptions for PyO3-based bindings. Two families of failure are
//! covered: invalid configuration (parameters, tolerances) and numerical
//! failure of the integrator itself.
//!
//! Key behaviors
//! -------------
//! - Define [`SimResult`] and [`SimError`] as the canonical result and error
//!   types for this subtree.
//! - Keep configuration failures and numerical failures in one enum so a
//!   caller can match on the family it cares about; no partial trajectory
//!   ever accompanies an error.
//! - Implement `From<SimError> for PyErr` to map Rust-side failures into
//!   `ValueError` values visible to Python callers.
//!
//! Conventions
//! -----------
//! - Configuration variants name the offending field and carry its value;
//!   numerical variants carry the time or ceiling at which integration gave
//!   up.
//! - Error messages are phrased as domain constraints ("pendulum length must
//!   be finite and > 0") rather than solver internals.
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` formatting and payload embedding; the
//!   numerical variants are additionally exercised end-to-end by the
//!   integrator tests.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type SimResult<T> = Result<T, SimError>;

/// SimError — failure conditions for pendulum simulation.
///
/// Variants
/// --------
/// - `InvalidTimeSpan { start: f64, end: f64 }`
///   The time span is reversed or non-finite; `end ≥ start` is required.
/// - `NonPositiveLength { value: f64 }`
///   The pendulum length is zero, negative, or non-finite.
/// - `NonFiniteParam { name: &'static str, value: f64 }`
///   Some other scalar parameter (initial angle, initial velocity, gravity)
///   is NaN or ±∞.
/// - `InvalidTolerance { name: &'static str, value: f64 }`
///   A solver tolerance is non-finite or not strictly positive.
/// - `ZeroMaxSteps`
///   The integrator step ceiling is zero.
/// - `StepSizeUnderflow { t: f64 }`
///   The adaptive controller shrank the step below the spacing of `f64`
///   values at time `t`; the problem is too stiff for this method at the
///   requested tolerances.
/// - `MaxStepsExceeded { max_steps: usize }`
///   Integration did not reach the end of the span within the configured
///   step ceiling.
///
/// Invariants
/// ----------
/// - Configuration variants are emitted before any integration work starts;
///   numerical variants are emitted only from inside the step loop.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`]; all
///   variants map to `ValueError` at the Python boundary with the `Display`
///   message preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    // ---- Parameter validation ----
    /// Time span is reversed or non-finite.
    InvalidTimeSpan { start: f64, end: f64 },

    /// Pendulum length is not finite and strictly positive.
    NonPositiveLength { value: f64 },

    /// A scalar parameter is NaN or ±∞.
    NonFiniteParam { name: &'static str, value: f64 },

    // ---- Solver options validation ----
    /// A tolerance is non-finite or not strictly positive.
    InvalidTolerance { name: &'static str, value: f64 },

    /// The step ceiling is zero.
    ZeroMaxSteps,

    // ---- Numerical failure ----
    /// The adaptive step collapsed to the floating-point spacing.
    StepSizeUnderflow { t: f64 },

    /// The step ceiling was hit before the span was covered.
    MaxStepsExceeded { max_steps: usize },
}

impl std::error::Error for SimError {}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::InvalidTimeSpan { start, end } => {
                write!(f, "Time span must satisfy end >= start with finite bounds; got ({start}, {end}).")
            }
            SimError::NonPositiveLength { value } => {
                write!(f, "Pendulum length must be finite and > 0; got {value}.")
            }
            SimError::NonFiniteParam { name, value } => {
                write!(f, "Parameter {name} must be finite; got {value}.")
            }
            SimError::InvalidTolerance { name, value } => {
                write!(f, "Tolerance {name} must be finite and > 0; got {value}.")
            }
            SimError::ZeroMaxSteps => {
                write!(f, "max_steps must be at least 1.")
            }
            SimError::StepSizeUnderflow { t } => {
                write!(f, "Integration step underflowed at t = {t}; the problem may be too stiff for RK45 at the requested tolerances.")
            }
            SimError::MaxStepsExceeded { max_steps } => {
                write!(f, "Integration exceeded the step ceiling of {max_steps} steps before covering the time span.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SimError> for PyErr {
    fn from(err: SimError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
