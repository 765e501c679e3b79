//! statistics::validation — shared input guards for statistics routines.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the summary-statistics and histogram
//! routines. This avoids duplicating checks on series length and data
//! finiteness across the subtree.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on working vectors before any reduction is
//!   performed.
//! - Map invalid inputs into structured [`StatsError`] values for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Working vectors must be non-empty.
//! - All observations must be finite (no NaN, no ±∞).
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and
//!   allocates only what error construction requires.
//! - Callers are responsible for any further operation-specific checks
//!   (e.g., histogram bin counts).
//!
//! Testing notes
//! -------------
//! - Unit tests cover the success path and both error branches of
//!   [`validate_series`].

use ndarray::ArrayView1;

use crate::statistics::errors::{StatsError, StatsResult};

/// Validate basic constraints on a working vector of observations.
///
/// Parameters
/// ----------
/// - `values`: `ArrayView1<f64>`
///   The working vector extracted from a [`DataSource`](crate::statistics::DataSource).
///
/// Returns
/// -------
/// `StatsResult<()>`
///   - `Ok(())` if the vector is non-empty and every observation is finite.
///   - `Err(StatsError)` otherwise.
///
/// Errors
/// ------
/// - `StatsError::EmptySeries`
///   Returned when `values.is_empty()`.
/// - `StatsError::NonFiniteData { index, value }`
///   Returned for the first observation that is NaN or ±∞.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `StatsError`.
pub fn validate_series(values: ArrayView1<'_, f64>) -> StatsResult<()> {
    if values.is_empty() {
        return Err(StatsError::EmptySeries);
    }

    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(StatsError::NonFiniteData { index, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of a finite, non-empty vector.
    // - Rejection of an empty vector.
    // - Rejection of a vector containing a non-finite observation, with the
    //   offending index reported.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a finite, non-empty vector passes validation.
    //
    // Given
    // -----
    // - A three-element finite vector.
    //
    // Expect
    // ------
    // - `validate_series` returns `Ok(())`.
    fn validate_series_finite_vector_succeeds() {
        // Arrange
        let values = array![1.0_f64, -2.5, 3.25];

        // Act
        let result = validate_series(values.view());

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid series, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an empty vector is rejected with `StatsError::EmptySeries`.
    //
    // Given
    // -----
    // - A zero-length vector.
    //
    // Expect
    // ------
    // - `validate_series` returns `Err(StatsError::EmptySeries)`.
    fn validate_series_empty_vector_returns_empty_series() {
        // Arrange
        let values = ndarray::Array1::<f64>::zeros(0);

        // Act
        let result = validate_series(values.view());

        // Assert
        match result {
            Err(StatsError::EmptySeries) => (),
            other => panic!("expected EmptySeries error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a NaN observation triggers `StatsError::NonFiniteData`
    // carrying the index of the first offending element.
    //
    // Given
    // -----
    // - A vector with NaN at index 1.
    //
    // Expect
    // ------
    // - `validate_series` returns `Err(StatsError::NonFiniteData { index: 1, .. })`.
    fn validate_series_nan_value_returns_non_finite_data() {
        // Arrange
        let values = array![0.5_f64, f64::NAN, 1.5];

        // Act
        let result = validate_series(values.view());

        // Assert
        match result {
            Err(StatsError::NonFiniteData { index, value }) => {
                assert_eq!(index, 1);
                assert!(value.is_nan(), "payload should be the offending NaN, got {value}");
            }
            other => panic!("expected NonFiniteData error, got {other:?}"),
        }
    }
}
