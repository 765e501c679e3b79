//! sequence::fibonacci — bounded Fibonacci generation.
//!
//! Purpose
//! -------
//! Generate the first `n` terms of the canonical Fibonacci sequence
//! 0, 1, 1, 2, 3, 5, … as a freshly allocated vector, with all invalid
//! inputs reported as [`SequenceError`] values rather than panics.
//!
//! Key behaviors
//! -------------
//! - Validate the requested term count before allocating (`n ≥ 1`).
//! - Produce terms via the additive recurrence with `checked_add`, so the
//!   first term that does not fit in `u64` is reported as
//!   [`SequenceError::TermOverflow`] instead of wrapping silently.
//!
//! Invariants & assumptions
//! ------------------------
//! - For any successful call: element 0 is 0; element 1 (when present) is 1;
//!   every element `i ≥ 2` equals the sum of the two preceding elements.
//! - The function is deterministic and side-effect free; repeated calls with
//!   identical inputs yield identical vectors.
//!
//! Conventions
//! -----------
//! - Terms are `u64`; the sequence overflows that representation at index 94,
//!   so `n ≤ 94` always succeeds and `n ≥ 95` always fails.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the short prefixes (n = 1, 2), the recurrence property
//!   for longer sequences, the zero-length rejection, and the overflow
//!   boundary at n = 95.

use crate::sequence::errors::{SequenceError, SequenceResult};

/// Generate the first `n` terms of the Fibonacci sequence.
///
/// Parameters
/// ----------
/// - `n`: `usize`
///   Number of terms to generate. Must be at least 1.
///
/// Returns
/// -------
/// `SequenceResult<Vec<u64>>`
///   - `Ok(terms)` with `terms.len() == n`, `terms[0] == 0`, and (for
///     `n ≥ 2`) `terms[1] == 1`, each later term being the sum of the two
///     preceding terms.
///   - `Err(SequenceError)` when the input is invalid or a term is not
///     representable.
///
/// Errors
/// ------
/// - `SequenceError::ZeroLength`
///   Returned when `n == 0`.
/// - `SequenceError::TermOverflow { index }`
///   Returned when the term at `index` exceeds `u64::MAX` (first possible at
///   index 94, i.e. `n ≥ 95`).
///
/// Panics
/// ------
/// - Never panics; all failure modes are surfaced as `SequenceError`.
///
/// Examples
/// --------
/// ```rust
/// use rust_numerics::sequence::fibonacci;
///
/// let terms = fibonacci(6).unwrap();
/// assert_eq!(terms, vec![0, 1, 1, 2, 3, 5]);
/// ```
pub fn fibonacci(n: usize) -> SequenceResult<Vec<u64>> {
    if n == 0 {
        return Err(SequenceError::ZeroLength);
    }

    let mut terms: Vec<u64> = Vec::with_capacity(n);
    terms.push(0);
    if n == 1 {
        return Ok(terms);
    }
    terms.push(1);

    for i in 2..n {
        let next = terms[i - 1]
            .checked_add(terms[i - 2])
            .ok_or(SequenceError::TermOverflow { index: i })?;
        terms.push(next);
    }

    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The short prefixes n = 1 and n = 2.
    // - The additive recurrence for a longer sequence.
    // - Rejection of n = 0.
    // - The u64 overflow boundary (n = 94 succeeds, n = 95 fails).
    // - Determinism across repeated calls.
    //
    // They intentionally DO NOT cover:
    // - The Python binding wrapper, which is exercised at the FFI layer.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the documented edge cases for very short sequences.
    //
    // Given
    // -----
    // - Term counts n = 1 and n = 2.
    //
    // Expect
    // ------
    // - `fibonacci(1)` returns `[0]`.
    // - `fibonacci(2)` returns `[0, 1]`.
    fn fibonacci_short_prefixes_match_seed_values() {
        // Act
        let one = fibonacci(1).expect("n = 1 should succeed");
        let two = fibonacci(2).expect("n = 2 should succeed");

        // Assert
        assert_eq!(one, vec![0]);
        assert_eq!(two, vec![0, 1]);
    }

    #[test]
    // Purpose
    // -------
    // Verify that every element beyond the second obeys the additive
    // recurrence F(i) = F(i-1) + F(i-2).
    //
    // Given
    // -----
    // - A sequence of 20 terms.
    //
    // Expect
    // ------
    // - `terms[i] == terms[i-1] + terms[i-2]` for all i in 2..20.
    // - The known prefix 0, 1, 1, 2, 3, 5, 8 appears at the front.
    fn fibonacci_terms_obey_additive_recurrence() {
        // Arrange
        let n = 20;

        // Act
        let terms = fibonacci(n).expect("n = 20 should succeed");

        // Assert
        assert_eq!(terms.len(), n);
        assert_eq!(&terms[..7], &[0, 1, 1, 2, 3, 5, 8]);
        for i in 2..n {
            assert_eq!(
                terms[i],
                terms[i - 1] + terms[i - 2],
                "recurrence violated at index {i}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a zero term count is rejected with
    // `SequenceError::ZeroLength` rather than returning an empty vector.
    //
    // Given
    // -----
    // - n = 0.
    //
    // Expect
    // ------
    // - `fibonacci(0)` returns `Err(SequenceError::ZeroLength)`.
    fn fibonacci_zero_terms_returns_zero_length_error() {
        // Act
        let result = fibonacci(0);

        // Assert
        match result {
            Err(SequenceError::ZeroLength) => (),
            other => panic!("expected ZeroLength error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin the u64 representation boundary: the largest representable
    // sequence has 94 terms (F(93) < u64::MAX < F(94)), and requesting 95
    // fails at index 94.
    //
    // Given
    // -----
    // - Term counts n = 94 and n = 95.
    //
    // Expect
    // ------
    // - `fibonacci(94)` succeeds and its last element is F(93).
    // - `fibonacci(95)` returns `Err(SequenceError::TermOverflow { index: 94 })`.
    fn fibonacci_overflow_boundary_is_at_index_94() {
        // Act
        let ok = fibonacci(94).expect("94 terms fit in u64");
        let overflow = fibonacci(95);

        // Assert
        assert_eq!(ok.len(), 94);
        assert_eq!(*ok.last().unwrap(), 12_200_160_415_121_876_738_u64, "F(93) mismatch");
        match overflow {
            Err(SequenceError::TermOverflow { index }) => assert_eq!(index, 94),
            other => panic!("expected TermOverflow at index 94, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Confirm that repeated calls with identical inputs yield identical
    // results (no hidden state).
    //
    // Given
    // -----
    // - Two calls with n = 30.
    //
    // Expect
    // ------
    // - Both calls return the same vector.
    fn fibonacci_repeat_calls_are_identical() {
        // Act
        let first = fibonacci(30).expect("n = 30 should succeed");
        let second = fibonacci(30).expect("n = 30 should succeed");

        // Assert
        assert_eq!(first, second);
    }
}
