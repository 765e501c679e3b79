//! sequence — bounded integer sequence generation.
//!
//! Purpose
//! -------
//! Collect sequence-generation routines and their shared error handling.
//! This subtree currently implements bounded Fibonacci generation with
//! validated inputs and overflow-checked arithmetic.
//!
//! Key behaviors
//! -------------
//! - Expose [`fibonacci`] as the single generation entry point, returning a
//!   freshly allocated vector of the first `n` terms.
//! - Provide a dedicated error type [`SequenceError`] and result alias
//!   [`SequenceResult`], plus a conversion layer to Python exceptions when
//!   the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Generation routines never panic on user-facing invalid input; all
//!   failures are reported via [`SequenceResult`].
//! - Terms are `u64`; representation limits are part of the documented
//!   contract rather than silent wrapping behavior.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the surface as:
//!
//!   ```rust
//!   use rust_numerics::sequence::fibonacci;
//!
//!   let terms = fibonacci(10)?;
//!   # Ok::<(), rust_numerics::sequence::SequenceError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live alongside the implementation in [`fibonacci`] and
//!   [`errors`]; the crate-level integration test exercises the module as
//!   part of the full pipeline.

pub mod errors;
pub mod fibonacci;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SequenceError, SequenceResult};
pub use self::fibonacci::fibonacci;
