//! statistics — descriptive statistics over flat and labeled data.
//!
//! Purpose
//! -------
//! Collect the descriptive-statistics surface of the crate: a tagged input
//! form ([`DataSource`]) covering flat collections and labeled tables, the
//! five-scalar summary ([`StatsSummary`]), and histogram binning
//! ([`Histogram`]) for callers that visualize the distribution.
//!
//! Key behaviors
//! -------------
//! - Resolve capability at the API boundary: a [`DataSource`] either *is*
//!   the working vector or names the table column that is, so no runtime
//!   type inspection happens downstream.
//! - Validate the working vector once (non-empty, finite) in
//!   [`validation::validate_series`], then reduce it with the `statrs`
//!   statistics traits using population (÷N) normalization.
//! - Report all failures via [`StatsError`] / [`StatsResult`]; nothing in
//!   this subtree panics on user-facing invalid input.
//!
//! Invariants & assumptions
//! ------------------------
//! - Tables hold uniquely named, equal-length `f64` columns; both properties
//!   are enforced at construction time by [`DataTable::with_column`].
//! - Summary and histogram computation are pure functions of their inputs.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use ndarray::array;
//!   use rust_numerics::statistics::{DataSource, StatsSummary};
//!
//!   let source = DataSource::Flat(array![1.0, 2.0, 3.0]);
//!   let summary = StatsSummary::analyze(&source)?;
//!   # Ok::<(), rust_numerics::statistics::StatsError>(())
//!   ```
//!
//! - Python bindings build a [`DataSource`] from a NumPy array or a dict of
//!   columns and return the summary as a plain dict; they rely on
//!   `From<StatsError> for PyErr` for error mapping.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each implementation file; the crate-level
//!   integration test exercises the summary and histogram together on a
//!   multi-column table.

pub mod errors;
pub mod source;
pub mod summary;
pub mod table;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{StatsError, StatsResult};
pub use self::source::DataSource;
pub use self::summary::{Histogram, StatsSummary};
pub use self::table::DataTable;
pub use self::validation::validate_series;
