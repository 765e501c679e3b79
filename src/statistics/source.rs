//! statistics::source — tagged input variants for statistics operations.
//!
//! Purpose
//! -------
//! Define the explicit input form accepted by the statistics operations: a
//! flat numeric vector, or a labeled table plus a selected column. Rather
//! than dispatching on the runtime type of a loosely typed argument, the
//! input shape is resolved in the type system before any computation runs.
//!
//! Key behaviors
//! -------------
//! - Represent the two input shapes as [`DataSource::Flat`] and
//!   [`DataSource::Table`].
//! - Resolve the working vector once via [`DataSource::working_vector`],
//!   surfacing unknown column names as [`StatsError::UnknownColumn`].
//!
//! Invariants & assumptions
//! ------------------------
//! - A `Table` source always carries a column selector; "table without
//!   column" is unrepresentable in this API and is rejected at the Python
//!   boundary instead.
//! - The working vector is borrowed, never copied; reductions downstream
//!   decide whether they need an owned buffer.
//!
//! Testing notes
//! -------------
//! - Unit tests cover working-vector resolution for both variants and the
//!   unknown-column failure path.

use ndarray::Array1;

use crate::statistics::errors::StatsResult;
use crate::statistics::table::DataTable;

/// DataSource — flat vector or labeled table with a column selector.
///
/// Purpose
/// -------
/// Make the statistics input contract explicit: either the data *is* the
/// working vector, or it is a table from which one named column is selected.
///
/// Variants
/// --------
/// - `Flat(Array1<f64>)`
///   The data itself is the working vector.
/// - `Table { table: DataTable, column: String }`
///   The working vector is the named column of `table`.
///
/// Notes
/// -----
/// - Construction is infallible; column existence is checked when the
///   working vector is resolved, so a `DataSource` can be built before the
///   table is fully populated.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// A one-dimensional numeric collection.
    Flat(Array1<f64>),

    /// A labeled table plus the column to analyze.
    Table { table: DataTable, column: String },
}

impl DataSource {
    /// Convenience constructor for the table variant.
    pub fn table(table: DataTable, column: impl Into<String>) -> Self {
        DataSource::Table { table, column: column.into() }
    }

    /// Resolve the working vector for this source.
    ///
    /// Returns
    /// -------
    /// `StatsResult<&Array1<f64>>`
    ///   The flat data, or the selected column of the table.
    ///
    /// Errors
    /// ------
    /// - `StatsError::UnknownColumn` when the selected column does not exist.
    pub fn working_vector(&self) -> StatsResult<&Array1<f64>> {
        match self {
            DataSource::Flat(values) => Ok(values),
            DataSource::Table { table, column } => table.column(column),
        }
    }
}
