//! statistics::table — labeled tables of equal-length numeric columns.
//!
//! Purpose
//! -------
//! Provide a minimal labeled-table type for the statistics subtree: named
//! `f64` columns of equal length with validated construction and by-name
//! lookup. It stands in for a pandas-style labeled dataset at the scale
//! this crate needs: a handful of named series.
//!
//! Key behaviors
//! -------------
//! - Build tables incrementally via [`DataTable::with_column`], which
//!   enforces unique names and a single shared column length.
//! - Resolve columns by name via [`DataTable::column`], surfacing unknown
//!   names as [`StatsError::UnknownColumn`] rather than panicking.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every column in a constructed table has the same length.
//! - Column names are unique within a table.
//! - Values are untouched at construction time; finiteness is checked by the
//!   consuming operation, not the container.
//!
//! Conventions
//! -----------
//! - Columns are stored in insertion order; lookup is a linear scan, which is
//!   appropriate for the handful of columns this type is meant to hold.
//!
//! Testing notes
//! -------------
//! - Unit tests cover successful construction, ragged-column rejection,
//!   duplicate-name rejection, and unknown-column lookup.

use ndarray::Array1;

use crate::statistics::errors::{StatsError, StatsResult};

/// DataTable — named `f64` columns of equal length.
///
/// Purpose
/// -------
/// Hold a small labeled dataset so that statistics operations can select a
/// working vector by column name, with the table shape validated once at
/// construction time.
///
/// Fields
/// ------
/// - `columns`: `Vec<(String, Array1<f64>)>`
///   Insertion-ordered (name, values) pairs. All value vectors share one
///   length.
///
/// Invariants
/// ----------
/// - All columns have equal length and unique names; both are enforced by
///   [`DataTable::with_column`].
///
/// Notes
/// -----
/// - An empty table (no columns) is valid; any column lookup on it fails
///   with [`StatsError::UnknownColumn`].
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<(String, Array1<f64>)>,
}

impl DataTable {
    /// Create an empty table with no columns.
    pub fn new() -> Self {
        DataTable { columns: Vec::new() }
    }

    /// Add a named column, consuming and returning the table.
    ///
    /// Parameters
    /// ----------
    /// - `name`: column name; must not already exist in the table.
    /// - `values`: column data; must match the length of existing columns.
    ///
    /// Returns
    /// -------
    /// `StatsResult<DataTable>`
    ///   The extended table, or an error describing the violated constraint.
    ///
    /// Errors
    /// ------
    /// - `StatsError::DuplicateColumn` when `name` is already present.
    /// - `StatsError::ColumnLengthMismatch` when `values.len()` differs from
    ///   the established column length.
    pub fn with_column(
        mut self, name: impl Into<String>, values: Array1<f64>,
    ) -> StatsResult<Self> {
        let name = name.into();
        if self.columns.iter().any(|(existing, _)| *existing == name) {
            return Err(StatsError::DuplicateColumn(name));
        }
        if let Some((_, first)) = self.columns.first() {
            if first.len() != values.len() {
                return Err(StatsError::ColumnLengthMismatch {
                    name,
                    expected: first.len(),
                    actual: values.len(),
                });
            }
        }
        self.columns.push((name, values));
        Ok(self)
    }

    /// Look up a column by name.
    ///
    /// Errors
    /// ------
    /// - `StatsError::UnknownColumn` when no column carries `name`.
    pub fn column(&self, name: &str) -> StatsResult<&Array1<f64>> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values)
            .ok_or_else(|| StatsError::UnknownColumn(name.to_string()))
    }

    /// Number of rows (0 for an empty table).
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

impl Default for DataTable {
    fn default() -> Self {
        Self::new()
    }
}
