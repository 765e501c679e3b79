//! statistics::summary — descriptive statistics and histogram binning.
//!
//! Purpose
//! -------
//! Reduce a numeric collection (flat or a labeled-table column) to its
//! summary statistics — mean, median, population standard deviation,
//! minimum, and maximum — and optionally bin it into a histogram for
//! downstream visualization.
//!
//! Key behaviors
//! -------------
//! - Resolve the working vector from a [`DataSource`] and validate it once
//!   (non-empty, all observations finite) before any reduction runs.
//! - Compute the five summary scalars via the `statrs` statistics traits,
//!   using the population (÷N) normalization for the standard deviation and
//!   the order-statistic median (mean of the two middle elements for even
//!   lengths), matching NumPy's `std` and `median` conventions.
//! - Bin observations into evenly spaced buckets over `[min, max]` via
//!   [`Histogram::compute`]; the summary itself never depends on the bin
//!   count.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both entry points are pure functions of their inputs: no shared state,
//!   no randomness, identical results on repeated calls.
//! - `min ≤ median ≤ max` and `std ≥ 0` hold for every successful summary.
//! - Histogram counts always sum to the number of observations; every
//!   observation lands in exactly one bin, with the maximum value assigned
//!   to the last bin.
//!
//! Conventions
//! -----------
//! - Reductions are performed in `f64` throughout; inputs are borrowed and
//!   never mutated.
//! - Error handling uses [`StatsError`] from `statistics::errors` and the
//!   alias [`StatsResult`].
//!
//! Downstream usage
//! ----------------
//! - Call [`StatsSummary::analyze`] on a [`DataSource`] to obtain the five
//!   scalars for reporting.
//! - Call [`Histogram::compute`] with the caller's preferred bin count when
//!   a distribution sketch is needed alongside the summary.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the exact values for the [1, 2, 3, 4, 5] reference case
//!   (mean 3, median 3, std √2, min 1, max 5), exercise even-length medians,
//!   the empty-series and unknown-column failure paths, and histogram count
//!   conservation including the constant-series degenerate span.

use statrs::statistics::{Data, OrderStatistics, Statistics};

use ndarray::Array1;

use crate::statistics::errors::{StatsError, StatsResult};
use crate::statistics::source::DataSource;
use crate::statistics::validation::validate_series;

/// StatsSummary — the five summary scalars of a working vector.
///
/// Purpose
/// -------
/// Hold the fixed-key descriptive statistics of one numeric collection:
/// population mean, order-statistic median, population standard deviation,
/// minimum, and maximum.
///
/// Fields
/// ------
/// - `mean`: `f64` — arithmetic mean.
/// - `median`: `f64` — order-statistic median (average of the two middle
///   elements for even lengths).
/// - `std`: `f64` — population standard deviation (÷N, not ÷(N−1)).
/// - `min`: `f64` — smallest observation.
/// - `max`: `f64` — largest observation.
///
/// Invariants
/// ----------
/// - All fields are finite for any successful [`StatsSummary::analyze`]
///   call, since non-finite observations are rejected up front.
/// - `min ≤ mean ≤ max`, `min ≤ median ≤ max`, and `std ≥ 0`.
///
/// Performance
/// -----------
/// - Five scalars, `Copy`; cheap to pass by value across FFI boundaries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StatsSummary {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl StatsSummary {
    /// Compute the summary statistics of a data source.
    ///
    /// Parameters
    /// ----------
    /// - `source`: `&DataSource`
    ///   Flat collection, or labeled table plus column selector. The working
    ///   vector must be non-empty and contain only finite values.
    ///
    /// Returns
    /// -------
    /// `StatsResult<StatsSummary>`
    ///   The five summary scalars of the working vector.
    ///
    /// Errors
    /// ------
    /// - `StatsError::UnknownColumn`
    ///   The table source selects a column that does not exist.
    /// - `StatsError::EmptySeries`
    ///   The working vector is empty, so the statistics are undefined.
    /// - `StatsError::NonFiniteData`
    ///   An observation is NaN or ±∞.
    ///
    /// Panics
    /// ------
    /// - Never panics; all failure modes are surfaced as `StatsError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use ndarray::array;
    /// use rust_numerics::statistics::{DataSource, StatsSummary};
    ///
    /// let source = DataSource::Flat(array![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// let summary = StatsSummary::analyze(&source).unwrap();
    ///
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.median, 3.0);
    /// assert!((summary.std - 2.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn analyze(source: &DataSource) -> StatsResult<Self> {
        let values = source.working_vector()?;
        validate_series(values.view())?;

        Ok(StatsSummary {
            mean: values.iter().mean(),
            median: Data::new(values.to_vec()).median(),
            std: values.iter().population_std_dev(),
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
        })
    }
}

/// Histogram — evenly spaced bin edges and per-bin counts.
///
/// Purpose
/// -------
/// Represent a binned sketch of a working vector's distribution, suitable
/// for a caller that renders the histogram the summary statistics describe.
///
/// Fields
/// ------
/// - `edges`: `Array1<f64>`
///   `bins + 1` evenly spaced edges spanning `[min, max]` of the data.
/// - `counts`: `Vec<usize>`
///   Observation count per bin; `counts.len() == bins`.
///
/// Invariants
/// ----------
/// - `counts.iter().sum() == n` where `n` is the number of observations.
/// - Bins are half-open `[edge_i, edge_{i+1})` except the last, which is
///   closed so the maximum observation is counted.
/// - A constant series produces a degenerate zero-width span with every
///   observation in bin 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Array1<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin the working vector of a data source into `bins` buckets.
    ///
    /// Parameters
    /// ----------
    /// - `source`: `&DataSource`
    ///   Same input contract as [`StatsSummary::analyze`].
    /// - `bins`: `usize`
    ///   Number of buckets; must be at least 1.
    ///
    /// Returns
    /// -------
    /// `StatsResult<Histogram>`
    ///   Edges and counts over `[min, max]` of the working vector.
    ///
    /// Errors
    /// ------
    /// - `StatsError::ZeroBins` when `bins == 0`.
    /// - All error cases of [`StatsSummary::analyze`] for the working vector
    ///   itself.
    pub fn compute(source: &DataSource, bins: usize) -> StatsResult<Self> {
        if bins == 0 {
            return Err(StatsError::ZeroBins);
        }
        let values = source.working_vector()?;
        validate_series(values.view())?;

        let min = Statistics::min(values.iter());
        let max = Statistics::max(values.iter());
        // linspace accumulates min + step·i and can miss the stop value by an
        // ulp; the closing edge must equal the maximum exactly.
        let mut edges = Array1::linspace(min, max, bins + 1);
        edges[bins] = max;
        let width = (max - min) / bins as f64;

        let mut counts = vec![0_usize; bins];
        for &value in values.iter() {
            let index = if width > 0.0 {
                // The maximum value falls into the final (closed) bin.
                (((value - min) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[index] += 1;
        }

        Ok(Histogram { edges, counts })
    }
}
