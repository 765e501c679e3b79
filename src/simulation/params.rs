//! simulation::params — validated configuration for pendulum simulation.
//!
//! Purpose
//! -------
//! Collect the configuration surface of the simulation subtree in two small
//! validated structs: the physical problem description ([`PendulumParams`])
//! and the integrator controls ([`SolverOptions`]). Every default is a
//! named, documented field with a checked constructor, so call sites pass
//! explicit validated options instead of ad-hoc scalars.
//!
//! Key behaviors
//! -------------
//! - [`PendulumParams::new`] enforces `t_span.1 ≥ t_span.0`, `length > 0`,
//!   and finiteness of every field before any integration starts.
//! - [`SolverOptions::new`] enforces strictly positive finite tolerances and
//!   a non-zero step ceiling.
//! - Both types implement `Default` (θ₀ = π/4, ω₀ = 0, span (0, 10),
//!   g = 9.8, L = 1; rtol = 1e-3, atol = 1e-6, max_steps = 100 000 — the
//!   tolerance defaults match SciPy's `solve_ivp`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Fields are private; any reachable instance satisfies the documented
//!   constraints, so downstream code divides by `length` and takes `√`s
//!   without re-checking.
//! - Degenerate-but-valid configurations (e.g., a zero-width time span) are
//!   accepted here and handled by the integrator.
//!
//! Conventions
//! -----------
//! - Angles are radians, angular velocity radians/second, gravity m/s²,
//!   length meters.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the defaults, each rejection branch of both
//!   constructors, and acceptance of a zero-width span.

use crate::simulation::errors::{SimError, SimResult};

/// Default initial angle: π/4 radians.
pub const DEFAULT_THETA0: f64 = std::f64::consts::FRAC_PI_4;

/// Default gravitational acceleration in m/s².
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Default pendulum length in meters.
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Default simulation time span in seconds.
pub const DEFAULT_T_SPAN: (f64, f64) = (0.0, 10.0);

/// PendulumParams — physical description of one pendulum problem.
///
/// Purpose
/// -------
/// Bundle the initial state, time span, and physical constants of a single
/// nonlinear pendulum simulation, validated once at construction.
///
/// Parameters
/// ----------
/// Constructed via:
/// - `PendulumParams::new(theta0, omega0, t_span, g, length)`
///   All values in SI units; see the field list for constraints.
/// - `PendulumParams::default()`
///   The documented defaults: (π/4, 0, (0, 10), 9.8, 1.0).
///
/// Fields
/// ------
/// - `theta0`: initial angle from the vertical, radians; finite.
/// - `omega0`: initial angular velocity, radians/second; finite.
/// - `t_span`: `(start, end)` seconds; finite with `end ≥ start`.
/// - `g`: gravitational acceleration, m/s²; finite.
/// - `length`: pendulum length, meters; finite and strictly positive.
///
/// Invariants
/// ----------
/// - Every reachable instance satisfies the above constraints; `new` is the
///   only way to build one with non-default values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PendulumParams {
    theta0: f64,
    omega0: f64,
    t_span: (f64, f64),
    g: f64,
    length: f64,
}

impl PendulumParams {
    /// Build a validated parameter set.
    ///
    /// Errors
    /// ------
    /// - `SimError::NonFiniteParam` when `theta0`, `omega0`, or `g` is NaN
    ///   or ±∞.
    /// - `SimError::InvalidTimeSpan` when either bound is non-finite or
    ///   `t_span.1 < t_span.0`.
    /// - `SimError::NonPositiveLength` when `length` is not finite and
    ///   strictly positive.
    pub fn new(
        theta0: f64, omega0: f64, t_span: (f64, f64), g: f64, length: f64,
    ) -> SimResult<Self> {
        for (name, value) in [("theta0", theta0), ("omega0", omega0), ("g", g)] {
            if !value.is_finite() {
                return Err(SimError::NonFiniteParam { name, value });
            }
        }
        let (start, end) = t_span;
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(SimError::InvalidTimeSpan { start, end });
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(SimError::NonPositiveLength { value: length });
        }
        Ok(PendulumParams { theta0, omega0, t_span, g, length })
    }

    /// Initial angle in radians.
    pub fn theta0(&self) -> f64 {
        self.theta0
    }

    /// Initial angular velocity in radians/second.
    pub fn omega0(&self) -> f64 {
        self.omega0
    }

    /// Simulation time span `(start, end)` in seconds.
    pub fn t_span(&self) -> (f64, f64) {
        self.t_span
    }

    /// Gravitational acceleration in m/s².
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Pendulum length in meters.
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Default for PendulumParams {
    fn default() -> Self {
        PendulumParams {
            theta0: DEFAULT_THETA0,
            omega0: 0.0,
            t_span: DEFAULT_T_SPAN,
            g: DEFAULT_GRAVITY,
            length: DEFAULT_LENGTH,
        }
    }
}

/// SolverOptions — adaptive-step integrator controls.
///
/// Purpose
/// -------
/// Bundle the relative/absolute error tolerances and the step ceiling used
/// by the RK45 integrator, with tolerance defaults matching SciPy's
/// `solve_ivp`.
///
/// Fields
/// ------
/// - `rtol`: relative tolerance; finite and > 0. Default 1e-3.
/// - `atol`: absolute tolerance; finite and > 0. Default 1e-6.
/// - `max_steps`: ceiling on attempted integration steps; ≥ 1. Default
///   100 000. Bounds worst-case runtime for pathological parameters.
///
/// Invariants
/// ----------
/// - Every reachable instance satisfies the above constraints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverOptions {
    rtol: f64,
    atol: f64,
    max_steps: usize,
}

impl SolverOptions {
    /// Build validated solver options.
    ///
    /// Errors
    /// ------
    /// - `SimError::InvalidTolerance` when `rtol` or `atol` is non-finite or
    ///   not strictly positive.
    /// - `SimError::ZeroMaxSteps` when `max_steps == 0`.
    pub fn new(rtol: f64, atol: f64, max_steps: usize) -> SimResult<Self> {
        for (name, value) in [("rtol", rtol), ("atol", atol)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidTolerance { name, value });
            }
        }
        if max_steps == 0 {
            return Err(SimError::ZeroMaxSteps);
        }
        Ok(SolverOptions { rtol, atol, max_steps })
    }

    /// Relative error tolerance.
    pub fn rtol(&self) -> f64 {
        self.rtol
    }

    /// Absolute error tolerance.
    pub fn atol(&self) -> f64 {
        self.atol
    }

    /// Ceiling on attempted integration steps.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions { rtol: 1e-3, atol: 1e-6, max_steps: 100_000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The documented defaults of both configuration structs.
    // - Each rejection branch of `PendulumParams::new` and
    //   `SolverOptions::new`.
    // - Acceptance of a degenerate (zero-width) time span.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the documented defaults of `PendulumParams::default`.
    //
    // Given
    // -----
    // - The default parameter set.
    //
    // Expect
    // ------
    // - θ₀ = π/4, ω₀ = 0, span (0, 10), g = 9.8, L = 1.
    fn pendulum_params_default_matches_documented_values() {
        // Act
        let params = PendulumParams::default();

        // Assert
        assert_eq!(params.theta0(), std::f64::consts::FRAC_PI_4);
        assert_eq!(params.omega0(), 0.0);
        assert_eq!(params.t_span(), (0.0, 10.0));
        assert_eq!(params.g(), 9.8);
        assert_eq!(params.length(), 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a reversed time span is rejected with
    // `SimError::InvalidTimeSpan`.
    //
    // Given
    // -----
    // - t_span = (10, 0), all other fields valid.
    //
    // Expect
    // ------
    // - `new` returns `Err(InvalidTimeSpan { start: 10, end: 0 })`.
    fn pendulum_params_reversed_span_returns_invalid_time_span() {
        // Act
        let result = PendulumParams::new(0.1, 0.0, (10.0, 0.0), 9.8, 1.0);

        // Assert
        match result {
            Err(SimError::InvalidTimeSpan { start, end }) => {
                assert_eq!(start, 10.0);
                assert_eq!(end, 0.0);
            }
            other => panic!("expected InvalidTimeSpan error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-positive pendulum length is rejected with
    // `SimError::NonPositiveLength` (degenerate L = 0 included).
    //
    // Given
    // -----
    // - length = 0 and length = -1, all other fields valid.
    //
    // Expect
    // ------
    // - Both calls return `Err(NonPositiveLength)`.
    fn pendulum_params_non_positive_length_returns_error() {
        for length in [0.0, -1.0] {
            // Act
            let result = PendulumParams::new(0.1, 0.0, (0.0, 10.0), 9.8, length);

            // Assert
            match result {
                Err(SimError::NonPositiveLength { value }) => assert_eq!(value, length),
                other => panic!("expected NonPositiveLength for L = {length}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite scalar parameters are rejected with
    // `SimError::NonFiniteParam` naming the offending field.
    //
    // Given
    // -----
    // - theta0 = NaN, all other fields valid.
    //
    // Expect
    // ------
    // - `new` returns `Err(NonFiniteParam { name: "theta0", .. })`.
    fn pendulum_params_nan_theta0_returns_non_finite_param() {
        // Act
        let result = PendulumParams::new(f64::NAN, 0.0, (0.0, 10.0), 9.8, 1.0);

        // Assert
        match result {
            Err(SimError::NonFiniteParam { name, .. }) => assert_eq!(name, "theta0"),
            other => panic!("expected NonFiniteParam error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a zero-width time span is a valid configuration; the
    // integrator handles it by returning the initial state everywhere.
    //
    // Given
    // -----
    // - t_span = (5, 5), all other fields valid.
    //
    // Expect
    // ------
    // - `new` succeeds.
    fn pendulum_params_zero_width_span_is_accepted() {
        // Act
        let result = PendulumParams::new(0.1, 0.0, (5.0, 5.0), 9.8, 1.0);

        // Assert
        assert!(result.is_ok(), "zero-width span should be accepted, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Pin the defaults of `SolverOptions::default` and exercise both
    // rejection branches of `SolverOptions::new`.
    //
    // Given
    // -----
    // - The default options; a non-positive rtol; a zero step ceiling.
    //
    // Expect
    // ------
    // - Defaults are (1e-3, 1e-6, 100000); rtol ≤ 0 yields
    //   `InvalidTolerance`; max_steps = 0 yields `ZeroMaxSteps`.
    fn solver_options_defaults_and_rejections() {
        // Act
        let defaults = SolverOptions::default();
        let bad_rtol = SolverOptions::new(0.0, 1e-6, 100);
        let bad_steps = SolverOptions::new(1e-3, 1e-6, 0);

        // Assert
        assert_eq!(defaults.rtol(), 1e-3);
        assert_eq!(defaults.atol(), 1e-6);
        assert_eq!(defaults.max_steps(), 100_000);
        match bad_rtol {
            Err(SimError::InvalidTolerance { name, .. }) => assert_eq!(name, "rtol"),
            other => panic!("expected InvalidTolerance error, got {other:?}"),
        }
        match bad_steps {
            Err(SimError::ZeroMaxSteps) => (),
            other => panic!("expected ZeroMaxSteps error, got {other:?}"),
        }
    }
}
