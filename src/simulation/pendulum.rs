//! simulation::pendulum — nonlinear pendulum trajectories.
//!
//! Purpose
//! -------
//! Solve the full nonlinear pendulum equation
//!
//!   dθ/dt = ω,  dω/dt = −(g/L)·sin θ
//!
//! over a validated parameter set and return the state sampled at exactly
//! [`SAMPLE_COUNT`] evenly spaced times across the span, endpoints included.
//! The small-angle linearization is deliberately not used; trajectories are
//! exact up to the integrator tolerances for any amplitude.
//!
//! Key behaviors
//! -------------
//! - Build the evaluation grid with `Array1::linspace` over the configured
//!   span and delegate integration to [`rk45::integrate`], which evaluates
//!   the grid through its dense-output interpolant.
//! - Package the result as an immutable [`Trajectory`] pairing each sample
//!   time with its (θ, ω) state.
//! - Propagate integrator failures ([`SimError::StepSizeUnderflow`],
//!   [`SimError::MaxStepsExceeded`]) unchanged; no partial trajectory is
//!   ever produced.
//!
//! Invariants & assumptions
//! ------------------------
//! - `PendulumParams` guarantees a well-formed problem (finite fields,
//!   `end ≥ start`, `L > 0`) before this module runs.
//! - The rest state θ₀ = ω₀ = 0 is a stable equilibrium: the right-hand
//!   side vanishes identically and the trajectory stays exactly zero.
//! - For a fixed parameter set, tolerance set, and method, the trajectory is
//!   deterministic; repeated calls are bit-identical.
//!
//! Conventions
//! -----------
//! - Trajectory states are stored as a `(SAMPLE_COUNT × 2)` matrix with θ in
//!   column 0 and ω in column 1, the `[theta, omega]` order callers expect
//!   from the state vector itself.
//!
//! Downstream usage
//! ----------------
//! - Call [`Trajectory::simulate`] with a parameter set (often
//!   `PendulumParams::default()`) and solver options; read the results via
//!   [`Trajectory::times`], [`Trajectory::theta`], and
//!   [`Trajectory::omega`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover the equilibrium invariant, the fixed sample count and
//!   exact endpoints, small-angle agreement with the harmonic closed form,
//!   energy conservation at tight tolerances, the degenerate zero-width
//!   span, and determinism across repeated calls.

use ndarray::{array, Array1, Array2, ArrayView1};

use crate::simulation::errors::SimResult;
use crate::simulation::params::{PendulumParams, SolverOptions};
use crate::simulation::rk45;

/// Number of evenly spaced samples in every trajectory.
pub const SAMPLE_COUNT: usize = 500;

/// Trajectory — sampled solution of one pendulum simulation.
///
/// Purpose
/// -------
/// Pair the fixed evaluation grid with the integrated (θ, ω) states, as an
/// immutable value object produced by [`Trajectory::simulate`].
///
/// Fields
/// ------
/// - `times`: `Array1<f64>` of length [`SAMPLE_COUNT`]
///   Evenly spaced sample times spanning the configured interval, both
///   endpoints included.
/// - `states`: `Array2<f64>` of shape `(SAMPLE_COUNT, 2)`
///   One (θ, ω) row per sample time, in the same order.
///
/// Invariants
/// ----------
/// - `times.len() == states.nrows() == SAMPLE_COUNT` for every constructed
///   trajectory.
/// - `times[0]` and `times[SAMPLE_COUNT − 1]` equal the span bounds exactly.
///
/// Performance
/// -----------
/// - Two heap allocations (grid and state matrix); accessors return views
///   and never copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Array1<f64>,
    states: Array2<f64>,
}

impl Trajectory {
    /// Simulate a pendulum and sample its trajectory.
    ///
    /// Parameters
    /// ----------
    /// - `params`: `&PendulumParams`
    ///   Validated initial state, time span, and physical constants.
    /// - `opts`: `&SolverOptions`
    ///   Integrator tolerances and step ceiling; `SolverOptions::default()`
    ///   matches SciPy's `solve_ivp` tolerances.
    ///
    /// Returns
    /// -------
    /// `SimResult<Trajectory>`
    ///   The sampled trajectory, or the integrator's failure.
    ///
    /// Errors
    /// ------
    /// - `SimError::StepSizeUnderflow` / `SimError::MaxStepsExceeded`
    ///   Propagated from the integrator when it cannot cover the span at
    ///   the requested tolerances; no partial result is returned.
    ///
    /// Panics
    /// ------
    /// - Never panics; parameter validity is established by
    ///   [`PendulumParams::new`].
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_numerics::simulation::{PendulumParams, SolverOptions, Trajectory, SAMPLE_COUNT};
    ///
    /// let trajectory =
    ///     Trajectory::simulate(&PendulumParams::default(), &SolverOptions::default()).unwrap();
    ///
    /// assert_eq!(trajectory.times().len(), SAMPLE_COUNT);
    /// assert_eq!(trajectory.theta()[0], std::f64::consts::FRAC_PI_4);
    /// ```
    pub fn simulate(params: &PendulumParams, opts: &SolverOptions) -> SimResult<Self> {
        let (g, length) = (params.g(), params.length());
        let (start, end) = params.t_span();

        // linspace accumulates start + step·i and can miss the stop value by
        // an ulp; the last sample must hit the span bound exactly.
        let mut times = Array1::linspace(start, end, SAMPLE_COUNT);
        times[SAMPLE_COUNT - 1] = end;
        let y0 = array![params.theta0(), params.omega0()];
        let states = rk45::integrate(
            |_t, y| array![y[1], -(g / length) * y[0].sin()],
            (start, end),
            &y0,
            &times,
            opts,
        )?;

        Ok(Trajectory { times, states })
    }

    /// Sample times, length [`SAMPLE_COUNT`].
    pub fn times(&self) -> ArrayView1<'_, f64> {
        self.times.view()
    }

    /// Full `(SAMPLE_COUNT × 2)` state matrix, columns [θ, ω].
    pub fn states(&self) -> &Array2<f64> {
        &self.states
    }

    /// Angle samples θ(t), radians.
    pub fn theta(&self) -> ArrayView1<'_, f64> {
        self.states.column(0)
    }

    /// Angular-velocity samples ω(t), radians/second.
    pub fn omega(&self) -> ArrayView1<'_, f64> {
        self.states.column(1)
    }

    /// Number of samples; always [`SAMPLE_COUNT`].
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false; trajectories are never empty.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::errors::SimError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The stable-equilibrium invariant (zero initial state stays zero).
    // - The fixed sample count and exact span endpoints, including a span
    //   whose linspace step does not round to the stop value.
    // - Small-angle agreement with the harmonic-oscillator closed form.
    // - Energy conservation at tight tolerances.
    // - The degenerate zero-width span.
    // - Determinism across repeated simulations.
    // - Propagation of the step-ceiling failure.
    //
    // They intentionally DO NOT cover:
    // - Integrator internals (step control, dense output), which are pinned
    //   by the rk45 module tests against closed-form solutions.
    // -------------------------------------------------------------------------

    /// Tight solver options for accuracy-sensitive assertions.
    fn tight_options() -> SolverOptions {
        SolverOptions::new(1e-9, 1e-12, 1_000_000)
            .expect("tight tolerances are valid solver options")
    }

    #[test]
    // Purpose
    // -------
    // Verify the stable equilibrium: a pendulum at rest at the bottom
    // stays exactly at rest at every sample.
    //
    // Given
    // -----
    // - θ₀ = 0, ω₀ = 0, default span and constants, default tolerances.
    //
    // Expect
    // ------
    // - θ and ω are exactly 0.0 at all 500 samples.
    fn simulate_rest_state_stays_identically_zero() {
        // Arrange
        let params = PendulumParams::new(0.0, 0.0, (0.0, 10.0), 9.8, 1.0)
            .expect("rest parameters are valid");

        // Act
        let trajectory = Trajectory::simulate(&params, &SolverOptions::default())
            .expect("equilibrium should integrate cleanly");

        // Assert
        assert!(trajectory.theta().iter().all(|&v| v == 0.0), "theta should stay exactly zero");
        assert!(trajectory.omega().iter().all(|&v| v == 0.0), "omega should stay exactly zero");
    }

    #[test]
    // Purpose
    // -------
    // Pin the output-grid contract: exactly 500 samples with the span
    // bounds as first and last times, regardless of internal step sizes.
    //
    // Given
    // -----
    // - The default parameter set over (0, 10).
    //
    // Expect
    // ------
    // - 500 times, 500 state rows, times[0] = 0 and times[499] = 10, and
    //   the first row equals the initial state.
    fn simulate_produces_fixed_grid_with_exact_endpoints() {
        // Arrange
        let params = PendulumParams::default();

        // Act
        let trajectory = Trajectory::simulate(&params, &SolverOptions::default())
            .expect("default parameters should integrate cleanly");

        // Assert
        assert_eq!(trajectory.len(), SAMPLE_COUNT);
        assert_eq!(trajectory.states().nrows(), SAMPLE_COUNT);
        assert_eq!(trajectory.times()[0], 0.0);
        assert_eq!(trajectory.times()[SAMPLE_COUNT - 1], 10.0);
        assert_eq!(trajectory.theta()[0], params.theta0());
        assert_eq!(trajectory.omega()[0], params.omega0());
    }

    #[test]
    // Purpose
    // -------
    // Verify endpoint exactness on a span where naive linspace accumulation
    // misses the stop value: 499 steps of 1/499 land at 0.9999999999999999,
    // one ulp short of 1.0.
    //
    // Given
    // -----
    // - The default parameter set over (0, 1).
    //
    // Expect
    // ------
    // - times[499] == 1.0 bit-exactly, and times[0] == 0.0.
    fn simulate_unit_span_final_sample_hits_bound_exactly() {
        // Arrange
        let params = PendulumParams::new(std::f64::consts::FRAC_PI_4, 0.0, (0.0, 1.0), 9.8, 1.0)
            .expect("unit-span parameters are valid");

        // Act
        let trajectory = Trajectory::simulate(&params, &SolverOptions::default())
            .expect("unit span should integrate cleanly");

        // Assert
        assert_eq!(trajectory.times()[0], 0.0);
        assert_eq!(trajectory.times()[SAMPLE_COUNT - 1], 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Check the physics against the small-angle closed form
    // θ(t) = θ₀·cos(√(g/L)·t), which the nonlinear solution approaches
    // as θ₀ → 0.
    //
    // Given
    // -----
    // - θ₀ = 1e-3 rad, ω₀ = 0, g = 9.8, L = 1, span (0, 10), tight
    //   tolerances.
    //
    // Expect
    // ------
    // - θ matches the closed form to 1e-7 at every sample (the nonlinear
    //   period correction at this amplitude is below 1e-8 relative).
    fn simulate_small_angle_matches_harmonic_closed_form() {
        // Arrange
        let theta0 = 1e-3;
        let params = PendulumParams::new(theta0, 0.0, (0.0, 10.0), 9.8, 1.0)
            .expect("small-angle parameters are valid");
        let omega_n = (params.g() / params.length()).sqrt();

        // Act
        let trajectory =
            Trajectory::simulate(&params, &tight_options()).expect("integration should succeed");

        // Assert
        for (i, &t) in trajectory.times().iter().enumerate() {
            let expected = theta0 * (omega_n * t).cos();
            let actual = trajectory.theta()[i];
            assert!(
                (actual - expected).abs() < 1e-7,
                "sample {i} at t = {t}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify energy conservation for a large-amplitude swing: the total
    // energy E = ω²/2 + (g/L)(1 − cos θ) is a first integral of the
    // undamped pendulum.
    //
    // Given
    // -----
    // - θ₀ = 2.0 rad (far outside the linear regime), span (0, 20), tight
    //   tolerances.
    //
    // Expect
    // ------
    // - The energy at every sample matches the initial energy to a
    //   relative drift below 1e-6.
    fn simulate_large_amplitude_conserves_energy() {
        // Arrange
        let params = PendulumParams::new(2.0, 0.0, (0.0, 20.0), 9.8, 1.0)
            .expect("large-amplitude parameters are valid");
        let ratio = params.g() / params.length();
        let energy =
            |theta: f64, omega: f64| 0.5 * omega * omega + ratio * (1.0 - theta.cos());
        let e0 = energy(params.theta0(), params.omega0());

        // Act
        let trajectory =
            Trajectory::simulate(&params, &tight_options()).expect("integration should succeed");

        // Assert
        for i in 0..trajectory.len() {
            let e = energy(trajectory.theta()[i], trajectory.omega()[i]);
            assert!(
                ((e - e0) / e0).abs() < 1e-6,
                "energy drift at sample {i}: E0 = {e0}, E = {e}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the degenerate zero-width span: 500 identical times and the
    // initial state at every sample.
    //
    // Given
    // -----
    // - t_span = (2, 2) with a non-trivial initial state.
    //
    // Expect
    // ------
    // - Every time equals 2 and every state row equals (θ₀, ω₀).
    fn simulate_zero_width_span_repeats_initial_state() {
        // Arrange
        let params = PendulumParams::new(0.5, -0.25, (2.0, 2.0), 9.8, 1.0)
            .expect("zero-width span is a valid configuration");

        // Act
        let trajectory = Trajectory::simulate(&params, &SolverOptions::default())
            .expect("degenerate span should short-circuit");

        // Assert
        assert_eq!(trajectory.len(), SAMPLE_COUNT);
        assert!(trajectory.times().iter().all(|&t| t == 2.0));
        assert!(trajectory.theta().iter().all(|&v| v == 0.5));
        assert!(trajectory.omega().iter().all(|&v| v == -0.25));
    }

    #[test]
    // Purpose
    // -------
    // Confirm that repeated simulations with identical inputs are
    // bit-identical (no hidden state, no randomness).
    //
    // Given
    // -----
    // - Two simulations of the default parameter set.
    //
    // Expect
    // ------
    // - Both trajectories compare equal.
    fn simulate_repeat_calls_are_identical() {
        // Arrange
        let params = PendulumParams::default();
        let opts = SolverOptions::default();

        // Act
        let first = Trajectory::simulate(&params, &opts).expect("integration should succeed");
        let second = Trajectory::simulate(&params, &opts).expect("integration should succeed");

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // Ensure integrator failures surface as errors rather than partial
    // trajectories.
    //
    // Given
    // -----
    // - The default problem with a step ceiling of 2.
    //
    // Expect
    // ------
    // - `simulate` returns `Err(MaxStepsExceeded { max_steps: 2 })`.
    fn simulate_step_ceiling_failure_returns_error() {
        // Arrange
        let params = PendulumParams::default();
        let opts = SolverOptions::new(1e-9, 1e-12, 2).expect("options are valid");

        // Act
        let result = Trajectory::simulate(&params, &opts);

        // Assert
        match result {
            Err(SimError::MaxStepsExceeded { max_steps }) => assert_eq!(max_steps, 2),
            other => panic!("expected MaxStepsExceeded error, got {other:?}"),
        }
    }
}
