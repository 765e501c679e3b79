//! simulation — pendulum dynamics via adaptive Runge–Kutta integration.
//!
//! Purpose
//! -------
//! Collect the ODE-simulation surface of the crate: validated problem and
//! solver configuration ([`PendulumParams`], [`SolverOptions`]), the
//! Dormand–Prince 5(4) integrator with dense output ([`rk45`]), and the
//! pendulum front end ([`Trajectory`]) that samples the solution at exactly
//! [`SAMPLE_COUNT`] evenly spaced times.
//!
//! Key behaviors
//! -------------
//! - Validate every scalar at construction time; the integrator assumes a
//!   well-formed problem and never re-checks configuration.
//! - Adapt the internal step to the local error estimate while evaluating
//!   the fixed output grid through a quartic dense-output interpolant, so
//!   output resolution never constrains step size.
//! - Report all failures via [`SimError`] / [`SimResult`]; a failed
//!   integration yields no partial trajectory.
//!
//! Invariants & assumptions
//! ------------------------
//! - The pendulum right-hand side is smooth and autonomous; the explicit
//!   RK45 pair is appropriate for it at any amplitude.
//! - For fixed inputs, simulation results are deterministic across calls
//!   and platforms with IEEE-754 `f64` arithmetic.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_numerics::simulation::{PendulumParams, SolverOptions, Trajectory};
//!
//!   let trajectory =
//!       Trajectory::simulate(&PendulumParams::default(), &SolverOptions::default())?;
//!   # Ok::<(), rust_numerics::simulation::SimError>(())
//!   ```
//!
//! - Python bindings unpack a [`Trajectory`] into a times vector and a
//!   `(500 × 2)` state matrix; they rely on `From<SimError> for PyErr` for
//!   error mapping.
//!
//! Testing notes
//! -------------
//! - Integrator tests pin accuracy against closed-form solutions
//!   (exponential growth, harmonic oscillation); pendulum tests add
//!   physics-level checks (equilibrium, energy conservation).

pub mod errors;
pub mod params;
pub mod pendulum;
pub mod rk45;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SimError, SimResult};
pub use self::params::{
    PendulumParams, SolverOptions, DEFAULT_GRAVITY, DEFAULT_LENGTH, DEFAULT_THETA0,
    DEFAULT_T_SPAN,
};
pub use self::pendulum::{Trajectory, SAMPLE_COUNT};
