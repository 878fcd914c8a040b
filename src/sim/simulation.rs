use log::{debug, warn};
use nalgebra::Vector2;

use crate::dynamics::Nucleon;
use crate::error::{Error, Result};
use crate::physics::yukawa::{self, YukawaParams};
use crate::physics::relativity::relativistic_accel;

// ---------------------------------------------------------------------------
// Two-nucleon simulation
// ---------------------------------------------------------------------------

/// Relativistic two-body integrator with per-nucleon trajectory buffers.
///
/// Owns both nucleons; their evolving state is read back through the
/// accessors or recovered with [`Simulation::into_nucleons`]. Calls to
/// [`Simulation::integrate`] are cumulative: state continues from where the
/// previous call left off and the trajectories keep growing.
#[derive(Debug, Clone)]
pub struct Simulation {
    nucleon1: Nucleon,
    nucleon2: Nucleon,
    time_step: f64,
    params: YukawaParams,
    nucleon1_positions: Vec<Vector2<f64>>,
    nucleon2_positions: Vec<Vector2<f64>>,
}

/// Intermediate quantities of one step, kept for the checked path.
struct StepOutcome {
    force: Vector2<f64>,
    accel1: Vector2<f64>,
    accel2: Vector2<f64>,
}

impl Simulation {
    /// Bind two nucleons and a fixed time step, using the nuclear force constants.
    pub fn new(nucleon1: Nucleon, nucleon2: Nucleon, time_step: f64) -> Self {
        Self::with_params(nucleon1, nucleon2, time_step, YukawaParams::NUCLEAR)
    }

    pub fn with_params(
        nucleon1: Nucleon,
        nucleon2: Nucleon,
        time_step: f64,
        params: YukawaParams,
    ) -> Self {
        Self {
            nucleon1,
            nucleon2,
            time_step,
            params,
            nucleon1_positions: Vec::new(),
            nucleon2_positions: Vec::new(),
        }
    }

    /// Like [`Simulation::new`], but rejects an invalid initial state.
    pub fn try_new(nucleon1: Nucleon, nucleon2: Nucleon, time_step: f64) -> Result<Self> {
        let sim = Self::new(nucleon1, nucleon2, time_step);
        sim.validate()?;
        Ok(sim)
    }

    // -----------------------------------------------------------------------
    // Force law and diagnostics
    // -----------------------------------------------------------------------

    /// Force nucleon 1 feels from nucleon 2 at the current positions.
    pub fn calculate_force(&self) -> Vector2<f64> {
        yukawa::force_between(&self.nucleon1.position, &self.nucleon2.position, &self.params)
    }

    /// Yukawa potential energy of the pair (diagnostic constants).
    /// Not used by the stepping loop.
    pub fn potential_energy(&self) -> f64 {
        yukawa::potential_energy(
            &self.nucleon1.position,
            &self.nucleon2.position,
            &YukawaParams::DIAGNOSTIC,
        )
    }

    pub fn separation(&self) -> f64 {
        (self.nucleon1.position - self.nucleon2.position).norm()
    }

    // -----------------------------------------------------------------------
    // Integration
    // -----------------------------------------------------------------------

    /// Advance both nucleons by `num_steps` steps.
    ///
    /// Permissive: physically invalid states are not detected and NaN or
    /// infinity propagate into the trajectories. Use
    /// [`Simulation::integrate_checked`] to stop on the first failure.
    pub fn integrate(&mut self, num_steps: usize) {
        debug!(
            "integrate: {} steps from step {} (dt = {:e})",
            num_steps,
            self.steps_taken(),
            self.time_step
        );
        self.reserve(num_steps);
        for _ in 0..num_steps {
            self.step();
        }
        debug!("integrate: done, separation = {:e}", self.separation());
    }

    /// Advance by up to `num_steps` steps, stopping at the first invalid state.
    ///
    /// The initial state is validated first. Each step then rejects zero
    /// separation before the force is computed, and non-finite
    /// force/acceleration/velocity/position or |v| >= c after the update.
    /// Errors carry the 0-based global step index. Samples recorded before a
    /// failure, including the failing step's own sample when the failure is
    /// detected after the update, stay in the trajectories.
    pub fn integrate_checked(&mut self, num_steps: usize) -> Result<()> {
        debug!(
            "integrate_checked: {} steps from step {}",
            num_steps,
            self.steps_taken()
        );
        self.validate().inspect_err(|e| warn!("invalid initial state: {e}"))?;
        self.reserve(num_steps);

        for _ in 0..num_steps {
            let step = self.steps_taken();
            if self.separation() == 0.0 {
                let err = Error::DegenerateSeparation { step: Some(step) };
                warn!("{err}");
                return Err(err);
            }

            let outcome = self.step();
            self.check_step(&outcome, step)
                .inspect_err(|e| warn!("integration stopped: {e}"))?;
        }
        debug!("integrate_checked: done, separation = {:e}", self.separation());
        Ok(())
    }

    /// Check the current state without advancing it.
    pub fn validate(&self) -> Result<()> {
        if self.time_step <= 0.0 || !self.time_step.is_finite() {
            return Err(Error::InvalidTimeStep(self.time_step));
        }
        self.nucleon1.check(1, None)?;
        self.nucleon2.check(2, None)?;
        if self.separation() == 0.0 {
            return Err(Error::DegenerateSeparation { step: None });
        }
        Ok(())
    }

    /// One explicit step. The ordering is load-bearing:
    /// accelerations use the Lorentz factors cached at the end of the
    /// previous step, the factors are then refreshed from the velocities
    /// *before* this step's update, and only then are velocities and
    /// positions advanced.
    fn step(&mut self) -> StepOutcome {
        let dt = self.time_step;
        let force = self.calculate_force();

        let n1 = &self.nucleon1;
        let accel1 = relativistic_accel(&force, &n1.velocity, n1.mass(), n1.gamma());
        // Nucleon 2 negates the whole bracket, velocity correction included.
        // Since the correction is linear in F this is the bracket of -F.
        let n2 = &self.nucleon2;
        let accel2 = -relativistic_accel(&force, &n2.velocity, n2.mass(), n2.gamma());

        self.nucleon1.recompute_gamma();
        self.nucleon2.recompute_gamma();

        self.nucleon1.velocity += accel1 * dt;
        self.nucleon2.velocity += accel2 * dt;

        self.nucleon1.position += self.nucleon1.velocity * dt;
        self.nucleon2.position += self.nucleon2.velocity * dt;

        self.nucleon1_positions.push(self.nucleon1.position);
        self.nucleon2_positions.push(self.nucleon2.position);

        StepOutcome { force, accel1, accel2 }
    }

    fn check_step(&self, outcome: &StepOutcome, step: usize) -> Result<()> {
        let finite = |v: &Vector2<f64>| v.iter().all(|x| x.is_finite());
        if !finite(&outcome.force) {
            return Err(Error::NonFiniteResult { quantity: "force", step: Some(step) });
        }
        if !finite(&outcome.accel1) || !finite(&outcome.accel2) {
            return Err(Error::NonFiniteResult { quantity: "acceleration", step: Some(step) });
        }
        self.nucleon1.check(1, Some(step))?;
        self.nucleon2.check(2, Some(step))
    }

    fn reserve(&mut self, num_steps: usize) {
        self.nucleon1_positions.reserve(num_steps);
        self.nucleon2_positions.reserve(num_steps);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn nucleon1(&self) -> &Nucleon {
        &self.nucleon1
    }

    pub fn nucleon2(&self) -> &Nucleon {
        &self.nucleon2
    }

    pub fn nucleon1_position(&self) -> Vector2<f64> {
        self.nucleon1.position
    }

    pub fn nucleon2_position(&self) -> Vector2<f64> {
        self.nucleon2.position
    }

    pub fn nucleon1_velocity(&self) -> Vector2<f64> {
        self.nucleon1.velocity
    }

    pub fn nucleon2_velocity(&self) -> Vector2<f64> {
        self.nucleon2.velocity
    }

    /// Positions of nucleon 1, one per step, in time order.
    pub fn nucleon1_positions(&self) -> &[Vector2<f64>] {
        &self.nucleon1_positions
    }

    /// Positions of nucleon 2, one per step, in time order.
    pub fn nucleon2_positions(&self) -> &[Vector2<f64>] {
        &self.nucleon2_positions
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn params(&self) -> &YukawaParams {
        &self.params
    }

    pub fn steps_taken(&self) -> usize {
        self.nucleon1_positions.len()
    }

    /// Simulated time since construction.
    pub fn elapsed(&self) -> f64 {
        self.steps_taken() as f64 * self.time_step
    }

    /// Release both nucleons in their current state.
    pub fn into_nucleons(self) -> (Nucleon, Nucleon) {
        (self.nucleon1, self.nucleon2)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
