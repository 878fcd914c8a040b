use nalgebra::Vector2;

use crate::dynamics::Nucleon;
use crate::error::{Error, Result};
use crate::sim::Simulation;

// ---------------------------------------------------------------------------
// Initial conditions for one nucleon
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct NucleonSpec {
    pub mass: f64,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
}

impl NucleonSpec {
    pub fn new(mass: f64, position: Vector2<f64>, velocity: Vector2<f64>) -> Self {
        Self { mass, position, velocity }
    }

    pub fn to_nucleon(&self) -> Nucleon {
        Nucleon::new(self.mass, self.position, self.velocity)
    }
}

// ---------------------------------------------------------------------------
// Scenario: everything a run needs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub nucleon1: NucleonSpec,
    pub nucleon2: NucleonSpec,
    pub time_step: f64,
    pub num_steps: usize,
}

impl Scenario {
    /// Build the simulation without validating the initial state.
    pub fn simulation(&self) -> Simulation {
        Simulation::new(self.nucleon1.to_nucleon(), self.nucleon2.to_nucleon(), self.time_step)
    }

    /// Build the simulation, rejecting an invalid initial state.
    pub fn try_simulation(&self) -> Result<Simulation> {
        let n1 = Nucleon::try_new(1, self.nucleon1.mass, self.nucleon1.position, self.nucleon1.velocity)?;
        let n2 = Nucleon::try_new(2, self.nucleon2.mass, self.nucleon2.position, self.nucleon2.velocity)?;
        Simulation::try_new(n1, n2, self.time_step)
    }

    /// Build and integrate for `num_steps` steps (permissive).
    pub fn run(&self) -> Simulation {
        let mut sim = self.simulation();
        sim.integrate(self.num_steps);
        sim
    }

    /// Build and integrate for `num_steps` steps, stopping on the first failure.
    pub fn run_checked(&self) -> Result<Simulation> {
        let mut sim = self.try_simulation()?;
        sim.integrate_checked(self.num_steps)?;
        Ok(sim)
    }
}

// ---------------------------------------------------------------------------
// Scenario builder
// ---------------------------------------------------------------------------

pub struct ScenarioBuilder {
    nucleon1: NucleonSpec,
    nucleon2: NucleonSpec,
    time_step: f64,
    num_steps: usize,
}

impl ScenarioBuilder {
    /// Starts from the head-on preset.
    pub fn new() -> Self {
        let s = presets::head_on();
        Self {
            nucleon1: s.nucleon1,
            nucleon2: s.nucleon2,
            time_step: s.time_step,
            num_steps: s.num_steps,
        }
    }

    pub fn mass1(mut self, v: f64) -> Self { self.nucleon1.mass = v; self }
    pub fn mass2(mut self, v: f64) -> Self { self.nucleon2.mass = v; self }
    pub fn position1(mut self, v: Vector2<f64>) -> Self { self.nucleon1.position = v; self }
    pub fn position2(mut self, v: Vector2<f64>) -> Self { self.nucleon2.position = v; self }
    pub fn velocity1(mut self, v: Vector2<f64>) -> Self { self.nucleon1.velocity = v; self }
    pub fn velocity2(mut self, v: Vector2<f64>) -> Self { self.nucleon2.velocity = v; self }
    pub fn time_step(mut self, v: f64) -> Self { self.time_step = v; self }
    pub fn num_steps(mut self, v: usize) -> Self { self.num_steps = v; self }

    pub fn build(self) -> Scenario {
        Scenario {
            nucleon1: self.nucleon1,
            nucleon2: self.nucleon2,
            time_step: self.time_step,
            num_steps: self.num_steps,
        }
    }
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Text input
// ---------------------------------------------------------------------------

/// Parse a coordinate pair written as `"x, y"`.
pub fn parse_pair(text: &str) -> Result<Vector2<f64>> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(Error::InvalidInput(format!(
            "expected two comma-separated numbers, got {:?}",
            text
        )));
    }
    let mut out = [0.0; 2];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| Error::InvalidInput(format!("{:?} in {:?}: {}", part, text, e)))?;
    }
    Ok(Vector2::new(out[0], out[1]))
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    pub const NUCLEON_MASS: f64 = 1.67e-27;

    /// Two nucleons approaching almost head-on with slight vertical offset.
    pub fn head_on() -> Scenario {
        Scenario {
            nucleon1: NucleonSpec::new(
                NUCLEON_MASS,
                Vector2::new(0.0, 0.0),
                Vector2::new(1e7, 1e-15),
            ),
            nucleon2: NucleonSpec::new(
                NUCLEON_MASS,
                Vector2::new(0.6e-14, 1e-15),
                Vector2::new(-1e7, 1e-15),
            ),
            time_step: 1e-25,
            num_steps: 6000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_accepts_spacing_and_exponents() {
        assert_eq!(parse_pair("0.0, 0.0").unwrap(), Vector2::new(0.0, 0.0));
        assert_eq!(parse_pair("1e7,1e-15").unwrap(), Vector2::new(1e7, 1e-15));
        assert_eq!(parse_pair("  -1e7 ,  1e-15 ").unwrap(), Vector2::new(-1e7, 1e-15));
        assert_eq!(parse_pair("0.6e-14, 1e-15").unwrap(), Vector2::new(0.6e-14, 1e-15));
    }

    #[test]
    fn parse_pair_rejects_malformed() {
        for bad in ["", "1.0", "1, 2, 3", "a, 1", "1,", "1;2"] {
            let err = parse_pair(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{:?} should fail", bad);
        }
    }

    #[test]
    fn builder_overrides_preset() {
        let s = ScenarioBuilder::new()
            .mass2(1.675e-27)
            .velocity1(Vector2::new(2e7, 0.0))
            .num_steps(10)
            .build();
        assert_eq!(s.nucleon2.mass, 1.675e-27);
        assert_eq!(s.nucleon1.velocity, Vector2::new(2e7, 0.0));
        assert_eq!(s.num_steps, 10);
        assert_eq!(s.nucleon1.position, presets::head_on().nucleon1.position);
    }

    #[test]
    fn run_produces_requested_length() {
        let s = ScenarioBuilder::new().num_steps(250).build();
        let sim = s.run();
        assert_eq!(sim.nucleon1_positions().len(), 250);
        assert_eq!(sim.nucleon2_positions().len(), 250);

        let checked = s.run_checked().unwrap();
        assert_eq!(checked.nucleon1_positions(), sim.nucleon1_positions());
    }

    #[test]
    fn run_checked_reports_bad_input() {
        let s = ScenarioBuilder::new().mass1(0.0).build();
        assert!(matches!(s.run_checked(), Err(Error::InvalidMass { nucleon: 1, .. })));

        let s = ScenarioBuilder::new().time_step(0.0).build();
        assert!(matches!(s.run_checked(), Err(Error::InvalidTimeStep(_))));

        let s = ScenarioBuilder::new()
            .position2(Vector2::new(0.0, 0.0))
            .build();
        assert!(matches!(s.run_checked(), Err(Error::DegenerateSeparation { step: None })));
    }
}
