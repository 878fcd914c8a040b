use nalgebra::Vector2;

use super::simulation::Simulation;

/// Closest approach seen in the recorded trajectories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    pub step: usize,
    pub separation: f64,
}

/// Summary statistics computed from a finished (or partial) run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps: usize,
    pub elapsed: f64,
    pub closest_approach: Option<Approach>,
    pub final_separation: f64,
    pub final_positions: [Vector2<f64>; 2],
    pub final_velocities: [Vector2<f64>; 2],
    pub final_gammas: [f64; 2],
    /// Peak speed per nucleon, from finite differences of consecutive samples.
    pub peak_speeds: [f64; 2],
}

impl RunSummary {
    pub fn from_simulation(sim: &Simulation) -> Self {
        let p1 = sim.nucleon1_positions();
        let p2 = sim.nucleon2_positions();

        let closest_approach = p1
            .iter()
            .zip(p2)
            .enumerate()
            .map(|(step, (a, b))| Approach { step, separation: (a - b).norm() })
            .min_by(|a, b| a.separation.total_cmp(&b.separation));

        RunSummary {
            steps: sim.steps_taken(),
            elapsed: sim.elapsed(),
            closest_approach,
            final_separation: sim.separation(),
            final_positions: [sim.nucleon1_position(), sim.nucleon2_position()],
            final_velocities: [sim.nucleon1_velocity(), sim.nucleon2_velocity()],
            final_gammas: [sim.nucleon1().gamma(), sim.nucleon2().gamma()],
            peak_speeds: [
                peak_speed(p1, sim.time_step()),
                peak_speed(p2, sim.time_step()),
            ],
        }
    }
}

fn peak_speed(trajectory: &[Vector2<f64>], dt: f64) -> f64 {
    if dt <= 0.0 {
        return 0.0;
    }
    trajectory
        .windows(2)
        .map(|w| (w[1] - w[0]).norm() / dt)
        .fold(0.0_f64, f64::max)
}
