use anyhow::Result;
use clap::Parser;
use log::info;

use nucleon_sim::scenario::{parse_pair, NucleonSpec};
use nucleon_sim::{presets, RunSummary, Scenario, Simulation};

/// Relativistic two-nucleon simulation under a Yukawa nuclear force.
///
/// Coordinates are given as "x, y". Defaults reproduce the head-on preset.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Mass of nucleon 1
    #[arg(long, default_value_t = presets::NUCLEON_MASS)]
    mass1: f64,
    /// Mass of nucleon 2
    #[arg(long, default_value_t = presets::NUCLEON_MASS)]
    mass2: f64,
    /// Initial position of nucleon 1, "x, y"
    #[arg(long, default_value = "0.0, 0.0", allow_hyphen_values = true)]
    pos1: String,
    /// Initial velocity of nucleon 1, "x, y"
    #[arg(long, default_value = "1e7, 1e-15", allow_hyphen_values = true)]
    vel1: String,
    /// Initial position of nucleon 2, "x, y"
    #[arg(long, default_value = "0.6e-14, 1e-15", allow_hyphen_values = true)]
    pos2: String,
    /// Initial velocity of nucleon 2, "x, y"
    #[arg(long, default_value = "-1e7, 1e-15", allow_hyphen_values = true)]
    vel2: String,
    /// Integration time step
    #[arg(long, default_value_t = 1e-25)]
    dt: f64,
    /// Number of integration steps
    #[arg(long, default_value_t = 6000)]
    steps: usize,
    /// Stop on the first physically invalid state instead of propagating NaN
    #[arg(long)]
    strict: bool,
    /// Rows in the printed trajectory table
    #[arg(long, default_value_t = 30)]
    samples: usize,
}

impl Args {
    fn scenario(&self) -> Result<Scenario> {
        Ok(Scenario {
            nucleon1: NucleonSpec::new(self.mass1, parse_pair(&self.pos1)?, parse_pair(&self.vel1)?),
            nucleon2: NucleonSpec::new(self.mass2, parse_pair(&self.pos2)?, parse_pair(&self.vel2)?),
            time_step: self.dt,
            num_steps: self.steps,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let scenario = args.scenario()?;

    info!(
        "running {} steps, dt = {:e}{}",
        scenario.num_steps,
        scenario.time_step,
        if args.strict { " (strict)" } else { "" }
    );

    let sim = if args.strict {
        scenario.run_checked()?
    } else {
        scenario.run()
    };

    print_report(&scenario, &sim, args.samples);
    Ok(())
}

fn print_report(scenario: &Scenario, sim: &Simulation, samples: usize) {
    let initial = scenario.simulation();
    let summary = RunSummary::from_simulation(sim);

    println!();
    println!("====================================================================");
    println!("  RELATIVISTIC TWO-NUCLEON SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Initial Conditions");
    println!("  ──────────────────────────────────────────────────────────────────");
    for (i, (spec, n)) in [
        (&scenario.nucleon1, initial.nucleon1()),
        (&scenario.nucleon2, initial.nucleon2()),
    ]
    .into_iter()
    .enumerate()
    {
        println!(
            "  Nucleon {}   m={:.4e}   r=({:.4e}, {:.4e})   v=({:.4e}, {:.4e})   gamma={:.9}",
            i + 1,
            spec.mass,
            spec.position.x,
            spec.position.y,
            spec.velocity.x,
            spec.velocity.y,
            n.gamma()
        );
    }
    println!(
        "  Separation: {:.4e}   dt: {:e}   steps: {}",
        initial.separation(),
        scenario.time_step,
        scenario.num_steps
    );
    println!();

    println!("  Run Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Steps taken:      {:>8}      Elapsed: {:.4e}", summary.steps, summary.elapsed);
    match summary.closest_approach {
        Some(a) => println!(
            "  Closest approach: {:.4e} at step {}",
            a.separation, a.step
        ),
        None => println!("  Closest approach: n/a (no steps)"),
    }
    println!("  Final separation: {:.4e}", summary.final_separation);
    for i in 0..2 {
        println!(
            "  Nucleon {}   r=({:.4e}, {:.4e})   v=({:.4e}, {:.4e})   gamma={:.9}   peak |v|={:.4e}",
            i + 1,
            summary.final_positions[i].x,
            summary.final_positions[i].y,
            summary.final_velocities[i].x,
            summary.final_velocities[i].y,
            summary.final_gammas[i],
            summary.peak_speeds[i],
        );
    }
    println!();

    let p1 = sim.nucleon1_positions();
    let p2 = sim.nucleon2_positions();
    if !p1.is_empty() && samples > 0 {
        println!("  Trajectory");
        println!("  ──────────────────────────────────────────────────────────────────");
        println!(
            "  {:>6}  {:>12}  {:>12}  {:>12}  {:>12}  {:>11}",
            "step", "x1", "y1", "x2", "y2", "sep"
        );
        println!("  {}", "─".repeat(74));

        let interval = (p1.len() / samples).max(1);
        for (i, (a, b)) in p1.iter().zip(p2).enumerate() {
            if i % interval != 0 && i != p1.len() - 1 {
                continue;
            }
            println!(
                "  {:>6}  {:>12.4e}  {:>12.4e}  {:>12.4e}  {:>12.4e}  {:>11.4e}",
                i,
                a.x,
                a.y,
                b.x,
                b.y,
                (a - b).norm()
            );
        }
    }

    println!();
    println!("====================================================================");
    println!();
}
