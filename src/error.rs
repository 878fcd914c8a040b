use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Physically invalid states and bad input detected by the checked API.
///
/// The permissive path (`Nucleon::new`, `Simulation::integrate`) never
/// produces these; it lets NaN and infinity flow through the arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Mass must be strictly positive.
    #[error("nucleon {nucleon}: mass must be > 0, got {mass:e}")]
    InvalidMass { nucleon: usize, mass: f64 },

    /// |v| >= c, so the Lorentz factor is not real and finite.
    #[error("nucleon {nucleon}: speed {speed:e} is not below c{}", at_step(.step))]
    SuperluminalVelocity {
        nucleon: usize,
        speed: f64,
        step: Option<usize>,
    },

    /// The nucleons coincide; the force law divides by the separation.
    #[error("nucleons coincide (zero separation){}", at_step(.step))]
    DegenerateSeparation { step: Option<usize> },

    /// A computed quantity became NaN or infinite.
    #[error("non-finite {quantity}{}", at_step(.step))]
    NonFiniteResult {
        quantity: &'static str,
        step: Option<usize>,
    },

    /// Time step must be finite and > 0.
    #[error("time step must be finite and > 0, got {0:e}")]
    InvalidTimeStep(f64),

    /// Malformed user input (e.g. a coordinate pair that does not parse).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn at_step(step: &Option<usize>) -> String {
    match step {
        Some(i) => format!(" at step {i}"),
        None => String::new(),
    }
}

impl Error {
    /// Integration step at which the failure was detected, if any.
    pub fn step(&self) -> Option<usize> {
        match self {
            Error::SuperluminalVelocity { step, .. }
            | Error::DegenerateSeparation { step }
            | Error::NonFiniteResult { step, .. } => *step,
            _ => None,
        }
    }
}
