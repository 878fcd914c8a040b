pub mod simulation;
pub mod summary;

pub use simulation::Simulation;
pub use summary::{Approach, RunSummary};
