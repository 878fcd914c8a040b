pub mod dynamics;
pub mod error;
pub mod physics;
pub mod scenario;
pub mod sim;

pub use dynamics::{Nucleon, SPEED_OF_LIGHT};
pub use error::{Error, Result};
pub use scenario::{presets, Scenario, ScenarioBuilder};
pub use sim::{RunSummary, Simulation};
