pub mod relativity;
pub mod yukawa;

pub use relativity::relativistic_accel;
pub use yukawa::{force_between, potential_energy, YukawaParams};
