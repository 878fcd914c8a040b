pub mod nucleon;

pub use nucleon::{lorentz_gamma, Nucleon, SPEED_OF_LIGHT};
