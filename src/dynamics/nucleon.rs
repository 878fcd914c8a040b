use nalgebra::Vector2;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const SPEED_OF_LIGHT: f64 = 3.0e8; // distance units per time unit

/// Lorentz factor 1 / sqrt(1 - |v|^2 / c^2).
///
/// Not guarded: |v| >= c gives NaN or infinity.
pub fn lorentz_gamma(velocity: &Vector2<f64>) -> f64 {
    1.0 / (1.0 - velocity.norm().powi(2) / SPEED_OF_LIGHT.powi(2)).sqrt()
}

// ---------------------------------------------------------------------------
// Nucleon: instantaneous relativistic kinematic state
// ---------------------------------------------------------------------------

/// One particle's mass, position, velocity and cached Lorentz factor.
///
/// `gamma` is cached, not derived on read: it only changes when
/// [`Nucleon::recompute_gamma`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Nucleon {
    mass: f64,
    pub(crate) position: Vector2<f64>,
    pub(crate) velocity: Vector2<f64>,
    gamma: f64,
}

impl Nucleon {
    /// Build a nucleon without validation.
    ///
    /// A speed at or above c yields a non-finite `gamma`; that is the
    /// caller's responsibility. See [`Nucleon::try_new`] for the checked form.
    pub fn new(mass: f64, position: Vector2<f64>, velocity: Vector2<f64>) -> Self {
        Self {
            mass,
            position,
            velocity,
            gamma: lorentz_gamma(&velocity),
        }
    }

    /// Build a nucleon, rejecting non-positive mass and |v| >= c.
    /// `index` (1 or 2) is only used to label the error.
    pub fn try_new(
        index: usize,
        mass: f64,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
    ) -> Result<Self> {
        let nucleon = Self::new(mass, position, velocity);
        nucleon.check(index, None)?;
        Ok(nucleon)
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Refresh the cached Lorentz factor from the current velocity.
    pub fn recompute_gamma(&mut self) {
        self.gamma = lorentz_gamma(&self.velocity);
    }

    /// Physical validity of this record: mass, speed, finiteness.
    pub(crate) fn check(&self, index: usize, step: Option<usize>) -> Result<()> {
        if self.mass.is_nan() || self.mass <= 0.0 {
            return Err(Error::InvalidMass { nucleon: index, mass: self.mass });
        }
        let speed = self.speed();
        if speed >= SPEED_OF_LIGHT {
            return Err(Error::SuperluminalVelocity { nucleon: index, speed, step });
        }
        if !self.position.iter().all(|x| x.is_finite()) {
            return Err(Error::NonFiniteResult { quantity: "position", step });
        }
        if !self.velocity.iter().all(|x| x.is_finite()) {
            return Err(Error::NonFiniteResult { quantity: "velocity", step });
        }
        if !self.gamma.is_finite() {
            return Err(Error::NonFiniteResult { quantity: "gamma", step });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTON_MASS: f64 = 1.67e-27;

    #[test]
    fn gamma_is_one_at_rest() {
        let n = Nucleon::new(PROTON_MASS, Vector2::zeros(), Vector2::zeros());
        assert_eq!(n.gamma(), 1.0);
    }

    #[test]
    fn gamma_at_least_one_and_monotonic_in_speed() {
        let mut prev = 1.0;
        for i in 0..100 {
            let speed = SPEED_OF_LIGHT * (i as f64) / 100.0;
            let g = lorentz_gamma(&Vector2::new(speed * 0.6, speed * 0.8));
            assert!(g >= 1.0, "gamma {} < 1 at speed {:e}", g, speed);
            assert!(g >= prev, "gamma not monotonic at speed {:e}", speed);
            prev = g;
        }
        assert!(prev > 7.0, "gamma at 0.99c should be ~7.09, got {}", prev);
    }

    #[test]
    fn gamma_matches_closed_form() {
        // 0.6c -> gamma = 1.25
        let v = Vector2::new(0.0, 0.6 * SPEED_OF_LIGHT);
        assert!((lorentz_gamma(&v) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn gamma_is_cached_until_recomputed() {
        let mut n = Nucleon::new(PROTON_MASS, Vector2::zeros(), Vector2::new(1e7, 0.0));
        let g0 = n.gamma();
        n.velocity = Vector2::new(2e8, 0.0);
        assert_eq!(n.gamma(), g0);
        n.recompute_gamma();
        assert!(n.gamma() > g0);
    }

    #[test]
    fn superluminal_gamma_is_not_finite() {
        let n = Nucleon::new(PROTON_MASS, Vector2::zeros(), Vector2::new(SPEED_OF_LIGHT, 0.0));
        assert!(!n.gamma().is_finite());
        let n = Nucleon::new(PROTON_MASS, Vector2::zeros(), Vector2::new(4e8, 0.0));
        assert!(n.gamma().is_nan());
    }

    #[test]
    fn try_new_rejects_bad_mass_and_speed() {
        let err = Nucleon::try_new(1, 0.0, Vector2::zeros(), Vector2::zeros()).unwrap_err();
        assert_eq!(err, Error::InvalidMass { nucleon: 1, mass: 0.0 });

        let err = Nucleon::try_new(2, PROTON_MASS, Vector2::zeros(), Vector2::new(0.0, 3.0e8))
            .unwrap_err();
        assert!(matches!(err, Error::SuperluminalVelocity { nucleon: 2, step: None, .. }));

        assert!(Nucleon::try_new(1, PROTON_MASS, Vector2::zeros(), Vector2::new(1e7, 1e-15)).is_ok());
    }

    #[test]
    fn try_new_rejects_nan_mass() {
        let err = Nucleon::try_new(1, f64::NAN, Vector2::zeros(), Vector2::zeros()).unwrap_err();
        assert!(matches!(err, Error::InvalidMass { nucleon: 1, .. }));
    }
}
