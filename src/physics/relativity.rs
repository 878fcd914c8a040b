use nalgebra::Vector2;

use crate::dynamics::SPEED_OF_LIGHT;

/// Acceleration of a body of rest mass `mass` and Lorentz factor `gamma`
/// under `force`, with the velocity-dependent correction:
///
///   a = (F - v (v . F) / c^2) / (m gamma)
pub fn relativistic_accel(force: &Vector2<f64>, velocity: &Vector2<f64>, mass: f64, gamma: f64) -> Vector2<f64> {
    bracket(force, velocity) * (1.0 / (mass * gamma))
}

/// F - v (v . F) / c^2
pub fn bracket(force: &Vector2<f64>, velocity: &Vector2<f64>) -> Vector2<f64> {
    force - (velocity / SPEED_OF_LIGHT.powi(2)) * velocity.dot(force)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtonian_at_rest() {
        let f = Vector2::new(2.0, -4.0);
        let a = relativistic_accel(&f, &Vector2::zeros(), 2.0, 1.0);
        assert_eq!(a, Vector2::new(1.0, -2.0));
    }

    #[test]
    fn perpendicular_force_scaled_by_gamma_only() {
        let v = Vector2::new(0.6 * SPEED_OF_LIGHT, 0.0);
        let f = Vector2::new(0.0, 1.0);
        let a = relativistic_accel(&f, &v, 1.0, 1.25);
        assert!(a.x.abs() < 1e-15);
        assert!((a.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn parallel_force_suppressed_by_gamma_cubed() {
        // Along v: a = F (1 - v^2/c^2) / (m gamma) = F / (m gamma^3)
        let v = Vector2::new(0.6 * SPEED_OF_LIGHT, 0.0);
        let f = Vector2::new(1.0, 0.0);
        let a = relativistic_accel(&f, &v, 1.0, 1.25);
        assert!((a.x - 1.0 / 1.25f64.powi(3)).abs() < 1e-12);
    }
}
