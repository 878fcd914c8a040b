use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Yukawa-type nuclear interaction
// ---------------------------------------------------------------------------

/// Coupling and range of a Yukawa interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YukawaParams {
    pub alpha: f64, // coupling
    pub r0: f64,    // range, distance units
}

impl YukawaParams {
    /// Constants used by the force law that drives the integrator.
    pub const NUCLEAR: YukawaParams = YukawaParams { alpha: 8.926365e-15, r0: 1.4e-15 };

    /// Constants used by the diagnostic potential energy.
    pub const DIAGNOSTIC: YukawaParams = YukawaParams { alpha: 1.0, r0: 1.0e-15 };

    /// Force magnitude at a given separation:
    /// (alpha^2 / r^2) * (1 + r/r0) * exp(-r/r0)
    pub fn force_magnitude(&self, distance: f64) -> f64 {
        (self.alpha.powi(2) / distance.powi(2))
            * (1.0 + distance / self.r0)
            * (-distance / self.r0).exp()
    }

    /// Potential energy at a given separation: -alpha^2 / r * exp(-r/r0)
    pub fn potential(&self, distance: f64) -> f64 {
        -self.alpha.powi(2) / distance * (-distance / self.r0).exp()
    }
}

impl Default for YukawaParams {
    fn default() -> Self {
        Self::NUCLEAR
    }
}

/// Force felt by the body at `pos1` from the body at `pos2`.
///
/// Points from `pos1` toward `pos2` (attractive). The partner feels the
/// negated vector; applying that sign is the caller's job.
/// Coincident positions are not guarded and give NaN components.
pub fn force_between(pos1: &Vector2<f64>, pos2: &Vector2<f64>, params: &YukawaParams) -> Vector2<f64> {
    let distance = (pos1 - pos2).norm();
    let magnitude = params.force_magnitude(distance);
    let direction = (pos2 - pos1) / distance;
    direction * magnitude
}

/// Yukawa potential energy of the pair.
pub fn potential_energy(pos1: &Vector2<f64>, pos2: &Vector2<f64>, params: &YukawaParams) -> f64 {
    params.potential((pos1 - pos2).norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_non_negative_and_decays() {
        let p = YukawaParams::NUCLEAR;
        let mut prev = f64::INFINITY;
        for i in 1..200 {
            let r = i as f64 * 0.1e-15;
            let f = p.force_magnitude(r);
            assert!(f >= 0.0, "negative magnitude at r={:e}", r);
            assert!(f < prev, "magnitude not decreasing at r={:e}", r);
            prev = f;
        }
        // 100 ranges out the exponential has killed it
        assert!(p.force_magnitude(100.0 * p.r0) < 1e-40);
    }

    #[test]
    fn magnitude_at_reference_separation() {
        // |(0.6e-14, 1e-15)|, the head-on preset's initial separation
        let f = YukawaParams::NUCLEAR.force_magnitude((0.36e-28f64 + 1e-30).sqrt());
        assert!((f - 0.149_329_505_598_294).abs() < 1e-12, "got {}", f);

        let f = YukawaParams::NUCLEAR.force_magnitude(0.6e-14);
        assert!((f - 0.161_023_180_470_198).abs() < 1e-12, "got {}", f);
    }

    #[test]
    fn force_points_toward_partner() {
        let p1 = Vector2::new(0.0, 0.0);
        let p2 = Vector2::new(2e-15, 0.0);
        let f = force_between(&p1, &p2, &YukawaParams::NUCLEAR);
        assert!(f.x > 0.0);
        assert!(f.y.abs() < 1e-30);

        let back = force_between(&p2, &p1, &YukawaParams::NUCLEAR);
        assert!((f + back).norm() < 1e-12 * f.norm());
    }

    #[test]
    fn direction_has_unit_norm() {
        let p = YukawaParams::NUCLEAR;
        let pairs = [
            (Vector2::new(0.0, 0.0), Vector2::new(0.6e-14, 1e-15)),
            (Vector2::new(-3e-15, 2e-15), Vector2::new(1e-15, -4e-15)),
            (Vector2::new(1e-16, 1e-16), Vector2::new(2e-16, 3e-16)),
        ];
        for (a, b) in pairs {
            let f = force_between(&a, &b, &p);
            let mag = p.force_magnitude((a - b).norm());
            let unit = f / mag;
            assert!((unit.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn coincident_positions_are_not_finite() {
        let p = Vector2::new(1e-15, 1e-15);
        let f = force_between(&p, &p, &YukawaParams::NUCLEAR);
        assert!(!f.x.is_finite());
    }

    #[test]
    fn potential_uses_diagnostic_constants() {
        let p1 = Vector2::new(0.0, 0.0);
        let p2 = Vector2::new(1.0e-15, 0.0);
        let u = potential_energy(&p1, &p2, &YukawaParams::DIAGNOSTIC);
        let expected = -1.0 / 1.0e-15 * (-1.0f64).exp();
        assert!((u - expected).abs() < 1e-12 * expected.abs());
        assert!(u < 0.0);
    }
}
