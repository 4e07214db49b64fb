// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-9;
    pub const SQRT_2: f64 = std::f64::consts::SQRT_2;
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const PI: f64 = std::f64::consts::PI;
    pub const PI_OVER_2: f64 = std::f64::consts::FRAC_PI_2;
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::TAU;

    /// Normalisiert einen Winkel auf [0, 2π)
    pub fn normalize_angle(angle: f64) -> f64 {
        let result = angle.rem_euclid(TAU);
        // rem_euclid kann bei sehr kleinen negativen Werten genau TAU liefern
        if result >= TAU { 0.0 } else { result }
    }

    /// Überstrichener Winkel von `from` nach `to` gegen den Uhrzeigersinn, in [0, 2π).
    pub fn ccw_sweep(from: f64, to: f64) -> f64 {
        normalize_angle(to - from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_angle() {
        assert_relative_eq!(
            angles::normalize_angle(-constants::PI_OVER_2),
            3.0 * constants::PI_OVER_2
        );
        assert_relative_eq!(angles::normalize_angle(constants::TAU + 0.5), 0.5, epsilon = 1e-12);
        assert!(angles::normalize_angle(-1e-18) < constants::TAU);
    }

    #[test]
    fn test_ccw_sweep_wraps() {
        let sweep = angles::ccw_sweep(3.0 * constants::PI_OVER_2, 0.0);
        assert_relative_eq!(sweep, constants::PI_OVER_2);
    }
}
