// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function Φ(x), via erf
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf_reference_values() {
        // Abramowitz & Stegun table values
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((norm_cdf(0.35) - 0.636_830_6).abs() < 1e-6);
        assert!((norm_cdf(0.15) - 0.559_617_7).abs() < 1e-6);
        assert!((norm_cdf(1.96) - 0.975_002_1).abs() < 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.0, 2.5, 5.0] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert!(norm_cdf(-10.0) < 1e-15);
        assert!(norm_cdf(10.0) > 1.0 - 1e-15);
    }
}
