// src/error.rs
use std::fmt;

/// Error types for the option-pricer library
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A constructor or call received a value outside its contract
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A Monte Carlo price was requested before `simulate_prices`
    NotSimulated,
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PricingError::NotSimulated => {
                write!(
                    f,
                    "No simulation results available: call simulate_prices() before pricing"
                )
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for option-pricer operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        // NaN fails the comparison and is rejected too
        if value > 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PricingResult<()> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a count parameter (simulations, lattice steps)
    pub fn validate_count(name: &str, value: usize) -> PricingResult<()> {
        if value == 0 {
            Err(PricingError::InvalidParameter {
                parameter: name.to_string(),
                value: 0.0,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("spot_price", 100.0).is_ok());
        assert!(validate_positive("spot_price", 0.0).is_err());
        assert!(validate_positive("spot_price", -5.0).is_err());
        assert!(validate_positive("spot_price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("volatility", 0.2).is_ok());
        assert!(validate_non_negative("volatility", 0.0).is_ok());
        assert!(validate_non_negative("volatility", -0.1).is_err());
        assert!(validate_non_negative("volatility", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("risk_free_rate", 0.05).is_ok());
        assert!(validate_finite("risk_free_rate", f64::NAN).is_err());
        assert!(validate_finite("risk_free_rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(validate_count("number_of_simulations", 10_000).is_ok());
        assert!(validate_count("number_of_simulations", 0).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = PricingError::InvalidParameter {
            parameter: "strike_price".to_string(),
            value: -5.0,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("strike_price"));
        assert!(display.contains("-5"));
        assert!(display.contains("positive"));

        let display = format!("{}", PricingError::NotSimulated);
        assert!(display.contains("simulate_prices"));
    }
}
