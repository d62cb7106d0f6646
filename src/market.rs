// src/market.rs
//! Inbound boundary for market data
//!
//! The core never fetches or caches quotes itself; a host-side market data
//! provider hands it a historical close series, and the only thing the core
//! takes from it is the latest close to seed `spot_price`. A non-positive or
//! missing spot is rejected with `InvalidParameter`.

use crate::error::{PricingError, PricingResult};
use chrono::{DateTime, Utc};

/// One observation of a historical close series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Extract the spot price from an ordered historical series: the close of
/// the last observation.
pub fn spot_from_series(series: &[PricePoint]) -> PricingResult<f64> {
    let last = series.last().ok_or_else(|| PricingError::InvalidParameter {
        parameter: "historical_series".to_string(),
        value: 0.0,
        constraint: "must contain at least one observation".to_string(),
    })?;

    if last.close > 0.0 {
        Ok(last.close)
    } else {
        Err(PricingError::InvalidParameter {
            parameter: "spot_price".to_string(),
            value: last.close,
            constraint: "must be positive (> 0)".to_string(),
        })
    }
}
