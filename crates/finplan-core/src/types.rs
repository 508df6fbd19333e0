use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::FinPlanError;
use crate::FinPlanResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates carried as percentages (7.5 = 7.5%), matching the REST
/// contract the engine serves. Never as decimal fractions.
pub type Percent = Decimal;

/// Round a monetary value to the nearest whole currency unit and
/// return it as an integer. Midpoint rounds away from zero, so
/// 0.5 becomes 1 rather than 0.
pub fn round_currency(amount: Money) -> FinPlanResult<i64> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| FinPlanError::Overflow {
            context: format!("rounding {amount} to a currency unit"),
        })
}

/// Round a rate for display at the given number of decimal places.
/// The result is rescaled so it serializes with exactly `dp`
/// fractional digits (2.3 at two places renders "2.30"). The
/// unrounded value is never fed back into a computation.
pub fn round_rate(rate: Percent, dp: u32) -> Percent {
    let mut rounded = rate.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Validate that a percentage lies in [0, 100].
pub fn check_percent_range(field: &str, value: Percent) -> FinPlanResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(FinPlanError::invalid_input(
            field,
            "must be a percentage between 0 and 100",
        ));
    }
    Ok(())
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec!(10.5)).unwrap(), 11);
        assert_eq!(round_currency(dec!(10.4999)).unwrap(), 10);
        assert_eq!(round_currency(dec!(-10.5)).unwrap(), -11);
        assert_eq!(round_currency(dec!(0)).unwrap(), 0);
    }

    #[test]
    fn test_round_rate_keeps_fixed_decimal_places() {
        // Short values pad out to the requested scale
        assert_eq!(round_rate(dec!(2.3), 2).to_string(), "2.30");
        assert_eq!(round_rate(dec!(0), 1).to_string(), "0.0");
        assert_eq!(round_rate(dec!(100), 1).to_string(), "100.0");
        // Long values round midpoint-away-from-zero
        assert_eq!(round_rate(dec!(0.535), 2).to_string(), "0.54");
        assert_eq!(round_rate(dec!(-900), 1).to_string(), "-900.0");
    }

    #[test]
    fn test_percent_range_bounds_inclusive() {
        assert!(check_percent_range("r", dec!(0)).is_ok());
        assert!(check_percent_range("r", dec!(100)).is_ok());
        assert!(check_percent_range("r", dec!(100.01)).is_err());
        assert!(check_percent_range("r", dec!(-0.01)).is_err());
    }
}
