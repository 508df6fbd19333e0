//! Year-by-year compound growth projection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinPlanError;
use crate::types::{round_currency, Money, Percent};
use crate::FinPlanResult;

/// Cap on projection length; bounds per-call work for a
/// caller-controlled input.
pub const MAX_PROJECTION_YEARS: u32 = 200;

/// Projected value at the end of one year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    /// Running value rounded to whole currency units for display
    pub value: i64,
}

/// Project compound growth of `initial_amount` at a flat annual rate.
///
/// Returns exactly `years` points indexed 1..=years. Each point is
/// rounded to a whole currency unit at emission only; the running
/// total stays unrounded between years so no rounding error compounds
/// into later entries.
pub fn project_growth(
    initial_amount: Money,
    annual_return_percent: Percent,
    years: u32,
) -> FinPlanResult<Vec<GrowthPoint>> {
    if initial_amount <= Decimal::ZERO {
        return Err(FinPlanError::invalid_input(
            "initial_amount",
            "amount must be greater than zero",
        ));
    }
    if years == 0 {
        return Err(FinPlanError::invalid_input(
            "years",
            "projection needs at least one year",
        ));
    }
    if years > MAX_PROJECTION_YEARS {
        return Err(FinPlanError::invalid_input(
            "years",
            "projection exceeds the supported maximum of 200 years",
        ));
    }
    if annual_return_percent < dec!(-100) {
        return Err(FinPlanError::invalid_input(
            "annual_return_percent",
            "a return below -100% is not meaningful",
        ));
    }

    let growth_factor = Decimal::ONE + annual_return_percent / Decimal::ONE_HUNDRED;
    let mut running = initial_amount;
    let mut points = Vec::with_capacity(years as usize);

    for year in 1..=years {
        running *= growth_factor;
        points.push(GrowthPoint {
            year,
            value: round_currency(running)?,
        });
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // -----------------------------------------------------------------------
    // 1. Length, contiguity, and monotonicity for a positive rate
    // -----------------------------------------------------------------------
    #[test]
    fn test_positive_rate_strictly_increasing() {
        let points = project_growth(dec!(100000), dec!(7.5), 10).unwrap();

        assert_eq!(points.len(), 10);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.year, i as u32 + 1);
        }
        for pair in points.windows(2) {
            assert!(pair[1].value > pair[0].value);
        }
    }

    // -----------------------------------------------------------------------
    // 2. Display rounding never feeds back into the running total
    // -----------------------------------------------------------------------
    #[test]
    fn test_rounding_does_not_drift() {
        // 10% on 1005: year one emits round(1105.5) = 1106, but year
        // two must compound from 1105.5, giving round(1216.05) = 1216
        // rather than round(1106 * 1.1) = 1217.
        let points = project_growth(dec!(1005), dec!(10), 2).unwrap();
        assert_eq!(points[0].value, 1106);
        assert_eq!(points[1].value, 1216);
    }

    // -----------------------------------------------------------------------
    // 3. Zero rate projects a flat line
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_rate_flat() {
        let points = project_growth(dec!(50000), dec!(0), 5).unwrap();
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.value == 50_000));
    }

    // -----------------------------------------------------------------------
    // 4. Negative rate decays toward zero
    // -----------------------------------------------------------------------
    #[test]
    fn test_negative_rate_decays() {
        let points = project_growth(dec!(10000), dec!(-50), 3).unwrap();
        assert_eq!(points[0].value, 5_000);
        assert_eq!(points[1].value, 2_500);
        assert_eq!(points[2].value, 1_250);
    }

    // -----------------------------------------------------------------------
    // 5. Validation failures
    // -----------------------------------------------------------------------
    #[test]
    fn test_rejects_bad_inputs() {
        assert!(project_growth(dec!(0), dec!(5), 10).is_err());
        assert!(project_growth(dec!(-100), dec!(5), 10).is_err());
        assert!(project_growth(dec!(1000), dec!(5), 0).is_err());
        assert!(project_growth(dec!(1000), dec!(5), 201).is_err());
        assert!(project_growth(dec!(1000), dec!(-101), 10).is_err());
    }
}
