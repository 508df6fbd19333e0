//! Real (post-tax, post-inflation) bond return.
//!
//! The quoted coupon is reduced by TDS withholding, then GST, then
//! the inflation assumption. The published figure is floored at zero;
//! when the raw value is negative the composite calculation records a
//! warning carrying the true signed return.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::bonds::projection::project_growth;
use crate::error::FinPlanError;
use crate::records::{Bond, DEFAULT_INFLATION_RATE};
use crate::types::{check_percent_range, round_rate, with_metadata, ComputationOutput, Money, Percent};
use crate::FinPlanResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One year of the projected investment value, tagged with the real
/// return it was compounded at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearReturn {
    pub year: u32,
    pub value: i64,
    /// Real return at two decimal places
    pub real_return: Percent,
}

/// Output of the bond-returns calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondReturnsOutput {
    pub bond_name: String,
    pub investment_amount: Money,
    /// Quoted coupon before any deduction
    pub gross_return: Percent,
    /// Coupon after TDS withholding
    pub after_tax: Percent,
    /// After TDS and GST
    pub after_gst: Percent,
    /// Real return at two decimal places, floored at zero
    pub real_return: Percent,
    pub inflation_rate: Percent,
    pub projected_returns: Vec<YearReturn>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Real annual return of a coupon after TDS, GST, and inflation,
/// floored at zero. All rates are percentages in [0, 100].
pub fn real_return(
    coupon_rate: Percent,
    tds_rate: Percent,
    gst_rate: Percent,
    inflation_rate: Percent,
) -> FinPlanResult<Percent> {
    Ok(raw_real_return(coupon_rate, tds_rate, gst_rate, inflation_rate)?.max(Decimal::ZERO))
}

/// Full bond-returns calculation: deductions, clamped real return,
/// and a projection of the invested amount over the bond's maturity.
pub fn compute_bond_returns(
    bond: &Bond,
    investment_amount: Money,
    inflation_rate: Option<Percent>,
) -> FinPlanResult<ComputationOutput<BondReturnsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if investment_amount <= Decimal::ZERO {
        return Err(FinPlanError::invalid_input(
            "investment_amount",
            "amount must be greater than zero",
        ));
    }
    if bond.maturity_years == 0 {
        return Err(FinPlanError::invalid_input(
            "maturity_years",
            "bond maturity must be at least one year",
        ));
    }

    let inflation = inflation_rate.unwrap_or(DEFAULT_INFLATION_RATE);
    let raw = raw_real_return(bond.coupon_rate, bond.tds_rate, bond.gst_rate, inflation)?;
    let real = raw.max(Decimal::ZERO);

    if raw < Decimal::ZERO {
        warnings.push(format!(
            "Real return {raw}% is negative after deductions and inflation; floored at 0"
        ));
    }
    if investment_amount < bond.min_investment {
        warnings.push(format!(
            "Investment is below the bond's minimum of {}",
            bond.min_investment
        ));
    }

    let after_tax = bond.coupon_rate * (Decimal::ONE - bond.tds_rate / Decimal::ONE_HUNDRED);
    let after_gst = after_tax * (Decimal::ONE - bond.gst_rate / Decimal::ONE_HUNDRED);

    let real_display = round_rate(real, 2);
    let projected_returns = project_growth(investment_amount, real, bond.maturity_years)?
        .into_iter()
        .map(|point| YearReturn {
            year: point.year,
            value: point.value,
            real_return: real_display,
        })
        .collect();

    let output = BondReturnsOutput {
        bond_name: bond.name.clone(),
        investment_amount,
        gross_return: bond.coupon_rate,
        after_tax: round_rate(after_tax, 2),
        after_gst: round_rate(after_gst, 2),
        real_return: real_display,
        inflation_rate: inflation,
        projected_returns,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Real return — coupon less TDS and GST, adjusted for inflation, floored at zero",
        bond,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Signed real return before the zero floor.
fn raw_real_return(
    coupon_rate: Percent,
    tds_rate: Percent,
    gst_rate: Percent,
    inflation_rate: Percent,
) -> FinPlanResult<Percent> {
    check_percent_range("coupon_rate", coupon_rate)?;
    check_percent_range("tds_rate", tds_rate)?;
    check_percent_range("gst_rate", gst_rate)?;
    check_percent_range("inflation_rate", inflation_rate)?;

    let after_tax = coupon_rate * (Decimal::ONE - tds_rate / Decimal::ONE_HUNDRED);
    let after_gst = after_tax * (Decimal::ONE - gst_rate / Decimal::ONE_HUNDRED);
    Ok(after_gst - inflation_rate)
}
