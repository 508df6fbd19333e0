//! Equated Monthly Installment (EMI) calculator.
//!
//! Standard amortization: a fixed payment that fully repays the
//! principal over the tenure at the quoted annual rate. A zero-rate
//! loan degenerates to straight-line repayment.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::types::{round_currency, with_metadata, ComputationOutput, Money, Percent};
use crate::FinPlanResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Months per year times percent-to-fraction: annual% / 1200 = monthly rate.
const MONTHLY_RATE_DIVISOR: Decimal = dec!(1200);

/// Upper bound on tenure, keeps the compounding exponent sane.
const MAX_TENURE_YEARS: u32 = 100;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the EMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiInput {
    /// Principal borrowed, in whole currency units
    pub loan_amount: Money,
    /// Annual interest rate as a percentage (8.5 = 8.5%)
    pub interest_rate: Percent,
    /// Repayment tenure in years
    pub tenure_years: u32,
}

/// Output of the EMI calculation. Monetary results are rounded to
/// whole currency units; the inputs are echoed for the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiOutput {
    /// Fixed monthly payment
    pub emi: i64,
    /// EMI times the number of payments
    pub total_amount: i64,
    /// Total amount less the principal
    pub total_interest: i64,
    pub number_of_payments: u32,
    pub loan_amount: Money,
    pub interest_rate: Percent,
    pub tenure_years: u32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The unrounded monthly installment for a loan.
///
/// Fails with `InvalidInput` on a non-positive principal or tenure, or
/// a negative rate, rather than computing garbage.
pub fn monthly_installment(
    principal: Money,
    annual_rate_percent: Percent,
    tenure_years: u32,
) -> FinPlanResult<Decimal> {
    if principal <= Decimal::ZERO {
        return Err(FinPlanError::invalid_input(
            "loan_amount",
            "principal must be greater than zero",
        ));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(FinPlanError::invalid_input(
            "interest_rate",
            "annual rate must not be negative",
        ));
    }
    if tenure_years == 0 {
        return Err(FinPlanError::invalid_input(
            "tenure_years",
            "tenure must be at least one year",
        ));
    }
    if tenure_years > MAX_TENURE_YEARS {
        return Err(FinPlanError::invalid_input(
            "tenure_years",
            "tenure exceeds the supported maximum of 100 years",
        ));
    }

    let number_of_payments = Decimal::from(tenure_years * 12);
    let monthly_rate = annual_rate_percent / MONTHLY_RATE_DIVISOR;

    // Zero-rate loans straight-line the principal; the compound
    // formula would divide by zero.
    if monthly_rate.is_zero() {
        return Ok(principal / number_of_payments);
    }

    let factor = (Decimal::ONE + monthly_rate).powu(u64::from(tenure_years) * 12);
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(FinPlanError::DivisionByZero {
            context: "EMI compounding factor".into(),
        });
    }

    Ok(principal * monthly_rate * factor / denominator)
}

/// Compute the EMI and its derived totals for a loan.
pub fn compute_emi(input: &EmiInput) -> FinPlanResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();

    let emi = monthly_installment(input.loan_amount, input.interest_rate, input.tenure_years)?;

    let number_of_payments = input.tenure_years * 12;
    // Totals derive from the unrounded installment; rounding is
    // applied once, at emission.
    let total_amount = emi * Decimal::from(number_of_payments);
    let total_interest = total_amount - input.loan_amount;

    let output = EmiOutput {
        emi: round_currency(emi)?,
        total_amount: round_currency(total_amount)?,
        total_interest: round_currency(total_interest)?,
        number_of_payments,
        loan_amount: input.loan_amount,
        interest_rate: input.interest_rate,
        tenure_years: input.tenure_years,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "EMI — fixed-payment amortization at a monthly compounding rate",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn emi_input(loan_amount: Decimal, interest_rate: Decimal, tenure_years: u32) -> EmiInput {
        EmiInput {
            loan_amount,
            interest_rate,
            tenure_years,
        }
    }

    // -----------------------------------------------------------------------
    // 1. Zero-rate loan straight-lines the principal
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_rate_straight_line() {
        let result = compute_emi(&emi_input(dec!(1200000), dec!(0), 10)).unwrap();
        let out = &result.result;

        assert_eq!(out.emi, 10_000);
        assert_eq!(out.total_amount, 1_200_000);
        assert_eq!(out.total_interest, 0);
        assert_eq!(out.number_of_payments, 120);
    }

    // -----------------------------------------------------------------------
    // 2. Known value: 10L at 8.5% over 20 years
    // -----------------------------------------------------------------------
    #[test]
    fn test_known_home_loan_emi() {
        let result = compute_emi(&emi_input(dec!(1000000), dec!(8.5), 20)).unwrap();
        let out = &result.result;

        assert_eq!(out.emi, 8_678);
        assert_eq!(out.number_of_payments, 240);
        // Totals come from the unrounded installment
        assert_eq!(out.total_amount, out.total_interest + 1_000_000);
        assert!(out.total_interest > 1_000_000, "20y at 8.5% more than doubles the outlay");
    }

    // -----------------------------------------------------------------------
    // 3. One-year loan at a modest rate pays little interest
    // -----------------------------------------------------------------------
    #[test]
    fn test_short_tenure_small_interest() {
        let result = compute_emi(&emi_input(dec!(120000), dec!(6), 1)).unwrap();
        let out = &result.result;

        assert_eq!(out.number_of_payments, 12);
        assert!(out.emi > 10_000, "must exceed the zero-rate installment");
        assert!(out.total_interest > 0);
        assert!(out.total_interest < 6_000);
    }

    // -----------------------------------------------------------------------
    // 4. Validation failures
    // -----------------------------------------------------------------------
    #[test]
    fn test_rejects_bad_inputs() {
        assert!(compute_emi(&emi_input(dec!(0), dec!(8), 10)).is_err());
        assert!(compute_emi(&emi_input(dec!(-5000), dec!(8), 10)).is_err());
        assert!(compute_emi(&emi_input(dec!(100000), dec!(-1), 10)).is_err());
        assert!(compute_emi(&emi_input(dec!(100000), dec!(8), 0)).is_err());
        assert!(compute_emi(&emi_input(dec!(100000), dec!(8), 101)).is_err());
    }

    // -----------------------------------------------------------------------
    // 5. Pure mapping: identical inputs, identical outputs
    // -----------------------------------------------------------------------
    #[test]
    fn test_idempotent() {
        let input = emi_input(dec!(750000), dec!(9.25), 15);
        let first = compute_emi(&input).unwrap().result;
        let second = compute_emi(&input).unwrap().result;
        assert_eq!(first.emi, second.emi);
        assert_eq!(first.total_amount, second.total_amount);
        assert_eq!(first.total_interest, second.total_interest);
    }
}
