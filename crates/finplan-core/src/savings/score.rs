//! Save score: a bounded [0, 100] heuristic combining the savings
//! rate with the share of discretionary ("unwanted") spending.
//!
//! This is a product policy, not a statistically derived model: start
//! at 50, credit savings above a 20% rate, debit the unwanted share,
//! clamp to [0, 100].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::records::{Transaction, TransactionType, UNWANTED_CATEGORY};
use crate::types::{round_rate, with_metadata, ComputationOutput, Money, Percent};
use crate::FinPlanResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const BASE_SCORE: Decimal = dec!(50);
const TARGET_SAVINGS_RATE: Decimal = dec!(20);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Aggregated income/expense totals for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTotals {
    pub total_income: Money,
    pub total_expenses: Money,
    pub unwanted_expenses: Money,
}

/// Input totals for the save-score calculation. All must be
/// non-negative; expenses are magnitudes, not signed amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveScoreInput {
    pub total_income: Money,
    pub total_expenses: Money,
    pub unwanted_expenses: Money,
}

/// Output of the save-score calculation. Score and rates are rounded
/// to one decimal place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveScoreOutput {
    pub save_score: Percent,
    pub savings_rate: Percent,
    pub unwanted_rate: Percent,
    pub total_income: Money,
    pub total_expenses: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Sum a ledger into the totals the score needs: income amounts,
/// expense magnitudes, and the magnitude of "unwanted" expenses.
pub fn aggregate_totals(transactions: &[Transaction]) -> TransactionTotals {
    let mut totals = TransactionTotals {
        total_income: Decimal::ZERO,
        total_expenses: Decimal::ZERO,
        unwanted_expenses: Decimal::ZERO,
    };

    for txn in transactions {
        match txn.kind {
            TransactionType::Income => totals.total_income += txn.amount,
            TransactionType::Expense => {
                let magnitude = txn.amount.abs();
                totals.total_expenses += magnitude;
                if txn.category == UNWANTED_CATEGORY {
                    totals.unwanted_expenses += magnitude;
                }
            }
        }
    }

    totals
}

/// Compute the save score from aggregated totals.
///
/// Zero income is the degenerate worst case: the score is exactly 0,
/// not an error. Negative totals fail with `InvalidInput`.
pub fn compute_save_score(
    input: &SaveScoreInput,
) -> FinPlanResult<ComputationOutput<SaveScoreOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_totals(input)?;

    let unwanted_rate = if input.total_expenses > Decimal::ZERO {
        input.unwanted_expenses / input.total_expenses * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let (score, savings_rate) = if input.total_income.is_zero() {
        warnings.push("No income recorded; save score degenerates to 0".into());
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        // May be negative when expenses exceed income
        let savings_rate = (input.total_income - input.total_expenses) / input.total_income
            * Decimal::ONE_HUNDRED;
        let raw = BASE_SCORE + (savings_rate - TARGET_SAVINGS_RATE) - unwanted_rate;
        (raw.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED), savings_rate)
    };

    let output = SaveScoreOutput {
        save_score: round_rate(score, 1),
        savings_rate: round_rate(savings_rate, 1),
        unwanted_rate: round_rate(unwanted_rate, 1),
        total_income: input.total_income,
        total_expenses: input.total_expenses,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Save score — 50 base, savings-rate bonus over 20%, unwanted-spend penalty, clamped to [0, 100]",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Aggregate a ledger and score it in one step.
pub fn save_score_from_ledger(
    transactions: &[Transaction],
) -> FinPlanResult<ComputationOutput<SaveScoreOutput>> {
    let totals = aggregate_totals(transactions);
    compute_save_score(&SaveScoreInput {
        total_income: totals.total_income,
        total_expenses: totals.total_expenses,
        unwanted_expenses: totals.unwanted_expenses,
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_totals(input: &SaveScoreInput) -> FinPlanResult<()> {
    if input.total_income < Decimal::ZERO {
        return Err(FinPlanError::invalid_input(
            "total_income",
            "income total must not be negative",
        ));
    }
    if input.total_expenses < Decimal::ZERO {
        return Err(FinPlanError::invalid_input(
            "total_expenses",
            "expense total must not be negative",
        ));
    }
    if input.unwanted_expenses < Decimal::ZERO {
        return Err(FinPlanError::invalid_input(
            "unwanted_expenses",
            "unwanted total must not be negative",
        ));
    }
    if input.unwanted_expenses > input.total_expenses {
        return Err(FinPlanError::invalid_input(
            "unwanted_expenses",
            "unwanted spend cannot exceed total expenses",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn totals(income: Decimal, expenses: Decimal, unwanted: Decimal) -> SaveScoreInput {
        SaveScoreInput {
            total_income: income,
            total_expenses: expenses,
            unwanted_expenses: unwanted,
        }
    }

    fn txn(amount: Decimal, category: &str, kind: TransactionType) -> Transaction {
        Transaction {
            id: "txn-t".into(),
            user_id: "user-1".into(),
            amount,
            description: String::new(),
            category: category.into(),
            kind,
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        }
    }

    // -----------------------------------------------------------------------
    // 1. Zero income degenerates to a score of exactly 0
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_income_scores_zero() {
        let result = compute_save_score(&totals(dec!(0), dec!(5000), dec!(1000))).unwrap();
        assert_eq!(result.result.save_score, Decimal::ZERO);
        assert_eq!(result.result.savings_rate, Decimal::ZERO);
        assert_eq!(result.warnings.len(), 1);
    }

    // -----------------------------------------------------------------------
    // 2. Clamp floor: hopeless budget scores exactly 0
    // -----------------------------------------------------------------------
    #[test]
    fn test_clamps_to_floor() {
        let result = compute_save_score(&totals(dec!(100), dec!(1000), dec!(1000))).unwrap();
        let out = &result.result;
        assert_eq!(out.save_score, Decimal::ZERO);
        // savings rate went deeply negative and is reported as-is
        assert_eq!(out.savings_rate, dec!(-900.0));
        assert_eq!(out.unwanted_rate, dec!(100.0));
    }

    // -----------------------------------------------------------------------
    // 3. Clamp ceiling: all income saved scores exactly 100
    // -----------------------------------------------------------------------
    #[test]
    fn test_clamps_to_ceiling() {
        let result = compute_save_score(&totals(dec!(100000), dec!(0), dec!(0))).unwrap();
        assert_eq!(result.result.save_score, Decimal::ONE_HUNDRED);
        assert_eq!(result.result.unwanted_rate, Decimal::ZERO);
    }

    // -----------------------------------------------------------------------
    // 4. Mid-range score matches the policy arithmetic
    // -----------------------------------------------------------------------
    #[test]
    fn test_mid_range_policy_arithmetic() {
        // savings rate = 40%, unwanted rate = 25%
        // score = 50 + (40 - 20) - 25 = 45
        let result = compute_save_score(&totals(dec!(10000), dec!(6000), dec!(1500))).unwrap();
        let out = &result.result;
        assert_eq!(out.save_score, dec!(45.0));
        assert_eq!(out.savings_rate, dec!(40.0));
        assert_eq!(out.unwanted_rate, dec!(25.0));
    }

    // -----------------------------------------------------------------------
    // 5. Score and rates serialize with exactly one decimal place
    // -----------------------------------------------------------------------
    #[test]
    fn test_score_serializes_one_decimal_place() {
        // Floor-clamped score must render "0.0", not "0"
        let result = compute_save_score(&totals(dec!(100), dec!(1000), dec!(1000))).unwrap();
        let value = serde_json::to_value(&result.result).unwrap();
        assert_eq!(value["saveScore"], serde_json::json!("0.0"));
        assert_eq!(value["unwantedRate"], serde_json::json!("100.0"));

        // Ceiling-clamped score renders "100.0"
        let result = compute_save_score(&totals(dec!(100000), dec!(0), dec!(0))).unwrap();
        let value = serde_json::to_value(&result.result).unwrap();
        assert_eq!(value["saveScore"], serde_json::json!("100.0"));
        assert_eq!(value["savingsRate"], serde_json::json!("100.0"));
    }

    // -----------------------------------------------------------------------
    // 6. Negative or inconsistent totals are rejected
    // -----------------------------------------------------------------------
    #[test]
    fn test_rejects_bad_totals() {
        assert!(compute_save_score(&totals(dec!(-1), dec!(0), dec!(0))).is_err());
        assert!(compute_save_score(&totals(dec!(100), dec!(-5), dec!(0))).is_err());
        assert!(compute_save_score(&totals(dec!(100), dec!(50), dec!(-5))).is_err());
        assert!(compute_save_score(&totals(dec!(100), dec!(50), dec!(60))).is_err());
    }

    // -----------------------------------------------------------------------
    // 7. Ledger aggregation feeds the score
    // -----------------------------------------------------------------------
    #[test]
    fn test_ledger_aggregation() {
        let ledger = vec![
            txn(dec!(85000), "income", TransactionType::Income),
            txn(dec!(-22000), "housing", TransactionType::Expense),
            txn(dec!(-4800), "unwanted", TransactionType::Expense),
        ];

        let totals = aggregate_totals(&ledger);
        assert_eq!(totals.total_income, dec!(85000));
        assert_eq!(totals.total_expenses, dec!(26800));
        assert_eq!(totals.unwanted_expenses, dec!(4800));

        let scored = save_score_from_ledger(&ledger).unwrap();
        assert!(scored.result.save_score > Decimal::ZERO);
        assert!(scored.result.save_score < Decimal::ONE_HUNDRED);
    }

    // -----------------------------------------------------------------------
    // 8. Empty ledger behaves like the zero-income degenerate case
    // -----------------------------------------------------------------------
    #[test]
    fn test_empty_ledger_scores_zero() {
        let scored = save_score_from_ledger(&[]).unwrap();
        assert_eq!(scored.result.save_score, Decimal::ZERO);
    }
}
