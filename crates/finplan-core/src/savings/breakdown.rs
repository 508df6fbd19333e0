//! Per-category expense breakdown for a user's ledger.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::{Transaction, TransactionType};
use crate::types::{round_rate, Money, Percent};

/// Total spend in one category and its share of all expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub total: Money,
    /// Share of total expenses, one decimal place
    pub share: Percent,
}

/// Sum expense magnitudes per category, largest first. Income entries
/// are ignored; an all-income ledger yields an empty breakdown.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut grand_total = Decimal::ZERO;

    for txn in transactions {
        if txn.kind != TransactionType::Expense {
            continue;
        }
        let magnitude = txn.amount.abs();
        *by_category.entry(txn.category.as_str()).or_default() += magnitude;
        grand_total += magnitude;
    }

    let mut slices: Vec<CategorySlice> = by_category
        .into_iter()
        .map(|(category, total)| {
            let share = if grand_total.is_zero() {
                Decimal::ZERO
            } else {
                total / grand_total * Decimal::ONE_HUNDRED
            };
            CategorySlice {
                category: category.to_string(),
                total,
                share: round_rate(share, 1),
            }
        })
        .collect();

    // BTreeMap iteration already ordered by name; sort by size,
    // ties stay alphabetical.
    slices.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    slices
}
