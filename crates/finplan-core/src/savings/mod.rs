//! Savings analytics: the save score heuristic and per-category
//! expense breakdown.

pub mod breakdown;
pub mod score;

pub use breakdown::{expense_breakdown, CategorySlice};
pub use score::{
    aggregate_totals, compute_save_score, save_score_from_ledger, SaveScoreInput, SaveScoreOutput,
    TransactionTotals,
};
