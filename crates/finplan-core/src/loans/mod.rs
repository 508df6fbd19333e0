//! Loan analytics: equated monthly installment and derived totals.

pub mod emi;

pub use emi::{compute_emi, monthly_installment, EmiInput, EmiOutput};
