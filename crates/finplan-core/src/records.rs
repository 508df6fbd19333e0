//! Value records exchanged between the catalog, the engine, and the
//! transport layer. Immutable once constructed; the engine never
//! mutates them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};

/// Withholding applied to interest income when a bond does not state
/// its own rate.
pub const DEFAULT_TDS_RATE: Decimal = dec!(10);

/// GST applied when a bond does not state its own rate.
pub const DEFAULT_GST_RATE: Decimal = dec!(0);

/// Annual inflation assumption used when the caller supplies none.
pub const DEFAULT_INFLATION_RATE: Decimal = dec!(5);

/// Category marking discretionary spend in a transaction record.
pub const UNWANTED_CATEGORY: &str = "unwanted";

/// A bond or fixed-deposit product on offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bond {
    pub id: String,
    pub name: String,
    pub issuer: String,
    /// Annual coupon as a percentage (7.5 = 7.5%)
    pub coupon_rate: Percent,
    pub maturity_years: u32,
    pub min_investment: Money,
    /// government, corporate, fd
    pub bond_type: String,
    /// AAA, AA+, etc
    pub risk_rating: String,
    #[serde(default = "default_gst")]
    pub gst_rate: Percent,
    #[serde(default = "default_tds")]
    pub tds_rate: Percent,
}

fn default_gst() -> Percent {
    DEFAULT_GST_RATE
}

fn default_tds() -> Percent {
    DEFAULT_TDS_RATE
}

/// A loan product on offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub name: String,
    pub bank: String,
    /// home, personal, education, car
    pub loan_type: String,
    pub interest_rate: Percent,
    pub max_amount: Money,
    pub min_amount: Money,
    /// Maximum tenure in years
    pub max_tenure: u32,
    /// Upfront fee as a percentage of the loan amount
    pub processing_fee: Percent,
    pub eligibility_min_income: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A single income or expense entry in a user's ledger.
/// Expense amounts are stored negative; the sign must agree with the
/// type in well-formed input (the catalog enforces this on insert).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: Money,
    pub description: String,
    /// housing, food, transport, entertainment, unwanted, savings, income
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: NaiveDate,
}

/// Transaction fields supplied by the caller; the catalog assigns the
/// id and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub user_id: String,
    pub amount: Money,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// A bond position held by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBond {
    pub id: String,
    pub user_id: String,
    pub bond_id: String,
    pub invested_amount: Money,
    pub purchase_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserBond {
    pub user_id: String,
    pub bond_id: String,
    pub invested_amount: Money,
}

/// A user's bond position joined with the product it references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondHolding {
    #[serde(flatten)]
    pub position: UserBond,
    pub bond: Bond,
}

/// A loan taken out by a user against a catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoan {
    pub id: String,
    pub user_id: String,
    pub loan_id: String,
    pub loan_amount: Money,
    /// Agreed tenure in years
    pub tenure: u32,
    pub emi_amount: Money,
    pub start_date: NaiveDate,
    /// active or closed
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserLoan {
    pub user_id: String,
    pub loan_id: String,
    pub loan_amount: Money,
    pub tenure: u32,
    pub emi_amount: Money,
}

/// A user's loan joined with the product it references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanHolding {
    #[serde(flatten)]
    pub position: UserLoan,
    pub loan: Loan,
}
