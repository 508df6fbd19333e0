use clap::Args;
use serde_json::Value;

use finplan_core::catalog::Catalog;

/// Arguments for listing bonds
#[derive(Args)]
pub struct BondsArgs {
    /// Risk tolerance filter: low, moderate, or high
    #[arg(long)]
    pub risk: Option<String>,
}

pub fn run_bonds(
    args: BondsArgs,
    catalog: &impl Catalog,
) -> Result<Value, Box<dyn std::error::Error>> {
    let bonds = match args.risk {
        Some(ref risk) => catalog.bonds_by_risk(risk),
        None => catalog.bonds(),
    };
    Ok(serde_json::to_value(bonds)?)
}

/// Arguments for listing a user's holdings
#[derive(Args)]
pub struct HoldingsArgs {
    /// User whose bond and loan positions to list
    #[arg(long)]
    pub user_id: String,
}

pub fn run_holdings(
    args: HoldingsArgs,
    catalog: &impl Catalog,
) -> Result<Value, Box<dyn std::error::Error>> {
    let bonds = catalog.user_bonds(&args.user_id)?;
    let loans = catalog.user_loans(&args.user_id)?;
    Ok(serde_json::json!({
        "bonds": bonds,
        "loans": loans,
    }))
}

/// Arguments for listing loans
#[derive(Args)]
pub struct LoansArgs {
    /// Loan type filter: home, personal, education, car
    #[arg(long)]
    pub loan_type: Option<String>,
}

pub fn run_loans(
    args: LoansArgs,
    catalog: &impl Catalog,
) -> Result<Value, Box<dyn std::error::Error>> {
    let loans = match args.loan_type {
        Some(ref loan_type) => catalog.loans_by_type(loan_type),
        None => catalog.loans(),
    };
    Ok(serde_json::to_value(loans)?)
}
