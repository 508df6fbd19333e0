use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::bonds::{compute_bond_returns, project_growth};
use finplan_core::catalog::Catalog;

/// Arguments for the bond-returns calculation
#[derive(Args)]
pub struct BondReturnsArgs {
    /// Catalog id of the bond (e.g. bond-1)
    #[arg(long)]
    pub bond_id: String,

    /// Amount to invest
    #[arg(long)]
    pub investment_amount: Decimal,

    /// Annual inflation assumption as a percentage; defaults to 5
    #[arg(long)]
    pub inflation_rate: Option<Decimal>,
}

pub fn run_bond_returns(
    args: BondReturnsArgs,
    catalog: &impl Catalog,
) -> Result<Value, Box<dyn std::error::Error>> {
    let bond = catalog.bond(&args.bond_id)?;
    let result = compute_bond_returns(&bond, args.investment_amount, args.inflation_rate)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for the standalone growth projection
#[derive(Args)]
pub struct ProjectArgs {
    /// Starting amount
    #[arg(long)]
    pub initial_amount: Decimal,

    /// Flat annual return as a percentage
    #[arg(long, allow_hyphen_values = true)]
    pub annual_return: Decimal,

    /// Number of years to project (1 to 200)
    #[arg(long)]
    pub years: u32,
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let points = project_growth(args.initial_amount, args.annual_return, args.years)?;
    Ok(serde_json::to_value(points)?)
}
