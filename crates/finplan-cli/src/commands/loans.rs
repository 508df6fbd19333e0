use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::loans::{compute_emi, EmiInput};

use crate::input;

/// Arguments for the EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to a JSON/YAML input file
    #[arg(long)]
    pub input: Option<String>,

    /// Principal borrowed
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Annual interest rate as a percentage (8.5 = 8.5%)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Repayment tenure in years
    #[arg(long)]
    pub tenure_years: Option<u32>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let (Some(loan_amount), Some(interest_rate), Some(tenure_years)) =
        (args.loan_amount, args.interest_rate, args.tenure_years)
    {
        EmiInput {
            loan_amount,
            interest_rate,
            tenure_years,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err(
            "provide --loan-amount/--interest-rate/--tenure-years, --input <file>, or stdin"
                .into(),
        );
    };

    let result = compute_emi(&emi_input)?;
    Ok(serde_json::to_value(result)?)
}
