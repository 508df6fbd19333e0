use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::catalog::Catalog;
use finplan_core::records::{NewTransaction, TransactionType};
use finplan_core::savings::{
    compute_save_score, expense_breakdown, save_score_from_ledger, SaveScoreInput,
};

/// Arguments for the save-score calculation
#[derive(Args)]
pub struct SaveScoreArgs {
    /// Score this user's ledger from the catalog
    #[arg(long, conflicts_with_all = ["income", "expenses", "unwanted"])]
    pub user_id: Option<String>,

    /// Total income (use with --expenses/--unwanted instead of --user-id)
    #[arg(long, requires = "expenses")]
    pub income: Option<Decimal>,

    /// Total expenses as a magnitude
    #[arg(long)]
    pub expenses: Option<Decimal>,

    /// Discretionary ("unwanted") expenses as a magnitude
    #[arg(long, default_value = "0")]
    pub unwanted: Decimal,
}

pub fn run_save_score(
    args: SaveScoreArgs,
    catalog: &impl Catalog,
) -> Result<Value, Box<dyn std::error::Error>> {
    let result = if let Some(ref user_id) = args.user_id {
        let ledger = catalog.user_transactions(user_id);
        save_score_from_ledger(&ledger)?
    } else if let (Some(income), Some(expenses)) = (args.income, args.expenses) {
        compute_save_score(&SaveScoreInput {
            total_income: income,
            total_expenses: expenses,
            unwanted_expenses: args.unwanted,
        })?
    } else {
        return Err("provide --user-id or explicit --income/--expenses totals".into());
    };
    Ok(serde_json::to_value(result)?)
}

/// Arguments for the expense breakdown
#[derive(Args)]
pub struct ExpensesArgs {
    /// User whose ledger to break down
    #[arg(long)]
    pub user_id: String,

    /// Restrict to a single category
    #[arg(long)]
    pub category: Option<String>,
}

pub fn run_expenses(
    args: ExpensesArgs,
    catalog: &impl Catalog,
) -> Result<Value, Box<dyn std::error::Error>> {
    let ledger = match args.category {
        Some(ref category) => catalog.transactions_by_category(&args.user_id, category),
        None => catalog.user_transactions(&args.user_id),
    };
    let slices = expense_breakdown(&ledger);
    Ok(serde_json::to_value(slices)?)
}

/// Arguments for recording a transaction
#[derive(Args)]
pub struct AddTransactionArgs {
    #[arg(long)]
    pub user_id: String,

    /// Signed amount: positive income, negative expense
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Decimal,

    #[arg(long)]
    pub description: String,

    /// housing, food, transport, entertainment, unwanted, savings, income
    #[arg(long)]
    pub category: String,

    /// income or expense
    #[arg(long, value_parser = parse_transaction_type)]
    pub kind: TransactionType,
}

fn parse_transaction_type(raw: &str) -> Result<TransactionType, String> {
    match raw {
        "income" => Ok(TransactionType::Income),
        "expense" => Ok(TransactionType::Expense),
        other => Err(format!("unknown transaction type '{other}'; use income or expense")),
    }
}

pub fn run_add_transaction(
    args: AddTransactionArgs,
    catalog: &mut impl Catalog,
) -> Result<Value, Box<dyn std::error::Error>> {
    let txn = catalog.add_transaction(NewTransaction {
        user_id: args.user_id,
        amount: args.amount,
        description: args.description,
        category: args.category,
        kind: args.kind,
    })?;
    Ok(serde_json::to_value(txn)?)
}
