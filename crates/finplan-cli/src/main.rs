mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use finplan_core::catalog::MemCatalog;

use commands::bonds::{BondReturnsArgs, ProjectArgs};
use commands::catalog::{BondsArgs, HoldingsArgs, LoansArgs};
use commands::loans::EmiArgs;
use commands::savings::{AddTransactionArgs, ExpensesArgs, SaveScoreArgs};

/// Personal-finance calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "pfa",
    version,
    about = "Personal-finance calculations with decimal precision",
    long_about = "A CLI for personal-finance analytics backed by a decimal \
                  calculation engine. Supports EMI, real bond returns with \
                  growth projection, save score, expense breakdown, and the \
                  bond/loan product catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the equated monthly installment for a loan
    Emi(EmiArgs),
    /// Real return and growth projection for a catalog bond
    BondReturns(BondReturnsArgs),
    /// Project compound growth of an amount at a flat annual rate
    Project(ProjectArgs),
    /// Save score from a user's ledger or explicit totals
    SaveScore(SaveScoreArgs),
    /// Per-category expense breakdown for a user
    Expenses(ExpensesArgs),
    /// Record a transaction against the in-memory catalog and echo it
    AddTransaction(AddTransactionArgs),
    /// List catalog bonds, optionally filtered by risk tolerance
    Bonds(BondsArgs),
    /// List catalog loans, optionally filtered by loan type
    Loans(LoansArgs),
    /// List a user's bond and loan positions with their products
    Holdings(HoldingsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    let mut catalog = MemCatalog::seeded();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::loans::run_emi(args),
        Commands::BondReturns(args) => commands::bonds::run_bond_returns(args, &catalog),
        Commands::Project(args) => commands::bonds::run_project(args),
        Commands::SaveScore(args) => commands::savings::run_save_score(args, &catalog),
        Commands::Expenses(args) => commands::savings::run_expenses(args, &catalog),
        Commands::AddTransaction(args) => {
            commands::savings::run_add_transaction(args, &mut catalog)
        }
        Commands::Bonds(args) => commands::catalog::run_bonds(args, &catalog),
        Commands::Loans(args) => commands::catalog::run_loans(args, &catalog),
        Commands::Holdings(args) => commands::catalog::run_holdings(args, &catalog),
        Commands::Version => {
            println!("pfa {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
