//! Abstract record lookup collaborator.
//!
//! The engine only ever needs read access to bond/loan records and
//! transaction lists; this trait decouples it from any concrete
//! storage shape. `MemCatalog` is the in-memory implementation seeded
//! with the standard sample rows.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::FinPlanError;
use crate::records::{
    Bond, BondHolding, Loan, LoanHolding, NewTransaction, NewUserBond, NewUserLoan, Transaction,
    TransactionType, UserBond, UserLoan,
};
use crate::FinPlanResult;

/// Read-mostly record store. Lookups by id fail with `NotFound`;
/// filters return empty lists rather than errors.
pub trait Catalog {
    fn bond(&self, id: &str) -> FinPlanResult<Bond>;
    fn bonds(&self) -> Vec<Bond>;
    /// Filter bonds by risk tolerance: "low" keeps AAA-rated issues,
    /// "moderate" keeps the AA band and above, anything else keeps all.
    fn bonds_by_risk(&self, risk_tolerance: &str) -> Vec<Bond>;

    fn loan(&self, id: &str) -> FinPlanResult<Loan>;
    fn loans(&self) -> Vec<Loan>;
    fn loans_by_type(&self, loan_type: &str) -> Vec<Loan>;

    /// A user's full ledger, newest first.
    fn user_transactions(&self, user_id: &str) -> Vec<Transaction>;
    fn transactions_by_category(&self, user_id: &str, category: &str) -> Vec<Transaction>;
    fn add_transaction(&mut self, entry: NewTransaction) -> FinPlanResult<Transaction>;

    /// A user's bond positions joined with their product records.
    /// Fails with `NotFound` if a position references a missing bond.
    fn user_bonds(&self, user_id: &str) -> FinPlanResult<Vec<BondHolding>>;
    fn add_user_bond(&mut self, entry: NewUserBond) -> FinPlanResult<UserBond>;

    /// A user's loans joined with their product records.
    fn user_loans(&self, user_id: &str) -> FinPlanResult<Vec<LoanHolding>>;
    fn add_user_loan(&mut self, entry: NewUserLoan) -> FinPlanResult<UserLoan>;
}

/// In-memory catalog backed by hash maps.
pub struct MemCatalog {
    bonds: HashMap<String, Bond>,
    loans: HashMap<String, Loan>,
    transactions: HashMap<String, Transaction>,
    user_bonds: HashMap<String, UserBond>,
    user_loans: HashMap<String, UserLoan>,
    next_txn_id: u64,
    next_position_id: u64,
}

impl MemCatalog {
    /// An empty catalog. Useful for tests and for callers that load
    /// their own records.
    pub fn new() -> Self {
        MemCatalog {
            bonds: HashMap::new(),
            loans: HashMap::new(),
            transactions: HashMap::new(),
            user_bonds: HashMap::new(),
            user_loans: HashMap::new(),
            next_txn_id: 1,
            next_position_id: 1,
        }
    }

    /// A catalog pre-populated with the standard sample bonds, loans,
    /// and a demo ledger and holdings for `user-1`.
    pub fn seeded() -> Self {
        let mut catalog = MemCatalog::new();
        for bond in seed_bonds() {
            catalog.bonds.insert(bond.id.clone(), bond);
        }
        for loan in seed_loans() {
            catalog.loans.insert(loan.id.clone(), loan);
        }
        for txn in seed_transactions() {
            catalog.transactions.insert(txn.id.clone(), txn);
        }
        catalog.next_txn_id = catalog.transactions.len() as u64 + 1;

        for position in seed_user_bonds() {
            catalog.user_bonds.insert(position.id.clone(), position);
        }
        for position in seed_user_loans() {
            catalog.user_loans.insert(position.id.clone(), position);
        }
        catalog.next_position_id =
            (catalog.user_bonds.len() + catalog.user_loans.len()) as u64 + 1;
        catalog
    }

    pub fn insert_bond(&mut self, bond: Bond) {
        self.bonds.insert(bond.id.clone(), bond);
    }

    pub fn insert_loan(&mut self, loan: Loan) {
        self.loans.insert(loan.id.clone(), loan);
    }
}

impl Default for MemCatalog {
    fn default() -> Self {
        MemCatalog::seeded()
    }
}

impl Catalog for MemCatalog {
    fn bond(&self, id: &str) -> FinPlanResult<Bond> {
        self.bonds
            .get(id)
            .cloned()
            .ok_or_else(|| FinPlanError::not_found("Bond", id))
    }

    fn bonds(&self) -> Vec<Bond> {
        let mut all: Vec<Bond> = self.bonds.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    fn bonds_by_risk(&self, risk_tolerance: &str) -> Vec<Bond> {
        self.bonds()
            .into_iter()
            .filter(|bond| match risk_tolerance {
                "low" => bond.risk_rating.contains("AAA"),
                "moderate" => bond.risk_rating.contains("AA"),
                _ => true,
            })
            .collect()
    }

    fn loan(&self, id: &str) -> FinPlanResult<Loan> {
        self.loans
            .get(id)
            .cloned()
            .ok_or_else(|| FinPlanError::not_found("Loan", id))
    }

    fn loans(&self) -> Vec<Loan> {
        let mut all: Vec<Loan> = self.loans.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    fn loans_by_type(&self, loan_type: &str) -> Vec<Loan> {
        self.loans()
            .into_iter()
            .filter(|loan| loan.loan_type == loan_type)
            .collect()
    }

    fn user_transactions(&self, user_id: &str) -> Vec<Transaction> {
        let mut ledger: Vec<Transaction> = self
            .transactions
            .values()
            .filter(|txn| txn.user_id == user_id)
            .cloned()
            .collect();
        ledger.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        ledger
    }

    fn transactions_by_category(&self, user_id: &str, category: &str) -> Vec<Transaction> {
        self.user_transactions(user_id)
            .into_iter()
            .filter(|txn| txn.category == category)
            .collect()
    }

    fn add_transaction(&mut self, entry: NewTransaction) -> FinPlanResult<Transaction> {
        let sign_ok = match entry.kind {
            TransactionType::Income => entry.amount >= Decimal::ZERO,
            TransactionType::Expense => entry.amount <= Decimal::ZERO,
        };
        if !sign_ok {
            return Err(FinPlanError::invalid_input(
                "amount",
                "sign must agree with the transaction type",
            ));
        }

        let txn = Transaction {
            id: format!("txn-{}", self.next_txn_id),
            user_id: entry.user_id,
            amount: entry.amount,
            description: entry.description,
            category: entry.category,
            kind: entry.kind,
            date: Utc::now().date_naive(),
        };
        self.next_txn_id += 1;
        self.transactions.insert(txn.id.clone(), txn.clone());
        Ok(txn)
    }

    fn user_bonds(&self, user_id: &str) -> FinPlanResult<Vec<BondHolding>> {
        let mut positions: Vec<&UserBond> = self
            .user_bonds
            .values()
            .filter(|pos| pos.user_id == user_id)
            .collect();
        positions.sort_by(|a, b| a.id.cmp(&b.id));

        positions
            .into_iter()
            .map(|pos| {
                let bond = self.bond(&pos.bond_id)?;
                Ok(BondHolding {
                    position: pos.clone(),
                    bond,
                })
            })
            .collect()
    }

    fn add_user_bond(&mut self, entry: NewUserBond) -> FinPlanResult<UserBond> {
        // Reject dangling product references on insert
        let bond = self.bond(&entry.bond_id)?;
        if entry.invested_amount <= Decimal::ZERO {
            return Err(FinPlanError::invalid_input(
                "invested_amount",
                "investment must be greater than zero",
            ));
        }
        if entry.invested_amount < bond.min_investment {
            return Err(FinPlanError::invalid_input(
                "invested_amount",
                "investment is below the bond's minimum",
            ));
        }

        let position = UserBond {
            id: format!("pos-{}", self.next_position_id),
            user_id: entry.user_id,
            bond_id: entry.bond_id,
            invested_amount: entry.invested_amount,
            purchase_date: Utc::now().date_naive(),
        };
        self.next_position_id += 1;
        self.user_bonds.insert(position.id.clone(), position.clone());
        Ok(position)
    }

    fn user_loans(&self, user_id: &str) -> FinPlanResult<Vec<LoanHolding>> {
        let mut positions: Vec<&UserLoan> = self
            .user_loans
            .values()
            .filter(|pos| pos.user_id == user_id)
            .collect();
        positions.sort_by(|a, b| a.id.cmp(&b.id));

        positions
            .into_iter()
            .map(|pos| {
                let loan = self.loan(&pos.loan_id)?;
                Ok(LoanHolding {
                    position: pos.clone(),
                    loan,
                })
            })
            .collect()
    }

    fn add_user_loan(&mut self, entry: NewUserLoan) -> FinPlanResult<UserLoan> {
        let loan = self.loan(&entry.loan_id)?;
        if entry.loan_amount < loan.min_amount || entry.loan_amount > loan.max_amount {
            return Err(FinPlanError::invalid_input(
                "loan_amount",
                "amount is outside the product's lending range",
            ));
        }
        if entry.tenure == 0 || entry.tenure > loan.max_tenure {
            return Err(FinPlanError::invalid_input(
                "tenure",
                "tenure is outside the product's range",
            ));
        }

        let position = UserLoan {
            id: format!("pos-{}", self.next_position_id),
            user_id: entry.user_id,
            loan_id: entry.loan_id,
            loan_amount: entry.loan_amount,
            tenure: entry.tenure,
            emi_amount: entry.emi_amount,
            start_date: Utc::now().date_naive(),
            status: "active".into(),
        };
        self.next_position_id += 1;
        self.user_loans.insert(position.id.clone(), position.clone());
        Ok(position)
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

fn seed_bonds() -> Vec<Bond> {
    vec![
        Bond {
            id: "bond-1".into(),
            name: "SBI Fixed Deposit".into(),
            issuer: "State Bank of India".into(),
            coupon_rate: dec!(7.5),
            maturity_years: 5,
            min_investment: dec!(10000),
            bond_type: "fd".into(),
            risk_rating: "AAA".into(),
            gst_rate: dec!(18),
            tds_rate: dec!(10),
        },
        Bond {
            id: "bond-2".into(),
            name: "HDFC Corporate Bond".into(),
            issuer: "HDFC Bank".into(),
            coupon_rate: dec!(8.2),
            maturity_years: 3,
            min_investment: dec!(25000),
            bond_type: "corporate".into(),
            risk_rating: "AA+".into(),
            gst_rate: dec!(18),
            tds_rate: dec!(10),
        },
        Bond {
            id: "bond-3".into(),
            name: "Government Bond 2029".into(),
            issuer: "Government of India".into(),
            coupon_rate: dec!(7.3),
            maturity_years: 7,
            min_investment: dec!(1000),
            bond_type: "government".into(),
            risk_rating: "AAA".into(),
            gst_rate: dec!(0),
            tds_rate: dec!(0),
        },
    ]
}

fn seed_loans() -> Vec<Loan> {
    vec![
        Loan {
            id: "loan-1".into(),
            name: "HDFC Home Loan".into(),
            bank: "HDFC Bank".into(),
            loan_type: "home".into(),
            interest_rate: dec!(8.5),
            max_amount: dec!(12000000),
            min_amount: dec!(100000),
            max_tenure: 30,
            processing_fee: dec!(0.5),
            eligibility_min_income: dec!(50000),
        },
        Loan {
            id: "loan-2".into(),
            name: "SBI Education Loan".into(),
            bank: "State Bank of India".into(),
            loan_type: "education".into(),
            interest_rate: dec!(7.8),
            max_amount: dec!(2000000),
            min_amount: dec!(50000),
            max_tenure: 15,
            processing_fee: dec!(0),
            eligibility_min_income: dec!(30000),
        },
        Loan {
            id: "loan-3".into(),
            name: "ICICI Personal Loan".into(),
            bank: "ICICI Bank".into(),
            loan_type: "personal".into(),
            interest_rate: dec!(12.5),
            max_amount: dec!(4000000),
            min_amount: dec!(50000),
            max_tenure: 5,
            processing_fee: dec!(2.5),
            eligibility_min_income: dec!(25000),
        },
    ]
}

fn seed_user_bonds() -> Vec<UserBond> {
    vec![UserBond {
        id: "pos-1".into(),
        user_id: "user-1".into(),
        bond_id: "bond-1".into(),
        invested_amount: dec!(50000),
        purchase_date: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid seed date"),
    }]
}

fn seed_user_loans() -> Vec<UserLoan> {
    vec![UserLoan {
        id: "pos-2".into(),
        user_id: "user-1".into(),
        loan_id: "loan-1".into(),
        loan_amount: dec!(2500000),
        tenure: 20,
        emi_amount: dec!(21696),
        start_date: NaiveDate::from_ymd_opt(2024, 11, 5).expect("valid seed date"),
        status: "active".into(),
    }]
}

fn seed_transactions() -> Vec<Transaction> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
    vec![
        Transaction {
            id: "txn-1".into(),
            user_id: "user-1".into(),
            amount: dec!(85000),
            description: "Monthly salary".into(),
            category: "income".into(),
            kind: TransactionType::Income,
            date: date(2025, 7, 1),
        },
        Transaction {
            id: "txn-2".into(),
            user_id: "user-1".into(),
            amount: dec!(-22000),
            description: "Rent".into(),
            category: "housing".into(),
            kind: TransactionType::Expense,
            date: date(2025, 7, 2),
        },
        Transaction {
            id: "txn-3".into(),
            user_id: "user-1".into(),
            amount: dec!(-9500),
            description: "Groceries".into(),
            category: "food".into(),
            kind: TransactionType::Expense,
            date: date(2025, 7, 8),
        },
        Transaction {
            id: "txn-4".into(),
            user_id: "user-1".into(),
            amount: dec!(-3200),
            description: "Fuel and metro card".into(),
            category: "transport".into(),
            kind: TransactionType::Expense,
            date: date(2025, 7, 12),
        },
        Transaction {
            id: "txn-5".into(),
            user_id: "user-1".into(),
            amount: dec!(-4800),
            description: "Impulse shopping".into(),
            category: "unwanted".into(),
            kind: TransactionType::Expense,
            date: date(2025, 7, 18),
        },
        Transaction {
            id: "txn-6".into(),
            user_id: "user-1".into(),
            amount: dec!(-2600),
            description: "Streaming and dining out".into(),
            category: "entertainment".into(),
            kind: TransactionType::Expense,
            date: date(2025, 7, 21),
        },
    ]
}
