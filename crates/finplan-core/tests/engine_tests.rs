use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finplan_core::bonds::{compute_bond_returns, project_growth};
use finplan_core::catalog::{Catalog, MemCatalog};
use finplan_core::loans::{compute_emi, EmiInput};
use finplan_core::savings::{save_score_from_ledger, expense_breakdown};
use finplan_core::FinPlanError;

// ===========================================================================
// Catalog-to-engine flows
// ===========================================================================

#[test]
fn test_seeded_bond_end_to_end() {
    let catalog = MemCatalog::seeded();
    let bond = catalog.bond("bond-1").unwrap();

    // SBI FD: 7.5 coupon, 10 TDS, 18 GST, inflation default 5
    // 7.5 * 0.9 = 6.75; 6.75 * 0.82 = 5.535; 5.535 - 5 = 0.535
    let result = compute_bond_returns(&bond, dec!(50000), None).unwrap();
    let out = &result.result;

    assert_eq!(out.bond_name, "SBI Fixed Deposit");
    assert_eq!(out.real_return, dec!(0.54));
    assert_eq!(out.projected_returns.len(), 5);

    // Year one: 50000 * 1.00535 = 50267.5 -> 50268
    assert_eq!(out.projected_returns[0].value, 50_268);
    let years: Vec<u32> = out.projected_returns.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_tax_free_government_bond_keeps_full_coupon() {
    let catalog = MemCatalog::seeded();
    let bond = catalog.bond("bond-3").unwrap();

    // 7.3 coupon with zero TDS/GST less 5 inflation
    let result = compute_bond_returns(&bond, dec!(10000), None).unwrap();
    assert_eq!(result.result.real_return, dec!(2.30));
    assert_eq!(result.result.projected_returns.len(), 7);
}

#[test]
fn test_unknown_bond_is_not_found() {
    let catalog = MemCatalog::seeded();
    let err = catalog.bond("bond-404").unwrap_err();
    assert!(matches!(err, FinPlanError::NotFound { .. }));
}

#[test]
fn test_seeded_loan_terms_produce_the_reference_emi() {
    let catalog = MemCatalog::seeded();
    let loan = catalog.loan("loan-1").unwrap();

    // The classic 10L home loan at the seeded 8.5% over 20 years
    let result = compute_emi(&EmiInput {
        loan_amount: dec!(1000000),
        interest_rate: loan.interest_rate,
        tenure_years: 20,
    })
    .unwrap();
    assert_eq!(result.result.emi, 8_678);
}

#[test]
fn test_seeded_ledger_scores_and_breaks_down() {
    let catalog = MemCatalog::seeded();
    let ledger = catalog.user_transactions("user-1");

    let scored = save_score_from_ledger(&ledger).unwrap();
    let out = &scored.result;
    assert_eq!(out.total_income, dec!(85000));
    assert_eq!(out.total_expenses, dec!(42100));
    assert!(out.save_score > Decimal::ZERO);
    assert!(out.save_score < Decimal::ONE_HUNDRED);

    let slices = expense_breakdown(&ledger);
    assert_eq!(slices[0].category, "housing");
    let total_share: Decimal = slices.iter().map(|s| s.share).sum();
    // Display rounding keeps the shares within a tenth of 100%
    assert!((total_share - Decimal::ONE_HUNDRED).abs() <= dec!(0.2));
}

// ===========================================================================
// Purity: repeated calls see no state drift
// ===========================================================================

#[test]
fn test_engine_functions_are_pure_mappings() {
    let points_a = project_growth(dec!(25000), dec!(8.2), 12).unwrap();
    let points_b = project_growth(dec!(25000), dec!(8.2), 12).unwrap();
    let values_a: Vec<i64> = points_a.iter().map(|p| p.value).collect();
    let values_b: Vec<i64> = points_b.iter().map(|p| p.value).collect();
    assert_eq!(values_a, values_b);

    let catalog = MemCatalog::seeded();
    let bond = catalog.bond("bond-2").unwrap();
    let first = compute_bond_returns(&bond, dec!(25000), Some(dec!(4))).unwrap();
    let second = compute_bond_returns(&bond, dec!(25000), Some(dec!(4))).unwrap();
    assert_eq!(first.result.real_return, second.result.real_return);
    assert_eq!(
        first.result.projected_returns.last().unwrap().value,
        second.result.projected_returns.last().unwrap().value
    );
}
