use financing_core::catalog::InvestmentKind;
use financing_core::scenario::{compare, FinancingInput, ScenarioStatus};
use financing_core::types::Strategy;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn seed_input() -> FinancingInput {
    // The 1.5 crore project / 1 crore own capital case study
    FinancingInput {
        project_cost: dec!(150),
        own_capital: dec!(100),
        loan_rate: dec!(10.5),
        loan_tenure: 7,
        loan_interest_deductible: false,
        tax_rate: dec!(30),
        investment_kind: InvestmentKind::FixedDeposit,
        investment_return: None,
        custom_own_contribution: None,
        currency_unit_scale: dec!(100_000),
    }
}

fn figures_for(
    output: &financing_core::scenario::ComparisonOutput,
    strategy: Strategy,
) -> &financing_core::scenario::ScenarioFigures {
    output
        .scenarios
        .iter()
        .find(|o| o.strategy == strategy)
        .and_then(|o| o.figures())
        .expect("strategy should have computed")
}

// ===========================================================================
// Seed scenario
// ===========================================================================

#[test]
fn test_seed_scenario_capital_splits() {
    let output = compare(&seed_input()).unwrap();
    let own = figures_for(&output.result, Strategy::MaxOwnFunding);
    let lev = figures_for(&output.result, Strategy::MaxLeverage);

    assert_eq!(own.loan_amount, dec!(50));
    assert_eq!(own.own_capital_used_directly, dec!(100));
    assert_eq!(own.capital_invested, Decimal::ZERO);

    assert_eq!(lev.loan_amount, dec!(150));
    assert_eq!(lev.own_capital_used_directly, Decimal::ZERO);
    assert_eq!(lev.capital_invested, dec!(100));
}

#[test]
fn test_seed_scenario_installments_match_annuity_formula() {
    // EMI(5,000,000, 10.5%, 7y) ~ 84,303; EMI(15,000,000, ...) is 3x that
    let output = compare(&seed_input()).unwrap();
    let own = figures_for(&output.result, Strategy::MaxOwnFunding);
    let lev = figures_for(&output.result, Strategy::MaxLeverage);

    assert!(
        (own.monthly_installment - dec!(84_303)).abs() < dec!(5),
        "got {}",
        own.monthly_installment
    );
    assert!(
        (lev.monthly_installment - own.monthly_installment * dec!(3)).abs() < dec!(0.01),
        "installment should scale linearly with principal"
    );
}

#[test]
fn test_seed_scenario_interest_and_maturity() {
    let output = compare(&seed_input()).unwrap();
    let own = figures_for(&output.result, Strategy::MaxOwnFunding);
    let lev = figures_for(&output.result, Strategy::MaxLeverage);

    // 50L loan: ~20.8 lakh interest over 7 years
    assert!(
        own.total_interest_gross > dec!(20.5) && own.total_interest_gross < dec!(21.1),
        "got {}",
        own.total_interest_gross
    );
    // 150L loan: ~62.4 lakh interest
    assert!(
        lev.total_interest_gross > dec!(62.0) && lev.total_interest_gross < dec!(63.0),
        "got {}",
        lev.total_interest_gross
    );
    // 100 at 7% quarterly for 7 years: 100 * (1.0175)^28 ~ 162.5
    assert!(
        lev.investment_maturity_value > dec!(162.4)
            && lev.investment_maturity_value < dec!(162.7),
        "got {}",
        lev.investment_maturity_value
    );
    // Gains taxed at 30%
    let expected_after_tax = lev.investment_gain_gross * dec!(0.7);
    assert_eq!(lev.investment_gain_after_tax, expected_after_tax);
}

#[test]
fn test_seed_scenario_recommends_leverage() {
    // Net cost ~168.7 (leverage) vs ~170.8 (own funding)
    let output = compare(&seed_input()).unwrap();
    let rec = &output.result.recommendation;

    assert_eq!(rec.strategy, Strategy::MaxLeverage);
    assert!(
        rec.savings > dec!(1.8) && rec.savings < dec!(2.5),
        "got savings {}",
        rec.savings
    );
}

// ===========================================================================
// Engine and evaluator properties
// ===========================================================================

#[test]
fn test_zero_loan_when_capital_covers_project() {
    let mut input = seed_input();
    input.own_capital = dec!(200);

    let output = compare(&input).unwrap();
    let own = figures_for(&output.result, Strategy::MaxOwnFunding);

    assert_eq!(own.loan_amount, Decimal::ZERO);
    assert_eq!(own.monthly_installment, Decimal::ZERO);
    assert_eq!(own.total_interest_gross, Decimal::ZERO);
    // The 50 surplus stays invested
    assert_eq!(own.capital_invested, dec!(50));
    assert!(own.investment_gain_gross > Decimal::ZERO);
}

#[test]
fn test_zero_idle_capital_means_no_investment_leg() {
    let output = compare(&seed_input()).unwrap();
    let own = figures_for(&output.result, Strategy::MaxOwnFunding);

    assert_eq!(own.capital_invested, Decimal::ZERO);
    assert_eq!(own.investment_maturity_value, Decimal::ZERO);
    assert_eq!(own.investment_gain_after_tax, Decimal::ZERO);
    assert_eq!(own.net_cost, input_cost_plus_interest(own));
}

fn input_cost_plus_interest(
    figures: &financing_core::scenario::ScenarioFigures,
) -> Decimal {
    dec!(150) + figures.total_interest_net
}

#[test]
fn test_higher_loan_rate_strictly_raises_net_cost_of_borrowing_scenarios() {
    let mut cheap = seed_input();
    cheap.custom_own_contribution = Some(dec!(40));
    let low = compare(&cheap).unwrap();

    let mut pricier = cheap.clone();
    pricier.loan_rate = dec!(12.0);
    let high = compare(&pricier).unwrap();

    // Every scenario carries a loan here (even MaxOwnFunding borrows 50),
    // so each one gets strictly more expensive as the rate rises.
    for strategy in [
        Strategy::MaxOwnFunding,
        Strategy::MaxLeverage,
        Strategy::Balanced,
    ] {
        let low_figures = figures_for(&low.result, strategy);
        let high_figures = figures_for(&high.result, strategy);
        assert!(
            high_figures.net_cost > low_figures.net_cost,
            "{:?} net cost should rise with the loan rate",
            strategy
        );
    }
}

#[test]
fn test_tax_shield_strictly_reduces_net_interest() {
    let without = compare(&seed_input()).unwrap();

    let mut deductible = seed_input();
    deductible.loan_interest_deductible = true;
    let with = compare(&deductible).unwrap();

    for strategy in [Strategy::MaxOwnFunding, Strategy::MaxLeverage] {
        let gross = figures_for(&without.result, strategy);
        let shielded = figures_for(&with.result, strategy);
        assert_eq!(gross.total_interest_net, gross.total_interest_gross);
        assert!(shielded.total_interest_net < shielded.total_interest_gross);
        assert_eq!(
            shielded.total_interest_net,
            shielded.total_interest_gross * dec!(0.7)
        );
        assert!(shielded.net_cost < gross.net_cost);
    }
}

#[test]
fn test_recommender_consistency() {
    let mut input = seed_input();
    input.custom_own_contribution = Some(dec!(40));
    let output = compare(&input).unwrap();
    let rec = &output.result.recommendation;

    let costs: Vec<Decimal> = rec.net_costs.iter().map(|c| c.net_cost).collect();
    let min = costs.iter().copied().min().unwrap();
    let max = costs.iter().copied().max().unwrap();

    assert_eq!(rec.savings, max - min);
    assert!(rec.savings >= Decimal::ZERO);
    let chosen = rec
        .net_costs
        .iter()
        .find(|c| c.strategy == rec.strategy)
        .unwrap();
    assert_eq!(chosen.net_cost, min);
}

// ===========================================================================
// Balanced boundary equivalences
// ===========================================================================

#[test]
fn test_balanced_with_zero_contribution_matches_max_leverage() {
    let mut input = seed_input();
    input.custom_own_contribution = Some(Decimal::ZERO);
    let output = compare(&input).unwrap();

    let balanced = figures_for(&output.result, Strategy::Balanced);
    let leverage = figures_for(&output.result, Strategy::MaxLeverage);

    assert_eq!(balanced.loan_amount, leverage.loan_amount);
    assert_eq!(balanced.monthly_installment, leverage.monthly_installment);
    assert_eq!(balanced.total_interest_net, leverage.total_interest_net);
    assert_eq!(
        balanced.investment_maturity_value,
        leverage.investment_maturity_value
    );
    assert_eq!(balanced.net_cost, leverage.net_cost);
}

#[test]
fn test_balanced_with_full_contribution_matches_max_own_funding() {
    let mut input = seed_input();
    input.custom_own_contribution = Some(dec!(100));
    let output = compare(&input).unwrap();

    let balanced = figures_for(&output.result, Strategy::Balanced);
    let own = figures_for(&output.result, Strategy::MaxOwnFunding);

    assert_eq!(balanced.loan_amount, own.loan_amount);
    assert_eq!(balanced.monthly_installment, own.monthly_installment);
    assert_eq!(balanced.total_interest_net, own.total_interest_net);
    assert_eq!(balanced.capital_invested, own.capital_invested);
    assert_eq!(balanced.net_cost, own.net_cost);
}

#[test]
fn test_balanced_midpoint_sits_between_extremes_on_loan_size() {
    let mut input = seed_input();
    input.custom_own_contribution = Some(dec!(40));
    let output = compare(&input).unwrap();

    let balanced = figures_for(&output.result, Strategy::Balanced);
    assert_eq!(balanced.loan_amount, dec!(110));
    assert_eq!(balanced.capital_invested, dec!(60));
}

// ===========================================================================
// Overflow isolation
// ===========================================================================

#[test]
fn test_overflowed_scenario_marked_without_aborting_siblings() {
    let mut input = seed_input();
    input.own_capital = dec!(150);
    input.loan_rate = dec!(6000);
    input.loan_tenure = 50;

    let output = compare(&input).unwrap();

    let own = output
        .result
        .scenarios
        .iter()
        .find(|o| o.strategy == Strategy::MaxOwnFunding)
        .unwrap();
    assert!(own.figures().is_some(), "zero-loan scenario still computes");

    let lev = output
        .result
        .scenarios
        .iter()
        .find(|o| o.strategy == Strategy::MaxLeverage)
        .unwrap();
    assert!(matches!(lev.status, ScenarioStatus::Overflowed { .. }));

    let rec = &output.result.recommendation;
    assert_eq!(rec.strategy, Strategy::MaxOwnFunding);
    assert_eq!(rec.not_comparable, vec![Strategy::MaxLeverage]);
    assert!(!output.warnings.is_empty());
}

// ===========================================================================
// Input boundary
// ===========================================================================

#[test]
fn test_input_deserializes_with_defaults() {
    let input: FinancingInput = serde_json::from_str(
        r#"{
            "project_cost": "150",
            "own_capital": "100",
            "loan_rate": "10.5",
            "loan_tenure": 7,
            "tax_rate": "30",
            "investment_kind": "fixed_deposit"
        }"#,
    )
    .unwrap();

    assert!(!input.loan_interest_deductible);
    assert_eq!(input.investment_return, None);
    assert_eq!(input.custom_own_contribution, None);
    assert_eq!(input.currency_unit_scale, dec!(100_000));
    assert_eq!(input.resolved_return(), dec!(7.0));

    let output = compare(&input).unwrap();
    assert_eq!(output.result.scenarios.len(), 2);
}

#[test]
fn test_interest_rate_spread_reported() {
    let output = compare(&seed_input()).unwrap();
    assert_eq!(output.result.interest_rate_spread, dec!(3.5));
}
