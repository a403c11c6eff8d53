use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::catalog::InvestmentKind;
use crate::error::FinancingError;
use crate::recommend::{self, Recommendation};
use crate::time_value::{compound_growth, monthly_installment};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Strategy};
use crate::FinancingResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

fn default_unit_scale() -> Money {
    // One display unit = one lakh of base currency
    dec!(100_000)
}

/// Input parameters for a financing comparison run. Immutable once built;
/// every derived quantity is a pure function of this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingInput {
    /// Total project cost, in display units (lakh by default).
    pub project_cost: Money,
    /// Own capital available, same unit as `project_cost`.
    pub own_capital: Money,
    /// Annual nominal loan rate, percent.
    pub loan_rate: Percent,
    /// Amortization horizon, whole years.
    pub loan_tenure: u32,
    /// Whether loan interest reduces taxable income.
    #[serde(default)]
    pub loan_interest_deductible: bool,
    /// Flat marginal tax rate, percent. Applied both to the interest
    /// shield and to investment gains.
    pub tax_rate: Percent,
    pub investment_kind: InvestmentKind,
    /// Expected annual return, percent. Falls back to the catalog default
    /// for `investment_kind` when absent.
    #[serde(default)]
    pub investment_return: Option<Percent>,
    /// Own capital applied directly under the Balanced strategy. Absent
    /// means Balanced is not evaluated.
    #[serde(default)]
    pub custom_own_contribution: Option<Money>,
    /// Base currency units per display unit. The loan leg is computed in
    /// base currency and converted back at this scale.
    #[serde(default = "default_unit_scale")]
    pub currency_unit_scale: Money,
}

impl FinancingInput {
    /// Annual investment return actually used, percent.
    pub fn resolved_return(&self) -> Percent {
        self.investment_return
            .unwrap_or(self.investment_kind.profile().default_return_pct)
    }

    /// Strategies evaluated for this input, in priority order. Balanced
    /// joins only when a custom contribution was supplied.
    pub fn strategies(&self) -> Vec<Strategy> {
        let mut strategies = vec![Strategy::MaxOwnFunding, Strategy::MaxLeverage];
        if self.custom_own_contribution.is_some() {
            strategies.push(Strategy::Balanced);
        }
        strategies
    }

    fn validate(&self) -> FinancingResult<()> {
        if self.project_cost <= Decimal::ZERO {
            return Err(FinancingError::InvalidInput {
                field: "project_cost".into(),
                reason: "Project cost must be > 0".into(),
            });
        }
        if self.own_capital < Decimal::ZERO {
            return Err(FinancingError::InvalidInput {
                field: "own_capital".into(),
                reason: "Own capital must be >= 0".into(),
            });
        }
        if self.loan_rate < Decimal::ZERO {
            return Err(FinancingError::InvalidInput {
                field: "loan_rate".into(),
                reason: "Loan rate must be >= 0".into(),
            });
        }
        if self.loan_tenure == 0 {
            return Err(FinancingError::InvalidInput {
                field: "loan_tenure".into(),
                reason: "Loan tenure must be > 0 years".into(),
            });
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > dec!(100) {
            return Err(FinancingError::InvalidInput {
                field: "tax_rate".into(),
                reason: "Tax rate must be between 0 and 100".into(),
            });
        }
        if let Some(ret) = self.investment_return {
            if ret < Decimal::ZERO {
                return Err(FinancingError::InvalidInput {
                    field: "investment_return".into(),
                    reason: "Investment return must be >= 0".into(),
                });
            }
        }
        if let Some(contribution) = self.custom_own_contribution {
            let ceiling = self.own_capital.min(self.project_cost);
            if contribution < Decimal::ZERO || contribution > ceiling {
                return Err(FinancingError::InvalidInput {
                    field: "custom_own_contribution".into(),
                    reason: format!(
                        "Custom contribution must be within [0, {}]",
                        ceiling
                    ),
                });
            }
        }
        if self.currency_unit_scale <= Decimal::ZERO {
            return Err(FinancingError::InvalidInput {
                field: "currency_unit_scale".into(),
                reason: "Unit scale must be > 0".into(),
            });
        }
        Ok(())
    }
}

/// Derived figures for one strategy at one horizon. Monetary fields are in
/// display units except `monthly_installment`, which is in base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFigures {
    pub own_capital_used_directly: Money,
    pub loan_amount: Money,
    pub monthly_installment: Money,
    pub total_interest_gross: Money,
    pub total_interest_net: Money,
    pub capital_invested: Money,
    pub investment_maturity_value: Money,
    pub investment_gain_gross: Money,
    pub investment_gain_after_tax: Money,
    /// project_cost + net interest - after-tax gain. The ranking scalar.
    pub net_cost: Money,
}

/// Per-strategy evaluation result. A scenario that overflowed stays in the
/// result set with an explicit marker; it is never zeroed or dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioStatus {
    Computed { figures: ScenarioFigures },
    Overflowed { context: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub strategy: Strategy,
    #[serde(flatten)]
    pub status: ScenarioStatus,
}

impl ScenarioOutcome {
    pub fn figures(&self) -> Option<&ScenarioFigures> {
        match &self.status {
            ScenarioStatus::Computed { figures } => Some(figures),
            ScenarioStatus::Overflowed { .. } => None,
        }
    }
}

/// Cumulative position of one strategy at an integer year mark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyScenarioFigures {
    pub strategy: Strategy,
    pub interest_paid_net: Money,
    pub investment_value: Money,
    pub investment_gain_gross: Money,
    pub investment_gain_after_tax: Money,
    pub net_cost: Money,
}

/// One row per integer year 0..=loan_tenure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyRow {
    pub year: u32,
    pub scenarios: Vec<YearlyScenarioFigures>,
}

/// Full comparison: per-strategy outcomes, the year-wise series, and the
/// recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub scenarios: Vec<ScenarioOutcome>,
    pub yearly: Vec<YearlyRow>,
    pub recommendation: Recommendation,
    /// Loan rate minus investment return, percent.
    pub interest_rate_spread: Percent,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

fn after_tax_factor(tax_rate: Percent) -> Decimal {
    Decimal::ONE - tax_rate / dec!(100)
}

fn own_used_for(input: &FinancingInput, strategy: Strategy) -> Money {
    match strategy {
        Strategy::MaxOwnFunding => input.own_capital.min(input.project_cost),
        Strategy::MaxLeverage => Decimal::ZERO,
        Strategy::Balanced => input.custom_own_contribution.unwrap_or(Decimal::ZERO),
    }
}

/// Run the fixed step chain (capital split, loan service, tax shield, idle
/// growth, net cost) for one strategy over `horizon_years`. A zero horizon
/// short-circuits every interest and growth quantity to zero; the series
/// starts from the bare project cost.
fn evaluate_horizon(
    input: &FinancingInput,
    strategy: Strategy,
    horizon_years: u32,
) -> FinancingResult<ScenarioFigures> {
    let own_used = own_used_for(input, strategy);
    let loan_amount = (input.project_cost - own_used).max(Decimal::ZERO);
    let idle_capital = input.own_capital - own_used;

    if horizon_years == 0 {
        return Ok(ScenarioFigures {
            own_capital_used_directly: own_used,
            loan_amount,
            monthly_installment: Decimal::ZERO,
            total_interest_gross: Decimal::ZERO,
            total_interest_net: Decimal::ZERO,
            capital_invested: idle_capital,
            investment_maturity_value: idle_capital,
            investment_gain_gross: Decimal::ZERO,
            investment_gain_after_tax: Decimal::ZERO,
            net_cost: input.project_cost,
        });
    }

    // Loan leg runs in base currency units, then converts back.
    let principal = loan_amount * input.currency_unit_scale;
    let installment = monthly_installment(principal, input.loan_rate, horizon_years)?;
    let total_payment = installment * dec!(12) * Decimal::from(horizon_years);
    let total_interest_gross = (total_payment - principal) / input.currency_unit_scale;
    let total_interest_net = if input.loan_interest_deductible {
        total_interest_gross * after_tax_factor(input.tax_rate)
    } else {
        total_interest_gross
    };

    let (maturity, gain_gross, gain_after_tax) = if idle_capital > Decimal::ZERO {
        let maturity = compound_growth(
            idle_capital,
            input.resolved_return(),
            horizon_years,
            input.investment_kind.profile().compounding,
        )?;
        let gain = maturity - idle_capital;
        (maturity, gain, gain * after_tax_factor(input.tax_rate))
    } else {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    };

    Ok(ScenarioFigures {
        own_capital_used_directly: own_used,
        loan_amount,
        monthly_installment: installment,
        total_interest_gross,
        total_interest_net,
        capital_invested: idle_capital,
        investment_maturity_value: maturity,
        investment_gain_gross: gain_gross,
        investment_gain_after_tax: gain_after_tax,
        net_cost: input.project_cost + total_interest_net - gain_after_tax,
    })
}

fn year_wise(
    input: &FinancingInput,
    strategies: &[Strategy],
) -> FinancingResult<Vec<YearlyRow>> {
    let mut rows = Vec::with_capacity(input.loan_tenure as usize + 1);
    for year in 0..=input.loan_tenure {
        let mut scenarios = Vec::with_capacity(strategies.len());
        for &strategy in strategies {
            let figures = evaluate_horizon(input, strategy, year)?;
            scenarios.push(YearlyScenarioFigures {
                strategy,
                interest_paid_net: figures.total_interest_net,
                investment_value: figures.investment_maturity_value,
                investment_gain_gross: figures.investment_gain_gross,
                investment_gain_after_tax: figures.investment_gain_after_tax,
                net_cost: figures.net_cost,
            });
        }
        rows.push(YearlyRow { year, scenarios });
    }
    Ok(rows)
}

/// Evaluate every applicable strategy over the full tenure, build the
/// year-wise series, and attach the recommendation.
///
/// Validation failures abort before any scenario runs. A per-scenario
/// overflow marks that scenario and leaves its siblings intact; the series
/// covers only the scenarios that computed.
pub fn compare(
    input: &FinancingInput,
) -> FinancingResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    input.validate()?;

    let mut warnings: Vec<String> = Vec::new();
    if input.own_capital > input.project_cost {
        warnings.push(
            "Own capital exceeds project cost; the surplus stays invested under every strategy"
                .into(),
        );
    }

    let strategies = input.strategies();
    let mut outcomes: Vec<ScenarioOutcome> = Vec::with_capacity(strategies.len());
    for &strategy in &strategies {
        match evaluate_horizon(input, strategy, input.loan_tenure) {
            Ok(figures) => outcomes.push(ScenarioOutcome {
                strategy,
                status: ScenarioStatus::Computed { figures },
            }),
            Err(FinancingError::Overflow { context }) => {
                warnings.push(format!(
                    "{} excluded from the ranking: overflow in {}",
                    strategy.label(),
                    context
                ));
                outcomes.push(ScenarioOutcome {
                    strategy,
                    status: ScenarioStatus::Overflowed { context },
                });
            }
            Err(e) => return Err(e),
        }
    }

    let recommendation = recommend::recommend(&outcomes)?;

    let computed: Vec<Strategy> = outcomes
        .iter()
        .filter(|o| o.figures().is_some())
        .map(|o| o.strategy)
        .collect();
    let yearly = year_wise(input, &computed)?;

    let output = ComparisonOutput {
        scenarios: outcomes,
        yearly,
        recommendation,
        interest_rate_spread: input.loan_rate - input.resolved_return(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Capital-allocation comparison (EMI amortization vs compounded idle capital)",
        &serde_json::json!({
            "project_cost": input.project_cost.to_string(),
            "own_capital": input.own_capital.to_string(),
            "loan_rate_pct": input.loan_rate.to_string(),
            "loan_tenure_years": input.loan_tenure,
            "loan_interest_deductible": input.loan_interest_deductible,
            "tax_rate_pct": input.tax_rate.to_string(),
            "investment_kind": input.investment_kind.profile().name,
            "investment_return_pct": input.resolved_return().to_string(),
            "compounding": input.investment_kind.profile().compounding,
            "currency_unit_scale": input.currency_unit_scale.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
