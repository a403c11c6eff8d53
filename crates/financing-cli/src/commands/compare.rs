use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use financing_core::catalog::InvestmentKind;
use financing_core::scenario::{self, FinancingInput};

use crate::input;

/// CLI mirror of the catalog enum so clap can offer completions.
#[derive(Debug, Clone, ValueEnum)]
pub enum InvestmentKindArg {
    FixedDeposit,
    LiquidFund,
    SovereignGoldBond,
    ArbitrageFund,
    DebtFund,
}

impl From<InvestmentKindArg> for InvestmentKind {
    fn from(arg: InvestmentKindArg) -> Self {
        match arg {
            InvestmentKindArg::FixedDeposit => InvestmentKind::FixedDeposit,
            InvestmentKindArg::LiquidFund => InvestmentKind::LiquidFund,
            InvestmentKindArg::SovereignGoldBond => InvestmentKind::SovereignGoldBond,
            InvestmentKindArg::ArbitrageFund => InvestmentKind::ArbitrageFund,
            InvestmentKindArg::DebtFund => InvestmentKind::DebtFund,
        }
    }
}

/// Arguments for the strategy comparison
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CompareArgs {
    /// Total project cost, in display units (lakh by default)
    #[arg(long)]
    pub project_cost: Option<Decimal>,

    /// Own capital available, same unit as --project-cost
    #[arg(long)]
    pub own_capital: Option<Decimal>,

    /// Annual nominal loan rate, percent
    #[arg(long)]
    pub loan_rate: Option<Decimal>,

    /// Loan tenure, whole years
    #[arg(long)]
    pub loan_tenure: Option<u32>,

    /// Treat loan interest as tax-deductible
    #[arg(long)]
    pub deductible: bool,

    /// Flat marginal tax rate, percent
    #[arg(long)]
    pub tax_rate: Option<Decimal>,

    /// Investment instrument for idle capital
    #[arg(long, value_enum)]
    pub investment_kind: Option<InvestmentKindArg>,

    /// Expected annual investment return, percent (catalog default if omitted)
    #[arg(long)]
    pub investment_return: Option<Decimal>,

    /// Own capital applied directly under the Balanced strategy
    #[arg(long)]
    pub own_contribution: Option<Decimal>,

    /// Base currency units per display unit
    #[arg(long)]
    pub unit_scale: Option<Decimal>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let financing_input: FinancingInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        FinancingInput {
            project_cost: args
                .project_cost
                .ok_or("--project-cost is required (or provide --input)")?,
            own_capital: args
                .own_capital
                .ok_or("--own-capital is required (or provide --input)")?,
            loan_rate: args
                .loan_rate
                .ok_or("--loan-rate is required (or provide --input)")?,
            loan_tenure: args
                .loan_tenure
                .ok_or("--loan-tenure is required (or provide --input)")?,
            loan_interest_deductible: args.deductible,
            tax_rate: args
                .tax_rate
                .ok_or("--tax-rate is required (or provide --input)")?,
            investment_kind: args
                .investment_kind
                .map(Into::into)
                .ok_or("--investment-kind is required (or provide --input)")?,
            investment_return: args.investment_return,
            custom_own_contribution: args.own_contribution,
            currency_unit_scale: args.unit_scale.unwrap_or(dec!(100_000)),
        }
    };

    let result = scenario::compare(&financing_input)?;
    Ok(serde_json::to_value(result)?)
}
