use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use financing_core::time_value::{compound_growth, monthly_installment};
use financing_core::types::Compounding;

/// CLI mirror of the compounding enum.
#[derive(Debug, Clone, ValueEnum)]
pub enum CompoundingArg {
    Daily,
    Monthly,
    Quarterly,
    Annual,
}

impl From<CompoundingArg> for Compounding {
    fn from(arg: CompoundingArg) -> Self {
        match arg {
            CompoundingArg::Daily => Compounding::Daily,
            CompoundingArg::Monthly => Compounding::Monthly,
            CompoundingArg::Quarterly => Compounding::Quarterly,
            CompoundingArg::Annual => Compounding::Annual,
        }
    }
}

/// Arguments for the EMI calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct InstallmentArgs {
    /// Loan principal, in base currency units
    #[arg(long)]
    pub principal: Decimal,

    /// Annual nominal rate, percent
    #[arg(long)]
    pub rate: Decimal,

    /// Tenure, whole years
    #[arg(long)]
    pub tenure: u32,
}

/// Arguments for the compound-growth calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct GrowthArgs {
    /// Amount invested
    #[arg(long)]
    pub principal: Decimal,

    /// Annual nominal return, percent
    #[arg(long)]
    pub rate: Decimal,

    /// Horizon, whole years
    #[arg(long)]
    pub years: u32,

    /// Compounding frequency
    #[arg(long, value_enum, default_value = "quarterly")]
    pub compounding: CompoundingArg,
}

pub fn run_installment(args: InstallmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let installment = monthly_installment(args.principal, args.rate, args.tenure)?;
    // A zero-year term repays the principal in a single payment
    let months = if args.tenure == 0 {
        Decimal::ONE
    } else {
        dec!(12) * Decimal::from(args.tenure)
    };
    let total_payment = installment * months;
    Ok(serde_json::json!({
        "monthly_installment": installment.to_string(),
        "total_payment": total_payment.to_string(),
        "total_interest": (total_payment - args.principal).to_string(),
    }))
}

pub fn run_growth(args: GrowthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let maturity = compound_growth(
        args.principal,
        args.rate,
        args.years,
        args.compounding.into(),
    )?;
    Ok(serde_json::json!({
        "maturity_value": maturity.to_string(),
        "gain": (maturity - args.principal).to_string(),
    }))
}
