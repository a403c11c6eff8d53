use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Compounding, Percent};

/// Instrument the idle share of own capital is assumed to sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    FixedDeposit,
    LiquidFund,
    SovereignGoldBond,
    ArbitrageFund,
    DebtFund,
}

/// Static profile of an investment instrument. Read-only; never mutated
/// at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct InvestmentProfile {
    pub kind: InvestmentKind,
    pub name: &'static str,
    /// Assumed annual return when the caller does not override it.
    pub default_return_pct: Percent,
    pub compounding: Compounding,
    pub liquidity: &'static str,
    pub tax_efficiency: &'static str,
    pub notes: &'static str,
}

static FIXED_DEPOSIT: InvestmentProfile = InvestmentProfile {
    kind: InvestmentKind::FixedDeposit,
    name: "Fixed Deposit",
    default_return_pct: dec!(7.0),
    compounding: Compounding::Quarterly,
    liquidity: "Medium",
    tax_efficiency: "Taxed at slab rate",
    notes: "Safe, insured up to 5L",
};

static LIQUID_FUND: InvestmentProfile = InvestmentProfile {
    kind: InvestmentKind::LiquidFund,
    name: "Liquid Fund",
    default_return_pct: dec!(6.75),
    compounding: Compounding::Daily,
    liquidity: "High (T+1)",
    tax_efficiency: "Lower tax if held > 3 years",
    notes: "Suits idle cash and corporate treasuries",
};

static SOVEREIGN_GOLD_BOND: InvestmentProfile = InvestmentProfile {
    kind: InvestmentKind::SovereignGoldBond,
    name: "Sovereign Gold Bond",
    default_return_pct: dec!(2.5),
    compounding: Compounding::Annual,
    liquidity: "8-year lock-in",
    tax_efficiency: "Tax-free maturity gains",
    notes: "Hedge, tax-free if held full term",
};

static ARBITRAGE_FUND: InvestmentProfile = InvestmentProfile {
    kind: InvestmentKind::ArbitrageFund,
    name: "Arbitrage Fund",
    default_return_pct: dec!(7.0),
    compounding: Compounding::Daily,
    liquidity: "High (T+1)",
    tax_efficiency: "Equity taxation (10% after 1 yr)",
    notes: "Suits high net-worth safety seekers",
};

static DEBT_FUND: InvestmentProfile = InvestmentProfile {
    kind: InvestmentKind::DebtFund,
    name: "Debt Fund",
    default_return_pct: dec!(7.5),
    compounding: Compounding::Daily,
    liquidity: "Medium",
    tax_efficiency: "Debt tax rules (indexation gone)",
    notes: "Slightly better than FD on return",
};

impl InvestmentKind {
    pub const ALL: [InvestmentKind; 5] = [
        InvestmentKind::FixedDeposit,
        InvestmentKind::LiquidFund,
        InvestmentKind::SovereignGoldBond,
        InvestmentKind::ArbitrageFund,
        InvestmentKind::DebtFund,
    ];

    pub fn profile(&self) -> &'static InvestmentProfile {
        match self {
            InvestmentKind::FixedDeposit => &FIXED_DEPOSIT,
            InvestmentKind::LiquidFund => &LIQUID_FUND,
            InvestmentKind::SovereignGoldBond => &SOVEREIGN_GOLD_BOND,
            InvestmentKind::ArbitrageFund => &ARBITRAGE_FUND,
            InvestmentKind::DebtFund => &DEBT_FUND,
        }
    }
}

/// Every catalog entry, in declaration order.
pub fn all_profiles() -> Vec<&'static InvestmentProfile> {
    InvestmentKind::ALL.iter().map(|k| k.profile()).collect()
}
