use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual nominal rates expressed as percentages (10.5 = 10.5% p.a.).
/// Never as fractions.
pub type Percent = Decimal;

/// Capital-allocation strategies, listed in recommendation priority order.
/// Ties on net cost resolve to the earliest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Apply as much own capital as the project absorbs; borrow the rest.
    MaxOwnFunding,
    /// Borrow the full project cost; keep all own capital invested.
    MaxLeverage,
    /// Apply a caller-chosen slice of own capital; borrow and invest the rest.
    Balanced,
}

impl Strategy {
    pub const PRIORITY: [Strategy; 3] = [
        Strategy::MaxOwnFunding,
        Strategy::MaxLeverage,
        Strategy::Balanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::MaxOwnFunding => "Max own funding",
            Strategy::MaxLeverage => "Max leverage",
            Strategy::Balanced => "Balanced",
        }
    }
}

/// How many times per year interest is credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    Daily,
    Monthly,
    Quarterly,
    Annual,
}

impl Compounding {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Daily => 365,
            Compounding::Monthly => 12,
            Compounding::Quarterly => 4,
            Compounding::Annual => 1,
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
