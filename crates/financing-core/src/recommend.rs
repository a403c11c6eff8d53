use serde::{Deserialize, Serialize};

use crate::error::FinancingError;
use crate::scenario::ScenarioOutcome;
use crate::types::{Money, Strategy};
use crate::FinancingResult;

/// Net cost of one comparable scenario, echoed in the recommendation so
/// reporting layers can show the full ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyNetCost {
    pub strategy: Strategy,
    pub net_cost: Money,
}

/// The chosen strategy plus the spread to the most expensive alternative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: Strategy,
    /// max(net_cost) - min(net_cost) across comparable scenarios.
    pub savings: Money,
    pub net_costs: Vec<StrategyNetCost>,
    /// Strategies whose evaluation overflowed; excluded from the ranking.
    pub not_comparable: Vec<Strategy>,
}

/// Pick the cheapest comparable scenario. Ties resolve to the earliest
/// entry in `Strategy::PRIORITY`, independent of the caller's slice order.
pub fn recommend(outcomes: &[ScenarioOutcome]) -> FinancingResult<Recommendation> {
    let mut net_costs: Vec<StrategyNetCost> = Vec::new();
    let mut not_comparable: Vec<Strategy> = Vec::new();

    for strategy in Strategy::PRIORITY {
        let Some(outcome) = outcomes.iter().find(|o| o.strategy == strategy) else {
            continue;
        };
        match outcome.figures() {
            Some(figures) => net_costs.push(StrategyNetCost {
                strategy,
                net_cost: figures.net_cost,
            }),
            None => not_comparable.push(strategy),
        }
    }

    let Some(first) = net_costs.first() else {
        return Err(FinancingError::InsufficientData(
            "no scenario produced a comparable net cost".into(),
        ));
    };

    let mut best = first;
    let mut worst_cost = first.net_cost;
    for entry in &net_costs[1..] {
        if entry.net_cost < best.net_cost {
            best = entry;
        }
        if entry.net_cost > worst_cost {
            worst_cost = entry.net_cost;
        }
    }

    Ok(Recommendation {
        strategy: best.strategy,
        savings: worst_cost - best.net_cost,
        net_costs: net_costs.clone(),
        not_comparable,
    })
}
