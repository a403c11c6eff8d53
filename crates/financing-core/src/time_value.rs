use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::FinancingError;
use crate::types::{Compounding, Money, Percent};
use crate::FinancingResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
// Percent p.a. -> monthly fractional rate
const MONTHLY_RATE_DIVISOR: Decimal = dec!(1200);

/// Equal monthly installment that fully amortizes `principal` over
/// `tenure_years` at `annual_rate_pct` (nominal p.a., monthly rests):
///
/// `P * r * (1+r)^n / ((1+r)^n - 1)` with `r = pct/1200`, `n = years * 12`.
///
/// Degenerate terms resolve to fixed policies rather than crashing:
/// zero principal owes nothing, a zero-year term repays the whole
/// principal in one shot, and a zero rate is straight-line over the term.
/// An unrepresentable compounding factor (extreme rate x tenure) is
/// reported as `FinancingError::Overflow`, never as a saturated value.
pub fn monthly_installment(
    principal: Money,
    annual_rate_pct: Percent,
    tenure_years: u32,
) -> FinancingResult<Money> {
    if principal < Decimal::ZERO {
        return Err(FinancingError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal must be >= 0".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(FinancingError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Loan rate must be >= 0".into(),
        });
    }

    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if tenure_years == 0 {
        return Ok(principal);
    }

    let months = MONTHS_PER_YEAR * Decimal::from(tenure_years);
    if annual_rate_pct.is_zero() {
        return Ok(principal / months);
    }

    let monthly_rate = annual_rate_pct / MONTHLY_RATE_DIVISOR;
    let factor = (Decimal::ONE + monthly_rate)
        .checked_powi(i64::from(tenure_years) * 12)
        .ok_or_else(|| FinancingError::Overflow {
            context: "installment compounding factor (1+r)^n".into(),
        })?;

    let numerator = principal
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(factor))
        .ok_or_else(|| FinancingError::Overflow {
            context: "installment numerator P*r*(1+r)^n".into(),
        })?;

    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(FinancingError::DivisionByZero {
            context: "installment annuity denominator".into(),
        });
    }

    Ok(numerator / denominator)
}

/// Maturity value of `principal` compounded at `annual_rate_pct` for
/// `years`, credited `compounding.periods_per_year()` times a year:
///
/// `P * (1 + rate/k)^(k * years)`.
///
/// Zero principal or a zero-year horizon is a no-op.
pub fn compound_growth(
    principal: Money,
    annual_rate_pct: Percent,
    years: u32,
    compounding: Compounding,
) -> FinancingResult<Money> {
    if principal < Decimal::ZERO {
        return Err(FinancingError::InvalidInput {
            field: "principal".into(),
            reason: "Invested principal must be >= 0".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(FinancingError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Investment return must be >= 0".into(),
        });
    }

    if principal.is_zero() || years == 0 {
        return Ok(principal);
    }

    let periods_per_year = compounding.periods_per_year();
    let periodic_rate =
        annual_rate_pct / dec!(100) / Decimal::from(periods_per_year);
    let periods = i64::from(periods_per_year) * i64::from(years);

    let factor = (Decimal::ONE + periodic_rate)
        .checked_powi(periods)
        .ok_or_else(|| FinancingError::Overflow {
            context: "growth compounding factor (1+rate/k)^(k*years)".into(),
        })?;

    principal
        .checked_mul(factor)
        .ok_or_else(|| FinancingError::Overflow {
            context: "investment maturity value".into(),
        })
}
