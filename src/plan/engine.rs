use crate::plan::inputs::PlanInputs;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Derived metrics, recomputed fresh from a [`PlanInputs`] on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResults {
    pub monthly_income: Decimal,
    pub yearly_income: Decimal,
    /// Monthly income minus the monthly target; negative when short.
    pub target_difference: Decimal,
    /// Additional services per month needed to reach the monthly target.
    pub needed_services: u64,
    /// Monthly income minus living expenses; may be negative.
    pub disposable_income: Decimal,
    /// What can actually be put aside each month (never negative).
    pub actual_savings: Decimal,
    /// Months to reach the savings target; 0 means not achievable under
    /// the current disposable income, not "already met".
    pub savings_months: u64,
    /// Monthly income as a percentage of the monthly target.
    pub achievement_rate: Decimal,
}

/// Compute all derived metrics from the inputs.
///
/// Pure and total: no I/O, no state, no failure modes. Nonsensical inputs
/// (zeros, negatives) still produce a numeric result; the one division
/// hazard, a zero `price_per_service`, is defined to yield
/// `needed_services == 0` rather than an error.
pub fn compute(inputs: &PlanInputs) -> PlanResults {
    let monthly_income = Decimal::from(inputs.daily_count)
        * inputs.price_per_service
        * Decimal::from(inputs.work_days);
    let yearly_income = monthly_income * dec!(12);
    let target_difference = monthly_income - inputs.monthly_target;

    let needed_services = if inputs.price_per_service.is_zero() {
        0
    } else {
        let shortfall = inputs.monthly_target - monthly_income;
        ceil_div_clamped(shortfall, inputs.price_per_service)
    };

    let disposable_income = monthly_income - inputs.living_expenses;
    let actual_savings = disposable_income.max(Decimal::ZERO);

    let savings_months = if actual_savings > Decimal::ZERO {
        ceil_div_clamped(inputs.savings_target, actual_savings)
    } else {
        0
    };

    let achievement_rate = if inputs.monthly_target > Decimal::ZERO {
        monthly_income / inputs.monthly_target * dec!(100)
    } else {
        Decimal::ZERO
    };

    log::debug!(
        "computed plan: monthly {} yearly {} achievement {}",
        monthly_income,
        yearly_income,
        achievement_rate
    );

    PlanResults {
        monthly_income,
        yearly_income,
        target_difference,
        needed_services,
        disposable_income,
        actual_savings,
        savings_months,
        achievement_rate,
    }
}

/// `max(0, ceil(numerator / divisor))` as a whole count.
fn ceil_div_clamped(numerator: Decimal, divisor: Decimal) -> u64 {
    (numerator / divisor)
        .ceil()
        .max(Decimal::ZERO)
        .to_u64()
        .unwrap_or(0)
}
