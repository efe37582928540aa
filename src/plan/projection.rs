//! Numeric series behind the plan charts: flat monthly projection,
//! cumulative income over years, and savings progress.

use crate::plan::engine::PlanResults;
use crate::plan::inputs::PlanInputs;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Projected income for each month of a year. The projection is flat:
/// every month carries the same expected income.
pub fn income_by_month(results: &PlanResults) -> [Decimal; 12] {
    [results.monthly_income; 12]
}

/// Cumulative income at the end of each year, for `1..=years`.
pub fn cumulative_income(results: &PlanResults, years: u32) -> Vec<Decimal> {
    (1..=years)
        .map(|n| results.yearly_income * Decimal::from(n))
        .collect()
}

/// Savings put aside over a full year at the current pace.
pub fn annual_savings(results: &PlanResults) -> Decimal {
    results.actual_savings * Decimal::from(MONTHS_PER_YEAR)
}

/// Five-year income outlook.
pub fn five_year_savings(results: &PlanResults) -> Decimal {
    results.yearly_income * dec!(5)
}

/// Progress toward the savings target after one year of saving, clamped
/// to 0..=100. Zero when there is no savings target.
pub fn savings_progress_pct(inputs: &PlanInputs, results: &PlanResults) -> Decimal {
    if inputs.savings_target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let pct = annual_savings(results) / inputs.savings_target * dec!(100);
    pct.clamp(Decimal::ZERO, dec!(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::engine::compute;

    fn sample() -> (PlanInputs, PlanResults) {
        let inputs = PlanInputs {
            daily_count: 3,
            price_per_service: dec!(12000),
            work_days: 15,
            monthly_target: dec!(500000),
            savings_target: dec!(3000000),
            living_expenses: dec!(200000),
            ..PlanInputs::default()
        };
        let results = compute(&inputs);
        (inputs, results)
    }

    #[test]
    fn monthly_projection_is_flat() {
        let (_, results) = sample();
        let months = income_by_month(&results);
        assert_eq!(months.len(), 12);
        assert!(months.iter().all(|m| *m == dec!(540000)));
    }

    #[test]
    fn cumulative_income_grows_linearly() {
        let (_, results) = sample();
        let series = cumulative_income(&results, 5);
        assert_eq!(series.len(), 5);
        assert_eq!(series[0], dec!(6480000));
        assert_eq!(series[4], dec!(32400000));
        assert!(series.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn five_year_savings_is_five_yearly_incomes() {
        let (_, results) = sample();
        assert_eq!(five_year_savings(&results), results.yearly_income * dec!(5));
    }

    #[test]
    fn annual_savings_from_monthly_set_aside() {
        let (_, results) = sample();
        assert_eq!(annual_savings(&results), dec!(4080000));
    }

    #[test]
    fn savings_progress_is_clamped_to_100() {
        let (inputs, results) = sample();
        // 4,080,000 saved in a year against a 3,000,000 target
        assert_eq!(savings_progress_pct(&inputs, &results), dec!(100));
    }

    #[test]
    fn savings_progress_partial() {
        let mut inputs = sample().0;
        inputs.savings_target = dec!(8160000);
        let results = compute(&inputs);
        assert_eq!(savings_progress_pct(&inputs, &results), dec!(50));
    }

    #[test]
    fn savings_progress_zero_without_target() {
        let mut inputs = sample().0;
        inputs.savings_target = Decimal::ZERO;
        let results = compute(&inputs);
        assert_eq!(savings_progress_pct(&inputs, &results), Decimal::ZERO);
    }
}
