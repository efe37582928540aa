use crate::plan::inputs::PlanInputs;
use rust_decimal::Decimal;
use serde::Serialize;

/// A violated-field message from the advisory pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputIssue {
    pub field: &'static str,
    pub message: &'static str,
}

/// Advisory input validation, separate from the engine.
///
/// Returns one issue per out-of-range field, in input-record order. The
/// engine itself computes happily with zero or negative values; callers
/// decide whether to block or merely warn.
pub fn validate(inputs: &PlanInputs) -> Vec<InputIssue> {
    let mut issues = Vec::new();

    if inputs.daily_count == 0 {
        issues.push(InputIssue {
            field: "daily_count",
            message: "services per day must be at least 1",
        });
    }
    if inputs.price_per_service <= Decimal::ZERO {
        issues.push(InputIssue {
            field: "price_per_service",
            message: "payout per service must be at least ¥1",
        });
    }
    if inputs.work_days == 0 {
        issues.push(InputIssue {
            field: "work_days",
            message: "working days per month must be at least 1",
        });
    }
    if inputs.monthly_target <= Decimal::ZERO {
        issues.push(InputIssue {
            field: "monthly_target",
            message: "monthly target must be at least ¥1",
        });
    }
    if inputs.savings_target <= Decimal::ZERO {
        issues.push(InputIssue {
            field: "savings_target",
            message: "savings target must be at least ¥1",
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn all_defaults_violate_every_checked_field() {
        let issues = validate(&PlanInputs::default());
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            [
                "daily_count",
                "price_per_service",
                "work_days",
                "monthly_target",
                "savings_target"
            ]
        );
    }

    #[test]
    fn valid_inputs_produce_no_issues() {
        let inputs = PlanInputs {
            daily_count: 3,
            price_per_service: dec!(12000),
            work_days: 15,
            monthly_target: dec!(500000),
            savings_target: dec!(3000000),
            ..PlanInputs::default()
        };
        assert!(validate(&inputs).is_empty());
    }

    #[test]
    fn negative_amounts_are_flagged() {
        let inputs = PlanInputs {
            daily_count: 3,
            price_per_service: dec!(-1),
            work_days: 15,
            monthly_target: dec!(500000),
            savings_target: dec!(3000000),
            ..PlanInputs::default()
        };
        let issues = validate(&inputs);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "price_per_service");
    }

    #[test]
    fn living_expenses_and_period_are_not_checked() {
        let inputs = PlanInputs {
            daily_count: 1,
            price_per_service: dec!(1),
            work_days: 1,
            monthly_target: dec!(1),
            savings_target: dec!(1),
            target_period: 0,
            living_expenses: Decimal::ZERO,
        };
        assert!(validate(&inputs).is_empty());
    }
}
