use plansim_derive::InputSchema;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single field entry in the generated input schema.
#[derive(Debug, Clone, Copy)]
pub struct InputField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// The flat input record the engine computes from.
///
/// All currency amounts are whole yen. Every field has a default (0, except
/// `target_period` which defaults to 12 months), so a partially filled
/// document still deserializes; the engine never rejects the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, InputSchema)]
pub struct PlanInputs {
    /// Services performed per working day
    #[serde(default)]
    pub daily_count: u32,

    /// Net payout per service, in yen
    #[serde(default)]
    #[schemars(with = "String")]
    pub price_per_service: Decimal,

    /// Working days per month
    #[serde(default)]
    pub work_days: u32,

    /// Desired monthly income, in yen
    #[serde(default)]
    #[schemars(with = "String")]
    pub monthly_target: Decimal,

    /// Desired cumulative savings amount, in yen
    #[serde(default)]
    #[schemars(with = "String")]
    pub savings_target: Decimal,

    /// Desired savings horizon in months (informational)
    #[serde(default = "default_target_period")]
    pub target_period: u32,

    /// Fixed monthly outgoing, in yen
    #[serde(default)]
    #[schemars(with = "String")]
    pub living_expenses: Decimal,
}

fn default_target_period() -> u32 {
    12
}

impl Default for PlanInputs {
    fn default() -> Self {
        PlanInputs {
            daily_count: 0,
            price_per_service: Decimal::ZERO,
            work_days: 0,
            monthly_target: Decimal::ZERO,
            savings_target: Decimal::ZERO,
            target_period: default_target_period(),
            living_expenses: Decimal::ZERO,
        }
    }
}

impl PlanInputs {
    /// Human-readable income breakdown, e.g. `3 × ¥12,000 × 15 days`.
    pub fn breakdown(&self) -> String {
        format!(
            "{} × {} × {} days",
            self.daily_count,
            crate::utils::format_yen(self.price_per_service),
            self.work_days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_are_zero_except_period() {
        let inputs = PlanInputs::default();
        assert_eq!(inputs.daily_count, 0);
        assert_eq!(inputs.price_per_service, Decimal::ZERO);
        assert_eq!(inputs.work_days, 0);
        assert_eq!(inputs.monthly_target, Decimal::ZERO);
        assert_eq!(inputs.savings_target, Decimal::ZERO);
        assert_eq!(inputs.target_period, 12);
        assert_eq!(inputs.living_expenses, Decimal::ZERO);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let inputs: PlanInputs =
            serde_json::from_str(r#"{"daily_count": 3, "price_per_service": "12000"}"#).unwrap();
        assert_eq!(inputs.daily_count, 3);
        assert_eq!(inputs.price_per_service, dec!(12000));
        assert_eq!(inputs.work_days, 0);
        assert_eq!(inputs.target_period, 12);
    }

    #[test]
    fn empty_json_is_all_defaults() {
        let inputs: PlanInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(inputs, PlanInputs::default());
    }

    #[test]
    fn input_schema_covers_all_fields() {
        let schema = PlanInputs::input_schema();
        assert_eq!(schema.len(), 7);
        assert_eq!(schema[0].name, "daily_count");
        // every field has a default, so none are required
        assert!(schema.iter().all(|f| !f.required));
        assert!(schema.iter().all(|f| !f.description.is_empty()));
    }

    #[test]
    fn breakdown_string() {
        let inputs = PlanInputs {
            daily_count: 3,
            price_per_service: dec!(12000),
            work_days: 15,
            ..PlanInputs::default()
        };
        assert_eq!(inputs.breakdown(), "3 × ¥12,000 × 15 days");
    }
}
