//! Saved plan document: a versioned JSON snapshot of inputs and derived
//! results that can be written out and loaded back later.

use crate::plan::{self, PlanInputs, PlanResults, Tier};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

pub const DOCUMENT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlan {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub inputs: PlanInputs,
    pub results: PlanResults,
    pub tier: TierInfo,
    pub calculations: Calculations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierInfo {
    pub label: String,
    pub rank: u8,
    pub icon: String,
    pub color: String,
}

impl From<Tier> for TierInfo {
    fn from(tier: Tier) -> Self {
        TierInfo {
            label: tier.label().to_string(),
            rank: tier.rank(),
            icon: tier.icon().to_string(),
            color: tier.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculations {
    /// Income breakdown, e.g. `3 × ¥12,000 × 15 days`.
    pub breakdown: String,
    pub five_year_savings: Decimal,
}

impl SavedPlan {
    pub fn new(inputs: PlanInputs) -> Self {
        Self::at(inputs, Utc::now())
    }

    /// Build the document with an explicit timestamp.
    pub fn at(inputs: PlanInputs, timestamp: DateTime<Utc>) -> Self {
        let results = plan::compute(&inputs);
        let tier = Tier::for_monthly_income(results.monthly_income);
        let calculations = Calculations {
            breakdown: inputs.breakdown(),
            five_year_savings: plan::projection::five_year_savings(&results),
        };
        SavedPlan {
            version: DOCUMENT_VERSION.to_string(),
            timestamp,
            inputs,
            results,
            tier: tier.into(),
            calculations,
        }
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    pub fn read_json<R: Read>(reader: R) -> anyhow::Result<SavedPlan> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Default export file name, dated like `income_plan_2026-08-27.json`.
    pub fn default_file_name(&self) -> String {
        format!("income_plan_{}.json", self.timestamp.format("%Y-%m-%d"))
    }
}

/// Flat inputs-plus-results record for delimited export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    pub daily_count: u32,
    pub price_per_service: Decimal,
    pub work_days: u32,
    pub monthly_target: Decimal,
    pub savings_target: Decimal,
    pub target_period: u32,
    pub living_expenses: Decimal,
    pub monthly_income: Decimal,
    pub yearly_income: Decimal,
    pub target_difference: Decimal,
    pub needed_services: u64,
    pub disposable_income: Decimal,
    pub actual_savings: Decimal,
    pub savings_months: u64,
    pub achievement_rate: Decimal,
    pub tier: String,
}

impl ExportRecord {
    pub fn build(inputs: &PlanInputs, results: &PlanResults) -> Self {
        ExportRecord {
            daily_count: inputs.daily_count,
            price_per_service: inputs.price_per_service,
            work_days: inputs.work_days,
            monthly_target: inputs.monthly_target,
            savings_target: inputs.savings_target,
            target_period: inputs.target_period,
            living_expenses: inputs.living_expenses,
            monthly_income: results.monthly_income,
            yearly_income: results.yearly_income,
            target_difference: results.target_difference,
            needed_services: results.needed_services,
            disposable_income: results.disposable_income,
            actual_savings: results.actual_savings,
            savings_months: results.savings_months,
            achievement_rate: results.achievement_rate.round_dp(1),
            tier: Tier::for_monthly_income(results.monthly_income)
                .label()
                .to_string(),
        }
    }
}
