//! Summary command - the headline plan figures as text or JSON

use crate::cmd::InputArgs;
use crate::plan::{self, projection, PlanInputs, PlanResults, Tier};
use crate::utils::{format_yen, format_yen_signed};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SummaryCommand {
    #[command(flatten)]
    inputs: InputArgs,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    breakdown: String,
    monthly_income: String,
    yearly_income: String,
    monthly_target: String,
    target_difference: String,
    needed_services: u64,
    achievement_rate_pct: String,
    tier: String,
    tier_rank: u8,
    disposable_income: String,
    actual_savings: String,
    annual_savings: String,
    savings_target: String,
    savings_months: u64,
    five_year_savings: String,
    motivation: String,
    warnings: Vec<String>,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = self.inputs.resolve()?;
        let results = plan::compute(&inputs);

        if self.json {
            self.print_json(&inputs, &results)
        } else {
            self.print_summary(&inputs, &results);
            Ok(())
        }
    }

    fn print_summary(&self, inputs: &PlanInputs, results: &PlanResults) {
        let tier = Tier::for_monthly_income(results.monthly_income);

        println!();
        println!("INCOME PLAN SUMMARY");
        println!();

        println!("INCOME");
        println!(
            "  Monthly: {} ({})",
            format_yen(results.monthly_income),
            inputs.breakdown()
        );
        println!("  Yearly: {}", format_yen(results.yearly_income));
        println!(
            "  Target: {} | Difference: {} | Achievement: {:.1}%",
            format_yen(inputs.monthly_target),
            format_yen_signed(results.target_difference),
            results.achievement_rate
        );
        if results.needed_services > 0 {
            println!(
                "  {} more service(s) per month to reach the target",
                results.needed_services
            );
        }
        println!("  Rank: {} {}", tier.label(), tier.icon());
        println!();

        println!("SAVINGS");
        println!(
            "  Disposable: {} | Monthly set-aside: {}",
            format_yen(results.disposable_income),
            format_yen(results.actual_savings)
        );
        println!(
            "  Annual savings: {} | 5-year outlook: {}",
            format_yen(projection::annual_savings(results)),
            format_yen(projection::five_year_savings(results))
        );
        match results.savings_months {
            0 => println!(
                "  Savings target {} needs a rethink under current expenses",
                format_yen(inputs.savings_target)
            ),
            months => println!(
                "  Savings target {} reached in {} month(s)",
                format_yen(inputs.savings_target),
                months
            ),
        }
        println!();

        println!("{}", plan::motivation_message(results.achievement_rate));

        let issues = plan::validate(inputs);
        if !issues.is_empty() {
            println!();
            for issue in issues {
                println!("\u{26A0} {}: {}", issue.field, issue.message);
            }
        }
        println!();
    }

    fn print_json(&self, inputs: &PlanInputs, results: &PlanResults) -> anyhow::Result<()> {
        let tier = Tier::for_monthly_income(results.monthly_income);
        let data = SummaryData {
            breakdown: inputs.breakdown(),
            monthly_income: format!("{:.0}", results.monthly_income),
            yearly_income: format!("{:.0}", results.yearly_income),
            monthly_target: format!("{:.0}", inputs.monthly_target),
            target_difference: format!("{:.0}", results.target_difference),
            needed_services: results.needed_services,
            achievement_rate_pct: format!("{:.1}", results.achievement_rate),
            tier: tier.label().to_string(),
            tier_rank: tier.rank(),
            disposable_income: format!("{:.0}", results.disposable_income),
            actual_savings: format!("{:.0}", results.actual_savings),
            annual_savings: format!("{:.0}", projection::annual_savings(results)),
            savings_target: format!("{:.0}", inputs.savings_target),
            savings_months: results.savings_months,
            five_year_savings: format!("{:.0}", projection::five_year_savings(results)),
            motivation: plan::motivation_message(results.achievement_rate).to_string(),
            warnings: plan::validate(inputs)
                .into_iter()
                .map(|issue| format!("{}: {}", issue.field, issue.message))
                .collect(),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}
