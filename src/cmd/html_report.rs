//! HTML report generation for the income plan
//!
//! Generates a self-contained, printable HTML file with embedded CSS.

use crate::cmd::InputArgs;
use crate::plan::{self, projection, PlanInputs, PlanResults, Tier};
use crate::utils::{format_yen, format_yen_signed};
use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct HtmlCommand {
    #[command(flatten)]
    inputs: InputArgs,

    /// Output file path (default: opens in browser)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl HtmlCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = self.inputs.resolve()?;
        let results = plan::compute(&inputs);
        let html = generate(&inputs, &results);

        if let Some(ref output_path) = self.output {
            std::fs::write(output_path, &html)?;
            println!("HTML report written to: {}", output_path.display());
        } else {
            // Write to temp file and open in browser
            let temp_path = std::env::temp_dir().join("plansim-report.html");
            std::fs::write(&temp_path, &html)?;
            opener::open(&temp_path)?;
            println!("Opened HTML report in browser: {}", temp_path.display());
        }

        Ok(())
    }
}

pub fn generate(inputs: &PlanInputs, results: &PlanResults) -> String {
    let tier = Tier::for_monthly_income(results.monthly_income);
    let achievement_width = results
        .achievement_rate
        .clamp(Decimal::ZERO, dec!(100))
        .trunc()
        .to_u32()
        .unwrap_or(0);
    let savings_width = projection::savings_progress_pct(inputs, results)
        .trunc()
        .to_u32()
        .unwrap_or(0);

    let savings_line = match results.savings_months {
        0 => format!(
            "Savings target {} is not reachable at the current pace",
            format_yen(inputs.savings_target)
        ),
        months => format!(
            "Savings target {} reached in {} month(s)",
            format_yen(inputs.savings_target),
            months
        ),
    };

    let outlook_rows: String = projection::cumulative_income(results, 5)
        .iter()
        .enumerate()
        .map(|(i, total)| {
            format!(
                "<tr><td>Year {}</td><td class=\"num\">{}</td></tr>",
                i + 1,
                format_yen(*total)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Income Plan Report</title>
<style>
  body {{ font-family: -apple-system, "Segoe UI", sans-serif; margin: 2rem auto; max-width: 720px; color: #1f2937; }}
  h1 {{ font-size: 1.4rem; }}
  h2 {{ font-size: 1.1rem; margin-top: 1.5rem; border-bottom: 1px solid #e5e7eb; padding-bottom: 0.3rem; }}
  table {{ border-collapse: collapse; width: 100%; }}
  td, th {{ padding: 0.35rem 0.6rem; border-bottom: 1px solid #f3f4f6; text-align: left; }}
  td.num {{ text-align: right; font-variant-numeric: tabular-nums; }}
  .badge {{ display: inline-block; padding: 0.2rem 0.7rem; border-radius: 1rem; color: #fff; font-weight: 600; background: {tier_color}; }}
  .bar {{ background: #f3f4f6; border-radius: 0.4rem; height: 0.9rem; overflow: hidden; margin: 0.3rem 0 0.8rem; }}
  .bar > span {{ display: block; height: 100%; background: #f59e0b; }}
  .bar.savings > span {{ background: #10b981; }}
  .motivation {{ margin-top: 1.5rem; padding: 0.8rem; background: #fffbeb; border-radius: 0.5rem; }}
  @media print {{ body {{ margin: 0.5rem; }} .motivation {{ background: none; }} }}
</style>
</head>
<body>
<h1>Income Plan Report</h1>
<p><span class="badge">{tier_icon} {tier_label}</span></p>

<h2>Inputs</h2>
<table>
<tr><td>Services per day</td><td class="num">{daily_count}</td></tr>
<tr><td>Payout per service</td><td class="num">{price}</td></tr>
<tr><td>Working days per month</td><td class="num">{work_days}</td></tr>
<tr><td>Monthly target</td><td class="num">{monthly_target}</td></tr>
<tr><td>Savings target</td><td class="num">{savings_target}</td></tr>
<tr><td>Living expenses</td><td class="num">{living_expenses}</td></tr>
</table>

<h2>Income</h2>
<table>
<tr><td>Monthly income ({breakdown})</td><td class="num">{monthly_income}</td></tr>
<tr><td>Yearly income</td><td class="num">{yearly_income}</td></tr>
<tr><td>Difference to target</td><td class="num">{target_difference}</td></tr>
</table>
<p>Achievement: {achievement_rate:.1}%</p>
<div class="bar"><span style="width: {achievement_width}%"></span></div>

<h2>Savings</h2>
<table>
<tr><td>Disposable income</td><td class="num">{disposable_income}</td></tr>
<tr><td>Monthly set-aside</td><td class="num">{actual_savings}</td></tr>
<tr><td>Annual savings</td><td class="num">{annual_savings}</td></tr>
</table>
<p>{savings_line}</p>
<div class="bar savings"><span style="width: {savings_width}%"></span></div>

<h2>Five-year outlook</h2>
<table>
{outlook_rows}
</table>

<p class="motivation">{motivation}</p>
</body>
</html>
"#,
        tier_color = tier.color(),
        tier_icon = tier.icon(),
        tier_label = tier.label(),
        daily_count = inputs.daily_count,
        price = format_yen(inputs.price_per_service),
        work_days = inputs.work_days,
        monthly_target = format_yen(inputs.monthly_target),
        savings_target = format_yen(inputs.savings_target),
        living_expenses = format_yen(inputs.living_expenses),
        breakdown = inputs.breakdown(),
        monthly_income = format_yen(results.monthly_income),
        yearly_income = format_yen(results.yearly_income),
        target_difference = format_yen_signed(results.target_difference),
        achievement_rate = results.achievement_rate,
        achievement_width = achievement_width,
        disposable_income = format_yen(results.disposable_income),
        actual_savings = format_yen(results.actual_savings),
        annual_savings = format_yen(projection::annual_savings(results)),
        savings_line = savings_line,
        savings_width = savings_width,
        outlook_rows = outlook_rows,
        motivation = plan::motivation_message(results.achievement_rate),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

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
        let results = plan::compute(&inputs);
        (inputs, results)
    }

    #[test]
    fn report_contains_headline_figures() {
        let (inputs, results) = sample();
        let html = generate(&inputs, &results);
        assert!(html.contains("¥540,000"));
        assert!(html.contains("108.0%"));
        assert!(html.contains("Bronze"));
        assert!(html.contains("reached in 9 month(s)"));
    }

    #[test]
    fn achievement_bar_is_capped_at_100() {
        let (mut inputs, _) = sample();
        inputs.monthly_target = dec!(100000);
        let results = plan::compute(&inputs);
        let html = generate(&inputs, &results);
        assert!(html.contains("width: 100%"));
    }

    #[test]
    fn unreachable_savings_target_is_called_out() {
        let (mut inputs, _) = sample();
        inputs.living_expenses = dec!(600000);
        let results = plan::compute(&inputs);
        let html = generate(&inputs, &results);
        assert!(html.contains("not reachable"));
    }
}
