//! Projection command - monthly income vs target and the multi-year
//! savings outlook, as tables or CSV

use crate::cmd::InputArgs;
use crate::plan::{self, projection};
use crate::utils::{self, format_yen};
use clap::Args;
use rust_decimal::Decimal;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Args, Debug)]
pub struct ProjectionCommand {
    #[command(flatten)]
    inputs: InputArgs,

    /// Years covered by the cumulative outlook
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Output as CSV instead of formatted tables
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Clone, Tabled, serde::Serialize)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: &'static str,

    #[tabled(rename = "Projected")]
    #[serde(rename = "projected_income")]
    projected: String,

    #[tabled(rename = "Target")]
    target: String,

    #[tabled(rename = "Cumulative")]
    cumulative: String,
}

#[derive(Debug, Clone, Tabled, serde::Serialize)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,

    #[tabled(rename = "Cumulative income")]
    #[serde(rename = "cumulative_income")]
    cumulative: String,
}

impl ProjectionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = self.inputs.resolve()?;
        let results = plan::compute(&inputs);

        let mut cumulative = Decimal::ZERO;
        let month_rows: Vec<MonthRow> = projection::income_by_month(&results)
            .iter()
            .zip(MONTH_NAMES)
            .map(|(income, month)| {
                cumulative += *income;
                MonthRow {
                    month,
                    projected: format_yen(*income),
                    target: format_yen(inputs.monthly_target),
                    cumulative: format_yen(cumulative),
                }
            })
            .collect();

        let year_rows: Vec<YearRow> = projection::cumulative_income(&results, self.years)
            .iter()
            .enumerate()
            .map(|(i, total)| YearRow {
                year: i as u32 + 1,
                cumulative: format_yen(*total),
            })
            .collect();

        if self.csv {
            utils::write_csv(&month_rows, io::stdout())?;
            println!();
            utils::write_csv(&year_rows, io::stdout())?;
        } else {
            println!();
            println!("MONTHLY PROJECTION");
            print_table(&month_rows);
            println!();
            println!("CUMULATIVE OUTLOOK ({} years)", self.years);
            print_table(&year_rows);
            println!();
        }

        Ok(())
    }
}

fn print_table<T: Tabled>(rows: &[T]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}
