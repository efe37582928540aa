pub mod export;
pub mod html_report;
pub mod link;
pub mod projection;
pub mod schema;
pub mod settings;
pub mod share;
pub mod summary;
pub mod validate;

use crate::export::SavedPlan;
use crate::plan::PlanInputs;
use crate::{link as share_link, settings as settings_store};
use clap::Args;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Plan input flags shared by every computing command.
///
/// Values are resolved lowest-precedence first: built-in defaults, the
/// settings file (unless `--no-settings`), a saved plan loaded with
/// `--load`, a share link passed with `--link`, then any individual field
/// flags.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Services performed per working day
    #[arg(long)]
    daily_count: Option<u32>,

    /// Net payout per service, in yen
    #[arg(long)]
    price: Option<Decimal>,

    /// Working days per month
    #[arg(long)]
    work_days: Option<u32>,

    /// Desired monthly income, in yen
    #[arg(long)]
    monthly_target: Option<Decimal>,

    /// Desired cumulative savings amount, in yen
    #[arg(long)]
    savings_target: Option<Decimal>,

    /// Desired savings horizon in months
    #[arg(long)]
    target_period: Option<u32>,

    /// Fixed monthly outgoing, in yen
    #[arg(long)]
    living_expenses: Option<Decimal>,

    /// Load inputs from a saved plan JSON file
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Load inputs from a share link or query string
    #[arg(long)]
    link: Option<String>,

    /// Ignore the settings file
    #[arg(long)]
    no_settings: bool,
}

impl InputArgs {
    pub fn resolve(&self) -> anyhow::Result<PlanInputs> {
        let mut inputs = PlanInputs::default();

        if !self.no_settings {
            if let Some(saved) = settings_store::load(&settings_store::default_path())? {
                inputs = saved;
            }
        }

        if let Some(ref path) = self.load {
            let file = File::open(path)?;
            let doc = SavedPlan::read_json(BufReader::new(file))?;
            inputs = doc.inputs;
        }

        if let Some(ref link) = self.link {
            inputs = share_link::decode(link);
        }

        self.apply_overrides(&mut inputs);
        Ok(inputs)
    }

    fn apply_overrides(&self, inputs: &mut PlanInputs) {
        if let Some(daily_count) = self.daily_count {
            inputs.daily_count = daily_count;
        }
        if let Some(price) = self.price {
            inputs.price_per_service = price;
        }
        if let Some(work_days) = self.work_days {
            inputs.work_days = work_days;
        }
        if let Some(monthly_target) = self.monthly_target {
            inputs.monthly_target = monthly_target;
        }
        if let Some(savings_target) = self.savings_target {
            inputs.savings_target = savings_target;
        }
        if let Some(target_period) = self.target_period {
            inputs.target_period = target_period;
        }
        if let Some(living_expenses) = self.living_expenses {
            inputs.living_expenses = living_expenses;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn flags_override_link_values() {
        let args = InputArgs {
            daily_count: Some(5),
            link: Some("daily=3&price=12000&days=15".to_string()),
            no_settings: true,
            ..InputArgs::default()
        };
        let inputs = args.resolve().unwrap();
        assert_eq!(inputs.daily_count, 5);
        assert_eq!(inputs.price_per_service, dec!(12000));
        assert_eq!(inputs.work_days, 15);
    }

    #[test]
    fn bare_flags_start_from_defaults() {
        let args = InputArgs {
            monthly_target: Some(dec!(500000)),
            no_settings: true,
            ..InputArgs::default()
        };
        let inputs = args.resolve().unwrap();
        assert_eq!(inputs.monthly_target, dec!(500000));
        assert_eq!(inputs.target_period, 12);
        assert_eq!(inputs.daily_count, 0);
    }
}
