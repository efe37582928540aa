//! Share command - the shareable results block, with an optional link

use crate::cmd::InputArgs;
use crate::link;
use crate::plan::{self, Tier};
use crate::utils::format_yen;
use clap::Args;

#[derive(Args, Debug)]
pub struct ShareCommand {
    #[command(flatten)]
    inputs: InputArgs,

    /// Base URL to append the plan parameters to
    #[arg(long)]
    url: Option<String>,
}

impl ShareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = self.inputs.resolve()?;
        let results = plan::compute(&inputs);
        let tier = Tier::for_monthly_income(results.monthly_income);

        println!("💰 Income plan results");
        println!("Monthly income: {}", format_yen(results.monthly_income));
        println!("Achievement: {:.1}%", results.achievement_rate);
        println!("Rank: {} {}", tier.label(), tier.icon());
        println!();
        println!("#IncomePlanner #SavingsGoal");

        let query = link::encode(&inputs);
        println!();
        match self.url {
            Some(ref base) => println!("{}?{}", base.trim_end_matches('?'), query),
            None => println!("{}", query),
        }

        Ok(())
    }
}
