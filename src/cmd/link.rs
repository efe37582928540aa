//! Link command - encode inputs as a share link, or decode one back

use crate::cmd::InputArgs;
use crate::link;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct LinkCommand {
    #[command(subcommand)]
    action: LinkAction,
}

#[derive(Subcommand, Debug)]
enum LinkAction {
    /// Print the query string for the resolved inputs
    Encode {
        #[command(flatten)]
        inputs: InputArgs,

        /// Base URL to prepend
        #[arg(long)]
        url: Option<String>,
    },
    /// Decode a link or query string back into inputs
    Decode {
        /// Share link or bare query string
        link: String,
    },
}

impl LinkCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match &self.action {
            LinkAction::Encode { inputs, url } => {
                let query = link::encode(&inputs.resolve()?);
                match url {
                    Some(base) => println!("{}?{}", base.trim_end_matches('?'), query),
                    None => println!("{}", query),
                }
                Ok(())
            }
            LinkAction::Decode { link: raw } => {
                let inputs = link::decode(raw);
                println!("{}", serde_json::to_string_pretty(&inputs)?);
                Ok(())
            }
        }
    }
}
