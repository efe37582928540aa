//! Settings command - persist default inputs between runs

use crate::cmd::InputArgs;
use crate::settings;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SettingsCommand {
    /// Settings file path (default: $PLANSIM_SETTINGS or
    /// ~/.config/plansim/settings.json)
    #[arg(long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    action: SettingsAction,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Print the saved inputs
    Show,
    /// Save the resolved inputs as the new defaults
    Save {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Remove the settings file
    Reset,
}

impl SettingsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let path = self.file.clone().unwrap_or_else(settings::default_path);

        match &self.action {
            SettingsAction::Show => match settings::load(&path)? {
                Some(inputs) => {
                    println!("{}", serde_json::to_string_pretty(&inputs)?);
                    Ok(())
                }
                None => {
                    println!("No settings saved at {}", path.display());
                    Ok(())
                }
            },
            SettingsAction::Save { inputs } => {
                let resolved = inputs.resolve()?;
                settings::save(&path, &resolved)?;
                println!("Settings saved to: {}", path.display());
                Ok(())
            }
            SettingsAction::Reset => {
                if settings::clear(&path)? {
                    println!("Settings removed: {}", path.display());
                } else {
                    println!("No settings to remove at {}", path.display());
                }
                Ok(())
            }
        }
    }
}
