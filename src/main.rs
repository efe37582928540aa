use clap::{Parser, Subcommand};

mod cmd;
mod export;
mod link;
mod plan;
mod settings;
mod utils;

#[derive(Parser, Debug)]
#[command(name = "plansim", version, about = "Income and savings plan simulator for service work")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the plan and print the headline summary
    Summary(cmd::summary::SummaryCommand),
    /// Monthly and multi-year projection tables
    Projection(cmd::projection::ProjectionCommand),
    /// Check inputs for out-of-range values
    Validate(cmd::validate::ValidateCommand),
    /// Write the plan to a JSON or CSV file
    Export(cmd::export::ExportCommand),
    /// Print a shareable results block
    Share(cmd::share::ShareCommand),
    /// Generate a printable HTML report
    Html(cmd::html_report::HtmlCommand),
    /// Save, show, or reset the default inputs
    Settings(cmd::settings::SettingsCommand),
    /// Encode or decode share links
    Link(cmd::link::LinkCommand),
    /// Print the expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Summary(cmd) => cmd.exec(),
        Command::Projection(cmd) => cmd.exec(),
        Command::Validate(cmd) => cmd.exec(),
        Command::Export(cmd) => cmd.exec(),
        Command::Share(cmd) => cmd.exec(),
        Command::Html(cmd) => cmd.exec(),
        Command::Settings(cmd) => cmd.exec(),
        Command::Link(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
