//! Export command - write the plan as a saved JSON document or a flat CSV
//! record

use crate::cmd::InputArgs;
use crate::export::{ExportRecord, SavedPlan};
use crate::utils;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportCommand {
    #[command(flatten)]
    inputs: InputArgs,

    /// Output file path (default: a dated file name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ExportFormat {
    /// Versioned saved-plan document, re-loadable with --load
    #[default]
    Json,
    /// Single flat record of inputs and results
    Csv,
}

impl ExportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = self.inputs.resolve()?;
        let doc = SavedPlan::new(inputs);

        if self.stdout {
            self.write(&doc, io::stdout())?;
            return Ok(());
        }

        let path = self.output.clone().unwrap_or_else(|| {
            let name = match self.format {
                ExportFormat::Json => doc.default_file_name(),
                ExportFormat::Csv => doc.default_file_name().replace(".json", ".csv"),
            };
            PathBuf::from(name)
        });
        let file = File::create(&path)?;
        self.write(&doc, file)?;
        log::info!("exported plan to {}", path.display());
        println!("Plan exported to: {}", path.display());
        Ok(())
    }

    fn write<W: io::Write>(&self, doc: &SavedPlan, writer: W) -> anyhow::Result<()> {
        match self.format {
            ExportFormat::Json => doc.write_json(writer),
            ExportFormat::Csv => {
                let record = ExportRecord::build(&doc.inputs, &doc.results);
                utils::write_csv([record], writer)
            }
        }
    }
}
