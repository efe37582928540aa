//! Schema command - print expected input formats

use crate::plan::PlanInputs;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the input record
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// Per-field descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(PlanInputs);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        let names: Vec<&str> = PlanInputs::input_schema()
            .iter()
            .map(|field| field.name)
            .collect();
        println!("{}", names.join(","));
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Plan Input Fields");
        println!("=================");
        println!();
        for field in PlanInputs::input_schema() {
            let req = if field.required { "required" } else { "optional" };
            println!("{:20} ({:8})  {}", field.name, req, field.description);
        }
        println!();
        println!("Currency convention: all amounts are whole yen");
        Ok(())
    }
}
