//! Schema command - print expected input formats

use super::page::PageInput;
use crate::form::{AverageCostForm, DividendForm, ExPriceForm, FormField, FormFields};
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the `page --input` file
    JsonSchema,
    /// Form fields of each calculator, as used by `set` in interactive mode
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(PageInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        print_section("ex_price", ExPriceForm::fields());
        print_section("dividend", DividendForm::fields());
        print_section("average_cost", AverageCostForm::fields());
        println!("Numbers accept Arabic-Indic digits and thousands separators.");
        Ok(())
    }
}

fn print_section(name: &str, fields: &[FormField]) {
    println!("{}", name);
    println!("{}", "=".repeat(name.len()));
    for field in fields {
        println!("{:20}  {}", field.name, field.description);
    }
    println!();
}
