//! Page command - self-contained HTML calculator page

mod html;

use crate::display::DisplayConfig;
use crate::form::{AverageCostForm, DividendForm, ExPriceForm};
use anyhow::Context;
use clap::Args;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub use html::generate;

#[derive(Args, Debug)]
pub struct PageCommand {
    /// JSON file with the form values of each module (see `boursa schema`)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path (default: opens in browser)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Form values rendered on the page. Missing modules use their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PageInput {
    pub ex_price: ExPriceForm,
    pub dividend: DividendForm,
    pub average_cost: AverageCostForm,
}

pub fn read_page_input(path: &Path) -> anyhow::Result<PageInput> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let input = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid page input in {}", path.display()))?;
    Ok(input)
}

impl PageCommand {
    pub fn exec(&self, config: DisplayConfig) -> anyhow::Result<()> {
        let input = match &self.input {
            Some(path) => read_page_input(path)?,
            None => PageInput::default(),
        };

        let html = generate(&input, config)?;

        if let Some(ref output_path) = self.output {
            std::fs::write(output_path, &html)?;
            log::info!("Page written to {}", output_path.display());
            println!("HTML page written to: {}", output_path.display());
        } else {
            // Write to temp file and open in browser
            let temp_path = std::env::temp_dir().join("boursa.html");
            std::fs::write(&temp_path, &html)?;
            opener::open(&temp_path)?;
            println!("Opened calculator page in browser: {}", temp_path.display());
        }

        Ok(())
    }
}
