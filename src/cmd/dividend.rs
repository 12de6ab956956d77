//! Dividend command - cash dividend and bonus share entitlement

use super::render;
use crate::core::{DividendInput, DividendResult};
use crate::display::DisplayConfig;
use crate::form::{DividendForm, Form};
use crate::share;
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct DividendCommand {
    /// Number of shares held (NS)
    #[arg(short = 'n', long, default_value = "0", allow_hyphen_values = true)]
    shares: String,

    /// Cash dividend per share, in fils (CD)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    cash_dividend: String,

    /// Bonus shares percentage (B%)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    bonus: String,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,

    /// Print the shareable result text
    #[arg(long)]
    share_text: bool,
}

#[derive(Debug, Serialize)]
struct DividendOutput<'a> {
    input: &'a DividendInput,
    #[serde(flatten)]
    result: &'a DividendResult,
}

impl DividendCommand {
    fn form(&self) -> DividendForm {
        DividendForm {
            share_count: self.shares.clone(),
            cash_dividend: self.cash_dividend.clone(),
            bonus_percent: self.bonus.clone(),
        }
    }

    pub fn exec(&self, config: DisplayConfig) -> anyhow::Result<()> {
        let form = self.form();
        let input = form.to_input();
        let result = form.evaluate()?;

        if self.share_text {
            println!("{}", share::dividend_text(&input, &result, config.language));
        } else if self.json {
            let output = DividendOutput {
                input: &input,
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!();
            println!("{}", render::dividend_summary(&input, &result, config));
        }
        Ok(())
    }
}
