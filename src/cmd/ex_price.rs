//! Ex-price command - adjusted price and price range table

use super::render;
use crate::core::{ExPriceInput, ExPriceResult};
use crate::display::DisplayConfig;
use crate::form::{AdjustmentKind, ExPriceForm, Form};
use crate::{labels, share, utils};
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::io;

#[derive(Args, Debug)]
pub struct ExPriceCommand {
    /// Closing price before the corporate action, in fils
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    closing_price: String,

    /// Adjustments to apply
    #[arg(short, long, value_enum, default_value_t = AdjustmentKind::All)]
    kind: AdjustmentKind,

    /// Bonus shares percentage (B%)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    bonus: String,

    /// Capital increase percentage (CI%)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    increase: String,

    /// Subscription price for the capital increase, in fils (SP)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    subscription_price: String,

    /// Capital reduction percentage, as a positive number (CR%)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    reduction: String,

    /// Omit the price range table
    #[arg(long)]
    no_table: bool,

    /// Output as JSON instead of formatted tables
    #[arg(long)]
    json: bool,

    /// Write the price range table as CSV
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Print the shareable result text
    #[arg(long)]
    share_text: bool,
}

#[derive(Debug, Serialize)]
struct ExPriceOutput<'a> {
    input: &'a ExPriceInput,
    #[serde(flatten)]
    result: &'a ExPriceResult,
}

impl ExPriceCommand {
    fn form(&self) -> ExPriceForm {
        ExPriceForm {
            kind: self.kind.as_str().to_string(),
            closing_price: self.closing_price.clone(),
            bonus_percent: self.bonus.clone(),
            increase_percent: self.increase.clone(),
            subscription_price: self.subscription_price.clone(),
            reduction_percent: self.reduction.clone(),
        }
    }

    pub fn exec(&self, config: DisplayConfig) -> anyhow::Result<()> {
        let form = self.form();
        let input = form.to_input();
        let result = form.evaluate().context("Cannot calculate the ex-price")?;

        if self.share_text {
            println!("{}", share::ex_price_text(&input, &result, config.language));
        } else if self.json {
            let output = ExPriceOutput {
                input: &input,
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else if self.csv {
            utils::write_csv(&result.table, io::stdout())?;
        } else {
            self.print(&input, &result, config);
        }
        Ok(())
    }

    fn print(&self, input: &ExPriceInput, result: &ExPriceResult, config: DisplayConfig) {
        println!();
        println!("{}", render::ex_price_summary(input, result, config));

        if self.no_table || result.table.is_empty() {
            return;
        }

        println!();
        println!("{}", labels::ex_price(config.language).price_range);
        println!("{}", render::price_range(result, config));
    }
}
