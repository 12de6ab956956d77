//! Average cost command - weighted average after an additional purchase

use super::render;
use crate::core::{AverageCostInput, AverageCostResult};
use crate::display::DisplayConfig;
use crate::form::{AverageCostForm, Form};
use crate::{labels, share};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct AverageCostCommand {
    /// Shares already held
    #[arg(short = 'q', long, default_value = "", allow_hyphen_values = true)]
    current_qty: String,

    /// Current average cost per share, in KD
    #[arg(short = 'p', long, default_value = "", allow_hyphen_values = true)]
    current_price: String,

    /// Shares to buy
    #[arg(short = 'Q', long, default_value = "", allow_hyphen_values = true)]
    buy_qty: String,

    /// Price per share of the new purchase, in KD
    #[arg(short = 'P', long, default_value = "", allow_hyphen_values = true)]
    buy_price: String,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,

    /// Print the shareable result text
    #[arg(long)]
    share_text: bool,
}

/// `result` is null when any input is negative
#[derive(Debug, Serialize)]
struct AverageCostOutput<'a> {
    input: &'a AverageCostInput,
    result: Option<&'a AverageCostResult>,
}

impl AverageCostCommand {
    fn form(&self) -> AverageCostForm {
        AverageCostForm {
            current_qty: self.current_qty.clone(),
            current_price: self.current_price.clone(),
            buy_qty: self.buy_qty.clone(),
            buy_price: self.buy_price.clone(),
        }
    }

    pub fn exec(&self, config: DisplayConfig) -> anyhow::Result<()> {
        let form = self.form();
        let input = form.to_input();
        // Invalid input suppresses the result rather than failing
        let result = form
            .evaluate()
            .inspect_err(|err| log::debug!("Average cost not shown: {err}"))
            .ok();

        if self.json {
            let output = AverageCostOutput {
                input: &input,
                result: result.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        match result {
            Some(result) if self.share_text => {
                println!("{}", share::average_cost_text(&input, &result, config.language));
            }
            Some(result) => {
                println!();
                println!("{}", render::average_cost_summary(&input, &result, config));
            }
            None => println!("{}", labels::average_cost(config.language).guidance),
        }
        Ok(())
    }
}
