//! Raw text forms for each calculator module.
//!
//! Forms hold exactly what the user typed. Converting a form to an engine
//! input applies the permissive parsing rules: unparseable text becomes 0,
//! and negatives are clamped to 0 except in the average-cost form, whose
//! validation rejects them instead.

pub mod session;

use crate::core::{
    average_cost, dividend, ex_price, Adjustment, AverageCostInput, AverageCostResult, CalcError,
    DividendInput, DividendResult, ExPriceInput, ExPriceResult,
};
use crate::format::{parse_input_number, parse_non_negative};
use boursa_derive::FormFields;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use session::Session;

/// Name and description of an editable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub description: &'static str,
}

/// By-name access to a form's text fields, usually derived.
pub trait FormFields {
    fn fields() -> &'static [FormField];
    fn field(&self, name: &str) -> Option<&str>;
    fn set_field(&mut self, name: &str, value: &str) -> bool;
}

/// A form that can be evaluated by its engine.
pub trait Form: FormFields + Default + Clone {
    type Output: Clone;

    /// Whether results wait for an explicit calculate action.
    const GATED: bool;

    fn evaluate(&self) -> Result<Self::Output, CalcError>;
}

/// Which corporate actions an ex-price calculation applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AdjustmentKind {
    None,
    #[default]
    Bonus,
    CapitalIncrease,
    CapitalReduction,
    All,
}

impl AdjustmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AdjustmentKind::None => "none",
            AdjustmentKind::Bonus => "bonus",
            AdjustmentKind::CapitalIncrease => "capital-increase",
            AdjustmentKind::CapitalReduction => "capital-reduction",
            AdjustmentKind::All => "all",
        }
    }
}

impl FromStr for AdjustmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "none" => Ok(AdjustmentKind::None),
            "bonus" => Ok(AdjustmentKind::Bonus),
            "capital-increase" | "increase" => Ok(AdjustmentKind::CapitalIncrease),
            "capital-reduction" | "reduction" => Ok(AdjustmentKind::CapitalReduction),
            "all" => Ok(AdjustmentKind::All),
            other => Err(format!(
                "unknown adjustment '{other}', expected none, bonus, capital-increase, capital-reduction or all"
            )),
        }
    }
}

/// Ex-price inputs as typed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, FormFields)]
#[serde(default)]
pub struct ExPriceForm {
    /// Adjustment kind: none, bonus, capital-increase, capital-reduction or all
    pub kind: String,
    /// Closing price before the corporate action, in fils
    pub closing_price: String,
    /// Bonus shares percentage
    pub bonus_percent: String,
    /// Capital increase percentage
    pub increase_percent: String,
    /// Subscription price for the capital increase, in fils
    pub subscription_price: String,
    /// Capital reduction percentage, entered as a positive number
    pub reduction_percent: String,
}

impl Default for ExPriceForm {
    fn default() -> Self {
        Self {
            kind: AdjustmentKind::Bonus.as_str().to_string(),
            closing_price: "775".to_string(),
            bonus_percent: "8".to_string(),
            increase_percent: "0".to_string(),
            subscription_price: "0".to_string(),
            reduction_percent: "0".to_string(),
        }
    }
}

impl ExPriceForm {
    pub fn kind(&self) -> AdjustmentKind {
        self.kind.parse().unwrap_or_else(|err| {
            log::warn!("{err}; applying no adjustment");
            AdjustmentKind::None
        })
    }

    pub fn to_input(&self) -> ExPriceInput {
        let bonus_percent = parse_non_negative(&self.bonus_percent);
        let increase_percent = parse_non_negative(&self.increase_percent);
        let subscription_price = parse_non_negative(&self.subscription_price);
        let reduction_percent = parse_non_negative(&self.reduction_percent);

        let adjustment = match self.kind() {
            AdjustmentKind::None => Adjustment::None,
            AdjustmentKind::Bonus => Adjustment::Bonus { bonus_percent },
            AdjustmentKind::CapitalIncrease => Adjustment::CapitalIncrease {
                increase_percent,
                subscription_price,
            },
            AdjustmentKind::CapitalReduction => Adjustment::CapitalReduction { reduction_percent },
            AdjustmentKind::All => Adjustment::All {
                bonus_percent,
                increase_percent,
                subscription_price,
                reduction_percent,
            },
        };

        ExPriceInput::new(parse_non_negative(&self.closing_price), adjustment)
    }
}

impl Form for ExPriceForm {
    type Output = ExPriceResult;
    const GATED: bool = true;

    fn evaluate(&self) -> Result<ExPriceResult, CalcError> {
        ex_price::compute(&self.to_input())
    }
}

/// Dividend inputs as typed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, FormFields)]
#[serde(default)]
pub struct DividendForm {
    /// Number of shares held
    pub share_count: String,
    /// Cash dividend per share, in fils
    pub cash_dividend: String,
    /// Bonus shares percentage
    pub bonus_percent: String,
}

impl Default for DividendForm {
    fn default() -> Self {
        Self {
            share_count: "100000".to_string(),
            cash_dividend: "12".to_string(),
            bonus_percent: "8".to_string(),
        }
    }
}

impl DividendForm {
    pub fn to_input(&self) -> DividendInput {
        DividendInput {
            share_count: parse_non_negative(&self.share_count),
            cash_dividend_fils: parse_non_negative(&self.cash_dividend),
            bonus_percent: parse_non_negative(&self.bonus_percent),
        }
    }
}

impl Form for DividendForm {
    type Output = DividendResult;
    const GATED: bool = false;

    fn evaluate(&self) -> Result<DividendResult, CalcError> {
        Ok(dividend::compute(&self.to_input()))
    }
}

/// Average cost inputs as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, FormFields)]
#[serde(default)]
pub struct AverageCostForm {
    /// Shares already held
    pub current_qty: String,
    /// Current average cost per share, in KD
    pub current_price: String,
    /// Shares to buy
    pub buy_qty: String,
    /// Price per share of the new purchase, in KD
    pub buy_price: String,
}

impl AverageCostForm {
    pub fn to_input(&self) -> AverageCostInput {
        AverageCostInput {
            current_qty: parse_input_number(&self.current_qty),
            current_price: parse_input_number(&self.current_price),
            buy_qty: parse_input_number(&self.buy_qty),
            buy_price: parse_input_number(&self.buy_price),
        }
    }
}

impl Form for AverageCostForm {
    type Output = AverageCostResult;
    const GATED: bool = true;

    fn evaluate(&self) -> Result<AverageCostResult, CalcError> {
        let input = self.to_input();
        input.validate()?;
        Ok(average_cost::compute(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_field_list() {
        let names: Vec<_> = ExPriceForm::fields().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "kind",
                "closing_price",
                "bonus_percent",
                "increase_percent",
                "subscription_price",
                "reduction_percent"
            ]
        );
        assert_eq!(
            DividendForm::fields()[1].description,
            "Cash dividend per share, in fils"
        );
    }

    #[test]
    fn set_and_get_by_name() {
        let mut form = AverageCostForm::default();
        assert!(form.set_field("buy_qty", "500"));
        assert_eq!(form.field("buy_qty"), Some("500"));
        assert!(!form.set_field("unknown", "1"));
        assert_eq!(form.field("unknown"), None);
    }

    #[test]
    fn kind_selects_variant() {
        let mut form = ExPriceForm {
            kind: "all".to_string(),
            closing_price: "500".to_string(),
            bonus_percent: "5".to_string(),
            increase_percent: "10".to_string(),
            subscription_price: "300".to_string(),
            reduction_percent: "2".to_string(),
        };
        assert_eq!(
            form.to_input().adjustment,
            Adjustment::All {
                bonus_percent: 5.0,
                increase_percent: 10.0,
                subscription_price: 300.0,
                reduction_percent: 2.0,
            }
        );

        form.kind = "capital-increase".to_string();
        assert_eq!(
            form.to_input().adjustment,
            Adjustment::CapitalIncrease {
                increase_percent: 10.0,
                subscription_price: 300.0,
            }
        );
    }

    #[test]
    fn unknown_kind_applies_nothing() {
        let form = ExPriceForm {
            kind: "split".to_string(),
            ..ExPriceForm::default()
        };
        assert_eq!(form.to_input().adjustment, Adjustment::None);
    }

    #[test]
    fn kind_parsing_accepts_aliases() {
        assert_eq!("capital_reduction".parse::<AdjustmentKind>(), Ok(AdjustmentKind::CapitalReduction));
        assert_eq!("Increase".parse::<AdjustmentKind>(), Ok(AdjustmentKind::CapitalIncrease));
        assert!("split".parse::<AdjustmentKind>().is_err());
    }

    #[test]
    fn ex_price_and_dividend_clamp_negatives() {
        let form = ExPriceForm {
            closing_price: "-775".to_string(),
            ..ExPriceForm::default()
        };
        assert_eq!(form.to_input().closing_price, 0.0);

        let form = DividendForm {
            share_count: "-10".to_string(),
            ..DividendForm::default()
        };
        assert_eq!(form.to_input().share_count, 0.0);
    }

    #[test]
    fn average_cost_rejects_negatives() {
        let form = AverageCostForm {
            current_qty: "1000".to_string(),
            current_price: "-0.5".to_string(),
            ..AverageCostForm::default()
        };
        assert_eq!(
            form.evaluate(),
            Err(CalcError::NegativeInput {
                field: "current_price"
            })
        );
    }

    #[test]
    fn default_forms_evaluate() {
        let ex = ExPriceForm::default().evaluate().unwrap();
        assert_eq!((ex.adjusted_price * 1000.0).round() / 1000.0, 717.593);

        let div = DividendForm::default().evaluate().unwrap();
        assert_eq!(div.final_shares, 108_000.0);

        let avg = AverageCostForm::default().evaluate().unwrap();
        assert_eq!(avg.new_average_price, 0.0);
    }
}
