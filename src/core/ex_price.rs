//! Ex-price adjustment after bonus issues and capital changes.

use super::error::CalcError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of rows in the price range table (offsets 0..=107).
pub const TABLE_ROWS: usize = 108;

/// Corporate action applied to the closing price.
///
/// Only the parameters belonging to the selected variant exist, so a
/// capital increase can never be priced without a subscription price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Adjustment {
    #[default]
    None,
    Bonus {
        bonus_percent: f64,
    },
    CapitalIncrease {
        increase_percent: f64,
        subscription_price: f64,
    },
    CapitalReduction {
        /// Positive magnitude, negated when applied.
        reduction_percent: f64,
    },
    All {
        bonus_percent: f64,
        increase_percent: f64,
        subscription_price: f64,
        reduction_percent: f64,
    },
}

/// Rights issue parameters
#[derive(Debug, Clone, Copy, PartialEq)]
struct CapitalIncrease {
    percent: f64,
    subscription_price: f64,
}

/// The stages of the pipeline that the selected adjustment activates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Stages {
    bonus: Option<f64>,
    increase: Option<CapitalIncrease>,
    reduction: Option<f64>,
}

impl Adjustment {
    fn stages(&self) -> Stages {
        match *self {
            Adjustment::None => Stages::default(),
            Adjustment::Bonus { bonus_percent } => Stages {
                bonus: Some(bonus_percent),
                ..Stages::default()
            },
            Adjustment::CapitalIncrease {
                increase_percent,
                subscription_price,
            } => Stages {
                increase: Some(CapitalIncrease {
                    percent: increase_percent,
                    subscription_price,
                }),
                ..Stages::default()
            },
            Adjustment::CapitalReduction { reduction_percent } => Stages {
                reduction: Some(reduction_percent),
                ..Stages::default()
            },
            Adjustment::All {
                bonus_percent,
                increase_percent,
                subscription_price,
                reduction_percent,
            } => Stages {
                bonus: Some(bonus_percent),
                increase: Some(CapitalIncrease {
                    percent: increase_percent,
                    subscription_price,
                }),
                reduction: Some(reduction_percent),
            },
        }
    }

    /// Reduction percent, if the selected kind applies one.
    pub fn reduction_percent(&self) -> Option<f64> {
        self.stages().reduction
    }
}

/// Ex-price calculation input
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExPriceInput {
    pub closing_price: f64,
    pub adjustment: Adjustment,
}

impl ExPriceInput {
    pub fn new(closing_price: f64, adjustment: Adjustment) -> Self {
        Self {
            closing_price,
            adjustment,
        }
    }

    /// Reject a capital reduction that would zero or flip the divisor.
    pub fn validate(&self) -> Result<(), CalcError> {
        match self.adjustment.reduction_percent() {
            Some(pct) if pct >= 100.0 => Err(CalcError::ReductionOutOfRange(pct)),
            _ => Ok(()),
        }
    }
}

/// One row of the price range table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct PriceRow {
    pub original: f64,
    pub adjusted: f64,
}

/// Ex-price calculation result
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ExPriceResult {
    pub adjusted_price: f64,
    pub table: Vec<PriceRow>,
}

/// Apply the bonus, capital increase and capital reduction stages, in that
/// order, to `price`. A stage with a zero percentage is skipped.
pub fn adjust(price: f64, adjustment: &Adjustment) -> f64 {
    let stages = adjustment.stages();
    let mut price = price;

    if let Some(bonus) = stages.bonus.filter(|pct| *pct > 0.0) {
        price /= 1.0 + bonus / 100.0;
    }

    if let Some(ci) = stages.increase.filter(|ci| ci.percent > 0.0) {
        let ratio = ci.percent / 100.0;
        price = (price + ratio * ci.subscription_price) / (1.0 + ratio);
    }

    if let Some(reduction) = stages.reduction.filter(|pct| *pct != 0.0) {
        let cr = -(reduction / 100.0);
        price /= 1.0 + cr;
    }

    price
}

/// Build the price range table by sweeping `closing_price + 0..=107`.
/// Empty when the closing price is zero.
pub fn price_table(closing_price: f64, adjustment: &Adjustment) -> Vec<PriceRow> {
    if closing_price == 0.0 {
        return Vec::new();
    }

    (0..TABLE_ROWS)
        .map(|offset| {
            let original = closing_price + offset as f64;
            PriceRow {
                original,
                adjusted: adjust(original, adjustment),
            }
        })
        .collect()
}

/// Compute the adjusted price and its price range table.
pub fn compute(input: &ExPriceInput) -> Result<ExPriceResult, CalcError> {
    input.validate()?;

    let adjusted_price = adjust(input.closing_price, &input.adjustment);
    let table = price_table(input.closing_price, &input.adjustment);

    log::debug!(
        "Ex-price {} -> {} ({:?}, {} rows)",
        input.closing_price,
        adjusted_price,
        input.adjustment,
        table.len()
    );

    Ok(ExPriceResult {
        adjusted_price,
        table,
    })
}
