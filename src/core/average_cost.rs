use super::error::CalcError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current holding plus a new purchase
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct AverageCostInput {
    pub current_qty: f64,
    pub current_price: f64,
    pub buy_qty: f64,
    pub buy_price: f64,
}

impl AverageCostInput {
    /// Any negative field makes the input invalid.
    pub fn validate(&self) -> Result<(), CalcError> {
        let fields = [
            ("current_qty", self.current_qty),
            ("current_price", self.current_price),
            ("buy_qty", self.buy_qty),
            ("buy_price", self.buy_price),
        ];
        match fields.into_iter().find(|(_, value)| *value < 0.0) {
            Some((field, _)) => Err(CalcError::NegativeInput { field }),
            None => Ok(()),
        }
    }
}

/// Combined position after the purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct AverageCostResult {
    pub total_quantity: f64,
    pub total_cost: f64,
    pub new_average_price: f64,
}

/// Weighted average cost of the combined position.
/// The average is 0 when the combined quantity is 0.
pub fn compute(input: &AverageCostInput) -> AverageCostResult {
    let total_quantity = input.current_qty + input.buy_qty;
    let total_cost = input.current_qty * input.current_price + input.buy_qty * input.buy_price;
    let new_average_price = if total_quantity > 0.0 {
        total_cost / total_quantity
    } else {
        0.0
    };

    log::debug!(
        "Average cost: {} shares, cost {}, average {}",
        total_quantity,
        total_cost,
        new_average_price
    );

    AverageCostResult {
        total_quantity,
        total_cost,
        new_average_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(current_qty: f64, current_price: f64, buy_qty: f64, buy_price: f64) -> AverageCostInput {
        AverageCostInput {
            current_qty,
            current_price,
            buy_qty,
            buy_price,
        }
    }

    #[test]
    fn averages_down_after_purchase() {
        let result = compute(&input(1000.0, 0.5, 500.0, 0.6));
        assert_eq!(result.total_quantity, 1500.0);
        assert!((result.total_cost - 800.0).abs() < 1e-9);
        assert_eq!((result.new_average_price * 1000.0).round() / 1000.0, 0.533);
    }

    #[test]
    fn average_times_quantity_is_cost() {
        let cases = [
            input(1.0, 0.1, 2.0, 0.2),
            input(5000.0, 0.255, 0.0, 0.0),
            input(0.0, 0.0, 750.0, 1.234),
            input(123_456.0, 0.987, 65_432.0, 0.321),
        ];
        for case in cases {
            let result = compute(&case);
            let rebuilt = result.new_average_price * result.total_quantity;
            assert!((rebuilt - result.total_cost).abs() < 1e-6);
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let case = input(123_456.0, 0.987, 65_432.0, 0.321);
        assert_eq!(compute(&case), compute(&case));
    }

    #[test]
    fn zero_quantity_yields_zero_average() {
        let result = compute(&input(0.0, 0.5, 0.0, 0.6));
        assert_eq!(result.total_quantity, 0.0);
        assert_eq!(result.new_average_price, 0.0);
    }

    #[test]
    fn negative_field_is_invalid() {
        assert_eq!(
            input(1000.0, 0.5, -1.0, 0.6).validate(),
            Err(CalcError::NegativeInput { field: "buy_qty" })
        );
        assert!(input(1000.0, 0.5, 500.0, 0.6).validate().is_ok());
    }
}
