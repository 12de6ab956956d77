use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fils per Kuwaiti Dinar
pub const FILS_PER_KD: f64 = 1000.0;

/// Holding and declared distribution
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct DividendInput {
    pub share_count: f64,
    /// Cash dividend per share, in fils
    pub cash_dividend_fils: f64,
    pub bonus_percent: f64,
}

/// Cash and bonus-share entitlement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct DividendResult {
    pub total_cash_fils: f64,
    pub total_cash_kd: f64,
    pub bonus_shares: f64,
    pub final_shares: f64,
}

/// Calculate the cash dividend and bonus shares for a holding
pub fn compute(input: &DividendInput) -> DividendResult {
    let total_cash_fils = input.share_count * input.cash_dividend_fils;
    let bonus_shares = input.share_count * (input.bonus_percent / 100.0);

    DividendResult {
        total_cash_fils,
        total_cash_kd: total_cash_fils / FILS_PER_KD,
        bonus_shares,
        final_shares: input.share_count + bonus_shares,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_and_bonus_entitlement() {
        let result = compute(&DividendInput {
            share_count: 100_000.0,
            cash_dividend_fils: 12.0,
            bonus_percent: 8.0,
        });

        assert_eq!(result.total_cash_fils, 1_200_000.0);
        assert_eq!(result.total_cash_kd, 1200.0);
        assert_eq!(result.bonus_shares, 8000.0);
        assert_eq!(result.final_shares, 108_000.0);
    }

    #[test]
    fn totals_are_consistent() {
        let inputs = [
            (0.0, 0.0, 0.0),
            (1.0, 0.5, 100.0),
            (12_345.0, 7.25, 3.5),
            (999_999.0, 35.0, 12.5),
        ];
        for (share_count, cash_dividend_fils, bonus_percent) in inputs {
            let result = compute(&DividendInput {
                share_count,
                cash_dividend_fils,
                bonus_percent,
            });
            assert_eq!(result.final_shares, share_count + result.bonus_shares);
            assert_eq!(result.total_cash_kd, result.total_cash_fils / 1000.0);
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let input = DividendInput {
            share_count: 12_345.0,
            cash_dividend_fils: 7.25,
            bonus_percent: 3.5,
        };
        assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn empty_holding_yields_nothing() {
        let result = compute(&DividendInput::default());
        assert_eq!(result.total_cash_fils, 0.0);
        assert_eq!(result.final_shares, 0.0);
    }
}
