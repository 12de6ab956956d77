//! Plain-text result summaries for sharing.

use crate::core::{
    Adjustment, AverageCostInput, AverageCostResult, DividendInput, DividendResult, ExPriceInput,
    ExPriceResult,
};
use crate::display::Language;
use crate::format::{format_fils, format_number, format_shares, format_trimmed};
use crate::labels;

fn footer(language: Language) -> String {
    labels::app(language).title.to_string()
}

fn percent(value: f64, language: Language) -> String {
    format!("{}%", format_trimmed(value, language, 2))
}

/// Ex-price summary listing only the parameters of the selected adjustment.
pub fn ex_price_text(input: &ExPriceInput, result: &ExPriceResult, language: Language) -> String {
    let t = labels::ex_price(language);
    let fils = labels::app(language).fils;

    let mut lines = vec![t.share_heading.to_string(), String::new()];
    lines.push(format!(
        "{}: {} {}",
        t.closing_price,
        format_fils(input.closing_price, language),
        fils
    ));
    lines.push(format!("{}: {}", t.kind, kind_label(&input.adjustment, language)));

    for (label, value) in adjustment_parameters(&input.adjustment, language) {
        lines.push(format!("{}: {}", label, value));
    }

    lines.push(String::new());
    lines.push(format!(
        "{}: {} {}",
        t.adjusted_price,
        format_fils(result.adjusted_price, language),
        fils
    ));
    lines.push(String::new());
    lines.push(footer(language));
    lines.join("\n")
}

/// Labelled parameters of the adjustment's active stages, in stage order.
pub fn adjustment_parameters(
    adjustment: &Adjustment,
    language: Language,
) -> Vec<(&'static str, String)> {
    let t = labels::ex_price(language);
    let fils = labels::app(language).fils;
    let bonus = |b: f64| (t.bonus_percent, percent(b, language));
    let increase = |ci: f64, sp: f64| {
        [
            (t.increase_percent, percent(ci, language)),
            (
                t.subscription_price,
                format!("{} {}", format_fils(sp, language), fils),
            ),
        ]
    };
    let reduction = |cr: f64| (t.reduction_percent, percent(cr, language));

    match *adjustment {
        Adjustment::None => Vec::new(),
        Adjustment::Bonus { bonus_percent } => vec![bonus(bonus_percent)],
        Adjustment::CapitalIncrease {
            increase_percent,
            subscription_price,
        } => increase(increase_percent, subscription_price).to_vec(),
        Adjustment::CapitalReduction { reduction_percent } => vec![reduction(reduction_percent)],
        Adjustment::All {
            bonus_percent,
            increase_percent,
            subscription_price,
            reduction_percent,
        } => {
            let mut rows = vec![bonus(bonus_percent)];
            rows.extend(increase(increase_percent, subscription_price));
            rows.push(reduction(reduction_percent));
            rows
        }
    }
}

pub fn kind_label(adjustment: &Adjustment, language: Language) -> &'static str {
    let t = labels::ex_price(language);
    match adjustment {
        Adjustment::None => t.kind_none,
        Adjustment::Bonus { .. } => t.kind_bonus,
        Adjustment::CapitalIncrease { .. } => t.kind_increase,
        Adjustment::CapitalReduction { .. } => t.kind_reduction,
        Adjustment::All { .. } => t.kind_all,
    }
}

pub fn dividend_text(input: &DividendInput, result: &DividendResult, language: Language) -> String {
    let t = labels::dividend(language);
    let app = labels::app(language);

    [
        t.share_heading.to_string(),
        String::new(),
        format!(
            "{}: {} {}",
            t.share_count,
            format_shares(input.share_count, language),
            app.shares
        ),
        format!(
            "{}: {}",
            t.cash_dividend,
            format_trimmed(input.cash_dividend_fils, language, 3)
        ),
        format!("{}: {}", t.bonus_percent, percent(input.bonus_percent, language)),
        String::new(),
        format!(
            "{}: {} {} ({} {})",
            t.total_cash,
            format_fils(result.total_cash_kd, language),
            app.kd,
            format_shares(result.total_cash_fils, language),
            app.fils
        ),
        format!(
            "{}: {} {}",
            t.bonus_shares,
            format_shares(result.bonus_shares, language),
            app.shares
        ),
        format!(
            "{}: {} {}",
            t.final_shares,
            format_shares(result.final_shares, language),
            app.shares
        ),
        String::new(),
        footer(language),
    ]
    .join("\n")
}

/// Average cost summary. Zero-valued lines are left out.
pub fn average_cost_text(
    input: &AverageCostInput,
    result: &AverageCostResult,
    language: Language,
) -> String {
    let t = labels::average_cost(language);
    let shares = labels::app(language).shares;
    let quantity = |label: &str, value: f64| {
        format!("{}: {} {}", label, format_number(value, language, 0), shares)
    };
    let price = |label: &str, value: f64| format!("{}: {}", label, format_fils(value, language));

    let mut lines = vec![t.share_heading.to_string(), String::new()];
    if input.current_qty > 0.0 {
        lines.push(quantity(t.current_qty, input.current_qty));
    }
    if input.current_price > 0.0 {
        lines.push(price(t.current_price, input.current_price));
    }
    if input.buy_qty > 0.0 {
        lines.push(quantity(t.buy_qty, input.buy_qty));
    }
    if input.buy_price > 0.0 {
        lines.push(price(t.buy_price, input.buy_price));
    }

    lines.push(String::new());
    if result.total_quantity > 0.0 {
        lines.push(quantity(t.total_quantity, result.total_quantity));
    }
    if result.total_cost > 0.0 {
        lines.push(price(t.total_cost, result.total_cost));
    }
    if result.new_average_price > 0.0 {
        lines.push(price(t.new_average_price, result.new_average_price));
    }

    lines.push(String::new());
    lines.push(footer(language));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{average_cost, dividend, ex_price};

    #[test]
    fn ex_price_english_summary() {
        let input = ExPriceInput::new(775.0, Adjustment::Bonus { bonus_percent: 8.0 });
        let result = ex_price::compute(&input).unwrap();
        let text = ex_price_text(&input, &result, Language::En);

        assert!(text.starts_with("Ex-price calculation results:"));
        assert!(text.contains("Closing Price (CP): 775.000 fils"));
        assert!(text.contains("Adjustment: Bonus shares"));
        assert!(text.contains("Bonus % (B%): 8%"));
        assert!(text.contains("Adjusted Price: 717.593 fils"));
        assert!(!text.contains("Subscription Price"));
    }

    #[test]
    fn ex_price_all_lists_every_parameter() {
        let input = ExPriceInput::new(
            500.0,
            Adjustment::All {
                bonus_percent: 5.0,
                increase_percent: 10.0,
                subscription_price: 300.0,
                reduction_percent: 2.0,
            },
        );
        let result = ex_price::compute(&input).unwrap();
        let text = ex_price_text(&input, &result, Language::En);
        assert!(text.contains("Capital Increase (CI%): 10%"));
        assert!(text.contains("Subscription Price (SP): 300.000 fils"));
        assert!(text.contains("Capital Reduction (CR%): 2%"));
        assert!(text.contains("Adjusted Price: 469.564 fils"));
    }

    #[test]
    fn dividend_arabic_summary() {
        let input = DividendInput {
            share_count: 100_000.0,
            cash_dividend_fils: 12.0,
            bonus_percent: 8.0,
        };
        let result = dividend::compute(&input);
        let text = dividend_text(&input, &result, Language::Ar);

        assert!(text.starts_with("نتائج حساب التوزيعات:"));
        assert!(text.contains("١٬٢٠٠٫٠٠٠ د.ك"));
        assert!(text.contains("أسهم المنحة: ٨٬٠٠٠ سهم"));
        assert!(text.contains("إجمالي الأسهم: ١٠٨٬٠٠٠ سهم"));
    }

    #[test]
    fn average_cost_skips_zero_lines() {
        let input = AverageCostInput {
            current_qty: 0.0,
            current_price: 0.0,
            buy_qty: 500.0,
            buy_price: 0.6,
        };
        let result = average_cost::compute(&input);
        let text = average_cost_text(&input, &result, Language::En);

        assert!(!text.contains("Current Quantity"));
        assert!(!text.contains("Current Average"));
        assert!(text.contains("Quantity to Buy: 500 shares"));
        assert!(text.contains("Purchase Price: 0.600"));
        assert!(text.contains("New Average Price: 0.600"));
        assert!(text.ends_with("Kuwait Bourse Calculator"));
    }

    #[test]
    fn average_cost_full_summary() {
        let input = AverageCostInput {
            current_qty: 1000.0,
            current_price: 0.5,
            buy_qty: 500.0,
            buy_price: 0.6,
        };
        let result = average_cost::compute(&input);
        let text = average_cost_text(&input, &result, Language::En);
        assert!(text.contains("Total Quantity: 1,500 shares"));
        assert!(text.contains("Total Cost: 800.000"));
        assert!(text.contains("New Average Price: 0.533"));
    }
}
