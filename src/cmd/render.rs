//! Terminal rendering shared by the one-shot commands and interactive mode.

use crate::core::{
    AverageCostInput, AverageCostResult, DividendInput, DividendResult, ExPriceInput,
    ExPriceResult,
};
use crate::display::{DisplayConfig, Theme};
use crate::format::{format_fils, format_shares, format_trimmed};
use crate::labels;
use crate::share::{adjustment_parameters, kind_label};
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style,
    },
    Table,
};

fn styled(mut table: Table, theme: Theme) -> Table {
    match theme {
        Theme::Dark => table.with(Style::rounded()),
        Theme::Light => table.with(Style::ascii()),
    };
    table
}

/// Two-column label/value table under a title row
fn key_values(title: &str, rows: Vec<(&str, String)>, config: DisplayConfig) -> String {
    let mut builder = Builder::default();
    builder.push_record([title.to_string(), String::new()]);
    for (label, value) in rows {
        builder.push_record([label.to_string(), value]);
    }

    let mut table = styled(builder.build(), config.theme);
    table.with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}

fn percent(value: f64, config: DisplayConfig) -> String {
    format!("{}%", format_trimmed(value, config.language, 2))
}

pub fn ex_price_summary(input: &ExPriceInput, result: &ExPriceResult, config: DisplayConfig) -> String {
    let t = labels::ex_price(config.language);
    let fils = labels::app(config.language).fils;
    let lang = config.language;

    let mut rows = vec![
        (
            t.closing_price,
            format!("{} {}", format_fils(input.closing_price, lang), fils),
        ),
        (t.kind, kind_label(&input.adjustment, lang).to_string()),
    ];

    rows.extend(adjustment_parameters(&input.adjustment, lang));
    rows.push((
        t.adjusted_price,
        format!("{} {}", format_fils(result.adjusted_price, lang), fils),
    ));

    key_values(t.title, rows, config)
}

/// The 108-row price range table
pub fn price_range(result: &ExPriceResult, config: DisplayConfig) -> String {
    let t = labels::ex_price(config.language);
    let lang = config.language;

    let mut builder = Builder::default();
    builder.push_record([t.original_price, t.adjusted_price]);
    for row in &result.table {
        builder.push_record([format_fils(row.original, lang), format_fils(row.adjusted, lang)]);
    }

    let mut table = styled(builder.build(), config.theme);
    table.with(Modify::new(Rows::new(1..)).with(Alignment::right()));
    table.to_string()
}

pub fn dividend_summary(input: &DividendInput, result: &DividendResult, config: DisplayConfig) -> String {
    let t = labels::dividend(config.language);
    let app = labels::app(config.language);
    let lang = config.language;

    let rows = vec![
        (
            t.share_count,
            format!("{} {}", format_shares(input.share_count, lang), app.shares),
        ),
        (
            t.cash_dividend,
            format_trimmed(input.cash_dividend_fils, lang, 3),
        ),
        (t.bonus_percent, percent(input.bonus_percent, config)),
        (
            t.total_cash,
            format!(
                "{} {} ({} {})",
                format_fils(result.total_cash_kd, lang),
                app.kd,
                format_shares(result.total_cash_fils, lang),
                app.fils
            ),
        ),
        (
            t.bonus_shares,
            format!("{} {}", format_shares(result.bonus_shares, lang), app.shares),
        ),
        (
            t.final_shares,
            format!("{} {}", format_shares(result.final_shares, lang), app.shares),
        ),
    ];

    key_values(t.title, rows, config)
}

pub fn average_cost_summary(
    input: &AverageCostInput,
    result: &AverageCostResult,
    config: DisplayConfig,
) -> String {
    let t = labels::average_cost(config.language);
    let app = labels::app(config.language);
    let lang = config.language;

    let rows = vec![
        (
            t.current_qty,
            format!("{} {}", format_shares(input.current_qty, lang), app.shares),
        ),
        (t.current_price, format!("{} {}", format_fils(input.current_price, lang), app.kd)),
        (
            t.buy_qty,
            format!("{} {}", format_shares(input.buy_qty, lang), app.shares),
        ),
        (t.buy_price, format!("{} {}", format_fils(input.buy_price, lang), app.kd)),
        (
            t.total_quantity,
            format!("{} {}", format_shares(result.total_quantity, lang), app.shares),
        ),
        (t.total_cost, format!("{} {}", format_fils(result.total_cost, lang), app.kd)),
        (
            t.new_average_price,
            format!("{} {}", format_fils(result.new_average_price, lang), app.kd),
        ),
    ];

    key_values(t.title, rows, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{average_cost, dividend, ex_price, Adjustment};
    use crate::display::Language;

    fn english() -> DisplayConfig {
        DisplayConfig::new(Language::En, Theme::Dark)
    }

    #[test]
    fn ex_price_summary_shows_active_parameters() {
        let input = ExPriceInput::new(775.0, Adjustment::Bonus { bonus_percent: 8.0 });
        let result = ex_price::compute(&input).unwrap();
        let out = ex_price_summary(&input, &result, english());

        assert!(out.contains("Ex-Price Calculator"));
        assert!(out.contains("717.593 fils"));
        assert!(out.contains("8%"));
        assert!(!out.contains("Subscription Price"));
    }

    #[test]
    fn price_range_has_header_and_all_rows() {
        let input = ExPriceInput::new(775.0, Adjustment::Bonus { bonus_percent: 8.0 });
        let result = ex_price::compute(&input).unwrap();
        let out = price_range(&result, english());

        assert!(out.contains("Original Price"));
        assert!(out.contains("775.000"));
        assert!(out.contains("882.000"));
        assert!(out.contains("816.667"));
    }

    #[test]
    fn light_theme_uses_ascii_borders() {
        let input = DividendInput {
            share_count: 100_000.0,
            cash_dividend_fils: 12.0,
            bonus_percent: 8.0,
        };
        let result = dividend::compute(&input);
        let config = english().with_theme(Theme::Light);
        let out = dividend_summary(&input, &result, config);

        assert!(out.contains('+'));
        assert!(!out.contains('╭'));
        assert!(out.contains("1,200.000 KD (1,200,000 fils)"));
        assert!(out.contains("108,000 shares"));
    }

    #[test]
    fn average_cost_summary_in_arabic() {
        let input = AverageCostInput {
            current_qty: 1000.0,
            current_price: 0.5,
            buy_qty: 500.0,
            buy_price: 0.6,
        };
        let result = average_cost::compute(&input);
        let config = DisplayConfig::new(Language::Ar, Theme::Dark);
        let out = average_cost_summary(&input, &result, config);

        assert!(out.contains("المتوسط الجديد"));
        assert!(out.contains("٠٫٥٣٣ د.ك"));
    }
}
