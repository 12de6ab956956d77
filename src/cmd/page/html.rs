//! HTML page generation.

use super::PageInput;
use crate::core::{AverageCostResult, CalcError, DividendResult, ExPriceResult};
use crate::display::{DisplayConfig, Theme};
use crate::form::{AverageCostForm, DividendForm, ExPriceForm, Session};
use crate::format::{format_fils, format_shares, format_trimmed};
use crate::labels::{self, ExPriceLabels, FieldHelp, Guide};
use crate::share;
use serde::Serialize;

const CSS: &str = include_str!("page.css");
const JS: &str = include_str!("page.js");

/// Texts handed to the page script for the copy buttons
#[derive(Serialize)]
struct ShareData {
    ex_price: Option<String>,
    dividend: String,
    average_cost: Option<String>,
    copied: &'static str,
    copy_failed: &'static str,
}

/// Generate the page for the given form values
pub fn generate(input: &PageInput, config: DisplayConfig) -> anyhow::Result<String> {
    let lang = config.language;
    let app = labels::app(lang);

    // Rendering the page is the calculate action for the gated modules
    let mut ex_price = Session::new(input.ex_price.clone());
    let ex_price_result = ex_price.calculate();

    let dividend = Session::new(input.dividend.clone());
    let dividend_result = dividend.outcome().transpose()?;

    let mut average_cost = Session::new(input.average_cost.clone());
    if has_any_input(&input.average_cost) {
        let _ = average_cost.calculate();
    }
    let average_cost_result = average_cost.outcome().and_then(Result::ok);

    let share_data = ShareData {
        ex_price: ex_price_result
            .as_ref()
            .ok()
            .map(|r| share::ex_price_text(&input.ex_price.to_input(), r, lang)),
        dividend: dividend_result
            .as_ref()
            .map(|r| share::dividend_text(&input.dividend.to_input(), r, lang))
            .unwrap_or_default(),
        average_cost: average_cost_result
            .as_ref()
            .map(|r| share::average_cost_text(&input.average_cost.to_input(), r, lang)),
        copied: app.copied,
        copy_failed: app.copy_failed,
    };
    // Keep the JSON from closing the script element
    let json_data = serde_json::to_string(&share_data)?.replace("</", "<\\/");
    let js = JS.replace("__SHARE_DATA__", &json_data);

    let theme_class = match config.theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let dir = if lang.is_rtl() { "rtl" } else { "ltr" };

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="{lang_code}" dir="{dir}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body class="{theme_class}">
    <header>
        <h1>{title}</h1>
        <p class="subtitle">{subtitle}</p>
    </header>
    <main>
{ex_price_section}
{dividend_section}
{average_cost_section}
    </main>
    <footer>{footer}</footer>
    <div class="toast" id="toast"></div>
    <script>
{js}
    </script>
</body>
</html>
"##,
        lang_code = lang.code(),
        dir = dir,
        title = escape_html(app.title),
        subtitle = escape_html(app.subtitle),
        css = CSS,
        theme_class = theme_class,
        ex_price_section = ex_price_section(&input.ex_price, &ex_price_result, config),
        dividend_section = dividend_section(&input.dividend, dividend_result.as_ref(), config),
        average_cost_section =
            average_cost_section(&input.average_cost, average_cost_result.as_ref(), config),
        footer = escape_html(app.footer),
        js = js,
    ))
}

fn has_any_input(form: &AverageCostForm) -> bool {
    [
        &form.current_qty,
        &form.current_price,
        &form.buy_qty,
        &form.buy_price,
    ]
    .iter()
    .any(|value| !value.trim().is_empty())
}

fn ex_price_section(
    form: &ExPriceForm,
    result: &Result<ExPriceResult, CalcError>,
    config: DisplayConfig,
) -> String {
    let lang = config.language;
    let t = labels::ex_price(lang);
    let app = labels::app(lang);
    let input = form.to_input();

    let help = |field: &str| labels::field_help(t.help, field);
    let mut inputs = vec![
        input_row(t.closing_price, &format_fils(input.closing_price, lang), help("closing_price")),
        input_row(t.kind, share::kind_label(&input.adjustment, lang), help("kind")),
    ];
    for (label, value) in share::adjustment_parameters(&input.adjustment, lang) {
        let field = parameter_field(t, label);
        inputs.push(input_row(label, &value, field.and_then(help)));
    }

    let body = match result {
        Ok(result) => {
            let rows: String = result
                .table
                .iter()
                .map(|row| {
                    format!(
                        "<tr><td>{}</td><td class=\"adjusted\">{}</td></tr>",
                        format_fils(row.original, lang),
                        format_fils(row.adjusted, lang)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                r#"<div class="result"><span class="label">{adjusted}</span><span class="value">{price} {fils}</span></div>
        <h3>{range}</h3>
        <div class="table-container">
            <table>
                <thead><tr><th>{original}</th><th>{adjusted}</th></tr></thead>
                <tbody>
{rows}
                </tbody>
            </table>
        </div>
        <button class="copy" data-copy="ex_price">{copy}</button>"#,
                adjusted = escape_html(t.adjusted_price),
                price = format_fils(result.adjusted_price, lang),
                fils = escape_html(app.fils),
                range = escape_html(t.price_range),
                original = escape_html(t.original_price),
                rows = rows,
                copy = escape_html(app.copy),
            )
        }
        Err(err) => format!(r#"<p class="error">{}</p>"#, escape_html(&labels::error(lang, err))),
    };

    card(t.title, t.subtitle, &t.guide, &inputs.join("\n"), &body)
}

/// Form field behind an ex-price parameter label
fn parameter_field(t: &ExPriceLabels, label: &str) -> Option<&'static str> {
    [
        ("bonus_percent", t.bonus_percent),
        ("increase_percent", t.increase_percent),
        ("subscription_price", t.subscription_price),
        ("reduction_percent", t.reduction_percent),
    ]
    .into_iter()
    .find(|(_, l)| *l == label)
    .map(|(field, _)| field)
}

fn dividend_section(
    form: &DividendForm,
    result: Option<&DividendResult>,
    config: DisplayConfig,
) -> String {
    let lang = config.language;
    let t = labels::dividend(lang);
    let app = labels::app(lang);
    let input = form.to_input();

    let bonus = format!("{}%", format_trimmed(input.bonus_percent, lang, 2));
    let inputs = [
        help_row(t.help, "share_count", t.share_count, &format_shares(input.share_count, lang)),
        help_row(t.help, "cash_dividend", t.cash_dividend, &format_fils(input.cash_dividend_fils, lang)),
        help_row(t.help, "bonus_percent", t.bonus_percent, &bonus),
    ]
    .join("\n");

    let body = match result {
        Some(result) => format!(
            r#"<div class="result"><span class="label">{total_cash}</span><span class="value">{kd} {kd_unit}</span><span class="sub">({fils} {fils_unit})</span></div>
        <div class="result"><span class="label">{bonus}</span><span class="value">{bonus_shares} {shares}</span></div>
        <div class="result"><span class="label">{final_label}</span><span class="value">{final_shares} {shares}</span></div>
        <button class="copy" data-copy="dividend">{copy}</button>"#,
            total_cash = escape_html(t.total_cash),
            kd = format_fils(result.total_cash_kd, lang),
            kd_unit = escape_html(app.kd),
            fils = format_shares(result.total_cash_fils, lang),
            fils_unit = escape_html(app.fils),
            bonus = escape_html(t.bonus_shares),
            bonus_shares = format_shares(result.bonus_shares, lang),
            shares = escape_html(app.shares),
            final_label = escape_html(t.final_shares),
            final_shares = format_shares(result.final_shares, lang),
            copy = escape_html(app.copy),
        ),
        None => String::new(),
    };

    card(t.title, t.subtitle, &t.guide, &inputs, &body)
}

fn average_cost_section(
    form: &AverageCostForm,
    result: Option<&AverageCostResult>,
    config: DisplayConfig,
) -> String {
    let lang = config.language;
    let t = labels::average_cost(lang);
    let app = labels::app(lang);
    let input = form.to_input();

    let inputs = [
        help_row(t.help, "current_qty", t.current_qty, &format_shares(input.current_qty, lang)),
        help_row(t.help, "current_price", t.current_price, &format_fils(input.current_price, lang)),
        help_row(t.help, "buy_qty", t.buy_qty, &format_shares(input.buy_qty, lang)),
        help_row(t.help, "buy_price", t.buy_price, &format_fils(input.buy_price, lang)),
    ]
    .join("\n");

    let body = match result {
        Some(result) => format!(
            r#"<div class="result"><span class="label">{qty_label}</span><span class="value">{qty} {shares}</span></div>
        <div class="result"><span class="label">{cost_label}</span><span class="value">{cost} {kd}</span></div>
        <div class="result"><span class="label">{avg_label}</span><span class="value">{avg} {kd}</span></div>
        <button class="copy" data-copy="average_cost">{copy}</button>"#,
            qty_label = escape_html(t.total_quantity),
            qty = format_shares(result.total_quantity, lang),
            shares = escape_html(app.shares),
            cost_label = escape_html(t.total_cost),
            cost = format_fils(result.total_cost, lang),
            kd = escape_html(app.kd),
            avg_label = escape_html(t.new_average_price),
            avg = format_fils(result.new_average_price, lang),
            copy = escape_html(app.copy),
        ),
        None => format!(r#"<p class="guidance">{}</p>"#, escape_html(t.guidance)),
    };

    card(t.title, t.subtitle, &t.guide, &inputs, &body)
}

fn card(title: &str, subtitle: &str, guide: &Guide, inputs: &str, body: &str) -> String {
    let tips: String = guide
        .tips
        .iter()
        .map(|tip| format!("<li>{}</li>", escape_html(tip)))
        .collect();
    format!(
        r#"    <section class="card">
        <h2>{}</h2>
        <p class="subtitle">{}</p>
        <details class="guide">
            <summary>{}</summary>
            <ul>{}</ul>
            <p class="example">{}</p>
        </details>
        <dl class="inputs">
{}
        </dl>
        {}
    </section>"#,
        escape_html(title),
        escape_html(subtitle),
        escape_html(guide.title),
        tips,
        escape_html(guide.example),
        inputs,
        body
    )
}

fn help_row(help: FieldHelp, field: &str, label: &str, value: &str) -> String {
    input_row(label, value, labels::field_help(help, field))
}

fn input_row(label: &str, value: &str, help: Option<&str>) -> String {
    match help {
        Some(help) => format!(
            r#"            <dt>{}<span class="help" title="{}">?</span></dt><dd>{}</dd>"#,
            escape_html(label),
            escape_html(help),
            escape_html(value)
        ),
        None => format!(
            "            <dt>{}</dt><dd>{}</dd>",
            escape_html(label),
            escape_html(value)
        ),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Language;

    fn page(input: &PageInput, language: Language) -> String {
        generate(input, DisplayConfig::new(language, Theme::Dark)).unwrap()
    }

    #[test]
    fn arabic_page_is_right_to_left() {
        let html = page(&PageInput::default(), Language::Ar);
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains("حاسبة بورصة الكويت"));
        assert!(html.contains("٧١٧٫٥٩٣"));
    }

    #[test]
    fn english_page_has_full_price_range() {
        let html = page(&PageInput::default(), Language::En);
        assert!(html.contains(r#"dir="ltr""#));
        assert_eq!(html.matches("<td class=\"adjusted\">").count(), 108);
        assert!(html.contains("717.593 fils"));
        assert!(html.contains("1,200.000 KD"));
    }

    #[test]
    fn empty_average_cost_shows_guidance() {
        let html = page(&PageInput::default(), Language::En);
        assert!(html.contains("Enter the data and click"));
        assert!(html.contains("\"average_cost\":null"));
    }

    #[test]
    fn filled_average_cost_shows_result() {
        let input = PageInput {
            average_cost: AverageCostForm {
                current_qty: "1000".to_string(),
                current_price: "0.5".to_string(),
                buy_qty: "500".to_string(),
                buy_price: "0.6".to_string(),
            },
            ..PageInput::default()
        };
        let html = page(&input, Language::En);
        assert!(html.contains("0.533 KD"));
        assert!(html.contains("data-copy=\"average_cost\""));
    }

    #[test]
    fn rejected_reduction_shows_error() {
        let input = PageInput {
            ex_price: ExPriceForm {
                kind: "capital-reduction".to_string(),
                reduction_percent: "100".to_string(),
                ..ExPriceForm::default()
            },
            ..PageInput::default()
        };
        let html = page(&input, Language::En);
        assert!(html.contains("Capital reduction must be below 100%, entered: 100%"));
        assert!(html.contains("\"ex_price\":null"));

        let html = page(&input, Language::Ar);
        assert!(html.contains("يجب أن تكون نسبة تخفيض رأس المال أقل من ١٠٠%"));
        assert!(!html.contains("apital reduction must be below"));
    }

    #[test]
    fn input_rows_carry_field_help() {
        let html = page(&PageInput::default(), Language::Ar);
        assert!(html.contains(r#"<span class="help" title="مبلغ التوزيع النقدي لكل سهم بالفلس">?</span>"#));
        assert!(html.contains(r#"title="نسبة أسهم المنحة الموزعة (8 تعني 8%)""#));

        let input = PageInput {
            ex_price: ExPriceForm {
                kind: "all".to_string(),
                ..ExPriceForm::default()
            },
            ..PageInput::default()
        };
        let html = page(&input, Language::En);
        assert!(html.contains(r#"title="Closing price of the share before the corporate action, in fils""#));
        assert!(html.contains(r#"title="Price paid per new share in the capital increase, in fils""#));
        assert!(html.contains(r#"title="The price per share you expect to pay in this new transaction""#));
    }

    #[test]
    fn each_card_has_a_guide() {
        let html = page(&PageInput::default(), Language::En);
        assert_eq!(html.matches(r#"<details class="guide">"#).count(), 3);
        assert!(html.contains("<summary>How to Use Dividend Calculator</summary>"));
        assert!(html.contains("Example: Stock at 775 fils with 8% bonus → Ex-Price: 717.593 fils"));

        let html = page(&PageInput::default(), Language::Ar);
        assert!(html.contains("<summary>كيفية استخدام حاسبة متوسط التكلفة</summary>"));
    }

    #[test]
    fn light_theme_class() {
        let html = generate(
            &PageInput::default(),
            DisplayConfig::new(Language::En, Theme::Light),
        )
        .unwrap();
        assert!(html.contains(r#"<body class="light">"#));
    }
}
