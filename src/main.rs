use clap::{Parser, Subcommand};
use display::{DisplayConfig, Language, Theme};

mod cmd;
mod core;
mod display;
mod form;
mod format;
mod labels;
mod share;
mod utils;

#[derive(Parser, Debug)]
#[command(name = "boursa", version, about = "Kuwait Bourse calculator: ex-price, dividends and average cost")]
struct Cli {
    /// Display language
    #[arg(long, global = true, value_enum, env = "BOURSA_LANG", default_value_t = Language::Ar)]
    lang: Language,

    /// Colour scheme for tables and pages
    #[arg(long, global = true, value_enum, env = "BOURSA_THEME", default_value_t = Theme::Dark)]
    theme: Theme,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Adjusted share price after bonus shares, capital increase or reduction
    ExPrice(cmd::ex_price::ExPriceCommand),
    /// Cash dividend and bonus shares for a holding
    Dividend(cmd::dividend::DividendCommand),
    /// New average price after buying more shares
    AverageCost(cmd::average_cost::AverageCostCommand),
    /// Generate the HTML calculator page
    Page(cmd::page::PageCommand),
    /// Line-driven calculator session on stdin
    Interactive(cmd::interactive::InteractiveCommand),
    /// Print the input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = DisplayConfig::new(cli.lang, cli.theme);
    log::debug!("display config: {:?}", config);

    match cli.command {
        Command::ExPrice(ex_price) => ex_price.exec(config),
        Command::Dividend(dividend) => dividend.exec(config),
        Command::AverageCost(average_cost) => average_cost.exec(config),
        Command::Page(page) => page.exec(config),
        Command::Interactive(interactive) => interactive.exec(config),
        Command::Schema(schema) => schema.exec(),
    }
}
