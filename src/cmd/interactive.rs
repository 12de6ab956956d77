//! Interactive command - line-driven calculator session
//!
//! Each module keeps its own form across `use` switches. Setting a field
//! invalidates the last result of a gated module until `calc` is run again.

use super::render;
use crate::core::CalcError;
use crate::display::{DisplayConfig, Language, Theme};
use crate::form::{AverageCostForm, DividendForm, ExPriceForm, Form, Session};
use crate::labels::{FieldHelp, Guide};
use crate::{labels, share};
use clap::Args;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
Commands:
  use <ex-price|dividend|average-cost>  switch calculator
  fields                                list the fields of the current calculator
  set <field> <value>                   change a field
  calc                                  calculate and show the result
  show                                  show the current result
  share                                 print the shareable result text
  reset                                 restore the default inputs
  lang <ar|en>                          change the display language
  theme <light|dark>                    change the colour scheme
  help                                  show this message
  quit                                  leave";

#[derive(Args, Debug)]
pub struct InteractiveCommand {
    /// Calculator selected at startup
    #[arg(short, long, default_value = "ex-price")]
    module: Module,
}

impl InteractiveCommand {
    pub fn exec(&self, config: DisplayConfig) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut repl = Interactive::new(config, self.module);
        repl.run(stdin.lock(), &mut stdout)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    #[default]
    ExPrice,
    Dividend,
    AverageCost,
}

impl FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "ex-price" | "ex" => Ok(Module::ExPrice),
            "dividend" | "dividends" => Ok(Module::Dividend),
            "average-cost" | "average" | "avg" => Ok(Module::AverageCost),
            other => Err(format!(
                "unknown calculator '{other}', expected ex-price, dividend or average-cost"
            )),
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Module::ExPrice => "ex-price",
            Module::Dividend => "dividend",
            Module::AverageCost => "average-cost",
        };
        write!(f, "{}", name)
    }
}

pub struct Interactive {
    config: DisplayConfig,
    module: Module,
    ex_price: Session<ExPriceForm>,
    dividend: Session<DividendForm>,
    average_cost: Session<AverageCostForm>,
}

impl Interactive {
    pub fn new(config: DisplayConfig, module: Module) -> Self {
        Self {
            config,
            module,
            ex_price: Session::default(),
            dividend: Session::default(),
            average_cost: Session::default(),
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", labels::app(self.config.language).title)?;
        writeln!(out, "Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.handle(line, out)? {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Apply one command. Returns false when the session should end.
    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<bool> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => return Ok(false),
            "help" => {
                writeln!(out, "{}", HELP)?;
                self.write_guide(out)?;
            }
            "use" => match rest.parse::<Module>() {
                Ok(module) => {
                    self.module = module;
                    writeln!(out, "{}", self.module_title())?;
                }
                Err(err) => writeln!(out, "{}", err)?,
            },
            "fields" => self.list_fields(out)?,
            "set" => self.set(rest, out)?,
            "calc" => {
                self.calculate();
                self.show(out)?;
            }
            "show" => self.show(out)?,
            "share" => self.share(out)?,
            "reset" => {
                match self.module {
                    Module::ExPrice => self.ex_price.reset(),
                    Module::Dividend => self.dividend.reset(),
                    Module::AverageCost => self.average_cost.reset(),
                }
                log::debug!("reset {} form", self.module);
                self.show(out)?;
            }
            "lang" => {
                let language = if rest.is_empty() {
                    Ok(self.config.language.toggled())
                } else {
                    rest.parse::<Language>()
                };
                match language {
                    Ok(language) => {
                        self.config = self.config.with_language(language);
                        writeln!(out, "{}", labels::app(language).title)?;
                    }
                    Err(err) => writeln!(out, "{}", err)?,
                }
            }
            "theme" => {
                let theme = if rest.is_empty() {
                    Ok(self.config.theme.toggled())
                } else {
                    rest.parse::<Theme>()
                };
                match theme {
                    Ok(theme) => self.config = self.config.with_theme(theme),
                    Err(err) => writeln!(out, "{}", err)?,
                }
            }
            other => writeln!(out, "unknown command '{}', type 'help'", other)?,
        }
        Ok(true)
    }

    fn module_title(&self) -> &'static str {
        let lang = self.config.language;
        match self.module {
            Module::ExPrice => labels::ex_price(lang).title,
            Module::Dividend => labels::dividend(lang).title,
            Module::AverageCost => labels::average_cost(lang).title,
        }
    }

    fn guide(&self) -> &'static Guide {
        let lang = self.config.language;
        match self.module {
            Module::ExPrice => &labels::ex_price(lang).guide,
            Module::Dividend => &labels::dividend(lang).guide,
            Module::AverageCost => &labels::average_cost(lang).guide,
        }
    }

    fn write_guide<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let guide = self.guide();
        writeln!(out)?;
        writeln!(out, "{}", guide.title)?;
        for tip in guide.tips {
            writeln!(out, "  - {}", tip)?;
        }
        writeln!(out, "{}", guide.example)
    }

    fn list_fields<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let lang = self.config.language;
        match self.module {
            Module::ExPrice => {
                write_fields(self.ex_price.form(), labels::ex_price(lang).help, out)
            }
            Module::Dividend => {
                write_fields(self.dividend.form(), labels::dividend(lang).help, out)
            }
            Module::AverageCost => {
                write_fields(self.average_cost.form(), labels::average_cost(lang).help, out)
            }
        }
    }

    fn set<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let (name, value) = match args.split_once(char::is_whitespace) {
            Some((name, value)) => (name, value.trim()),
            None => (args, ""),
        };
        let known = match self.module {
            Module::ExPrice => self.ex_price.set_field(name, value),
            Module::Dividend => self.dividend.set_field(name, value),
            Module::AverageCost => self.average_cost.set_field(name, value),
        };
        if !known {
            return writeln!(out, "unknown field '{}', type 'fields'", name);
        }
        // Live results follow every edit
        if self.module == Module::Dividend {
            self.show(out)?;
        }
        Ok(())
    }

    fn calculate(&mut self) {
        let result = match self.module {
            Module::ExPrice => self.ex_price.calculate().map(drop),
            Module::Dividend => self.dividend.calculate().map(drop),
            Module::AverageCost => self.average_cost.calculate().map(drop),
        };
        if let Err(err) = result {
            log::debug!("{} calculation rejected: {}", self.module, err);
        }
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let config = self.config;
        let lang = config.language;
        match self.module {
            Module::ExPrice => match self.ex_price.outcome() {
                None => writeln!(out, "{}", labels::app(lang).pending),
                Some(Err(err)) => writeln!(out, "{}", labels::error(lang, &err)),
                Some(Ok(result)) => {
                    let input = self.ex_price.form().to_input();
                    writeln!(out, "{}", render::ex_price_summary(&input, &result, config))?;
                    if result.table.is_empty() {
                        return Ok(());
                    }
                    writeln!(out, "{}", labels::ex_price(lang).price_range)?;
                    writeln!(out, "{}", render::price_range(&result, config))
                }
            },
            Module::Dividend => match self.dividend.outcome() {
                Some(Ok(result)) => {
                    let input = self.dividend.form().to_input();
                    writeln!(out, "{}", render::dividend_summary(&input, &result, config))
                }
                Some(Err(err)) => writeln!(out, "{}", labels::error(lang, &err)),
                None => writeln!(out, "{}", labels::app(lang).pending),
            },
            Module::AverageCost => match valid(self.average_cost.outcome()) {
                Some(result) => {
                    let input = self.average_cost.form().to_input();
                    writeln!(
                        out,
                        "{}",
                        render::average_cost_summary(&input, &result, config)
                    )
                }
                None => writeln!(out, "{}", labels::average_cost(lang).guidance),
            },
        }
    }

    fn share<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let lang = self.config.language;
        let text = match self.module {
            Module::ExPrice => valid(self.ex_price.outcome()).map(|result| {
                share::ex_price_text(&self.ex_price.form().to_input(), &result, lang)
            }),
            Module::Dividend => valid(self.dividend.outcome()).map(|result| {
                share::dividend_text(&self.dividend.form().to_input(), &result, lang)
            }),
            Module::AverageCost => valid(self.average_cost.outcome()).map(|result| {
                share::average_cost_text(&self.average_cost.form().to_input(), &result, lang)
            }),
        };

        match text {
            Some(text) => writeln!(out, "{}", text),
            None => writeln!(out, "{}", labels::app(lang).nothing_to_share),
        }
    }
}

/// A result worth displaying: calculated and accepted
fn valid<T>(outcome: Option<Result<T, CalcError>>) -> Option<T> {
    outcome.and_then(Result::ok)
}

fn write_fields<F: Form, W: Write>(form: &F, help: FieldHelp, out: &mut W) -> io::Result<()> {
    for field in F::fields() {
        writeln!(
            out,
            "  {:<20} {:<12} {}",
            field.name,
            form.field(field.name).unwrap_or_default(),
            labels::field_help(help, field.name).unwrap_or(field.description)
        )?;
    }
    Ok(())
}
