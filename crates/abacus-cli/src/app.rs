use crate::cli::Command;
use crate::config::{AbacusConfig, OutputFormat};
use crate::output::{self, Details, Summary, ValidationOutcome};
use abacus_calculator::{Calculator, CalculatorInputs, Catalog, audit};
use anyhow::{Result, anyhow};
use std::io::Write;
use tracing::debug;

/// The host: one catalog built at start-up, read by every command.
#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    format: OutputFormat,
    precision: usize,
}

impl App {
    /// `format` from the command line takes precedence over the configuration.
    pub fn new(config: &AbacusConfig, format: Option<OutputFormat>) -> Self {
        let catalog = Catalog::builtin_with_policy(config.catalog.duplicate_policy);
        debug!(calculators = catalog.len(), "Catalog built");
        Self {
            catalog,
            format: format.unwrap_or(config.output.format),
            precision: config.output.precision,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run one command. `Ok(false)` means the command ran but the user should
    /// see a failing exit status.
    pub fn run(&self, command: &Command, out: &mut dyn Write) -> Result<bool> {
        match command {
            Command::List { category, search } => {
                let calculators: Vec<&dyn Calculator> = match search {
                    Some(term) => self.catalog.search(term).collect(),
                    None => self.catalog.list().collect(),
                };
                let calculators: Vec<&dyn Calculator> = calculators
                    .into_iter()
                    .filter(|c| category.is_none_or(|wanted| c.category() == wanted))
                    .collect();

                let text = match self.format {
                    OutputFormat::Text => output::list_text(&calculators),
                    OutputFormat::Json => output::json(
                        &calculators.iter().map(|c| Summary::of(*c)).collect::<Vec<_>>(),
                    )?,
                };
                out.write_all(text.as_bytes())?;
                Ok(true)
            }
            Command::Show { id } => {
                let calculator = self.lookup(id)?;
                let details = Details {
                    summary: Summary::of(calculator),
                    form: calculator.form_schema(),
                    worked_examples: calculator.examples().len(),
                };
                let text = match self.format {
                    OutputFormat::Text => output::details_text(&details),
                    OutputFormat::Json => output::json(&details)?,
                };
                out.write_all(text.as_bytes())?;
                Ok(true)
            }
            Command::Validate { id, inputs } => {
                let calculator = self.lookup(id)?;
                let record = inputs.record()?;
                let report = calculator.check(&CalculatorInputs::new(&record));
                let text = match self.format {
                    OutputFormat::Text => output::validation_text(calculator.id(), &report),
                    OutputFormat::Json => output::json(&ValidationOutcome {
                        calculator: calculator.id(),
                        valid: report.is_valid(),
                        errors: report.errors(),
                    })?,
                };
                out.write_all(text.as_bytes())?;
                Ok(report.is_valid())
            }
            Command::Calc { id, inputs } => {
                let calculator = self.lookup(id)?;
                let record = inputs.record()?;
                let (text, ok) = match calculator.calculate(&CalculatorInputs::new(&record)) {
                    Ok(calc) => match self.format {
                        OutputFormat::Text => {
                            (output::calculation_text(calculator.id(), &calc, self.precision), true)
                        }
                        OutputFormat::Json => (output::json(&calc)?, true),
                    },
                    Err(error) => match self.format {
                        OutputFormat::Text => (output::error_text(&error), false),
                        OutputFormat::Json => (output::json(&error)?, false),
                    },
                };
                out.write_all(text.as_bytes())?;
                Ok(ok)
            }
            Command::Audit { strict } => {
                let report = audit(&self.catalog);
                let text = match self.format {
                    OutputFormat::Text => output::audit_text(&report),
                    OutputFormat::Json => output::json(&report)?,
                };
                out.write_all(text.as_bytes())?;
                Ok(!strict || report.is_clean())
            }
        }
    }

    fn lookup(&self, id: &str) -> Result<&dyn Calculator> {
        self.catalog
            .get(id)
            .ok_or_else(|| anyhow!("Unknown calculator '{id}'. Run `abacus list` to see the catalog."))
    }
}
