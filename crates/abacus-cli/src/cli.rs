//! Command-line surface.

use crate::config::OutputFormat;
use abacus_calculator::{Category, InputRecord, InputValue};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(about = "Validated domain calculators: finance, business, construction, health and more")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format; overrides the configuration file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List calculators
    List {
        /// Only this catalog section
        #[arg(short, long)]
        category: Option<Category>,

        /// Case-insensitive match on id, name, description and tags
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Describe one calculator and its input form
    Show { id: String },

    /// Check inputs without calculating
    Validate {
        id: String,
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Validate and calculate
    Calc {
        id: String,
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Run every calculator's worked examples
    Audit {
        /// Exit with an error code if any example fails
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// One input field, e.g. `-i couponRate=5`. Repeatable.
    #[arg(short = 'i', long = "input", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub fields: Vec<(String, InputValue)>,

    /// Whole input record as a JSON object; `-i` fields override it
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

impl InputArgs {
    pub fn record(&self) -> Result<InputRecord> {
        let mut record = match &self.json {
            Some(json) => {
                let value: serde_json::Value =
                    serde_json::from_str(json).context("--json is not valid JSON")?;
                if !value.is_object() {
                    bail!("--json must be a JSON object");
                }
                serde_json::from_value::<InputRecord>(value)
                    .context("--json contains a value that is not an input")?
            }
            None => InputRecord::new(),
        };
        for (key, value) in &self.fields {
            record.insert(key.clone(), value.clone());
        }
        Ok(record)
    }
}

/// Parse `key=value`, reading the value with [`InputValue::parse_literal`].
pub fn parse_key_value(arg: &str) -> Result<(String, InputValue), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{arg}'"));
    }
    Ok((key.to_string(), InputValue::parse_literal(value.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("couponRate=5").unwrap(),
            ("couponRate".to_string(), InputValue::Integer(5))
        );
        assert_eq!(
            parse_key_value("method = earnings").unwrap(),
            ("method".to_string(), InputValue::String("earnings".into()))
        );
        assert!(parse_key_value("couponRate").is_err());
        assert!(parse_key_value("=5").is_err());
    }

    #[test]
    fn test_calc_arguments() {
        let cli = Cli::try_parse_from([
            "abacus",
            "--format",
            "json",
            "calc",
            "roi",
            "-i",
            "investment=50000",
            "--input",
            "revenue=80000.5",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Command::Calc { id, inputs } => {
                assert_eq!(id, "roi");
                let record = inputs.record().unwrap();
                assert_eq!(record["investment"], InputValue::Integer(50_000));
                assert_eq!(record["revenue"], InputValue::Float(80_000.5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_json_record_with_override() {
        let args = InputArgs {
            fields: vec![("totalDebt".to_string(), InputValue::Integer(1))],
            json: Some(r#"{"totalDebt": 500000, "totalEquity": 250000}"#.to_string()),
        };
        let record = args.record().unwrap();
        assert_eq!(record["totalDebt"], InputValue::Integer(1));
        assert_eq!(record["totalEquity"], InputValue::Integer(250_000));

        let bad = InputArgs {
            json: Some("[1, 2]".to_string()),
            ..InputArgs::default()
        };
        assert!(bad.record().is_err());
    }

    #[test]
    fn test_category_argument() {
        let cli = Cli::try_parse_from(["abacus", "list", "--category", "Health"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::List {
                category: Some(Category::Health),
                ..
            }
        ));
        assert!(Cli::try_parse_from(["abacus", "list", "-c", "cooking"]).is_err());
    }
}
