use abacus_calculator::DuplicatePolicy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEFAULT_CONFIG: &str = r#"[environment]
env_type = "default"
[catalog]
duplicate_policy = "replace"
[output]
format = "text"
precision = 2
[logging]
filter = "warn"
json = false
"#;

#[derive(Deserialize, Debug, Clone)]
pub struct Environment {
    pub env_type: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimal places for numbers in text output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    #[default]
    BuiltIn,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AbacusConfig {
    pub environment: Environment,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(skip)]
    pub source: ConfigSource,
}

impl AbacusConfig {
    /// Read `$ABACUS_CONFIG_PATH`, or `abacus.toml` in the working directory,
    /// falling back to the built-in defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("ABACUS_CONFIG_PATH").unwrap_or_else(|_| "abacus.toml".to_string());

        Self::load_from(Path::new(&config_path))
    }

    /// Read `path`, or the built-in defaults when no file exists there.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(config_str) => {
                let mut config = Self::from_toml_str(&config_str).with_context(|| {
                    format!("Failed to parse configuration file '{}'", path.display())
                })?;
                config.source = ConfigSource::File(path.to_path_buf());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Self::from_toml_str(DEFAULT_CONFIG),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read configuration file '{}'", path.display())),
        }
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Apply `ABACUS_*` environment variable overrides.
    pub fn apply_profile(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(policy) = lookup("ABACUS_DUPLICATE_POLICY") {
            match policy.to_ascii_lowercase().as_str() {
                "replace" => self.catalog.duplicate_policy = DuplicatePolicy::Replace,
                "reject" => self.catalog.duplicate_policy = DuplicatePolicy::Reject,
                _ => {}
            }
        }
        if let Some(format) = lookup("ABACUS_OUTPUT_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "text" => self.output.format = OutputFormat::Text,
                "json" => self.output.format = OutputFormat::Json,
                _ => {}
            }
        }
        if let Some(filter) = lookup("ABACUS_LOG_FILTER") {
            self.logging.filter = filter;
        }
        self
    }

    /// Log which configuration is active. Call once logging is installed.
    pub fn log_source(&self) {
        match &self.source {
            ConfigSource::File(path) => info!(
                path = %path.display(),
                env = %self.environment.env_type,
                "Loaded configuration"
            ),
            ConfigSource::BuiltIn => {
                warn!("Configuration file not found. Using default configuration.")
            }
        }
    }
}

impl Default for AbacusConfig {
    fn default() -> Self {
        Self {
            environment: Environment {
                env_type: "default".to_string(),
            },
            catalog: CatalogConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            source: ConfigSource::BuiltIn,
        }
    }
}

fn default_precision() -> usize {
    2
}

fn default_log_filter() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_builtin_defaults_parse() {
        let config = AbacusConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.environment.env_type, "default");
        assert_eq!(config.catalog.duplicate_policy, DuplicatePolicy::Replace);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.source, ConfigSource::BuiltIn);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("abacus-no-such-dir/abacus.toml");
        let config = AbacusConfig::load_from(&path).unwrap();
        assert_eq!(config.source, ConfigSource::BuiltIn);
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = std::env::temp_dir();
        let err = AbacusConfig::load_from(&dir).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read configuration file"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = AbacusConfig::from_toml_str(
            "[environment]\nenv_type = \"ci\"\n[catalog]\nduplicate_policy = \"reject\"\n",
        )
        .unwrap();
        assert_eq!(config.catalog.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.output.precision, 2);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_invalid_policy_is_an_error() {
        let result = AbacusConfig::from_toml_str(
            "[environment]\nenv_type = \"x\"\n[catalog]\nduplicate_policy = \"sometimes\"\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_overrides() {
        let env = HashMap::from([
            ("ABACUS_DUPLICATE_POLICY", "Reject"),
            ("ABACUS_OUTPUT_FORMAT", "json"),
            ("ABACUS_LOG_FILTER", "abacus_calculator=debug"),
        ]);
        let config = AbacusConfig::default()
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.catalog.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "abacus_calculator=debug");
    }

    #[test]
    fn test_unknown_override_values_are_ignored() {
        let config = AbacusConfig::default().apply_overrides(|key| {
            (key == "ABACUS_OUTPUT_FORMAT").then(|| "yaml".to_string())
        });
        assert_eq!(config.output.format, OutputFormat::Text);
    }
}
