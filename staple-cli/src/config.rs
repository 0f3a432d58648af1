use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StapleConfig {
    /// Conversion configuration
    pub convert: ConvertConfig,
    /// Document configuration (from staple-core)
    #[serde(flatten)]
    pub doc: staple_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// Directory to scan for markdown files when no files are given
    pub source: Option<String>,
    /// Path of the combined Word document
    pub output: String,
    /// Configuration file path
    pub config: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source: None,
            output: "./combined_markdown.docx".to_string(),
            config: "./staple.toml".to_string(),
        }
    }
}

impl Default for StapleConfig {
    fn default() -> Self {
        Self {
            convert: ConvertConfig::default(),
            doc: staple_core::config::Config::default(),
        }
    }
}

impl StapleConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (STAPLE_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .get_one::<String>("config")
            .unwrap_or(&"./staple.toml".to_string())
            .clone();

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(&config_file.replace(".toml", "")));
        }

        // 3. Add environment variables with STAPLE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("STAPLE")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments (highest priority)
        let mut cli_overrides = std::collections::HashMap::new();

        if let Some(source) = args.get_one::<String>("source") {
            cli_overrides.insert("convert.source".to_string(), source.clone());
        }
        if let Some(output) = args.get_one::<String>("output") {
            cli_overrides.insert("convert.output".to_string(), output.clone());
        }
        if let Some(config) = args.get_one::<String>("config") {
            cli_overrides.insert("convert.config".to_string(), config.clone());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(config::Config::try_from(&cli_overrides)?);
        }

        // Build and deserialize
        let config = builder.build()?;
        let staple_config: StapleConfig = config.try_deserialize()?;

        Ok(staple_config)
    }

    /// Get the conversion configuration
    pub fn convert_config(&self) -> &ConvertConfig {
        &self.convert
    }
}

/// Load configuration specifically for convert commands
pub fn load_convert_config(args: &ArgMatches) -> Result<StapleConfig> {
    StapleConfig::load(args)
}
