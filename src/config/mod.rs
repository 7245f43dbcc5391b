pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::{FileSource, OutputFormat, StaticSource};
#[cfg(feature = "cli")]
use crate::domain::model::CategoryMap;
#[cfg(feature = "cli")]
use crate::domain::ports::CategorySource;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use toml_config::ExtractorConfig;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "term-extract")]
#[command(about = "Turn a category-to-tags mapping into a flat list of display terms")]
pub struct CliConfig {
    /// Category document (.json or .toml)
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
            validate_file_extension("input", input, &["json", "toml"])?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
            validate_file_extension("config", config, &["toml"])?;
        }
        Ok(())
    }
}

/// 分類來源優先順序：--input > [categories] > 內建範例
#[cfg(feature = "cli")]
pub fn select_source(cli: &CliConfig, file_config: &ExtractorConfig) -> Result<Box<dyn CategorySource>> {
    if let Some(path) = &cli.input {
        tracing::info!("Reading categories from: {}", path);
        return Ok(Box::new(FileSource::new(path)));
    }

    match file_config.categories()? {
        Some(categories) => {
            tracing::info!("Using categories from configuration");
            Ok(Box::new(StaticSource::new(categories)))
        }
        None => {
            tracing::info!("No input given, using the built-in sample categories");
            Ok(Box::new(StaticSource::new(CategoryMap::sample())))
        }
    }
}

/// Output format and pretty flag; command-line flags win over the config file.
#[cfg(feature = "cli")]
pub fn select_output(cli: &CliConfig, file_config: &ExtractorConfig) -> Result<(OutputFormat, bool)> {
    let format = match cli.format {
        Some(format) => format,
        None => file_config.output_format()?,
    };
    Ok((format, cli.pretty || file_config.pretty()))
}
