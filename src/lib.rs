pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{select_output, select_source, CliConfig};

pub use adapters::{FileSource, OutputFormat, StaticSource, WriterSink};
pub use config::toml_config::ExtractorConfig;
pub use crate::core::engine::TermEngine;
pub use crate::core::extractor::{extract_terms, extract_terms_from_json, sanitize_category_name};
pub use domain::model::{CategoryMap, CategoryValue};
pub use domain::ports::{CategorySource, TermSink};
pub use utils::error::{ExtractError, Result};
