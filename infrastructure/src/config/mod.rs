//! Configuration file loading for subquery
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SUBQUERY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./subquery.toml` or `./.subquery.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/subquery/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileLoggingConfig, FileOpenAiConfig, FileOutputConfig,
    FileOutputFormat, FileProvidersConfig,
};
pub use loader::ConfigLoader;
