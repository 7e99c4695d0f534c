//! TOML configuration: types, layered loading and errors.

mod errors;
mod loading;
mod types;

pub use errors::ConfigError;
pub use loading::{load_config, load_config_from};
pub use types::{AzureConfig, OutputConfig, RgSweepConfig, SweepConfig};
