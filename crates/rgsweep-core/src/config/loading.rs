use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::errors::ConfigError;
use super::types::RgSweepConfig;

const CONFIG_DIR: &str = ".rgsweep";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the standard locations plus an optional explicit file.
///
/// Precedence (lowest to highest): `~/.rgsweep/config.toml`,
/// `./.rgsweep/config.toml`, then `explicit`. Missing standard files are
/// skipped; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<RgSweepConfig, ConfigError> {
    let home = dirs::home_dir();
    let project = std::env::current_dir().ok();
    load_config_from(home.as_deref(), project.as_deref(), explicit)
}

/// Like [`load_config`] with the user and project directories supplied.
pub fn load_config_from(
    home_dir: Option<&Path>,
    project_dir: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<RgSweepConfig, ConfigError> {
    let mut config = RgSweepConfig::default();

    for dir in [home_dir, project_dir].into_iter().flatten() {
        let path = config_path(dir);
        if !path.exists() {
            debug!(event = "core.config.file_skipped", path = %path.display());
            continue;
        }
        config = config.merge(read_config_file(&path)?);
    }

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        config = config.merge(read_config_file(path)?);
    }

    Ok(config)
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

fn read_config_file(path: &Path) -> Result<RgSweepConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: RgSweepConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })?;

    info!(event = "core.config.file_loaded", path = %path.display());
    Ok(config)
}
