//! Layered cutter configuration
//!
//! Precedence, lowest first: built-in default, config file, `BESQUARE_*`
//! environment. The `--square-size` flag is applied on top by the caller.

use besquare_core::{AppError, CutterConfig, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "BESQUARE";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `config.toml` inside the platform config directory, if one can be resolved
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "besquare").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load configuration from `explicit` (must exist) or the default location
/// (optional), then the process environment.
pub fn load(explicit: Option<&Path>) -> Result<CutterConfig> {
    load_with_env(explicit, config::Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(explicit: Option<&Path>, env: config::Environment) -> Result<CutterConfig> {
    let mut builder = config::Config::builder()
        .set_default("square_size", 0_i64)
        .map_err(config_error)?;

    match explicit {
        Some(path) => {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                builder = builder.add_source(config::File::from(path).required(false));
            }
        }
    }

    builder
        .add_source(env)
        .build()
        .and_then(|settings| settings.try_deserialize::<CutterConfig>())
        .map_err(config_error)
}

fn config_error(err: config::ConfigError) -> AppError {
    AppError::Config(err.to_string())
}
