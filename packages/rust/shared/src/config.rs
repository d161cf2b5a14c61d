//! Application configuration for the coverage generator.
//!
//! Resolution order: an explicit `--config` path, `./rates-coverage.toml`,
//! then `~/.rates-coverage/rates-coverage.toml`. CLI flags override config
//! file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoverageError, Result};

/// Config file name, both in the working directory and the home config dir.
pub const LOCAL_CONFIG_FILE: &str = "rates-coverage.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".rates-coverage";

// ---------------------------------------------------------------------------
// Config structs (matching rates-coverage.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the two CSV files are read from and written to.
    #[serde(default)]
    pub output: OutputConfig,

    /// Indices appended to the built-in catalogue.
    #[serde(default)]
    pub extra_indices: Vec<ExtraIndex>,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory. The prior coverage file is read from here too.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// File name of the full coverage list.
    #[serde(default = "default_coverage_file")]
    pub coverage_file: String,

    /// File name of the factsheet-only list.
    #[serde(default = "default_factsheets_file")]
    pub factsheets_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            coverage_file: default_coverage_file(),
            factsheets_file: default_factsheets_file(),
        }
    }
}

impl OutputConfig {
    /// Full path of the coverage CSV (also the prior-state input).
    pub fn coverage_path(&self) -> PathBuf {
        self.dir.join(&self.coverage_file)
    }

    /// Full path of the factsheet-only CSV.
    pub fn factsheets_path(&self) -> PathBuf {
        self.dir.join(&self.factsheets_file)
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_coverage_file() -> String {
    "Reference_Rates_Coverage.csv".into()
}
fn default_factsheets_file() -> String {
    "Reference_Rates_With_Factsheets.csv".into()
}

/// `[[extra_indices]]` entry — one catalogue record supplied by the user.
///
/// Dates may be API timestamps (`2025-02-11T00:00:00Z`) or display dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraIndex {
    pub brand: String,
    pub family: String,
    pub name: String,
    pub ticker: String,
    pub dissemination: String,
    pub launch_date: String,
    pub inception_date: String,
    #[serde(default)]
    pub factsheet: String,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.rates-coverage/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CoverageError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the home config file (`~/.rates-coverage/rates-coverage.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(LOCAL_CONFIG_FILE))
}

/// Load the application config.
///
/// An explicit path must exist. Otherwise the working-directory file and then
/// the home file are tried; defaults are returned if neither exists.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return load_config_from(&local);
    }

    // No home directory is not fatal here, there is simply no home config.
    if let Ok(path) = config_file_path() {
        if path.exists() {
            return load_config_from(&path);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(AppConfig::default())
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CoverageError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        CoverageError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    tracing::debug!(?path, extra = config.extra_indices.len(), "loaded config");
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CoverageError::io(&dir, e))?;

    let path = dir.join(LOCAL_CONFIG_FILE);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CoverageError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CoverageError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
