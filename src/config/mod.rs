mod schema;

pub use schema::{Config, OutputConfig};

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/policy-matrix/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("policy-matrix"))
}

/// Get the default config file path (~/.config/policy-matrix/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/policy-matrix/config.yaml) and falls back to built-in
///   defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let mut config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    // Relative table paths are relative to the config file, not the cwd
    if let Some(dir) = config_path.parent() {
        config.table = config.table.map(|table| {
            if table.is_relative() && table != Path::new("-") {
                dir.join(table)
            } else {
                table
            }
        });
    }

    Ok(config)
}

/// Read a decision table from a file, or from stdin when the path is "-".
pub fn read_table(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut text)
            .context("Failed to read table from stdin")?;
        return Ok(text);
    }

    fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file at {}", path.display()))
}
