//! Valuation config file handling.
//!
//! Lookup order: `--config PATH` (must exist), then
//! `<config dir>/tenor/config.toml` when present, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tenor_analytics::ValuationConfig;

use crate::error::{CliError, CliResult};

const APP_DIR: &str = "tenor";
const FILE_NAME: &str = "config.toml";

/// Where the effective config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Config plus its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ValuationConfig,
    pub source: ConfigSource,
}

/// Default config location for this platform.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
}

/// The path `config init` writes to and `config path` reports.
pub fn target_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_path().ok_or(CliError::NoConfigDir),
    }
}

/// Loads the effective config.
pub fn load(explicit: Option<&Path>) -> CliResult<LoadedConfig> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(CliError::ConfigNotFound(path.to_path_buf())),
        Some(path) => Some(path.to_path_buf()),
        None => default_path().filter(|p| p.exists()),
    };

    let Some(path) = path else {
        tracing::debug!("no config file, using defaults");
        return Ok(LoadedConfig {
            config: ValuationConfig::default(),
            source: ConfigSource::Defaults,
        });
    };

    let config = read_file(&path)?;
    tracing::debug!(path = %path.display(), "loaded valuation config");
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path),
    })
}

fn read_file(path: &Path) -> CliResult<ValuationConfig> {
    let config_error = |reason: String| CliError::Config {
        path: path.to_path_buf(),
        reason,
    };

    let text = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let config: ValuationConfig = toml::from_str(&text).map_err(|e| config_error(e.to_string()))?;
    config.validate().map_err(|e| config_error(e.to_string()))?;
    Ok(config)
}

/// Renders a config as TOML.
pub fn to_toml(config: &ValuationConfig) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Writes the default config to `path`, creating parent directories.
pub fn write_default(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()).into());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_toml(&ValuationConfig::default())?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenor_analytics::config::{YieldBracket, YieldCompounding};

    #[test]
    fn test_missing_explicit_file() {
        let err = load(Some(Path::new("/no/such/tenor.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound(_)));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "default_spread_bps = 25.0\n\n[yields]\nbracket = \"narrow\"\n",
        )
        .unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded.source, ConfigSource::File(path));
        assert_eq!(loaded.config.default_spread_bps, 25.0);
        assert_eq!(loaded.config.yields.bracket, YieldBracket::Narrow);
        assert_eq!(loaded.config.yields.compounding, YieldCompounding::Periodic);
        assert_eq!(loaded.config.z_spread.max_iterations, 1000);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[yields]\nbracket = \"sideways\"\n").unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_default(&path, false).unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded.config, ValuationConfig::default());

        assert!(write_default(&path, false).is_err());
        write_default(&path, true).unwrap();
    }
}
