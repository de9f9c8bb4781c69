//! Optional `renumber.json` configuration.
//!
//! Precedence for every setting: CLI flag, then config file, then built-in
//! default. A `dir` read from a file is resolved against that file's directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::naming::DigitPolicy;
use crate::paths;

/// Root structure of renumber.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RenumberConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    #[serde(default)]
    pub slug_digits: DigitPolicy,
}

/// Config plus the file it was read from (None for built-in defaults).
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: RenumberConfig,
    pub source: Option<PathBuf>,
}

/// Flags that override the loaded config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dir: Option<PathBuf>,
    pub legacy_digits: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub dir: PathBuf,
    pub slug_digits: DigitPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<PathBuf>,
}

/// Parse a config file.
pub fn load_from_file(path: &Path) -> Result<RenumberConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let config: RenumberConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    if let Some(dir) = &config.dir {
        if dir.as_os_str().is_empty() {
            return Err(Error::config_invalid_value(
                "dir",
                Some(String::new()),
                "dir cannot be empty",
            ));
        }
    }

    Ok(config)
}

/// Load config from an explicit path, or from ./renumber.json when present.
///
/// An explicit path must exist; a missing default file means built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(p) => {
            if !p.is_file() {
                return Err(Error::config_invalid_value(
                    "config",
                    Some(p.display().to_string()),
                    "Config file does not exist",
                ));
            }
            p.to_path_buf()
        }
        None => {
            let default = paths::default_config()?;
            if !default.is_file() {
                return Ok(LoadedConfig::default());
            }
            default
        }
    };

    let config = load_from_file(&path)?;
    log_status!("config", "Loaded {}", path.display());

    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}

impl LoadedConfig {
    /// Apply CLI overrides and resolve the target directory.
    pub fn resolve(&self, overrides: &Overrides) -> Result<Settings> {
        let cwd = paths::cwd()?;

        let dir = if let Some(flag) = &overrides.dir {
            paths::resolve_against(&cwd, flag)
        } else if let Some(dir) = &self.config.dir {
            let base = self
                .source
                .as_deref()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.clone());
            paths::resolve_against(&base, dir)
        } else {
            cwd.join(paths::DEFAULT_DIR)
        };

        let slug_digits = if overrides.legacy_digits {
            DigitPolicy::Legacy
        } else {
            self.config.slug_digits
        };

        Ok(Settings {
            dir,
            slug_digits,
            config_path: self.source.clone(),
        })
    }
}
