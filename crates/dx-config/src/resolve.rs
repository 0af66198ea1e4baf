//! Settings resolution and path discovery.
//!
//! Resolution order: CLI argument → `DX_CONFIG` → XDG config dir → defaults.
//! An explicitly named file (CLI or environment) must exist; the XDG location
//! is only used when present.

use crate::settings::Settings;
use crate::validate::{validate_settings, ConfigError};
use std::path::{Path, PathBuf};

/// Environment variable naming a settings file.
pub const ENV_CONFIG_PATH: &str = "DX_CONFIG";

/// Application name for XDG directories.
const APP_NAME: &str = "dx";

/// Standard settings file name.
const SETTINGS_FILENAME: &str = "settings.toml";

/// Where the settings were loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SettingsSource {
    /// Explicitly provided via `--config`.
    CliArgument(PathBuf),

    /// Named by `DX_CONFIG`.
    Environment(PathBuf),

    /// Found in the XDG config directory.
    XdgConfig(PathBuf),

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl SettingsSource {
    /// Path of the file that was loaded, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SettingsSource::CliArgument(p)
            | SettingsSource::Environment(p)
            | SettingsSource::XdgConfig(p) => Some(p),
            SettingsSource::BuiltinDefault => None,
        }
    }
}

impl std::fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsSource::CliArgument(p) => write!(f, "CLI argument ({})", p.display()),
            SettingsSource::Environment(p) => write!(f, "{} ({})", ENV_CONFIG_PATH, p.display()),
            SettingsSource::XdgConfig(p) => write!(f, "XDG config ({})", p.display()),
            SettingsSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Validated settings together with their provenance.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSettings {
    pub settings: Settings,
    pub source: SettingsSource,
}

/// Resolve settings from the process environment.
pub fn resolve_settings(cli_path: Option<&Path>) -> Result<ResolvedSettings, ConfigError> {
    let env_path = std::env::var_os(ENV_CONFIG_PATH)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let config_dir = dirs::config_dir().map(|d| d.join(APP_NAME));
    resolve_settings_from(cli_path, env_path.as_deref(), config_dir.as_deref())
}

/// Resolve settings from explicit candidates.
///
/// `config_dir` is the application directory (e.g. `~/.config/dx`); the
/// settings file inside it is optional.
pub fn resolve_settings_from(
    cli_path: Option<&Path>,
    env_path: Option<&Path>,
    config_dir: Option<&Path>,
) -> Result<ResolvedSettings, ConfigError> {
    let source = if let Some(path) = cli_path {
        require_exists(path)?;
        SettingsSource::CliArgument(path.to_path_buf())
    } else if let Some(path) = env_path {
        require_exists(path)?;
        SettingsSource::Environment(path.to_path_buf())
    } else {
        match config_dir.map(|d| d.join(SETTINGS_FILENAME)) {
            Some(path) if path.is_file() => SettingsSource::XdgConfig(path),
            _ => SettingsSource::BuiltinDefault,
        }
    };

    let settings = match source.path() {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    validate_settings(&settings)?;

    Ok(ResolvedSettings { settings, source })
}

fn require_exists(path: &Path) -> Result<(), ConfigError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        })
    }
}
