//! TOML-based configuration describing an initial grid.
//!
//! The default location is the platform-appropriate config file:
//! - Windows:  `%APPDATA%\GridLayout\grid.toml`
//! - Linux:    `~/.config/gridlayout/grid.toml`
//! - macOS:    `~/Library/Application Support/GridLayout/grid.toml`
//!
//! Any other path can be passed to [`load_config`] and [`save_config`].
//!
//! # File format (for beginners)
//!
//! ```toml
//! log_level = "info"
//!
//! [grid]
//! columns = 4
//! rows = 2
//! spacing = true
//! default_alignment = "top-left"
//! margin = { top = true, right = true, bottom = true, left = true }
//!
//! [[columns]]
//! index = 1            # 1-based
//! width = "10%"
//!
//! [[columns]]
//! index = 2
//! expand_ratio = 2.0
//!
//! [[items]]
//! name = "header"
//! area = { column1 = 0, row1 = 0, column2 = 3, row2 = 0 }
//! alignment = "middle-center"
//!
//! [[items]]
//! name = "sidebar"     # no area: auto-placed at the cursor
//! ```
//!
//! # Serde default values
//!
//! Every field has a default, so an empty file describes a 4×4 grid without
//! margin, spacing or items.  Items without an `id` get a fresh v4 UUID when
//! the grid is built.

use std::path::{Path, PathBuf};

use gridlayout_core::{Alignment, Area, MarginInfo};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "grid.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed, including unknown alignment names.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level grid configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub grid: GridSettings,
    /// Column width overrides, applied in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnEntry>,
    /// Items, placed in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemEntry>,
}

/// Dimensions and presentation flags of the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridSettings {
    #[serde(default = "default_dimension")]
    pub columns: u32,
    #[serde(default = "default_dimension")]
    pub rows: u32,
    #[serde(default)]
    pub spacing: bool,
    #[serde(default)]
    pub margin: MarginInfo,
    /// Alignment given to items that do not name their own.
    #[serde(default)]
    pub default_alignment: Alignment,
}

/// Width override for a single column.
///
/// `width` wins when both fields are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnEntry {
    /// 1-based column index.
    pub index: u32,
    /// Literal width specification such as `"10%"` or `"12em"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Expand ratio converted into a percentage width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_ratio: Option<f64>,
}

/// A single item to place in the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemEntry {
    /// Stable identity; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Display name used in logs and in the occupancy map.
    pub name: String,
    /// Explicit area; the item is auto-placed when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    /// Overrides the grid's default alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_dimension() -> u32 {
    4
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            grid: GridSettings::default(),
            columns: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: default_dimension(),
            rows: default_dimension(),
            spacing: false,
            margin: MarginInfo::default(),
            default_alignment: Alignment::default(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path of the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined from the environment.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads a [`GridConfig`] from `path`, returning `GridConfig::default()` if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<GridConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: GridConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(GridConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Writes `config` to `path` as pretty TOML.
///
/// Creates the parent directory if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &GridConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config directory including the `GridLayout` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("GridLayout"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("gridlayout"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("GridLayout")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
