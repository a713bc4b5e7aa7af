//! Persisted user settings.
//!
//! Settings are a plain value handed to whoever needs them. Loading and
//! saving go through a [`SettingsStore`], so the JSON file used by the CLI
//! can be swapped for anything else.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const APP_NAME: &str = "formtab";
const SETTINGS_FILE: &str = "settings.json";

/// Spreadsheet flavour to export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Excel workbook (`.xlsx`)
    #[default]
    Excel,
}

/// Last used paths and export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory the PDF forms are read from
    pub input_path: PathBuf,

    /// Directory spreadsheets are written to
    pub output_path: PathBuf,

    /// Export format
    pub export_format: ExportFormat,
}

impl Settings {
    /// Set the input directory.
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for Settings {
    /// Input in the home directory, output in its `Downloads` folder.
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            output_path: home.join("Downloads"),
            input_path: home,
            export_format: ExportFormat::Excel,
        }
    }
}

/// Somewhere settings can be loaded from and saved to.
pub trait SettingsStore {
    /// Load settings. A store with nothing saved yet returns defaults.
    fn load(&self) -> Result<Settings>;

    /// Save settings, replacing what was stored before.
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Load settings, falling back to defaults when the store fails.
pub fn load_or_default(store: &dyn SettingsStore) -> Settings {
    match store.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    }
}

/// Settings kept as pretty-printed JSON in a file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Store settings at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store settings in the per-user application data directory.
    pub fn default_location() -> Self {
        let dir = dirs::data_local_dir()
            .map(|d| d.join(APP_NAME))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(SETTINGS_FILE))
    }

    /// Location of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let json = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&json)?;
        log::debug!("Settings loaded from {}", self.path.display());
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|e| {
            Error::Settings(format!("cannot write {}: {}", self.path.display(), e))
        })?;
        log::debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}
