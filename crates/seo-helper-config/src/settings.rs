use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  config::ConfigOverrides,
  error::ConfigError,
  meta::Meta,
  templates,
};

/// Initial generator state as read from a settings file.
///
/// Both parts are partial: `config` is applied on top of the built-in flag
/// defaults and `defaults` becomes the fallback metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Feature toggles.
  pub config: ConfigOverrides,

  /// Fallback metadata values.
  pub defaults: Meta,
}

impl Settings {
  /// Load settings from a file (TOML or JSON).
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the settings file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read settings file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Settings file has no extension: {}",
        path.display()
      )));
    };

    let value: Value = match ext.to_lowercase().as_str() {
      "json" => {
        serde_json::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse JSON settings from {}: {}",
            path.display(),
            e
          ))
        })?
      },
      "toml" => {
        toml::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse TOML settings from {}: {}",
            path.display(),
            e
          ))
        })?
      },
      _ => {
        return Err(ConfigError::Config(format!(
          "Unsupported settings file format: {}",
          path.display()
        )));
      },
    };
    let settings = Self::from_value(&value);

    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
  }

  /// Build settings from an arbitrary JSON value.
  ///
  /// Each section goes through the same coercion as the loosely-typed
  /// generator API, so `ogFbAppId = 1234` or `enableRobots = 0` are
  /// accepted. Missing or non-object sections are empty.
  #[must_use]
  pub fn from_value(value: &Value) -> Self {
    Self {
      config:   value
        .get("config")
        .map(ConfigOverrides::from_value)
        .unwrap_or_default(),
      defaults: value.get("defaults").map(Meta::from_value).unwrap_or_default(),
    }
  }

  /// Load and merge settings files in order, later files overriding earlier
  /// ones key by key.
  ///
  /// With no files given, a settings file discovered in the current directory
  /// is used if there is one; otherwise the result is empty.
  ///
  /// # Errors
  ///
  /// Returns an error if any file cannot be loaded.
  pub fn load(settings_files: &[PathBuf]) -> Result<Self, ConfigError> {
    if settings_files.is_empty() {
      return match Self::find_settings_file() {
        Some(discovered) => {
          log::info!("Using discovered settings file: {}", discovered.display());
          Self::from_file(&discovered)
        },
        None => Ok(Self::default()),
      };
    }

    let mut merged = Self::default();
    for path in settings_files {
      merged.merge(Self::from_file(path)?);
    }

    if settings_files.len() > 1 {
      log::info!("Loaded and merged {} settings files", settings_files.len());
    }

    Ok(merged)
  }

  /// Merge another settings value into this one, the other's values taking
  /// precedence.
  pub fn merge(&mut self, other: Self) {
    self.config.merge(other.config);
    self.defaults.merge(other.defaults);
  }

  /// Search for a settings file in the current directory.
  #[must_use]
  pub fn find_settings_file() -> Option<PathBuf> {
    let filenames = [
      "seo-helper.toml",
      "seo-helper.json",
      ".seo-helper.toml",
      ".seo-helper.json",
    ];

    let current_dir = std::env::current_dir().ok()?;
    filenames
      .iter()
      .map(|filename| current_dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Write a commented starter settings file.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default(format: &str, path: &Path) -> Result<(), ConfigError> {
    let content = templates::get_template(format)
      .map_err(|e| ConfigError::Config(e.to_string()))?;

    fs::write(path, content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default settings to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default settings file: {}", path.display());
    Ok(())
  }
}
