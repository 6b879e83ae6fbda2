use indexmap::IndexMap;
use seo_helper_macros::Configurable;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::ConfigError, loose};

/// Feature toggles for tag generation.
///
/// [`Config`] is the stored, fully-resolved form: every flag has a value and
/// all of them default to `true`. Partial updates are expressed as
/// [`ConfigOverrides`] and applied with [`Config::merge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
  /// Emit the general block (title, favicon, description, robots).
  pub enable_general: bool,

  /// Emit the Facebook Open Graph block.
  pub enable_facebook_og: bool,

  /// Emit the Twitter Card block.
  pub enable_twitter: bool,

  /// Allow robots (`index,follow`) or disallow them (`noindex,nofollow`).
  pub enable_robots: bool,

  /// Use general fields as fallbacks for Open Graph and Twitter fields.
  pub use_general_as_default: bool,

  /// Keys we do not know about. Kept so that a caller's configuration
  /// round-trips, but never consulted while rendering.
  #[serde(flatten)]
  pub extra: IndexMap<String, Value>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      enable_general:         true,
      enable_facebook_og:     true,
      enable_twitter:         true,
      enable_robots:          true,
      use_general_as_default: true,
      extra:                  IndexMap::new(),
    }
  }
}

impl Config {
  /// Shallow merge: every flag set in `overrides` replaces ours, unknown
  /// keys are added.
  pub fn merge(&mut self, overrides: &ConfigOverrides) {
    let ConfigOverrides {
      enable_general,
      enable_facebook_og,
      enable_twitter,
      enable_robots,
      use_general_as_default,
      extra,
    } = overrides;

    if let Some(v) = *enable_general {
      self.enable_general = v;
    }
    if let Some(v) = *enable_facebook_og {
      self.enable_facebook_og = v;
    }
    if let Some(v) = *enable_twitter {
      self.enable_twitter = v;
    }
    if let Some(v) = *enable_robots {
      self.enable_robots = v;
    }
    if let Some(v) = *use_general_as_default {
      self.use_general_as_default = v;
    }

    self
      .extra
      .extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
  }

  /// Returns a copy of this config with `overrides` applied.
  #[must_use]
  pub fn merged(&self, overrides: &ConfigOverrides) -> Self {
    let mut config = self.clone();
    config.merge(overrides);
    config
  }
}

/// A partial [`Config`]. Flags left as [`None`] keep their current value.
#[derive(
  Debug, Clone, Default, PartialEq, Serialize, Deserialize, Configurable,
)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverrides {
  #[config(key = "enableGeneral")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enable_general: Option<bool>,

  #[config(key = "enableFacebookOg")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enable_facebook_og: Option<bool>,

  #[config(key = "enableTwitter")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enable_twitter: Option<bool>,

  #[config(key = "enableRobots")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enable_robots: Option<bool>,

  #[config(key = "useGeneralAsDefault")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub use_general_as_default: Option<bool>,

  #[config(skip)]
  #[serde(flatten)]
  pub extra: IndexMap<String, Value>,
}

impl ConfigOverrides {
  /// Build overrides from an arbitrary JSON value.
  ///
  /// Anything other than an object is treated as an empty override. Known
  /// keys are coerced by truthiness, unknown keys are kept verbatim.
  #[must_use]
  pub fn from_value(value: &Value) -> Self {
    let mut overrides = Self::default();

    let Value::Object(map) = value else {
      log::trace!("Ignoring non-object configuration override");
      return overrides;
    };

    for (key, value) in map {
      if !overrides.apply_value(key, value) {
        log::warn!("Unknown configuration key '{key}' will be kept but ignored");
        overrides.extra.insert(key.clone(), value.clone());
      }
    }

    overrides
  }

  /// Apply configuration overrides from `KEY=VALUE` strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value is not a valid boolean
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = loose::split_override(override_str)?;
      self.apply_override(key, value)?;
      log::debug!("Applied configuration override {key}={value}");
    }

    Ok(())
  }

  /// Merge another set of overrides into this one, the other's values taking
  /// precedence.
  pub fn merge(&mut self, mut other: Self) {
    let extra = std::mem::take(&mut other.extra);
    self.merge_fields(other);
    self.extra.extend(extra);
  }

  /// Returns whether no flag and no extra key is set.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }
}

#[cfg(test)]
mod tests {
  #![allow(
    clippy::unwrap_used,
    clippy::field_reassign_with_default,
    reason = "Fine in tests"
  )]

  use serde_json::json;

  use super::*;

  #[test]
  fn test_default_flags_are_enabled() {
    let config = Config::default();
    assert!(config.enable_general);
    assert!(config.enable_facebook_og);
    assert!(config.enable_twitter);
    assert!(config.enable_robots);
    assert!(config.use_general_as_default);
    assert!(config.extra.is_empty());
  }

  #[test]
  fn test_config_merge_only_touches_set_flags() {
    let mut config = Config::default();
    let mut overrides = ConfigOverrides::default();
    overrides.enable_robots = Some(false);

    config.merge(&overrides);

    assert!(!config.enable_robots);
    assert!(config.enable_general);
    assert!(config.enable_twitter);
  }

  #[test]
  fn test_config_merged_leaves_original_untouched() {
    let config = Config::default();
    let overrides = ConfigOverrides {
      enable_general: Some(false),
      ..Default::default()
    };

    let merged = config.merged(&overrides);

    assert!(!merged.enable_general);
    assert!(config.enable_general);
  }

  #[test]
  fn test_config_merge_adds_unknown_keys() {
    let mut config = Config::default();
    config.merge(&ConfigOverrides::from_value(&json!({ "custom": 1 })));
    config.merge(&ConfigOverrides::from_value(&json!({ "other": "x" })));

    assert_eq!(config.extra.get("custom"), Some(&json!(1)));
    assert_eq!(config.extra.get("other"), Some(&json!("x")));
  }

  #[test]
  fn test_overrides_from_non_object_is_empty() {
    assert!(ConfigOverrides::from_value(&json!(null)).is_empty());
    assert!(ConfigOverrides::from_value(&json!("x")).is_empty());
    assert!(ConfigOverrides::from_value(&json!([true])).is_empty());
    assert!(ConfigOverrides::from_value(&json!(5)).is_empty());
  }

  #[test]
  fn test_overrides_from_value_coerces_truthiness() {
    let overrides = ConfigOverrides::from_value(&json!({
      "enableGeneral": 0,
      "enableRobots": "yes",
      "enableTwitter": null,
      "useGeneralAsDefault": false,
    }));

    assert_eq!(overrides.enable_general, Some(false));
    assert_eq!(overrides.enable_robots, Some(true));
    assert_eq!(overrides.enable_twitter, Some(false));
    assert_eq!(overrides.use_general_as_default, Some(false));
    assert_eq!(overrides.enable_facebook_og, None);
  }

  #[test]
  fn test_apply_overrides_boolean() {
    let mut overrides = ConfigOverrides::default();

    overrides
      .apply_overrides(&[
        "enableRobots=false".to_string(),
        "enableTwitter = yes".to_string(),
      ])
      .unwrap();

    assert_eq!(overrides.enable_robots, Some(false));
    assert_eq!(overrides.enable_twitter, Some(true));
    assert_eq!(overrides.enable_general, None);
  }

  #[test]
  fn test_apply_overrides_unknown_key() {
    let mut overrides = ConfigOverrides::default();

    let result = overrides.apply_overrides(&["enable_robots=true".to_string()]);

    assert!(result.is_err());
    assert!(
      result
        .unwrap_err()
        .to_string()
        .contains("Unknown configuration key")
    );
  }

  #[test]
  fn test_apply_overrides_invalid_boolean() {
    let mut overrides = ConfigOverrides::default();

    let result = overrides.apply_overrides(&["enableGeneral=maybe".to_string()]);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid boolean"));
  }

  #[test]
  fn test_overrides_merge_later_wins() {
    let mut base = ConfigOverrides {
      enable_general: Some(true),
      enable_robots: Some(true),
      ..Default::default()
    };
    let other = ConfigOverrides {
      enable_robots: Some(false),
      ..Default::default()
    };

    base.merge(other);

    assert_eq!(base.enable_general, Some(true));
    assert_eq!(base.enable_robots, Some(false));
  }

  #[test]
  fn test_config_deserializes_camel_case_keys() {
    let config: Config = serde_json::from_value(json!({
      "enableFacebookOg": false,
      "somethingElse": "kept",
    }))
    .unwrap();

    assert!(!config.enable_facebook_og);
    assert!(config.enable_general);
    assert_eq!(config.extra.get("somethingElse"), Some(&json!("kept")));
  }

  #[test]
  fn test_keys_lists_every_flag() {
    assert_eq!(ConfigOverrides::KEYS, &[
      "enableGeneral",
      "enableFacebookOg",
      "enableTwitter",
      "enableRobots",
      "useGeneralAsDefault",
    ]);
  }
}
