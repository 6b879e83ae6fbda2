use seo_helper_config::{Config, ConfigOverrides, Meta, Settings};
use serde_json::Value;

use crate::tags::{general, opengraph, twitter};

/// Meta tag generator.
///
/// Holds the stored feature toggles and the fallback metadata. Updating
/// either requires exclusive access, while [`MetaGenerator::render`] only
/// borrows, so a generator configured once at startup can be shared freely
/// for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaGenerator {
  config:   Config,
  defaults: Meta,
}

impl MetaGenerator {
  /// Create a generator with every flag enabled and no defaults.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a generator from loaded settings.
  #[must_use]
  pub fn from_settings(settings: Settings) -> Self {
    let mut generator = Self::new();
    generator.set_config(&settings.config);
    generator.set_default(settings.defaults);
    generator
  }

  /// The stored configuration.
  #[must_use]
  pub const fn config(&self) -> &Config {
    &self.config
  }

  /// The stored fallback metadata.
  #[must_use]
  pub const fn defaults(&self) -> &Meta {
    &self.defaults
  }

  /// Merge `overrides` into the stored configuration.
  pub fn set_config(&mut self, overrides: &ConfigOverrides) {
    self.config.merge(overrides);
    log::trace!("Stored configuration is now {:?}", self.config);
  }

  /// Merge a loosely-typed override into the stored configuration.
  ///
  /// Non-object values leave the configuration unchanged.
  pub fn set_config_value(&mut self, overrides: &Value) {
    self.set_config(&ConfigOverrides::from_value(overrides));
  }

  /// Merge `defaults` into the stored fallback metadata.
  pub fn set_default(&mut self, defaults: Meta) {
    self.defaults.merge(defaults);
    log::trace!("Stored defaults are now {:?}", self.defaults);
  }

  /// Merge loosely-typed metadata into the stored fallback metadata.
  ///
  /// Non-object values leave the defaults unchanged.
  pub fn set_default_value(&mut self, defaults: &Value) {
    self.set_default(Meta::from_value(defaults));
  }

  /// Render the tags for one page.
  ///
  /// `local_config` is applied on top of the stored configuration and `meta`
  /// on top of the stored defaults, for this call only. Blocks are written
  /// in a fixed order (general, Open Graph, Twitter) with nothing between
  /// tags.
  #[must_use]
  pub fn render(&self, meta: &Meta, local_config: &ConfigOverrides) -> String {
    let config = self.config.merged(local_config);
    // Fresh copy: gap filling below must never reach the stored defaults.
    let mut meta = self.defaults.merged(meta);
    let mut out = String::new();

    if config.enable_general {
      general::write(&mut out, &meta, &config);
    }

    if config.enable_facebook_og {
      if config.use_general_as_default {
        opengraph::fill_from_general(&mut meta);
      }
      opengraph::write(&mut out, &meta);
    }

    if config.enable_twitter {
      if config.use_general_as_default {
        twitter::fill_from_general(&mut meta);
      }
      twitter::write(&mut out, &meta);
    }

    out
  }

  /// [`MetaGenerator::render`] for loosely-typed arguments. Non-object
  /// values count as empty.
  #[must_use]
  pub fn render_value(&self, meta: &Value, local_config: &Value) -> String {
    self.render(
      &Meta::from_value(meta),
      &ConfigOverrides::from_value(local_config),
    )
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_new_generator_renders_robots_only() {
    let generator = MetaGenerator::new();
    assert_eq!(
      generator.render(&Meta::default(), &ConfigOverrides::default()),
      r#"<meta name="robots" content="index,follow"/>"#
    );
  }

  #[test]
  fn test_render_does_not_touch_stored_defaults() {
    let mut generator = MetaGenerator::new();
    generator.set_default_value(&json!({
      "title": "T",
      "image": "I",
      "url": "U",
      "desc": "D",
      "ogType": "website",
    }));
    let before = generator.clone();

    let first = generator.render_value(&json!({}), &json!({}));
    let second = generator.render_value(&json!({}), &json!({}));

    assert_eq!(first, second);
    assert_eq!(generator, before);
    assert_eq!(generator.defaults().og_title, None);
    assert_eq!(generator.defaults().twitter_image, None);
  }

  #[test]
  fn test_local_config_is_not_stored() {
    let generator = MetaGenerator::new();
    let _ = generator.render_value(&json!({}), &json!({ "enableRobots": false }));
    assert!(generator.config().enable_robots);
  }

  #[test]
  fn test_from_settings() {
    let settings = Settings {
      config:   ConfigOverrides {
        enable_twitter: Some(false),
        ..Default::default()
      },
      defaults: Meta {
        title: Some("Site".to_string()),
        ..Default::default()
      },
    };

    let generator = MetaGenerator::from_settings(settings);

    assert!(!generator.config().enable_twitter);
    assert!(generator.config().enable_general);
    assert_eq!(generator.defaults().title.as_deref(), Some("Site"));
  }
}
