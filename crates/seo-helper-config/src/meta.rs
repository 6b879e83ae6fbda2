use indexmap::IndexMap;
use seo_helper_macros::Configurable;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  error::ConfigError,
  loose::{self, Loose},
};

/// Page metadata used to build the tags.
///
/// The same record serves as the stored defaults and as the per-call values.
/// A field left as [`None`] is absent and falls through to the layer below;
/// `Some("")` is present but empty, so it shadows a default and still counts
/// as missing when tags are emitted.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Configurable,
)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
  /// Page title, also the fallback for `ogTitle` and `twitterTitle`.
  #[config(key = "title")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  /// Page description.
  #[config(key = "desc")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub desc: Option<String>,

  /// Image for social cards when no network-specific image is given.
  #[config(key = "image")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,

  /// Alt text for `image`.
  #[config(key = "imageAlt")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_alt: Option<String>,

  /// Canonical page URL.
  #[config(key = "url")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,

  /// Link to the favicon image.
  #[config(key = "favicon")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub favicon: Option<String>,

  #[config(key = "ogTitle")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub og_title: Option<String>,

  /// `OpenGraph` object type: article, website, video...
  #[config(key = "ogType")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub og_type: Option<String>,

  #[config(key = "ogDesc")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub og_desc: Option<String>,

  #[config(key = "ogImage")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub og_image: Option<String>,

  #[config(key = "ogImageAlt")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub og_image_alt: Option<String>,

  #[config(key = "ogUrl")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub og_url: Option<String>,

  /// Facebook App ID.
  #[config(key = "ogFbAppId")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub og_fb_app_id: Option<String>,

  #[config(key = "twitterTitle")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter_title: Option<String>,

  #[config(key = "twitterDesc")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter_desc: Option<String>,

  #[config(key = "twitterUrl")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter_url: Option<String>,

  #[config(key = "twitterImage")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter_image: Option<String>,

  #[config(key = "twitterImageAlt")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter_image_alt: Option<String>,

  /// Fields without a dedicated slot. The metadata record is an open
  /// mapping, so these are merged like any other field.
  #[config(skip)]
  #[serde(flatten)]
  pub extra: IndexMap<String, String>,
}

impl Meta {
  /// Build metadata from an arbitrary JSON value.
  ///
  /// Anything other than an object is treated as empty. Values are coerced
  /// as described in [`Loose`]; arrays and objects are dropped.
  #[must_use]
  pub fn from_value(value: &Value) -> Self {
    let mut meta = Self::default();

    let Value::Object(map) = value else {
      log::trace!("Ignoring non-object metadata");
      return meta;
    };

    for (key, value) in map {
      if meta.apply_value(key, value) {
        continue;
      }
      if let Some(value) = String::from_loose(value) {
        meta.extra.insert(key.clone(), value);
      }
    }

    meta
  }

  /// Apply metadata overrides from `KEY=VALUE` strings.
  ///
  /// Unknown keys are stored in [`Meta::extra`] rather than rejected.
  ///
  /// # Errors
  ///
  /// Returns an error if an override string is not in KEY=VALUE format.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = loose::split_override(override_str)?;
      if Self::KEYS.contains(&key) {
        self.apply_override(key, value)?;
      } else {
        self.extra.insert(key.to_string(), value.to_string());
      }
      log::debug!("Applied metadata override {key}={value}");
    }

    Ok(())
  }

  /// Shallow merge: every field present in `other` replaces ours.
  pub fn merge(&mut self, mut other: Self) {
    let extra = std::mem::take(&mut other.extra);
    self.merge_fields(other);
    self.extra.extend(extra);
  }

  /// Returns a copy of this record with `other` merged on top.
  #[must_use]
  pub fn merged(&self, other: &Self) -> Self {
    let mut meta = self.clone();
    meta.merge(other.clone());
    meta
  }

  /// Look up a field by its external key.
  #[must_use]
  pub fn get(&self, key: &str) -> Option<&str> {
    let field = match key {
      "title" => self.title.as_ref(),
      "desc" => self.desc.as_ref(),
      "image" => self.image.as_ref(),
      "imageAlt" => self.image_alt.as_ref(),
      "url" => self.url.as_ref(),
      "favicon" => self.favicon.as_ref(),
      "ogTitle" => self.og_title.as_ref(),
      "ogType" => self.og_type.as_ref(),
      "ogDesc" => self.og_desc.as_ref(),
      "ogImage" => self.og_image.as_ref(),
      "ogImageAlt" => self.og_image_alt.as_ref(),
      "ogUrl" => self.og_url.as_ref(),
      "ogFbAppId" => self.og_fb_app_id.as_ref(),
      "twitterTitle" => self.twitter_title.as_ref(),
      "twitterDesc" => self.twitter_desc.as_ref(),
      "twitterUrl" => self.twitter_url.as_ref(),
      "twitterImage" => self.twitter_image.as_ref(),
      "twitterImageAlt" => self.twitter_image_alt.as_ref(),
      _ => self.extra.get(key),
    };
    field.map(String::as_str)
  }
}

/// `value || fallback`: keep `value` if it is truthy, otherwise take
/// `fallback` as is (which may itself be empty or absent).
#[must_use]
pub fn or_else(value: Option<String>, fallback: Option<&String>) -> Option<String> {
  if loose::truthy(value.as_ref()).is_some() {
    value
  } else {
    fallback.cloned()
  }
}
