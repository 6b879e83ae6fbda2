use std::fmt;

/// Error type for template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// Indicates that the requested settings format is not supported.
  /// Contains the name of the unsupported format.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported settings format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Starter settings file in TOML, with every key listed and explained.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# seo-helper settings

# Feature toggles. Every flag defaults to true.
[config]
# Emit <title>, favicon, description and robots tags
enableGeneral = true

# Emit Facebook Open Graph tags (requires ogType, ogTitle, ogImage and ogUrl)
enableFacebookOg = true

# Emit Twitter Card tags (requires twitterTitle, twitterUrl, twitterDesc and
# twitterImage)
enableTwitter = true

# index,follow when true, noindex,nofollow when false
enableRobots = true

# Fill missing Open Graph and Twitter fields from the general ones
useGeneralAsDefault = true

# Fallback values used whenever a page does not provide its own.
[defaults]
# title = "My Site"
# desc = "A short description of the site"
# image = "https://example.com/cover.png"
# imageAlt = "Site cover"
# url = "https://example.com"
# favicon = "/favicon.png"

# Open Graph
# ogType = "website"
# ogFbAppId = "1234567890"

# Twitter Card
# twitterImageAlt = "Site cover"
"#;

/// Starter settings file in JSON.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "config": {
    "enableGeneral": true,
    "enableFacebookOg": true,
    "enableTwitter": true,
    "enableRobots": true,
    "useGeneralAsDefault": true
  },
  "defaults": {
    "title": "My Site",
    "ogType": "website"
  }
}
"#;

/// Returns the starter settings file for `format` (`toml` or `json`).
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedFormat`] for any other format.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;
  use crate::settings::Settings;

  #[test]
  fn test_get_template_is_case_insensitive() {
    assert_eq!(get_template("TOML").unwrap(), DEFAULT_TOML_TEMPLATE);
    assert_eq!(get_template("json").unwrap(), DEFAULT_JSON_TEMPLATE);
  }

  #[test]
  fn test_get_template_unsupported() {
    let err = get_template("yaml").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported settings format: yaml");
  }

  #[test]
  fn test_templates_parse() {
    let from_toml: Settings = toml::from_str(DEFAULT_TOML_TEMPLATE).unwrap();
    assert_eq!(from_toml.config.enable_robots, Some(true));
    assert_eq!(from_toml.defaults.title, None);

    let from_json: Settings =
      serde_json::from_str(DEFAULT_JSON_TEMPLATE).unwrap();
    assert_eq!(from_json.defaults.og_type.as_deref(), Some("website"));
  }
}
