//! Coercion of loosely-typed input into configuration and metadata values.
//!
//! Callers may hand us arbitrary JSON (or `KEY=VALUE` strings from the CLI)
//! rather than typed records. Nothing here ever rejects a JSON value: a
//! value that cannot sensibly be used is simply ignored. String overrides are
//! stricter, since a typo on the command line should be reported.

use serde_json::Value;

use crate::error::ConfigError;

/// A field type that can be assigned from loose input.
pub trait Loose: Sized {
  /// Coerce a JSON value, or return [`None`] to leave the field untouched.
  fn from_loose(value: &Value) -> Option<Self>;

  /// Parse a `KEY=VALUE` override for the field named `key`.
  ///
  /// # Errors
  ///
  /// Returns an error if `value` is not valid for this type.
  fn parse_override(key: &str, value: &str) -> Result<Self, ConfigError>;
}

impl Loose for bool {
  /// Truthiness: `null` is false, numbers are true unless zero, strings are
  /// true unless empty, and arrays and objects are always true.
  fn from_loose(value: &Value) -> Option<Self> {
    let truthy = match value {
      Value::Null => false,
      Value::Bool(b) => *b,
      Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
      Value::String(s) => !s.is_empty(),
      Value::Array(_) | Value::Object(_) => true,
    };
    Some(truthy)
  }

  fn parse_override(key: &str, value: &str) -> Result<Self, ConfigError> {
    match value.to_lowercase().as_str() {
      "true" | "yes" | "1" => Ok(true),
      "false" | "no" | "0" => Ok(false),
      _ => {
        Err(ConfigError::Config(format!(
          "Invalid boolean value for '{key}': '{value}'. Expected \
           true/false, yes/no, or 1/0"
        )))
      },
    }
  }
}

impl Loose for String {
  /// `false` and `null` become an empty (present but falsy) string so that
  /// they still shadow a default during merge.
  fn from_loose(value: &Value) -> Option<Self> {
    match value {
      Value::String(s) => Some(s.clone()),
      Value::Number(n) => Some(number_text(n)),
      Value::Bool(true) => Some("true".to_string()),
      Value::Bool(false) | Value::Null => Some(Self::new()),
      Value::Array(_) | Value::Object(_) => None,
    }
  }

  fn parse_override(_key: &str, value: &str) -> Result<Self, ConfigError> {
    Ok(value.to_string())
  }
}

/// Decimal text of a JSON number. Floats without a fractional part are
/// written as integers, so `1.0` becomes `1`.
fn number_text(n: &serde_json::Number) -> String {
  match n.as_f64() {
    Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
      format!("{f:.0}")
    },
    _ => n.to_string(),
  }
}

/// Split a `KEY=VALUE` override into its trimmed parts.
///
/// # Errors
///
/// Returns an error if the string contains no `=`.
pub fn split_override(override_str: &str) -> Result<(&str, &str), ConfigError> {
  let (key, value) = override_str.split_once('=').ok_or_else(|| {
    ConfigError::Config(format!(
      "Invalid override format: '{override_str}'. Expected KEY=VALUE"
    ))
  })?;

  Ok((key.trim(), value.trim()))
}

/// Returns the value if it is present and non-empty.
#[must_use]
pub fn truthy(value: Option<&String>) -> Option<&str> {
  value.map(String::as_str).filter(|s| !s.is_empty())
}
