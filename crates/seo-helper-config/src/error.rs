use thiserror::Error;

/// Error type for seo-helper-config operations
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Configuration error: {0}")]
  Config(String),
}
