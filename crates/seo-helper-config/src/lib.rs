pub mod config;
pub mod error;
pub mod loose;
pub mod meta;
pub mod settings;
pub mod templates;

pub use config::{Config, ConfigOverrides};
pub use error::ConfigError;
pub use meta::Meta;
pub use settings::Settings;
