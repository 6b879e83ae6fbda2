//! Generate HTML `<head>` meta tags (general SEO, Open Graph, Twitter Cards
//! and robots directives) from stored defaults and per-page values.
//!
//! ```
//! use seo_helper::{ConfigOverrides, Meta, MetaGenerator};
//!
//! let mut generator = MetaGenerator::new();
//! generator.set_default(Meta {
//!   title: Some("My Site".to_string()),
//!   ..Default::default()
//! });
//!
//! let html = generator.render(&Meta::default(), &ConfigOverrides::default());
//! assert!(html.starts_with("<title>My Site</title>"));
//! ```
pub mod cli;

pub use seo_helper_config::{
  Config,
  ConfigError,
  ConfigOverrides,
  Meta,
  Settings,
};
pub use seo_helper_html::MetaGenerator;
