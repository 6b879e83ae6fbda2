//! HTML `<head>` tag generation: general SEO tags, Facebook Open Graph and
//! Twitter Cards, built from layered configuration and metadata.
pub mod generator;
mod tags;

pub use generator::MetaGenerator;
