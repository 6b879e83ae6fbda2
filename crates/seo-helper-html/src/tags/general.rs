use std::fmt::Write;

use seo_helper_config::{Config, Meta, loose::truthy};

/// Title, favicon, description and the robots directive.
///
/// The robots tag is always written; `enable_robots` only picks its content.
pub fn write(out: &mut String, meta: &Meta, config: &Config) {
  if let Some(title) = truthy(meta.title.as_ref()) {
    let _ = write!(out, "<title>{title}</title>");
  }
  if let Some(favicon) = truthy(meta.favicon.as_ref()) {
    let _ = write!(out, r#"<link rel="icon" type="image/png" href="{favicon}" />"#);
  }
  if let Some(desc) = truthy(meta.desc.as_ref()) {
    let _ = write!(out, r#"<meta name="description" content="{desc}" />"#);
  }

  let robots = if config.enable_robots {
    "index,follow"
  } else {
    "noindex,nofollow"
  };
  let _ = write!(out, r#"<meta name="robots" content="{robots}"/>"#);
}
