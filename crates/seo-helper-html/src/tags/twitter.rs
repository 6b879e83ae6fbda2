use std::fmt::Write;

use seo_helper_config::{
  Meta,
  loose::truthy,
  meta::or_else,
};

/// Fill missing Twitter Card fields from the general ones.
///
/// The image alt is only derived when an image was resolved.
pub fn fill_from_general(meta: &mut Meta) {
  meta.twitter_image = or_else(meta.twitter_image.take(), meta.image.as_ref());
  meta.twitter_url = or_else(meta.twitter_url.take(), meta.url.as_ref());
  meta.twitter_desc = or_else(meta.twitter_desc.take(), meta.desc.as_ref());
  meta.twitter_title = or_else(meta.twitter_title.take(), meta.title.as_ref());

  if truthy(meta.twitter_image.as_ref()).is_some() {
    let image_alt =
      or_else(meta.twitter_image_alt.take(), meta.image_alt.as_ref());
    meta.twitter_image_alt = or_else(image_alt, meta.twitter_title.as_ref());
  }
}

/// Twitter Card block. Written only when title, url, description and image
/// are all present.
pub fn write(out: &mut String, meta: &Meta) {
  let title = truthy(meta.twitter_title.as_ref());
  let url = truthy(meta.twitter_url.as_ref());
  let desc = truthy(meta.twitter_desc.as_ref());
  let image = truthy(meta.twitter_image.as_ref());

  if title.is_none() || url.is_none() || desc.is_none() || image.is_none() {
    return;
  }

  out.push_str(r#"<meta name="twitter:card" content="summary"/>"#);

  // Each tag keeps its own guard even though the check above already
  // requires all four.
  if let Some(title) = title {
    let _ = write!(out, r#"<meta name="twitter:title" content="{title}"/>"#);
  }
  if let Some(url) = url {
    let _ = write!(out, r#"<meta name="twitter:url" content="{url}"/>"#);
  }
  if let Some(desc) = desc {
    let _ =
      write!(out, r#"<meta name="twitter:description" content="{desc}"/>"#);
  }
  if let Some(image) = image {
    let _ = write!(out, r#"<meta name="twitter:image" content="{image}"/>"#);
  }
  if let Some(alt) = truthy(meta.twitter_image_alt.as_ref()) {
    let _ = write!(out, r#"<meta name="twitter:image:alt" content="{alt}"/>"#);
  }
}
