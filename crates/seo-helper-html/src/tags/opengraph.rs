use std::fmt::Write;

use seo_helper_config::{
  Meta,
  loose::truthy,
  meta::or_else,
};

/// Fill missing Open Graph fields from the general ones.
///
/// The image alt falls back to the *resolved* `og_title`, so this must run
/// in the order written.
pub fn fill_from_general(meta: &mut Meta) {
  meta.og_title = or_else(meta.og_title.take(), meta.title.as_ref());
  meta.og_desc = or_else(meta.og_desc.take(), meta.desc.as_ref());
  meta.og_image = or_else(meta.og_image.take(), meta.image.as_ref());
  meta.og_url = or_else(meta.og_url.take(), meta.url.as_ref());

  let image_alt = or_else(meta.og_image_alt.take(), meta.image_alt.as_ref());
  meta.og_image_alt = or_else(image_alt, meta.og_title.as_ref());
}

/// Open Graph block. Written only when type, title, image and url are all
/// present; otherwise nothing at all is written.
pub fn write(out: &mut String, meta: &Meta) {
  let (Some(og_type), Some(title), Some(image), Some(url)) = (
    truthy(meta.og_type.as_ref()),
    truthy(meta.og_title.as_ref()),
    truthy(meta.og_image.as_ref()),
    truthy(meta.og_url.as_ref()),
  ) else {
    return;
  };

  // Description has no guard of its own.
  let desc = meta.og_desc.as_deref().unwrap_or_default();

  let _ = write!(
    out,
    concat!(
      r#"<meta property="og:title" content="{title}" />"#,
      r#"<meta property="og:type" content="{og_type}" />"#,
      r#"<meta property="og:description" content="{desc}" />"#,
      r#"<meta property="og:url" content="{url}" />"#,
      r#"<meta property="og:image" content="{image}" />"#,
    ),
    title = title,
    og_type = og_type,
    desc = desc,
    url = url,
    image = image,
  );

  if let Some(alt) = truthy(meta.og_image_alt.as_ref()) {
    let _ = write!(out, r#"<meta property="og:image:alt" content="{alt}" />"#);
  }
  if let Some(app_id) = truthy(meta.og_fb_app_id.as_ref()) {
    let _ = write!(out, r#"<meta property="fb:app_id" content="{app_id}" />"#);
  }
}
