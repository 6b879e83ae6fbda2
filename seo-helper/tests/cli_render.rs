#![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]
use std::fs;

use seo_helper::cli::render_page;
use tempfile::TempDir;

#[test]
fn test_render_page_with_settings_and_overrides() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let settings = temp_dir.path().join("seo-helper.toml");
  fs::write(
    &settings,
    r#"
[config]
enableTwitter = false

[defaults]
title = "Site"
ogType = "website"
image = "https://example.com/cover.png"
"#,
  )
  .expect("Failed to write settings");

  let html = render_page(
    &[settings],
    &["enableRobots=no".to_string()],
    &[
      "title=Home".to_string(),
      "url=https://example.com".to_string(),
    ],
  )
  .expect("Failed to render");

  assert_eq!(
    html,
    concat!(
      "<title>Home</title>",
      r#"<meta name="robots" content="noindex,nofollow"/>"#,
      r#"<meta property="og:title" content="Home" />"#,
      r#"<meta property="og:type" content="website" />"#,
      r#"<meta property="og:description" content="" />"#,
      r#"<meta property="og:url" content="https://example.com" />"#,
      r#"<meta property="og:image" content="https://example.com/cover.png" />"#,
      r#"<meta property="og:image:alt" content="Home" />"#,
    )
  );
}

#[test]
fn test_render_page_rejects_malformed_override() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let settings = temp_dir.path().join("empty.json");
  fs::write(&settings, "{}").expect("Failed to write settings");

  let err = render_page(&[settings.clone()], &["enableRobots".to_string()], &[])
    .unwrap_err();
  assert!(err.to_string().contains("Expected KEY=VALUE"));

  let err = render_page(&[settings], &["robots=false".to_string()], &[])
    .unwrap_err();
  assert!(err.to_string().contains("Unknown configuration key"));
}

#[test]
fn test_render_page_keeps_unknown_meta_keys() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let settings = temp_dir.path().join("empty.toml");
  fs::write(&settings, "").expect("Failed to write settings");

  let html = render_page(&[settings], &[], &["author=Jane".to_string()])
    .expect("Unknown metadata keys are accepted");

  assert_eq!(html, r#"<meta name="robots" content="index,follow"/>"#);
}
