use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seo_helper_config::{ConfigError, ConfigOverrides, Meta, Settings};
use seo_helper_html::MetaGenerator;

/// Command line interface for seo-helper
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate SEO meta tags for a page head")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,
}

/// All supported subcommands for the seo-helper CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Render the meta tags for one page and print them.
  Render {
    /// Path to settings file(s) (TOML or JSON, can be specified multiple
    /// times). Multiple files are merged in order, with later files
    /// overriding earlier ones
    #[arg(short = 'c', long = "settings-file", action = clap::ArgAction::Append)]
    settings_files: Vec<PathBuf>,

    /// Override a configuration flag for this page only (KEY=VALUE format,
    /// e.g. enableRobots=false)
    #[arg(long = "config", action = clap::ArgAction::Append)]
    config_overrides: Vec<String>,

    /// Page metadata (KEY=VALUE format, e.g. title=Home)
    #[arg(short, long, action = clap::ArgAction::Append)]
    meta: Vec<String>,
  },

  /// Initialize a new settings file
  Init {
    /// Path to create the settings file at
    #[arg(short, long, default_value = "seo-helper.toml")]
    output: PathBuf,

    /// Format of the settings file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Load settings, apply the per-page arguments and render.
///
/// # Errors
///
/// Returns an error if a settings file cannot be loaded or an override is
/// malformed.
pub fn render_page(
  settings_files: &[PathBuf],
  config_overrides: &[String],
  meta_overrides: &[String],
) -> Result<String, ConfigError> {
  let settings = Settings::load(settings_files)?;
  let generator = MetaGenerator::from_settings(settings);

  let mut local_config = ConfigOverrides::default();
  local_config.apply_overrides(config_overrides)?;

  let mut meta = Meta::default();
  meta.apply_overrides(meta_overrides)?;

  Ok(generator.render(&meta, &local_config))
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_parse_render_command() {
    let cli = Cli::try_parse_from([
      "seo-helper",
      "render",
      "-c",
      "base.toml",
      "--settings-file",
      "site.json",
      "--config",
      "enableRobots=false",
      "-m",
      "title=Home",
      "--meta",
      "url=https://example.com",
      "-v",
    ])
    .unwrap();

    assert!(cli.verbose);
    let Commands::Render {
      settings_files,
      config_overrides,
      meta,
    } = cli.command
    else {
      panic!("expected render command");
    };
    assert_eq!(settings_files, [
      PathBuf::from("base.toml"),
      PathBuf::from("site.json")
    ]);
    assert_eq!(config_overrides, ["enableRobots=false"]);
    assert_eq!(meta, ["title=Home", "url=https://example.com"]);
  }

  #[test]
  fn test_parse_init_defaults() {
    let cli = Cli::try_parse_from(["seo-helper", "init"]).unwrap();

    let Commands::Init {
      output,
      format,
      force,
    } = cli.command
    else {
      panic!("expected init command");
    };
    assert_eq!(output, PathBuf::from("seo-helper.toml"));
    assert_eq!(format, "toml");
    assert!(!force);
  }

  #[test]
  fn test_parse_init_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["seo-helper", "init", "-F", "yaml"]).is_err());
  }
}
