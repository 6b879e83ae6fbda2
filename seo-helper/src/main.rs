use std::{
  fs,
  io::{self, Write},
};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use seo_helper::{
  Settings,
  cli::{self, Cli, Commands},
};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Auto)
    .init();

  match cli.command {
    Commands::Render {
      settings_files,
      config_overrides,
      meta,
    } => {
      let html = cli::render_page(&settings_files, &config_overrides, &meta)
        .wrap_err("Failed to render meta tags")?;

      let mut stdout = io::stdout().lock();
      writeln!(stdout, "{html}")?;
    },

    Commands::Init {
      output,
      format,
      force,
    } => {
      // Check if file already exists and that we're not forcing overwrite
      if output.exists() && !force {
        bail!(
          "Settings file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      // Create parent directories if needed
      if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
      {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
        info!("Created directory: {}", parent.display());
      }

      Settings::generate_default(&format, &output).wrap_err_with(|| {
        format!("Failed to generate settings file: {}", output.display())
      })?;

      info!("Settings file created successfully. Edit it to set your defaults.");
    },
  }

  Ok(())
}
