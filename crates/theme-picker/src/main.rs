use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use theme_picker::config::PickerConfig;
use theme_picker::i18n;
use theme_picker::view::picker::render_text;
use theme_picker::view::theme::{picker_entries_in, ServiceThemeProvider, ThemeLoader};
use tracing_subscriber::EnvFilter;

/// List the themes a user can pick from, official themes first.
#[derive(Parser, Debug)]
#[command(name = "theme-picker", version, about)]
struct Args {
    /// Config file (defaults to <config dir>/theme-picker/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory with user theme manifests and packages
    #[arg(long)]
    themes_dir: Option<PathBuf>,

    /// Id of the currently active theme
    #[arg(long)]
    current: Option<String>,

    /// Locale for theme labels
    #[arg(long)]
    locale: Option<String>,

    /// Print picker entries as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.config.or_else(PickerConfig::default_path) {
        Some(path) => PickerConfig::load(&path)?,
        None => PickerConfig::default(),
    };
    // Command-line flags override the config file
    if let Some(dir) = args.themes_dir {
        config.themes_dir = Some(dir);
    }
    if let Some(current) = args.current {
        config.current_theme = Some(current);
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    let locale = i18n::set_locale(&config.locale).to_string();

    let loader = match config.resolved_themes_dir() {
        Some(dir) => ThemeLoader::new(dir),
        None => ThemeLoader::embedded_only(),
    };
    let mut service = loader.load_all();

    if let Some(id) = config.current_theme.as_deref() {
        if let Err(e) = service.set_current_theme(id) {
            tracing::warn!("{}, keeping '{}'", e, service.current_theme().id);
        }
    }

    let entries = picker_entries_in(&ServiceThemeProvider::new(&service), &locale);
    if args.json {
        let json =
            serde_json::to_string_pretty(&entries).context("Failed to serialize theme list")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&entries, &locale));
    }

    Ok(())
}
