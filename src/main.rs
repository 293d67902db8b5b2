#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use leadform_core::{logging, Locale};

/// Startup configuration, set once from the command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the startup configuration (defaults if not set)
pub fn app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// Leadform - contact request dialog
#[derive(Parser, Debug)]
#[command(name = "leadform-desktop")]
#[command(about = "Leadform - collect contact requests in a modal dialog")]
struct Args {
    /// Language of the dialog text (ru, en)
    #[arg(short, long, default_value = "ru")]
    locale: String,

    /// Show the contact dialog immediately on launch
    #[arg(short, long)]
    open: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = logging::DEFAULT_FILTER)]
    log_filter: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 720.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

/// Settings the UI reads at startup
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub locale: Locale,
    /// Whether the dialog starts open
    pub start_open: bool,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            start_open: false,
            window_width: 720.0,
            window_height: 860.0,
        }
    }
}

impl TryFrom<&Args> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let locale = args
            .locale
            .parse::<Locale>()
            .with_context(|| format!("invalid --locale value '{}'", args.locale))?;

        Ok(Self {
            locale,
            start_open: args.open,
            window_width: args.width,
            window_height: args.height,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(&args.log_filter)?;

    let config = AppConfig::try_from(&args)?;
    tracing::info!(
        locale = %config.locale,
        start_open = config.start_open,
        "Starting Leadform"
    );

    let title = config.locale.copy().title;
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .with_resizable(true);

    let _ = APP_CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
