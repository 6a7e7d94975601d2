#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod platform;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use linkpage_core::ConfigSource;

/// Startup options, set once from the command line
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Where the page comes from and which URL it represents.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub source: ConfigSource,
    pub page_url: Option<String>,
}

/// Get the launch options (set from command line or default)
pub fn get_launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// linkpage - personal link-in-bio page
#[derive(Parser, Debug)]
#[command(name = "linkpage-desktop")]
#[command(about = "Render a link-in-bio page from a JSON configuration")]
struct Args {
    /// Page configuration, as a local path or an http(s) URL
    #[arg(short, long, default_value = linkpage_core::loader::DEFAULT_CONFIG)]
    config: String,

    /// Canonical URL of the page (used for sharing and external link detection)
    #[arg(short, long)]
    page_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let options = LaunchOptions {
        source: ConfigSource::parse(&args.config),
        page_url: args.page_url,
    };

    tracing::info!("Starting with configuration from {}", options.source);

    let _ = LAUNCH.set(options);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("linkpage")
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
