//! linkpage CLI
//!
//! Thin wrapper around linkpage-core for checking a page configuration
//! without opening a window.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a configuration and summarize it
//! linkpage check config.json
//!
//! # List link cards with their internal/external classification
//! linkpage links config.json --page-url https://me.example/
//!
//! # Show what the share modal would display
//! linkpage share https://me.example/config.json --dpr 2
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use linkpage_core::{
    compose, load_config, resolve_page_url, ConfigSource, PageConfig, PageContext,
    QrImage, SharePlatform, SystemClock,
};

/// linkpage - link-in-bio page tools
#[derive(Parser)]
#[command(name = "linkpage")]
#[command(version = "0.1.0")]
#[command(about = "Validate and inspect link-in-bio page configurations")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a configuration
    Check {
        /// Configuration path or http(s) URL
        config: String,
    },

    /// List link cards and how they open
    Links {
        /// Configuration path or http(s) URL
        config: String,

        /// Canonical URL of the page
        #[arg(long)]
        page_url: Option<String>,
    },

    /// Show the share modal contents
    Share {
        /// Configuration path or http(s) URL
        config: String,

        /// Canonical URL of the page
        #[arg(long)]
        page_url: Option<String>,

        /// Device pixel ratio used for the QR image size
        #[arg(long)]
        dpr: Option<f64>,

        /// User agent used to pick the share glyph
        #[arg(long, default_value = "")]
        user_agent: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn load(config: &str) -> Result<(ConfigSource, PageConfig)> {
    let source = ConfigSource::parse(config);
    let page = load_config(&source).await?;
    tracing::info!(
        "Loaded '{}' from {} ({} link card(s))",
        page.page_title,
        source,
        page.main_links.len()
    );
    Ok((source, page))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Check { config } => {
            let (source, page) = load(&config).await?;
            let social_total = page.social.as_ref().map_or(0, |s| s.links.len());

            println!("Configuration OK: {}", source);
            println!();
            println!("Title: {}", page.page_title);
            println!(
                "Avatar: {}",
                if page.header.account_icon.as_ref().is_some_and(|a| a.show) { "shown" } else { "hidden" }
            );
            println!(
                "Bio: {}",
                if page.header.bio.as_ref().is_some_and(|b| b.show && !b.text.is_empty()) { "shown" } else { "hidden" }
            );
            println!(
                "Social links: {} of {} shown",
                page.visible_social_links().len(),
                social_total
            );
            println!("Link cards: {}", page.main_links.len());
            println!("Custom icons: {}", page.icons.len());
            println!("Share: {}", if page.share.show { "enabled" } else { "disabled" });
        }

        Commands::Links { config, page_url } => {
            let (source, page) = load(&config).await?;
            let ctx = PageContext::new(resolve_page_url(page_url.as_deref(), &page, &source));
            let view = compose(&page, &ctx, &SystemClock);

            let Some(cards) = view.cards else {
                bail!("link container unavailable");
            };
            if cards.cards.is_empty() {
                println!("No link cards configured.");
            }
            for card in cards.cards {
                let kind = if card.anchor.new_context { "external" } else { "internal" };
                println!("[{}] {} -> {}", kind, card.title, card.anchor.href);
            }
        }

        Commands::Share {
            config,
            page_url,
            dpr,
            user_agent,
        } => {
            let (source, page) = load(&config).await?;
            let ctx = PageContext::new(resolve_page_url(page_url.as_deref(), &page, &source))
                .with_device_pixel_ratio(dpr)
                .with_user_agent(user_agent.clone());
            let view = compose(&page, &ctx, &SystemClock);

            let Some(share) = view.share else {
                if page.share.show {
                    bail!("no page URL known; pass --page-url or set pageUrl");
                }
                println!("Share feature disabled.");
                return Ok(());
            };

            println!("Title: {}", share.title);
            println!("URL: {}", share.page_url);
            match share.qr {
                Some(QrImage::Remote { src }) => println!("QR: {}", src),
                Some(QrImage::Inline { svg }) => println!("QR: inline SVG ({} bytes)", svg.len()),
                None => println!("QR: unavailable"),
            }
            println!(
                "Share glyph: {}",
                SharePlatform::from_user_agent(&user_agent).icon_name()
            );
        }
    }

    Ok(())
}
