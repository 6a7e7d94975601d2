//! Page composition.
//!
//! Startup has two phases: [`load_config`] awaits the single configuration
//! read, then [`compose`] builds the whole [`PageView`] synchronously. A
//! failed load yields [`PageState::Failed`] and no view at all.

use std::fmt;

use url::Url;

use crate::clock::Clock;
use crate::config::PageConfig;
use crate::icons::IconResolver;
use crate::loader::{load_config, resolve_page_url, ConfigSource};
use crate::render::{
    render_header, render_link_cards, render_social_links, HeaderView, HostAnchor, HostAnchors,
    LinkCardsView, SocialLinksView,
};
use crate::share::{render_share, ShareView};

/// Environment the page is composed in.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Full URL of the page being rendered
    pub page_url: Option<Url>,
    /// `None` when the display does not report one
    pub device_pixel_ratio: Option<f64>,
    pub user_agent: String,
    pub anchors: HostAnchors,
}

impl PageContext {
    pub fn new(page_url: Option<Url>) -> Self {
        Self {
            page_url,
            ..Default::default()
        }
    }

    pub fn with_device_pixel_ratio(mut self, ratio: Option<f64>) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_anchors(mut self, anchors: HostAnchors) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn page_host(&self) -> Option<&str> {
        self.page_url.as_ref().and_then(|u| u.host_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem noticed while loading or composing.
///
/// Constructing one does not log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// Composed page, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub header: HeaderView,
    /// Placed after the header element
    pub social: Option<SocialLinksView>,
    /// `None` when the link container anchor is missing
    pub cards: Option<LinkCardsView>,
    pub share: Option<ShareView>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of the startup sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Ready(PageView),
    /// Nothing was rendered; the host markup stays in its default state
    Failed(Diagnostic),
}

/// Run every renderer over a loaded configuration.
pub fn compose(config: &PageConfig, ctx: &PageContext, clock: &dyn Clock) -> PageView {
    let icons = IconResolver::from_config(config);
    let mut diagnostics = Vec::new();

    for anchor in [HostAnchor::PageTitle, HostAnchor::CurrentYear, HostAnchor::Header] {
        if !ctx.anchors.contains(anchor) {
            diagnostics.push(Diagnostic::warning(format!(
                "Anchor '{}' not found in host markup",
                anchor.selector()
            )));
        }
    }

    if config.page_title.trim().is_empty() {
        diagnostics.push(Diagnostic::warning("pageTitle is empty"));
    }

    let header = render_header(config, clock);
    let social = render_social_links(config, &icons);

    let cards = if ctx.anchors.contains(HostAnchor::LinkContainer) {
        Some(render_link_cards(&config.main_links, ctx.page_host(), &icons))
    } else {
        diagnostics.push(Diagnostic::warning(format!(
            "Link container '{}' not found; skipping link cards",
            HostAnchor::LinkContainer.selector()
        )));
        None
    };

    let share = match &ctx.page_url {
        Some(url) => render_share(
            config,
            url,
            ctx.device_pixel_ratio,
            &ctx.user_agent,
            &icons,
        ),
        None if config.share.show => {
            diagnostics.push(Diagnostic::warning(
                "No page URL known; share feature disabled",
            ));
            None
        }
        None => None,
    };

    for diagnostic in &diagnostics {
        tracing::warn!("{}", diagnostic.message);
    }

    tracing::debug!(
        social = social.as_ref().map_or(0, |s| s.links.len()),
        cards = cards.as_ref().map_or(0, |c| c.cards.len()),
        share = share.is_some(),
        "Composed page"
    );

    PageView {
        header,
        social,
        cards,
        share,
        diagnostics,
    }
}

/// Load the configuration from `source` and compose the page.
///
/// The page URL is resolved from `page_url_override`, the configuration's
/// `pageUrl` and the source location, falling back to the context's own.
pub async fn build_page(
    source: &ConfigSource,
    page_url_override: Option<&str>,
    mut ctx: PageContext,
    clock: &dyn Clock,
) -> PageState {
    match load_config(source).await {
        Ok(config) => {
            ctx.page_url = resolve_page_url(page_url_override, &config, source).or(ctx.page_url);
            PageState::Ready(compose(&config, &ctx, clock))
        }
        Err(e) => PageState::Failed(Diagnostic::error(format!(
            "Failed to initialize content from {}: {}",
            source, e
        ))),
    }
}
