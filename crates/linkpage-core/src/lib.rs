//! linkpage Core Library
//!
//! Configuration-driven composition of a personal "link-in-bio" page.
//!
//! ## Overview
//!
//! A single JSON document describes the page: title, avatar, bio, social
//! profile icons, the main list of link cards, and the share modal. This crate
//! loads that document and turns it into an immutable [`PageView`] that a UI
//! front end draws verbatim. Nothing here touches a window or the network
//! beyond the one configuration read.
//!
//! ## Startup
//!
//! 1. **Load** - [`load_config`] reads `config.json` from a path or URL.
//! 2. **Compose** - [`compose`] runs the header, social, link card and share
//!    renderers over the loaded configuration.
//!
//! A load failure aborts rendering entirely ([`PageState::Failed`]); a missing
//! host anchor only skips the renderer that needs it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use linkpage_core::{build_page, ConfigSource, PageContext, PageState, SystemClock};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = ConfigSource::parse("config.json");
//!     match build_page(&source, None, PageContext::default(), &SystemClock).await {
//!         PageState::Ready(view) => println!("{} cards", view.cards.map_or(0, |c| c.cards.len())),
//!         PageState::Failed(diagnostic) => eprintln!("{}", diagnostic),
//!         PageState::Loading => unreachable!(),
//!     }
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod icons;
pub mod loader;
pub mod page;
pub mod render;
pub mod share;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Glyph, MainLink, PageConfig, QrMode, SocialLink};
pub use error::{ClipboardError, LoadError, LoadResult, ShareError};
pub use icons::{sprite_use_markup, Icon, IconResolver};
pub use loader::{load_config, resolve_page_url, ConfigSource};
pub use page::{build_page, compose, Diagnostic, PageContext, PageState, PageView, Severity};
pub use render::{
    is_external_url, Anchor, HeaderView, HostAnchor, HostAnchors, LinkCard, LinkCardsView,
    SocialAnchor, SocialLinksView,
};
pub use share::{
    copy_page_url, share_page, Clipboard, CopyOutcome, ModalEvent, ModalState, NativeShare,
    QrImage, ShareOutcome, SharePlatform, ShareView,
};
