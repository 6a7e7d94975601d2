//! Renderers - pure builders turning the configuration into view models.
//!
//! Each renderer reads the immutable [`PageConfig`](crate::config::PageConfig)
//! and produces a value the UI draws verbatim. None of them perform IO.

pub mod cards;
pub mod header;
pub mod social;

pub use cards::{is_external_url, render_link_cards, LinkCard, LinkCardsView};
pub use header::{render_header, Avatar, HeaderView};
pub use social::{render_social_links, SocialAnchor, SocialLinksView};

/// `target` for anchors that open a new browsing context.
pub const TARGET_BLANK: &str = "_blank";

/// `rel` that prevents opener and referrer leakage.
pub const REL_NO_LEAK: &str = "noopener noreferrer";

/// Navigation target of an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    /// Opens in a new browsing context with the no-leak `rel`
    pub new_context: bool,
}

impl Anchor {
    pub fn in_place(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            new_context: false,
        }
    }

    pub fn new_context(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            new_context: true,
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        self.new_context.then_some(TARGET_BLANK)
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.new_context.then_some(REL_NO_LEAK)
    }
}

/// Fixed anchor points the renderers attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAnchor {
    PageTitle,
    CurrentYear,
    Header,
    LinkContainer,
}

impl HostAnchor {
    pub const ALL: [HostAnchor; 4] = [
        HostAnchor::PageTitle,
        HostAnchor::CurrentYear,
        HostAnchor::Header,
        HostAnchor::LinkContainer,
    ];

    /// Element id (or tag, for the header landmark) in the host markup.
    pub fn selector(&self) -> &'static str {
        match self {
            HostAnchor::PageTitle => "pageTitle",
            HostAnchor::CurrentYear => "currentYear",
            HostAnchor::Header => "header",
            HostAnchor::LinkContainer => "linkContainer",
        }
    }
}

/// The anchor points present in the host markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAnchors(Vec<HostAnchor>);

impl HostAnchors {
    pub fn new(anchors: impl IntoIterator<Item = HostAnchor>) -> Self {
        Self(anchors.into_iter().collect())
    }

    pub fn contains(&self, anchor: HostAnchor) -> bool {
        self.0.contains(&anchor)
    }

    pub fn without(mut self, anchor: HostAnchor) -> Self {
        self.0.retain(|a| *a != anchor);
        self
    }
}

impl Default for HostAnchors {
    fn default() -> Self {
        Self::new(HostAnchor::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_attributes() {
        let external = Anchor::new_context("https://elsewhere.example");
        assert_eq!(external.target(), Some("_blank"));
        assert_eq!(external.rel(), Some("noopener noreferrer"));

        let internal = Anchor::in_place("/about");
        assert_eq!(internal.target(), None);
        assert_eq!(internal.rel(), None);
    }

    #[test]
    fn test_host_anchors_without() {
        let anchors = HostAnchors::default().without(HostAnchor::LinkContainer);
        assert!(!anchors.contains(HostAnchor::LinkContainer));
        assert!(anchors.contains(HostAnchor::Header));
    }
}
