//! Page Configuration - the JSON document that drives every rendered element.
//!
//! The document is deserialized once and never mutated afterwards. Keys are
//! camelCase on the wire; unknown keys are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LoadResult;

/// Default sprite resource for symbolic icon references.
pub const DEFAULT_ICON_SPRITE: &str = "icons.svg";

/// Root of the page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Document title and visible heading
    pub page_title: String,

    /// Avatar and bio
    #[serde(default)]
    pub header: HeaderConfig,

    /// Outbound profile links shown as icons
    #[serde(default)]
    pub social: Option<SocialConfig>,

    /// Primary list of link cards
    pub main_links: Vec<MainLink>,

    /// Configuration-provided icon glyphs, keyed by icon name
    #[serde(default)]
    pub icons: BTreeMap<String, Glyph>,

    /// Canonical URL of the rendered page
    #[serde(default)]
    pub page_url: Option<String>,

    /// Share trigger and modal settings
    #[serde(default)]
    pub share: ShareConfig,

    /// Sprite resource used for icons without an inline glyph
    #[serde(default = "default_icon_sprite")]
    pub icon_sprite: String,
}

fn default_icon_sprite() -> String {
    DEFAULT_ICON_SPRITE.to_string()
}

/// `header` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default)]
    pub account_icon: Option<AccountIcon>,
    #[serde(default)]
    pub bio: Option<Bio>,
}

/// Avatar image shown before the title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountIcon {
    #[serde(default)]
    pub show: bool,
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

/// Free text shown under the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bio {
    #[serde(default)]
    pub show: bool,
    #[serde(default)]
    pub text: String,
}

/// `social` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default)]
    pub show: bool,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

/// One outbound profile reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub url: String,
    pub icon: String,
    pub platform: String,
    /// Absent means shown; only an explicit `false` hides the link
    #[serde(default)]
    pub show: Option<bool>,
}

impl SocialLink {
    /// Whether this entry survives the visibility filter.
    pub fn is_visible(&self) -> bool {
        self.show != Some(false)
    }
}

/// One destination in the main link list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainLink {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Inline SVG glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    pub view_box: String,
    pub path: String,
}

/// How the QR code image is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrMode {
    /// External QR image endpoint
    #[default]
    Remote,
    /// SVG generated locally
    Inline,
}

/// `share` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default)]
    pub qr: QrMode,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            show: true,
            qr: QrMode::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl PageConfig {
    /// Parse a configuration document.
    ///
    /// Only the shape is checked; an empty `pageTitle` is accepted as is.
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Social links that pass the visibility filter, in input order.
    ///
    /// Empty when the block is absent, hidden, or has no links.
    pub fn visible_social_links(&self) -> Vec<&SocialLink> {
        match &self.social {
            Some(social) if social.show => {
                social.links.iter().filter(|l| l.is_visible()).collect()
            }
            _ => Vec::new(),
        }
    }
}
