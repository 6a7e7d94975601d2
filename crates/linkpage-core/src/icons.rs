//! Icon resolution.
//!
//! Every icon on the page goes through one [`IconResolver`] with a fixed
//! precedence: configuration-provided glyph, then the built-in glyph table,
//! then a symbolic reference into the sprite resource.

use std::collections::BTreeMap;

use crate::config::{Glyph, PageConfig};

/// Icon used for link cards that name none.
pub const DEFAULT_LINK_ICON: &str = "link";

pub const MENU: &str = "menu";
pub const SHARE_APPLE: &str = "share-apple";
pub const SHARE_ANDROID: &str = "share-android";
pub const COPY: &str = "copy";
pub const CLOSE: &str = "close";

const VIEW_BOX: &str = "0 0 24 24";

/// Built-in glyphs, name → path data. All use a 24x24 view box.
const BUILTIN: &[(&str, &str)] = &[
    (
        MENU,
        "M12 8c1.1 0 2-.9 2-2s-.9-2-2-2-2 .9-2 2 .9 2 2 2zm0 2c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm0 6c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2z",
    ),
    (
        SHARE_APPLE,
        "M16 5l-1.42 1.42-1.59-1.59V16h-1.98V4.83L9.42 6.42 8 5l4-4 4 4zm4 5v11c0 1.1-.9 2-2 2H6c-1.11 0-2-.9-2-2V10c0-1.11.89-2 2-2h3v2H6v11h12V10h-3V8h3c1.1 0 2 .89 2 2z",
    ),
    (
        SHARE_ANDROID,
        "M18 16.08c-.76 0-1.44.3-1.96.77L8.91 12.7c.05-.23.09-.46.09-.7s-.04-.47-.09-.7l7.05-4.11c.54.5 1.25.81 2.04.81 1.66 0 3-1.34 3-3s-1.34-3-3-3-3 1.34-3 3c0 .24.04.47.09.7L8.04 9.81C7.5 9.31 6.79 9 6 9c-1.66 0-3 1.34-3 3s1.34 3 3 3c.79 0 1.5-.31 2.04-.81l7.12 4.16c-.05.21-.08.43-.08.65 0 1.61 1.31 2.92 2.92 2.92s2.92-1.31 2.92-2.92-1.31-2.92-2.92-2.92z",
    ),
    (
        COPY,
        "M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm0 16H8V7h11v14z",
    ),
    (
        CLOSE,
        "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
    ),
    (
        DEFAULT_LINK_ICON,
        "M3.9 12c0-1.71 1.39-3.1 3.1-3.1h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-1.9H7c-1.71 0-3.1-1.39-3.1-3.1zM8 13h8v-2H8v2zm9-6h-4v1.9h4c1.71 0 3.1 1.39 3.1 3.1s-1.39 3.1-3.1 3.1h-4V17h4c2.76 0 5-2.24 5-5s-2.24-5-5-5z",
    ),
];

/// A resolved icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Path data drawn inline
    Glyph(Glyph),
    /// `<sprite>#<id>` reference for `<use href>`
    Sprite(String),
}

/// Resolves icon names for the whole page.
#[derive(Debug, Clone, Default)]
pub struct IconResolver {
    configured: BTreeMap<String, Glyph>,
    sprite: String,
}

impl IconResolver {
    pub fn new(configured: BTreeMap<String, Glyph>, sprite: impl Into<String>) -> Self {
        Self {
            configured,
            sprite: sprite.into(),
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.icons.clone(), config.icon_sprite.clone())
    }

    pub fn resolve(&self, name: &str) -> Icon {
        if let Some(glyph) = self.configured.get(name) {
            return Icon::Glyph(glyph.clone());
        }
        if let Some(glyph) = builtin(name) {
            return Icon::Glyph(glyph);
        }
        Icon::Sprite(format!("{}#{}", self.sprite, name))
    }
}

/// `<use>` element referencing a sprite symbol, with `href` escaped for an
/// attribute value.
pub fn sprite_use_markup(href: &str) -> String {
    let mut escaped = String::with_capacity(href.len());
    for c in href.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    format!("<use href=\"{}\"></use>", escaped)
}

/// Look up a glyph in the built-in table.
pub fn builtin(name: &str) -> Option<Glyph> {
    BUILTIN.iter().find(|(n, _)| *n == name).map(|(_, path)| Glyph {
        view_box: VIEW_BOX.to_string(),
        path: (*path).to_string(),
    })
}
