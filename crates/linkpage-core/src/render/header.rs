//! Header Renderer - title, avatar, bio and footer year.

use crate::clock::Clock;
use crate::config::PageConfig;

/// Avatar image inserted as the header's first child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

/// Everything the header area displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Visible heading and window title
    pub title: String,
    pub avatar: Option<Avatar>,
    /// Plain text placed right after the header, never interpreted as markup
    pub bio: Option<String>,
    /// Calendar year at render time
    pub year: i32,
}

pub fn render_header(config: &PageConfig, clock: &dyn Clock) -> HeaderView {
    let avatar = config
        .header
        .account_icon
        .as_ref()
        .filter(|icon| icon.show)
        .map(|icon| Avatar {
            src: icon.url.clone(),
            alt: icon.alt.clone(),
        });

    let bio = config
        .header
        .bio
        .as_ref()
        .filter(|bio| bio.show && !bio.text.is_empty())
        .map(|bio| bio.text.clone());

    HeaderView {
        title: config.page_title.clone(),
        avatar,
        bio,
        year: clock.current_year(),
    }
}
