//! Link Card Renderer
//!
//! Builds the main list of cards and classifies each target as internal or
//! external relative to the page host.

use url::Url;

use crate::config::MainLink;
use crate::icons::{Icon, IconResolver, DEFAULT_LINK_ICON};
use crate::render::Anchor;

/// One rendered destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCard {
    pub anchor: Anchor,
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// Cards appended to the link container, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCardsView {
    pub cards: Vec<LinkCard>,
}

/// Whether `url` leaves the current page's host.
///
/// Empty, fragment-only and root-relative targets are internal. Anything that
/// does not parse as an absolute URL is internal too.
pub fn is_external_url(url: &str, page_host: Option<&str>) -> bool {
    if url.is_empty() || url.starts_with('#') || url.starts_with('/') {
        return false;
    }
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or("") != page_host.unwrap_or(""),
        Err(_) => false,
    }
}

pub fn render_link_cards(
    links: &[MainLink],
    page_host: Option<&str>,
    icons: &IconResolver,
) -> LinkCardsView {
    let cards = links
        .iter()
        .map(|link| {
            let anchor = if is_external_url(&link.url, page_host) {
                Anchor::new_context(link.url.clone())
            } else {
                Anchor::in_place(link.url.clone())
            };
            LinkCard {
                anchor,
                icon: icons.resolve(link.icon.as_deref().unwrap_or(DEFAULT_LINK_ICON)),
                title: link.title.clone(),
                description: link.description.clone(),
            }
        })
        .collect();

    LinkCardsView { cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons;

    const HOST: Option<&str> = Some("ada.example");

    fn link(url: &str, icon: Option<&str>) -> MainLink {
        MainLink {
            url: url.to_string(),
            title: format!("title {}", url),
            description: "desc".to_string(),
            icon: icon.map(String::from),
        }
    }

    #[test]
    fn test_internal_targets() {
        for url in ["", "#top", "/about", "//ada.example/x", "about.html", "not a url"] {
            assert!(!is_external_url(url, HOST), "{:?} should be internal", url);
        }
        assert!(!is_external_url("https://ada.example/blog", HOST));
    }

    #[test]
    fn test_external_targets() {
        assert!(is_external_url("https://elsewhere.example", HOST));
        assert!(is_external_url("http://sub.ada.example/", HOST));
        // No host on either side compares equal
        assert!(!is_external_url("mailto:ada@ada.example", None));
        assert!(is_external_url("mailto:ada@ada.example", HOST));
        assert!(is_external_url("https://ada.example", None));
    }

    #[test]
    fn test_empty_list() {
        let view = render_link_cards(&[], HOST, &IconResolver::default());
        assert!(view.cards.is_empty());
    }

    #[test]
    fn test_cards_keep_order_and_classify() {
        let links = vec![
            link("https://elsewhere.example", Some("icon-blog")),
            link("/contact", None),
            link("https://ada.example/cv", None),
        ];
        let resolver = IconResolver::new(Default::default(), "icons.svg");
        let view = render_link_cards(&links, HOST, &resolver);

        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.cards[0].anchor.target(), Some("_blank"));
        assert_eq!(view.cards[1].anchor.target(), None);
        assert_eq!(view.cards[2].anchor.rel(), None);
        assert_eq!(view.cards[1].title, "title /contact");

        assert_eq!(
            view.cards[0].icon,
            Icon::Sprite("icons.svg#icon-blog".to_string())
        );
        assert_eq!(
            view.cards[1].icon,
            Icon::Glyph(icons::builtin(DEFAULT_LINK_ICON).unwrap())
        );
    }
}
