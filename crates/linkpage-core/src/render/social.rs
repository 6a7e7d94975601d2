//! Social Links Renderer
//!
//! Filters the `social` block down to visible entries and turns each into an
//! outbound icon anchor. Returns `None` whenever nothing should be inserted.

use crate::config::PageConfig;
use crate::icons::{Icon, IconResolver};
use crate::render::Anchor;

/// One outbound profile icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAnchor {
    pub anchor: Anchor,
    pub icon: Icon,
    /// Icon identifier, also used as a CSS class
    pub icon_name: String,
    /// Accessible label
    pub platform: String,
}

/// Container placed immediately after the header element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinksView {
    pub links: Vec<SocialAnchor>,
}

pub fn render_social_links(
    config: &PageConfig,
    icons: &IconResolver,
) -> Option<SocialLinksView> {
    let links: Vec<SocialAnchor> = config
        .visible_social_links()
        .into_iter()
        .map(|link| SocialAnchor {
            anchor: Anchor::new_context(link.url.clone()),
            icon: icons.resolve(&link.icon),
            icon_name: link.icon.clone(),
            platform: link.platform.clone(),
        })
        .collect();

    if links.is_empty() {
        return None;
    }
    Some(SocialLinksView { links })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(json: &str) -> Option<SocialLinksView> {
        let config = PageConfig::from_json_str(json).unwrap();
        render_social_links(&config, &IconResolver::from_config(&config))
    }

    #[test]
    fn test_absent_block_renders_nothing() {
        assert!(render(r#"{ "pageTitle": "Ada", "mainLinks": [] }"#).is_none());
    }

    #[test]
    fn test_empty_links_render_nothing() {
        assert!(render(
            r#"{ "pageTitle": "Ada", "social": { "show": true, "links": [] }, "mainLinks": [] }"#
        )
        .is_none());
    }

    #[test]
    fn test_all_hidden_renders_nothing() {
        let json = r#"{
            "pageTitle": "Ada",
            "social": { "show": true, "links": [
                { "url": "https://a.example", "icon": "a", "platform": "A", "show": false }
            ] },
            "mainLinks": []
        }"#;
        assert!(render(json).is_none());
    }

    #[test]
    fn test_filter_preserves_order() {
        let json = r#"{
            "pageTitle": "Ada",
            "social": { "show": true, "links": [
                { "url": "https://a.example", "icon": "icon-a", "platform": "A" },
                { "url": "https://b.example", "icon": "icon-b", "platform": "B", "show": false },
                { "url": "https://c.example", "icon": "icon-c", "platform": "C", "show": true },
                { "url": "https://d.example", "icon": "icon-d", "platform": "D" }
            ] },
            "mainLinks": []
        }"#;
        let view = render(json).unwrap();
        let platforms: Vec<&str> = view.links.iter().map(|l| l.platform.as_str()).collect();
        assert_eq!(platforms, ["A", "C", "D"]);

        for link in &view.links {
            assert_eq!(link.anchor.target(), Some("_blank"));
            assert_eq!(link.anchor.rel(), Some("noopener noreferrer"));
        }
        assert_eq!(
            view.links[0].icon,
            Icon::Sprite("icons.svg#icon-a".to_string())
        );
    }
}
