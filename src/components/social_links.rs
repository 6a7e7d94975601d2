//! Social profile icons shown right after the header.

use dioxus::prelude::*;
use linkpage_core::SocialLinksView;

use super::IconView;

#[component]
pub fn SocialLinks(view: SocialLinksView) -> Element {
    rsx! {
        div { class: "social-links",
            for (index, link) in view.links.into_iter().enumerate() {
                a {
                    key: "{index}",
                    class: "social-link",
                    href: "{link.anchor.href}",
                    target: link.anchor.target(),
                    rel: link.anchor.rel(),
                    IconView {
                        icon: link.icon,
                        class: format!("social-icon {}", link.icon_name),
                        label: Some(link.platform),
                    }
                }
            }
        }
    }
}
