//! Link cards - the main list of destinations.

use dioxus::prelude::*;
use linkpage_core::LinkCardsView;

use super::IconView;

/// Cards for the link container, in configuration order.
///
/// External cards open in a new browsing context; internal ones navigate
/// in place.
#[component]
pub fn LinkCards(view: LinkCardsView) -> Element {
    rsx! {
        for (index, card) in view.cards.into_iter().enumerate() {
            a {
                key: "{index}",
                class: "link-card",
                href: "{card.anchor.href}",
                target: card.anchor.target(),
                rel: card.anchor.rel(),
                IconView { icon: card.icon, class: "link-icon".to_string() }
                div { class: "link-content",
                    h2 { "{card.title}" }
                    p { "{card.description}" }
                }
            }
        }
    }
}
