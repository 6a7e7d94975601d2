//! Icon - draws a resolved icon as inline SVG.

use dioxus::prelude::*;
use linkpage_core::{sprite_use_markup, Icon};

/// Inline glyphs become `<svg><path/></svg>`; sprite references become
/// `<svg><use href/></svg>`.
#[component]
pub fn IconView(
    icon: Icon,
    /// CSS class for the svg element
    #[props(default = "icon".to_string())]
    class: String,
    /// Accessible label; decorative icons are hidden from assistive tech
    #[props(default = None)]
    label: Option<String>,
) -> Element {
    let hidden = label.is_none().then_some("true");

    match icon {
        Icon::Glyph(glyph) => rsx! {
            svg {
                class: "{class}",
                view_box: "{glyph.view_box}",
                xmlns: "http://www.w3.org/2000/svg",
                "aria-label": label,
                "aria-hidden": hidden,
                path { d: "{glyph.path}" }
            }
        },
        Icon::Sprite(href) => {
            let markup = sprite_use_markup(&href);
            rsx! {
                svg {
                    class: "{class}",
                    "aria-label": label,
                    "aria-hidden": hidden,
                    dangerous_inner_html: markup,
                }
            }
        }
    }
}
