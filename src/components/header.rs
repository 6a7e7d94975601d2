//! Page header - avatar, title, bio and footer year.

use dioxus::prelude::*;
use linkpage_core::HeaderView;

/// `header` landmark with the optional avatar as its first child.
///
/// With no view the title stays empty, as in the unrendered host markup.
#[component]
pub fn PageHeader(view: Option<HeaderView>) -> Element {
    let title = view.as_ref().map(|v| v.title.clone()).unwrap_or_default();
    let avatar = view.and_then(|v| v.avatar);

    rsx! {
        header { id: "header",
            if let Some(avatar) = avatar {
                img {
                    class: "account-icon",
                    src: "{avatar.src}",
                    alt: "{avatar.alt}",
                    "loading": "lazy",
                }
            }
            h1 { id: "pageTitle", "{title}" }
        }
    }
}

/// Bio paragraph. Text is assigned as a text node, never parsed as markup.
#[component]
pub fn Bio(text: String) -> Element {
    rsx! {
        p { class: "bio", "{text}" }
    }
}

/// Footer with the current year, empty until the page is rendered.
#[component]
pub fn PageFooter(year: Option<i32>) -> Element {
    let year = year.map(|y| y.to_string()).unwrap_or_default();

    rsx! {
        footer { class: "page-footer",
            p { "© " span { id: "currentYear", "{year}" } }
        }
    }
}
