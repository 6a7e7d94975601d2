//! Page shell - the host markup every renderer attaches to.
//!
//! The shell always draws the fixed anchors (header with `#pageTitle`,
//! `#linkContainer`, footer with `#currentYear`). Content appears only once
//! the page state is `Ready`; while loading or after a failed load the shell
//! stays in its default, unpopulated state.

use dioxus::prelude::*;
use linkpage_core::{PageState, PageView};

use super::{Bio, LinkCards, PageFooter, PageHeader, ShareFeature, SocialLinks};
use crate::context::use_page;

#[component]
pub fn PageShell() -> Element {
    let page = use_page();

    let view = match &*page.read() {
        PageState::Ready(view) => Some(view.clone()),
        PageState::Loading | PageState::Failed(_) => None,
    };

    let Some(view) = view else {
        return rsx! {
            main { class: "page",
                PageHeader { view: None }
                div { id: "linkContainer", class: "link-container" }
                PageFooter { year: None }
            }
        };
    };

    let PageView {
        header,
        social,
        cards,
        share,
        ..
    } = view;
    let title = header.title.clone();
    let bio = header.bio.clone();
    let year = header.year;

    rsx! {
        document::Title { "{title}" }

        main { class: "page",
            PageHeader { view: Some(header) }

            if let Some(social) = social {
                SocialLinks { view: social }
            }

            if let Some(text) = bio {
                Bio { text }
            }

            div { id: "linkContainer", class: "link-container",
                if let Some(cards) = cards {
                    LinkCards { view: cards }
                }
            }

            PageFooter { year: Some(year) }
        }

        if let Some(share) = share {
            ShareFeature { view: share }
        }
    }
}
