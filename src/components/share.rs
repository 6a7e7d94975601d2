//! Share feature - trigger button and modal.
//!
//! The modal is driven by [`ModalState`]: the trigger opens it, the close
//! control or a click on the backdrop itself hides it, and clicks on the
//! content leave it alone.

use std::time::Duration;

use dioxus::prelude::*;
use linkpage_core::{
    copy_page_url, share_page, CopyOutcome, ModalEvent, ModalState, QrImage, ShareView,
};

use super::IconView;
use crate::context::use_environment;
use crate::platform::{DesktopClipboard, WebviewShare};

/// How long the "Copied" confirmation stays up.
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Trigger and modal, created once per page.
#[component]
pub fn ShareFeature(view: ShareView) -> Element {
    let ShareView {
        title,
        page_url,
        qr,
        qr_display_size,
        trigger_icon,
        copy_icon,
        share_icon,
        close_icon,
    } = view;

    let mut modal = use_signal(ModalState::default);
    let mut copied = use_signal(|| false);
    let environment = use_environment();

    let mut dispatch = move |event: ModalEvent| {
        let next = modal().on(event);
        modal.set(next);
    };

    let url = page_url.clone();
    let copy_url = move |_| {
        let url = url.clone();
        spawn(async move {
            if copy_page_url(&mut DesktopClipboard, &url) == CopyOutcome::Copied {
                copied.set(true);
                tokio::time::sleep(COPIED_FEEDBACK).await;
                copied.set(false);
            }
        });
    };

    let share_title = title.clone();
    let url = page_url.clone();
    let share_native = move |_| {
        let sharer = WebviewShare::new(&environment.read());
        let title = share_title.clone();
        let url = url.clone();
        spawn(async move {
            share_page(&sharer, &title, &url).await;
        });
    };

    let modal_class = if modal().is_visible() {
        "share-modal active"
    } else {
        "share-modal"
    };

    rsx! {
        button {
            class: "share-button",
            "aria-label": "Share options",
            onclick: move |_| dispatch(ModalEvent::Trigger),
            IconView { icon: trigger_icon, class: "social-icon".to_string() }
        }

        div {
            class: "{modal_class}",
            onclick: move |_| dispatch(ModalEvent::Backdrop),

            div {
                class: "share-content",
                onclick: move |e| {
                    e.stop_propagation();
                    dispatch(ModalEvent::Content);
                },

                h2 { "{title}" }

                QrCode { qr: qr, size: qr_display_size }

                div { class: "url-container",
                    button {
                        class: "copy-button",
                        "aria-label": "Copy URL",
                        onclick: copy_url,
                        IconView { icon: copy_icon, class: "social-icon".to_string() }
                    }
                    span { class: "url-text", "{page_url}" }
                    if copied() {
                        span { class: "copied-feedback", "Copied" }
                    }
                }

                button {
                    class: "share-native-button",
                    onclick: share_native,
                    IconView { icon: share_icon, class: "social-icon".to_string() }
                    "Share"
                }

                button {
                    class: "close-modal",
                    "aria-label": "Close modal",
                    onclick: move |_| dispatch(ModalEvent::Close),
                    IconView { icon: close_icon, class: "social-icon".to_string() }
                }
            }
        }
    }
}

/// QR code image, remote or inline.
#[component]
fn QrCode(qr: Option<QrImage>, size: u32) -> Element {
    match qr {
        Some(QrImage::Remote { src }) => rsx! {
            img {
                class: "qr-code",
                src: "{src}",
                alt: "QR Code",
                width: "{size}",
                height: "{size}",
            }
        },
        Some(QrImage::Inline { svg }) => rsx! {
            div {
                class: "qr-code",
                style: "width: {size}px; height: {size}px;",
                dangerous_inner_html: "{svg}",
            }
        },
        None => rsx! {
            div { class: "qr-error", "Failed to generate QR code" }
        },
    }
}
