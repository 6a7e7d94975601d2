//! Share Feature
//!
//! A single trigger opens a modal with the page title, a QR code for the page
//! URL, a copy-link control, a native-share control and a close control.
//!
//! Platform capabilities (clipboard, native share sheet) sit behind the
//! [`Clipboard`] and [`NativeShare`] traits so the outcome handling here is
//! the same for every front end.

use std::future::Future;

use qrcode::render::svg;
use qrcode::QrCode;
use url::Url;

use crate::config::{PageConfig, QrMode};
use crate::error::{ClipboardError, ShareError};
use crate::icons::{self, Icon, IconResolver};

/// External QR image generator.
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Displayed QR edge length in CSS pixels.
pub const QR_BASE_SIZE: u32 = 200;

/// Pixel size requested for the QR image on a display with `device_pixel_ratio`.
///
/// Unknown, non-finite or non-positive ratios count as 1.
pub fn qr_pixel_size(device_pixel_ratio: Option<f64>) -> u32 {
    let ratio = device_pixel_ratio
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0);
    (f64::from(QR_BASE_SIZE) * ratio).round() as u32
}

/// Endpoint URL rendering `data` as a `size`x`size` QR image.
///
/// The query is `application/x-www-form-urlencoded`: a space becomes `+` and
/// only `*-._` stay unescaped. The endpoint decodes this the same as
/// percent-encoded `%20`.
pub fn qr_image_url(data: &str, size: u32) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("size", &format!("{}x{}", size, size))
        .append_pair("data", data)
        .finish();
    format!("{}?{}", QR_ENDPOINT, query)
}

/// Render `data` as an SVG QR code locally.
///
/// Width and height attributes are stripped so CSS controls the display size;
/// the viewBox keeps the aspect ratio.
pub fn inline_qr_svg(data: &str, size: u32) -> Option<String> {
    match QrCode::new(data.as_bytes()) {
        Ok(code) => {
            let svg_string = code
                .render()
                .min_dimensions(size, size)
                .dark_color(svg::Color("#111111"))
                .light_color(svg::Color("#ffffff"))
                .build();
            Some(strip_attribute(&strip_attribute(&svg_string, "width"), "height"))
        }
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            None
        }
    }
}

/// Remove the first ` attr="..."` occurrence, which is on the root element.
fn strip_attribute(svg: &str, attr: &str) -> String {
    let needle = format!(" {}=\"", attr);
    let Some(start) = svg.find(&needle) else {
        return svg.to_string();
    };
    let value_start = start + needle.len();
    match svg[value_start..].find('"') {
        Some(end) => format!("{}{}", &svg[..start], &svg[value_start + end + 1..]),
        None => svg.to_string(),
    }
}

/// QR image shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrImage {
    Remote { src: String },
    Inline { svg: String },
}

/// Client platform family, used only to pick the share glyph.
///
/// User-agent sniffing is a presentational hint and nothing else depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Apple,
    Other,
}

impl SharePlatform {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if ["iphone", "ipad", "ipod", "macintosh"]
            .iter()
            .any(|needle| ua.contains(needle))
        {
            SharePlatform::Apple
        } else {
            SharePlatform::Other
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            SharePlatform::Apple => icons::SHARE_APPLE,
            SharePlatform::Other => icons::SHARE_ANDROID,
        }
    }
}

/// Visibility of the share modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

/// Clicks the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Share trigger button
    Trigger,
    /// Close control inside the modal
    Close,
    /// Click whose target is the backdrop itself
    Backdrop,
    /// Click landing on the modal content
    Content,
}

impl ModalState {
    pub fn on(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::Trigger => ModalState::Visible,
            ModalEvent::Close | ModalEvent::Backdrop => ModalState::Hidden,
            ModalEvent::Content => self,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ModalState::Visible)
    }
}

/// Everything the trigger and modal display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareView {
    pub title: String,
    pub page_url: String,
    /// `None` when the QR code could not be produced
    pub qr: Option<QrImage>,
    /// Display edge length in CSS pixels
    pub qr_display_size: u32,
    pub trigger_icon: Icon,
    pub copy_icon: Icon,
    pub share_icon: Icon,
    pub close_icon: Icon,
}

/// Build the share view, or `None` when the feature is switched off.
pub fn render_share(
    config: &PageConfig,
    page_url: &Url,
    device_pixel_ratio: Option<f64>,
    user_agent: &str,
    icons: &IconResolver,
) -> Option<ShareView> {
    if !config.share.show {
        return None;
    }

    let data = page_url.as_str();
    let size = qr_pixel_size(device_pixel_ratio);
    let qr = match config.share.qr {
        QrMode::Remote => Some(QrImage::Remote {
            src: qr_image_url(data, size),
        }),
        QrMode::Inline => inline_qr_svg(data, size).map(|svg| QrImage::Inline { svg }),
    };
    let platform = SharePlatform::from_user_agent(user_agent);

    Some(ShareView {
        title: config.page_title.clone(),
        page_url: data.to_string(),
        qr,
        qr_display_size: QR_BASE_SIZE,
        trigger_icon: icons.resolve(icons::MENU),
        copy_icon: icons.resolve(icons::COPY),
        share_icon: icons.resolve(platform.icon_name()),
        close_icon: icons.resolve(icons::CLOSE),
    })
}

/// Platform clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform native share sheet.
pub trait NativeShare {
    fn is_available(&self) -> bool;

    fn share(&self, title: &str, url: &str) -> impl Future<Output = Result<(), ShareError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Copy the page URL. Failures are logged and never propagated.
pub fn copy_page_url<C: Clipboard + ?Sized>(clipboard: &mut C, url: &str) -> CopyOutcome {
    match clipboard.write_text(url) {
        Ok(()) => {
            tracing::debug!("Copied page URL to clipboard");
            CopyOutcome::Copied
        }
        Err(e) => {
            tracing::error!("Failed to copy URL: {}", e);
            CopyOutcome::Failed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// No native share on this platform; nothing happened
    Unavailable,
    Shared,
    /// User dismissed the share sheet
    Cancelled,
    Failed,
}

/// Invoke the native share sheet for the page.
///
/// Cancellation is a normal outcome; other failures are logged only.
pub async fn share_page<S: NativeShare>(sharer: &S, title: &str, url: &str) -> ShareOutcome {
    if !sharer.is_available() {
        return ShareOutcome::Unavailable;
    }
    match sharer.share(title, url).await {
        Ok(()) => ShareOutcome::Shared,
        Err(ShareError::Aborted) => {
            tracing::debug!("Share cancelled by user");
            ShareOutcome::Cancelled
        }
        Err(e) => {
            tracing::error!("Error sharing: {}", e);
            ShareOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn config(json: &str) -> PageConfig {
        PageConfig::from_json_str(json).unwrap()
    }

    fn page_url() -> Url {
        Url::parse("https://ada.example/links?ref=a b").unwrap()
    }

    #[test]
    fn test_qr_pixel_size() {
        assert_eq!(qr_pixel_size(None), 200);
        assert_eq!(qr_pixel_size(Some(1.0)), 200);
        assert_eq!(qr_pixel_size(Some(2.0)), 400);
        assert_eq!(qr_pixel_size(Some(1.5)), 300);
        assert_eq!(qr_pixel_size(Some(1.333)), 267);
        assert_eq!(qr_pixel_size(Some(0.0)), 200);
        assert_eq!(qr_pixel_size(Some(f64::NAN)), 200);
    }

    #[test]
    fn test_qr_image_url_encodes_data() {
        let url = qr_image_url("https://ada.example/?a=1&b=2", 400);
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=400x400&data=https%3A%2F%2Fada.example%2F%3Fa%3D1%26b%3D2"
        );
    }

    #[test]
    fn test_qr_image_url_form_encoding() {
        let url = qr_image_url("https://ada.example/a b~(x)", 200);
        assert!(url.ends_with("&data=https%3A%2F%2Fada.example%2Fa+b%7E%28x%29"));
    }

    #[test]
    fn test_inline_qr_svg_is_responsive() {
        let svg = inline_qr_svg("https://ada.example/", 200).unwrap();
        let root = &svg[svg.find("<svg").unwrap()..];
        let root = &root[..root.find('>').unwrap()];
        assert!(root.contains("viewBox"));
        assert!(!root.contains(" width=\""));
        assert!(!root.contains(" height=\""));
    }

    #[test]
    fn test_platform_heuristic() {
        let apple = [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
            "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)",
        ];
        for ua in apple {
            assert_eq!(SharePlatform::from_user_agent(ua), SharePlatform::Apple);
        }
        assert_eq!(
            SharePlatform::from_user_agent("Mozilla/5.0 (Linux; Android 14)"),
            SharePlatform::Other
        );
        assert_eq!(SharePlatform::from_user_agent(""), SharePlatform::Other);
    }

    #[test]
    fn test_modal_transitions() {
        let state = ModalState::default();
        assert_eq!(state, ModalState::Hidden);

        let state = state.on(ModalEvent::Trigger);
        assert!(state.is_visible());
        assert_eq!(state.on(ModalEvent::Content), ModalState::Visible);
        assert_eq!(state.on(ModalEvent::Close), ModalState::Hidden);
        assert_eq!(state.on(ModalEvent::Backdrop), ModalState::Hidden);

        // Hidden stays hidden on everything but the trigger
        let hidden = ModalState::Hidden;
        assert_eq!(hidden.on(ModalEvent::Close), ModalState::Hidden);
        assert_eq!(hidden.on(ModalEvent::Content), ModalState::Hidden);
        assert_eq!(hidden.on(ModalEvent::Trigger).on(ModalEvent::Trigger), ModalState::Visible);
    }

    #[test]
    fn test_render_share_remote() {
        let config = config(r#"{ "pageTitle": "Ada", "mainLinks": [] }"#);
        let view = render_share(
            &config,
            &page_url(),
            Some(2.0),
            "Macintosh",
            &IconResolver::from_config(&config),
        )
        .unwrap();

        assert_eq!(view.title, "Ada");
        assert_eq!(view.page_url, page_url().as_str());
        assert_eq!(view.qr_display_size, 200);
        match view.qr {
            Some(QrImage::Remote { src }) => {
                assert!(src.starts_with(QR_ENDPOINT));
                assert!(src.contains("size=400x400"));
            }
            other => panic!("expected remote QR, got {:?}", other),
        }
        assert_eq!(view.share_icon, Icon::Glyph(icons::builtin(icons::SHARE_APPLE).unwrap()));
    }

    #[test]
    fn test_render_share_inline_and_disabled() {
        let inline = config(r#"{ "pageTitle": "Ada", "mainLinks": [], "share": { "qr": "inline" } }"#);
        let view = render_share(&inline, &page_url(), None, "", &IconResolver::default()).unwrap();
        assert!(matches!(view.qr, Some(QrImage::Inline { .. })));
        assert_eq!(view.share_icon, Icon::Glyph(icons::builtin(icons::SHARE_ANDROID).unwrap()));

        let off = config(r#"{ "pageTitle": "Ada", "mainLinks": [], "share": { "show": false } }"#);
        assert!(render_share(&off, &page_url(), None, "", &IconResolver::default()).is_none());
    }

    struct RecordingClipboard {
        fail: bool,
        written: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Write("denied".to_string()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_page_url() {
        let mut clipboard = RecordingClipboard { fail: false, written: vec![] };
        assert_eq!(copy_page_url(&mut clipboard, "https://ada.example/"), CopyOutcome::Copied);
        assert_eq!(clipboard.written, ["https://ada.example/"]);

        let mut broken = RecordingClipboard { fail: true, written: vec![] };
        assert_eq!(copy_page_url(&mut broken, "https://ada.example/"), CopyOutcome::Failed);
        assert!(broken.written.is_empty());
    }

    struct ScriptedShare {
        available: bool,
        result: Result<(), ShareError>,
        calls: Cell<usize>,
        last: RefCell<Option<(String, String)>>,
    }

    impl ScriptedShare {
        fn new(available: bool, result: Result<(), ShareError>) -> Self {
            Self {
                available,
                result,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl NativeShare for ScriptedShare {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn share(&self, title: &str, url: &str) -> Result<(), ShareError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some((title.to_string(), url.to_string()));
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_share_unavailable_is_noop() {
        let sharer = ScriptedShare::new(false, Ok(()));
        assert_eq!(share_page(&sharer, "Ada", "https://ada.example/").await, ShareOutcome::Unavailable);
        assert_eq!(sharer.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_share_outcomes() {
        let ok = ScriptedShare::new(true, Ok(()));
        assert_eq!(share_page(&ok, "Ada", "https://ada.example/").await, ShareOutcome::Shared);
        assert_eq!(
            ok.last.borrow().clone(),
            Some(("Ada".to_string(), "https://ada.example/".to_string()))
        );

        let cancelled = ScriptedShare::new(true, Err(ShareError::Aborted));
        assert_eq!(share_page(&cancelled, "Ada", "u").await, ShareOutcome::Cancelled);

        let failed = ScriptedShare::new(true, Err(ShareError::Failed("boom".to_string())));
        assert_eq!(share_page(&failed, "Ada", "u").await, ShareOutcome::Failed);
    }
}
