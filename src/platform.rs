//! Desktop platform adapters.
//!
//! - Clipboard writes go through `arboard` (cross-platform desktop clipboard)
//! - Native share, user agent and pixel ratio come from the webview via `eval`

use dioxus::prelude::*;
use linkpage_core::{Clipboard, ClipboardError, NativeShare, ShareError};
use serde::Deserialize;

/// Facts about the webview, probed once at startup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub device_pixel_ratio: Option<f64>,
    #[serde(default)]
    pub can_share: bool,
}

const PROBE_SCRIPT: &str = r#"
return {
    userAgent: navigator.userAgent || "",
    devicePixelRatio: window.devicePixelRatio || null,
    canShare: typeof navigator.share === "function"
};
"#;

/// Ask the webview for user agent, pixel ratio and share support.
///
/// Falls back to defaults (no share, ratio unknown) when the probe fails.
pub async fn probe_environment() -> Environment {
    match document::eval(PROBE_SCRIPT).join::<Environment>().await {
        Ok(env) => {
            tracing::debug!(?env, "Probed webview environment");
            env
        }
        Err(e) => {
            tracing::warn!("Environment probe failed: {:?}", e);
            Environment::default()
        }
    }
}

/// System clipboard via arboard.
#[derive(Debug, Default)]
pub struct DesktopClipboard;

impl Clipboard for DesktopClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// `navigator.share` inside the webview.
#[derive(Debug, Clone, Copy)]
pub struct WebviewShare {
    available: bool,
}

impl WebviewShare {
    pub fn new(env: &Environment) -> Self {
        Self {
            available: env.can_share,
        }
    }
}

impl NativeShare for WebviewShare {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn share(&self, title: &str, url: &str) -> Result<(), ShareError> {
        let data = serde_json::json!({ "title": title, "url": url });
        let script = format!(
            r#"
            try {{
                await navigator.share({});
                return "shared";
            }} catch (err) {{
                return err && err.name === "AbortError" ? "aborted" : String(err);
            }}
            "#,
            data
        );

        match document::eval(&script).join::<String>().await {
            Ok(result) if result == "shared" => Ok(()),
            Ok(result) if result == "aborted" => Err(ShareError::Aborted),
            Ok(other) => Err(ShareError::Failed(other)),
            Err(e) => Err(ShareError::Failed(format!("{:?}", e))),
        }
    }
}
