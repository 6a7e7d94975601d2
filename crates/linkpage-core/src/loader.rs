//! Configuration Loader
//!
//! One read of a known resource, parsed as JSON. No retry: a failure is
//! returned to the caller, which records it and skips rendering.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::config::PageConfig;
use crate::error::{LoadError, LoadResult};

/// Default configuration resource, resolved relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.json";

/// Where the page configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Local file
    Path(PathBuf),
    /// Remote document fetched with a single GET
    Url(Url),
}

impl ConfigSource {
    /// Interpret a command-line argument: `http(s)://` URLs are remote,
    /// everything else is a local path.
    pub fn parse(value: &str) -> Self {
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => ConfigSource::Url(url),
            _ => ConfigSource::Path(PathBuf::from(value)),
        }
    }

    /// URL of the page the configuration sits next to.
    ///
    /// Only remote sources have one: `https://me.example/site/config.json`
    /// belongs to `https://me.example/site/`.
    pub fn page_url(&self) -> Option<Url> {
        match self {
            ConfigSource::Url(url) => url.join("./").ok(),
            ConfigSource::Path(_) => None,
        }
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::Path(PathBuf::from(DEFAULT_CONFIG))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Path(path) => write!(f, "{}", path.display()),
            ConfigSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Load and validate the page configuration.
pub async fn load_config(source: &ConfigSource) -> LoadResult<PageConfig> {
    tracing::debug!(%source, "Loading page configuration");

    let body = match source {
        ConfigSource::Path(path) => tokio::fs::read_to_string(path).await?,
        ConfigSource::Url(url) => fetch(url).await?,
    };

    let config = PageConfig::from_json_str(&body)?;
    tracing::info!(
        title = %config.page_title,
        links = config.main_links.len(),
        "Loaded page configuration"
    );
    Ok(config)
}

async fn fetch(url: &Url) -> LoadResult<String> {
    let response = reqwest::get(url.clone()).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}

/// Resolve the page URL from, in order: an explicit override, the
/// configuration's `pageUrl`, or the location of a remote source.
///
/// Unparsable candidates are skipped with a warning.
pub fn resolve_page_url(
    explicit: Option<&str>,
    config: &PageConfig,
    source: &ConfigSource,
) -> Option<Url> {
    for candidate in [explicit, config.page_url.as_deref()].into_iter().flatten() {
        match Url::parse(candidate) {
            Ok(url) => return Some(url),
            Err(e) => tracing::warn!("Ignoring invalid page URL {:?}: {}", candidate, e),
        }
    }
    source.page_url()
}
