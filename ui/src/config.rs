//! Build-time configuration.
//!
//! `BASE_URL` is the path the app is served under (the router's basename).
//! `BACKEND_URL` is where relative fetch URLs point; without it the browser
//! build falls back to the page's origin.

use url::Url;

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub backend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base(option_env!("BASE_URL")),
            backend_url: option_env!("BACKEND_URL")
                .map(|url| url.to_string())
                .unwrap_or_else(default_backend_url),
        }
    }

    /// Absolute URL for a fetch target. Absolute inputs pass through.
    pub fn resolve_url(&self, url: &str) -> Result<String, url::ParseError> {
        resolve_url(&self.backend_url, url)
    }
}

/// Join `url` onto `base` the way a browser resolves a link.
pub fn resolve_url(base: &str, url: &str) -> Result<String, url::ParseError> {
    match Url::parse(url) {
        Ok(absolute) => Ok(absolute.into()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Ok(Url::parse(base)?.join(url)?.into())
        }
        Err(e) => Err(e),
    }
}

/// Router basenames have a leading slash and no trailing slash; "/" means
/// no basename at all.
fn normalize_base(base: Option<&str>) -> Option<String> {
    let trimmed = base?.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}

#[cfg(target_arch = "wasm32")]
fn default_backend_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_backend_url() -> String {
    NATIVE_BACKEND_URL.to_string()
}

/// True when talking to a backend on localhost.
pub fn is_dev_mode() -> bool {
    AppConfig::from_env().backend_url.contains("localhost")
}
