//! # Client configuration: `intranet.toml`
//!
//! Embedded into the web bundle at build time. Every section derives `Default`, so a
//! missing or empty file is equivalent to the default configuration.
//!
//! ```toml
//! [server]
//! url = ""                    # empty = same origin as the page
//! metadata_path = "metadata"
//! login_path = "login"
//! logout_path = "logout"
//!
//! [ui]
//! debounce_ms = 150
//! toast_ms = 4000
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `intranet.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the intranet server lives and the paths it exposes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the server. Empty string means the page origin.
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_metadata_path")]
    pub metadata_path: String,
    /// Login path, relative to the API prefix served in the metadata.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_logout_path")]
    pub logout_path: String,
}

fn default_metadata_path() -> String {
    "metadata".to_string()
}

fn default_login_path() -> String {
    "login".to_string()
}

fn default_logout_path() -> String {
    "logout".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            metadata_path: default_metadata_path(),
            login_path: default_login_path(),
            logout_path: default_logout_path(),
        }
    }
}

/// UI timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Quiet period before a keystroke is committed to the rendered draft.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u32,
}

fn default_debounce_ms() -> u32 {
    150
}

fn default_toast_ms() -> u32 {
    4000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            toast_ms: default_toast_ms(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "intranet.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to point the client at another server.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server.url = url.into();
        self
    }

    pub fn metadata_url(&self) -> String {
        join_url(&self.server.url, &[self.server.metadata_path.as_str()])
    }

    pub fn login_url(&self, api_prefix: &str) -> String {
        join_url(&self.server.url, &[api_prefix, self.server.login_path.as_str()])
    }

    pub fn logout_url(&self, api_prefix: &str) -> String {
        join_url(&self.server.url, &[api_prefix, self.server.logout_path.as_str()])
    }
}

/// Join path segments onto a base URL with exactly one `/` between each part.
/// An empty base yields an origin-relative path.
fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(segment);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.server.login_path, "login");
        assert_eq!(config.ui.debounce_ms, 150);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [server]
            url = "http://192.168.1.10:8080"

            [ui]
            toast_ms = 1000
            "#,
        )
        .unwrap();

        assert_eq!(config.server.url, "http://192.168.1.10:8080");
        assert_eq!(config.server.metadata_path, "metadata");
        assert_eq!(config.ui.toast_ms, 1000);
        assert_eq!(config.ui.debounce_ms, 150);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_server_url("http://localhost:8080");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_endpoint_urls() {
        let relative = ClientConfig::default();
        assert_eq!(relative.metadata_url(), "/metadata");
        assert_eq!(relative.login_url("api"), "/api/login");

        let absolute = ClientConfig::default().with_server_url("http://localhost:8080/");
        assert_eq!(absolute.login_url("/api/"), "http://localhost:8080/api/login");
        assert_eq!(absolute.logout_url("api"), "http://localhost:8080/api/logout");
        // An empty prefix does not produce a double slash.
        assert_eq!(absolute.login_url(""), "http://localhost:8080/login");
    }
}
