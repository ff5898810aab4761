//! # API crate: HTTP client for the intranet server
//!
//! [`HttpTransport`] implements [`middleware::Transport`] on top of `reqwest`, which
//! compiles to the browser `fetch` API on WASM. It is the only place that knows how
//! to turn a configured, possibly origin-relative URL into a real request.
//!
//! | Endpoint | Used by |
//! |----------|---------|
//! | `GET {server}/metadata` | [`middleware::Context::init`] |
//! | `POST {server}/{apiPrefix}/login` | [`middleware::LoginFlow`] |
//! | `POST {server}/{apiPrefix}/logout` | [`logout`] |

use middleware::{ClientConfig, Reply, Transport, TransportError};

mod error;
pub use error::Error;

/// `reqwest`-backed transport.
///
/// Relative URLs (an empty `server.url` in the config) are resolved against `base`,
/// which defaults to the page origin in the browser.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Option<url::Url>,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base: page_origin(),
        }
    }

    /// Resolve relative URLs against an explicit base instead of the page origin.
    pub fn with_base(base: &str) -> Result<Self, Error> {
        Ok(Self {
            client: reqwest::Client::new(),
            base: Some(url::Url::parse(base)?),
        })
    }

    pub fn resolve(&self, target: &str) -> Result<url::Url, Error> {
        match url::Url::parse(target) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.base.as_ref().ok_or(Error::NoBase)?;
                Ok(base.join(target)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Reply, Error> {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Reply { status, body })
    }

    async fn get_inner(&self, url: &str) -> Result<Reply, Error> {
        let url = self.resolve(url)?;
        self.send(self.client.get(url)).await
    }

    async fn post_form_inner(&self, url: &str, form: &[(&str, &str)]) -> Result<Reply, Error> {
        let url = self.resolve(url)?;
        self.send(self.client.post(url).form(form)).await
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Reply, TransportError> {
        self.get_inner(url).await.map_err(|e| {
            tracing::error!("GET {url}: {e}");
            TransportError(e.to_string())
        })
    }

    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Reply, TransportError> {
        self.post_form_inner(url, form).await.map_err(|e| {
            tracing::error!("POST {url}: {e}");
            TransportError(e.to_string())
        })
    }
}

/// End the server session.
///
/// Callers drop the user from their [`middleware::Context`] before awaiting this, so
/// the login view is shown even when the server cannot be reached.
pub async fn logout<T: Transport>(
    transport: &T,
    api_prefix: &str,
    config: &ClientConfig,
) -> Result<(), Error> {
    let reply = transport
        .post_form(&config.logout_url(api_prefix), &[])
        .await
        .map_err(|e| Error::Transport(e.0))?;
    if !reply.is_success() {
        return Err(Error::Status(reply.status));
    }
    tracing::info!("Logged out");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<url::Url> {
    let origin = web_sys::window()?.location().origin().ok()?;
    url::Url::parse(&origin).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<url::Url> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_against_base() {
        let transport = HttpTransport::with_base("http://192.168.1.10:8080").unwrap();
        assert_eq!(
            transport.resolve("/api/login").unwrap().as_str(),
            "http://192.168.1.10:8080/api/login"
        );
        assert_eq!(
            transport.resolve("http://localhost:9000/metadata").unwrap().as_str(),
            "http://localhost:9000/metadata"
        );
    }

    #[test]
    fn test_resolve_relative_without_base_fails() {
        let transport = HttpTransport::new();
        assert!(matches!(transport.resolve("/metadata"), Err(Error::NoBase)));
    }

    /// Answers every request with a fixed status and records the URLs.
    #[derive(Default)]
    struct Fixed {
        status: u16,
        urls: std::cell::RefCell<Vec<String>>,
    }

    impl Transport for Fixed {
        async fn get(&self, url: &str) -> Result<Reply, TransportError> {
            self.urls.borrow_mut().push(url.to_string());
            Ok(Reply::new(self.status, ""))
        }

        async fn post_form(&self, url: &str, _form: &[(&str, &str)]) -> Result<Reply, TransportError> {
            self.urls.borrow_mut().push(url.to_string());
            Ok(Reply::new(self.status, ""))
        }
    }

    struct Refusing;

    impl Transport for Refusing {
        async fn get(&self, _url: &str) -> Result<Reply, TransportError> {
            Err(TransportError("refused".to_string()))
        }

        async fn post_form(&self, _url: &str, _form: &[(&str, &str)]) -> Result<Reply, TransportError> {
            Err(TransportError("refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_logout_posts_to_prefixed_path() {
        let transport = Fixed {
            status: 200,
            ..Default::default()
        };
        let config = ClientConfig::default().with_server_url("http://localhost:8080");

        logout(&transport, "api", &config).await.unwrap();

        assert_eq!(*transport.urls.borrow(), vec!["http://localhost:8080/api/logout".to_string()]);
    }

    #[tokio::test]
    async fn test_logout_reports_failures() {
        let config = ClientConfig::default();

        let rejected = Fixed {
            status: 403,
            ..Default::default()
        };
        assert!(matches!(logout(&rejected, "api", &config).await, Err(Error::Status(403))));
        assert!(matches!(logout(&Refusing, "api", &config).await, Err(Error::Transport(_))));
    }
}
