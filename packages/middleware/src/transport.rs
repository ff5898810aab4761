//! # HTTP seam
//!
//! [`Transport`] is the only way the core talks to the server. The `api` crate
//! provides the `reqwest` implementation; tests use an in-memory fake.
//!
//! A [`Reply`] is returned for every response the server actually sent, whatever its
//! status. [`TransportError`] is reserved for requests that never got a response.

use std::future::Future;

/// A response as seen by the login flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (network down, CORS, DNS...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request failed: {0}")]
pub struct TransportError(pub String);

/// Async HTTP interface used by [`crate::Context`] and [`crate::LoginFlow`].
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<Reply, TransportError>>;

    fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> impl Future<Output = Result<Reply, TransportError>>;
}
