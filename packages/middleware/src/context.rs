//! # Session/identity context
//!
//! [`Context`] is the single owner of the two pieces of shared client state:
//!
//! - the [`Metadata`] fetched from the server when the application starts, and
//! - the [`User`] returned by the last successful login.
//!
//! The UI wraps it in a signal and hands it down through the component tree. Only
//! [`Context::init`] writes the metadata and only the login/logout flows write the
//! user; everything else reads.

use crate::config::ClientConfig;
use crate::error::Error;
use crate::models::{Metadata, User};
use crate::transport::Transport;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    metadata: Option<Metadata>,
    user: Option<User>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(metadata: Metadata) -> Self {
        Self {
            metadata: Some(metadata),
            user: None,
        }
    }

    /// Build the context for a new session, fetching the metadata once.
    ///
    /// A failed fetch is logged and leaves the metadata unset; callers must cope
    /// with an absent schema.
    pub async fn init<T: Transport>(transport: &T, config: &ClientConfig) -> Self {
        match fetch_metadata(transport, config).await {
            Ok(metadata) => {
                tracing::info!("Loaded {} validation rule(s)", metadata.rules.len());
                Self::with_metadata(metadata)
            }
            Err(e) => {
                tracing::warn!("Metadata unavailable: {e}");
                Self::new()
            }
        }
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn api_prefix(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.api_prefix.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn clear_user(&mut self) {
        self.user = None;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error(transparent)]
    Transport(#[from] crate::transport::TransportError),
    #[error("server answered {0}")]
    Status(u16),
    #[error(transparent)]
    Decode(#[from] Error),
}

async fn fetch_metadata<T: Transport>(
    transport: &T,
    config: &ClientConfig,
) -> Result<Metadata, MetadataError> {
    let reply = transport.get(&config.metadata_url()).await?;
    if !reply.is_success() {
        return Err(MetadataError::Status(reply.status));
    }
    Ok(Metadata::from_json(&reply.body)?)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::transport::{Reply, TransportError};

    /// Scripted transport: pops one queued answer per request and records the calls.
    #[derive(Default)]
    pub(crate) struct FakeTransport {
        pub answers: RefCell<VecDeque<Result<Reply, TransportError>>>,
        pub calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl FakeTransport {
        pub fn replying(answers: Vec<Result<Reply, TransportError>>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
                calls: RefCell::default(),
            }
        }

        fn next(&self, url: &str, form: &[(&str, &str)]) -> Result<Reply, TransportError> {
            self.calls.borrow_mut().push((
                url.to_string(),
                form.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError("no scripted answer".to_string())))
        }
    }

    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> Result<Reply, TransportError> {
            self.next(url, &[])
        }

        async fn post_form(
            &self,
            url: &str,
            form: &[(&str, &str)],
        ) -> Result<Reply, TransportError> {
            self.next(url, form)
        }
    }

    const METADATA: &str = r#"{"rules":{"text_short":{"min":2,"max":20},"text_short#_":{"min":6,"max":30}},"apiPrefix":"api"}"#;

    #[tokio::test]
    async fn test_init_loads_metadata_once() {
        let transport = FakeTransport::replying(vec![Ok(Reply::new(200, METADATA))]);
        let context = Context::init(&transport, &ClientConfig::default()).await;

        assert_eq!(context.api_prefix(), Some("api"));
        assert!(context.user().is_none());
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/metadata");
    }

    #[tokio::test]
    async fn test_init_tolerates_failures() {
        let transport = FakeTransport::replying(vec![
            Err(TransportError("offline".to_string())),
            Ok(Reply::new(503, "")),
            Ok(Reply::new(200, "not json")),
        ]);
        let config = ClientConfig::default();

        for _ in 0..3 {
            let context = Context::init(&transport, &config).await;
            assert!(context.metadata().is_none());
        }
    }

    #[test]
    fn test_set_and_clear_user() {
        let mut context = Context::new();
        let user = User::from_json(r#"{"id":1,"name":"abc"}"#).unwrap();

        context.set_user(user.clone());
        context.set_user(user.clone());
        assert_eq!(context.user(), Some(&user));
        assert!(context.is_authenticated());

        context.clear_user();
        assert!(!context.is_authenticated());
    }
}
