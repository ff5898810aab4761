//! # Login flow
//!
//! [`LoginFlow`] owns the state of the login view and drives it through three states:
//!
//! ```text
//!          edit / reset / toggle
//!            ┌────┐
//!            ▼    │
//!          Idle ──┘ ── begin_submit ──▶ Submitting ── settle(2xx) ──▶ Redirecting
//!            ▲                              │
//!            └──────── settle(error) ───────┘
//! ```
//!
//! The network call happens between [`LoginFlow::begin_submit`] and
//! [`LoginFlow::settle`], so a UI can release its borrow on the flow while the request
//! is in flight. [`LoginFlow::submit`] chains the three steps for callers that can
//! hold the flow across an `.await`.
//!
//! Failures never escape this module: a rejected login becomes an
//! [`Outcome::Toast`] carrying the user-facing message.

use crate::config::ClientConfig;
use crate::context::Context;
use crate::deferred::Deferred;
use crate::error::Error;
use crate::models::{Account, Field, User};
use crate::paths::AppPath;
use crate::schema::SchemaCache;
use crate::storage::{current_timestamp, KeyValueStore};
use crate::transport::{Reply, Transport, TransportError};

pub const NO_RESPONSE: &str = "No response from server";
pub const BAD_CREDENTIALS: &str = "Bad credentials";

/// Local storage key marking that the login view was reached while authenticated.
pub const UNAUTHORIZED_ACCESS: &str = "Login() frontend unauthorized access";

/// Status recorded when the request never got an answer.
const NO_RESPONSE_STATUS: u16 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Redirecting,
}

/// What the view must do once a request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Navigate(AppPath),
    Toast(&'static str),
}

/// A validated login request, ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub url: String,
    pub account: Account,
}

#[derive(Clone, Debug, Default)]
pub struct LoginFlow {
    draft: Deferred<Account>,
    password_visible: bool,
    state: LoginState,
    last_status: Option<u16>,
    schema: SchemaCache,
    guarded: bool,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state != LoginState::Idle
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// HTTP status of the last failed attempt.
    pub fn last_status(&self) -> Option<u16> {
        self.last_status
    }

    pub fn draft(&self) -> &Deferred<Account> {
        &self.draft
    }

    /// Record a keystroke. Returns the draft generation to commit once typing settles.
    pub fn edit(&mut self, field: Field, value: String) -> u64 {
        self.draft.update(|account| account.set(field, value))
    }

    pub fn commit(&mut self, generation: u64) -> bool {
        self.draft.commit(generation)
    }

    /// Clear the draft and hide the password.
    pub fn reset(&mut self) {
        self.password_visible = false;
        self.draft.reset(Account::default());
    }

    pub fn toggle_password(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Guard run when the login view mounts.
    ///
    /// Being here with a session and nothing in flight is a bug elsewhere in the
    /// shell. The first time it happens a timestamped marker is written to `storage`
    /// and the root path is returned; later calls return `None`.
    pub fn mount<S: KeyValueStore>(&mut self, context: &Context, storage: &S) -> Option<AppPath> {
        if !context.is_authenticated() || self.is_pending() || self.guarded {
            return None;
        }
        self.guarded = true;
        storage.set_item(UNAUTHORIZED_ACCESS, &current_timestamp().to_string());
        tracing::error!("{UNAUTHORIZED_ACCESS}");
        Some(AppPath::Root)
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// Nothing changes on error: [`Error::Busy`] while a request is in flight,
    /// [`Error::SchemaUnavailable`] without metadata, [`Error::Validation`] when the
    /// draft breaks the schema.
    pub fn begin_submit(
        &mut self,
        context: &Context,
        config: &ClientConfig,
    ) -> Result<LoginRequest, Error> {
        if self.is_pending() {
            return Err(Error::Busy);
        }
        let Some(schema) = self.schema.get(context.metadata()) else {
            tracing::warn!("Login blocked: validation rules not loaded");
            return Err(Error::SchemaUnavailable);
        };
        let account = self.draft.flush().clone();
        schema.validate(&account)?;

        let prefix = context.api_prefix().unwrap_or_default();
        self.state = LoginState::Submitting;
        Ok(LoginRequest {
            url: config.login_url(prefix),
            account,
        })
    }

    /// Apply the server answer to a request started by [`Self::begin_submit`].
    pub fn settle(
        &mut self,
        result: Result<Reply, TransportError>,
        context: &mut Context,
    ) -> Outcome {
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Login request failed: {e}");
                return self.fail(Some(NO_RESPONSE_STATUS));
            }
        };

        if !reply.is_success() {
            tracing::warn!("Login rejected with status {}", reply.status);
            return self.fail(Some(reply.status));
        }

        match User::from_json(&reply.body) {
            Ok(user) => {
                tracing::info!("Logged in as {}", user.display_name());
                context.set_user(user);
                self.last_status = None;
                self.draft.reset(Account::default());
                self.state = LoginState::Redirecting;
                Outcome::Navigate(AppPath::DEFAULT)
            }
            Err(e) => {
                tracing::error!("Login answer is not a user record: {e}");
                self.fail(None)
            }
        }
    }

    /// Run a full login attempt against `transport`.
    pub async fn submit<T: Transport>(
        &mut self,
        transport: &T,
        context: &mut Context,
        config: &ClientConfig,
    ) -> Result<Outcome, Error> {
        let request = self.begin_submit(context, config)?;
        let result = transport
            .post_form(&request.url, &request.account.form())
            .await;
        Ok(self.settle(result, context))
    }

    fn fail(&mut self, status: Option<u16>) -> Outcome {
        self.last_status = status;
        self.password_visible = false;
        self.state = LoginState::Idle;
        if status == Some(NO_RESPONSE_STATUS) {
            Outcome::Toast(NO_RESPONSE)
        } else {
            Outcome::Toast(BAD_CREDENTIALS)
        }
    }
}
