//! # Middleware crate: framework-agnostic core of the intranet client
//!
//! Everything the Dioxus components need that does not touch the DOM lives here, so
//! it can be unit tested on native targets.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `intranet.toml` client configuration (server endpoints, UI timings) |
//! | [`context`] | Session/identity context: metadata + authenticated user |
//! | [`deferred`] | Coalescing buffer for the credential draft |
//! | [`login`] | Login flow state machine (Idle → Submitting → Redirecting) |
//! | [`models`] | `Account`, `Metadata`, `Rule`, `User` |
//! | [`paths`] | Client-side route table |
//! | [`schema`] | Login form validation schema derived from metadata |
//! | [`storage`] | Key/value storage seam used for local diagnostics |
//! | [`transport`] | HTTP seam implemented by the `api` crate |

pub mod config;
pub mod context;
pub mod deferred;
pub mod error;
pub mod login;
pub mod models;
pub mod paths;
pub mod schema;
pub mod storage;
pub mod transport;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::ClientConfig;
pub use context::Context;
pub use deferred::Deferred;
pub use error::Error;
pub use login::{LoginFlow, LoginRequest, LoginState, Outcome};
pub use models::{Account, Field, Metadata, Rule, User};
pub use paths::AppPath;
pub use schema::{FieldError, LoginSchema, SchemaCache};
pub use storage::KeyValueStore;
pub use transport::{Reply, Transport, TransportError};
