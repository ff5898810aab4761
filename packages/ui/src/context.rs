//! Session/identity context for the UI.

use api::HttpTransport;
use dioxus::prelude::*;
use middleware::{ClientConfig, Context};

/// Shared client state plus whether the startup metadata fetch is still running.
#[derive(Debug, Clone, PartialEq)]
pub struct MiddlewareState {
    pub context: Context,
    pub loading: bool,
}

impl Default for MiddlewareState {
    fn default() -> Self {
        Self {
            context: Context::new(),
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when metadata arrives or the user logs in or out.
pub fn use_middleware() -> Signal<MiddlewareState> {
    use_context::<Signal<MiddlewareState>>()
}

/// The client configuration handed to [`MiddlewareProvider`].
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that owns the session context.
/// Wrap your app with this component; it fetches the metadata once on mount.
#[component]
pub fn MiddlewareProvider(config: ClientConfig, children: Element) -> Element {
    let mut state = use_signal(MiddlewareState::default);
    use_context_provider(|| config.clone());

    let _ = use_resource(move || {
        let config = config.clone();
        async move {
            let context = Context::init(&HttpTransport::new(), &config).await;
            state.set(MiddlewareState {
                context,
                loading: false,
            });
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
