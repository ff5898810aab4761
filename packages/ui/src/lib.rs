//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub use dioxus_primitives::toast::ToastProvider;

pub const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

mod context;
pub use context::{use_config, use_middleware, MiddlewareProvider, MiddlewareState};

mod login;
pub use login::Login;

mod sidebar;
pub use sidebar::SidebarContext;

pub mod views;

mod platform;
pub use platform::make_storage;
