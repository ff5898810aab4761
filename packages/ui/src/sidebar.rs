use dioxus::prelude::*;
use middleware::AppPath;

use crate::icons::{FaChartLine, FaCodeBranch, FaHeartPulse, FaRightFromBracket, FaServer};
use crate::{use_config, use_middleware, Icon, Login};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Navigation chrome around the routed views.
///
/// Shows the [`Login`] view until a user is in the session context, so the login
/// screen never has a URL of its own. `active` highlights the current section.
#[component]
pub fn SidebarContext(
    active: AppPath,
    on_navigate: EventHandler<AppPath>,
    children: Element,
) -> Element {
    let mut middleware = use_middleware();
    let config = use_config();

    let state = middleware.read();
    if state.loading {
        return rsx! {
            div { class: "shell-loading", span { class: "spinner" } }
        };
    }
    let Some(user) = state.context.user().cloned() else {
        return rsx! {
            Login { on_navigate: on_navigate }
        };
    };
    drop(state);

    let handle_logout = move |_| {
        let config = config.clone();
        let prefix = middleware
            .read()
            .context
            .api_prefix()
            .unwrap_or_default()
            .to_string();
        middleware.write().context.clear_user();
        on_navigate.call(AppPath::Root);
        spawn(async move {
            if let Err(e) = api::logout(&api::HttpTransport::new(), &prefix, &config).await {
                tracing::warn!("Logout: {e}");
            }
        });
    };

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        div {
            class: "shell",

            nav {
                class: "sidebar",

                div {
                    class: "sidebar-brand",
                    Icon { icon: FaCodeBranch, width: 16, height: 16 }
                    span { "Intranet" }
                }

                ul {
                    class: "sidebar-menu",
                    for section in AppPath::SECTIONS {
                        li {
                            key: "{section.as_str()}",
                            button {
                                class: item_class(section, active),
                                onclick: move |_| on_navigate.call(section),
                                SectionIcon { section: section }
                                span { "{section.label()}" }
                            }
                        }
                    }
                }

                div {
                    class: "sidebar-user",
                    span { class: "sidebar-user-name", "{user.display_name()}" }
                    button {
                        class: "sidebar-logout",
                        title: "Logout",
                        onclick: handle_logout,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    }
                }
            }

            main {
                class: "shell-content",
                {children}
            }
        }
    }
}

#[component]
fn SectionIcon(section: AppPath) -> Element {
    match section {
        AppPath::Equipments => rsx! { Icon { icon: FaServer, width: 14, height: 14 } },
        AppPath::Monitoring => rsx! { Icon { icon: FaHeartPulse, width: 14, height: 14 } },
        AppPath::Analytics => rsx! { Icon { icon: FaChartLine, width: 14, height: 14 } },
        AppPath::Root => rsx! {},
    }
}

fn item_class(section: AppPath, active: AppPath) -> &'static str {
    if section == active {
        "sidebar-item sidebar-item--active"
    } else {
        "sidebar-item"
    }
}
