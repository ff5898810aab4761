use dioxus::prelude::*;

use middleware::{AppPath, ClientConfig};
use views::{Analytics, Equipments, Monitoring, Root, SidebarLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SidebarLayout)]
        #[route("/")]
        Root {},
        #[route("/equipments")]
        Equipments {},
        #[route("/monitoring")]
        Monitoring {},
        #[route("/analytics")]
        Analytics {},
}

impl From<AppPath> for Route {
    fn from(path: AppPath) -> Self {
        match path {
            AppPath::Root => Route::Root {},
            AppPath::Equipments => Route::Equipments {},
            AppPath::Monitoring => Route::Monitoring {},
            AppPath::Analytics => Route::Analytics {},
        }
    }
}

impl From<&Route> for AppPath {
    fn from(route: &Route) -> Self {
        match route {
            Route::Root {} => AppPath::Root,
            Route::Equipments {} => AppPath::Equipments,
            Route::Monitoring {} => AppPath::Monitoring,
            Route::Analytics {} => AppPath::Analytics,
        }
    }
}

const CONFIG: &str = include_str!("../intranet.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}", ClientConfig::filename());
        ClientConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::MiddlewareProvider {
            config: config,
            ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ClientConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_routes_match_app_paths() {
        for path in [AppPath::Root].into_iter().chain(AppPath::SECTIONS) {
            let route = Route::from(path);
            assert_eq!(route.to_string(), path.as_str());
            assert_eq!(AppPath::from(&route), path);
        }
    }
}
