//! Client-side route table. The web crate's `Route` enum mirrors these entries.

/// A location the navigation shell knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppPath {
    Root,
    Equipments,
    Monitoring,
    Analytics,
}

impl AppPath {
    /// Where a successful login lands.
    pub const DEFAULT: AppPath = AppPath::Equipments;

    /// The sections listed in the sidebar, in display order.
    pub const SECTIONS: [AppPath; 3] = [AppPath::Equipments, AppPath::Monitoring, AppPath::Analytics];

    pub fn as_str(self) -> &'static str {
        match self {
            AppPath::Root => "/",
            AppPath::Equipments => "/equipments",
            AppPath::Monitoring => "/monitoring",
            AppPath::Analytics => "/analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppPath::Root => "Home",
            AppPath::Equipments => "Equipments",
            AppPath::Monitoring => "Monitoring",
            AppPath::Analytics => "Analytics",
        }
    }

    /// Map a browser location to a route. Query strings, fragments and a trailing
    /// slash are ignored.
    pub fn resolve(location: &str) -> Option<AppPath> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        match path {
            "" => Some(AppPath::Root),
            "/equipments" => Some(AppPath::Equipments),
            "/monitoring" => Some(AppPath::Monitoring),
            "/analytics" => Some(AppPath::Analytics),
            _ => None,
        }
    }
}
