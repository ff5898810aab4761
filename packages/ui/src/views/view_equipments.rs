use dioxus::prelude::*;
use middleware::AppPath;

/// Placeholder shared by the equipments, monitoring and analytics routes.
#[component]
pub fn ViewEquipments(section: AppPath) -> Element {
    rsx! {
        section {
            class: "view",
            h2 { class: "view-title", "{section.label()}" }
            p { class: "view-empty", "Nothing to show yet." }
        }
    }
}
