use dioxus::prelude::*;
use middleware::AppPath;
use ui::views::ViewEquipments;

/// The root path renders nothing inside the shell.
#[component]
pub fn Root() -> Element {
    rsx! {}
}

#[component]
pub fn Equipments() -> Element {
    rsx! {
        ViewEquipments { section: AppPath::Equipments }
    }
}

#[component]
pub fn Monitoring() -> Element {
    rsx! {
        ViewEquipments { section: AppPath::Monitoring }
    }
}

#[component]
pub fn Analytics() -> Element {
    rsx! {
        ViewEquipments { section: AppPath::Analytics }
    }
}
