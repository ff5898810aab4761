use dioxus::prelude::*;
use middleware::AppPath;
use ui::SidebarContext;

use crate::Route;

#[component]
pub fn SidebarLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        SidebarContext {
            active: AppPath::from(&route),
            on_navigate: move |path: AppPath| {
                nav.push(Route::from(path));
            },
            Outlet::<Route> {}
        }
    }
}
