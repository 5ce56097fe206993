pub mod header;
pub mod sidebar;

use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Application shell: fixed sidebar, top header, routed content.
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <div class="app-shell">
            <sidebar::Sidebar />
            <div class="app-shell__main">
                <header::Header />
                <main class="app-shell__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
