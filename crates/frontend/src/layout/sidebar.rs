use crate::shared::icons::icon;
use crate::system::auth::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const MENU_ITEMS: [(&str, &str, &str); 10] = [
    ("layout-dashboard", "Dashboard", "/"),
    ("shopping-cart", "Orders", "/orders"),
    ("users", "Clients", "/clients"),
    ("user-check", "Partners", "/partners"),
    ("send", "Requests", "/requests"),
    ("message-square", "Offers", "/offers"),
    ("wallet", "Finance", "/finance"),
    ("ticket", "Vouchers", "/vouchers"),
    ("settings", "Features", "/features"),
    ("headphones", "Support", "/support"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let (_, set_auth) = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        do_logout(set_auth);
        navigate("/login", Default::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("package")}
                <span class="sidebar__brand-name">"Upacku"</span>
            </div>

            <nav class="sidebar__nav">
                <ul>
                    {MENU_ITEMS
                        .iter()
                        .map(|(icon_id, label, path)| {
                            view! {
                                <li>
                                    <A href=*path attr:class="sidebar__link">
                                        {icon(icon_id)}
                                        <span>{*label}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>

            <button class="sidebar__logout" on:click=on_logout>
                {icon("log-out")}
                <span>"Log Out"</span>
            </button>
        </aside>
    }
}
