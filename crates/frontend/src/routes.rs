use crate::layout::AppLayout;
use crate::pages::{
    ClientsPage, DashboardPage, FeaturesPage, FinancePage, LoginPage, OffersPage, OrdersPage,
    PartnersPage, RequestsPage, SupportPage, VouchersPage,
};
use crate::system::auth::use_auth;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Auth gate around the main layout. Unauthenticated visitors get the
/// login page regardless of which protected path they hit.
#[component]
fn Protected() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <AppLayout />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=Protected>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!("orders") view=OrdersPage />
                    <Route path=path!("clients") view=ClientsPage />
                    <Route path=path!("partners") view=PartnersPage />
                    <Route path=path!("requests") view=RequestsPage />
                    <Route path=path!("offers") view=OffersPage />
                    <Route path=path!("finance") view=FinancePage />
                    <Route path=path!("vouchers") view=VouchersPage />
                    <Route path=path!("features") view=FeaturesPage />
                    <Route path=path!("support") view=SupportPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
