use crate::shared::date_utils::current_date_long;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let (search, set_search) = signal(String::new());

    view! {
        <header class="top-header">
            <div class="top-header__date">{current_date_long()}</div>

            <div class="top-header__actions">
                <div class="top-header__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search by date, name or ID..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>

                <button
                    class="top-header__icon-btn"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || {
                        if theme.get_theme() == Theme::Dark {
                            icon("sun")
                        } else {
                            icon("moon")
                        }
                    }}
                </button>

                <button class="top-header__icon-btn top-header__bell">
                    {icon("bell")}
                    <span class="top-header__dot"></span>
                </button>

                <button class="top-header__avatar">{icon("user")}</button>
            </div>
        </header>
    }
}
