use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text input with a leading search icon.
#[component]
pub fn SearchInput(
    /// The signal the query is written to.
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
