use leptos::prelude::*;

/// On/off switch, used by the feature flags page.
#[component]
pub fn Toggle(
    #[prop(into)] checked: Signal<bool>,
    /// Called with the new desired state.
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if checked.get() {
                    "toggle toggle--on"
                } else {
                    "toggle"
                }
            }
            role="switch"
            aria-checked=move || checked.get().to_string()
            on:click=move |_| on_toggle.run(!checked.get_untracked())
        >
            <span class="toggle__knob"></span>
        </button>
    }
}
