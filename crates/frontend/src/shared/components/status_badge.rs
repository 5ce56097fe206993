use crate::shared::icons::icon;
use contracts::status::classify;
use leptos::prelude::*;

/// Renders a freeform status label through the classifier so the same
/// label always gets the same icon and color token, on every page.
#[component]
pub fn StatusBadge(
    /// The raw status label as stored on the row.
    #[prop(into)]
    status: Signal<String>,
) -> impl IntoView {
    let badge_class = move || {
        format!(
            "status-badge status-badge--{}",
            classify(&status.get()).color_token
        )
    };

    view! {
        <span class=badge_class>
            {move || icon(classify(&status.get()).icon_id)}
            <span class="status-badge__label">{move || status.get()}</span>
        </span>
    }
}
