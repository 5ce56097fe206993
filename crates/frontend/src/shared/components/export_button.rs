use crate::shared::export::download_csv_text;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Export button with the simulated "Exporting..." processing state the
/// dashboard has always shown before handing the CSV to the browser.
#[component]
pub fn ExportButton(
    /// Builds the CSV payload at click time.
    csv: Callback<(), String>,
    filename: &'static str,
) -> impl IntoView {
    let (exporting, set_exporting) = signal(false);

    let on_click = move |_| {
        if exporting.get_untracked() {
            return;
        }
        set_exporting.set(true);
        spawn_local(async move {
            // Simulated processing delay; there is no API call behind this.
            TimeoutFuture::new(2_000).await;
            if let Err(e) = download_csv_text(&csv.run(()), filename) {
                log::error!("export of {} failed: {}", filename, e);
            }
            set_exporting.set(false);
        });
    };

    view! {
        <button class="btn btn--ghost" disabled=move || exporting.get() on:click=on_click>
            {icon("download")}
            <span>{move || if exporting.get() { "Exporting..." } else { "Export" }}</span>
        </button>
    }
}
