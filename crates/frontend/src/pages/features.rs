use crate::data;
use crate::shared::components::{Modal, PageHeader, SearchInput, Toggle};
use crate::shared::icons::icon;
use crate::shared::list_utils::contains_ci;
use contracts::domain::feature::FeatureFlag;
use leptos::prelude::*;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let flags = RwSignal::new(data::features::all().to_vec());
    let (category, set_category) = signal("all");
    let query = RwSignal::new(String::new());
    let (selected, set_selected) = signal(Option::<FeatureFlag>::None);

    let filtered = move || {
        let wanted = category.get();
        let q = query.get();
        flags
            .get()
            .into_iter()
            .filter(|f| wanted == "all" || f.category == wanted)
            .filter(|f| contains_ci(&f.name, &q) || contains_ci(&f.description, &q))
            .collect::<Vec<_>>()
    };

    let enabled_count = move || flags.get().iter().filter(|f| f.enabled).count();

    view! {
        <div class="page page--features">
            <PageHeader title="Features" subtitle="Platform feature flags and their settings">
                <div class="features__summary">
                    {move || format!("{} of {} enabled", enabled_count(), flags.get().len())}
                </div>
            </PageHeader>

            <div class="panel__toolbar">
                <div class="tabs">
                    {data::features::CATEGORIES
                        .iter()
                        .map(|&cat| {
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == cat {
                                            "tab tab--active"
                                        } else {
                                            "tab"
                                        }
                                    }
                                    on:click=move |_| set_category.set(cat)
                                >
                                    {cat}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <SearchInput value=query placeholder="Search features..." />
            </div>

            <div class="feature-grid">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|flag| {
                            let id = flag.id.clone();
                            let impact_class = format!(
                                "pill pill--{}",
                                data::features::impact_color_token(flag.impact),
                            );
                            let detail = flag.clone();
                            let enabled = flag.enabled;
                            view! {
                                <div class="feature-card">
                                    <div class="feature-card__head">
                                        <div class="feature-card__icon">{icon(&flag.icon_id)}</div>
                                        <Toggle
                                            checked=Signal::derive(move || enabled)
                                            on_toggle=Callback::new(move |next: bool| {
                                                let id = id.clone();
                                                flags
                                                    .update(|all| {
                                                        if let Some(f) = all.iter_mut().find(|f| f.id == id) {
                                                            f.enabled = next;
                                                        }
                                                    });
                                            })
                                        />
                                    </div>
                                    <h3 class="feature-card__name">{flag.name.clone()}</h3>
                                    <p class="feature-card__description">
                                        {flag.description.clone()}
                                    </p>
                                    <div class="feature-card__foot">
                                        <span class=impact_class>
                                            {flag.impact.display_name()}
                                        </span>
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| set_selected.set(Some(detail.clone()))
                                        >
                                            "Settings"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                selected
                    .get()
                    .map(|flag| {
                        view! {
                            <Modal
                                title=format!("{} Settings", flag.name)
                                on_close=Callback::new(move |_| set_selected.set(None))
                            >
                                <div class="settings-list">
                                    {flag
                                        .settings
                                        .iter()
                                        .map(|(key, value)| {
                                            view! {
                                                <div class="expense-row">
                                                    <span class="expense-row__label">{key.clone()}</span>
                                                    <span class="expense-row__amount">
                                                        {value.to_string()}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
