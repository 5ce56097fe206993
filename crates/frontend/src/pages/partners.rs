use crate::data;
use crate::shared::components::{ExportButton, Modal, PageHeader, SearchInput, StatCard};
use crate::shared::export::build_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::Searchable;
use contracts::domain::user::Partner;
use leptos::prelude::*;

#[component]
pub fn PartnersPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let (selected, set_selected) = signal(Option::<&'static Partner>::None);

    let filtered = move || {
        let q = query.get();
        data::users::partners()
            .iter()
            .filter(|p| p.matches_filter(&q))
            .collect::<Vec<_>>()
    };

    let country_peak = data::users::partner_countries()
        .iter()
        .map(|slice| slice.count)
        .max()
        .unwrap_or(1)
        .max(1);

    view! {
        <div class="page page--partners">
            <PageHeader title="Partners" subtitle="Travelers delivering parcels on their routes">
                <ExportButton
                    csv=Callback::new(move |_| build_csv(data::users::partners()))
                    filename="partners.csv"
                />
            </PageHeader>

            <div class="stats-row">
                <StatCard title="Active Partners" value="2,270" trend=15.0 icon_name="user-check" />
                <StatCard
                    title="Avg. Rating"
                    value="4.8/5"
                    trend=8.0
                    icon_name="star"
                    accent="secondary"
                />
                <StatCard
                    title="Avg. Delivery Time"
                    value="2.4 days"
                    trend=-6.0
                    icon_name="clock"
                    accent="emerald"
                />
            </div>

            <div class="panel-grid">
                <div class="panel panel--wide">
                    <div class="panel__toolbar">
                        <h2 class="panel__title">"All Partners"</h2>
                        <SearchInput value=query placeholder="Search partners..." />
                    </div>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Rating"</th>
                                <th>"Deliveries"</th>
                                <th>"Completion"</th>
                                <th>"Revenue"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                filtered()
                                    .into_iter()
                                    .map(|partner| {
                                        view! {
                                            <tr
                                                class="table__row--clickable"
                                                on:click=move |_| set_selected.set(Some(partner))
                                            >
                                                <td class="table__person">
                                                    <img src=partner.profile.avatar_url.clone() alt="" />
                                                    {partner.profile.name.clone()}
                                                </td>
                                                <td>{partner.profile.email.clone()}</td>
                                                <td class="table__rating">
                                                    {icon("star")}
                                                    {partner.stats.rating}
                                                </td>
                                                <td>{partner.stats.total_deliveries}</td>
                                                <td>{format!("{}%", partner.stats.completion_rate)}</td>
                                                <td>{partner.stats.total_revenue.clone()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h2 class="panel__title">"Partners by Country"</h2>
                    {data::users::partner_countries()
                        .iter()
                        .map(|slice| {
                            let width = slice.count * 100 / country_peak;
                            view! {
                                <div class="dist-row">
                                    <span class="dist-row__label">{slice.country.clone()}</span>
                                    <div class="dist-row__track">
                                        <div
                                            class="dist-row__bar"
                                            style:width=format!("{}%", width)
                                        ></div>
                                    </div>
                                    <span class="dist-row__count">{slice.count}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|partner| {
                        view! {
                            <Modal
                                title=partner.profile.name.clone()
                                on_close=Callback::new(move |_| set_selected.set(None))
                            >
                                <div class="detail-grid">
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Email"</span>
                                        <span>{partner.profile.email.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Phone"</span>
                                        <span>{partner.profile.phone.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Rating"</span>
                                        <span>{format!("{}/5", partner.stats.rating)}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Deliveries"</span>
                                        <span>{partner.stats.total_deliveries}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Completion Rate"</span>
                                        <span>{format!("{}%", partner.stats.completion_rate)}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Cancel Rate"</span>
                                        <span>{format!("{}%", partner.stats.cancel_rate)}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Response Time"</span>
                                        <span>{partner.stats.response_time.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Avg. Delivery Time"</span>
                                        <span>{partner.stats.avg_delivery_time.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Total Revenue"</span>
                                        <span>{partner.stats.total_revenue.clone()}</span>
                                    </div>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
