use crate::data;
use crate::shared::components::{ExportButton, Modal, PageHeader, SearchInput, StatCard};
use crate::shared::export::build_csv;
use crate::shared::list_utils::Searchable;
use contracts::domain::user::Client;
use leptos::prelude::*;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let (selected, set_selected) = signal(Option::<&'static Client>::None);

    let filtered = move || {
        let q = query.get();
        data::users::clients()
            .iter()
            .filter(|c| c.matches_filter(&q))
            .collect::<Vec<_>>()
    };

    let country_peak = data::users::client_countries()
        .iter()
        .map(|slice| slice.count)
        .max()
        .unwrap_or(1)
        .max(1);

    view! {
        <div class="page page--clients">
            <PageHeader title="Clients" subtitle="People sending parcels through the platform">
                <ExportButton
                    csv=Callback::new(move |_| build_csv(data::users::clients()))
                    filename="clients.csv"
                />
            </PageHeader>

            <div class="stats-row">
                <StatCard title="Total Clients" value="8,500" trend=15.0 icon_name="users" />
                <StatCard
                    title="Active Users"
                    value="6,845"
                    trend=12.0
                    icon_name="user-check"
                    accent="emerald"
                />
                <StatCard
                    title="Avg. Order Value"
                    value="€52"
                    trend=5.0
                    icon_name="wallet"
                    accent="secondary"
                />
            </div>

            <div class="panel-grid">
                <div class="panel panel--wide">
                    <div class="panel__toolbar">
                        <h2 class="panel__title">"All Clients"</h2>
                        <SearchInput value=query placeholder="Search clients..." />
                    </div>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Address"</th>
                                <th>"Orders"</th>
                                <th>"Total Spent"</th>
                                <th>"Last Order"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                filtered()
                                    .into_iter()
                                    .map(|client| {
                                        view! {
                                            <tr
                                                class="table__row--clickable"
                                                on:click=move |_| set_selected.set(Some(client))
                                            >
                                                <td class="table__person">
                                                    <img src=client.profile.avatar_url.clone() alt="" />
                                                    {client.profile.name.clone()}
                                                </td>
                                                <td>{client.profile.email.clone()}</td>
                                                <td>{client.profile.address.clone()}</td>
                                                <td>{client.stats.total_orders}</td>
                                                <td>{client.stats.total_spent.clone()}</td>
                                                <td>{client.stats.last_order.clone()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h2 class="panel__title">"Clients by Country"</h2>
                    {data::users::client_countries()
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
                    .map(|client| {
                        view! {
                            <Modal
                                title=client.profile.name.clone()
                                on_close=Callback::new(move |_| set_selected.set(None))
                            >
                                <div class="detail-grid">
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Email"</span>
                                        <span>{client.profile.email.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Phone"</span>
                                        <span>{client.profile.phone.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Address"</span>
                                        <span>{client.profile.address.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Joined"</span>
                                        <span>{client.profile.join_date.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Total Orders"</span>
                                        <span>{client.stats.total_orders}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Total Spent"</span>
                                        <span>{client.stats.total_spent.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Avg. Order Value"</span>
                                        <span>{client.stats.avg_order_value.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Last Order"</span>
                                        <span>{client.stats.last_order.clone()}</span>
                                    </div>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
