use crate::data;
use crate::shared::components::{ExportButton, Modal, PageHeader, StatCard, StatusBadge};
use crate::shared::export::build_csv;
use contracts::domain::offer::Offer;
use leptos::prelude::*;

const STATUS_FILTERS: [(&str, Option<&str>); 4] = [
    ("All", None),
    ("Converted", Some("Converted")),
    ("Accepted", Some("Accepted")),
    ("Pending", Some("Pending")),
];

#[component]
pub fn OffersPage() -> impl IntoView {
    let (filter, set_filter) = signal(0usize);
    let (selected, set_selected) = signal(Option::<&'static Offer>::None);

    let filtered = move || {
        let status = STATUS_FILTERS[filter.get()].1;
        data::offers::all()
            .iter()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page page--offers">
            <PageHeader title="Offers" subtitle="Traveler counter-proposals and their outcomes">
                <ExportButton
                    csv=Callback::new(move |_| build_csv(data::offers::all()))
                    filename="offers.csv"
                />
            </PageHeader>

            <div class="stats-row">
                <StatCard title="Total Offers" value="3,120" trend=16.0 icon_name="message-square" />
                <StatCard
                    title="Accepted"
                    value="1,870"
                    trend=12.0
                    icon_name="check-circle"
                    accent="emerald"
                />
                <StatCard
                    title="Avg. Rounds"
                    value="2.1"
                    trend=-4.0
                    icon_name="clock"
                    accent="secondary"
                />
            </div>

            <div class="panel">
                <div class="panel__toolbar">
                    <div class="tabs">
                        {STATUS_FILTERS
                            .iter()
                            .enumerate()
                            .map(|(i, (label, _))| {
                                view! {
                                    <button
                                        class=move || {
                                            if filter.get() == i { "tab tab--active" } else { "tab" }
                                        }
                                        on:click=move |_| set_filter.set(i)
                                    >
                                        {*label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <table class="table">
                    <thead>
                        <tr>
                            <th>"Offer ID"</th>
                            <th>"Date"</th>
                            <th>"Route"</th>
                            <th>"Sender"</th>
                            <th>"Traveler"</th>
                            <th>"Final Price"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered()
                                .into_iter()
                                .map(|offer| {
                                    view! {
                                        <tr
                                            class="table__row--clickable"
                                            on:click=move |_| set_selected.set(Some(offer))
                                        >
                                            <td>{offer.id.to_string()}</td>
                                            <td>{offer.date.clone()}</td>
                                            <td>
                                                {format!("{} → {}", offer.departure, offer.arrival)}
                                            </td>
                                            <td>{offer.sender.name.clone()}</td>
                                            <td>{offer.traveler.name.clone()}</td>
                                            <td>{offer.final_price.clone()}</td>
                                            <td>
                                                <StatusBadge status=offer.status.clone() />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                selected
                    .get()
                    .map(|offer| {
                        view! {
                            <Modal
                                title=format!("Offer {}", offer.id)
                                on_close=Callback::new(move |_| set_selected.set(None))
                            >
                                <div class="detail-grid">
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Route"</span>
                                        <span>
                                            {format!("{} → {}", offer.departure, offer.arrival)}
                                        </span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Package"</span>
                                        <span>{offer.package.description.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Initial Price"</span>
                                        <span>{offer.initial_price.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Final Price"</span>
                                        <span>{offer.final_price.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Rounds"</span>
                                        <span>{offer.negotiation.rounds}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Duration"</span>
                                        <span>{offer.negotiation.duration.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Price Reduction"</span>
                                        <span>{offer.negotiation.price_reduction.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Status"</span>
                                        <StatusBadge status=offer.status.clone() />
                                    </div>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
