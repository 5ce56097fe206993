use crate::data;
use crate::shared::components::{ExportButton, Modal, PageHeader, StatCard, StatusBadge};
use crate::shared::export::build_csv;
use contracts::domain::request::DeliveryRequest;
use leptos::prelude::*;

const STATUS_FILTERS: [(&str, Option<&str>); 4] = [
    ("All", None),
    ("Converted", Some("Converted")),
    ("Pending", Some("Pending")),
    ("Cancelled", Some("Cancelled")),
];

#[component]
pub fn RequestsPage() -> impl IntoView {
    let (filter, set_filter) = signal(0usize);
    let (selected, set_selected) = signal(Option::<&'static DeliveryRequest>::None);

    let filtered = move || {
        let status = STATUS_FILTERS[filter.get()].1;
        data::requests::all()
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page page--requests">
            <PageHeader title="Requests" subtitle="Delivery requests posted by senders">
                <ExportButton
                    csv=Callback::new(move |_| build_csv(data::requests::all()))
                    filename="requests.csv"
                />
            </PageHeader>

            <div class="stats-row">
                <StatCard title="Total Requests" value="1,845" trend=14.0 icon_name="send" />
                <StatCard
                    title="Converted"
                    value="1,230"
                    trend=18.0
                    icon_name="check-circle"
                    accent="emerald"
                />
                <StatCard
                    title="Avg. Negotiation"
                    value="1.5 days"
                    trend=-10.0
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
                            <th>"Request ID"</th>
                            <th>"Date"</th>
                            <th>"Route"</th>
                            <th>"Sender"</th>
                            <th>"Initial Price"</th>
                            <th>"Final Price"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered()
                                .into_iter()
                                .map(|request| {
                                    view! {
                                        <tr
                                            class="table__row--clickable"
                                            on:click=move |_| set_selected.set(Some(request))
                                        >
                                            <td>{request.id.to_string()}</td>
                                            <td>{request.date.clone()}</td>
                                            <td>
                                                {format!("{} → {}", request.departure, request.arrival)}
                                            </td>
                                            <td>{request.sender.name.clone()}</td>
                                            <td>{request.initial_price.clone()}</td>
                                            <td>{request.final_price.clone()}</td>
                                            <td>
                                                <StatusBadge status=request.status.clone() />
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
                    .map(|request| {
                        view! {
                            <Modal
                                title=format!("Request {}", request.id)
                                on_close=Callback::new(move |_| set_selected.set(None))
                            >
                                <div class="detail-grid">
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Route"</span>
                                        <span>
                                            {format!("{} → {}", request.departure, request.arrival)}
                                        </span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Package"</span>
                                        <span>{request.package.description.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Weight"</span>
                                        <span>{format!("{} kg", request.package.weight_kg)}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Letters"</span>
                                        <span>{request.package.letters}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Offers Received"</span>
                                        <span>{request.negotiation.offers}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Negotiation"</span>
                                        <span>{request.negotiation.duration.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Price Reduction"</span>
                                        <span>{request.negotiation.price_reduction.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Status"</span>
                                        <StatusBadge status=request.status.clone() />
                                    </div>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
