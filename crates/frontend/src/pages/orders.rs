use crate::data;
use crate::shared::components::{ExportButton, Modal, PageHeader, SearchInput, StatCard, StatusBadge};
use crate::shared::export::build_csv;
use crate::shared::list_utils::contains_ci;
use contracts::domain::order::Order;
use leptos::prelude::*;

/// (tab label, status it filters on; None means everything)
const STATUS_TABS: [(&str, Option<&str>); 5] = [
    ("All Orders", None),
    ("New Orders", Some("New Order")),
    ("Handover", Some("Handover")),
    ("Delivered", Some("Delivered")),
    ("Cancelled", Some("Cancelled")),
];

fn matches(order: &Order, tab: Option<&str>, query: &str) -> bool {
    if let Some(status) = tab {
        if order.status != status {
            return false;
        }
    }
    contains_ci(order.id.as_str(), query)
        || contains_ci(&order.date, query)
        || contains_ci(&order.departure, query)
        || contains_ci(&order.arrival, query)
        || contains_ci(&order.sender.name, query)
        || contains_ci(&order.traveler.name, query)
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let (tab, set_tab) = signal(0usize);
    let query = RwSignal::new(String::new());
    let (selected, set_selected) = signal(Option::<&'static Order>::None);

    let filtered = move || {
        let q = query.get();
        let status = STATUS_TABS[tab.get()].1;
        data::orders::all()
            .iter()
            .filter(|o| matches(o, status, &q))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page page--orders">
            <PageHeader title="Orders" subtitle="Track and manage all parcel deliveries">
                <ExportButton
                    csv=Callback::new(move |_| build_csv(data::orders::all()))
                    filename="orders.csv"
                />
            </PageHeader>

            <div class="stats-row">
                <StatCard title="New Orders" value="245" trend=20.0 icon_name="plus" />
                <StatCard
                    title="Handover"
                    value="123"
                    trend=11.0
                    icon_name="send"
                    accent="secondary"
                />
                <StatCard
                    title="Delivered"
                    value="150"
                    trend=18.0
                    icon_name="check-circle"
                    accent="emerald"
                />
                <StatCard title="Cancelled" value="45" trend=-8.0 icon_name="x-circle" accent="rose" />
            </div>

            <div class="panel">
                <div class="panel__toolbar">
                    <div class="tabs">
                        {STATUS_TABS
                            .iter()
                            .enumerate()
                            .map(|(i, (label, _))| {
                                view! {
                                    <button
                                        class=move || {
                                            if tab.get() == i { "tab tab--active" } else { "tab" }
                                        }
                                        on:click=move |_| set_tab.set(i)
                                    >
                                        {*label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <SearchInput value=query placeholder="Search orders..." />
                </div>

                <table class="table">
                    <thead>
                        <tr>
                            <th>"Order ID"</th>
                            <th>"Route"</th>
                            <th>"Sender"</th>
                            <th>"Traveler"</th>
                            <th>"Weight"</th>
                            <th>"Price"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered()
                                .into_iter()
                                .map(|order| {
                                    view! {
                                        <tr
                                            class="table__row--clickable"
                                            on:click=move |_| set_selected.set(Some(order))
                                        >
                                            <td>{order.id.to_string()}</td>
                                            <td>
                                                {format!("{} → {}", order.departure, order.arrival)}
                                            </td>
                                            <td>{order.sender.name.clone()}</td>
                                            <td>{order.traveler.name.clone()}</td>
                                            <td>{format!("{} kg", order.weight_kg)}</td>
                                            <td>{order.price.clone()}</td>
                                            <td>
                                                <StatusBadge status=order.status.clone() />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="panel-grid">
                <div class="panel">
                    <h2 class="panel__title">"Weight Distribution"</h2>
                    {data::orders::WEIGHT_DISTRIBUTION
                        .iter()
                        .map(|(range, count, pct)| {
                            view! {
                                <div class="dist-row">
                                    <span class="dist-row__label">{*range}</span>
                                    <div class="dist-row__track">
                                        <div
                                            class="dist-row__bar"
                                            style:width=format!("{}%", pct)
                                        ></div>
                                    </div>
                                    <span class="dist-row__count">{*count}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="panel">
                    <h2 class="panel__title">"Document Distribution"</h2>
                    {data::orders::DOCUMENT_DISTRIBUTION
                        .iter()
                        .map(|(kind, count, pct)| {
                            view! {
                                <div class="dist-row">
                                    <span class="dist-row__label">{*kind}</span>
                                    <div class="dist-row__track">
                                        <div
                                            class="dist-row__bar"
                                            style:width=format!("{}%", pct)
                                        ></div>
                                    </div>
                                    <span class="dist-row__count">{*count}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|order| {
                        view! {
                            <Modal
                                title=format!("Order {}", order.id)
                                on_close=Callback::new(move |_| set_selected.set(None))
                            >
                                <div class="detail-grid">
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Date"</span>
                                        <span>{order.date.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Route"</span>
                                        <span>
                                            {format!("{} → {}", order.departure, order.arrival)}
                                        </span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Weight"</span>
                                        <span>{format!("{} kg", order.weight_kg)}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Letters"</span>
                                        <span>{order.letters}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Price"</span>
                                        <span>{order.price.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Status"</span>
                                        <StatusBadge status=order.status.clone() />
                                    </div>
                                </div>
                                <div class="detail-people">
                                    <div class="detail-person">
                                        <img src=order.sender.avatar_url.clone() alt="" />
                                        <div>
                                            <div class="detail-person__role">"Sender"</div>
                                            <div>{order.sender.name.clone()}</div>
                                        </div>
                                    </div>
                                    <div class="detail-person">
                                        <img src=order.traveler.avatar_url.clone() alt="" />
                                        <div>
                                            <div class="detail-person__role">"Traveler"</div>
                                            <div>{order.traveler.name.clone()}</div>
                                        </div>
                                    </div>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_filter_is_exact_on_status() {
        let orders = data::orders::all();
        assert!(matches(&orders[0], Some("New Order"), ""));
        assert!(!matches(&orders[0], Some("Delivered"), ""));
        assert!(matches(&orders[0], None, ""));
    }

    #[test]
    fn query_searches_route_and_people() {
        let order = &data::orders::all()[0];
        assert!(matches(order, None, "london"));
        assert!(matches(order, None, "sophie"));
        assert!(matches(order, None, "#UPK245"));
        assert!(!matches(order, None, "berlin"));
    }
}
