use crate::data;
use crate::shared::components::{Modal, PageHeader, StatCard};
use crate::shared::date_utils::current_greeting;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::finance::MonthlyGrowth;
use leptos::prelude::*;

/// Which growth series a clicked metric card drills into.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Metric {
    Users,
    Orders,
    Revenue,
}

impl Metric {
    fn title(&self) -> &'static str {
        match self {
            Metric::Users => "User Growth",
            Metric::Orders => "Order Growth",
            Metric::Revenue => "Revenue Growth",
        }
    }

    fn value_of(&self, row: &MonthlyGrowth) -> String {
        match self {
            Metric::Users => row.users.to_string(),
            Metric::Orders => row.orders.to_string(),
            Metric::Revenue => format!("€{}", row.revenue),
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (metric, set_metric) = signal(Option::<Metric>::None);

    let name = auth_state
        .get_untracked()
        .user
        .map(|u| u.display_name)
        .unwrap_or_else(|| "Admin".to_string());
    let greeting = format!("{}, {}", current_greeting(), name);

    let growth_peak = data::dashboard::monthly_growth()
        .iter()
        .map(|row| row.revenue)
        .max()
        .unwrap_or(1)
        .max(1);

    view! {
        <div class="page page--dashboard">
            <PageHeader title=greeting subtitle="Last login was 2 hours ago">
                {()}
            </PageHeader>

            <div class="stats-row">
                <div class="stats-row__cell" on:click=move |_| set_metric.set(Some(Metric::Users))>
                    <StatCard title="Total Users" value="8,500" trend=15.0 icon_name="users" />
                </div>
                <div class="stats-row__cell" on:click=move |_| set_metric.set(Some(Metric::Orders))>
                    <StatCard
                        title="Total Orders"
                        value="5,200"
                        trend=12.0
                        icon_name="shopping-cart"
                        accent="secondary"
                    />
                </div>
                <div class="stats-row__cell" on:click=move |_| set_metric.set(Some(Metric::Revenue))>
                    <StatCard
                        title="Total Revenue"
                        value="€260,000"
                        trend=22.0
                        icon_name="wallet"
                        accent="emerald"
                    />
                </div>
                <div class="stats-row__cell">
                    <StatCard
                        title="Active Partners"
                        value="2,270"
                        trend=15.0
                        icon_name="user-check"
                    />
                </div>
                <div class="stats-row__cell">
                    <StatCard
                        title="CO2 Saved"
                        value="12,450 kg"
                        trend=18.0
                        icon_name="leaf"
                        accent="emerald"
                    />
                </div>
            </div>

            <div class="panel">
                <h2 class="panel__title">"Monthly Growth"</h2>
                <div class="growth-chart">
                    {data::dashboard::monthly_growth()
                        .iter()
                        .map(|row| {
                            let height = row.revenue * 100 / growth_peak;
                            view! {
                                <div class="growth-chart__column">
                                    <div
                                        class="growth-chart__bar"
                                        style:height=format!("{}%", height)
                                        title=format!(
                                            "{}: {} users, {} orders, €{}",
                                            row.month,
                                            row.users,
                                            row.orders,
                                            row.revenue,
                                        )
                                    ></div>
                                    <span class="growth-chart__label">{row.month.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="panel">
                <h2 class="panel__title">"Popular Routes"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Route"</th>
                            <th>"Volume"</th>
                            <th>"Revenue"</th>
                            <th>"Travelers"</th>
                            <th>"Avg. Price"</th>
                            <th>"Growth"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {data::dashboard::popular_routes()
                            .iter()
                            .map(|route| {
                                view! {
                                    <tr>
                                        <td class="table__route">
                                            {icon("map-pin")}
                                            {format!("{} → {}", route.departure, route.arrival)}
                                        </td>
                                        <td>{route.volume.clone()}</td>
                                        <td>{route.revenue.clone()}</td>
                                        <td>{route.travelers}</td>
                                        <td>{route.avg_price.clone()}</td>
                                        <td class="table__growth">
                                            {icon("trending-up")}
                                            {route.growth.clone()}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            {move || {
                metric
                    .get()
                    .map(|m| {
                        view! {
                            <Modal
                                title=m.title()
                                on_close=Callback::new(move |_| set_metric.set(None))
                            >
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Month"</th>
                                            <th>{m.title()}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data::dashboard::monthly_growth()
                                            .iter()
                                            .map(|row| {
                                                view! {
                                                    <tr>
                                                        <td>{row.month.clone()}</td>
                                                        <td>{m.value_of(row)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
