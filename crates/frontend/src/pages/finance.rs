use crate::data;
use crate::shared::components::{Modal, PageHeader, StatCard};
use contracts::domain::finance::{share_percent, MonthlyFlow};
use leptos::prelude::*;

const TIMEFRAMES: [&str; 3] = ["1M", "6M", "1Y"];

#[component]
pub fn FinancePage() -> impl IntoView {
    let (timeframe, set_timeframe) = signal(1usize);
    let (show_wallets, set_show_wallets) = signal(false);
    let (selected_flow, set_selected_flow) = signal(Option::<&'static MonthlyFlow>::None);

    let wallet = data::finance::wallet_stats();
    let revenue_total: i64 = data::finance::revenue_distribution()
        .iter()
        .map(|slice| slice.value)
        .sum();

    let flows = move || {
        let months = match TIMEFRAMES[timeframe.get()] {
            "1M" => 1,
            _ => data::finance::monthly_flows().len(),
        };
        let all = data::finance::monthly_flows();
        &all[all.len() - months..]
    };

    view! {
        <div class="page page--finance">
            <PageHeader title="Finance" subtitle="Platform revenue, expenses and wallets">
                <div class="tabs">
                    {TIMEFRAMES
                        .iter()
                        .enumerate()
                        .map(|(i, label)| {
                            view! {
                                <button
                                    class=move || {
                                        if timeframe.get() == i { "tab tab--active" } else { "tab" }
                                    }
                                    on:click=move |_| set_timeframe.set(i)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </PageHeader>

            <div class="stats-row">
                <div class="stats-row__cell" on:click=move |_| set_show_wallets.set(true)>
                    <StatCard
                        title="Active Wallets"
                        value=wallet.active_wallets.to_string()
                        trend=9.0
                        icon_name="wallet"
                    />
                </div>
                <StatCard
                    title="Total Balance"
                    value=wallet.total_balance.clone()
                    trend=14.0
                    icon_name="dollar-sign"
                    accent="emerald"
                />
                <StatCard
                    title="Avg. Balance"
                    value=wallet.avg_balance.clone()
                    trend=3.0
                    icon_name="trending-up"
                    accent="secondary"
                />
                <StatCard
                    title="Inactive Wallets"
                    value=wallet.inactive_wallets.to_string()
                    trend=-5.0
                    icon_name="wallet"
                    accent="rose"
                />
            </div>

            <div class="panel">
                <h2 class="panel__title">"Monthly Cash Flow"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Month"</th>
                            <th>"Revenue"</th>
                            <th>"Expenses"</th>
                            <th>"Balance"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            flows()
                                .iter()
                                .map(|flow| {
                                    view! {
                                        <tr
                                            class="table__row--clickable"
                                            on:click=move |_| set_selected_flow.set(Some(flow))
                                        >
                                            <td>{flow.month.clone()}</td>
                                            <td>{format!("€{}", flow.revenue)}</td>
                                            <td>{format!("€{}", flow.expenses)}</td>
                                            <td>{format!("€{}", flow.balance)}</td>
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
                    <h2 class="panel__title">"Revenue Distribution"</h2>
                    {data::finance::revenue_distribution()
                        .iter()
                        .map(|slice| {
                            let pct = share_percent(slice.value, revenue_total);
                            view! {
                                <div class="dist-row">
                                    <span class="dist-row__label">{slice.category.clone()}</span>
                                    <div class="dist-row__track">
                                        <div
                                            class="dist-row__bar"
                                            style:width=format!("{:.1}%", pct)
                                            style:background-color=slice.color.clone()
                                        ></div>
                                    </div>
                                    <span class="dist-row__count">{format!("{:.1}%", pct)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="panel">
                    <h2 class="panel__title">"Expense Breakdown"</h2>
                    {data::finance::expense_breakdown()
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="expense-row">
                                    <span class="expense-row__label">{item.category.clone()}</span>
                                    <span class="expense-row__amount">
                                        {format!("€{}", item.amount)}
                                    </span>
                                    <span class="expense-row__trend">{item.trend.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected_flow
                    .get()
                    .map(|flow| {
                        let margin = share_percent(flow.balance, flow.revenue);
                        view! {
                            <Modal
                                title=format!("{} Cash Flow", flow.month)
                                on_close=Callback::new(move |_| set_selected_flow.set(None))
                            >
                                <div class="detail-grid">
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Revenue"</span>
                                        <span>{format!("€{}", flow.revenue)}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Expenses"</span>
                                        <span>{format!("€{}", flow.expenses)}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Balance"</span>
                                        <span>{format!("€{}", flow.balance)}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Margin"</span>
                                        <span>{format!("{:.1}%", margin)}</span>
                                    </div>
                                </div>
                            </Modal>
                        }
                    })
            }}

            {move || {
                show_wallets
                    .get()
                    .then(|| {
                        view! {
                            <Modal
                                title="Wallet Overview"
                                on_close=Callback::new(move |_| set_show_wallets.set(false))
                            >
                                <div class="detail-grid">
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Active Wallets"</span>
                                        <span>{wallet.active_wallets}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Inactive Wallets"</span>
                                        <span>{wallet.inactive_wallets}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Total Balance"</span>
                                        <span>{wallet.total_balance.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Avg. Balance"</span>
                                        <span>{wallet.avg_balance.clone()}</span>
                                    </div>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
