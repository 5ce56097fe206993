use crate::data;
use crate::shared::components::{ExportButton, Modal, PageHeader, StatCard};
use crate::shared::date_utils::today;
use crate::shared::export::build_csv;
use crate::shared::icons::icon;
use contracts::domain::voucher::Voucher;
use leptos::prelude::*;

const STATUS_FILTERS: [&str; 3] = ["all", "active", "expired"];

fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[component]
pub fn VouchersPage() -> impl IntoView {
    let (filter, set_filter) = signal(0usize);
    let (selected, set_selected) = signal(Option::<&'static Voucher>::None);

    let filtered = move || {
        let wanted = STATUS_FILTERS[filter.get()];
        let reference = today();
        data::vouchers::all()
            .iter()
            .filter(|v| wanted == "all" || v.status_label(reference) == wanted)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page page--vouchers">
            <PageHeader title="Vouchers" subtitle="Promotional codes and their usage">
                <button
                    class="btn btn--primary"
                    on:click=move |_| log::info!("voucher creation requested")
                >
                    {icon("plus")}
                    <span>"Create Voucher"</span>
                </button>
                <ExportButton
                    csv=Callback::new(move |_| build_csv(data::vouchers::all()))
                    filename="vouchers.csv"
                />
            </PageHeader>

            <div class="stats-row">
                <StatCard title="Active Vouchers" value="24" trend=15.0 icon_name="ticket" />
                <StatCard
                    title="Total Usage"
                    value="1,234"
                    trend=8.0
                    icon_name="check"
                    accent="emerald"
                />
                <StatCard
                    title="Redeemed Value"
                    value="€24,500"
                    trend=11.0
                    icon_name="gift"
                    accent="secondary"
                />
            </div>

            <div class="panel-grid">
                <div class="panel panel--wide">
                    <div class="panel__toolbar">
                        <div class="tabs">
                            {STATUS_FILTERS
                                .iter()
                                .enumerate()
                                .map(|(i, label)| {
                                    view! {
                                        <button
                                            class=move || {
                                                if filter.get() == i {
                                                    "tab tab--active"
                                                } else {
                                                    "tab"
                                                }
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
                                <th>"Code"</th>
                                <th>"Type"</th>
                                <th>"Discount"</th>
                                <th>"Usage"</th>
                                <th>"Expires"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let reference = today();
                                filtered()
                                    .into_iter()
                                    .map(|voucher| {
                                        let status = voucher.status_label(reference);
                                        let status_class = if status == "active" {
                                            "pill pill--emerald"
                                        } else {
                                            "pill pill--rose"
                                        };
                                        view! {
                                            <tr
                                                class="table__row--clickable"
                                                on:click=move |_| set_selected.set(Some(voucher))
                                            >
                                                <td class="table__code">
                                                    {voucher.code.clone()}
                                                    <button
                                                        class="btn btn--icon"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            copy_to_clipboard(&voucher.code);
                                                        }
                                                    >
                                                        {icon("copy")}
                                                    </button>
                                                </td>
                                                <td>{voucher.kind.display_name()}</td>
                                                <td>{voucher.discount.clone()}</td>
                                                <td class="table__usage">
                                                    <div class="dist-row__track">
                                                        <div
                                                            class="dist-row__bar"
                                                            style:width=format!(
                                                                "{:.0}%",
                                                                voucher.usage_rate(),
                                                            )
                                                        ></div>
                                                    </div>
                                                    {format!(
                                                        "{}/{}",
                                                        voucher.used,
                                                        voucher.usage_limit,
                                                    )}
                                                </td>
                                                <td>{voucher.expiry_date.clone()}</td>
                                                <td>
                                                    <span class=status_class>{status}</span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h2 class="panel__title">"Voucher Stats"</h2>
                    {data::vouchers::VOUCHER_STATS
                        .iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="expense-row">
                                    <span class="expense-row__label">{*label}</span>
                                    <span class="expense-row__amount">{*value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|voucher| {
                        view! {
                            <Modal
                                title=voucher.code.clone()
                                on_close=Callback::new(move |_| set_selected.set(None))
                            >
                                <div class="detail-grid">
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Type"</span>
                                        <span>{voucher.kind.display_name()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Discount"</span>
                                        <span>{voucher.discount.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Usage"</span>
                                        <span>
                                            {format!("{}/{}", voucher.used, voucher.usage_limit)}
                                        </span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Expires"</span>
                                        <span>{voucher.expiry_date.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Min. Amount"</span>
                                        <span>{voucher.min_amount.clone()}</span>
                                    </div>
                                    <div class="detail-grid__item">
                                        <span class="detail-grid__label">"Max. Discount"</span>
                                        <span>{voucher.max_discount.clone()}</span>
                                    </div>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
