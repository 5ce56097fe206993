use crate::shared::icons::icon;
use leptos::prelude::*;

/// KPI card with a trend pill, used on every page's stats row.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    title: String,
    /// Preformatted display value ("8,500", "€490,000", "4.9/5")
    #[prop(into)]
    value: String,
    /// Change % relative to previous period
    trend: f64,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Accent token: "primary", "secondary", "emerald", "rose"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let card_class = move || {
        format!(
            "stat-card stat-card--{}",
            accent.get().unwrap_or_else(|| "primary".to_string())
        )
    };

    let (arrow, trend_class) = if trend > 0.0 {
        ("\u{2191}", "stat-card__trend stat-card__trend--up")
    } else if trend < 0.0 {
        ("\u{2193}", "stat-card__trend stat-card__trend--down")
    } else {
        ("", "stat-card__trend stat-card__trend--flat")
    };
    let trend_text = format!("{}{}%", arrow, trend.abs());

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__title">{title}</div>
                <div class="stat-card__value">
                    {value}
                    <span class=trend_class>{trend_text}</span>
                </div>
            </div>
        </div>
    }
}
