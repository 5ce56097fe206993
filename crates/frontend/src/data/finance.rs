use contracts::domain::finance::{ExpenseItem, MonthlyFlow, RevenueSlice, WalletStats};
use once_cell::sync::Lazy;

static MONTHLY_FLOWS: Lazy<Vec<MonthlyFlow>> = Lazy::new(|| {
    [
        ("Jan", 42_500, 35_000, 7_500),
        ("Feb", 38_000, 31_000, 7_000),
        ("Mar", 45_500, 37_000, 8_500),
        ("Apr", 52_000, 43_000, 9_000),
        ("May", 48_000, 40_000, 8_000),
        ("Jun", 55_000, 45_000, 10_000),
    ]
    .iter()
    .map(|(month, revenue, expenses, balance)| MonthlyFlow {
        month: month.to_string(),
        revenue: *revenue,
        expenses: *expenses,
        balance: *balance,
    })
    .collect()
});

static REVENUE_DISTRIBUTION: Lazy<Vec<RevenueSlice>> = Lazy::new(|| {
    [
        ("User Payments", 495_000, "#22BB9C"),
        ("Third-party Services", 85_000, "#4ECDC4"),
        ("Platform Fees", 66_000, "#FFD300"),
        ("Other Income", 24_000, "#6B7280"),
    ]
    .iter()
    .map(|(category, value, color)| RevenueSlice {
        category: category.to_string(),
        value: *value,
        color: color.to_string(),
    })
    .collect()
});

static EXPENSE_BREAKDOWN: Lazy<Vec<ExpenseItem>> = Lazy::new(|| {
    [
        ("Payment Processing", 12_500, "+2.5%"),
        ("Server Costs", 8_500, "-1.2%"),
        ("Third-party APIs", 4_500, "+0.8%"),
        ("Support Services", 3_500, "0%"),
    ]
    .iter()
    .map(|(category, amount, trend)| ExpenseItem {
        category: category.to_string(),
        amount: *amount,
        trend: trend.to_string(),
    })
    .collect()
});

static WALLET_STATS: Lazy<WalletStats> = Lazy::new(|| WalletStats {
    active_wallets: 2_845,
    total_balance: "€490,000".to_string(),
    avg_balance: "€172".to_string(),
    inactive_wallets: 450,
});

pub fn monthly_flows() -> &'static [MonthlyFlow] {
    &MONTHLY_FLOWS
}

pub fn revenue_distribution() -> &'static [RevenueSlice] {
    &REVENUE_DISTRIBUTION
}

pub fn expense_breakdown() -> &'static [ExpenseItem] {
    &EXPENSE_BREAKDOWN
}

pub fn wallet_stats() -> &'static WalletStats {
    &WALLET_STATS
}
