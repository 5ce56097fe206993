use serde::{Deserialize, Serialize};

/// Revenue/expense/balance triple for one month, in whole euros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFlow {
    pub month: String,
    pub revenue: i64,
    pub expenses: i64,
    pub balance: i64,
}

/// Platform growth series used on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyGrowth {
    pub month: String,
    pub users: u32,
    pub orders: u32,
    pub revenue: i64,
}

/// One slice of the revenue distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSlice {
    pub category: String,
    pub value: i64,
    pub color: String,
}

/// One line of the operating expense breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub category: String,
    pub amount: i64,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletStats {
    #[serde(rename = "activeWallets")]
    pub active_wallets: u32,
    #[serde(rename = "totalBalance")]
    pub total_balance: String,
    #[serde(rename = "avgBalance")]
    pub avg_balance: String,
    #[serde(rename = "inactiveWallets")]
    pub inactive_wallets: u32,
}

/// A high-volume route as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularRoute {
    pub departure: String,
    pub arrival: String,
    pub volume: String,
    pub revenue: String,
    pub travelers: u32,
    #[serde(rename = "avgPrice")]
    pub avg_price: String,
    pub growth: String,
}

/// Share of `value` within `total`, in percent. 0 for an empty total.
pub fn share_percent(value: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    value as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_percent_handles_zero_total() {
        assert_eq!(share_percent(10, 0), 0.0);
        assert_eq!(share_percent(25, 100), 25.0);
    }
}
