use serde::{Deserialize, Serialize};

/// Profile fields shared by clients and partners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "joinDate")]
    pub join_date: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
}

/// Usage stats shown on a client's detail card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStats {
    #[serde(rename = "totalOrders")]
    pub total_orders: u32,
    #[serde(rename = "totalSpent")]
    pub total_spent: String,
    #[serde(rename = "avgOrderValue")]
    pub avg_order_value: String,
    #[serde(rename = "lastOrder")]
    pub last_order: String,
}

/// A sender-side user of the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub stats: ClientStats,
}

/// Delivery performance stats shown on a partner's detail card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerStats {
    #[serde(rename = "cancelRate")]
    pub cancel_rate: f64,
    #[serde(rename = "completionRate")]
    pub completion_rate: f64,
    #[serde(rename = "responseTime")]
    pub response_time: String,
    pub rating: f64,
    #[serde(rename = "totalDeliveries")]
    pub total_deliveries: u32,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: String,
    #[serde(rename = "avgDeliveryTime")]
    pub avg_delivery_time: String,
}

/// A traveler who carries parcels for senders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub stats: PartnerStats,
}

/// One row of a per-country distribution (clients or partners).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySlice {
    pub country: String,
    pub count: u32,
}
