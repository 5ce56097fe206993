use contracts::domain::feature::{FeatureFlag, FeatureImpact};
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

/// Category filter chips, in display order. "all" matches everything.
pub const CATEGORIES: [&str; 7] = [
    "all",
    "core",
    "security",
    "engagement",
    "payments",
    "communication",
    "pricing",
];

fn settings(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn flag(
    id: &str,
    name: &str,
    description: &str,
    icon_id: &str,
    enabled: bool,
    category: &str,
    impact: FeatureImpact,
    settings: Map<String, Value>,
) -> FeatureFlag {
    FeatureFlag {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon_id: icon_id.to_string(),
        enabled,
        category: category.to_string(),
        impact,
        settings,
    }
}

static FLAGS: Lazy<Vec<FeatureFlag>> = Lazy::new(|| {
    vec![
        flag(
            "real-time-tracking",
            "Real-time Package Tracking",
            "Live GPS tracking of packages while they travel",
            "map",
            true,
            "core",
            FeatureImpact::High,
            settings(&[
                ("updateInterval", json!(30)),
                ("accuracyThreshold", json!(100)),
            ]),
        ),
        flag(
            "push-notifications",
            "Smart Notifications",
            "Contextual push notifications for delivery events",
            "bell",
            true,
            "engagement",
            FeatureImpact::Medium,
            settings(&[
                ("deliveryUpdates", json!(true)),
                ("promotions", json!(true)),
                ("nearbyAlerts", json!(true)),
            ]),
        ),
        flag(
            "instant-quotes",
            "Dynamic Pricing",
            "Demand-based price suggestions at request time",
            "zap",
            false,
            "pricing",
            FeatureImpact::High,
            settings(&[
                ("demandMultiplier", json!(1.5)),
                ("minPricePerKm", json!(0.5)),
            ]),
        ),
        flag(
            "secure-payments",
            "Secure Transactions",
            "Escrow payments released on delivery confirmation",
            "shield",
            true,
            "security",
            FeatureImpact::Critical,
            settings(&[
                ("maxTransactionLimit", json!(5000)),
                ("requireVerification", json!(true)),
            ]),
        ),
        flag(
            "loyalty-program",
            "Rewards Program",
            "Points for completed deliveries, redeemable as discounts",
            "gift",
            false,
            "engagement",
            FeatureImpact::Medium,
            settings(&[
                ("pointsPerEuro", json!(10)),
                ("minimumRedemption", json!(1000)),
            ]),
        ),
        flag(
            "chat",
            "In-app Messaging",
            "Direct messaging between senders and travelers",
            "message-square",
            true,
            "communication",
            FeatureImpact::High,
            settings(&[("mediaSharing", json!(true)), ("retentionDays", json!(30))]),
        ),
        flag(
            "verification",
            "ID Verification",
            "Identity document checks for traveler onboarding",
            "user-check",
            true,
            "security",
            FeatureImpact::Critical,
            settings(&[
                ("requireSelfie", json!(true)),
                (
                    "documentTypes",
                    json!(["passport", "id_card", "drivers_license"]),
                ),
            ]),
        ),
        flag(
            "wallet",
            "Digital Wallet",
            "In-platform balance for payouts and refunds",
            "wallet",
            true,
            "payments",
            FeatureImpact::High,
            settings(&[
                ("maxBalance", json!(10000)),
                ("instantTransfers", json!(true)),
            ]),
        ),
        flag(
            "package-photos",
            "Package Photos",
            "Mandatory photos of packages at handover and delivery",
            "camera",
            true,
            "core",
            FeatureImpact::Medium,
            settings(&[
                ("minPhotos", json!(2)),
                ("maxPhotos", json!(5)),
                ("compressionQuality", json!(0.8)),
            ]),
        ),
        flag(
            "route-matching",
            "Smart Route Matching",
            "Automatic matching of requests to traveler routes",
            "globe",
            true,
            "core",
            FeatureImpact::High,
            settings(&[
                ("maxDetourPercent", json!(15)),
                ("minMatchScore", json!(0.8)),
            ]),
        ),
        flag(
            "minimum-price",
            "Minimum Price Threshold",
            "Floor prices per document and per kilogram",
            "dollar-sign",
            true,
            "pricing",
            FeatureImpact::High,
            settings(&[("perDocMinimum", json!(5)), ("perKgMinimum", json!(5))]),
        ),
        flag(
            "protection-fee",
            "Protection Fee Percentage",
            "Platform protection fee applied to each transaction",
            "percent",
            true,
            "pricing",
            FeatureImpact::Critical,
            settings(&[("percentage", json!(5))]),
        ),
    ]
});

pub fn all() -> &'static [FeatureFlag] {
    &FLAGS
}

/// Badge color for an impact level.
pub fn impact_color_token(impact: FeatureImpact) -> &'static str {
    match impact {
        FeatureImpact::Critical => "rose",
        FeatureImpact::High => "amber",
        FeatureImpact::Medium => "blue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flag_category_is_a_known_chip() {
        for flag in all() {
            assert!(
                CATEGORIES.contains(&flag.category.as_str()),
                "unknown category {}",
                flag.category
            );
        }
    }

    #[test]
    fn flag_ids_are_unique() {
        let mut ids: Vec<_> = all().iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }
}
