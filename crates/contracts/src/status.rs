//! Status normalization and visual classification.
//!
//! Every list and detail view renders lifecycle status through the same
//! classifier so that a freeform label ("Delivered", "in transit",
//! "New Order") always resolves to the same icon and color token.

use serde::{Deserialize, Serialize};

/// Semantic category resolved from a freeform status label.
///
/// `Unknown` is a valid, expected output for any label outside the
/// recognized set, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    Delivered,
    Pending,
    Cancelled,
    Accepted,
    InTransit,
    Unknown,
}

impl StatusCategory {
    /// Normalized lookup key for the category.
    pub fn code(&self) -> &'static str {
        match self {
            StatusCategory::Delivered => "delivered",
            StatusCategory::Pending => "pending",
            StatusCategory::Cancelled => "cancelled",
            StatusCategory::Accepted => "accepted",
            StatusCategory::InTransit => "in-transit",
            StatusCategory::Unknown => "unknown",
        }
    }

    /// Parse a normalized key. `Unknown` has no key of its own.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "delivered" => Some(StatusCategory::Delivered),
            "pending" => Some(StatusCategory::Pending),
            "cancelled" => Some(StatusCategory::Cancelled),
            "accepted" => Some(StatusCategory::Accepted),
            "in-transit" => Some(StatusCategory::InTransit),
            _ => None,
        }
    }

    /// The five recognized categories, in display order.
    pub fn all_known() -> [StatusCategory; 5] {
        [
            StatusCategory::Delivered,
            StatusCategory::Pending,
            StatusCategory::Cancelled,
            StatusCategory::Accepted,
            StatusCategory::InTransit,
        ]
    }
}

/// Icon/color pairing for a status category. Pure data; the rendering
/// layer decides what an icon id or color token maps to visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub category: StatusCategory,
    pub icon_id: &'static str,
    pub color_token: &'static str,
}

impl StatusCategory {
    /// Fixed presentation lookup for a category.
    pub fn presentation(self) -> StatusPresentation {
        let (icon_id, color_token) = match self {
            StatusCategory::Delivered => ("check-circle", "emerald"),
            StatusCategory::Pending => ("clock", "blue"),
            StatusCategory::Cancelled => ("x-circle", "rose"),
            StatusCategory::Accepted => ("check-circle", "primary"),
            StatusCategory::InTransit => ("send", "amber"),
            StatusCategory::Unknown => ("alert-circle", "neutral"),
        };
        StatusPresentation {
            category: self,
            icon_id,
            color_token,
        }
    }
}

/// Normalize a freeform label into a lookup key.
///
/// Lowercases the whole label, then replaces only the FIRST space with a
/// hyphen. Labels with more than one space are therefore only partially
/// normalized ("a b c" -> "a-b c"); this matches the historical behavior
/// the stored presentation choices depend on, so it is kept as-is.
fn normalize(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}

/// Classify a freeform status label.
///
/// Total and side-effect-free: any input string, including the empty
/// string, resolves to a presentation. Unrecognized labels fall back to
/// [`StatusCategory::Unknown`] with a neutral icon and color.
pub fn classify(label: &str) -> StatusPresentation {
    StatusCategory::from_code(&normalize(label))
        .unwrap_or(StatusCategory::Unknown)
        .presentation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve_in_any_casing() {
        assert_eq!(classify("DELIVERED").category, StatusCategory::Delivered);
        assert_eq!(classify("Delivered").category, StatusCategory::Delivered);
        assert_eq!(classify("pending").category, StatusCategory::Pending);
        assert_eq!(classify("Cancelled").category, StatusCategory::Cancelled);
        assert_eq!(classify("Accepted").category, StatusCategory::Accepted);
        assert_eq!(classify("ACCEPTED").category, StatusCategory::Accepted);
        assert_eq!(classify("in transit").category, StatusCategory::InTransit);
        assert_eq!(classify("In Transit").category, StatusCategory::InTransit);
    }

    #[test]
    fn unrecognized_labels_fall_back_to_unknown() {
        assert_eq!(classify("Foo").category, StatusCategory::Unknown);
        assert_eq!(classify("").category, StatusCategory::Unknown);
        assert_eq!(classify("  ").category, StatusCategory::Unknown);
        assert_eq!(classify("Converted").category, StatusCategory::Unknown);
    }

    #[test]
    fn only_the_first_space_is_replaced() {
        // "new order" -> "new-order": no such key, so Unknown.
        assert_eq!(classify("new order").category, StatusCategory::Unknown);
        // "a b c" -> "a-b c": the second space survives normalization.
        assert_eq!(normalize("a b c"), "a-b c");
        assert_eq!(classify("a b c").category, StatusCategory::Unknown);
    }

    #[test]
    fn classification_is_deterministic() {
        for label in ["Delivered", "in transit", "new order", "", "Foo"] {
            assert_eq!(classify(label), classify(label));
        }
    }

    #[test]
    fn normalization_is_idempotent_for_single_space_labels() {
        for label in ["In Transit", "Delivered", "new order"] {
            let once = normalize(label);
            assert_eq!(normalize(&once), once);
            assert_eq!(classify(&once).category, classify(label).category);
        }
        // With two spaces a second pass keeps substituting; the known
        // keys are all single-hyphen so this never affects matching.
        assert_eq!(normalize(&normalize("a b c")), "a-b-c");
    }

    #[test]
    fn unknown_gets_neutral_presentation() {
        let p = classify("nonsense");
        assert_eq!(p.icon_id, "alert-circle");
        assert_eq!(p.color_token, "neutral");
    }

    #[test]
    fn presentation_follows_category() {
        assert_eq!(classify("Delivered").color_token, "emerald");
        assert_eq!(classify("Pending").icon_id, "clock");
        assert_eq!(classify("In Transit").icon_id, "send");
        assert_eq!(classify("cancelled").color_token, "rose");
    }

    #[test]
    fn codes_round_trip_for_known_categories() {
        for cat in StatusCategory::all_known() {
            assert_eq!(StatusCategory::from_code(cat.code()), Some(cat));
        }
        assert_eq!(StatusCategory::from_code("unknown"), None);
    }
}
