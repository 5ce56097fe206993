use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How much of the product a flag touches when flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureImpact {
    Critical,
    High,
    Medium,
}

impl FeatureImpact {
    pub fn code(&self) -> &'static str {
        match self {
            FeatureImpact::Critical => "critical",
            FeatureImpact::High => "high",
            FeatureImpact::Medium => "medium",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FeatureImpact::Critical => "Critical",
            FeatureImpact::High => "High",
            FeatureImpact::Medium => "Medium",
        }
    }
}

/// A toggleable platform feature with its free-shape settings blob.
///
/// Settings are heterogeneous per feature (intervals, booleans,
/// multipliers), so they stay as a JSON map rather than a typed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlag {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "iconId")]
    pub icon_id: String,
    pub enabled: bool,
    pub category: String,
    pub impact: FeatureImpact,
    pub settings: Map<String, Value>,
}

impl FeatureFlag {
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn settings_lookup() {
        let mut settings = Map::new();
        settings.insert("updateInterval".to_string(), json!(30));
        let flag = FeatureFlag {
            id: "real-time-tracking".to_string(),
            name: "Real-time Package Tracking".to_string(),
            description: String::new(),
            icon_id: "map".to_string(),
            enabled: true,
            category: "core".to_string(),
            impact: FeatureImpact::High,
            settings,
        };
        assert_eq!(flag.setting("updateInterval"), Some(&json!(30)));
        assert_eq!(flag.setting("missing"), None);
    }
}
