use super::order::Participant;
use super::request::PackageSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offer id, "#OFF"-prefixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId(String);

impl OfferId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        if s.starts_with("#OFF") {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("Invalid offer id: {}", s))
        }
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Negotiation summary for an offer (round-based, unlike requests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferNegotiation {
    pub rounds: u32,
    pub duration: String,
    #[serde(rename = "priceReduction")]
    pub price_reduction: String,
}

/// A traveler's counter-proposal against a delivery request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub date: String,
    pub departure: String,
    pub arrival: String,
    #[serde(rename = "initialPrice")]
    pub initial_price: String,
    #[serde(rename = "finalPrice")]
    pub final_price: String,
    pub status: String,
    pub sender: Participant,
    pub traveler: Participant,
    pub package: PackageSummary,
    pub negotiation: OfferNegotiation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_id_requires_off_prefix() {
        assert!(OfferId::from_string("#OFF001").is_ok());
        assert!(OfferId::from_string("#REQ001").is_err());
    }
}
