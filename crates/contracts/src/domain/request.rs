use super::order::Participant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery request id, "#REQ"-prefixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        if s.starts_with("#REQ") {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("Invalid request id: {}", s))
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the sender wants carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    #[serde(rename = "weight")]
    pub weight_kg: u32,
    pub letters: u32,
    pub description: String,
}

/// Aggregate view of the negotiation that ran on a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationSummary {
    pub offers: u32,
    pub duration: String,
    #[serde(rename = "priceReduction")]
    pub price_reduction: String,
}

/// A sender's open call for a traveler, before it converts to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    pub id: RequestId,
    pub date: String,
    pub departure: String,
    pub arrival: String,
    #[serde(rename = "initialPrice")]
    pub initial_price: String,
    #[serde(rename = "finalPrice")]
    pub final_price: String,
    pub status: String,
    pub sender: Participant,
    pub package: PackageSummary,
    pub negotiation: NegotiationSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_requires_req_prefix() {
        assert!(RequestId::from_string("#REQ001").is_ok());
        assert!(RequestId::from_string("#UPK245").is_err());
    }
}
