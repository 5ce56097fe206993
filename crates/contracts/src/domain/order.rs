use serde::{Deserialize, Serialize};
use std::fmt;

/// Order document id, "#UPK"-prefixed everywhere it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        if s.starts_with("#UPK") {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("Invalid order id: {}", s))
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person on either end of a delivery (sender or traveler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
}

/// A marketplace order: a sender's parcel matched to a traveler.
///
/// `status` is a freeform label authored by mock data or user edits and
/// is classified at render time (see [`crate::status`]). `date` is an
/// ISO `yyyy-mm-dd` string, `price` a display string such as "€300".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: String,
    pub departure: String,
    pub arrival: String,
    #[serde(rename = "kg")]
    pub weight_kg: u32,
    pub letters: u32,
    pub price: String,
    pub status: String,
    pub sender: Participant,
    pub traveler: Participant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_requires_upk_prefix() {
        assert!(OrderId::from_string("#UPK245").is_ok());
        assert!(OrderId::from_string("#REQ001").is_err());
        assert!(OrderId::from_string("UPK245").is_err());
    }

    #[test]
    fn order_id_displays_verbatim() {
        assert_eq!(OrderId::new("#UPK245").to_string(), "#UPK245");
    }
}
