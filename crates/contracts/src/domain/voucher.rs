use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a voucher's discount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherKind {
    Percentage,
    Fixed,
}

impl VoucherKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            VoucherKind::Percentage => "Percentage",
            VoucherKind::Fixed => "Fixed",
        }
    }
}

/// A promotional code. Monetary fields are display strings ("€50");
/// `expiry_date` is ISO `yyyy-mm-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    pub code: String,
    pub kind: VoucherKind,
    pub discount: String,
    #[serde(rename = "usageLimit")]
    pub usage_limit: u32,
    pub used: u32,
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,
    #[serde(rename = "minAmount")]
    pub min_amount: String,
    #[serde(rename = "maxDiscount")]
    pub max_discount: String,
}

impl Voucher {
    /// Share of the usage limit consumed, in percent. 0 for a zero limit.
    pub fn usage_rate(&self) -> f64 {
        if self.usage_limit == 0 {
            return 0.0;
        }
        self.used as f64 / self.usage_limit as f64 * 100.0
    }

    /// A voucher is expired once past its expiry date or fully used.
    /// An unparseable expiry date never expires a voucher on its own.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        if self.used >= self.usage_limit {
            return true;
        }
        match NaiveDate::parse_from_str(&self.expiry_date, "%Y-%m-%d") {
            Ok(expiry) => today > expiry,
            Err(_) => false,
        }
    }

    /// Status label as the vouchers table shows it.
    pub fn status_label(&self, today: NaiveDate) -> &'static str {
        if self.is_expired_on(today) {
            "expired"
        } else {
            "active"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voucher(limit: u32, used: u32, expiry: &str) -> Voucher {
        Voucher {
            code: "WELCOME2024".to_string(),
            kind: VoucherKind::Percentage,
            discount: "20%".to_string(),
            usage_limit: limit,
            used,
            expiry_date: expiry.to_string(),
            min_amount: "€50".to_string(),
            max_discount: "€100".to_string(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn usage_rate_is_a_percentage() {
        assert_eq!(voucher(1000, 450, "2024-12-31").usage_rate(), 45.0);
        assert_eq!(voucher(0, 0, "2024-12-31").usage_rate(), 0.0);
    }

    #[test]
    fn expiry_is_by_date_or_exhaustion() {
        let v = voucher(500, 500, "2024-08-31");
        assert!(v.is_expired_on(day("2024-06-01")));

        let v = voucher(1000, 450, "2024-12-31");
        assert!(!v.is_expired_on(day("2024-12-31")));
        assert!(v.is_expired_on(day("2025-01-01")));
    }

    #[test]
    fn bad_expiry_date_does_not_expire() {
        let v = voucher(100, 10, "soon");
        assert!(!v.is_expired_on(day("2030-01-01")));
        assert_eq!(v.status_label(day("2030-01-01")), "active");
    }
}
