use crate::shared::export::CsvExportable;
use contracts::domain::voucher::{Voucher, VoucherKind};
use once_cell::sync::Lazy;

fn voucher(
    code: &str,
    kind: VoucherKind,
    discount: &str,
    usage_limit: u32,
    used: u32,
    expiry_date: &str,
    min_amount: &str,
    max_discount: &str,
) -> Voucher {
    Voucher {
        code: code.to_string(),
        kind,
        discount: discount.to_string(),
        usage_limit,
        used,
        expiry_date: expiry_date.to_string(),
        min_amount: min_amount.to_string(),
        max_discount: max_discount.to_string(),
    }
}

static VOUCHERS: Lazy<Vec<Voucher>> = Lazy::new(|| {
    vec![
        voucher(
            "WELCOME2024",
            VoucherKind::Percentage,
            "20%",
            1_000,
            450,
            "2024-12-31",
            "€50",
            "€100",
        ),
        voucher(
            "SUMMER50",
            VoucherKind::Fixed,
            "€50",
            500,
            500,
            "2024-08-31",
            "€200",
            "€50",
        ),
        voucher(
            "FREESHIP",
            VoucherKind::Percentage,
            "100%",
            200,
            150,
            "2024-06-30",
            "€20",
            "€30",
        ),
    ]
});

pub fn all() -> &'static [Voucher] {
    &VOUCHERS
}

/// (label, value) trio shown beside the voucher stat cards.
pub const VOUCHER_STATS: [(&str, &str); 3] = [
    ("Total Savings", "€24,500"),
    ("Avg. Discount", "€32.50"),
    ("Usage Rate", "68%"),
];

impl CsvExportable for Voucher {
    fn headers() -> Vec<&'static str> {
        vec![
            "Code", "Type", "Discount", "Usage Limit", "Used", "Expiry Date", "Min Amount",
            "Max Discount",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.kind.display_name().to_string(),
            self.discount.clone(),
            self.usage_limit.to_string(),
            self.used.to_string(),
            self.expiry_date.clone(),
            self.min_amount.clone(),
            self.max_discount.clone(),
        ]
    }
}
