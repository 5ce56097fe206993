use crate::shared::export::CsvExportable;
use crate::shared::list_utils::{contains_ci, Searchable};
use contracts::domain::user::{Client, ClientStats, CountrySlice, Partner, PartnerStats, UserProfile};
use once_cell::sync::Lazy;

fn profile(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    join_date: &str,
    avatar_url: &str,
) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        join_date: join_date.to_string(),
        avatar_url: avatar_url.to_string(),
    }
}

static CLIENTS: Lazy<Vec<Client>> = Lazy::new(|| {
    vec![
        Client {
            profile: profile(
                "1",
                "Sophie Martin",
                "sophie.martin@email.com",
                "+33 6 12 34 56 78",
                "Paris, France",
                "March 15, 2024",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150",
            ),
            stats: ClientStats {
                total_orders: 24,
                total_spent: "€1,250".to_string(),
                avg_order_value: "€52".to_string(),
                last_order: "2 days ago".to_string(),
            },
        },
        Client {
            profile: profile(
                "2",
                "Thomas Bernard",
                "thomas.bernard@email.com",
                "+33 6 98 76 54 32",
                "Lyon, France",
                "March 14, 2024",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150",
            ),
            stats: ClientStats {
                total_orders: 18,
                total_spent: "€950".to_string(),
                avg_order_value: "€53".to_string(),
                last_order: "5 days ago".to_string(),
            },
        },
        Client {
            profile: profile(
                "3",
                "Marie Dubois",
                "marie.dubois@email.com",
                "+33 6 45 67 89 01",
                "Marseille, France",
                "March 10, 2024",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150",
            ),
            stats: ClientStats {
                total_orders: 31,
                total_spent: "€1,870".to_string(),
                avg_order_value: "€60".to_string(),
                last_order: "yesterday".to_string(),
            },
        },
        Client {
            profile: profile(
                "4",
                "Lucas Petit",
                "lucas.petit@email.com",
                "+33 6 23 45 67 89",
                "Nice, France",
                "February 28, 2024",
                "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=150",
            ),
            stats: ClientStats {
                total_orders: 9,
                total_spent: "€410".to_string(),
                avg_order_value: "€46".to_string(),
                last_order: "2 weeks ago".to_string(),
            },
        },
    ]
});

static PARTNERS: Lazy<Vec<Partner>> = Lazy::new(|| {
    vec![
        Partner {
            profile: profile(
                "1",
                "Sophie Martin",
                "sophie.martin@email.com",
                "+33 6 12 34 56 78",
                "Paris, France",
                "March 15, 2024",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150",
            ),
            stats: PartnerStats {
                cancel_rate: 2.5,
                completion_rate: 97.5,
                response_time: "15 min".to_string(),
                rating: 4.8,
                total_deliveries: 245,
                total_revenue: "€12,450".to_string(),
                avg_delivery_time: "2.5 days".to_string(),
            },
        },
        Partner {
            profile: profile(
                "2",
                "Thomas Bernard",
                "thomas.bernard@email.com",
                "+33 6 98 76 54 32",
                "Lyon, France",
                "March 14, 2024",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150",
            ),
            stats: PartnerStats {
                cancel_rate: 1.8,
                completion_rate: 98.2,
                response_time: "22 min".to_string(),
                rating: 4.9,
                total_deliveries: 198,
                total_revenue: "€9,900".to_string(),
                avg_delivery_time: "2.2 days".to_string(),
            },
        },
        Partner {
            profile: profile(
                "3",
                "Jean Dupont",
                "jean.dupont@email.com",
                "+33 6 11 22 33 44",
                "Bordeaux, France",
                "March 5, 2024",
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150",
            ),
            stats: PartnerStats {
                cancel_rate: 3.1,
                completion_rate: 96.9,
                response_time: "35 min".to_string(),
                rating: 4.6,
                total_deliveries: 112,
                total_revenue: "€5,600".to_string(),
                avg_delivery_time: "3.1 days".to_string(),
            },
        },
        Partner {
            profile: profile(
                "4",
                "Alice Rousseau",
                "alice.rousseau@email.com",
                "+33 6 55 66 77 88",
                "Toulouse, France",
                "February 20, 2024",
                "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150",
            ),
            stats: PartnerStats {
                cancel_rate: 0.9,
                completion_rate: 99.1,
                response_time: "12 min".to_string(),
                rating: 5.0,
                total_deliveries: 301,
                total_revenue: "€15,050".to_string(),
                avg_delivery_time: "1.9 days".to_string(),
            },
        },
    ]
});

pub fn clients() -> &'static [Client] {
    &CLIENTS
}

pub fn partners() -> &'static [Partner] {
    &PARTNERS
}

fn countries(rows: &[(&str, u32)]) -> Vec<CountrySlice> {
    rows.iter()
        .map(|(country, count)| CountrySlice {
            country: country.to_string(),
            count: *count,
        })
        .collect()
}

static CLIENT_COUNTRIES: Lazy<Vec<CountrySlice>> = Lazy::new(|| {
    countries(&[
        ("France", 2500),
        ("UK", 2000),
        ("Germany", 1800),
        ("Spain", 1500),
        ("Italy", 1200),
    ])
});

static PARTNER_COUNTRIES: Lazy<Vec<CountrySlice>> = Lazy::new(|| {
    countries(&[
        ("France", 450),
        ("UK", 380),
        ("Germany", 320),
        ("Spain", 280),
        ("Italy", 220),
    ])
});

pub fn client_countries() -> &'static [CountrySlice] {
    &CLIENT_COUNTRIES
}

pub fn partner_countries() -> &'static [CountrySlice] {
    &PARTNER_COUNTRIES
}

impl Searchable for Client {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.profile.name, filter)
            || contains_ci(&self.profile.email, filter)
            || contains_ci(&self.profile.address, filter)
    }
}

impl Searchable for Partner {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.profile.name, filter)
            || contains_ci(&self.profile.email, filter)
            || contains_ci(&self.profile.address, filter)
    }
}

impl CsvExportable for Client {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID", "Name", "Email", "Phone", "Address", "Join Date", "Total Orders", "Total Spent",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.profile.id.clone(),
            self.profile.name.clone(),
            self.profile.email.clone(),
            self.profile.phone.clone(),
            self.profile.address.clone(),
            self.profile.join_date.clone(),
            self.stats.total_orders.to_string(),
            self.stats.total_spent.clone(),
        ]
    }
}

impl CsvExportable for Partner {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Email",
            "Phone",
            "Address",
            "Join Date",
            "Rating",
            "Deliveries",
            "Revenue",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.profile.id.clone(),
            self.profile.name.clone(),
            self.profile.email.clone(),
            self.profile.phone.clone(),
            self.profile.address.clone(),
            self.profile.join_date.clone(),
            self.stats.rating.to_string(),
            self.stats.total_deliveries.to_string(),
            self.stats.total_revenue.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_search_covers_name_email_and_address() {
        let client = &clients()[0];
        assert!(client.matches_filter("sophie"));
        assert!(client.matches_filter("MARTIN@EMAIL"));
        assert!(client.matches_filter("paris"));
        assert!(!client.matches_filter("berlin"));
    }
}
