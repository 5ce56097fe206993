use crate::shared::export::CsvExportable;
use contracts::domain::offer::{Offer, OfferId, OfferNegotiation};
use contracts::domain::order::Participant;
use contracts::domain::request::PackageSummary;
use once_cell::sync::Lazy;

fn participant(name: &str, avatar_url: &str) -> Participant {
    Participant {
        name: name.to_string(),
        avatar_url: avatar_url.to_string(),
    }
}

static OFFERS: Lazy<Vec<Offer>> = Lazy::new(|| {
    vec![
        Offer {
            id: OfferId::new("#OFF001"),
            date: "2024-03-15".to_string(),
            departure: "Paris".to_string(),
            arrival: "London".to_string(),
            initial_price: "€350".to_string(),
            final_price: "€300".to_string(),
            status: "Converted".to_string(),
            sender: participant(
                "Sophie Martin",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150",
            ),
            traveler: participant(
                "Thomas Bernard",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150",
            ),
            package: PackageSummary {
                weight_kg: 25,
                letters: 0,
                description: "Personal items and clothes".to_string(),
            },
            negotiation: OfferNegotiation {
                rounds: 2,
                duration: "3 hours".to_string(),
                price_reduction: "14%".to_string(),
            },
        },
        Offer {
            id: OfferId::new("#OFF002"),
            date: "2024-03-15".to_string(),
            departure: "Lyon".to_string(),
            arrival: "Marseille".to_string(),
            initial_price: "€150".to_string(),
            final_price: "€120".to_string(),
            status: "Pending".to_string(),
            sender: participant(
                "Marie Dubois",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150",
            ),
            traveler: participant(
                "Jean Dupont",
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150",
            ),
            package: PackageSummary {
                weight_kg: 15,
                letters: 2,
                description: "Documents and small package".to_string(),
            },
            negotiation: OfferNegotiation {
                rounds: 1,
                duration: "1 hour".to_string(),
                price_reduction: "20%".to_string(),
            },
        },
        Offer {
            id: OfferId::new("#OFF003"),
            date: "2024-03-14".to_string(),
            departure: "Nice".to_string(),
            arrival: "Paris".to_string(),
            initial_price: "€110".to_string(),
            final_price: "€95".to_string(),
            status: "Accepted".to_string(),
            sender: participant(
                "Lucas Petit",
                "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=150",
            ),
            traveler: participant(
                "Emma Laurent",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150",
            ),
            package: PackageSummary {
                weight_kg: 12,
                letters: 0,
                description: "Small electronics".to_string(),
            },
            negotiation: OfferNegotiation {
                rounds: 3,
                duration: "5 hours".to_string(),
                price_reduction: "14%".to_string(),
            },
        },
    ]
});

pub fn all() -> &'static [Offer] {
    &OFFERS
}

impl CsvExportable for Offer {
    fn headers() -> Vec<&'static str> {
        vec![
            "Offer ID",
            "Date",
            "Departure",
            "Arrival",
            "Initial Price",
            "Final Price",
            "Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.departure.clone(),
            self.arrival.clone(),
            self.initial_price.clone(),
            self.final_price.clone(),
            self.status.clone(),
        ]
    }
}
