use crate::shared::export::CsvExportable;
use contracts::domain::order::Participant;
use contracts::domain::request::{DeliveryRequest, NegotiationSummary, PackageSummary, RequestId};
use once_cell::sync::Lazy;

static REQUESTS: Lazy<Vec<DeliveryRequest>> = Lazy::new(|| {
    vec![
        DeliveryRequest {
            id: RequestId::new("#REQ001"),
            date: "2024-03-15".to_string(),
            departure: "Paris".to_string(),
            arrival: "London".to_string(),
            initial_price: "€400".to_string(),
            final_price: "€300".to_string(),
            status: "Converted".to_string(),
            sender: Participant {
                name: "Sophie Martin".to_string(),
                avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150"
                    .to_string(),
            },
            package: PackageSummary {
                weight_kg: 25,
                letters: 0,
                description: "Personal items and clothes".to_string(),
            },
            negotiation: NegotiationSummary {
                offers: 3,
                duration: "2 days".to_string(),
                price_reduction: "25%".to_string(),
            },
        },
        DeliveryRequest {
            id: RequestId::new("#REQ002"),
            date: "2024-03-15".to_string(),
            departure: "Lyon".to_string(),
            arrival: "Marseille".to_string(),
            initial_price: "€180".to_string(),
            final_price: "€120".to_string(),
            status: "Pending".to_string(),
            sender: Participant {
                name: "Marie Dubois".to_string(),
                avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150"
                    .to_string(),
            },
            package: PackageSummary {
                weight_kg: 15,
                letters: 2,
                description: "Documents and small package".to_string(),
            },
            negotiation: NegotiationSummary {
                offers: 2,
                duration: "1 day".to_string(),
                price_reduction: "33%".to_string(),
            },
        },
        DeliveryRequest {
            id: RequestId::new("#REQ003"),
            date: "2024-03-13".to_string(),
            departure: "Bordeaux".to_string(),
            arrival: "Paris".to_string(),
            initial_price: "€120".to_string(),
            final_price: "€120".to_string(),
            status: "Cancelled".to_string(),
            sender: Participant {
                name: "Pierre Martin".to_string(),
                avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150"
                    .to_string(),
            },
            package: PackageSummary {
                weight_kg: 8,
                letters: 5,
                description: "Books and letters".to_string(),
            },
            negotiation: NegotiationSummary {
                offers: 0,
                duration: "4 hours".to_string(),
                price_reduction: "0%".to_string(),
            },
        },
    ]
});

pub fn all() -> &'static [DeliveryRequest] {
    &REQUESTS
}

impl CsvExportable for DeliveryRequest {
    fn headers() -> Vec<&'static str> {
        vec![
            "Request ID",
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
