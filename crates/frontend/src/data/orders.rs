use crate::shared::export::CsvExportable;
use contracts::domain::order::{Order, OrderId, Participant};
use once_cell::sync::Lazy;

fn participant(name: &str, avatar_url: &str) -> Participant {
    Participant {
        name: name.to_string(),
        avatar_url: avatar_url.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    date: &str,
    departure: &str,
    arrival: &str,
    weight_kg: u32,
    letters: u32,
    price: &str,
    status: &str,
    sender: Participant,
    traveler: Participant,
) -> Order {
    Order {
        id: OrderId::new(id),
        date: date.to_string(),
        departure: departure.to_string(),
        arrival: arrival.to_string(),
        weight_kg,
        letters,
        price: price.to_string(),
        status: status.to_string(),
        sender,
        traveler,
    }
}

static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        order(
            "#UPK245",
            "2024-03-15",
            "Paris",
            "London",
            25,
            0,
            "€300",
            "New Order",
            participant(
                "Sophie Martin",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150",
            ),
            participant(
                "Thomas Bernard",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150",
            ),
        ),
        order(
            "#UPK244",
            "2024-03-15",
            "Lyon",
            "Marseille",
            15,
            2,
            "€120",
            "Handover",
            participant(
                "Marie Dubois",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150",
            ),
            participant(
                "Jean Dupont",
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150",
            ),
        ),
        order(
            "#UPK243",
            "2024-03-14",
            "Bordeaux",
            "Paris",
            8,
            5,
            "€80",
            "Delivered",
            participant(
                "Pierre Martin",
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150",
            ),
            participant(
                "Alice Rousseau",
                "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150",
            ),
        ),
        order(
            "#UPK242",
            "2024-03-14",
            "Nice",
            "Paris",
            12,
            0,
            "€95",
            "Cancelled",
            participant(
                "Lucas Petit",
                "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=150",
            ),
            participant(
                "Emma Laurent",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150",
            ),
        ),
    ]
});

pub fn all() -> &'static [Order] {
    &ORDERS
}

/// (range, count, percentage)
pub const WEIGHT_DISTRIBUTION: [(&str, u32, u32); 4] = [
    ("0-5 kg", 450, 45),
    ("5-10 kg", 300, 30),
    ("10-20 kg", 150, 15),
    ("20+ kg", 100, 10),
];

/// (type, count, percentage)
pub const DOCUMENT_DISTRIBUTION: [(&str, u32, u32); 3] = [
    ("Letters", 850, 45),
    ("Documents", 650, 35),
    ("Packages", 380, 20),
];

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec![
            "Order ID", "Date", "Departure", "Arrival", "Weight", "Letters", "Price", "Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.departure.clone(),
            self.arrival.clone(),
            self.weight_kg.to_string(),
            self.letters.to_string(),
            self.price.clone(),
            self.status.clone(),
        ]
    }
}
