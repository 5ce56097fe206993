use contracts::domain::finance::{MonthlyGrowth, PopularRoute};
use once_cell::sync::Lazy;

static MONTHLY_GROWTH: Lazy<Vec<MonthlyGrowth>> = Lazy::new(|| {
    [
        ("Jan", 1_250, 850, 42_500),
        ("Feb", 1_500, 920, 48_000),
        ("Mar", 1_800, 1_100, 55_000),
        ("Apr", 2_200, 1_350, 67_500),
        ("May", 2_600, 1_580, 79_000),
        ("Jun", 3_100, 1_850, 92_500),
        ("Jul", 3_700, 2_200, 110_000),
        ("Aug", 4_400, 2_600, 130_000),
        ("Sep", 5_200, 3_100, 155_000),
        ("Oct", 6_100, 3_700, 185_000),
        ("Nov", 7_200, 4_400, 220_000),
        ("Dec", 8_500, 5_200, 260_000),
    ]
    .iter()
    .map(|(month, users, orders, revenue)| MonthlyGrowth {
        month: month.to_string(),
        users: *users,
        orders: *orders,
        revenue: *revenue,
    })
    .collect()
});

static POPULAR_ROUTES: Lazy<Vec<PopularRoute>> = Lazy::new(|| {
    [
        ("Paris", "London", "2,450 kg", "€29,400", 185, "€12/kg", "+24%"),
        ("Lyon", "Marseille", "1,850 kg", "€18,500", 142, "€10/kg", "+18%"),
        ("Bordeaux", "Paris", "1,650 kg", "€16,500", 128, "€10/kg", "+15%"),
    ]
    .iter()
    .map(
        |(departure, arrival, volume, revenue, travelers, avg_price, growth)| PopularRoute {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            volume: volume.to_string(),
            revenue: revenue.to_string(),
            travelers: *travelers,
            avg_price: avg_price.to_string(),
            growth: growth.to_string(),
        },
    )
    .collect()
});

pub fn monthly_growth() -> &'static [MonthlyGrowth] {
    &MONTHLY_GROWTH
}

pub fn popular_routes() -> &'static [PopularRoute] {
    &POPULAR_ROUTES
}
