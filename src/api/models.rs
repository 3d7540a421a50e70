use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Salon {
    pub name: String,
    pub slug: String,
    pub status: String,
    pub enabled: bool,
    pub slogan: String,
    pub description: String,
    pub city: String,
    pub phone: String,
    pub logo_url: String,
    pub cover_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub bookings_count: u64,
    pub revenue_total: f64,
    pub revenue_30d: f64,
    pub avg_check: f64,
}
