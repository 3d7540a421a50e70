pub fn salon_segments(slug: &str) -> [&str; 3] {
    ["public", "salons", slug]
}

pub fn metrics_segments(slug: &str) -> [&str; 4] {
    ["public", "salons", slug, "metrics"]
}

pub fn health_segments() -> [&'static str; 1] {
    ["health"]
}
