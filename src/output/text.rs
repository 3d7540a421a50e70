use crate::api::models::{Metrics, Salon};
use crate::error::AppResult;
use crate::page::ViewState;

pub fn print_block(block: &str) -> AppResult<()> {
    println!("{block}");
    Ok(())
}

pub fn state_line(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "loading".to_string(),
        ViewState::Error { message } => format!("error: {message}"),
        ViewState::Ready { salon, metrics } => {
            let metrics = if metrics.is_some() {
                "with metrics"
            } else {
                "metrics pending"
            };
            format!("ready: {} ({metrics})", salon.name)
        }
    }
}

pub fn profile_block(salon: &Salon, metrics: Option<&Metrics>) -> String {
    let mut lines = vec![salon.name.clone()];
    if !salon.slogan.is_empty() {
        lines.push(format!("  {}", salon.slogan));
    }
    lines.push(String::new());

    let availability = if salon.enabled { "" } else { ", disabled" };
    lines.push(format!(
        "   slug: {} [{}{availability}]",
        salon.slug, salon.status
    ));
    for (label, value) in [
        ("city", &salon.city),
        ("phone", &salon.phone),
        ("logo", &salon.logo_url),
        ("cover", &salon.cover_url),
    ] {
        if !value.is_empty() {
            lines.push(format!("   {label}: {value}"));
        }
    }

    if !salon.description.is_empty() {
        lines.push(String::new());
        lines.push(format!("   {}", salon.description));
    }

    if let Some(metrics) = metrics {
        lines.push(String::new());
        lines.push(format!("   bookings: {}", metrics.bookings_count));
        lines.push(format!("   revenue: {}", format_amount(metrics.revenue_total)));
        lines.push(format!("   revenue (30d): {}", format_amount(metrics.revenue_30d)));
        lines.push(format!("   average check: {}", format_amount(metrics.avg_check)));
    }

    lines.join("\n")
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salon() -> Salon {
        Salon {
            name: "Acme Spa".to_string(),
            slug: "acme-spa".to_string(),
            status: "active".to_string(),
            enabled: true,
            slogan: "Relax".to_string(),
            description: String::new(),
            city: "Lisbon".to_string(),
            phone: String::new(),
            logo_url: String::new(),
            cover_url: String::new(),
        }
    }

    #[test]
    fn skips_empty_fields() {
        let block = profile_block(&salon(), None);
        assert!(block.contains("city: Lisbon"));
        assert!(!block.contains("phone:"));
        assert!(!block.contains("bookings:"));
    }

    #[test]
    fn renders_metrics_amounts() {
        let metrics = Metrics {
            bookings_count: 42,
            revenue_total: 100000.0,
            revenue_30d: 5000.0,
            avg_check: 1200.5,
        };
        let block = profile_block(&salon(), Some(&metrics));

        assert!(block.contains("bookings: 42"));
        assert!(block.contains("revenue: 100000"));
        assert!(block.contains("average check: 1200.50"));
    }

    #[test]
    fn summarizes_states() {
        assert_eq!(state_line(&ViewState::Loading), "loading");
        assert_eq!(
            state_line(&ViewState::Error {
                message: "Slug not found".to_string()
            }),
            "error: Slug not found"
        );
    }
}
