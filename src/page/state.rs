use serde::Serialize;

use crate::api::models::{Metrics, Salon};
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Error {
        message: String,
    },
    Ready {
        salon: Salon,
        metrics: Option<Metrics>,
    },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn salon(&self) -> Option<&Salon> {
        match self {
            ViewState::Ready { salon, .. } => Some(salon),
            _ => None,
        }
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        match self {
            ViewState::Ready { metrics, .. } => metrics.as_ref(),
            _ => None,
        }
    }
}

// Metrics that land before the salon wait in `early_metrics`.
#[derive(Debug)]
pub struct ProfilePage {
    state: ViewState,
    early_metrics: Option<Metrics>,
}

impl ProfilePage {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            early_metrics: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    // Both settle methods return true when the visible state changed.
    pub fn settle_salon(&mut self, result: Result<Salon, PageError>) -> bool {
        if !self.state.is_loading() {
            return false;
        }

        self.state = match result {
            Ok(salon) => ViewState::Ready {
                salon,
                metrics: self.early_metrics.take(),
            },
            Err(err) => {
                self.early_metrics = None;
                ViewState::Error {
                    message: err.to_string(),
                }
            }
        };
        true
    }

    pub fn settle_metrics(&mut self, incoming: Metrics) -> bool {
        match &mut self.state {
            ViewState::Loading => {
                self.early_metrics = Some(incoming);
                false
            }
            ViewState::Ready { metrics, .. } => {
                *metrics = Some(incoming);
                true
            }
            ViewState::Error { .. } => false,
        }
    }
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self::new()
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
            slogan: String::new(),
            description: String::new(),
            city: String::new(),
            phone: String::new(),
            logo_url: String::new(),
            cover_url: String::new(),
        }
    }

    fn metrics(bookings_count: u64) -> Metrics {
        Metrics {
            bookings_count,
            revenue_total: 0.0,
            revenue_30d: 0.0,
            avg_check: 0.0,
        }
    }

    #[test]
    fn early_metrics_attach_when_salon_arrives() {
        let mut page = ProfilePage::new();
        assert!(!page.settle_metrics(metrics(3)));
        assert!(page.state().is_loading());

        assert!(page.settle_salon(Ok(salon())));
        assert_eq!(page.state().metrics().map(|m| m.bookings_count), Some(3));
    }

    #[test]
    fn late_metrics_keep_salon_fields() {
        let mut page = ProfilePage::new();
        page.settle_salon(Ok(salon()));
        assert!(page.state().metrics().is_none());

        assert!(page.settle_metrics(metrics(9)));
        assert_eq!(page.state().salon(), Some(&salon()));
        assert_eq!(page.state().metrics().map(|m| m.bookings_count), Some(9));
    }

    #[test]
    fn error_ignores_metrics() {
        let mut page = ProfilePage::new();
        page.settle_metrics(metrics(1));
        page.settle_salon(Err(PageError::SlugMissing));

        assert!(!page.settle_metrics(metrics(2)));
        assert_eq!(page.state().error_message(), Some("Slug not found"));
    }

    #[test]
    fn salon_settles_once() {
        let mut page = ProfilePage::new();
        page.settle_salon(Ok(salon()));

        assert!(!page.settle_salon(Err(PageError::SlugMissing)));
        assert!(page.state().is_ready());
    }

    #[test]
    fn serializes_with_state_tag() {
        let value = serde_json::to_value(ViewState::Error {
            message: "Salon not found".to_string(),
        })
        .expect("serialize");

        assert_eq!(
            value,
            serde_json::json!({"state": "error", "message": "Salon not found"})
        );
    }
}
