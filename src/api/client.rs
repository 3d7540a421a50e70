use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{AppError, AppResult, MetricsError, PageError};
use crate::page::{ProfileSource, Slug};

use super::endpoints;
use super::models::{Metrics, Salon};

#[derive(Debug, Clone)]
pub struct SalonClient {
    http: Client,
    base_url: Url,
}

impl SalonClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        Self::with_http(Client::new(), base_url)
    }

    pub fn with_http(http: Client, base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "api base `{base_url}` must be an http(s) url"
            )));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn fetch_salon(&self, slug: &Slug) -> Result<Salon, PageError> {
        let url = self.endpoint_url(&endpoints::salon_segments(slug.as_str()));
        debug!(%url, "requesting salon");

        let fetch_failed = |err: reqwest::Error| PageError::SalonFetchFailed {
            slug: slug.to_string(),
            reason: err.to_string(),
        };

        let response = self.http.get(url).send().await.map_err(fetch_failed)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PageError::SalonNotOk {
                slug: slug.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(fetch_failed)?;
        parse_salon_envelope(slug, status, &body)
    }

    pub async fn fetch_metrics(&self, slug: &Slug) -> Result<Metrics, MetricsError> {
        let url = self.endpoint_url(&endpoints::metrics_segments(slug.as_str()));
        debug!(%url, "requesting metrics");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| MetricsError::FetchFailed(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(MetricsError::NotOk(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| MetricsError::FetchFailed(err.to_string()))?;
        parse_metrics_envelope(status, &body)
    }

    pub async fn health(&self) -> AppResult<Value> {
        let url = self.endpoint_url(&endpoints::health_segments());
        debug!(%url, "checking api health");

        let response = self.http.get(url).send().await?;
        self.parse_json_response(response).await
    }

    fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl ProfileSource for SalonClient {
    async fn salon(&self, slug: &Slug) -> Result<Salon, PageError> {
        self.fetch_salon(slug).await
    }

    async fn metrics(&self, slug: &Slug) -> Result<Metrics, MetricsError> {
        self.fetch_metrics(slug).await
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    salon: Option<Value>,
    #[serde(default)]
    metrics: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SalonResource {
    name: String,
    slug: String,
    status: String,
    #[serde(default)]
    enabled: Option<bool>,
    #[serde(default)]
    slogan: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    city: Value,
    #[serde(default)]
    phone: Value,
    #[serde(default)]
    logo_url: Value,
    #[serde(default)]
    cover_url: Value,
}

impl SalonResource {
    fn into_salon(self) -> Salon {
        Salon {
            name: self.name,
            slug: self.slug,
            status: self.status,
            enabled: self.enabled.unwrap_or_default(),
            slogan: display_text(&self.slogan),
            description: display_text(&self.description),
            city: display_text(&self.city),
            phone: display_text(&self.phone),
            logo_url: display_text(&self.logo_url),
            cover_url: display_text(&self.cover_url),
        }
    }
}

// Amounts arrive either as JSON numbers or as decimal strings.
#[derive(Debug, Deserialize)]
struct MetricsResource {
    #[serde(default)]
    bookings_count: Value,
    #[serde(default)]
    revenue_total: Value,
    #[serde(default)]
    revenue_30d: Value,
    #[serde(default)]
    avg_check: Value,
}

impl MetricsResource {
    fn into_metrics(self) -> Result<Metrics, MetricsError> {
        Ok(Metrics {
            bookings_count: count_field("bookings_count", &self.bookings_count)?,
            revenue_total: amount_field("revenue_total", &self.revenue_total)?,
            revenue_30d: amount_field("revenue_30d", &self.revenue_30d)?,
            avg_check: amount_field("avg_check", &self.avg_check)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_salon_envelope(slug: &Slug, status: StatusCode, body: &str) -> Result<Salon, PageError> {
    let parse_failed = |err: serde_json::Error| PageError::SalonParseFailed {
        slug: slug.to_string(),
        reason: err.to_string(),
    };

    let envelope: Envelope = serde_json::from_str(body).map_err(parse_failed)?;
    let payload = match envelope.salon {
        Some(payload) if envelope.ok && !payload.is_null() => payload,
        _ => {
            return Err(PageError::SalonNotOk {
                slug: slug.to_string(),
                status: status.as_u16(),
            });
        }
    };

    let resource: SalonResource = serde_json::from_value(payload).map_err(parse_failed)?;
    Ok(resource.into_salon())
}

fn parse_metrics_envelope(status: StatusCode, body: &str) -> Result<Metrics, MetricsError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|err| MetricsError::ParseFailed(err.to_string()))?;
    let payload = match envelope.metrics {
        Some(payload) if envelope.ok && !payload.is_null() => payload,
        _ => return Err(MetricsError::NotOk(status.as_u16())),
    };

    let resource: MetricsResource = serde_json::from_value(payload)
        .map_err(|err| MetricsError::ParseFailed(err.to_string()))?;
    resource.into_metrics()
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn count_field(name: &str, value: &Value) -> Result<u64, MetricsError> {
    let count = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(raw) => raw.trim().parse::<u64>().ok(),
        _ => None,
    };

    count.ok_or_else(|| {
        MetricsError::ParseFailed(format!("`{name}` is not a non-negative integer: {value}"))
    })
}

fn amount_field(name: &str, value: &Value) -> Result<f64, MetricsError> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(MetricsError::ParseFailed(format!(
            "`{name}` is not a non-negative amount: {value}"
        ))),
    }
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|payload| payload.message.or(payload.error))
        .unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() {
                "no error details in response body".to_string()
            } else {
                body.to_string()
            }
        });

    AppError::Api(format!("salon api request failed ({status}): {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug() -> Slug {
        Slug::new("acme-spa").expect("slug")
    }

    #[test]
    fn normalizes_optional_salon_fields() {
        let body = r#"{"ok":true,"salon":{"name":"Acme Spa","slug":"acme-spa","status":"active","enabled":true,"slogan":"  relax  ","city":null}}"#;
        let salon = parse_salon_envelope(&slug(), StatusCode::OK, body).expect("salon");

        assert_eq!(salon.slogan, "relax");
        assert_eq!(salon.city, "");
        assert_eq!(salon.phone, "");
        assert_eq!(salon.cover_url, "");
    }

    #[test]
    fn renders_non_string_optional_fields_as_text() {
        let body = r#"{"ok":true,"salon":{"name":"Acme Spa","slug":"acme-spa","status":"active","enabled":null,"phone":5551234,"city":true,"slogan":["relax"]}}"#;
        let salon = parse_salon_envelope(&slug(), StatusCode::OK, body).expect("salon");

        assert!(!salon.enabled);
        assert_eq!(salon.phone, "5551234");
        assert_eq!(salon.city, "true");
        assert_eq!(salon.slogan, "");
    }

    #[test]
    fn ok_false_is_not_found() {
        let error = parse_salon_envelope(&slug(), StatusCode::OK, r#"{"ok":false}"#)
            .expect_err("ok:false must fail");

        assert!(matches!(error, PageError::SalonNotOk { status: 200, .. }));
        assert_eq!(error.to_string(), "Salon not found");
    }

    #[test]
    fn malformed_body_is_invalid_response() {
        let error = parse_salon_envelope(&slug(), StatusCode::OK, "<html>oops</html>")
            .expect_err("html must fail");

        assert!(matches!(error, PageError::SalonParseFailed { .. }));
        assert_eq!(error.to_string(), "Invalid response");
    }

    #[test]
    fn accepts_decimal_strings_in_metrics() {
        let body = r#"{"ok":true,"metrics":{"bookings_count":"7","revenue_total":"1500.50","revenue_30d":0,"avg_check":214.36}}"#;
        let metrics = parse_metrics_envelope(StatusCode::OK, body).expect("metrics");

        assert_eq!(metrics.bookings_count, 7);
        assert_eq!(metrics.revenue_total, 1500.5);
        assert_eq!(metrics.revenue_30d, 0.0);
    }

    #[test]
    fn rejects_negative_amounts() {
        let body = r#"{"ok":true,"metrics":{"bookings_count":1,"revenue_total":-5,"revenue_30d":0,"avg_check":0}}"#;
        let error = parse_metrics_envelope(StatusCode::OK, body).expect_err("negative");

        assert!(matches!(error, MetricsError::ParseFailed(_)));
    }

    #[test]
    fn maps_error_body_message() {
        let error = map_api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"ok":false,"error":"database offline"}"#,
        );

        match error {
            AppError::Api(message) => assert!(message.contains("database offline")),
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
