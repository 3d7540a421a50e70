use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::models::{Metrics, Salon};
use crate::error::{MetricsError, PageError};

use super::slug::Slug;
use super::state::{ProfilePage, ViewState};

pub trait ProfileSource {
    fn salon(&self, slug: &Slug) -> impl Future<Output = Result<Salon, PageError>>;
    fn metrics(&self, slug: &Slug) -> impl Future<Output = Result<Metrics, MetricsError>>;
}

#[derive(Debug, Clone)]
pub struct ProfileLoader<S> {
    source: S,
}

impl<S: ProfileSource> ProfileLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn load(&self, slug: Result<Slug, PageError>) -> ViewState {
        self.load_with(slug, |_| {}).await
    }

    // Gives up waiting after `deadline` and returns the last state shown,
    // which is `Ready` without metrics when only the metrics never answered.
    pub async fn load_within<F>(
        &self,
        slug: Result<Slug, PageError>,
        deadline: Duration,
        mut on_update: F,
    ) -> ViewState
    where
        F: FnMut(&ViewState),
    {
        let mut latest = ViewState::Loading;
        let outcome = tokio::time::timeout(
            deadline,
            self.load_with(slug, |state| {
                latest = state.clone();
                on_update(state);
            }),
        )
        .await;

        match outcome {
            Ok(state) => state,
            Err(_) => {
                debug!(?deadline, ready = latest.is_ready(), "stopped waiting for the page load");
                latest
            }
        }
    }

    pub async fn load_with<F>(
        &self,
        slug: Result<Slug, PageError>,
        mut on_update: F,
    ) -> ViewState
    where
        F: FnMut(&ViewState),
    {
        let slug = match slug {
            Ok(slug) => slug,
            Err(err) => return load_unresolved(err, on_update),
        };

        let mut page = ProfilePage::new();
        on_update(page.state());

        let salon = self.source.salon(&slug);
        let metrics = self.source.metrics(&slug);
        tokio::pin!(salon);
        tokio::pin!(metrics);

        let mut salon_done = false;
        let mut metrics_done = false;

        loop {
            if salon_done && (metrics_done || !page.state().is_ready()) {
                break;
            }

            tokio::select! {
                result = &mut salon, if !salon_done => {
                    salon_done = true;
                    if let Err(err) = &result {
                        warn!(slug = %slug, error = ?err, "salon load failed");
                    }
                    if page.settle_salon(result) {
                        on_update(page.state());
                    }
                }
                result = &mut metrics, if !metrics_done => {
                    metrics_done = true;
                    match result {
                        Ok(metrics) => {
                            if page.settle_metrics(metrics) {
                                on_update(page.state());
                            }
                        }
                        Err(err) => debug!(slug = %slug, error = %err, "metrics unavailable"),
                    }
                }
            }
        }

        page.into_state()
    }
}

// A page whose slug could not be resolved fails without touching the source.
pub fn load_unresolved<F>(err: PageError, mut on_update: F) -> ViewState
where
    F: FnMut(&ViewState),
{
    warn!(error = ?err, "no salon slug for this page");

    let mut page = ProfilePage::new();
    on_update(page.state());
    page.settle_salon(Err(err));
    on_update(page.state());
    page.into_state()
}
