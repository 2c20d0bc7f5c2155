use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use serde::Serialize;
use shared::domain::{BrandId, BrandRecord, ProductRecord};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

pub mod config;
pub mod error;
pub mod selectors;
pub mod state;

use config::Settings;
use error::FetchError;
use state::{reduce, BrandAction, BrandViewState};

const VENDORS_PATH: &str = "/site/vendors";
const BRAND_GOODS_PATH: &str = "/site/goods/brands";

/// Notifications emitted alongside state mutations, for consumers that need
/// to react without polling snapshots (e.g. the router).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandStoreEvent {
    CurrentGroupChanged(BrandId),
}

#[derive(Debug, Serialize)]
struct GoodsScope {
    #[serde(rename = "byVendor")]
    by_vendor: String,
}

#[derive(Debug, Serialize)]
struct GoodsByBrandRequest {
    scope: GoodsScope,
}

/// State container for the brand section of the storefront.
///
/// Holds the view state behind a mutex so mutations apply one at a time, and
/// runs the two fetch orchestrators against the configured API base. Brand
/// and hits cycles may be pending simultaneously; they touch disjoint fields.
pub struct BrandStore {
    http: Client,
    base_url: String,
    state: Mutex<BrandViewState>,
    events: broadcast::Sender<BrandStoreEvent>,
}

impl BrandStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            http: Client::new(),
            base_url: config::normalize_base_url(&base_url.into()),
            state: Mutex::new(BrandViewState::default()),
            events,
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_seconds))
            .build()
            .context("failed to build http client")?;
        let (events, _) = broadcast::channel(64);
        Ok(Self {
            http,
            base_url: config::normalize_base_url(&settings.api_base_url),
            state: Mutex::new(BrandViewState::default()),
            events,
        })
    }

    pub async fn snapshot(&self) -> BrandViewState {
        self.state.lock().await.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<BrandStoreEvent> {
        self.events.subscribe()
    }

    async fn apply(&self, action: BrandAction) {
        let mut state = self.state.lock().await;
        reduce(&mut state, action);
    }

    pub async fn set_current_group(&self, brand_id: BrandId) {
        self.apply(BrandAction::SetCurrentGroup(brand_id)).await;
        let _ = self
            .events
            .send(BrandStoreEvent::CurrentGroupChanged(brand_id));
    }

    pub async fn reset_current_group(&self) {
        self.apply(BrandAction::ResetCurrentGroup).await;
    }

    pub async fn toggle_show_banner(&self) {
        self.apply(BrandAction::ToggleShowBanner).await;
    }

    /// Ensures the store holds data for `brand_id`.
    ///
    /// Returns `false` when the requested id already matches the current
    /// group: the whole operation is skipped with no state change, no event
    /// and no network call. Otherwise the id becomes the current group before
    /// the request is issued, so a failed fetch leaves the group pointing at
    /// a brand whose data never arrived; returns `true` once the cycle has
    /// settled, whatever its outcome.
    pub async fn request_brand(&self, brand_id: BrandId) -> bool {
        {
            let state = self.state.lock().await;
            if selectors::current_brand_id(&state) == Some(brand_id) {
                debug!(
                    brand_id = brand_id.0,
                    "brand: fetch skipped, group already current"
                );
                return false;
            }
        }

        self.set_current_group(brand_id).await;
        self.apply(BrandAction::BrandFetchPending).await;

        match self.fetch_brand(brand_id).await {
            Ok(brand) => {
                info!(brand_id = brand_id.0, "brand: fetch fulfilled");
                self.apply(BrandAction::BrandFetchFulfilled(brand)).await;
            }
            Err(err) => {
                warn!(brand_id = brand_id.0, "brand: fetch rejected: {err}");
                // TODO: thread err.to_string() into the rejected action so
                // the error field carries the message instead of None.
                self.apply(BrandAction::BrandFetchRejected(None)).await;
            }
        }

        true
    }

    /// Fetches the product listing scoped to `brand_name`. No dedup guard:
    /// every call issues a request.
    pub async fn request_brand_hits(&self, brand_name: &str) {
        self.apply(BrandAction::HitsFetchStarted).await;

        match self.fetch_brand_hits(brand_name).await {
            Ok(products) => {
                info!(
                    brand = brand_name,
                    hits = products.len(),
                    "hits: fetch fulfilled"
                );
                self.apply(BrandAction::HitsFetchSucceeded(products)).await;
            }
            Err(err) => {
                let message = err.to_string();
                warn!(brand = brand_name, "hits: fetch rejected: {message}");
                self.apply(BrandAction::HitsFetchFailed(message)).await;
            }
        }
    }

    async fn fetch_brand(&self, brand_id: BrandId) -> Result<BrandRecord, FetchError> {
        let response = self
            .http
            .get(format!("{}{VENDORS_PATH}/{}", self.base_url, brand_id.0))
            .send()
            .await?;
        let response = error::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_brand_hits(&self, brand_name: &str) -> Result<Vec<ProductRecord>, FetchError> {
        let response = self
            .http
            .post(format!("{}{BRAND_GOODS_PATH}", self.base_url))
            .json(&GoodsByBrandRequest {
                scope: GoodsScope {
                    by_vendor: brand_name.to_string(),
                },
            })
            .send()
            .await?;
        let response = error::check_status(response).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
