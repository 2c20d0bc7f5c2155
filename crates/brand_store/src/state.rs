//! View state and pure transition handlers for the brand section of the
//! storefront UI.

use serde::Serialize;
use shared::domain::{BrandId, BrandRecord, ProductRecord};

/// Everything the brand views need to render.
///
/// `Default` is the bootstrap state: nothing loaded, nothing in flight, no
/// errors, banner hidden.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrandViewState {
    /// Last successfully fetched vendor document.
    pub data: Option<BrandRecord>,
    /// Last successfully fetched related-products listing.
    pub data_hits: Vec<ProductRecord>,
    /// Id of the brand currently considered loaded/selected. Set when a brand
    /// fetch is dispatched, not when it completes.
    pub current_group: Option<BrandId>,
    pub show_banner: bool,
    /// True while the brand fetch is in flight.
    pub loading: bool,
    /// True while the hits fetch is in flight.
    pub loading_hits: bool,
    /// Last brand-fetch failure, cleared on the next success.
    pub error: Option<String>,
    /// Last hits-fetch failure.
    pub error_hits: Option<String>,
}

/// State transitions applied by [`reduce`].
///
/// The fetch-lifecycle variants are constructed by the orchestrators in the
/// store; the first three are also reachable through the store's public
/// mutation methods.
#[derive(Debug, Clone)]
pub enum BrandAction {
    SetCurrentGroup(BrandId),
    ResetCurrentGroup,
    ToggleShowBanner,
    BrandFetchPending,
    BrandFetchFulfilled(BrandRecord),
    BrandFetchRejected(Option<String>),
    HitsFetchStarted,
    HitsFetchSucceeded(Vec<ProductRecord>),
    HitsFetchFailed(String),
}

/// Applies one action to the state. Pure: no I/O, no hidden globals.
pub fn reduce(state: &mut BrandViewState, action: BrandAction) {
    match action {
        BrandAction::SetCurrentGroup(brand_id) => {
            state.current_group = Some(brand_id);
        }
        BrandAction::ResetCurrentGroup => {
            state.current_group = None;
        }
        BrandAction::ToggleShowBanner => {
            state.show_banner = !state.show_banner;
        }
        BrandAction::BrandFetchPending => {
            state.loading = true;
        }
        BrandAction::BrandFetchFulfilled(brand) => {
            state.data = Some(brand);
            state.loading = false;
            state.error = None;
        }
        BrandAction::BrandFetchRejected(message) => {
            state.loading = false;
            state.error = message;
        }
        BrandAction::HitsFetchStarted => {
            state.loading_hits = true;
        }
        BrandAction::HitsFetchSucceeded(products) => {
            state.data_hits = products;
            state.loading_hits = false;
            state.error_hits = None;
        }
        BrandAction::HitsFetchFailed(message) => {
            // TODO: clear loading_hits here instead of loading; the hits
            // spinner stays up after a failed listing fetch.
            state.loading = false;
            state.error_hits = Some(message);
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
