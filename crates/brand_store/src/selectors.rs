//! Read helpers over [`BrandViewState`] for view code and the fetch guard.

use shared::domain::{BrandId, ProductRecord};

use crate::state::BrandViewState;

/// Id of the brand whose fetch cycle most recently started.
pub fn current_brand_id(state: &BrandViewState) -> Option<BrandId> {
    state.current_group
}

pub fn brand_fetch_in_flight(state: &BrandViewState) -> bool {
    state.loading
}

pub fn visible_hits(state: &BrandViewState) -> &[ProductRecord] {
    &state.data_hits
}
