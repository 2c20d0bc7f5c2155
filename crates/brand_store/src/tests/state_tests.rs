use super::*;
use serde_json::Map;
use shared::domain::ProductId;

fn acme() -> BrandRecord {
    BrandRecord {
        id: BrandId(5),
        name: "Acme".to_string(),
        extra: Map::new(),
    }
}

fn widget(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId(id),
        title: format!("Widget {id}"),
        price: 9.99,
        brand: Some("Acme".to_string()),
        extra: Map::new(),
    }
}

#[test]
fn default_state_is_the_bootstrap_state() {
    let state = BrandViewState::default();
    assert_eq!(state.data, None);
    assert!(state.data_hits.is_empty());
    assert_eq!(state.current_group, None);
    assert!(!state.show_banner);
    assert!(!state.loading);
    assert!(!state.loading_hits);
    assert_eq!(state.error, None);
    assert_eq!(state.error_hits, None);
}

#[test]
fn set_current_group_overwrites_prior_selection() {
    let mut state = BrandViewState::default();
    reduce(&mut state, BrandAction::SetCurrentGroup(BrandId(3)));
    assert_eq!(state.current_group, Some(BrandId(3)));

    reduce(&mut state, BrandAction::SetCurrentGroup(BrandId(8)));
    assert_eq!(state.current_group, Some(BrandId(8)));
}

#[test]
fn reset_current_group_clears_any_prior_value() {
    let mut state = BrandViewState::default();
    reduce(&mut state, BrandAction::ResetCurrentGroup);
    assert_eq!(state.current_group, None);

    reduce(&mut state, BrandAction::SetCurrentGroup(BrandId(3)));
    reduce(&mut state, BrandAction::ResetCurrentGroup);
    assert_eq!(state.current_group, None);
}

#[test]
fn toggling_banner_twice_restores_original_value() {
    let mut state = BrandViewState::default();

    reduce(&mut state, BrandAction::ToggleShowBanner);
    assert!(state.show_banner);

    reduce(&mut state, BrandAction::ToggleShowBanner);
    assert!(!state.show_banner);
}

#[test]
fn brand_fetch_cycle_stores_data_and_clears_flags() {
    let mut state = BrandViewState::default();

    reduce(&mut state, BrandAction::BrandFetchPending);
    assert!(state.loading);

    reduce(&mut state, BrandAction::BrandFetchFulfilled(acme()));
    assert_eq!(state.data, Some(acme()));
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn brand_fetch_success_clears_a_previous_error() {
    let mut state = BrandViewState {
        error: Some("vendor lookup exploded".to_string()),
        ..BrandViewState::default()
    };

    reduce(&mut state, BrandAction::BrandFetchFulfilled(acme()));
    assert_eq!(state.error, None);
}

#[test]
fn brand_fetch_rejection_keeps_prior_data() {
    let mut state = BrandViewState {
        data: Some(acme()),
        ..BrandViewState::default()
    };

    reduce(&mut state, BrandAction::BrandFetchPending);
    reduce(&mut state, BrandAction::BrandFetchRejected(None));

    assert_eq!(state.data, Some(acme()));
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn brand_fetch_rejection_records_a_message_when_given_one() {
    let mut state = BrandViewState::default();

    reduce(
        &mut state,
        BrandAction::BrandFetchRejected(Some("timed out".to_string())),
    );
    assert_eq!(state.error, Some("timed out".to_string()));
}

#[test]
fn hits_cycle_replaces_the_listing() {
    let mut state = BrandViewState {
        data_hits: vec![widget(1)],
        ..BrandViewState::default()
    };

    reduce(&mut state, BrandAction::HitsFetchStarted);
    assert!(state.loading_hits);

    reduce(
        &mut state,
        BrandAction::HitsFetchSucceeded(vec![widget(2), widget(3)]),
    );
    assert_eq!(state.data_hits, vec![widget(2), widget(3)]);
    assert!(!state.loading_hits);
    assert_eq!(state.error_hits, None);
}

#[test]
fn hits_failure_records_message_but_clears_the_brand_loading_flag() {
    let mut state = BrandViewState::default();
    reduce(&mut state, BrandAction::HitsFetchStarted);
    state.loading = true;

    reduce(
        &mut state,
        BrandAction::HitsFetchFailed("listing backend offline".to_string()),
    );

    assert_eq!(state.error_hits, Some("listing backend offline".to_string()));
    assert!(state.loading_hits, "hits flag must survive the failure");
    assert!(!state.loading, "brand flag is the one cleared");
}
