mod common;

use std::sync::Arc;

use common::mock_backend::{MockBackend, MockResponse};
use common::{drug, drug_info_json, found, free_port, FakeLookup};
use medwise::config::LookupConfig;
use medwise::drug::SearchResult;
use medwise::lookup::{HttpLookupClient, GENERIC_FAILURE_MESSAGE};
use medwise::storage::{MemoryStore, PreferenceError, PreferenceStore, ALERTS_KEY};
use medwise::ui::search::{SearchController, SearchPhase};

fn controller(lookup: FakeLookup) -> SearchController {
    controller_with_store(lookup, MemoryStore::new())
}

fn controller_with_store(lookup: FakeLookup, store: MemoryStore) -> SearchController {
    let preferences = PreferenceStore::load(Box::new(store));
    SearchController::new(Arc::new(lookup), preferences, 3)
}

fn http_controller(base_url: String) -> SearchController {
    let client = HttpLookupClient::new(&LookupConfig { base_url }).unwrap();
    let preferences = PreferenceStore::load(Box::new(MemoryStore::new()));
    SearchController::new(Arc::new(client), preferences, 3)
}

fn history_names(controller: &SearchController) -> Vec<String> {
    controller.history().iter().map(|d| d.name.clone()).collect()
}

#[tokio::test]
async fn query_is_title_cased_before_lookup() {
    let lookup = FakeLookup::new();
    let mut controller = controller(lookup.clone());

    controller.submit_query("dramamine  ").await;
    controller.submit_query("tylenol pm").await;

    assert_eq!(lookup.queries(), vec!["Dramamine", "Tylenol Pm"]);
    assert_eq!(controller.query(), "Tylenol Pm");
}

#[tokio::test]
async fn blank_submit_does_nothing() {
    let lookup = FakeLookup::new();
    let mut controller = controller(lookup.clone());
    controller.edit_query("   ");
    let before = controller.state().clone();

    controller.submit_query("   ").await;
    controller.submit_query("").await;

    assert_eq!(lookup.calls(), 0);
    assert_eq!(controller.state(), &before);
    assert_eq!(controller.phase(), SearchPhase::Idle);
}

#[tokio::test]
async fn history_keeps_three_most_recent_distinct_brands() {
    let lookup = FakeLookup::new();
    let mut controller = controller(lookup);

    controller.submit_query("advil").await;
    assert_eq!(history_names(&controller), vec!["Advil"]);

    for name in ["aleve", "benadryl", "claritin", "dramamine"] {
        controller.submit_query(name).await;
    }
    assert_eq!(
        history_names(&controller),
        vec!["Dramamine", "Claritin", "Benadryl"]
    );

    controller.submit_query("Dramamine").await;
    assert_eq!(
        history_names(&controller),
        vec!["Dramamine", "Claritin", "Benadryl"]
    );
}

#[tokio::test]
async fn service_error_moves_to_failed_and_keeps_history() {
    let lookup = FakeLookup::new()
        .then_found(found("Advil", &["Ibuprofen"]))
        .then_error("Not found");
    let mut controller = controller(lookup);

    controller.submit_query("advil").await;
    controller.submit_query("nosuchdrug").await;

    assert_eq!(controller.phase(), SearchPhase::Failed);
    assert_eq!(controller.error(), Some("Not found"));
    assert!(controller.brand().is_none());
    assert!(controller.generics().is_empty());
    assert_eq!(history_names(&controller), vec!["Advil"]);
}

#[tokio::test]
async fn decode_failure_shows_generic_message() {
    let mut controller = controller(FakeLookup::new().then_undecodable());

    controller.submit_query("advil").await;

    assert_eq!(controller.phase(), SearchPhase::Failed);
    assert_eq!(controller.error(), Some(GENERIC_FAILURE_MESSAGE));
}

#[tokio::test]
async fn connection_refused_shows_generic_message() {
    let mut controller = http_controller(format!("http://127.0.0.1:{}", free_port()));

    controller.submit_query("advil").await;

    assert_eq!(controller.phase(), SearchPhase::Failed);
    assert_eq!(controller.error(), Some(GENERIC_FAILURE_MESSAGE));
    assert!(controller.history().is_empty());
}

#[tokio::test]
async fn end_to_end_against_pricing_service() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&drug_info_json("Dramamine", &["Meclizine"])))
        .await;
    backend
        .enqueue_response(MockResponse::error(404, "Drug not found"))
        .await;
    let mut controller = http_controller(backend.base_url());

    controller.submit_query("dramamine").await;
    assert_eq!(controller.phase(), SearchPhase::Success);
    assert_eq!(controller.generics()[0].name, "Meclizine");

    controller.submit_query("made up").await;
    assert_eq!(controller.error(), Some("Drug not found"));
    assert_eq!(history_names(&controller), vec!["Dramamine"]);

    let names: Vec<Option<String>> = backend
        .captured_requests()
        .await
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(
        names,
        vec![Some("Dramamine".to_string()), Some("Made Up".to_string())]
    );
}

#[test]
fn submit_while_loading_is_ignored() {
    let lookup = FakeLookup::new();
    let mut controller = controller(lookup.clone());

    assert_eq!(controller.begin_submit("advil"), Some("Advil".to_string()));
    let loading = controller.state().clone();

    assert_eq!(controller.begin_submit("aleve"), None);
    controller.edit_query("something else");

    assert_eq!(controller.state(), &loading);
    assert!(controller.is_loading());
    assert_eq!(lookup.calls(), 0);
}

#[test]
fn new_submit_clears_stale_result_before_lookup_returns() {
    let mut controller = controller(FakeLookup::new());
    controller.begin_submit("advil");
    controller.complete_lookup(Ok(found("Advil", &["Ibuprofen"])));
    assert!(controller.brand().is_some());

    controller.begin_submit("aleve");

    assert!(controller.brand().is_none());
    assert!(controller.generics().is_empty());
    assert_eq!(controller.phase(), SearchPhase::Loading);
}

#[tokio::test]
async fn selecting_history_runs_a_fresh_lookup() {
    let lookup = FakeLookup::new();
    let mut controller = controller(lookup.clone());
    controller.submit_query("advil").await;
    controller.submit_query("aleve").await;

    controller.select_history("Advil").await;

    assert_eq!(lookup.queries(), vec!["Advil", "Aleve", "Advil"]);
    assert_eq!(controller.query(), "Advil");
    assert_eq!(controller.brand().unwrap().name, "Advil");
}

#[tokio::test]
async fn selecting_a_favorite_runs_a_fresh_lookup() {
    let lookup = FakeLookup::new();
    let mut controller = controller(lookup.clone());

    controller.select_favorite(&drug("Claritin", 20.0)).await;

    assert_eq!(lookup.queries(), vec!["Claritin"]);
    assert_eq!(controller.query(), "Claritin");
}

#[tokio::test]
async fn favorites_follow_the_current_brand() {
    let mut controller = controller(FakeLookup::new());
    assert!(matches!(
        controller.add_favorite(),
        Err(PreferenceError::NoActiveDrug)
    ));

    controller.submit_query("advil").await;
    assert!(controller.add_favorite().unwrap());
    assert!(!controller.add_favorite().unwrap());
    assert_eq!(controller.favorites().len(), 1);

    assert!(controller.remove_favorite("Advil").unwrap());
    assert!(!controller.remove_favorite("Advil").unwrap());
    assert!(controller.favorites().is_empty());
}

#[tokio::test]
async fn alerts_overwrite_and_reject_bad_prices() {
    let store = MemoryStore::new();
    let mut controller = controller_with_store(FakeLookup::new(), store.clone());
    controller.submit_query("x").await;

    controller.set_alert("9.99").unwrap();
    controller.set_alert("4.99").unwrap();
    assert_eq!(controller.alerts().len(), 1);
    assert_eq!(controller.alerts().get("X"), Some(&4.99));

    let stored = store.raw(ALERTS_KEY);
    for bad in ["0", "-2", "cheap"] {
        assert!(matches!(
            controller.set_alert(bad),
            Err(PreferenceError::InvalidAlertPrice { .. })
        ));
    }
    assert_eq!(store.raw(ALERTS_KEY), stored);

    assert!(controller.remove_alert("X").unwrap());
    assert!(controller.alerts().is_empty());
}

#[test]
fn alert_without_result_is_rejected() {
    let store = MemoryStore::new();
    let mut controller = controller_with_store(FakeLookup::new(), store.clone());

    assert!(matches!(
        controller.set_alert("4.99"),
        Err(PreferenceError::NoActiveDrug)
    ));
    assert_eq!(store.raw(ALERTS_KEY), None);
}

#[test]
fn empty_result_is_a_success_without_history() {
    let mut controller = controller(FakeLookup::new());
    controller.begin_submit("advil");
    controller.complete_lookup(Ok(SearchResult::default()));

    assert_eq!(controller.phase(), SearchPhase::Success);
    assert!(controller.history().is_empty());
}
