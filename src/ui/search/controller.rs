use std::collections::BTreeMap;
use std::sync::Arc;

use crate::drug::{normalize_query, DrugCard, SearchResult};
use crate::lookup::{DrugLookup, LookupError};
use crate::storage::{parse_alert_price, PreferenceError, PreferenceStore};
use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::reducer::SearchReducer;
use crate::ui::search::state::{SearchPhase, SearchState};

/// Owns the search view state and performs its effects.
///
/// Submitting is split in two so a runtime can run the lookup elsewhere:
/// [`begin_submit`](Self::begin_submit) moves the view to `Loading` and hands
/// back the query to look up, [`complete_lookup`](Self::complete_lookup)
/// applies the outcome. [`submit_query`](Self::submit_query) does both.
pub struct SearchController {
    state: SearchState,
    preferences: PreferenceStore,
    lookup: Arc<dyn DrugLookup>,
}

impl SearchController {
    pub fn new(
        lookup: Arc<dyn DrugLookup>,
        preferences: PreferenceStore,
        history_limit: usize,
    ) -> Self {
        Self {
            state: SearchState::with_history_limit(history_limit),
            preferences,
            lookup,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn phase(&self) -> SearchPhase {
        self.state.phase
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn brand(&self) -> Option<&DrugCard> {
        self.state.brand.as_ref()
    }

    pub fn generics(&self) -> &[DrugCard] {
        &self.state.generics
    }

    pub fn history(&self) -> &[DrugCard] {
        &self.state.history
    }

    pub fn favorites(&self) -> &[DrugCard] {
        self.preferences.favorites()
    }

    pub fn alerts(&self) -> &BTreeMap<String, f64> {
        self.preferences.alerts()
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Shared handle to the lookup client, for running a lookup off-thread.
    pub fn lookup_client(&self) -> Arc<dyn DrugLookup> {
        Arc::clone(&self.lookup)
    }

    pub fn edit_query(&mut self, text: impl Into<String>) {
        self.dispatch(SearchIntent::EditQuery { text: text.into() });
    }

    /// Start a search for `raw`.
    ///
    /// Returns the normalized query the caller must look up, or `None` when
    /// the input is blank or a lookup is already in flight. In both of those
    /// cases the state is left untouched.
    pub fn begin_submit(&mut self, raw: &str) -> Option<String> {
        if self.state.is_loading() {
            tracing::debug!(raw, "submit ignored, lookup already in flight");
            return None;
        }
        let query = normalize_query(raw)?;
        self.dispatch(SearchIntent::Submit {
            query: query.clone(),
        });
        Some(query)
    }

    /// Apply the outcome of the lookup started by `begin_submit`.
    pub fn complete_lookup(&mut self, outcome: Result<SearchResult, LookupError>) {
        match outcome {
            Ok(result) => self.dispatch(SearchIntent::LookupSucceeded { result }),
            Err(err) => {
                tracing::warn!(
                    query = %self.state.query,
                    error_type = err.error_type(),
                    error = %err,
                    "drug lookup failed"
                );
                self.dispatch(SearchIntent::LookupFailed {
                    message: err.user_message(),
                });
            }
        }
    }

    /// Submit `raw` and wait for the lookup to finish.
    pub async fn submit_query(&mut self, raw: &str) {
        let Some(query) = self.begin_submit(raw) else {
            return;
        };
        let lookup = self.lookup_client();
        let outcome = lookup.lookup(&query).await;
        self.complete_lookup(outcome);
    }

    /// Re-run the search for a history entry. Always a fresh lookup.
    pub async fn select_history(&mut self, name: &str) {
        self.submit_query(name).await;
    }

    /// Re-run the search for a favorite. Always a fresh lookup.
    pub async fn select_favorite(&mut self, drug: &DrugCard) {
        self.submit_query(&drug.name).await;
    }

    /// Pin the current brand result.
    pub fn add_favorite(&mut self) -> Result<bool, PreferenceError> {
        let brand = self.state.brand.clone().ok_or(PreferenceError::NoActiveDrug)?;
        self.preferences.add_favorite(brand)
    }

    pub fn remove_favorite(&mut self, name: &str) -> Result<bool, PreferenceError> {
        self.preferences.remove_favorite(name)
    }

    /// Set an alert on the current brand from user-entered text.
    pub fn set_alert(&mut self, price_text: &str) -> Result<f64, PreferenceError> {
        let name = self
            .state
            .brand
            .as_ref()
            .map(|brand| brand.name.clone())
            .ok_or(PreferenceError::NoActiveDrug)?;
        let price = parse_alert_price(price_text)?;
        self.preferences.set_alert(&name, price)?;
        Ok(price)
    }

    pub fn remove_alert(&mut self, name: &str) -> Result<bool, PreferenceError> {
        self.preferences.remove_alert(name)
    }

    fn dispatch(&mut self, intent: SearchIntent) {
        self.state = SearchReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
