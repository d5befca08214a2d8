use crate::drug::DrugCard;
use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::{SearchPhase, SearchState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::EditQuery { text } => {
                if state.is_loading() {
                    return state;
                }
                SearchState {
                    query: text,
                    ..state
                }
            }
            SearchIntent::Submit { query } => {
                // At most one lookup in flight.
                if state.is_loading() {
                    return state;
                }
                SearchState {
                    query,
                    phase: SearchPhase::Loading,
                    error: None,
                    brand: None,
                    generics: Vec::new(),
                    ..state
                }
            }
            SearchIntent::LookupSucceeded { result } => {
                if !state.is_loading() {
                    return state;
                }
                let mut history = state.history;
                if let Some(brand) = &result.brand {
                    remember(&mut history, brand, state.history_limit);
                }
                SearchState {
                    phase: SearchPhase::Success,
                    error: None,
                    brand: result.brand,
                    generics: result.generics,
                    history,
                    ..state
                }
            }
            SearchIntent::LookupFailed { message } => {
                if !state.is_loading() {
                    return state;
                }
                SearchState {
                    phase: SearchPhase::Failed,
                    error: Some(message),
                    brand: None,
                    generics: Vec::new(),
                    ..state
                }
            }
        }
    }
}

/// Prepend `brand` unless a card with its name is already remembered.
fn remember(history: &mut Vec<DrugCard>, brand: &DrugCard, limit: usize) {
    if history.iter().any(|entry| entry.name == brand.name) {
        return;
    }
    history.insert(0, brand.clone());
    history.truncate(limit);
}
