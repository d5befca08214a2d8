use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::drug::DrugCard;
use crate::ui::mvi::UiState;

/// Lifecycle of the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub phase: SearchPhase,
    pub error: Option<String>,
    pub brand: Option<DrugCard>,
    pub generics: Vec<DrugCard>,
    /// Newest first, never longer than `history_limit`, unique by name.
    pub history: Vec<DrugCard>,
    pub history_limit: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl UiState for SearchState {}

impl SearchState {
    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
            error: None,
            brand: None,
            generics: Vec::new(),
            history: Vec::new(),
            history_limit: history_limit.max(1),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }
}
