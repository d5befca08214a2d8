use crate::drug::SearchResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Query text changed by typing. Ignored while a lookup is in flight.
    EditQuery { text: String },
    /// A normalized, non-empty query is about to be looked up.
    Submit { query: String },
    LookupSucceeded { result: SearchResult },
    /// `message` is what the view shows.
    LookupFailed { message: String },
}

impl Intent for SearchIntent {}
