//! Search view: state machine plus the controller that drives it.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::SearchController;
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{SearchPhase, SearchState};
