//! Model-View-Intent primitives for the search view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                              │
//!    └──── controller effects ──────┘
//! ```
//!
//! Reducers stay pure. Network lookups and preference writes happen in the
//! controller, which feeds their outcomes back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
