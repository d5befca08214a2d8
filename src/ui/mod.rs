//! Terminal front end: landing splash, then the search view.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod landing;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
