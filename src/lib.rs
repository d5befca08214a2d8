//! MedWise: compare brand-name drug prices with their generic alternatives.
//!
//! The library holds everything the terminal front end is built from:
//! the pricing service client ([`lookup`]), persisted favorites and alerts
//! ([`storage`]) and the search view state machine ([`ui::search`]).

pub mod cli;
pub mod config;
pub mod drug;
pub mod logging;
pub mod lookup;
pub mod storage;
pub mod ui;
