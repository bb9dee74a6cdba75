//! Watchlist domain
//!
//! Loading and holding the user's saved movies and shows, with
//! newest-request-wins supersession between overlapping loads.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::{WatchlistEffect, WatchlistMessage};
pub use state::WatchlistState;
pub use update::update_watchlist;
