use tracing::{debug, warn};

use super::messages::{WatchlistEffect, WatchlistMessage};
use super::state::WatchlistState;
use crate::domains::DomainUpdate;

/// Fold one watchlist message into the state.
///
/// Loads supersede each other: each `Load` bumps the sequence number, and a
/// completion is applied only when it carries the newest one. That makes the
/// final state a function of the newest request alone, regardless of how
/// fetches interleave.
pub fn update_watchlist(
    state: &mut WatchlistState,
    message: WatchlistMessage,
) -> DomainUpdate<WatchlistEffect> {
    match message {
        WatchlistMessage::Load => {
            state.seq += 1;
            state.is_loading = true;
            debug!(seq = state.seq, "watchlist load requested");
            DomainUpdate::effect(WatchlistEffect::Fetch { seq: state.seq })
        }
        WatchlistMessage::Loaded { seq, page } => {
            if seq != state.seq {
                debug!(seq, newest = state.seq, "dropping superseded result");
                return DomainUpdate::none();
            }
            debug!(
                seq,
                movies = page.movies.len(),
                shows = page.shows.len(),
                "watchlist loaded"
            );
            state.movies = page.movies;
            state.shows = page.shows;
            state.is_loading = false;
            state.last_error = None;
            DomainUpdate::none()
        }
        WatchlistMessage::LoadFailed { seq, error } => {
            if seq != state.seq {
                debug!(seq, newest = state.seq, "dropping superseded failure");
                return DomainUpdate::none();
            }
            warn!(seq, %error, "watchlist load failed");
            state.is_loading = false;
            state.last_error = Some(error);
            DomainUpdate::none()
        }
    }
}
