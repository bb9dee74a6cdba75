use vireo_model::{MovieID, ShowID};

/// Watchlist view state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchlistState {
    /// Movies section, in source order.
    pub movies: Vec<MovieID>,
    /// Shows section, in source order.
    pub shows: Vec<ShowID>,
    /// Whether the newest load is still in flight.
    pub is_loading: bool,
    /// Last failed load, for the shell to surface.
    pub last_error: Option<String>,
    /// Sequence number of the newest load request.
    pub(crate) seq: u64,
}

impl WatchlistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when there is nothing to show.
    ///
    /// Drives the empty placeholder; both sections must be empty before it
    /// appears.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.shows.is_empty()
    }
}
