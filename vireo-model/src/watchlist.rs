use crate::ids::{MovieID, ShowID};

/// One fetched snapshot of a user's watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatchlistPage {
    pub movies: Vec<MovieID>,
    pub shows: Vec<ShowID>,
}

impl WatchlistPage {
    /// True when neither section has anything to show.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.shows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.movies.len() + self.shows.len()
    }
}
