use vireo_model::WatchlistPage;

/// Everything the watchlist update folds over.
///
/// `Loaded` and `LoadFailed` carry the sequence number of the request that
/// produced them so stale completions can be told apart from current ones.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchlistMessage {
    /// The shell asked for a (re)load.
    Load,
    /// A fetch finished.
    Loaded { seq: u64, page: WatchlistPage },
    /// A fetch failed.
    LoadFailed { seq: u64, error: String },
}

/// A side effect the watchlist service must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchlistEffect {
    /// Start a fetch tagged with `seq`.
    Fetch { seq: u64 },
}
