//! Contract between the watchlist service and whatever backs it.

use async_trait::async_trait;
use vireo_model::WatchlistPage;

use crate::error::Result;

/// Where watchlist content comes from.
///
/// Fetches may take as long as they like; the service tolerates slow and
/// out-of-order completions.
#[async_trait]
pub trait WatchlistSource: Send + Sync {
    /// Fetch the caller's current watchlist.
    async fn fetch(&self) -> Result<WatchlistPage>;
}
