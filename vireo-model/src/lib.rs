//! Core data model definitions shared across Vireo crates.
#![allow(missing_docs)]

pub mod aspect;
pub mod error;
pub mod fraction;
pub mod ids;
pub mod media_id;
pub mod progress;
pub mod watchlist;

// Intentionally curated re-exports for downstream consumers.
pub use aspect::AspectMode;
pub use error::{ModelError, Result as ModelResult};
pub use fraction::Fraction;
pub use ids::{MovieID, ShowID};
pub use media_id::MediaID;
pub use progress::{PlaybackProgress, PreviewHandle, ScrubState};
pub use watchlist::WatchlistPage;
