//! Tokio services that own the domain state machines.
//!
//! One task per state machine: commands in through an mpsc channel,
//! snapshots out through a watch channel. The task is the only mutator of
//! its state, which is what makes every published snapshot internally
//! consistent.

pub mod player;
pub mod watchlist;

pub use player::{PlayerSession, PlayerSessionHandle};
pub use watchlist::{WatchlistHandle, WatchlistService};
