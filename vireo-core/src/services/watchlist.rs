//! The tokio task that owns the watchlist.
//!
//! Fetches run as detached tasks so slow sources never block the service;
//! each fetch reports back tagged with its request's sequence number and the
//! update function drops anything superseded. In-flight fetches are left to
//! finish on their own — their results just stop mattering.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

use crate::domains::watchlist::{
    WatchlistEffect, WatchlistMessage, WatchlistState, update_watchlist,
};
use crate::source::WatchlistSource;

/// Shell-side handle to a running [`WatchlistService`].
#[derive(Debug, Clone)]
pub struct WatchlistHandle {
    message_tx: mpsc::UnboundedSender<WatchlistMessage>,
    snapshot_rx: watch::Receiver<WatchlistState>,
}

impl WatchlistHandle {
    /// Ask for a (re)load of the watchlist.
    ///
    /// Safe to call repeatedly; overlapping loads supersede each other and
    /// the newest request's outcome wins.
    pub fn load(&self) {
        let _ = self.message_tx.send(WatchlistMessage::Load);
    }

    /// The latest published snapshot.
    pub fn state(&self) -> WatchlistState {
        self.snapshot_rx.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<WatchlistState> {
        self.snapshot_rx.clone()
    }

    /// Snapshot updates as a stream.
    pub fn snapshots(&self) -> WatchStream<WatchlistState> {
        WatchStream::new(self.snapshot_rx.clone())
    }
}

/// The task that owns the [`WatchlistState`].
pub struct WatchlistService {
    state: WatchlistState,
    source: Arc<dyn WatchlistSource>,
    message_rx: mpsc::UnboundedReceiver<WatchlistMessage>,
    result_tx: mpsc::UnboundedSender<WatchlistMessage>,
    result_rx: mpsc::UnboundedReceiver<WatchlistMessage>,
    snapshot_tx: watch::Sender<WatchlistState>,
}

impl fmt::Debug for WatchlistService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchlistService")
            .field("movies", &self.state.movies.len())
            .field("shows", &self.state.shows.len())
            .field("is_loading", &self.state.is_loading)
            .finish()
    }
}

impl WatchlistService {
    /// Start the service over `source` and return its handle.
    pub fn spawn(
        source: Arc<dyn WatchlistSource>,
    ) -> (WatchlistHandle, JoinHandle<()>) {
        let state = WatchlistState::new();
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());

        let service = Self {
            state,
            source,
            message_rx,
            result_tx,
            result_rx,
            snapshot_tx,
        };
        let task = tokio::spawn(service.run());

        (
            WatchlistHandle {
                message_tx,
                snapshot_rx,
            },
            task,
        )
    }

    async fn run(mut self) {
        debug!("watchlist service started");
        loop {
            // Handle commands ahead of fetch results so a fresh load
            // supersedes a queued stale completion before it is looked at.
            let message = tokio::select! {
                biased;
                message = self.message_rx.recv() => match message {
                    Some(message) => message,
                    // Every handle is gone.
                    None => break,
                },
                result = self.result_rx.recv() => match result {
                    Some(message) => message,
                    // We hold a result sender, so this cannot close first.
                    None => continue,
                },
            };

            let update = update_watchlist(&mut self.state, message);
            self.publish();
            for effect in update.effects {
                match effect {
                    WatchlistEffect::Fetch { seq } => self.start_fetch(seq),
                }
            }
        }
        debug!("watchlist service closed");
    }

    fn start_fetch(&self, seq: u64) {
        let source = self.source.clone();
        let result_tx = self.result_tx.clone();
        tokio::spawn(async move {
            let message = match source.fetch().await {
                Ok(page) => WatchlistMessage::Loaded { seq, page },
                Err(err) => WatchlistMessage::LoadFailed {
                    seq,
                    error: err.to_string(),
                },
            };
            // Service gone means nobody to report to.
            let _ = result_tx.send(message);
        });
    }

    fn publish(&mut self) {
        let state = &self.state;
        self.snapshot_tx.send_if_modified(|current| {
            if current == state {
                false
            } else {
                *current = state.clone();
                true
            }
        });
    }
}
