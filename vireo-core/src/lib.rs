//! # Vireo Core
//!
//! Headless view-model logic for media front ends: the transport controls
//! of a playback session and the loading of a user's watchlist, with no
//! opinion about how either is drawn.
//!
//! ## Overview
//!
//! `vireo-core` splits each feature into two layers:
//!
//! - **Domains**: plain state structs plus pure `update` functions that fold
//!   one message into the state and return the side effects they want run.
//!   Everything testable lives here.
//! - **Services**: one tokio task per domain that owns the state, applies
//!   messages strictly in order, performs the requested effects, and
//!   broadcasts immutable snapshots through a watch channel.
//!
//! The crate talks to the outside world through two traits: a
//! [`PlaybackEngine`](engine::PlaybackEngine) executes transport commands
//! and reports playback events, and a
//! [`WatchlistSource`](source::WatchlistSource) fetches watchlist content.
//! Shells hold the service handles, render the snapshots, and forward user
//! gestures back as commands.
//!
//! ## Architecture
//!
//! - [`domains::transport`]: play/pause, step and held seeks, scrubbing,
//!   aspect control
//! - [`domains::watchlist`]: watchlist loading with newest-request-wins
//!   supersession
//! - [`services`]: the tasks that drive both domains
//! - [`config`]: player configuration and per-form-factor capabilities
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//! use vireo_core::config::PlayerConfig;
//! use vireo_core::engine::PlaybackEngine;
//! use vireo_core::services::player::PlayerSession;
//! use vireo_model::{MediaID, MovieID};
//!
//! async fn start(engine: Arc<dyn PlaybackEngine>) {
//!     let (_event_tx, event_rx) = mpsc::unbounded_channel();
//!     let config = PlayerConfig::load();
//!     let (handle, _task) = PlayerSession::spawn(
//!         MediaID::from(MovieID::new()),
//!         &config,
//!         engine,
//!         event_rx,
//!     );
//!
//!     let mut snapshots = handle.subscribe();
//!     handle.play_pause();
//!     while snapshots.changed().await.is_ok() {
//!         let state = snapshots.borrow().clone();
//!         println!("playing: {}", state.is_playing);
//!     }
//! }
//! ```

pub mod config;
pub mod constants;
pub mod domains;
pub mod engine;
pub mod error;
pub mod services;
pub mod source;

pub use config::{Capabilities, FormFactor, PlayerConfig};
pub use domains::transport::{TransportCommand, TransportState};
pub use domains::watchlist::WatchlistState;
pub use engine::{EngineCommand, EngineEvent, PlaybackEngine};
pub use error::{CoreError, Result};
pub use services::player::{PlayerSession, PlayerSessionHandle};
pub use services::watchlist::{WatchlistHandle, WatchlistService};
pub use source::WatchlistSource;
