//! Transport domain
//!
//! Play/pause, step and held seeks, scrubbing and aspect control for one
//! playback session.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::{
    SeekDirection, TransportCommand, TransportEffect, TransportMessage,
};
pub use state::TransportState;
pub use update::update_transport;
