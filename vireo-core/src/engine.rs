//! Contract between the core and an actual playback backend.

use async_trait::async_trait;
use vireo_model::{AspectMode, Fraction, PreviewHandle};

use crate::error::Result;

/// A command the core issues to the playback engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    /// Pause or resume playback.
    SetPaused(bool),
    /// Seek relative to the play head, in seconds. Negative is backward.
    SeekBy(f64),
    /// Seek to an absolute timeline position.
    SeekTo(Fraction),
    /// Change how the frame maps onto the window.
    SetAspect(AspectMode),
    /// Ask for a preview frame and time label for a timeline position.
    PreviewAt(Fraction),
}

/// Something the engine reports back about playback.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The engine started or finished preparing the stream.
    Loading(bool),
    /// Playback resumed or paused.
    Playing(bool),
    /// Periodic play-head report.
    Position {
        progress: Fraction,
        elapsed: String,
        remaining: String,
    },
    /// Buffer occupancy changed.
    Buffer { buffering: bool, fraction: Fraction },
    /// Answer to an [`EngineCommand::PreviewAt`] request.
    ScrubPreview {
        target: Fraction,
        time_label: String,
        preview: Option<PreviewHandle>,
    },
    /// The stream ran to its end.
    Ended,
    /// A command or the stream itself failed.
    Failed(String),
}

/// Driver-side contract for a playback backend.
///
/// Implementations should return promptly; long work belongs on the
/// engine's own threads, with outcomes reported back as [`EngineEvent`]s
/// through the session's event channel.
#[async_trait]
pub trait PlaybackEngine: Send + Sync {
    /// Execute one transport command.
    async fn execute(&self, command: EngineCommand) -> Result<()>;
}
