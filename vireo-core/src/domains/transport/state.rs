use vireo_model::{AspectMode, MediaID, PlaybackProgress};

use super::messages::SeekDirection;
use crate::config::{Capabilities, PlayerConfig};

/// Transport state for one playback session.
///
/// This is the snapshot shells render from. It only ever changes inside the
/// owning session loop; everyone else sees it through a watch channel.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportState {
    /// What is playing.
    pub media_id: MediaID,
    /// Progress as the shell should render it.
    pub progress: PlaybackProgress,
    /// True until the engine has the stream ready.
    pub is_loading: bool,
    /// Whether playback is currently running.
    pub is_playing: bool,
    /// Current frame mapping.
    pub aspect: AspectMode,
    /// Which optional controls the shell should offer.
    pub capabilities: Capabilities,
    /// Seconds moved by one step seek.
    pub seek_step_secs: f64,
    /// The held seek control, if any.
    pub hold: Option<SeekDirection>,
    /// Last engine failure, for the shell to surface.
    pub last_error: Option<String>,
}

impl TransportState {
    pub fn new(media_id: MediaID, config: &PlayerConfig) -> Self {
        Self {
            media_id,
            progress: PlaybackProgress::default(),
            is_loading: true,
            is_playing: false,
            aspect: config.aspect,
            capabilities: config.capabilities(),
            seek_step_secs: config.seek_step_secs,
            hold: None,
            last_error: None,
        }
    }

    /// Whether a step or hold in `direction` is allowed right now.
    ///
    /// Steps are refused while the stream is loading and at the matching
    /// timeline boundary. The boundary is judged against the displayed
    /// position, so a scrub parked at an edge counts as being there.
    pub fn can_step(&self, direction: SeekDirection) -> bool {
        if self.is_loading {
            return false;
        }
        let position = self.progress.displayed_position();
        match direction {
            SeekDirection::Back => !position.is_start(),
            SeekDirection::Forward => !position.is_end(),
        }
    }
}
