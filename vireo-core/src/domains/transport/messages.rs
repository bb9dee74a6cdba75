use vireo_model::Fraction;

use crate::engine::{EngineCommand, EngineEvent};

/// A user-initiated transport action.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCommand {
    /// Toggle between playing and paused.
    PlayPause,
    /// Step the play head backward by the configured step.
    StepBack,
    /// Step the play head forward by the configured step.
    StepForward,
    /// The backward-seek control was pressed (`true`) or released (`false`).
    HoldBack { active: bool },
    /// The forward-seek control was pressed or released.
    HoldForward { active: bool },
    /// The position slider moved to `target` mid-drag.
    SeekDrag(Fraction),
    /// The position slider was let go.
    SeekCommit,
    /// Cycle the aspect mode, where the form factor allows it.
    ToggleAspect,
}

/// Everything the transport update folds over.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportMessage {
    /// A command from the shell.
    Command(TransportCommand),
    /// A report from the playback engine.
    Engine(EngineEvent),
    /// The hold-repeat timer fired.
    HoldTick,
}

impl From<TransportCommand> for TransportMessage {
    fn from(command: TransportCommand) -> Self {
        TransportMessage::Command(command)
    }
}

impl From<EngineEvent> for TransportMessage {
    fn from(event: EngineEvent) -> Self {
        TransportMessage::Engine(event)
    }
}

/// Which way a seek control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Back,
    Forward,
}

impl SeekDirection {
    /// Apply this direction's sign to a step magnitude.
    pub fn signed(self, step_secs: f64) -> f64 {
        match self {
            SeekDirection::Back => -step_secs,
            SeekDirection::Forward => step_secs,
        }
    }
}

/// A side effect the session loop must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEffect {
    /// Forward a command to the playback engine.
    Engine(EngineCommand),
    /// Arm the hold-repeat timer for `SeekDirection`.
    StartHoldRepeat(SeekDirection),
    /// Disarm and drop the hold-repeat timer.
    StopHoldRepeat,
    /// Playback is over; the session should wind down.
    EndSession,
}

impl From<EngineCommand> for TransportEffect {
    fn from(command: EngineCommand) -> Self {
        TransportEffect::Engine(command)
    }
}
