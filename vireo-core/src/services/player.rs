//! The tokio task that owns one playback session.
//!
//! All transport state for a session lives inside this task; shells talk to
//! it through a [`PlayerSessionHandle`] and watch it through snapshot
//! channels. Commands are applied strictly in the order they were sent, and
//! each command's engine effects run before the next message is taken, so
//! the engine sees gestures the way the user performed them.

use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Interval, MissedTickBehavior, interval_at};
use tokio_stream::wrappers::WatchStream;
use tracing::debug;
use vireo_model::{Fraction, MediaID};

use crate::config::PlayerConfig;
use crate::domains::transport::{
    SeekDirection, TransportCommand, TransportEffect, TransportMessage,
    TransportState, update_transport,
};
use crate::engine::{EngineEvent, PlaybackEngine};

/// Shell-side handle to a running [`PlayerSession`].
///
/// Command methods are fire-and-forget; if the session is gone there is
/// nobody left to observe the command either.
#[derive(Debug, Clone)]
pub struct PlayerSessionHandle {
    command_tx: mpsc::UnboundedSender<TransportCommand>,
    snapshot_rx: watch::Receiver<TransportState>,
}

impl PlayerSessionHandle {
    /// Toggle between playing and paused.
    pub fn play_pause(&self) {
        self.send(TransportCommand::PlayPause);
    }

    /// Step the play head backward by the configured step.
    pub fn step_back(&self) {
        self.send(TransportCommand::StepBack);
    }

    /// Step the play head forward by the configured step.
    pub fn step_forward(&self) {
        self.send(TransportCommand::StepForward);
    }

    /// Press (`true`) or release (`false`) the held backward-seek control.
    pub fn hold_back(&self, active: bool) {
        self.send(TransportCommand::HoldBack { active });
    }

    /// Press or release the held forward-seek control.
    pub fn hold_forward(&self, active: bool) {
        self.send(TransportCommand::HoldForward { active });
    }

    /// Report the position slider at `target` mid-drag.
    pub fn seek_drag(&self, target: impl Into<Fraction>) {
        self.send(TransportCommand::SeekDrag(target.into()));
    }

    /// Report the position slider released.
    pub fn seek_commit(&self) {
        self.send(TransportCommand::SeekCommit);
    }

    /// Cycle the aspect mode, where the form factor allows it.
    pub fn toggle_aspect(&self) {
        self.send(TransportCommand::ToggleAspect);
    }

    /// The latest published snapshot.
    pub fn state(&self) -> TransportState {
        self.snapshot_rx.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    ///
    /// The receiver closes when the session ends.
    pub fn subscribe(&self) -> watch::Receiver<TransportState> {
        self.snapshot_rx.clone()
    }

    /// Snapshot updates as a stream.
    pub fn snapshots(&self) -> WatchStream<TransportState> {
        WatchStream::new(self.snapshot_rx.clone())
    }

    fn send(&self, command: TransportCommand) {
        let _ = self.command_tx.send(command);
    }
}

/// The task that owns a session's [`TransportState`].
pub struct PlayerSession {
    state: TransportState,
    engine: Arc<dyn PlaybackEngine>,
    command_rx: mpsc::UnboundedReceiver<TransportCommand>,
    event_rx: mpsc::UnboundedReceiver<EngineEvent>,
    snapshot_tx: watch::Sender<TransportState>,
    hold_timer: Option<Interval>,
    hold_period: Duration,
}

impl fmt::Debug for PlayerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerSession")
            .field("media_id", &self.state.media_id)
            .field("is_loading", &self.state.is_loading)
            .field("hold", &self.state.hold)
            .finish()
    }
}

impl PlayerSession {
    /// Start a session for `media_id` and return its handle.
    ///
    /// `engine_events` is the engine's report channel; the session ends when
    /// the engine reports the stream ended, when that channel closes, or
    /// when every handle has been dropped. The returned [`JoinHandle`] lets
    /// embedders await teardown.
    pub fn spawn(
        media_id: MediaID,
        config: &PlayerConfig,
        engine: Arc<dyn PlaybackEngine>,
        engine_events: mpsc::UnboundedReceiver<EngineEvent>,
    ) -> (PlayerSessionHandle, JoinHandle<()>) {
        let state = TransportState::new(media_id, config);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());

        let session = Self {
            state,
            engine,
            command_rx,
            event_rx: engine_events,
            snapshot_tx,
            hold_timer: None,
            hold_period: Duration::from_millis(config.hold_repeat_millis),
        };
        let task = tokio::spawn(session.run());

        (
            PlayerSessionHandle {
                command_tx,
                snapshot_rx,
            },
            task,
        )
    }

    async fn run(mut self) {
        debug!(media_id = %self.state.media_id, "player session started");
        loop {
            // Commands drain ahead of timer ticks, so a press-and-release
            // that beats the first tick repeats zero times.
            let message = tokio::select! {
                biased;
                command = self.command_rx.recv() => match command {
                    Some(command) => TransportMessage::Command(command),
                    // Every handle is gone; nobody can observe us anymore.
                    None => break,
                },
                event = self.event_rx.recv() => match event {
                    Some(event) => TransportMessage::Engine(event),
                    // Engine hung up.
                    None => break,
                },
                _ = Self::hold_tick(&mut self.hold_timer) => {
                    TransportMessage::HoldTick
                }
            };

            if self.process(message).await.is_break() {
                break;
            }
        }
        // Dropping the session drops the timer and closes the snapshot
        // channel, which is how subscribers learn the session is over.
        debug!(media_id = %self.state.media_id, "player session closed");
    }

    async fn hold_tick(timer: &mut Option<Interval>) {
        match timer {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    async fn process(&mut self, message: TransportMessage) -> ControlFlow<()> {
        let update = update_transport(&mut self.state, message);
        self.publish();

        let mut flow = ControlFlow::Continue(());
        for effect in update.effects {
            match effect {
                TransportEffect::Engine(command) => {
                    if let Err(err) = self.engine.execute(command).await {
                        let failed = EngineEvent::Failed(err.to_string());
                        let _ = update_transport(&mut self.state, failed.into());
                    }
                }
                TransportEffect::StartHoldRepeat(direction) => {
                    self.arm_hold_timer(direction);
                }
                TransportEffect::StopHoldRepeat => {
                    self.hold_timer = None;
                }
                TransportEffect::EndSession => {
                    flow = ControlFlow::Break(());
                }
            }
        }
        self.publish();
        flow
    }

    fn arm_hold_timer(&mut self, direction: SeekDirection) {
        // First repeat lands one full period after the press.
        let period = self.hold_period;
        let mut timer =
            interval_at(tokio::time::Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(?direction, ?period, "hold repeat armed");
        self.hold_timer = Some(timer);
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
