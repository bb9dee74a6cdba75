use tracing::{debug, trace, warn};
use vireo_model::Fraction;

use super::messages::{
    SeekDirection, TransportCommand, TransportEffect, TransportMessage,
};
use super::state::TransportState;
use crate::domains::DomainUpdate;
use crate::engine::{EngineCommand, EngineEvent};

/// Fold one transport message into the state.
///
/// Pure with respect to the outside world: all I/O the transition wants is
/// returned as effects for the session loop to carry out, in order.
pub fn update_transport(
    state: &mut TransportState,
    message: TransportMessage,
) -> DomainUpdate<TransportEffect> {
    match message {
        TransportMessage::Command(command) => handle_command(state, command),
        TransportMessage::Engine(event) => apply_engine_event(state, event),
        TransportMessage::HoldTick => hold_tick(state),
    }
}

fn handle_command(
    state: &mut TransportState,
    command: TransportCommand,
) -> DomainUpdate<TransportEffect> {
    match command {
        TransportCommand::PlayPause => {
            if state.is_loading {
                trace!("play/pause ignored while loading");
                return DomainUpdate::none();
            }
            DomainUpdate::effect(EngineCommand::SetPaused(state.is_playing))
        }
        TransportCommand::StepBack => step(state, SeekDirection::Back),
        TransportCommand::StepForward => step(state, SeekDirection::Forward),
        TransportCommand::HoldBack { active } => {
            hold(state, SeekDirection::Back, active)
        }
        TransportCommand::HoldForward { active } => {
            hold(state, SeekDirection::Forward, active)
        }
        TransportCommand::SeekDrag(target) => seek_drag(state, target),
        TransportCommand::SeekCommit => seek_commit(state),
        TransportCommand::ToggleAspect => toggle_aspect(state),
    }
}

fn step(
    state: &mut TransportState,
    direction: SeekDirection,
) -> DomainUpdate<TransportEffect> {
    if !state.can_step(direction) {
        trace!(?direction, "step refused");
        return DomainUpdate::none();
    }
    let secs = direction.signed(state.seek_step_secs);
    debug!(secs, "step seek");
    DomainUpdate::effect(EngineCommand::SeekBy(secs))
}

fn hold(
    state: &mut TransportState,
    direction: SeekDirection,
    active: bool,
) -> DomainUpdate<TransportEffect> {
    if active {
        if state.hold == Some(direction) {
            return DomainUpdate::none();
        }
        // A press while the opposite control is held replaces that hold.
        let mut update = DomainUpdate::none();
        if state.hold.take().is_some() {
            update = update.add_effect(TransportEffect::StopHoldRepeat);
        }
        if !state.can_step(direction) {
            trace!(?direction, "hold refused");
            return update;
        }
        state.hold = Some(direction);
        debug!(?direction, "hold started");
        update.add_effect(TransportEffect::StartHoldRepeat(direction))
    } else {
        if state.hold != Some(direction) {
            trace!(?direction, "release without matching hold");
            return DomainUpdate::none();
        }
        state.hold = None;
        debug!(?direction, "hold released");
        DomainUpdate::effect(TransportEffect::StopHoldRepeat)
    }
}

fn hold_tick(state: &mut TransportState) -> DomainUpdate<TransportEffect> {
    // A tick can land after the release that disarmed the timer.
    let Some(direction) = state.hold else {
        return DomainUpdate::none();
    };
    step(state, direction)
}

fn seek_drag(
    state: &mut TransportState,
    target: Fraction,
) -> DomainUpdate<TransportEffect> {
    if state.is_loading {
        trace!("seek drag ignored while loading");
        return DomainUpdate::none();
    }
    state.progress.begin_or_update_scrub(target);
    DomainUpdate::effect(EngineCommand::PreviewAt(target))
}

fn seek_commit(state: &mut TransportState) -> DomainUpdate<TransportEffect> {
    match state.progress.end_scrub() {
        Some(scrub) => {
            debug!(target = scrub.target.value(), "scrub committed");
            DomainUpdate::effect(EngineCommand::SeekTo(scrub.target))
        }
        None => {
            trace!("commit without an active scrub");
            DomainUpdate::none()
        }
    }
}

fn toggle_aspect(state: &mut TransportState) -> DomainUpdate<TransportEffect> {
    if !state.capabilities.aspect_toggle {
        debug!("aspect toggle unavailable on this form factor");
        return DomainUpdate::none();
    }
    state.aspect = state.aspect.cycled();
    debug!(aspect = %state.aspect, "aspect toggled");
    DomainUpdate::effect(EngineCommand::SetAspect(state.aspect))
}

fn apply_engine_event(
    state: &mut TransportState,
    event: EngineEvent,
) -> DomainUpdate<TransportEffect> {
    match event {
        EngineEvent::Loading(loading) => {
            debug!(loading, "engine loading state");
            state.is_loading = loading;
            DomainUpdate::none()
        }
        EngineEvent::Playing(playing) => {
            state.is_playing = playing;
            DomainUpdate::none()
        }
        EngineEvent::Position {
            progress,
            elapsed,
            remaining,
        } => {
            state.progress.progress = progress;
            state.progress.elapsed = elapsed;
            state.progress.remaining = remaining;
            DomainUpdate::none()
        }
        EngineEvent::Buffer {
            buffering,
            fraction,
        } => {
            state.progress.is_buffering = buffering;
            state.progress.buffer_progress = fraction;
            DomainUpdate::none()
        }
        EngineEvent::ScrubPreview {
            target,
            time_label,
            preview,
        } => {
            state.progress.apply_scrub_report(target, time_label, preview);
            DomainUpdate::none()
        }
        EngineEvent::Ended => {
            debug!(media_id = %state.media_id, "stream ended");
            let mut update = DomainUpdate::none();
            if state.hold.take().is_some() {
                update = update.add_effect(TransportEffect::StopHoldRepeat);
            }
            state.progress.end_scrub();
            state.is_playing = false;
            update.add_effect(TransportEffect::EndSession)
        }
        EngineEvent::Failed(message) => {
            warn!(%message, "engine reported failure");
            state.last_error = Some(message);
            DomainUpdate::none()
        }
    }
}
