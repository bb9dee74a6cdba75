//! Tunable constants for the playback core.

/// Seek behavior
pub mod seeking {
    /// Seconds moved by a single step seek, in either direction.
    pub const STEP_SECS: f64 = 30.0;

    /// Milliseconds between repeated steps while a seek control is held.
    pub const HOLD_REPEAT_MILLIS: u64 = 500;
}
