use crate::fraction::Fraction;
use uuid::Uuid;

/// Opaque handle to an engine-rendered scrub thumbnail.
///
/// The core never touches pixel data. An engine mints one handle per
/// rendered preview frame; shells resolve handles against whatever image
/// cache they keep on their side of the fence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewHandle(pub Uuid);

impl Default for PreviewHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewHandle {
    pub fn new() -> Self {
        PreviewHandle(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An in-flight scrub gesture.
///
/// Present only while the user is dragging the position slider; everything
/// scrub-related lives here so it cannot linger after the gesture ends.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrubState {
    /// Where the drag currently points on the timeline.
    pub target: Fraction,
    /// Formatted time for the dragged position, as last reported by the
    /// engine.
    pub time_label: String,
    /// Thumbnail for the dragged position, if the engine has produced one.
    pub preview: Option<PreviewHandle>,
}

/// Playback progress as a shell should render it.
///
/// `progress`, `elapsed` and `remaining` always describe the actual play
/// head. While a scrub is active the drag position lives in [`ScrubState`];
/// use [`displayed_position`](Self::displayed_position) and
/// [`displayed_elapsed`](Self::displayed_elapsed) to get whichever value the
/// slider and time label should show right now.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackProgress {
    /// Current play-head position.
    pub progress: Fraction,
    /// Whether playback is stalled waiting on data.
    pub is_buffering: bool,
    /// How much of the stream is buffered ahead.
    pub buffer_progress: Fraction,
    /// Formatted elapsed time for the play head.
    pub elapsed: String,
    /// Formatted time remaining for the play head.
    pub remaining: String,
    /// The active scrub gesture, if any.
    pub scrub: Option<ScrubState>,
}

impl PlaybackProgress {
    /// Check if a scrub gesture is in flight
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_some()
    }

    /// The position the slider should sit at right now.
    pub fn displayed_position(&self) -> Fraction {
        self.scrub.as_ref().map_or(self.progress, |scrub| scrub.target)
    }

    /// The elapsed-time label the shell should show right now.
    pub fn displayed_elapsed(&self) -> &str {
        match &self.scrub {
            Some(scrub) => &scrub.time_label,
            None => &self.elapsed,
        }
    }

    /// Start a scrub at `target`, or move an active scrub there.
    ///
    /// A fresh scrub borrows the current elapsed label until the engine
    /// reports one for the dragged position.
    pub fn begin_or_update_scrub(&mut self, target: Fraction) {
        match &mut self.scrub {
            Some(scrub) => scrub.target = target,
            None => {
                self.scrub = Some(ScrubState {
                    target,
                    time_label: self.elapsed.clone(),
                    preview: None,
                });
            }
        }
    }

    /// Fold an engine preview report into the active scrub.
    ///
    /// Reports for positions the drag has already moved past are dropped,
    /// as is anything arriving after the gesture ended.
    pub fn apply_scrub_report(
        &mut self,
        target: Fraction,
        time_label: String,
        preview: Option<PreviewHandle>,
    ) {
        if let Some(scrub) = &mut self.scrub {
            if scrub.target == target {
                scrub.time_label = time_label;
                scrub.preview = preview;
            }
        }
    }

    /// Finish the scrub gesture, returning its final state if one was
    /// active.
    pub fn end_scrub(&mut self) -> Option<ScrubState> {
        self.scrub.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displayed_values_follow_the_play_head_when_idle() {
        let progress = PlaybackProgress {
            progress: Fraction::new(0.4),
            elapsed: "12:00".to_string(),
            remaining: "18:00".to_string(),
            ..Default::default()
        };

        assert!(!progress.is_scrubbing());
        assert_eq!(progress.displayed_position(), Fraction::new(0.4));
        assert_eq!(progress.displayed_elapsed(), "12:00");
    }

    #[test]
    fn scrub_overrides_displayed_values() {
        let mut progress = PlaybackProgress {
            progress: Fraction::new(0.4),
            elapsed: "12:00".to_string(),
            ..Default::default()
        };

        progress.begin_or_update_scrub(Fraction::new(0.8));
        assert!(progress.is_scrubbing());
        assert_eq!(progress.displayed_position(), Fraction::new(0.8));
        // Borrows the play-head label until the engine reports one.
        assert_eq!(progress.displayed_elapsed(), "12:00");

        progress.apply_scrub_report(
            Fraction::new(0.8),
            "24:00".to_string(),
            Some(PreviewHandle::new()),
        );
        assert_eq!(progress.displayed_elapsed(), "24:00");
        assert!(progress.scrub.as_ref().unwrap().preview.is_some());
    }

    #[test]
    fn stale_scrub_reports_are_dropped() {
        let mut progress = PlaybackProgress::default();
        progress.begin_or_update_scrub(Fraction::new(0.2));
        progress.begin_or_update_scrub(Fraction::new(0.6));

        progress.apply_scrub_report(Fraction::new(0.2), "old".to_string(), None);
        assert_eq!(progress.scrub.as_ref().unwrap().time_label, "");

        progress.apply_scrub_report(Fraction::new(0.6), "new".to_string(), None);
        assert_eq!(progress.displayed_elapsed(), "new");
    }

    #[test]
    fn end_scrub_clears_everything_scrub_related() {
        let mut progress = PlaybackProgress::default();
        progress.begin_or_update_scrub(Fraction::new(0.5));
        progress.apply_scrub_report(
            Fraction::new(0.5),
            "15:00".to_string(),
            Some(PreviewHandle::new()),
        );

        let finished = progress.end_scrub().unwrap();
        assert_eq!(finished.target, Fraction::new(0.5));
        assert!(!progress.is_scrubbing());
        assert!(progress.end_scrub().is_none());
    }

    #[test]
    fn reports_after_the_gesture_are_ignored() {
        let mut progress = PlaybackProgress::default();
        progress.begin_or_update_scrub(Fraction::new(0.5));
        progress.end_scrub();

        progress.apply_scrub_report(Fraction::new(0.5), "late".to_string(), None);
        assert!(progress.scrub.is_none());
    }
}
