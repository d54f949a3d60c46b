//! Carousel state machine: current/previous slide pair and transition phase.

/// Index of one addressable slide in the flattened image sequence.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct SlideIndex(pub usize);

/// Motion hint for the render layer's handoff animation.
///
/// Direction never participates in computing a target index; it only tells
/// the renderer which way the handoff should appear to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Handoff moves toward the following slide.
    Next,
    /// Handoff moves toward the preceding slide.
    Prev,
}

/// Whether a previous/current handoff is currently playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No handoff in flight; the dwell timer is the only pending event.
    Idle,
    /// A previous/current image pair is animating in the render layer.
    Transitioning,
}

/// Live state of one carousel.
///
/// `previous` is only meaningful while the phase is [`Phase::Transitioning`],
/// and is never equal to `current` when defined. Both invariants hold
/// structurally because the only mutation paths are `request` and `complete`,
/// which this module keeps crate-private: callers outside the crate go
/// through the session object, so the "at most one transition in flight"
/// rule lives at exactly one call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current: SlideIndex,
    previous: Option<SlideIndex>,
    phase: Phase,
}

impl CarouselState {
    /// Fresh state: slide 0, no outgoing slide, idle.
    pub fn new() -> Self {
        Self {
            current: SlideIndex(0),
            previous: None,
            phase: Phase::Idle,
        }
    }

    /// The slide the renderer should show on top.
    pub fn current(&self) -> SlideIndex {
        self.current
    }

    /// The outgoing slide, while a handoff plays.
    pub fn previous(&self) -> Option<SlideIndex> {
        self.previous
    }

    /// Current transition phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a handoff is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// The single mutation entry point.
    ///
    /// Returns `false` and leaves the state untouched when a handoff is
    /// already in flight, when `target` is the current slide, when `target`
    /// is out of range, or when there are no slides at all. Out-of-range
    /// targets are dropped, never wrapped; wrapping is the caller's business
    /// and only for targets it computes itself.
    pub(crate) fn request(&mut self, target: SlideIndex, slide_count: usize) -> bool {
        if self.phase == Phase::Transitioning {
            return false;
        }
        if slide_count == 0 || target.0 >= slide_count {
            return false;
        }
        if target == self.current {
            return false;
        }

        self.previous = Some(self.current);
        self.current = target;
        self.phase = Phase::Transitioning;
        true
    }

    /// Finish the in-flight handoff.
    ///
    /// Render layers cannot always guarantee exactly-once delivery, so a
    /// completion while already idle is a no-op, reported as `false`.
    pub(crate) fn complete(&mut self) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        self.previous = None;
        self.phase = Phase::Idle;
        true
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/unit/machine.rs"]
mod tests;
