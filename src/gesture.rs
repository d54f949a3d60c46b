//! Gesture interpreter: raw pointer coordinates to discrete swipe decisions.

/// Default horizontal travel (px) a drag must exceed to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Discrete outcome of a completed pointer gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Pointer travelled left past the threshold: reveal the next slide.
    Advance,
    /// Pointer travelled right past the threshold: reveal the previous slide.
    Retreat,
    /// Travel stayed within the threshold, or the gesture never completed.
    None,
}

/// Threshold-gated swipe decision from raw start/end x coordinates.
///
/// With `d = start_x - end_x`: `d > threshold_px` is an advance (the finger
/// moved left), `d < -threshold_px` a retreat, anything else — including an
/// unset endpoint, meaning no completed gesture — is no decision. The sign
/// test on `d` is the entire algorithm; there is no velocity or multi-touch
/// handling.
pub fn interpret_swipe(
    start_x: Option<f64>,
    end_x: Option<f64>,
    threshold_px: f64,
) -> SwipeDecision {
    let (Some(start), Some(end)) = (start_x, end_x) else {
        return SwipeDecision::None;
    };

    let d = start - end;
    if d > threshold_px {
        SwipeDecision::Advance
    } else if d < -threshold_px {
        SwipeDecision::Retreat
    } else {
        SwipeDecision::None
    }
}

/// Tracks one pointer interaction, press to release, for any input device.
///
/// One tracker replaces parallel mouse/touch handler pairs: hosts forward
/// press/drag/release from whichever device produced them and get the same
/// decision either way. Coordinates are plain x positions in px; `0.0` is a
/// valid endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSession {
    start_x: Option<f64>,
    last_x: Option<f64>,
}

impl PointerSession {
    /// Fresh tracker with no interaction in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down at `x`. Discards any stale endpoint.
    pub fn press(&mut self, x: f64) {
        self.start_x = Some(x);
        self.last_x = None;
    }

    /// Pointer moved to `x`. Ignored unless a press is in progress.
    pub fn drag(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    /// Pointer went up: interpret the travel and clear the session.
    pub fn release(&mut self, threshold_px: f64) -> SwipeDecision {
        let decision = interpret_swipe(self.start_x, self.last_x, threshold_px);
        self.start_x = None;
        self.last_x = None;
        decision
    }

    /// Abandon the interaction without a decision (pointer left the surface,
    /// focus loss).
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }
}

#[cfg(test)]
#[path = "../tests/unit/gesture.rs"]
mod tests;
