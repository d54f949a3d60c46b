use crate::foundation::error::{KaitenError, KaitenResult};

/// Millisecond timestamp on the host's timeline.
///
/// The engine never reads a clock of its own; hosts pass `now` into every
/// time-sensitive call, which keeps every interaction replayable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimeMs(pub u64);

/// Span of milliseconds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DurationMs(pub u64); // must be > 0 for intervals

impl DurationMs {
    /// Validating constructor: spans used as intervals must be positive.
    pub fn new(ms: u64) -> KaitenResult<Self> {
        if ms == 0 {
            return Err(KaitenError::validation("DurationMs must be > 0"));
        }
        Ok(Self(ms))
    }
}

impl TimeMs {
    /// This timestamp pushed `d` into the future, clamped at the far end of
    /// the timeline.
    pub fn saturating_add(self, d: DurationMs) -> TimeMs {
        TimeMs(self.0.saturating_add(d.0))
    }
}
