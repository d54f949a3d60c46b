//! Dwell timer: one owned, explicitly cancellable deadline per carousel.

use crate::foundation::time::{DurationMs, TimeMs};

/// Repeating dwell timer for one carousel instance.
///
/// The timer owns a single deadline slot, so two armed timers cannot be
/// represented — `restart` overwrites in place rather than stacking a second
/// interval. It reads no clock of its own: hosts drive it by calling
/// [`poll`] with their `now`, which keeps auto-advance schedules exact in
/// tests.
///
/// [`poll`]: DwellTimer::poll
#[derive(Clone, Copy, Debug)]
pub struct DwellTimer {
    interval: DurationMs,
    deadline: Option<TimeMs>, // at most one armed deadline
}

impl DwellTimer {
    /// New stopped timer with the given dwell interval.
    pub fn new(interval: DurationMs) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arm the timer if it is stopped. An armed timer keeps its schedule.
    pub fn start(&mut self, now: TimeMs) {
        if self.deadline.is_none() {
            self.deadline = Some(now.saturating_add(self.interval));
        }
    }

    /// Cancel any pending fire and reschedule a full interval from `now`.
    pub fn restart(&mut self, now: TimeMs) {
        self.deadline = Some(now.saturating_add(self.interval));
    }

    /// Cancel the pending fire.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Whether a fire is currently scheduled.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The dwell interval this timer was built with.
    pub fn interval(&self) -> DurationMs {
        self.interval
    }

    /// Report whether the deadline has come due, re-arming on fire.
    ///
    /// At most one tick is reported per call, and the timer re-arms from the
    /// previous deadline (fixed cadence), so a host that polls late observes
    /// catch-up ticks on later polls rather than a burst.
    pub fn poll(&mut self, now: TimeMs) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(deadline.saturating_add(self.interval));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/timer.rs"]
mod tests;
