//! Session object wiring one image set, one state machine, and one timer.

use crate::foundation::error::{KaitenError, KaitenResult};
use crate::foundation::time::{DurationMs, TimeMs};
use crate::gesture::{DEFAULT_SWIPE_THRESHOLD_PX, SwipeDecision};
use crate::machine::{CarouselState, Direction, SlideIndex};
use crate::model::{ImageSet, ItemDef};
use crate::timer::DwellTimer;

/// Options controlling one carousel instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselOpts {
    /// Time between automatic advances while idle.
    pub dwell_interval: DurationMs,
    /// Horizontal travel a drag must exceed to count as a swipe.
    pub swipe_threshold_px: f64,
    /// How long the render layer's handoff animation plays. Advisory: the
    /// engine leaves `Transitioning` only on [`Carousel::complete_transition`],
    /// never on a timeout of its own.
    pub transition_duration: DurationMs,
}

impl Default for CarouselOpts {
    fn default() -> Self {
        Self {
            dwell_interval: DurationMs(4_000),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            transition_duration: DurationMs(1_200),
        }
    }
}

/// One accepted slide change, handed to the render layer so it can play the
/// handoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Slide the handoff animates away from.
    pub from: SlideIndex,
    /// Slide now current.
    pub to: SlideIndex,
    /// Which way the handoff should appear to move.
    pub direction: Direction,
}

/// Session object for one mounted carousel.
///
/// Every slide change funnels through [`request_transition`]; the timer tick,
/// swipe, and explicit-selection paths are thin wrappers over it, so the
/// "at most one transition in flight" rule is enforced at one call site.
/// Dropped events return `None`; there is no caller to propagate an error to,
/// since UI event sources have no retry semantics.
///
/// # Render adapter contract
///
/// On every state change the render layer must draw the slide at
/// `state().previous()` beneath the slide at `state().current()` while the
/// phase is `Transitioning`, play its handoff animation for
/// `opts().transition_duration`, and then call [`complete_transition`]
/// exactly once — never before the animation finishes. Calling it twice is a
/// silent no-op; calling it early is a visual bug the engine cannot detect.
/// Timer polls go to [`tick`], recognized swipes to [`advance`] / [`retreat`]
/// (or [`apply_swipe`]), and thumbnail/dot clicks to [`select_slide`].
///
/// [`request_transition`]: Carousel::request_transition
/// [`complete_transition`]: Carousel::complete_transition
/// [`tick`]: Carousel::tick
/// [`advance`]: Carousel::advance
/// [`retreat`]: Carousel::retreat
/// [`apply_swipe`]: Carousel::apply_swipe
/// [`select_slide`]: Carousel::select_slide
#[derive(Clone, Debug)]
pub struct Carousel {
    set: ImageSet,
    opts: CarouselOpts,
    state: CarouselState,
    timer: DwellTimer,
}

impl Carousel {
    /// Validate options and mount a carousel over `set` at `now`.
    ///
    /// A set with zero slides yields a permanently inert carousel: the dwell
    /// timer is never armed and every event is dropped, leaving the host to
    /// present its static "coming soon" face.
    pub fn new(set: ImageSet, opts: CarouselOpts, now: TimeMs) -> KaitenResult<Self> {
        if opts.dwell_interval.0 == 0 {
            return Err(KaitenError::validation("dwell_interval must be > 0"));
        }
        if opts.transition_duration.0 == 0 {
            return Err(KaitenError::validation("transition_duration must be > 0"));
        }
        if !opts.swipe_threshold_px.is_finite() || opts.swipe_threshold_px <= 0.0 {
            return Err(KaitenError::validation(
                "swipe_threshold_px must be finite and > 0",
            ));
        }

        let mut timer = DwellTimer::new(opts.dwell_interval);
        if !set.is_empty() {
            timer.start(now);
        }

        Ok(Self {
            set,
            opts,
            state: CarouselState::new(),
            timer,
        })
    }

    /// Snapshot of the live state.
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// The options this carousel was mounted with.
    pub fn opts(&self) -> CarouselOpts {
        self.opts
    }

    /// The image set this carousel runs over.
    pub fn image_set(&self) -> &ImageSet {
        &self.set
    }

    /// Total addressable slides.
    pub fn slide_count(&self) -> usize {
        self.set.slide_count()
    }

    /// The slide the renderer should show on top.
    pub fn current_slide(&self) -> SlideIndex {
        self.state.current()
    }

    /// Item owning the current slide, as `(item index, item)`.
    pub fn current_item(&self) -> Option<(usize, &ItemDef)> {
        self.set.item_for_slide(self.state.current())
    }

    /// Item owning the outgoing slide, while a handoff plays. The renderer
    /// needs it to caption the image underneath.
    pub fn previous_item(&self) -> Option<(usize, &ItemDef)> {
        self.set.item_for_slide(self.state.previous()?)
    }

    /// Image ref for the current slide.
    pub fn current_image(&self) -> Option<&str> {
        self.set.image_ref(self.state.current())
    }

    /// Image ref for the outgoing slide, while a handoff plays.
    pub fn previous_image(&self) -> Option<&str> {
        self.set.image_ref(self.state.previous()?)
    }

    /// The single mutation entry point.
    ///
    /// `direction` selects the handoff's apparent motion only; the target is
    /// taken as given and dropped if out of range. On acceptance the dwell
    /// timer is rescheduled from `now`, so any navigation — manual or
    /// automatic — buys the viewer a full fresh dwell before the next
    /// automatic advance.
    #[tracing::instrument(skip(self))]
    pub fn request_transition(
        &mut self,
        target: SlideIndex,
        direction: Direction,
        now: TimeMs,
    ) -> Option<Transition> {
        let from = self.state.current();
        if !self.state.request(target, self.set.slide_count()) {
            tracing::trace!("transition request dropped");
            return None;
        }

        self.timer.restart(now);
        tracing::trace!(from = from.0, "transition accepted");
        Some(Transition {
            from,
            to: target,
            direction,
        })
    }

    /// Render layer finished playing the handoff.
    ///
    /// Returns whether the carousel actually left `Transitioning`; a repeat
    /// completion is a no-op.
    pub fn complete_transition(&mut self) -> bool {
        self.state.complete()
    }

    /// Advance one slide, wrapping at the end.
    pub fn advance(&mut self, now: TimeMs) -> Option<Transition> {
        let count = self.set.slide_count();
        if count == 0 {
            return None;
        }
        let target = SlideIndex((self.state.current().0 + 1) % count);
        self.request_transition(target, Direction::Next, now)
    }

    /// Step back one slide, wrapping at the start.
    pub fn retreat(&mut self, now: TimeMs) -> Option<Transition> {
        let count = self.set.slide_count();
        if count == 0 {
            return None;
        }
        let target = SlideIndex((self.state.current().0 + count - 1) % count);
        self.request_transition(target, Direction::Prev, now)
    }

    /// Jump to an explicitly selected slide (thumbnail or dot click).
    ///
    /// Direction is derived from ordering: `Next` when the target lies ahead
    /// of the current slide, else `Prev`. A tie is impossible — selecting the
    /// current slide is dropped by the request guard.
    pub fn select_slide(&mut self, target: SlideIndex, now: TimeMs) -> Option<Transition> {
        let direction = if target.0 > self.state.current().0 {
            Direction::Next
        } else {
            Direction::Prev
        };
        self.request_transition(target, direction, now)
    }

    /// Apply a recognized swipe decision.
    pub fn apply_swipe(&mut self, decision: SwipeDecision, now: TimeMs) -> Option<Transition> {
        match decision {
            SwipeDecision::Advance => self.advance(now),
            SwipeDecision::Retreat => self.retreat(now),
            SwipeDecision::None => None,
        }
    }

    /// Pump the dwell timer; returns the advance a due tick produced, if any.
    ///
    /// Ticks are delivered unconditionally — one arriving mid-transition is
    /// dropped by the request guard, not suppressed here, so the timer stays
    /// cheap and stateless about the machine.
    pub fn tick(&mut self, now: TimeMs) -> Option<Transition> {
        if !self.timer.poll(now) {
            return None;
        }
        self.advance(now)
    }

    /// Disarm the dwell timer ahead of unmount. Dropping the carousel
    /// releases everything; this exists for hosts that unmount a view before
    /// the value goes away.
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Whether the dwell timer currently has a fire scheduled.
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }
}

#[cfg(test)]
#[path = "../tests/unit/carousel.rs"]
mod tests;
