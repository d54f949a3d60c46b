//! Kaiten is a deterministic, renderer-agnostic image carousel engine.
//!
//! It implements the stateful core of an auto-advancing, swipe-controlled,
//! interruptible image carousel — the kind behind a gallery track or a set of
//! menu columns — while leaving all drawing to the host. The public API is
//! session-oriented:
//!
//! 1. **Load**: parse and validate an [`ImageSet`] (JSON-facing defs, or
//!    build one in code)
//! 2. **Mount**: create a [`Carousel`] with [`CarouselOpts`]
//! 3. **Drive**: feed it timestamped events — dwell-timer polls, pointer
//!    gestures, explicit slide selection, animation-completion callbacks
//! 4. **Draw**: read [`CarouselState`] snapshots and accepted [`Transition`]
//!    values to paint the previous/current image pair and play the handoff
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the crate never reads a clock; hosts pass
//!   `now` into every time-sensitive call, so every interaction replays
//!   exactly in tests.
//! - **One mutation path**: every slide change funnels through a single
//!   guarded entry point, making "at most one transition in flight" a
//!   structural invariant instead of caller discipline.
//! - **Silent event-path failures**: UI event sources have no retry
//!   semantics, so out-of-range targets, mid-transition requests, and double
//!   completions are dropped, not raised.
//!
//! ```
//! use kaiten::{Carousel, CarouselOpts, ImageSet, ImageSetDef, TimeMs};
//!
//! let set = ImageSet::from_def(ImageSetDef::from_captioned_images([
//!     ("Interior view 1", "interior-1.avif"),
//!     ("Interior view 2", "interior-2.avif"),
//! ]))?;
//! let mut carousel = Carousel::new(set, CarouselOpts::default(), TimeMs(0))?;
//!
//! // Host event loop: pump the dwell timer with the host clock.
//! if let Some(transition) = carousel.tick(TimeMs(4_000)) {
//!     // Draw `transition.from` beneath `transition.to`, play the handoff,
//!     // then report back:
//!     carousel.complete_transition();
//! }
//! # Ok::<(), kaiten::KaitenError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod carousel;
mod foundation;
mod gesture;
mod machine;
mod model;
mod timer;

pub use carousel::{Carousel, CarouselOpts, Transition};
pub use foundation::error::{KaitenError, KaitenResult};
pub use foundation::time::{DurationMs, TimeMs};
pub use gesture::{DEFAULT_SWIPE_THRESHOLD_PX, PointerSession, SwipeDecision, interpret_swipe};
pub use machine::{CarouselState, Direction, Phase, SlideIndex};
pub use model::{CategoryDef, CollectionDef, ImageSet, ImageSetDef, ItemDef};
pub use timer::DwellTimer;
