//! A headless smooth-scroll animator.
//!
//! Given a scroll container ("ancestor") and a target element inside it, a [`Scroller`] animates
//! the container's vertical scroll offset to the target's aligned position over a fixed
//! duration, sampling a caller-supplied easing curve. The animation stops on its own when the
//! duration elapses, when [`Scroller::cancel`] is called, when a new [`Scroller::call`] supersedes
//! it, or when the user scrolls the container manually.
//!
//! It is UI-agnostic. A host layer is expected to provide (see [`Host`]):
//! - a monotonic clock
//! - a deferred-callback scheduler, re-entering the scroller through [`Scroller::on_timer`]
//! - layout reads (offsets, heights), scroll writes and scroll listener registration,
//!   re-entering the scroller through [`Scroller::on_scroll_event`]
//!
//! For named easing curves, an in-memory layout tree and a deterministic simulated host, see the
//! `scroller-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod host;
mod options;
mod scroller;
mod types;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use host::{Clock, Host, Layout, Scheduler};
pub use options::{DEFAULT_DURATION_MS, DEFAULT_FRAME_RATE, ScrollerOptions, TimingFunction};
pub use scroller::Scroller;
pub use types::{Ancestor, OffsetResolution, Position};
