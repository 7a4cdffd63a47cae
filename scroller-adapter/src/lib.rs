//! Adapter utilities for the `scroller` crate.
//!
//! The `scroller` crate is UI-agnostic: it only talks to a host through the
//! [`scroller::Clock`], [`scroller::Scheduler`] and [`scroller::Layout`] traits. This crate
//! provides small, framework-neutral pieces commonly needed around it:
//!
//! - A table of named easing curves ([`Easing`])
//! - An in-memory layout tree ([`LayoutTree`]) with scroll offsets and scroll events
//! - A manual clock and timer queue for deterministic driving ([`ManualClock`],
//!   [`ManualScheduler`]), plus a wall clock ([`StdClock`], `std` only)
//! - A simulated host bundling the above, and an event pump ([`SimHost`], [`run_until`])
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod easing;
mod sim;
mod time;
mod tree;


pub use easing::{Easing, ParseEasingError};
pub use sim::{SimHost, run_until};
#[cfg(feature = "std")]
pub use time::StdClock;
pub use time::{ManualClock, ManualScheduler, TimerHandle};
pub use tree::{LayoutTree, ListenerId, NodeId};
