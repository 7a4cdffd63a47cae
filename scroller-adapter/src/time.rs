use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use scroller::{Clock, Scheduler};

/// A clock that only moves when told to. Clones share the same reading.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<f64>>);

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self(Rc::new(Cell::new(now_ms)))
    }

    /// Moves the clock to `now_ms`. Readings never go backwards.
    pub fn set(&self, now_ms: f64) {
        if now_ms > self.0.get() {
            self.0.set(now_ms);
        }
    }

    pub fn advance(&self, delta_ms: f64) {
        self.set(self.0.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.0.get()
    }
}

/// A wall clock backed by [`std::time::Instant`], reading milliseconds since creation.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A timer queue keyed on a [`ManualClock`]. Nothing fires by itself: the owner polls
/// [`ManualScheduler::pop_due`] and dispatches.
#[derive(Clone, Debug)]
pub struct ManualScheduler {
    clock: ManualClock,
    next: u64,
    pending: Vec<(TimerHandle, f64)>,
}

impl ManualScheduler {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            next: 0,
            pending: Vec::new(),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// The earliest pending timer and its due time.
    pub fn next_due(&self) -> Option<(TimerHandle, f64)> {
        self.pending
            .iter()
            .copied()
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
    }

    /// Removes and returns the earliest timer due at or before `until_ms`.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<(TimerHandle, f64)> {
        let (handle, due) = self.next_due()?;
        if due > until_ms {
            return None;
        }
        self.pending.retain(|(h, _)| *h != handle);
        Some((handle, due))
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerHandle;

    fn schedule_after(&mut self, delay_ms: f64) -> TimerHandle {
        self.next += 1;
        let handle = TimerHandle(self.next);
        self.pending
            .push((handle, self.clock.now_ms() + delay_ms.max(0.0)));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }
}
