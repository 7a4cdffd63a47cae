use crate::Ancestor;

/// A monotonic clock.
pub trait Clock {
    /// Current reading in milliseconds. Readings must never decrease.
    fn now_ms(&self) -> f64;
}

/// A deferred-callback scheduler.
///
/// The scroller never blocks or loops internally: it asks the scheduler for a single deferred
/// callback and the host re-enters it with [`crate::Scroller::on_timer`] once the delay elapsed.
pub trait Scheduler {
    type Handle: Copy + Eq + core::fmt::Debug;

    fn schedule_after(&mut self, delay_ms: f64) -> Self::Handle;

    /// Invalidates a pending callback. Cancelling a handle that already fired is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// The rendering environment: layout measurements, scroll writes and scroll listeners.
///
/// Only the vertical axis is used.
pub trait Layout {
    /// An element handle. Equality is identity.
    type Node: Clone + PartialEq;
    type ListenerId: Copy + core::fmt::Debug;

    /// The node containing `node`, or `None` at the root.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Offset of `node` from its parent's top edge, or `None` when it cannot be measured.
    fn offset_top(&self, node: &Self::Node) -> Option<f64>;

    /// Offset of `node` from the top of the document.
    fn document_offset_top(&self, node: &Self::Node) -> f64;

    /// Visible height of an element.
    fn client_height(&self, node: &Self::Node) -> f64;

    /// Height of the whole viewport.
    fn viewport_height(&self) -> f64;

    /// Sets the absolute scroll offset of `ancestor`.
    ///
    /// A write is expected to raise a scroll event on `ancestor`, delivered later through
    /// [`crate::Scroller::on_scroll_event`].
    fn set_scroll_top(&mut self, ancestor: &Ancestor<Self::Node>, value: f64);

    fn add_scroll_listener(&mut self, ancestor: &Ancestor<Self::Node>) -> Self::ListenerId;

    fn remove_scroll_listener(&mut self, ancestor: &Ancestor<Self::Node>, id: Self::ListenerId);
}

/// Everything a [`crate::Scroller`] needs from its environment.
pub trait Host: Layout + Scheduler + Clock {}

impl<T: Layout + Scheduler + Clock> Host for T {}
