use core::fmt;

use crate::geometry;
use crate::{Ancestor, Host, Position, Result, ScrollerOptions};

/// Per-animation state. Present only while an animation is running.
struct Animation<H: Host> {
    start_ms: f64,
    /// The single pending tick. `None` only while a tick is executing.
    tick: Option<H::Handle>,
    listener: H::ListenerId,
    /// Set after each scroll write; the next scroll event is attributed to that write.
    suppress_next_scroll_event: bool,
}

impl<H: Host> fmt::Debug for Animation<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("start_ms", &self.start_ms)
            .field("tick", &self.tick)
            .field("listener", &self.listener)
            .field("suppress_next_scroll_event", &self.suppress_next_scroll_event)
            .finish()
    }
}

/// A smooth-scroll controller bound to one scroll container and at most one target.
///
/// This type does not own an event loop. The host drives it by:
/// - calling [`Scroller::on_timer`] when a callback requested through
///   [`crate::Scheduler::schedule_after`] fires
/// - calling [`Scroller::on_scroll_event`] when the ancestor raises a scroll event while the
///   scroller's listener is registered
///
/// A `Scroller` is built once and reused across many `call()` / `cancel()` cycles. Only one
/// animation is ever in flight.
pub struct Scroller<H: Host> {
    host: H,
    options: ScrollerOptions<H::Node>,
    frame_interval_ms: f64,
    animation: Option<Animation<H>>,
}

impl<H: Host> Scroller<H> {
    /// Creates an idle scroller.
    ///
    /// Fails when `options` carries a non-positive duration or a zero frame rate.
    pub fn new(host: H, options: ScrollerOptions<H::Node>) -> Result<Self> {
        options.validate()?;
        sdebug!(
            duration_ms = options.duration_ms,
            position = options.position.as_str(),
            frame_rate = options.frame_rate,
            "Scroller::new"
        );
        Ok(Self {
            host,
            frame_interval_ms: options.frame_interval_ms(),
            options,
            animation: None,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &ScrollerOptions<H::Node> {
        &self.options
    }

    pub fn ancestor(&self) -> &Ancestor<H::Node> {
        &self.options.ancestor
    }

    pub fn target(&self) -> Option<&H::Node> {
        self.options.target.as_ref()
    }

    /// Changes the alignment mode. A running animation uses it from its next tick.
    pub fn set_position(&mut self, position: Position) {
        self.options.position = position;
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Rebinds the destination element.
    ///
    /// A running animation is not restarted; its next tick measures the new target. Pair this
    /// with [`Scroller::call`] to animate towards the new target from a fresh start.
    pub fn set_target(&mut self, target: Option<H::Node>) {
        self.options.target = target;
    }

    /// Resolves the scroll offset that aligns the current target, or `None` without a target.
    ///
    /// This is measured fresh on every call, so layout changes are picked up.
    pub fn scroll_length(&self) -> Option<f64> {
        let target = self.options.target.as_ref()?;
        Some(geometry::scroll_length(
            &self.host,
            &self.options.ancestor,
            target,
            self.options.position,
            self.options.offset_resolution,
        ))
    }

    /// Starts (or restarts) the animation towards the current target.
    ///
    /// Any running animation is cancelled first. Without a target this does nothing else. The
    /// first frame is written before this returns.
    pub fn call(&mut self) {
        self.cancel();

        if self.options.target.is_none() {
            sdebug!("Scroller::call without target");
            return;
        }

        let listener = self.host.add_scroll_listener(&self.options.ancestor);
        let start_ms = self.host.now_ms();
        sdebug!(start_ms, "Scroller::call");
        self.animation = Some(Animation {
            start_ms,
            tick: None,
            listener,
            suppress_next_scroll_event: false,
        });
        self.run_frame();
    }

    /// Aborts the running animation, if any. Safe to call at any time.
    pub fn cancel(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };
        if let Some(handle) = animation.tick {
            self.host.cancel(handle);
        }
        self.host
            .remove_scroll_listener(&self.options.ancestor, animation.listener);
        sdebug!(start_ms = animation.start_ms, "Scroller::cancel");
    }

    /// Entry point for fired scheduler callbacks.
    ///
    /// Handles that do not match the pending tick belong to a cancelled or superseded animation
    /// and are ignored.
    pub fn on_timer(&mut self, handle: H::Handle) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        if animation.tick != Some(handle) {
            strace!(?handle, "Scroller::on_timer: stale handle");
            return;
        }
        animation.tick = None;
        self.run_frame();
    }

    /// Entry point for scroll events raised on the ancestor.
    ///
    /// The first event after each scroll write is attributed to the write and ignored. Any other
    /// event is a user scroll and cancels the animation.
    pub fn on_scroll_event(&mut self) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        if animation.suppress_next_scroll_event {
            animation.suppress_next_scroll_event = false;
            return;
        }
        sdebug!("Scroller::on_scroll_event: interrupted by user scroll");
        self.cancel();
    }

    fn run_frame(&mut self) {
        let Some(start_ms) = self.animation.as_ref().map(|a| a.start_ms) else {
            return;
        };
        let Some(full_length) = self.scroll_length() else {
            // The target was unbound mid-flight.
            self.cancel();
            return;
        };

        let elapsed = self.host.now_ms() - start_ms;
        let time_fraction = (elapsed / self.options.duration_ms).min(1.0);
        let progress = (self.options.timing)(time_fraction);
        let value = progress * full_length;

        self.host.set_scroll_top(&self.options.ancestor, value);
        strace!(elapsed, time_fraction, value, "Scroller::run_frame");

        if time_fraction >= 1.0 {
            sdebug!(value, "Scroller: animation complete");
            self.cancel();
            return;
        }

        let handle = self.host.schedule_after(self.frame_interval_ms);
        if let Some(animation) = self.animation.as_mut() {
            animation.suppress_next_scroll_event = true;
            animation.tick = Some(handle);
        }
    }
}

impl<H: Host> Drop for Scroller<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<H: Host + fmt::Debug> fmt::Debug for Scroller<H>
where
    H::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scroller")
            .field("host", &self.host)
            .field("options", &self.options)
            .field("frame_interval_ms", &self.frame_interval_ms)
            .field("animation", &self.animation)
            .finish()
    }
}
