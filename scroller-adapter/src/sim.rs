use scroller::{Ancestor, Clock, Layout, Scheduler, Scroller};

use crate::{LayoutTree, ListenerId, ManualClock, ManualScheduler, NodeId, TimerHandle};

/// A deterministic host: a [`LayoutTree`] driven by a [`ManualClock`] and [`ManualScheduler`].
///
/// Use [`run_until`] as the event loop.
///
/// Clones share the same [`ManualClock`]: advancing one clone's clock moves every clone's
/// scheduler too.
#[derive(Clone, Debug)]
pub struct SimHost {
    pub tree: LayoutTree,
    pub clock: ManualClock,
    pub scheduler: ManualScheduler,
}

impl SimHost {
    pub fn new(tree: LayoutTree) -> Self {
        let clock = ManualClock::default();
        Self {
            tree,
            scheduler: ManualScheduler::new(clock.clone()),
            clock,
        }
    }
}

impl Clock for SimHost {
    fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }
}

impl Scheduler for SimHost {
    type Handle = TimerHandle;

    fn schedule_after(&mut self, delay_ms: f64) -> TimerHandle {
        self.scheduler.schedule_after(delay_ms)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.scheduler.cancel(handle);
    }
}

impl Layout for SimHost {
    type Node = NodeId;
    type ListenerId = ListenerId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    fn offset_top(&self, node: &NodeId) -> Option<f64> {
        self.tree.offset_top(node)
    }

    fn document_offset_top(&self, node: &NodeId) -> f64 {
        self.tree.document_offset_top(node)
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        self.tree.client_height(node)
    }

    fn viewport_height(&self) -> f64 {
        self.tree.viewport_height()
    }

    fn set_scroll_top(&mut self, ancestor: &Ancestor<NodeId>, value: f64) {
        self.tree.set_scroll_top(ancestor, value);
    }

    fn add_scroll_listener(&mut self, ancestor: &Ancestor<NodeId>) -> ListenerId {
        self.tree.add_scroll_listener(ancestor)
    }

    fn remove_scroll_listener(&mut self, ancestor: &Ancestor<NodeId>, id: ListenerId) {
        self.tree.remove_scroll_listener(ancestor, id);
    }
}

/// Runs the simulated event loop up to `until_ms`.
///
/// Queued scroll events are dispatched first (events on other containers are dropped), then the
/// earliest due timer fires with the clock moved to its due time. The clock ends at `until_ms`.
///
/// Returns the number of timers fired.
pub fn run_until(scroller: &mut Scroller<SimHost>, until_ms: f64) -> usize {
    let mut fired = 0;
    loop {
        if let Some(ancestor) = scroller.host_mut().tree.take_scroll_event() {
            if ancestor == *scroller.ancestor() {
                scroller.on_scroll_event();
            }
            continue;
        }
        let host = scroller.host_mut();
        let Some((handle, due)) = host.scheduler.pop_due(until_ms) else {
            break;
        };
        host.clock.set(due);
        scroller.on_timer(handle);
        fired += 1;
    }
    scroller.host().clock.set(until_ms);
    fired
}
