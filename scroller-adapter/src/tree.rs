use alloc::collections::VecDeque;
use alloc::vec::Vec;

use scroller::{Ancestor, Layout};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Clone, Copy, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    offset_top: Option<f64>,
    height: f64,
    scroll_top: f64,
}

/// An arena of vertically stacked elements.
///
/// Each element has an offset from its parent (or none, when it cannot be measured), a visible
/// height and its own scroll offset. The viewport has a height and a scroll offset.
///
/// Scroll writes behave like a browser: offsets are clamped at zero, and a write that changes the
/// offset of a container with registered listeners queues one scroll event for it. Events are
/// drained with [`LayoutTree::take_scroll_event`].
#[derive(Clone, Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<NodeData>,
    viewport_height: f64,
    viewport_scroll_top: f64,
    next_listener: u64,
    listeners: Vec<(Ancestor<NodeId>, ListenerId)>,
    events: VecDeque<Ancestor<NodeId>>,
    scroll_writes: usize,
}

impl LayoutTree {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    pub fn add_root(&mut self, height: f64) -> NodeId {
        self.push(None, Some(0.0), height)
    }

    pub fn add_child(&mut self, parent: NodeId, offset_top: f64, height: f64) -> NodeId {
        self.push(Some(parent), Some(offset_top), height)
    }

    /// Adds a child whose offset cannot be measured (e.g. an inline wrapper).
    pub fn add_unmeasured_child(&mut self, parent: NodeId, height: f64) -> NodeId {
        self.push(Some(parent), None, height)
    }

    fn push(&mut self, parent: Option<NodeId>, offset_top: Option<f64>, height: f64) -> NodeId {
        self.nodes.push(NodeData {
            parent,
            offset_top,
            height,
            scroll_top: 0.0,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn set_offset_top(&mut self, node: NodeId, offset_top: Option<f64>) {
        self.nodes[node.0].offset_top = offset_top;
    }

    pub fn set_height(&mut self, node: NodeId, height: f64) {
        self.nodes[node.0].height = height;
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    pub fn scroll_top(&self, ancestor: &Ancestor<NodeId>) -> f64 {
        match ancestor {
            Ancestor::Viewport => self.viewport_scroll_top,
            Ancestor::Element(node) => self.nodes[node.0].scroll_top,
        }
    }

    /// Number of scroll writes made through [`Layout::set_scroll_top`].
    pub fn scroll_writes(&self) -> usize {
        self.scroll_writes
    }

    pub fn listener_count(&self, ancestor: &Ancestor<NodeId>) -> usize {
        self.listeners.iter().filter(|(a, _)| a == ancestor).count()
    }

    /// Scrolls `ancestor` as a user would (wheel, drag, keyboard).
    pub fn user_scroll(&mut self, ancestor: &Ancestor<NodeId>, value: f64) {
        self.write_scroll_top(ancestor, value);
    }

    pub fn take_scroll_event(&mut self) -> Option<Ancestor<NodeId>> {
        self.events.pop_front()
    }

    pub fn pending_scroll_events(&self) -> usize {
        self.events.len()
    }

    // A write that leaves the offset unchanged raises no event. A scroller that wrote it keeps
    // its suppression armed, so the next event (even a user scroll) is treated as self-caused.
    fn write_scroll_top(&mut self, ancestor: &Ancestor<NodeId>, value: f64) {
        let value = value.max(0.0);
        let slot = match ancestor {
            Ancestor::Viewport => &mut self.viewport_scroll_top,
            Ancestor::Element(node) => &mut self.nodes[node.0].scroll_top,
        };
        if *slot == value {
            return;
        }
        *slot = value;
        if self.listener_count(ancestor) > 0 {
            self.events.push_back(*ancestor);
        }
    }
}

impl Layout for LayoutTree {
    type Node = NodeId;
    type ListenerId = ListenerId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn offset_top(&self, node: &NodeId) -> Option<f64> {
        self.nodes[node.0].offset_top
    }

    fn document_offset_top(&self, node: &NodeId) -> f64 {
        let mut offset = 0.0;
        let mut cur = Some(*node);
        while let Some(n) = cur {
            let data = &self.nodes[n.0];
            offset += data.offset_top.unwrap_or(0.0);
            cur = data.parent;
        }
        offset
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn set_scroll_top(&mut self, ancestor: &Ancestor<NodeId>, value: f64) {
        self.scroll_writes += 1;
        self.write_scroll_top(ancestor, value);
    }

    fn add_scroll_listener(&mut self, ancestor: &Ancestor<NodeId>) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((*ancestor, id));
        id
    }

    fn remove_scroll_listener(&mut self, ancestor: &Ancestor<NodeId>, id: ListenerId) {
        self.listeners.retain(|(a, l)| !(a == ancestor && *l == id));
    }
}
