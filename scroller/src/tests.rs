use crate::*;

use alloc::vec;
use alloc::vec::Vec;

/// A deterministic, dependency-free host for tests.
///
/// Nodes are indexes into `nodes`. Scheduled callbacks and scroll events are queued and
/// delivered by [`pump`].
#[derive(Debug, Default)]
struct FakeHost {
    nodes: Vec<FakeNode>,
    viewport_height: f64,
    now: f64,
    next_handle: u64,
    timers: Vec<(u64, f64)>,
    next_listener: u32,
    listeners: Vec<u32>,
    writes: Vec<f64>,
    pending_events: usize,
}

#[derive(Clone, Copy, Debug, Default)]
struct FakeNode {
    parent: Option<usize>,
    offset_top: Option<f64>,
    document_offset_top: f64,
    height: f64,
}

impl FakeHost {
    fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    fn add(&mut self, parent: Option<usize>, offset_top: Option<f64>, height: f64) -> usize {
        let base = parent.map_or(0.0, |p| self.nodes[p].document_offset_top);
        self.nodes.push(FakeNode {
            parent,
            offset_top,
            document_offset_top: base + offset_top.unwrap_or(0.0),
            height,
        });
        self.nodes.len() - 1
    }

    fn user_scroll(&mut self) {
        if !self.listeners.is_empty() {
            self.pending_events += 1;
        }
    }
}

impl Clock for FakeHost {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

impl Scheduler for FakeHost {
    type Handle = u64;

    fn schedule_after(&mut self, delay_ms: f64) -> u64 {
        self.next_handle += 1;
        self.timers.push((self.next_handle, self.now + delay_ms));
        self.next_handle
    }

    fn cancel(&mut self, handle: u64) {
        self.timers.retain(|(h, _)| *h != handle);
    }
}

impl Layout for FakeHost {
    type Node = usize;
    type ListenerId = u32;

    fn parent(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].parent
    }

    fn offset_top(&self, node: &usize) -> Option<f64> {
        self.nodes[*node].offset_top
    }

    fn document_offset_top(&self, node: &usize) -> f64 {
        self.nodes[*node].document_offset_top
    }

    fn client_height(&self, node: &usize) -> f64 {
        self.nodes[*node].height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn set_scroll_top(&mut self, _ancestor: &Ancestor<usize>, value: f64) {
        self.writes.push(value);
        if !self.listeners.is_empty() {
            self.pending_events += 1;
        }
    }

    fn add_scroll_listener(&mut self, _ancestor: &Ancestor<usize>) -> u32 {
        self.next_listener += 1;
        self.listeners.push(self.next_listener);
        self.next_listener
    }

    fn remove_scroll_listener(&mut self, _ancestor: &Ancestor<usize>, id: u32) {
        self.listeners.retain(|l| *l != id);
    }
}

/// Delivers queued scroll events and due timers, in order, until `until_ms`.
fn pump(s: &mut Scroller<FakeHost>, until_ms: f64) {
    loop {
        if s.host().pending_events > 0 {
            s.host_mut().pending_events -= 1;
            s.on_scroll_event();
            continue;
        }
        let next = s
            .host()
            .timers
            .iter()
            .copied()
            .filter(|(_, due)| *due <= until_ms)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        let Some((handle, due)) = next else {
            break;
        };
        let host = s.host_mut();
        host.timers.retain(|(h, _)| *h != handle);
        host.now = host.now.max(due);
        s.on_timer(handle);
    }
    let host = s.host_mut();
    host.now = host.now.max(until_ms);
}

fn page_with_target(offset: f64, height: f64) -> (FakeHost, usize) {
    let mut host = FakeHost::new(800.0);
    let body = host.add(None, Some(0.0), 5000.0);
    let target = host.add(Some(body), Some(offset), height);
    (host, target)
}

fn assert_idle(s: &Scroller<FakeHost>) {
    assert!(!s.is_animating());
    assert!(s.host().timers.is_empty());
    assert!(s.host().listeners.is_empty());
}

#[test]
fn center_on_viewport_matches_worked_example() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let s = Scroller::new(
        host,
        ScrollerOptions::default()
            .with_target(Some(target))
            .with_position(Position::Center),
    )
    .unwrap();
    assert_eq!(s.scroll_length(), Some(1650.0));
}

#[test]
fn positions_on_nested_container_walk_parent_chain() {
    let mut host = FakeHost::new(800.0);
    let body = host.add(None, Some(0.0), 5000.0);
    let container = host.add(Some(body), Some(999.0), 300.0);
    let wrapper = host.add(Some(container), None, 1000.0);
    let section = host.add(Some(wrapper), Some(300.0), 600.0);
    let target = host.add(Some(section), Some(50.0), 40.0);

    let mut s = Scroller::new(
        host,
        ScrollerOptions::new(Ancestor::Element(container))
            .with_target(Some(target))
            .with_position(Position::Start),
    )
    .unwrap();
    // The container's own offset and the unmeasurable wrapper contribute nothing.
    assert_eq!(s.scroll_length(), Some(350.0));

    s.set_position(Position::Center);
    assert_eq!(s.scroll_length(), Some(350.0 - 150.0 + 20.0));

    s.set_position(Position::End);
    assert_eq!(s.scroll_length(), Some(350.0 - 300.0 + 40.0));
}

#[test]
fn walk_stops_at_root_when_container_is_not_an_ancestor() {
    let mut host = FakeHost::new(800.0);
    let body = host.add(None, Some(10.0), 5000.0);
    let other = host.add(Some(body), Some(100.0), 300.0);
    let target = host.add(Some(body), Some(400.0), 20.0);

    let s = Scroller::new(
        host,
        ScrollerOptions::new(Ancestor::Element(other))
            .with_target(Some(target))
            .with_position(Position::Start),
    )
    .unwrap();
    assert_eq!(s.scroll_length(), Some(410.0));
}

#[test]
fn document_relative_resolution_ignores_nested_container() {
    let mut host = FakeHost::new(800.0);
    let body = host.add(None, Some(0.0), 5000.0);
    let container = host.add(Some(body), Some(1000.0), 300.0);
    let target = host.add(Some(container), Some(50.0), 40.0);

    let s = Scroller::new(
        host,
        ScrollerOptions::new(Ancestor::Element(container))
            .with_target(Some(target))
            .with_position(Position::Start)
            .with_offset_resolution(OffsetResolution::DocumentRelative),
    )
    .unwrap();
    assert_eq!(s.scroll_length(), Some(1050.0));
}

#[test]
fn animation_lands_exactly_on_target_and_goes_idle() {
    for duration in [1.0, 16.0, 250.0, 1000.0, 1234.5] {
        let (host, target) = page_with_target(2000.0, 100.0);
        let mut s = Scroller::new(
            host,
            ScrollerOptions::default()
                .with_target(Some(target))
                .with_duration_ms(duration)
                .with_timing(|t| t * t * (3.0 - 2.0 * t)),
        )
        .unwrap();

        s.call();
        assert!(s.is_animating());
        pump(&mut s, duration + 100.0);

        assert_eq!(s.host().writes.last().copied(), Some(1650.0));
        assert_idle(&s);
    }
}

#[test]
fn first_frame_is_written_synchronously() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(host, ScrollerOptions::default().with_target(Some(target))).unwrap();

    s.call();
    assert_eq!(s.host().writes, vec![0.0]);
    assert_eq!(s.host().timers.len(), 1);
    assert_eq!(s.host().listeners.len(), 1);
}

#[test]
fn call_without_target_is_a_noop() {
    let (host, _) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(host, ScrollerOptions::default()).unwrap();

    s.call();
    pump(&mut s, 2000.0);

    assert!(s.host().writes.is_empty());
    assert_eq!(s.host().next_listener, 0);
    assert_idle(&s);
}

#[test]
fn linear_halfway_is_half_the_distance() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(
        host,
        ScrollerOptions::default()
            .with_target(Some(target))
            .with_duration_ms(1000.0)
            .with_position(Position::Start),
    )
    .unwrap();

    s.call();
    pump(&mut s, 500.0);

    let last = s.host().writes.last().copied().unwrap();
    let tolerance = s.frame_interval_ms() / 1000.0 * 2000.0;
    assert!((last - 1000.0).abs() <= tolerance + 1e-6, "last={last}");
    assert!(s.is_animating());
}

#[test]
fn cancel_is_idempotent() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(host, ScrollerOptions::default().with_target(Some(target))).unwrap();

    s.cancel();
    s.cancel();
    assert_idle(&s);

    s.call();
    s.cancel();
    s.cancel();
    assert_idle(&s);
    assert_eq!(s.host().writes.len(), 1);
}

#[test]
fn restart_supersedes_running_animation() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(host, ScrollerOptions::default().with_target(Some(target))).unwrap();

    s.call();
    let stale = s.host().timers[0].0;
    s.host_mut().pending_events = 0;

    s.host_mut().now = 300.0;
    s.call();
    assert_eq!(s.host().timers.len(), 1);
    assert_eq!(s.host().listeners.len(), 1);
    assert_ne!(s.host().timers[0].0, stale);

    let writes = s.host().writes.len();
    s.on_timer(stale);
    assert_eq!(s.host().writes.len(), writes);

    // The restarted animation counts time from the second call.
    assert_eq!(s.host().writes.last().copied(), Some(0.0));
    pump(&mut s, 1299.0);
    assert!(s.is_animating());
    pump(&mut s, 1400.0);
    assert_idle(&s);
}

#[test]
fn self_caused_scroll_event_is_suppressed_once() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(host, ScrollerOptions::default().with_target(Some(target))).unwrap();

    s.call();
    s.on_scroll_event();
    assert!(s.is_animating());

    s.on_scroll_event();
    assert_idle(&s);
}

#[test]
fn user_scroll_between_ticks_cancels() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(host, ScrollerOptions::default().with_target(Some(target))).unwrap();

    s.call();
    pump(&mut s, 100.0);
    assert!(s.is_animating());

    s.host_mut().user_scroll();
    let writes = s.host().writes.len();
    pump(&mut s, 2000.0);

    assert_eq!(s.host().writes.len(), writes);
    assert_idle(&s);
}

#[test]
fn scroll_events_while_idle_are_ignored() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(host, ScrollerOptions::default().with_target(Some(target))).unwrap();

    s.on_scroll_event();
    s.on_timer(42);
    assert_idle(&s);
    assert!(s.host().writes.is_empty());
}

#[test]
fn set_target_rebinds_without_starting() {
    let mut host = FakeHost::new(800.0);
    let body = host.add(None, Some(0.0), 5000.0);
    let first = host.add(Some(body), Some(1000.0), 100.0);
    let second = host.add(Some(body), Some(3000.0), 100.0);

    let mut s = Scroller::new(
        host,
        ScrollerOptions::default()
            .with_target(Some(first))
            .with_position(Position::Start),
    )
    .unwrap();

    s.set_target(Some(second));
    assert!(!s.is_animating());
    assert_eq!(s.target(), Some(&second));

    s.call();
    pump(&mut s, 200.0);
    s.set_target(Some(first));
    assert!(s.is_animating());

    pump(&mut s, 2000.0);
    assert_eq!(s.host().writes.last().copied(), Some(1000.0));
    assert_idle(&s);
}

#[test]
fn unbinding_target_mid_flight_stops_animation() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(host, ScrollerOptions::default().with_target(Some(target))).unwrap();

    s.call();
    pump(&mut s, 100.0);
    s.set_target(None);
    let writes = s.host().writes.len();
    pump(&mut s, 2000.0);

    assert_eq!(s.host().writes.len(), writes);
    assert_idle(&s);
}

#[test]
fn late_ticks_do_not_stretch_the_duration() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(
        host,
        ScrollerOptions::default()
            .with_target(Some(target))
            .with_position(Position::Start),
    )
    .unwrap();

    s.call();
    let handle = s.host().timers[0].0;
    s.host_mut().timers.clear();
    s.host_mut().pending_events = 0;

    // The host delivers the next tick very late: the animation completes immediately.
    s.host_mut().now = 5000.0;
    s.on_timer(handle);

    assert_eq!(s.host().writes, vec![0.0, 2000.0]);
    assert_idle(&s);
}

#[test]
fn layout_changes_are_picked_up_every_tick() {
    let (host, target) = page_with_target(2000.0, 100.0);
    let mut s = Scroller::new(
        host,
        ScrollerOptions::default()
            .with_target(Some(target))
            .with_position(Position::Start),
    )
    .unwrap();

    s.call();
    pump(&mut s, 500.0);
    s.host_mut().nodes[target].document_offset_top = 3000.0;
    pump(&mut s, 2000.0);

    assert_eq!(s.host().writes.last().copied(), Some(3000.0));
}

#[test]
fn options_are_validated() {
    let err = Scroller::new(
        FakeHost::new(800.0),
        ScrollerOptions::default().with_duration_ms(0.0),
    )
    .unwrap_err();
    assert_eq!(err, Error::InvalidDuration(0.0));

    assert!(
        Scroller::new(
            FakeHost::new(800.0),
            ScrollerOptions::default().with_duration_ms(f64::NAN),
        )
        .is_err()
    );

    let err = Scroller::new(
        FakeHost::new(800.0),
        ScrollerOptions::default().with_frame_rate(0),
    )
    .unwrap_err();
    assert_eq!(err, Error::InvalidFrameRate);
}

#[test]
fn defaults() {
    let options = ScrollerOptions::<usize>::default();
    assert_eq!(options.ancestor, Ancestor::Viewport);
    assert_eq!(options.target, None);
    assert_eq!(options.duration_ms, DEFAULT_DURATION_MS);
    assert_eq!(options.position, Position::Center);
    assert_eq!(options.offset_resolution, OffsetResolution::Scoped);
    assert_eq!((options.timing)(0.25), 0.25);
    assert!((options.frame_interval_ms() - 1000.0 / 60.0).abs() < 1e-9);
}

#[test]
fn position_names_parse() {
    assert_eq!("start".parse::<Position>(), Ok(Position::Start));
    assert_eq!("top".parse::<Position>(), Ok(Position::Start));
    assert_eq!(" Center ".parse::<Position>(), Ok(Position::Center));
    assert_eq!("END".parse::<Position>(), Ok(Position::End));
    assert!(matches!(
        "middle".parse::<Position>(),
        Err(Error::UnknownPosition(_))
    ));

    assert!(
        ScrollerOptions::<usize>::default()
            .with_position_name("bottom")
            .is_err()
    );

    assert_eq!(
        "document-relative".parse::<OffsetResolution>(),
        Ok(OffsetResolution::DocumentRelative)
    );
    assert!(matches!(
        "page".parse::<OffsetResolution>(),
        Err(Error::UnknownOffsetResolution(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn serde_names_round_trip() {
    assert_eq!(
        serde_json::from_str::<Position>("\"top\"").unwrap(),
        Position::Start
    );
    assert_eq!(
        serde_json::to_string(&Position::Center).unwrap(),
        "\"center\""
    );
    assert_eq!(
        serde_json::from_str::<OffsetResolution>("\"document-relative\"").unwrap(),
        OffsetResolution::DocumentRelative
    );
    assert!(serde_json::from_str::<Position>("\"middle\"").is_err());

    let ancestor: Ancestor<u32> = serde_json::from_str("{\"Element\":7}").unwrap();
    assert_eq!(ancestor, Ancestor::Element(7));
    assert_eq!(ancestor.element(), Some(&7));
}

#[test]
fn ancestor_element_accessor() {
    assert_eq!(Ancestor::<usize>::Viewport.element(), None);
    assert_eq!(Ancestor::Element(3usize).element(), Some(&3));
}
