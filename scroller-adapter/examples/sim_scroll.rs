use scroller::{Ancestor, Position, Scroller, ScrollerOptions};
use scroller_adapter::{Easing, LayoutTree, SimHost, run_until};

fn main() {
    // Example: smooth-scroll a nested panel to an item, then interrupt a second animation with a
    // simulated user scroll.
    //
    // A real adapter would:
    // - implement `scroller::Layout` over its widget tree (offsets, heights, scroll writes)
    // - forward timer callbacks to `Scroller::on_timer`
    // - forward scroll events on the container to `Scroller::on_scroll_event`
    let mut tree = LayoutTree::new(720.0);
    let root = tree.add_root(4000.0);
    let panel = tree.add_child(root, 120.0, 400.0);
    let list = tree.add_unmeasured_child(panel, 3000.0);
    let rows: Vec<_> = (0..100)
        .map(|i| tree.add_child(list, i as f64 * 30.0, 30.0))
        .collect();

    let ancestor = Ancestor::Element(panel);
    let easing: Easing = "ease-in-out-cubic".parse().expect("known easing");
    let mut s = Scroller::new(
        SimHost::new(tree),
        ScrollerOptions::new(ancestor)
            .with_target(Some(rows[60]))
            .with_duration_ms(400.0)
            .with_position(Position::Center)
            .with_timing_function(easing.timing_function()),
    )
    .expect("valid options");

    println!("target_offset={:?}", s.scroll_length());
    s.call();
    let mut now_ms = 0.0;
    while s.is_animating() {
        now_ms += 80.0;
        run_until(&mut s, now_ms);
        println!("t={now_ms} off={}", s.host().tree.scroll_top(&ancestor));
    }

    s.set_target(Some(rows[5]));
    s.call();
    run_until(&mut s, now_ms + 100.0);
    s.host_mut().tree.user_scroll(&ancestor, 900.0);
    run_until(&mut s, now_ms + 1000.0);
    println!(
        "interrupted: animating={} off={}",
        s.is_animating(),
        s.host().tree.scroll_top(&ancestor)
    );
}
