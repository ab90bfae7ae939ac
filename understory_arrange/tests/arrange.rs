// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-level tests for `understory_arrange`.
//!
//! These drive an [`Arrange`] binding over a [`StackSurface`] wrapped in a
//! host that records every side effect, so tests can check not only the final
//! order but also which visual-tree calls a gesture made.

use kurbo::{Point, Rect};
use understory_arrange::stack::{StackGhost, StackNode, StackSelector, StackSurface};
use understory_arrange::{
    Arrange, ArrangeHost, ArrangeOptions, ConfigError, DragEvent, DragPhase, Geometry,
    Placement, PointerSample, ScrollEasing, ViewportMetrics,
};

const A: u32 = 1;
const B: u32 = 2;
const C: u32 = 3;
const D: u32 = 4;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Hidden(StackNode, bool),
    GhostCreated(StackNode, String),
    GhostRemoved,
    MoveBefore(StackNode, StackNode),
    MoveAfter(StackNode, StackNode),
    ScrollTop(f64),
    Suppressed(bool),
}

/// [`StackSurface`] plus a log of mutating calls.
struct Recording {
    surface: StackSurface,
    calls: Vec<Call>,
    /// Make `create_ghost` fail.
    refuse_ghosts: bool,
    /// Report no box for the container.
    hide_container: bool,
}

impl Recording {
    fn new(surface: StackSurface) -> Self {
        Self {
            surface,
            calls: Vec::new(),
            refuse_ghosts: false,
            hide_container: false,
        }
    }

    fn ghost_created(&self) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, Call::GhostCreated(..)))
    }

    fn visibility_touched(&self) -> bool {
        self.calls.iter().any(|c| matches!(c, Call::Hidden(..)))
    }
}

impl Geometry for Recording {
    type Key = StackNode;

    fn bounds(&self, key: &StackNode) -> Option<Rect> {
        if self.hide_container && *key == StackNode::Container {
            return None;
        }
        self.surface.bounds(key)
    }

    fn layout_origin(&self, key: &StackNode) -> Option<Point> {
        self.surface.layout_origin(key)
    }

    fn viewport(&self) -> ViewportMetrics {
        self.surface.viewport()
    }
}

impl ArrangeHost for Recording {
    type Selector = StackSelector;
    type Ghost = StackGhost;

    fn query(&self, selector: &StackSelector, out: &mut Vec<StackNode>) {
        self.surface.query(selector, out);
    }

    fn closest(&self, key: &StackNode, selector: &StackSelector) -> Option<StackNode> {
        self.surface.closest(key, selector)
    }

    fn parent(&self, key: &StackNode) -> Option<StackNode> {
        self.surface.parent(key)
    }

    fn move_before(&mut self, key: &StackNode, anchor: &StackNode) {
        self.calls.push(Call::MoveBefore(*key, *anchor));
        self.surface.move_before(key, anchor);
    }

    fn move_after(&mut self, key: &StackNode, anchor: &StackNode) {
        self.calls.push(Call::MoveAfter(*key, *anchor));
        self.surface.move_after(key, anchor);
    }

    fn set_hidden(&mut self, key: &StackNode, hidden: bool) {
        self.calls.push(Call::Hidden(*key, hidden));
        self.surface.set_hidden(key, hidden);
    }

    fn create_ghost(&mut self, key: &StackNode, class: &str) -> Option<StackGhost> {
        if self.refuse_ghosts {
            return None;
        }
        self.calls.push(Call::GhostCreated(*key, class.to_owned()));
        self.surface.create_ghost(key, class)
    }

    fn move_ghost(&mut self, ghost: &StackGhost, origin: Point) {
        self.surface.move_ghost(ghost, origin);
    }

    fn ghost_bounds(&self, ghost: &StackGhost) -> Option<Rect> {
        self.surface.ghost_bounds(ghost)
    }

    fn remove_ghost(&mut self, ghost: StackGhost) {
        self.calls.push(Call::GhostRemoved);
        self.surface.remove_ghost(ghost);
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.calls.push(Call::ScrollTop(scroll_top));
        self.surface.set_scroll_top(scroll_top);
    }

    fn set_scroll_suppressed(&mut self, suppressed: bool) {
        self.calls.push(Call::Suppressed(suppressed));
        self.surface.set_scroll_suppressed(suppressed);
    }
}

type Binding = Arrange<StackNode, StackSelector, StackGhost>;

/// Rows A, B, C, D, 40px tall each, stacked from y = 0 in a 600px viewport.
fn abcd() -> Recording {
    Recording::new(StackSurface::new(200.0).with_items([(A, 40.0), (B, 40.0), (C, 40.0), (D, 40.0)]))
}

fn binding() -> Binding {
    Arrange::new(ArrangeOptions::new(StackSelector::Items)).unwrap()
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn press(arrange: &mut Binding, host: &mut Recording, item: u32, pos: Point) -> DragEvent<StackNode> {
    arrange.handle(host, PointerSample::start(StackNode::Item(item), pos))
}

fn drag(arrange: &mut Binding, host: &mut Recording, pos: Point) -> DragEvent<StackNode> {
    arrange.handle(host, PointerSample::moved(pos))
}

fn release(arrange: &mut Binding, host: &mut Recording, pos: Point) -> DragEvent<StackNode> {
    arrange.handle(host, PointerSample::end(pos))
}

#[test]
fn dragging_first_past_third_midpoint_places_it_after() {
    let mut host = abcd();
    let mut arrange = binding();

    assert_eq!(
        press(&mut arrange, &mut host, A, pt(20.0, 20.0)),
        DragEvent::Armed(StackNode::Item(A))
    );
    assert_eq!(
        drag(&mut arrange, &mut host, pt(20.0, 30.0)),
        DragEvent::Started(StackNode::Item(A))
    );

    // Ghost now spans 80..120 and covers C's center (100).
    let event = drag(&mut arrange, &mut host, pt(20.0, 100.0));
    let DragEvent::Dragged { reorder: Some(reorder), scroll_delta } = &event else {
        panic!("expected a reorder, got {event:?}");
    };
    assert_eq!(*scroll_delta, 0.0);
    assert_eq!(reorder.item, StackNode::Item(A));
    assert_eq!(reorder.anchor, StackNode::Item(C));
    assert_eq!(reorder.placement, Placement::After);
    assert_eq!((reorder.from, reorder.to), (0, 2));

    assert_eq!(host.surface.order(), [B, C, A, D]);
    assert_eq!(
        arrange.session().items(),
        [B, C, A, D].map(StackNode::Item)
    );

    release(&mut arrange, &mut host, pt(20.0, 100.0));
    assert_eq!(host.surface.order(), [B, C, A, D]);
}

#[test]
fn dragging_last_up_past_second_midpoint_places_it_before() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, D, pt(20.0, 140.0));
    drag(&mut arrange, &mut host, pt(20.0, 130.0));
    // Ghost spans 55..95 and covers B's center (60).
    let event = drag(&mut arrange, &mut host, pt(20.0, 75.0));
    let DragEvent::Dragged { reorder: Some(reorder), .. } = &event else {
        panic!("expected a reorder, got {event:?}");
    };
    assert_eq!(reorder.anchor, StackNode::Item(B));
    assert_eq!(reorder.placement, Placement::Before);
    assert!(host
        .calls
        .contains(&Call::MoveBefore(StackNode::Item(D), StackNode::Item(B))));

    release(&mut arrange, &mut host, pt(20.0, 75.0));
    assert_eq!(host.surface.order(), [A, D, B, C]);
}

#[test]
fn small_wiggle_is_a_click() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    assert_eq!(drag(&mut arrange, &mut host, pt(22.0, 21.0)), DragEvent::Pending);
    assert_eq!(drag(&mut arrange, &mut host, pt(23.0, 20.0)), DragEvent::Pending);
    assert_eq!(
        release(&mut arrange, &mut host, pt(23.0, 20.0)),
        DragEvent::Ended {
            item: StackNode::Item(A),
            dragged: false
        }
    );

    assert_eq!(host.surface.order(), [A, B, C, D]);
    assert!(!host.ghost_created());
    assert!(!host.visibility_touched());
    assert_eq!(host.calls, [Call::Suppressed(true), Call::Suppressed(false)]);
}

#[test]
fn threshold_is_per_axis_and_strict() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, B, pt(50.0, 60.0));
    // Exactly 5px in both axes: diagonal distance > 5 but neither axis is.
    assert_eq!(drag(&mut arrange, &mut host, pt(55.0, 55.0)), DragEvent::Pending);
    assert_eq!(arrange.phase(), DragPhase::Armed);
    assert_eq!(
        drag(&mut arrange, &mut host, pt(55.5, 60.0)),
        DragEvent::Started(StackNode::Item(B))
    );
}

#[test]
fn drag_start_creates_ghost_and_hides_original() {
    let mut host = abcd();
    let options = ArrangeOptions::new(StackSelector::Items).with_class_prefix("todo-");
    let mut arrange: Binding = Arrange::new(options).unwrap();

    press(&mut arrange, &mut host, C, pt(20.0, 100.0));
    drag(&mut arrange, &mut host, pt(40.0, 100.0));

    assert_eq!(arrange.phase(), DragPhase::Dragging);
    assert_eq!(arrange.session().ghost(), Some(&StackGhost(C)));
    assert_eq!(host.surface.ghost_class(), Some("todo-dragging"));
    assert!(host.surface.is_hidden(C));
    assert!(host.surface.is_scroll_suppressed());
    // The ghost starts on top of the original.
    assert_eq!(host.surface.ghost_rect(), host.surface.item_rect(C));

    // The next move puts it at origin + total pointer offset.
    drag(&mut arrange, &mut host, pt(45.0, 103.0));
    assert_eq!(
        host.surface.ghost_rect(),
        Some(Rect::new(25.0, 83.0, 225.0, 123.0))
    );
}

#[test]
fn release_after_drag_tears_everything_down() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    drag(&mut arrange, &mut host, pt(20.0, 40.0));
    drag(&mut arrange, &mut host, pt(20.0, 100.0));
    assert_eq!(
        release(&mut arrange, &mut host, pt(20.0, 100.0)),
        DragEvent::Ended {
            item: StackNode::Item(A),
            dragged: true
        }
    );

    assert_eq!(arrange.phase(), DragPhase::Idle);
    assert_eq!(arrange.session().dragged(), None);
    assert_eq!(arrange.session().ghost(), None);
    assert_eq!(arrange.session().pointer(), None);
    assert_eq!(arrange.session().container(), None);
    assert!(arrange.session().items().is_empty());

    assert_eq!(host.surface.ghost_rect(), None);
    assert!(!host.surface.is_hidden(A));
    assert!(!host.surface.is_scroll_suppressed());
    assert_eq!(host.calls.last(), Some(&Call::Suppressed(false)));
    assert!(host.calls.contains(&Call::Hidden(StackNode::Item(A), false)));
    assert!(host.calls.contains(&Call::GhostRemoved));
}

#[test]
fn cancel_uses_the_same_teardown() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, B, pt(20.0, 60.0));
    drag(&mut arrange, &mut host, pt(20.0, 80.0));
    let event = arrange.handle(&mut host, PointerSample::cancel(pt(20.0, 80.0)));

    assert_eq!(
        event,
        DragEvent::Ended {
            item: StackNode::Item(B),
            dragged: true
        }
    );
    assert_eq!(host.surface.ghost_rect(), None);
    assert!(!host.surface.is_hidden(B));
}

#[test]
fn repeat_hit_without_movement_does_not_swap_again() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    drag(&mut arrange, &mut host, pt(20.0, 30.0));
    drag(&mut arrange, &mut host, pt(20.0, 100.0));
    assert_eq!(host.surface.order(), [B, C, A, D]);

    // Same pointer position again: the ghost still sits at 80..120, but A now
    // occupies that slot and no sibling center is inside it.
    let event = drag(&mut arrange, &mut host, pt(20.0, 100.0));
    assert_eq!(
        event,
        DragEvent::Dragged {
            scroll_delta: 0.0,
            reorder: None
        }
    );
    assert_eq!(host.surface.order(), [B, C, A, D]);
}

#[test]
fn no_hover_means_no_reorder() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, B, pt(20.0, 60.0));
    // Wander about without any sibling center entering the ghost.
    for y in [70.0, 75.0, 50.0, 45.0, 60.0] {
        drag(&mut arrange, &mut host, pt(20.0, y));
    }
    release(&mut arrange, &mut host, pt(20.0, 60.0));

    assert_eq!(host.surface.order(), [A, B, C, D]);
    assert!(!host
        .calls
        .iter()
        .any(|c| matches!(c, Call::MoveBefore(..) | Call::MoveAfter(..))));
}

#[test]
fn sweeping_down_walks_past_each_sibling() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    for y in (30..=150).step_by(5) {
        drag(&mut arrange, &mut host, pt(20.0, f64::from(y)));
    }
    release(&mut arrange, &mut host, pt(20.0, 150.0));

    assert_eq!(host.surface.order(), [B, C, D, A]);
}

#[test]
fn idle_moves_and_releases_are_ignored() {
    let mut host = abcd();
    let mut arrange = binding();

    assert_eq!(drag(&mut arrange, &mut host, pt(20.0, 20.0)), DragEvent::Ignored);
    assert_eq!(release(&mut arrange, &mut host, pt(20.0, 20.0)), DragEvent::Ignored);
    assert!(host.calls.is_empty());
}

#[test]
fn press_outside_items_is_ignored() {
    let mut host = abcd();
    let mut arrange = binding();

    let event = arrange.handle(
        &mut host,
        PointerSample::start(StackNode::Container, pt(5.0, 5.0)),
    );
    assert_eq!(event, DragEvent::Ignored);
    assert_eq!(arrange.phase(), DragPhase::Idle);

    // Items that no longer exist are not draggable either.
    assert_eq!(press(&mut arrange, &mut host, 99, pt(5.0, 5.0)), DragEvent::Ignored);
    assert!(host.calls.is_empty());
}

#[test]
fn drag_handle_restricts_where_a_drag_can_start() {
    let mut host = Recording::new(
        StackSurface::new(200.0)
            .with_grips(20.0)
            .with_items([(A, 40.0), (B, 40.0), (C, 40.0)]),
    );
    let options = ArrangeOptions::new(StackSelector::Items).with_drag_handle(StackSelector::Grips);
    let mut arrange: Binding = Arrange::new(options).unwrap();

    // Pressing the item body does nothing.
    assert_eq!(press(&mut arrange, &mut host, A, pt(100.0, 20.0)), DragEvent::Ignored);

    // Pressing its grip drags the whole item.
    let event = arrange.handle(
        &mut host,
        PointerSample::start(StackNode::Grip(A), pt(10.0, 20.0)),
    );
    assert_eq!(event, DragEvent::Armed(StackNode::Item(A)));
    drag(&mut arrange, &mut host, pt(10.0, 30.0));
    drag(&mut arrange, &mut host, pt(10.0, 100.0));
    release(&mut arrange, &mut host, pt(10.0, 100.0));

    assert_eq!(host.surface.order(), [B, C, A]);
}

#[test]
fn collection_is_refreshed_on_every_press() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    release(&mut arrange, &mut host, pt(20.0, 20.0));

    host.surface.push(5, 40.0);
    assert!(host.surface.remove(B));

    press(&mut arrange, &mut host, 5, pt(20.0, 140.0));
    assert_eq!(
        arrange.session().items(),
        [A, C, D, 5].map(StackNode::Item)
    );
    assert_eq!(arrange.session().container(), Some(&StackNode::Container));

    drag(&mut arrange, &mut host, pt(20.0, 130.0));
    drag(&mut arrange, &mut host, pt(20.0, 35.0));
    release(&mut arrange, &mut host, pt(20.0, 35.0));
    assert_eq!(host.surface.order(), [5, A, C, D]);
}

#[test]
fn press_during_active_gesture_ends_it_first() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    drag(&mut arrange, &mut host, pt(20.0, 40.0));
    assert!(host.surface.is_hidden(A));

    assert_eq!(
        press(&mut arrange, &mut host, C, pt(20.0, 100.0)),
        DragEvent::Armed(StackNode::Item(C))
    );
    assert!(!host.surface.is_hidden(A));
    assert_eq!(host.surface.ghost_rect(), None);
    assert_eq!(arrange.phase(), DragPhase::Armed);
    assert_eq!(arrange.session().dragged(), Some(&StackNode::Item(C)));
}

#[test]
fn item_removed_mid_drag_is_skipped() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    drag(&mut arrange, &mut host, pt(20.0, 30.0));

    // B disappears; C and D slide up to 40..80 and 80..120.
    host.surface.remove(B);
    // Ghost at 40..80 covers C's new center (60). B has no box and is skipped.
    let event = drag(&mut arrange, &mut host, pt(20.0, 60.0));
    let DragEvent::Dragged { reorder: Some(reorder), .. } = &event else {
        panic!("expected a reorder, got {event:?}");
    };
    assert_eq!(reorder.anchor, StackNode::Item(C));
    release(&mut arrange, &mut host, pt(20.0, 60.0));
    assert_eq!(host.surface.order(), [C, A, D]);
}

#[test]
fn auto_scroll_follows_pointer_near_bottom_edge() {
    let mut host = Recording::new(
        StackSurface::new(200.0)
            .with_viewport_height(200.0)
            .with_items((1..=20).map(|id| (id, 40.0))),
    );
    let mut arrange: Binding =
        Arrange::new(ArrangeOptions::new(StackSelector::Items).with_scroll_speed(20.0)).unwrap();

    press(&mut arrange, &mut host, 3, pt(20.0, 100.0));
    drag(&mut arrange, &mut host, pt(20.0, 110.0));

    // 190 is 10px from the bottom edge of a 40px zone: 3/4 speed.
    let event = drag(&mut arrange, &mut host, pt(20.0, 190.0));
    let DragEvent::Dragged { scroll_delta, .. } = &event else {
        panic!("expected a drag tick, got {event:?}");
    };
    assert_eq!(*scroll_delta, 15.0);
    assert_eq!(host.surface.scroll_top(), 15.0);

    // Pointer sits still in document space: the viewport moved, so it is now
    // 25px from the bottom edge.
    let event = drag(&mut arrange, &mut host, pt(20.0, 190.0));
    let DragEvent::Dragged { scroll_delta, .. } = &event else {
        panic!("expected a drag tick, got {event:?}");
    };
    assert_eq!(*scroll_delta, 7.5);
    assert_eq!(host.surface.scroll_top(), 22.5);

    // Out of the zone: no scroll.
    let event = drag(&mut arrange, &mut host, pt(20.0, 120.0));
    let DragEvent::Dragged { scroll_delta, .. } = &event else {
        panic!("expected a drag tick, got {event:?}");
    };
    assert_eq!(*scroll_delta, 0.0);
    assert_eq!(host.surface.scroll_top(), 22.5);
}

#[test]
fn auto_scroll_upwards_with_constant_easing() {
    let mut host = Recording::new(
        StackSurface::new(200.0)
            .with_viewport_height(200.0)
            .with_items((1..=20).map(|id| (id, 40.0))),
    );
    host.surface.set_scroll_top(400.0);
    let options = ArrangeOptions::new(StackSelector::Items)
        .with_scroll_speed(12.0)
        .with_scroll_easing(ScrollEasing::Constant);
    let mut arrange: Binding = Arrange::new(options).unwrap();

    // Item 12 spans 440..480.
    press(&mut arrange, &mut host, 12, pt(20.0, 460.0));
    drag(&mut arrange, &mut host, pt(20.0, 450.0));
    drag(&mut arrange, &mut host, pt(20.0, 430.0));

    assert_eq!(host.surface.scroll_top(), 388.0);
    assert!(host.calls.contains(&Call::ScrollTop(388.0)));
}

#[test]
fn no_auto_scroll_while_armed_or_fully_visible() {
    let mut host = Recording::new(
        StackSurface::new(200.0)
            .with_origin(pt(0.0, 10.0))
            .with_items([(A, 40.0), (B, 40.0)]),
    );
    let mut arrange = binding();

    press(&mut arrange, &mut host, B, pt(20.0, 70.0));
    // Armed, even at the very top of the viewport.
    drag(&mut arrange, &mut host, pt(20.0, 67.0));
    drag(&mut arrange, &mut host, pt(20.0, 20.0));
    drag(&mut arrange, &mut host, pt(20.0, 1.0));
    assert!(!host.calls.iter().any(|c| matches!(c, Call::ScrollTop(_))));
}

#[test]
fn bindings_cycle_through_many_gestures() {
    let mut host = abcd();
    let mut arrange = binding();

    for _ in 0..3 {
        press(&mut arrange, &mut host, A, pt(20.0, 20.0));
        drag(&mut arrange, &mut host, pt(20.0, 30.0));
        release(&mut arrange, &mut host, pt(20.0, 30.0));
        assert_eq!(arrange.phase(), DragPhase::Idle);
    }
    assert_eq!(host.surface.order(), [A, B, C, D]);
}

#[test]
fn binding_rejects_invalid_options() {
    let missing: Result<Binding, _> = Arrange::new(ArrangeOptions::default());
    assert_eq!(missing.unwrap_err(), ConfigError::MissingItemsSelector);

    let negative: Result<Binding, _> =
        Arrange::new(ArrangeOptions::new(StackSelector::Items).with_scroll_speed(-3.0));
    assert_eq!(negative.unwrap_err(), ConfigError::InvalidScrollSpeed(-3.0));

    assert_eq!(
        ConfigError::MissingItemsSelector.to_string(),
        "cannot initialize arrangeable without a drag elements selector"
    );
}

fn tall_list() -> Recording {
    Recording::new(
        StackSurface::new(200.0)
            .with_viewport_height(200.0)
            .with_items((1..=20).map(|id| (id, 40.0))),
    )
}

#[test]
fn scroll_delta_reports_what_the_host_applied() {
    let mut host = tall_list();
    host.surface.set_scroll_top(5.0);
    let mut arrange: Binding =
        Arrange::new(ArrangeOptions::new(StackSelector::Items).with_scroll_speed(20.0)).unwrap();

    press(&mut arrange, &mut host, B, pt(20.0, 60.0));
    drag(&mut arrange, &mut host, pt(20.0, 50.0));

    // Asks for nearly -20px, but only 5px are left above.
    let event = drag(&mut arrange, &mut host, pt(20.0, 6.0));
    let DragEvent::Dragged { scroll_delta, .. } = &event else {
        panic!("expected a drag tick, got {event:?}");
    };
    assert_eq!(*scroll_delta, -5.0);
    assert_eq!(host.surface.scroll_top(), 0.0);

    // Already at the top of the document: nothing more to apply.
    let event = drag(&mut arrange, &mut host, pt(20.0, 6.0));
    let DragEvent::Dragged { scroll_delta, .. } = &event else {
        panic!("expected a drag tick, got {event:?}");
    };
    assert_eq!(*scroll_delta, 0.0);
}

#[test]
fn failed_ghost_creation_stays_armed_and_retries() {
    let mut host = abcd();
    let mut arrange = binding();
    host.refuse_ghosts = true;

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    assert_eq!(drag(&mut arrange, &mut host, pt(20.0, 40.0)), DragEvent::Pending);
    assert_eq!(arrange.phase(), DragPhase::Armed);
    assert_eq!(host.surface.ghost_rect(), None);
    assert!(!host.visibility_touched());

    host.refuse_ghosts = false;
    assert_eq!(
        drag(&mut arrange, &mut host, pt(20.0, 45.0)),
        DragEvent::Started(StackNode::Item(A))
    );
    assert!(host.surface.is_hidden(A));

    release(&mut arrange, &mut host, pt(20.0, 45.0));
    assert_eq!(host.surface.ghost_rect(), None);
    assert!(!host.surface.is_hidden(A));
}

#[test]
fn item_removed_while_armed_never_starts_dragging() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, B, pt(20.0, 60.0));
    host.surface.remove(B);

    assert_eq!(drag(&mut arrange, &mut host, pt(20.0, 80.0)), DragEvent::Pending);
    assert_eq!(arrange.phase(), DragPhase::Armed);
    assert!(!host.ghost_created());
    assert_eq!(host.surface.ghost_rect(), None);

    assert_eq!(
        release(&mut arrange, &mut host, pt(20.0, 80.0)),
        DragEvent::Ended {
            item: StackNode::Item(B),
            dragged: false
        }
    );
    assert_eq!(arrange.phase(), DragPhase::Idle);
    assert!(arrange.session().items().is_empty());
    assert!(!host.surface.is_scroll_suppressed());
    assert_eq!(host.surface.order(), [A, C, D]);
}

#[test]
fn container_without_bounds_skips_auto_scroll() {
    let mut host = tall_list();
    host.hide_container = true;
    let mut arrange: Binding =
        Arrange::new(ArrangeOptions::new(StackSelector::Items).with_scroll_speed(20.0)).unwrap();

    press(&mut arrange, &mut host, 3, pt(20.0, 100.0));
    drag(&mut arrange, &mut host, pt(20.0, 110.0));

    let event = drag(&mut arrange, &mut host, pt(20.0, 190.0));
    let DragEvent::Dragged { scroll_delta, .. } = &event else {
        panic!("expected a drag tick, got {event:?}");
    };
    assert_eq!(*scroll_delta, 0.0);
    assert_eq!(arrange.phase(), DragPhase::Dragging);
    assert_eq!(host.surface.scroll_top(), 0.0);
    assert!(!host.calls.iter().any(|c| matches!(c, Call::ScrollTop(_))));
}

#[test]
fn explicit_container_selector_drives_auto_scroll() {
    let mut host = tall_list();
    let options = ArrangeOptions::new(StackSelector::Items)
        .with_container(StackSelector::Container)
        .with_scroll_speed(20.0);
    let mut arrange: Binding = Arrange::new(options).unwrap();

    press(&mut arrange, &mut host, 3, pt(20.0, 100.0));
    assert_eq!(arrange.session().container(), Some(&StackNode::Container));
    drag(&mut arrange, &mut host, pt(20.0, 110.0));

    let event = drag(&mut arrange, &mut host, pt(20.0, 190.0));
    let DragEvent::Dragged { scroll_delta, .. } = &event else {
        panic!("expected a drag tick, got {event:?}");
    };
    assert_eq!(*scroll_delta, 15.0);

    // The container's box gates scrolling: without it there is none.
    host.hide_container = true;
    let event = drag(&mut arrange, &mut host, pt(20.0, 190.0));
    let DragEvent::Dragged { scroll_delta, .. } = &event else {
        panic!("expected a drag tick, got {event:?}");
    };
    assert_eq!(*scroll_delta, 0.0);
    assert_eq!(host.surface.scroll_top(), 15.0);
}

#[test]
fn press_on_non_item_during_drag_reports_the_ended_gesture() {
    let mut host = abcd();
    let mut arrange = binding();

    press(&mut arrange, &mut host, A, pt(20.0, 20.0));
    drag(&mut arrange, &mut host, pt(20.0, 40.0));

    let event = arrange.handle(
        &mut host,
        PointerSample::start(StackNode::Container, pt(20.0, 300.0)),
    );
    assert_eq!(
        event,
        DragEvent::Ended {
            item: StackNode::Item(A),
            dragged: true
        }
    );
    assert_eq!(arrange.phase(), DragPhase::Idle);
    assert!(!host.surface.is_hidden(A));
    assert_eq!(host.surface.ghost_rect(), None);

    // A second stray press while idle is plainly ignored.
    let event = arrange.handle(
        &mut host,
        PointerSample::start(StackNode::Container, pt(20.0, 300.0)),
    );
    assert_eq!(event, DragEvent::Ignored);
}
