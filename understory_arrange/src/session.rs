// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-to-reorder state machine.
//!
//! A [`DragSession`] lives as long as its binding and cycles through
//! `Idle → Armed → Dragging → Idle` once per gesture:
//!
//! - **Idle**: waiting for a press on a draggable item.
//! - **Armed**: pressed, but the pointer has not yet moved past the threshold
//!   along either axis. Releasing here is a plain click; nothing in the visual
//!   tree has been touched apart from scroll suppression.
//! - **Dragging**: the ghost follows the pointer, the document auto-scrolls
//!   near the viewport edges, and the dragged item is moved next to whichever
//!   sibling's center the ghost covers.
//!
//! Release (or cancellation) always returns to idle and undoes every side
//! effect of the gesture, whichever phase it reached.
//!
//! Samples are handled synchronously and completely, one at a time. The
//! session keeps no boxes between samples; every tick asks the host again.

use alloc::vec::Vec;
use core::mem;

use kurbo::Point;
use tracing::{debug, trace};

use crate::hit;
use crate::host::ArrangeHost;
use crate::options::ArrangeOptions;
use crate::pointer::{PointerPhase, PointerSample, PointerTrack};
use crate::scroll::ScrollInput;

/// Coarse phase of a [`DragSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pressed on an item; waiting for the pointer to cross the threshold.
    Armed,
    /// Actively dragging a ghost.
    Dragging,
}

/// Where the dragged item was placed relative to the hovered sibling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Immediately before the anchor.
    Before,
    /// Immediately after the anchor.
    After,
}

/// A single reorder step performed while dragging.
#[derive(Clone, Debug, PartialEq)]
pub struct Reorder<K> {
    /// The dragged item.
    pub item: K,
    /// The hovered sibling it was moved next to.
    pub anchor: K,
    /// Side of `anchor` the item now sits on.
    pub placement: Placement,
    /// Index of `item` in the collection before the move.
    pub from: usize,
    /// Index of `item` in the collection after the move.
    pub to: usize,
}

/// What handling one pointer sample did.
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent<K> {
    /// The sample had no effect (for example a move while idle, or a press
    /// outside any draggable item).
    Ignored,
    /// A press on `item` armed the session.
    Armed(K),
    /// The pointer moved but is still within the threshold, or the drag could
    /// not start yet.
    Pending,
    /// The threshold was crossed and dragging of `item` began.
    Started(K),
    /// A move while dragging.
    Dragged {
        /// Change in the document's scroll offset this tick, as reported by
        /// the host after it applied (and possibly clamped) the request.
        /// Zero if nothing scrolled.
        scroll_delta: f64,
        /// Reorder performed this tick, if any.
        reorder: Option<Reorder<K>>,
    },
    /// The gesture ended and the session is idle again.
    Ended {
        /// The item that was pressed.
        item: K,
        /// `true` if dragging had started, `false` for a press that never
        /// crossed the threshold.
        dragged: bool,
    },
}

#[derive(Clone, Debug)]
struct Gesture<K> {
    item: K,
    container: Option<K>,
    pointer: PointerTrack,
}

#[derive(Clone, Debug)]
enum State<K, G> {
    Idle,
    Armed(Gesture<K>),
    Dragging {
        gesture: Gesture<K>,
        ghost: G,
        /// Layout origin of the item when dragging began.
        origin: Point,
    },
}

/// Drag state for one arrangeable collection.
///
/// `K` is the host's element handle and `G` its ghost handle. The host itself
/// is passed into every call so the session never outlives a borrow of the
/// visual tree.
#[derive(Clone, Debug)]
pub struct DragSession<K, G> {
    state: State<K, G>,
    /// Ordered collection snapshot for the current gesture; empty when idle.
    items: Vec<K>,
}

impl<K, G> Default for DragSession<K, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, G> DragSession<K, G> {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Idle,
            items: Vec::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self.state {
            State::Idle => DragPhase::Idle,
            State::Armed(_) => DragPhase::Armed,
            State::Dragging { .. } => DragPhase::Dragging,
        }
    }

    /// The pressed or dragged item, if a gesture is in progress.
    #[must_use]
    pub fn dragged(&self) -> Option<&K> {
        self.gesture().map(|g| &g.item)
    }

    /// The live ghost, while dragging.
    #[must_use]
    pub fn ghost(&self) -> Option<&G> {
        match &self.state {
            State::Dragging { ghost, .. } => Some(ghost),
            _ => None,
        }
    }

    /// Pointer track of the current gesture.
    #[must_use]
    pub fn pointer(&self) -> Option<&PointerTrack> {
        self.gesture().map(|g| &g.pointer)
    }

    /// Container resolved when the current gesture started.
    #[must_use]
    pub fn container(&self) -> Option<&K> {
        self.gesture().and_then(|g| g.container.as_ref())
    }

    /// Ordered collection as the session currently sees it.
    ///
    /// Refreshed from the host on every press and kept in sync with each
    /// reorder. Empty while idle.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    fn gesture(&self) -> Option<&Gesture<K>> {
        match &self.state {
            State::Idle => None,
            State::Armed(gesture) | State::Dragging { gesture, .. } => Some(gesture),
        }
    }
}

impl<K, G> DragSession<K, G>
where
    K: Clone + PartialEq,
{
    /// Dispatch one pointer sample.
    pub fn handle<H>(
        &mut self,
        host: &mut H,
        options: &ArrangeOptions<H::Selector>,
        sample: PointerSample<K>,
    ) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Ghost = G>,
    {
        match sample.phase {
            PointerPhase::Start { target } => self.pointer_down(host, options, &target, sample.pos),
            PointerPhase::Move => self.pointer_move(host, options, sample.pos),
            PointerPhase::End | PointerPhase::Cancel => self.pointer_up(host),
        }
    }

    /// Handle a press on `target` at document position `pos`.
    ///
    /// The press arms the session if `target` is, or is inside, an item
    /// matching the items selector (and, when a drag handle is configured, is
    /// inside a drag handle). A press arriving while a gesture is still in
    /// progress ends that gesture first; if the new press does not arm, the
    /// [`DragEvent::Ended`] of the superseded gesture is returned instead of
    /// [`DragEvent::Ignored`].
    pub fn pointer_down<H>(
        &mut self,
        host: &mut H,
        options: &ArrangeOptions<H::Selector>,
        target: &K,
        pos: Point,
    ) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Ghost = G>,
    {
        let superseded = if matches!(self.state, State::Idle) {
            DragEvent::Ignored
        } else {
            debug!("pointer start during an active gesture; ending it first");
            self.pointer_up(host)
        };

        let Some(items_selector) = options.items() else {
            return superseded;
        };
        let Some(item) = resolve_item(host, options, target) else {
            trace!("pointer start outside any draggable item");
            return superseded;
        };

        self.items.clear();
        host.query(items_selector, &mut self.items);
        if !self.items.contains(&item) {
            trace!("pressed item is not part of the collection");
            self.items.clear();
            return superseded;
        }

        let container = match options.container() {
            Some(selector) => {
                let mut found = Vec::new();
                host.query(selector, &mut found);
                found.into_iter().next()
            }
            None => self.items.first().and_then(|first| host.parent(first)),
        };

        host.set_scroll_suppressed(true);
        debug!(items = self.items.len(), "armed");
        self.state = State::Armed(Gesture {
            item: item.clone(),
            container,
            pointer: PointerTrack::new(pos),
        });
        DragEvent::Armed(item)
    }

    /// Handle a pointer move to document position `pos`.
    pub fn pointer_move<H>(
        &mut self,
        host: &mut H,
        options: &ArrangeOptions<H::Selector>,
        pos: Point,
    ) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Ghost = G>,
    {
        match mem::replace(&mut self.state, State::Idle) {
            State::Idle => DragEvent::Ignored,
            State::Armed(mut gesture) => {
                gesture.pointer.update(pos);
                if gesture.pointer.exceeds(options.threshold()) {
                    self.begin_drag(host, options, gesture)
                } else {
                    self.state = State::Armed(gesture);
                    DragEvent::Pending
                }
            }
            State::Dragging {
                mut gesture,
                ghost,
                origin,
            } => {
                gesture.pointer.update(pos);
                host.move_ghost(&ghost, origin + gesture.pointer.total_offset());
                let scroll_delta = auto_scroll(host, options, &gesture, pos.y);
                let reorder = shift_hovered(host, &mut self.items, &gesture, &ghost);
                self.state = State::Dragging {
                    gesture,
                    ghost,
                    origin,
                };
                DragEvent::Dragged {
                    scroll_delta,
                    reorder,
                }
            }
        }
    }

    /// Handle a release or cancellation.
    ///
    /// Removes the ghost and shows the original again if dragging had
    /// started, restores default scrolling, and clears all gesture state. A
    /// release while idle is ignored.
    pub fn pointer_up<H>(&mut self, host: &mut H) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Ghost = G>,
    {
        let (item, dragged) = match mem::replace(&mut self.state, State::Idle) {
            State::Idle => return DragEvent::Ignored,
            State::Armed(gesture) => (gesture.item, false),
            State::Dragging { gesture, ghost, .. } => {
                host.remove_ghost(ghost);
                host.set_hidden(&gesture.item, false);
                (gesture.item, true)
            }
        };
        host.set_scroll_suppressed(false);
        self.items.clear();
        debug!(dragged, "gesture ended");
        DragEvent::Ended { item, dragged }
    }

    fn begin_drag<H>(
        &mut self,
        host: &mut H,
        options: &ArrangeOptions<H::Selector>,
        gesture: Gesture<K>,
    ) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Ghost = G>,
    {
        let Some(origin) = host.layout_origin(&gesture.item) else {
            debug!("dragged item has no layout origin; staying armed");
            self.state = State::Armed(gesture);
            return DragEvent::Pending;
        };
        let Some(ghost) = host.create_ghost(&gesture.item, &options.ghost_class()) else {
            debug!("ghost could not be created; staying armed");
            self.state = State::Armed(gesture);
            return DragEvent::Pending;
        };

        host.move_ghost(&ghost, origin);
        host.set_hidden(&gesture.item, true);
        debug!(x = origin.x, y = origin.y, "drag started");

        let item = gesture.item.clone();
        self.state = State::Dragging {
            gesture,
            ghost,
            origin,
        };
        DragEvent::Started(item)
    }
}

fn resolve_item<H: ArrangeHost>(
    host: &H,
    options: &ArrangeOptions<H::Selector>,
    target: &H::Key,
) -> Option<H::Key> {
    let items = options.items()?;
    if let Some(handle) = options.drag_handle() {
        host.closest(target, handle)?;
    }
    host.closest(target, items)
}

fn auto_scroll<H: ArrangeHost>(
    host: &mut H,
    options: &ArrangeOptions<H::Selector>,
    gesture: &Gesture<H::Key>,
    pointer_y: f64,
) -> f64 {
    let Some(container) = gesture.container.as_ref().and_then(|c| host.bounds(c)) else {
        trace!("no container bounds; skipping auto-scroll");
        return 0.0;
    };
    let Some(dragged) = host.bounds(&gesture.item) else {
        trace!("no dragged item bounds; skipping auto-scroll");
        return 0.0;
    };
    let viewport = host.viewport();
    let delta = options.auto_scroll().delta(&ScrollInput {
        pointer_y,
        container,
        viewport,
        dragged_height: dragged.height(),
    });
    if delta == 0.0 {
        return 0.0;
    }
    host.set_scroll_top(viewport.scroll_top + delta);
    let applied = host.viewport().scroll_top - viewport.scroll_top;
    trace!(requested = delta, applied, "auto-scroll");
    applied
}

fn shift_hovered<H: ArrangeHost>(
    host: &mut H,
    items: &mut Vec<H::Key>,
    gesture: &Gesture<H::Key>,
    ghost: &H::Ghost,
) -> Option<Reorder<H::Key>> {
    let Some(ghost_box) = host.ghost_bounds(ghost) else {
        trace!("ghost has no bounds; skipping hit test");
        return None;
    };
    let to = hit::hovered_in(&*host, items.as_slice(), &gesture.item, ghost_box)?;
    let from = items.iter().position(|k| *k == gesture.item)?;
    let anchor = items[to].clone();

    let placement = if to < from {
        host.move_before(&gesture.item, &anchor);
        Placement::Before
    } else {
        host.move_after(&gesture.item, &anchor);
        Placement::After
    };
    let moved = items.remove(from);
    items.insert(to, moved);
    debug!(from, to, "reordered");

    Some(Reorder {
        item: gesture.item.clone(),
        anchor,
        placement,
        from,
        to,
    })
}
