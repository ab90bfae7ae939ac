// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits implemented by the host's visual tree.
//!
//! The drag session never touches a real scene. Everything it needs from the
//! outside world goes through two traits:
//!
//! - [`Geometry`]: read-only box and viewport queries. This is all the
//!   [hit tester](crate::hit) needs.
//! - [`ArrangeHost`]: selector queries, sibling moves, visibility, the ghost
//!   capability, and document scrolling.
//!
//! All boxes are in document coordinates. Hosts should answer from their
//! current layout on every call; the session never caches a box beyond the
//! tick that asked for it, because an auto-scroll step or a reorder can change
//! layout between ticks.
//!
//! [`StackSurface`](crate::StackSurface) is a small in-memory implementation of
//! both traits.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Size and scroll position of the document viewport along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    /// Height of the visible region.
    pub height: f64,
    /// Document offset of the top of the visible region.
    pub scroll_top: f64,
}

impl ViewportMetrics {
    /// Creates viewport metrics.
    #[must_use]
    pub const fn new(height: f64, scroll_top: f64) -> Self {
        Self { height, scroll_top }
    }

    /// Document offset of the bottom of the visible region.
    #[must_use]
    pub fn scroll_bottom(&self) -> f64 {
        self.scroll_top + self.height
    }
}

/// Read-only geometry queries.
pub trait Geometry {
    /// Opaque, stable element handle.
    type Key: Clone + PartialEq;

    /// Bounding box of `key` in document coordinates, or `None` if the element
    /// no longer exists or has no layout.
    fn bounds(&self, key: &Self::Key) -> Option<Rect>;

    /// Un-scrolled position of `key` relative to its positioning parent, net
    /// of its own margin and padding.
    ///
    /// This is the coordinate space the ghost is positioned in; see
    /// [`ArrangeHost::move_ghost`].
    fn layout_origin(&self, key: &Self::Key) -> Option<Point>;

    /// Current viewport metrics of the scrolling document.
    fn viewport(&self) -> ViewportMetrics;
}

/// Mutable visual-tree capabilities needed to run a drag session.
pub trait ArrangeHost: Geometry {
    /// Host-defined element selector or predicate.
    type Selector;
    /// Handle to a live ghost.
    type Ghost;

    /// Replace the contents of `out` with every element matching `selector`,
    /// in document order.
    fn query(&self, selector: &Self::Selector, out: &mut Vec<Self::Key>);

    /// Nearest element matching `selector`, starting at `key` itself and
    /// walking up through its ancestors.
    fn closest(&self, key: &Self::Key, selector: &Self::Selector) -> Option<Self::Key>;

    /// Parent element of `key`.
    fn parent(&self, key: &Self::Key) -> Option<Self::Key>;

    /// Move `key` so that it becomes the sibling immediately before `anchor`.
    fn move_before(&mut self, key: &Self::Key, anchor: &Self::Key);

    /// Move `key` so that it becomes the sibling immediately after `anchor`.
    fn move_after(&mut self, key: &Self::Key, anchor: &Self::Key);

    /// Hide or show `key` while keeping its layout slot.
    fn set_hidden(&mut self, key: &Self::Key, hidden: bool);

    /// Create a ghost with the same box as `key`, stacked above all other
    /// content and tagged with `class`.
    ///
    /// Returns `None` if `key` cannot be cloned (for example because it was
    /// removed since the gesture started).
    fn create_ghost(&mut self, key: &Self::Key, class: &str) -> Option<Self::Ghost>;

    /// Position the ghost's origin in the same space as
    /// [`Geometry::layout_origin`].
    fn move_ghost(&mut self, ghost: &Self::Ghost, origin: Point);

    /// Current document-space box of the ghost.
    fn ghost_bounds(&self, ghost: &Self::Ghost) -> Option<Rect>;

    /// Destroy the ghost.
    fn remove_ghost(&mut self, ghost: Self::Ghost);

    /// Scroll the document so that its top visible offset is `scroll_top`.
    ///
    /// Hosts clamp the value to their scrollable range.
    fn set_scroll_top(&mut self, scroll_top: f64);

    /// Disable (`true`) or restore (`false`) default platform scrolling in
    /// response to pointer movement.
    fn set_scroll_suppressed(&mut self, suppressed: bool);
}
