// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory vertical stack implementing [`ArrangeHost`].
//!
//! [`StackSurface`] lays its items out top to bottom inside a single container
//! and scrolls the document vertically. It is a reference host for tests,
//! documentation, and headless demos; real hosts wrap their own scene or
//! widget tree instead.
//!
//! ```
//! use kurbo::Point;
//! use understory_arrange::{Arrange, ArrangeOptions, PointerSample};
//! use understory_arrange::stack::{StackNode, StackSelector, StackSurface};
//!
//! // Four 40px rows: 1, 2, 3, 4.
//! let mut surface = StackSurface::new(200.0).with_items([(1, 40.0), (2, 40.0), (3, 40.0), (4, 40.0)]);
//! let mut arrange = Arrange::new(ArrangeOptions::new(StackSelector::Items)).unwrap();
//!
//! // Grab row 1 and pull it down over row 3's center.
//! arrange.handle(&mut surface, PointerSample::start(StackNode::Item(1), Point::new(20.0, 20.0)));
//! arrange.handle(&mut surface, PointerSample::moved(Point::new(20.0, 30.0)));
//! arrange.handle(&mut surface, PointerSample::moved(Point::new(20.0, 100.0)));
//! arrange.handle(&mut surface, PointerSample::end(Point::new(20.0, 100.0)));
//!
//! assert_eq!(surface.order(), [2, 3, 1, 4]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::host::{ArrangeHost, Geometry, ViewportMetrics};

/// Element handle of a [`StackSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackNode {
    /// The container holding every item.
    Container,
    /// An item, by id.
    Item(u32),
    /// The grip child of an item, by the item's id. Only present when the
    /// surface was built with [`StackSurface::with_grips`].
    Grip(u32),
}

/// Selector understood by a [`StackSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StackSelector {
    /// Matches [`StackNode::Container`].
    Container,
    /// Matches every [`StackNode::Item`].
    Items,
    /// Matches every [`StackNode::Grip`].
    Grips,
}

/// Ghost handle of a [`StackSurface`]: the id of the item it was cloned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackGhost(pub u32);

#[derive(Clone, Debug)]
struct Ghost {
    item: u32,
    class: String,
    rect: Rect,
}

/// A vertical stack of fixed-height items in a scrollable document.
#[derive(Clone, Debug)]
pub struct StackSurface {
    origin: Point,
    width: f64,
    gap: f64,
    grip_width: Option<f64>,
    items: Vec<(u32, f64)>,
    hidden: Vec<u32>,
    viewport: ViewportMetrics,
    document_height: f64,
    scroll_suppressed: bool,
    ghost: Option<Ghost>,
}

impl StackSurface {
    /// Creates an empty stack of the given width at the document origin,
    /// with a 600px tall viewport scrolled to the top.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            origin: Point::ZERO,
            width,
            gap: 0.0,
            grip_width: None,
            items: Vec::new(),
            hidden: Vec::new(),
            viewport: ViewportMetrics::new(600.0, 0.0),
            document_height: 0.0,
            scroll_suppressed: false,
            ghost: None,
        }
    }

    /// Appends items as `(id, height)` pairs.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = (u32, f64)>) -> Self {
        self.items.extend(items);
        self
    }

    /// Moves the container's top-left corner to `origin`.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Sets vertical spacing between items.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Gives every item a grip child covering its leftmost `width` pixels.
    #[must_use]
    pub fn with_grips(mut self, width: f64) -> Self {
        self.grip_width = Some(width);
        self
    }

    /// Sets the viewport height.
    #[must_use]
    pub fn with_viewport_height(mut self, height: f64) -> Self {
        self.viewport.height = height;
        self.clamp_scroll();
        self
    }

    /// Sets a minimum document height. The document is always at least tall
    /// enough to contain the container.
    #[must_use]
    pub fn with_document_height(mut self, height: f64) -> Self {
        self.document_height = height;
        self.clamp_scroll();
        self
    }

    /// Appends an item.
    pub fn push(&mut self, id: u32, height: f64) {
        self.items.push((id, height));
    }

    /// Removes an item, returning `true` if it existed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|(item, _)| *item != id);
        self.hidden.retain(|item| *item != id);
        before != self.items.len()
    }

    /// Item ids in visual order.
    #[must_use]
    pub fn order(&self) -> Vec<u32> {
        self.items.iter().map(|(id, _)| *id).collect()
    }

    /// Document-space box of item `id`.
    #[must_use]
    pub fn item_rect(&self, id: u32) -> Option<Rect> {
        let mut top = self.origin.y;
        for (item, height) in &self.items {
            if *item == id {
                return Some(Rect::from_origin_size(
                    (self.origin.x, top),
                    Size::new(self.width, *height),
                ));
            }
            top += height + self.gap;
        }
        None
    }

    /// Document-space box of the container.
    #[must_use]
    pub fn container_rect(&self) -> Rect {
        let gaps = self.gap * self.items.len().saturating_sub(1) as f64;
        let height: f64 = self.items.iter().map(|(_, h)| h).sum::<f64>() + gaps;
        Rect::from_origin_size(self.origin, Size::new(self.width, height))
    }

    /// Returns `true` if item `id` is currently hidden.
    #[must_use]
    pub fn is_hidden(&self, id: u32) -> bool {
        self.hidden.contains(&id)
    }

    /// Box of the live ghost, if any.
    #[must_use]
    pub fn ghost_rect(&self) -> Option<Rect> {
        self.ghost.as_ref().map(|g| g.rect)
    }

    /// Class of the live ghost, if any.
    #[must_use]
    pub fn ghost_class(&self) -> Option<&str> {
        self.ghost.as_ref().map(|g| g.class.as_str())
    }

    /// Current document scroll offset.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.viewport.scroll_top
    }

    /// Returns `true` while default scrolling is suppressed.
    #[must_use]
    pub fn is_scroll_suppressed(&self) -> bool {
        self.scroll_suppressed
    }

    /// Total scrollable document height.
    #[must_use]
    pub fn document_height(&self) -> f64 {
        self.document_height.max(self.container_rect().y1)
    }

    fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    fn clamp_scroll(&mut self) {
        self.viewport.scroll_top = self.viewport.scroll_top.clamp(0.0, self.max_scroll());
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|(item, _)| *item == id)
    }

    fn grip_rect(&self, id: u32) -> Option<Rect> {
        let grip = self.grip_width?;
        let rect = self.item_rect(id)?;
        Some(Rect::new(rect.x0, rect.y0, rect.x0 + grip.min(rect.width()), rect.y1))
    }

    fn reinsert(&mut self, key: &StackNode, anchor: &StackNode, after: bool) {
        let (StackNode::Item(id), StackNode::Item(anchor)) = (*key, *anchor) else {
            return;
        };
        if id == anchor {
            return;
        }
        let Some(from) = self.position(id) else {
            return;
        };
        let entry = self.items.remove(from);
        let Some(to) = self.position(anchor) else {
            self.items.insert(from, entry);
            return;
        };
        self.items.insert(if after { to + 1 } else { to }, entry);
    }
}

impl Geometry for StackSurface {
    type Key = StackNode;

    fn bounds(&self, key: &StackNode) -> Option<Rect> {
        match *key {
            StackNode::Container => Some(self.container_rect()),
            StackNode::Item(id) => self.item_rect(id),
            StackNode::Grip(id) => self.grip_rect(id),
        }
    }

    fn layout_origin(&self, key: &StackNode) -> Option<Point> {
        self.bounds(key).map(|rect| rect.origin())
    }

    fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }
}

impl ArrangeHost for StackSurface {
    type Selector = StackSelector;
    type Ghost = StackGhost;

    fn query(&self, selector: &StackSelector, out: &mut Vec<StackNode>) {
        out.clear();
        match selector {
            StackSelector::Container => out.push(StackNode::Container),
            StackSelector::Items => out.extend(self.items.iter().map(|(id, _)| StackNode::Item(*id))),
            StackSelector::Grips => {
                if self.grip_width.is_some() {
                    out.extend(self.items.iter().map(|(id, _)| StackNode::Grip(*id)));
                }
            }
        }
    }

    fn closest(&self, key: &StackNode, selector: &StackSelector) -> Option<StackNode> {
        match (*key, selector) {
            (_, StackSelector::Container) => Some(StackNode::Container),
            (StackNode::Item(id) | StackNode::Grip(id), StackSelector::Items) => {
                self.position(id).map(|_| StackNode::Item(id))
            }
            (StackNode::Grip(id), StackSelector::Grips) => {
                self.grip_rect(id).map(|_| StackNode::Grip(id))
            }
            _ => None,
        }
    }

    fn parent(&self, key: &StackNode) -> Option<StackNode> {
        match *key {
            StackNode::Container => None,
            StackNode::Item(_) => Some(StackNode::Container),
            StackNode::Grip(id) => Some(StackNode::Item(id)),
        }
    }

    fn move_before(&mut self, key: &StackNode, anchor: &StackNode) {
        self.reinsert(key, anchor, false);
    }

    fn move_after(&mut self, key: &StackNode, anchor: &StackNode) {
        self.reinsert(key, anchor, true);
    }

    fn set_hidden(&mut self, key: &StackNode, hidden: bool) {
        let StackNode::Item(id) = *key else {
            return;
        };
        if hidden {
            if !self.hidden.contains(&id) {
                self.hidden.push(id);
            }
        } else {
            self.hidden.retain(|item| *item != id);
        }
    }

    fn create_ghost(&mut self, key: &StackNode, class: &str) -> Option<StackGhost> {
        let StackNode::Item(id) = *key else {
            return None;
        };
        let rect = self.item_rect(id)?;
        self.ghost = Some(Ghost {
            item: id,
            class: class.into(),
            rect,
        });
        Some(StackGhost(id))
    }

    fn move_ghost(&mut self, ghost: &StackGhost, origin: Point) {
        if let Some(live) = self.ghost.as_mut().filter(|g| g.item == ghost.0) {
            live.rect = Rect::from_origin_size(origin, live.rect.size());
        }
    }

    fn ghost_bounds(&self, ghost: &StackGhost) -> Option<Rect> {
        self.ghost
            .as_ref()
            .filter(|g| g.item == ghost.0)
            .map(|g| g.rect)
    }

    fn remove_ghost(&mut self, ghost: StackGhost) {
        if self.ghost.as_ref().is_some_and(|g| g.item == ghost.0) {
            self.ghost = None;
        }
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.viewport.scroll_top = scroll_top;
        self.clamp_scroll();
    }

    fn set_scroll_suppressed(&mut self, suppressed: bool) {
        self.scroll_suppressed = suppressed;
    }
}
