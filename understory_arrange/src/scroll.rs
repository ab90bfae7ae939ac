// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge auto-scroll while dragging.
//!
//! While a drag is active, each pointer sample is fed to [`AutoScroll::delta`],
//! which returns how far the document should scroll on this tick. There is no
//! timer: scrolling happens once per move sample and therefore stops as soon
//! as the pointer stops moving or leaves a proximity zone.
//!
//! A proximity zone sits just inside the top and bottom edges of the
//! viewport. Inside the top zone, and only while the container's top edge is
//! still scrolled out of view, the document scrolls up; the bottom edge works
//! the same way downwards. When the whole container is already visible nothing
//! happens.
//!
//! With [`ScrollEasing::Proportional`] the speed falls off linearly from the
//! full `speed` at the viewport edge to zero at the zone's inner edge.
//!
//! ```
//! use kurbo::Rect;
//! use understory_arrange::scroll::{AutoScroll, ScrollInput};
//! use understory_arrange::ViewportMetrics;
//!
//! let scroll = AutoScroll::new(20.0);
//! let input = ScrollInput {
//!     pointer_y: 590.0,
//!     container: Rect::new(0.0, 0.0, 300.0, 2000.0),
//!     viewport: ViewportMetrics::new(600.0, 0.0),
//!     dragged_height: 40.0,
//! };
//!
//! // 10px from the bottom edge of a 40px zone: three quarters of full speed.
//! assert_eq!(scroll.delta(&input), 15.0);
//! ```

use kurbo::Rect;

use crate::host::ViewportMetrics;

/// Default scroll speed in pixels per tick at full proximity.
pub const DEFAULT_SCROLL_SPEED: f64 = 15.0;

/// How tall the proximity zones at the viewport edges are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollZone {
    /// The zone is as tall as the dragged element.
    #[default]
    DraggedExtent,
    /// The zone is as tall as the dragged element, but never more than a
    /// quarter of the viewport height.
    ///
    /// Useful when items can be taller than the viewport, where the plain
    /// rule would put the whole viewport inside a zone.
    CappedToQuarterViewport,
}

impl ScrollZone {
    /// Zone height for the given dragged element height and viewport height.
    #[must_use]
    pub fn height(self, dragged_height: f64, viewport_height: f64) -> f64 {
        match self {
            Self::DraggedExtent => dragged_height,
            Self::CappedToQuarterViewport => dragged_height.min(viewport_height / 4.0),
        }
    }
}

/// How the scroll speed varies inside a proximity zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScrollEasing {
    /// Full speed at the viewport edge, decreasing linearly to zero at the
    /// zone's inner edge.
    #[default]
    Proportional,
    /// Full speed anywhere inside the zone.
    Constant,
}

/// Per-tick inputs to [`AutoScroll::delta`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollInput {
    /// Pointer position along the scroll axis, in document coordinates.
    pub pointer_y: f64,
    /// Box of the container holding the arrangeable items.
    pub container: Rect,
    /// Current viewport height and scroll offset.
    pub viewport: ViewportMetrics,
    /// Height of the element being dragged.
    pub dragged_height: f64,
}

/// Auto-scroll policy: speed, zone rule and easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScroll {
    /// Pixels per tick at full proximity.
    pub speed: f64,
    /// Zone height rule.
    pub zone: ScrollZone,
    /// Speed curve inside a zone.
    pub easing: ScrollEasing,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_SPEED)
    }
}

impl AutoScroll {
    /// Creates a policy with the given speed, [`ScrollZone::DraggedExtent`] and
    /// [`ScrollEasing::Proportional`].
    #[must_use]
    pub const fn new(speed: f64) -> Self {
        Self {
            speed,
            zone: ScrollZone::DraggedExtent,
            easing: ScrollEasing::Proportional,
        }
    }

    /// Returns a copy using the given zone rule.
    #[must_use]
    pub const fn with_zone(mut self, zone: ScrollZone) -> Self {
        self.zone = zone;
        self
    }

    /// Returns a copy using the given easing.
    #[must_use]
    pub const fn with_easing(mut self, easing: ScrollEasing) -> Self {
        self.easing = easing;
        self
    }

    /// Signed scroll delta for this tick: negative scrolls up, positive down,
    /// zero for no scrolling.
    #[must_use]
    pub fn delta(&self, input: &ScrollInput) -> f64 {
        let ViewportMetrics {
            height: viewport_height,
            scroll_top,
        } = input.viewport;
        let scroll_bottom = input.viewport.scroll_bottom();
        let container_top = input.container.y0;
        let container_bottom = input.container.y1;

        if container_top > scroll_top && container_bottom < scroll_bottom {
            return 0.0;
        }

        let zone = self.zone.height(input.dragged_height, viewport_height);
        if zone.is_nan() || zone <= 0.0 {
            return 0.0;
        }

        if input.pointer_y < scroll_top + zone && scroll_top > container_top {
            let distance = input.pointer_y - scroll_top;
            return -self.speed * self.ease(zone, distance);
        }

        if input.pointer_y > scroll_bottom - zone && container_bottom > scroll_bottom {
            let distance = scroll_bottom - input.pointer_y;
            return self.speed * self.ease(zone, distance);
        }

        0.0
    }

    fn ease(&self, zone: f64, distance: f64) -> f64 {
        match self.easing {
            ScrollEasing::Proportional => ease_factor(zone, distance),
            ScrollEasing::Constant => 1.0,
        }
    }
}

/// Linear ease for a pointer `distance` pixels inside a zone of height `zone`,
/// measured from the zone's outer (viewport) edge.
///
/// Returns `1.0` at the edge, `0.0` at the inner edge, and is clamped to
/// `[0, 1]` beyond either. A non-positive `zone` yields `0.0`.
#[must_use]
pub fn ease_factor(zone: f64, distance: f64) -> f64 {
    if zone.is_nan() || zone <= 0.0 {
        return 0.0;
    }
    let factor = (zone - distance) / zone;
    if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    }
}
