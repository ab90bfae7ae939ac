// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-binding configuration.

use alloc::format;
use alloc::string::String;

use crate::error::ConfigError;
use crate::scroll::{AutoScroll, DEFAULT_SCROLL_SPEED, ScrollEasing, ScrollZone};

/// Default movement, in pixels along either axis, before a press becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Class suffix appended to [`ArrangeOptions::class_prefix`] for the ghost.
pub const GHOST_CLASS: &str = "dragging";

/// Immutable settings for one arrangeable collection.
///
/// `S` is the host's selector type (see [`ArrangeHost::Selector`]).
///
/// [`ArrangeHost::Selector`]: crate::ArrangeHost::Selector
///
/// ```
/// use understory_arrange::{ArrangeOptions, ScrollZone};
///
/// let options = ArrangeOptions::new(".item")
///     .with_class_prefix("list-")
///     .with_drag_handle(".grip")
///     .with_scroll_speed(25.0)
///     .with_scroll_zone(ScrollZone::CappedToQuarterViewport);
///
/// assert!(options.validate().is_ok());
/// assert_eq!(options.ghost_class(), "list-dragging");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrangeOptions<S> {
    items: Option<S>,
    class_prefix: String,
    container: Option<S>,
    drag_handle: Option<S>,
    scroll_speed: f64,
    threshold: f64,
    scroll_zone: ScrollZone,
    scroll_easing: ScrollEasing,
}

impl<S> Default for ArrangeOptions<S> {
    /// Options with no items selector. These fail [`ArrangeOptions::validate`]
    /// until [`ArrangeOptions::with_items`] is called.
    fn default() -> Self {
        Self {
            items: None,
            class_prefix: String::new(),
            container: None,
            drag_handle: None,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            threshold: DEFAULT_DRAG_THRESHOLD,
            scroll_zone: ScrollZone::default(),
            scroll_easing: ScrollEasing::default(),
        }
    }
}

impl<S> ArrangeOptions<S> {
    /// Default options for items matching `items`.
    #[must_use]
    pub fn new(items: S) -> Self {
        Self::default().with_items(items)
    }

    /// Sets the selector identifying draggable items.
    #[must_use]
    pub fn with_items(mut self, items: S) -> Self {
        self.items = Some(items);
        self
    }

    /// Sets the prefix for the class given to the ghost.
    #[must_use]
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Sets an explicit container.
    ///
    /// Without one, the container is the parent of the first item. Set this
    /// when items do not all share their immediate parent, otherwise
    /// auto-scroll measures the wrong box.
    #[must_use]
    pub fn with_container(mut self, container: S) -> Self {
        self.container = Some(container);
        self
    }

    /// Restricts presses that start a drag to elements matching `handle`
    /// inside an item.
    #[must_use]
    pub fn with_drag_handle(mut self, handle: S) -> Self {
        self.drag_handle = Some(handle);
        self
    }

    /// Sets the auto-scroll speed in pixels per tick at full proximity.
    #[must_use]
    pub fn with_scroll_speed(mut self, speed: f64) -> Self {
        self.scroll_speed = speed;
        self
    }

    /// Sets the per-axis movement threshold before a press becomes a drag.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the proximity zone rule for auto-scroll.
    #[must_use]
    pub fn with_scroll_zone(mut self, zone: ScrollZone) -> Self {
        self.scroll_zone = zone;
        self
    }

    /// Sets the speed curve for auto-scroll.
    #[must_use]
    pub fn with_scroll_easing(mut self, easing: ScrollEasing) -> Self {
        self.scroll_easing = easing;
        self
    }

    /// Selector identifying draggable items.
    #[must_use]
    pub fn items(&self) -> Option<&S> {
        self.items.as_ref()
    }

    /// Prefix of the ghost's class.
    #[must_use]
    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    /// Explicit container selector, if any.
    #[must_use]
    pub fn container(&self) -> Option<&S> {
        self.container.as_ref()
    }

    /// Drag handle selector, if any.
    #[must_use]
    pub fn drag_handle(&self) -> Option<&S> {
        self.drag_handle.as_ref()
    }

    /// Auto-scroll speed in pixels per tick.
    #[must_use]
    pub fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }

    /// Per-axis drag threshold in pixels.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Proximity zone rule.
    #[must_use]
    pub fn scroll_zone(&self) -> ScrollZone {
        self.scroll_zone
    }

    /// Auto-scroll speed curve.
    #[must_use]
    pub fn scroll_easing(&self) -> ScrollEasing {
        self.scroll_easing
    }

    /// Class given to the ghost: the prefix followed by `dragging`.
    #[must_use]
    pub fn ghost_class(&self) -> String {
        format!("{}{GHOST_CLASS}", self.class_prefix)
    }

    /// The auto-scroll policy described by these options.
    #[must_use]
    pub fn auto_scroll(&self) -> AutoScroll {
        AutoScroll::new(self.scroll_speed)
            .with_zone(self.scroll_zone)
            .with_easing(self.scroll_easing)
    }

    /// Checks that these options can drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_none() {
            return Err(ConfigError::MissingItemsSelector);
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed < 0.0 {
            return Err(ConfigError::InvalidScrollSpeed(self.scroll_speed));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
