// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Abstract pointer samples and the per-gesture pointer track.
//!
//! Platform mouse/touch events are expected to be reduced by the host to a
//! single stream of [`PointerSample`]s in document coordinates. The session
//! keeps the first and the latest sample of the current gesture in a
//! [`PointerTrack`], which answers the two questions the state machine asks:
//! "has the pointer left the threshold box yet?" and "how far has it moved in
//! total?".
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_arrange::pointer::PointerTrack;
//!
//! let mut track = PointerTrack::new(Point::new(10.0, 20.0));
//!
//! // Three pixels down: still inside a 5px threshold box.
//! track.update(Point::new(10.0, 23.0));
//! assert!(!track.exceeds(5.0));
//!
//! // Eight pixels to the right: past it.
//! track.update(Point::new(18.0, 23.0));
//! assert!(track.exceeds(5.0));
//! assert_eq!(track.total_offset(), Vec2::new(8.0, 3.0));
//! ```

use kurbo::{Point, Vec2};

/// One abstract pointer sample in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample<K> {
    /// Pointer position in document coordinates.
    pub pos: Point,
    /// Which part of the gesture this sample belongs to.
    pub phase: PointerPhase<K>,
}

impl<K> PointerSample<K> {
    /// A pointer-start sample whose origin lies on `target`.
    #[must_use]
    pub const fn start(target: K, pos: Point) -> Self {
        Self {
            pos,
            phase: PointerPhase::Start { target },
        }
    }

    /// A pointer-move sample.
    #[must_use]
    pub const fn moved(pos: Point) -> Self {
        Self {
            pos,
            phase: PointerPhase::Move,
        }
    }

    /// A pointer-end sample.
    #[must_use]
    pub const fn end(pos: Point) -> Self {
        Self {
            pos,
            phase: PointerPhase::End,
        }
    }

    /// A cancellation sample (lost pointer capture, window blur, ...).
    #[must_use]
    pub const fn cancel(pos: Point) -> Self {
        Self {
            pos,
            phase: PointerPhase::Cancel,
        }
    }
}

/// Phase of a [`PointerSample`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerPhase<K> {
    /// Press (mouse down / touch start). `target` is the element the press
    /// landed on; it may be an item, a descendant of an item, or neither.
    Start {
        /// Element under the pointer at press time.
        target: K,
    },
    /// Pointer moved.
    Move,
    /// Release (mouse up / touch end).
    End,
    /// The gesture was interrupted. Handled exactly like [`PointerPhase::End`].
    Cancel,
}

/// First and latest pointer position of one gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTrack {
    start: Point,
    last: Point,
}

impl PointerTrack {
    /// Start tracking a gesture from the given position.
    #[must_use]
    pub const fn new(start: Point) -> Self {
        Self { start, last: start }
    }

    /// Record a new position, returning the movement delta since the previous one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    /// Position at gesture start.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Most recently recorded position.
    #[must_use]
    pub const fn last(&self) -> Point {
        self.last
    }

    /// Offset of the latest position from the gesture start.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last - self.start
    }

    /// Returns `true` once the pointer has moved strictly more than `threshold`
    /// along either axis.
    ///
    /// The axes are checked independently; this is a box, not a circle.
    #[must_use]
    pub fn exceeds(&self, threshold: f64) -> bool {
        let offset = self.total_offset();
        offset.x.abs() > threshold || offset.y.abs() > threshold
    }
}
