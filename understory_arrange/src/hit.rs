// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Center-point hit testing for the ghost.
//!
//! A sibling counts as hovered when its center lies strictly inside the
//! ghost's box. Compared to "any overlap" or "largest overlap", this gives a
//! single, predictable swap point at roughly half overlap and does not flicker
//! between near-tied neighbours.
//!
//! Candidates are scanned in collection order and the first match wins, so two
//! centers inside the ghost at once resolve to the earlier one.
//!
//! ```
//! use kurbo::Rect;
//! use understory_arrange::hit::{contains_center, hovered};
//!
//! let boxes = [
//!     Rect::new(0.0, 0.0, 100.0, 40.0),
//!     Rect::new(0.0, 40.0, 100.0, 80.0),
//!     Rect::new(0.0, 80.0, 100.0, 120.0),
//! ];
//! let items = [0_usize, 1, 2];
//!
//! // Item 0 dragged halfway down over item 1.
//! let ghost = Rect::new(0.0, 30.0, 100.0, 70.0);
//! assert!(contains_center(ghost, boxes[1]));
//! assert_eq!(hovered(&items, &0, ghost, |i| Some(boxes[*i])), Some(1));
//! ```

use kurbo::Rect;
use tracing::trace;

use crate::host::Geometry;

/// Returns `true` if the center of `candidate` lies strictly inside `ghost`.
#[must_use]
pub fn contains_center(ghost: Rect, candidate: Rect) -> bool {
    let mid = candidate.center();
    ghost.x0 < mid.x && mid.x < ghost.x1 && ghost.y0 < mid.y && mid.y < ghost.y1
}

/// Index of the first item in `items`, other than `dragged`, whose box center
/// the `ghost` covers.
///
/// `bounds` returns `None` for items that currently have no box; those are
/// treated as "no hit" for this call.
pub fn hovered<K, F>(items: &[K], dragged: &K, ghost: Rect, mut bounds: F) -> Option<usize>
where
    K: PartialEq,
    F: FnMut(&K) -> Option<Rect>,
{
    items.iter().enumerate().find_map(|(index, item)| {
        if item == dragged {
            return None;
        }
        let Some(rect) = bounds(item) else {
            trace!(index, "hit test candidate has no bounds");
            return None;
        };
        contains_center(ghost, rect).then_some(index)
    })
}

/// [`hovered`] with boxes supplied by a [`Geometry`] provider.
pub fn hovered_in<G: Geometry + ?Sized>(
    geometry: &G,
    items: &[G::Key],
    dragged: &G::Key,
    ghost: Rect,
) -> Option<usize> {
    hovered(items, dragged, ghost, |key| geometry.bounds(key))
}
