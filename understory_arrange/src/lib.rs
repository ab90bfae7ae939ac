// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Arrange: drag-to-reorder for sibling elements.
//!
//! This crate implements the interaction behind "grab an item and drag it to a
//! new place in the list": the others shift to make room as the dragged item
//! passes over them, and the document scrolls when the pointer nears the top
//! or bottom of the viewport.
//!
//! It is headless. The crate does not own a scene graph, does not read
//! platform events, and does not draw anything. Hosts provide:
//!
//! - A [`Geometry`] implementation: document-space boxes for elements and the
//!   current viewport metrics.
//! - An [`ArrangeHost`] implementation on top of it: selector queries, sibling
//!   moves, visibility, a ghost (a floating copy of the dragged item), and
//!   document scrolling.
//! - A stream of [`PointerSample`]s in document coordinates, one per platform
//!   pointer event.
//!
//! The pieces:
//!
//! - [`session`]: the [`DragSession`] state machine (`Idle → Armed → Dragging`).
//! - [`hit`]: center-point hit testing of the ghost against the siblings.
//! - [`scroll`]: the per-tick auto-scroll velocity function.
//! - [`pointer`]: pointer samples and the per-gesture [`PointerTrack`].
//! - [`Arrange`]: a validated [`ArrangeOptions`] plus its session; the usual
//!   entry point.
//! - [`stack`]: [`StackSurface`], a small in-memory host used by tests and demos.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_arrange::{Arrange, ArrangeOptions, DragEvent, DragPhase, PointerSample};
//! use understory_arrange::stack::{StackNode, StackSelector, StackSurface};
//!
//! let mut surface = StackSurface::new(200.0)
//!     .with_items([(1, 40.0), (2, 40.0), (3, 40.0), (4, 40.0)]);
//! let mut arrange = Arrange::new(ArrangeOptions::new(StackSelector::Items)).unwrap();
//!
//! // Press on the last row.
//! let press = PointerSample::start(StackNode::Item(4), Point::new(20.0, 140.0));
//! assert_eq!(arrange.handle(&mut surface, press), DragEvent::Armed(StackNode::Item(4)));
//!
//! // Moving 3px does not start a drag.
//! arrange.handle(&mut surface, PointerSample::moved(Point::new(20.0, 137.0)));
//! assert_eq!(arrange.phase(), DragPhase::Armed);
//!
//! // Moving 10px does.
//! arrange.handle(&mut surface, PointerSample::moved(Point::new(20.0, 130.0)));
//! assert_eq!(arrange.phase(), DragPhase::Dragging);
//! assert!(surface.is_hidden(4));
//!
//! // Carry it up until row 2's center is under the ghost.
//! arrange.handle(&mut surface, PointerSample::moved(Point::new(20.0, 75.0)));
//! arrange.handle(&mut surface, PointerSample::end(Point::new(20.0, 75.0)));
//!
//! assert_eq!(surface.order(), [1, 4, 2, 3]);
//! assert_eq!(arrange.phase(), DragPhase::Idle);
//! assert!(!surface.is_hidden(4));
//! ```
//!
//! ## Configuration
//!
//! [`ArrangeOptions`] carries the items selector (required), an optional
//! container and drag-handle selector, the ghost class prefix, the drag
//! threshold, and the auto-scroll policy ([`ScrollZone`], [`ScrollEasing`],
//! speed). With the `serde` feature the options can be deserialized from any
//! serde format.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `warn` when options fail validation,
//! `debug` for gesture transitions and reorders, and `trace` for per-tick
//! geometry misses and scroll deltas. Nothing is logged unless the host
//! installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod error;
mod options;

pub mod hit;
pub mod host;
pub mod pointer;
pub mod scroll;
pub mod session;
pub mod stack;

pub use binding::Arrange;
pub use error::ConfigError;
pub use host::{ArrangeHost, Geometry, ViewportMetrics};
pub use options::{ArrangeOptions, DEFAULT_DRAG_THRESHOLD, GHOST_CLASS};
pub use pointer::{PointerPhase, PointerSample, PointerTrack};
pub use scroll::{AutoScroll, ScrollEasing, ScrollInput, ScrollZone};
pub use session::{DragEvent, DragPhase, DragSession, Placement, Reorder};
pub use stack::StackSurface;
