// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pointer gestures.
//!
//! A [`Gesture`] is a press on a node followed by a straight-line sweep in
//! fixed-size steps and a release, expanded into the [`PointerSample`]s a
//! platform would deliver.

use kurbo::{Point, Vec2};
use serde::Deserialize;
use understory_arrange::PointerSample;
use understory_arrange::stack::StackNode;

/// One press, sweep, release.
#[derive(Clone, Debug, Deserialize)]
pub struct Gesture {
    /// Id of the item pressed.
    pub item: u32,
    /// Press on the item's grip instead of its body.
    #[serde(default)]
    pub grip: bool,
    /// Press position, document coordinates.
    pub from: (f64, f64),
    /// Release position, document coordinates.
    pub to: (f64, f64),
    /// Number of intermediate move samples.
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Release with a cancel instead of an end.
    #[serde(default)]
    pub cancel: bool,
}

fn default_steps() -> u32 {
    8
}

impl Gesture {
    /// Expand into pointer samples.
    pub fn samples(&self) -> Vec<PointerSample<StackNode>> {
        let from = Point::new(self.from.0, self.from.1);
        let to = Point::new(self.to.0, self.to.1);
        let target = if self.grip {
            StackNode::Grip(self.item)
        } else {
            StackNode::Item(self.item)
        };
        let steps = self.steps.max(1);
        let stride: Vec2 = (to - from) / f64::from(steps);

        let mut out = Vec::with_capacity(steps as usize + 2);
        out.push(PointerSample::start(target, from));
        out.extend((1..=steps).map(|i| PointerSample::moved(from + stride * f64::from(i))));
        out.push(if self.cancel {
            PointerSample::cancel(to)
        } else {
            PointerSample::end(to)
        });
        out
    }
}
