// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless drag-to-reorder.
//!
//! Loads `ArrangeOptions` and a list of scripted gestures from JSON, replays
//! them over a `StackSurface` of ten rows, and prints the row order after each
//! gesture. Pass a path to a JSON file to use your own script:
//!
//! ```json
//! {
//!   "options": { "items": "items", "drag_handle": "grips", "scroll_speed": 20 },
//!   "gestures": [{ "item": 1, "grip": true, "from": [5, 20], "to": [5, 150] }]
//! }
//! ```
//!
//! Run:
//! - `cargo run -p understory_examples --example arrange_headless`
//! - `RUST_LOG=understory_arrange=trace cargo run -p understory_examples --example arrange_headless`

use std::{env, fs, process::ExitCode};

use serde::Deserialize;
use tracing::{error, info};
use understory_arrange::stack::{StackGhost, StackNode, StackSelector, StackSurface};
use understory_arrange::{Arrange, ArrangeOptions, DragEvent};
use understory_examples::{logging::init_tracing, script::Gesture};

const DEFAULT_SCRIPT: &str = r#"{
  "options": {
    "items": "items",
    "drag_handle": "grips",
    "class_prefix": "demo-",
    "scroll_zone": "capped_to_quarter_viewport"
  },
  "gestures": [
    { "item": 1, "grip": true, "from": [5, 20], "to": [5, 150], "steps": 13 },
    { "item": 3, "from": [80, 60], "to": [80, 140] },
    { "item": 10, "grip": true, "from": [5, 380], "to": [5, 0], "steps": 38 },
    { "item": 5, "grip": true, "from": [5, 180], "to": [5, 260], "cancel": true },
    { "item": 7, "grip": true, "from": [5, 260], "to": [7, 262] }
  ]
}"#;

#[derive(Debug, Deserialize)]
struct Script {
    options: ArrangeOptions<StackSelector>,
    gestures: Vec<Gesture>,
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("{err}");
    }

    let source = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                error!(%path, %err, "cannot read script");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_SCRIPT.to_owned(),
    };
    let script: Script = match serde_json::from_str(&source) {
        Ok(script) => script,
        Err(err) => {
            error!(%err, "malformed script");
            return ExitCode::FAILURE;
        }
    };

    let Ok(mut arrange) = Arrange::<StackNode, StackSelector, StackGhost>::new(script.options) else {
        // The binding already logged why.
        return ExitCode::FAILURE;
    };

    // Ten 40px rows with a 10px grip, a 200px viewport.
    let mut surface = StackSurface::new(240.0)
        .with_items((1..=10).map(|id| (id, 40.0)))
        .with_grips(10.0)
        .with_viewport_height(200.0);
    println!("start     {:?}", surface.order());

    for (n, gesture) in script.gestures.iter().enumerate() {
        let mut moves = 0;
        let mut scrolled = 0.0;
        for sample in gesture.samples() {
            match arrange.handle(&mut surface, sample) {
                DragEvent::Dragged {
                    scroll_delta,
                    reorder,
                } => {
                    scrolled += scroll_delta;
                    if reorder.is_some() {
                        moves += 1;
                    }
                }
                DragEvent::Ended { item, dragged } => {
                    info!(?item, dragged, moves, scrolled, "gesture {n} ended");
                }
                _ => {}
            }
        }
        println!(
            "gesture {n} {:?} (scroll_top {})",
            surface.order(),
            surface.scroll_top()
        );
    }

    ExitCode::SUCCESS
}
