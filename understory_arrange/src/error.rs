// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons an [`ArrangeOptions`](crate::ArrangeOptions) cannot be bound.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// No selector identifies the draggable items.
    #[error("cannot initialize arrangeable without a drag elements selector")]
    MissingItemsSelector,
    /// The scroll speed is negative, NaN or infinite.
    #[error("scroll speed must be finite and non-negative, got {0}")]
    InvalidScrollSpeed(f64),
    /// The drag threshold is negative, NaN or infinite.
    #[error("drag threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
}
