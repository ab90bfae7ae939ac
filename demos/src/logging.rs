// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console logging for the demos.
//!
//! `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=understory_arrange=trace`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,understory_arrange=debug";

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// `RUST_LOG` did not parse as a filter directive.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber was already installed.
    #[error("failed to install subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
pub fn init_tracing() -> Result<(), LoggingError> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::try_new(DEFAULT_FILTER)?,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true).with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
