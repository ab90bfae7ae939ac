// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use tracing::warn;

use crate::error::ConfigError;
use crate::host::ArrangeHost;
use crate::options::ArrangeOptions;
use crate::pointer::PointerSample;
use crate::session::{DragEvent, DragPhase, DragSession};

/// A validated set of [`ArrangeOptions`] paired with its [`DragSession`].
///
/// Create one per arrangeable collection and keep it for as long as the
/// collection is on screen; it cycles through any number of gestures.
#[derive(Clone, Debug)]
pub struct Arrange<K, S, G> {
    options: ArrangeOptions<S>,
    session: DragSession<K, G>,
}

impl<K, S, G> Arrange<K, S, G>
where
    K: Clone + PartialEq,
{
    /// Validates `options` and creates an idle binding.
    ///
    /// Invalid options are logged and returned as an error; no session is
    /// created for them.
    pub fn new(options: ArrangeOptions<S>) -> Result<Self, ConfigError> {
        if let Err(err) = options.validate() {
            warn!(%err, "arrangeable not initialized");
            return Err(err);
        }
        Ok(Self {
            options,
            session: DragSession::new(),
        })
    }

    /// The options this binding was created with.
    #[must_use]
    pub fn options(&self) -> &ArrangeOptions<S> {
        &self.options
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &DragSession<K, G> {
        &self.session
    }

    /// Current phase of the session.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.session.phase()
    }

    /// Dispatch one pointer sample against `host`.
    pub fn handle<H>(&mut self, host: &mut H, sample: PointerSample<K>) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Selector = S, Ghost = G>,
    {
        self.session.handle(host, &self.options, sample)
    }

    /// Press on `target` at `pos`. See [`DragSession::pointer_down`].
    pub fn pointer_down<H>(&mut self, host: &mut H, target: &K, pos: Point) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Selector = S, Ghost = G>,
    {
        self.session.pointer_down(host, &self.options, target, pos)
    }

    /// Move to `pos`. See [`DragSession::pointer_move`].
    pub fn pointer_move<H>(&mut self, host: &mut H, pos: Point) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Selector = S, Ghost = G>,
    {
        self.session.pointer_move(host, &self.options, pos)
    }

    /// Release. See [`DragSession::pointer_up`].
    pub fn pointer_up<H>(&mut self, host: &mut H) -> DragEvent<K>
    where
        H: ArrangeHost<Key = K, Selector = S, Ghost = G>,
    {
        self.session.pointer_up(host)
    }
}
