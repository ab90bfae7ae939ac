// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the `understory_examples` examples.

pub mod logging;
pub mod script;
