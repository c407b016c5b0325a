// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-level tracing setup. `RUST_LOG` controls verbosity the same way
//! it does for the rest of the corpus; unset it defaults to `info`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the global subscriber. `console` selects a plain stdout
/// writer; otherwise output still goes to stdout but callers running under
/// a process supervisor typically redirect it to a file themselves.
pub fn init(console: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = fmt::layer().with_target(console).with_ansi(console);
    tracing_subscriber::registry().with(filter).with(layer).init();
}
