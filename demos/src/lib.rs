// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the Waymark demos.
//!
//! The libraries only emit `tracing` events; the demos install the subscriber. Verbosity
//! comes from `RUST_LOG` and falls back to `info` when it is unset or unparsable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Directives used when `RUST_LOG` gives none.
pub const DEFAULT_DIRECTIVES: &str = "info";

/// Build the log filter from `RUST_LOG`-style directives.
///
/// The directives are taken as given, so `debug` enables the lattice, overlap and
/// connectivity events of the Waymark crates.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install a console subscriber filtered by `RUST_LOG`.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(directives.as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn requested_level_is_kept() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("waymark_region=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn missing_directives_fall_back_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }
}
