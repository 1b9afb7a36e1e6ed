//! Test builders — ergonomic constructors for bundlers in specific
//! environments.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use logbundler::{BundlerConfig, BundlerOptions, LogBundler, LogSink, NoopSink};
use std::sync::Arc;

/// Bundler wired to the given sink in the given environment.
pub fn bundler_with_sink(
    environment: &str,
    verbose: bool,
    sink: Arc<dyn LogSink>,
) -> LogBundler {
    LogBundler::new(BundlerOptions {
        correlation_id: None,
        config: BundlerConfig {
            verbose,
            environment: environment.to_string(),
        },
        sink: Some(sink),
    })
}

/// Bundler that never produces output, for tests that only inspect
/// accumulated state via `render`.
pub fn quiet_bundler() -> LogBundler {
    bundler_with_sink("test", false, Arc::new(NoopSink))
}

/// Quiet bundler pre-seeded with one distinct key per tier:
/// `i-key` (info), `w-key` (warn), `e-key` (error).
pub fn seeded_bundler() -> LogBundler {
    let mut log = quiet_bundler();
    log.info("i-key", "i-value")
        .warn("w-key", "w-value")
        .error("e-key", "e-value");
    log
}
