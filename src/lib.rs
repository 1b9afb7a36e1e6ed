//! logbundler — per-request log bundler.
//!
//! Buffers structured key/value data tagged by severity level across the
//! lifetime of a single logical operation (an HTTP request, a job run),
//! then emits ONE consolidated record at the end instead of many scattered
//! log lines.
//!
//! # Architecture
//!
//! ```text
//! add() / snapshot_elapsed()        dump(level)
//!          │                            │
//!          ▼                            ▼
//!   LogBundler tiers ──► render ──► dispatch ──► LogSink
//!   (info/warn/error)   (tier gate,  (environment  (console,
//!                        flatten)     × verbosity)  tracing, noop)
//! ```
//!
//! Everything is synchronous and single-threaded by design: one bundler
//! instance is scoped to exactly one request lifecycle, with no internal
//! locking.
//!
//! # Example
//!
//! ```rust
//! use logbundler::{BundlerOptions, Level, LogBundler};
//!
//! let mut log = LogBundler::new(BundlerOptions::with_correlation_id("req-42"));
//! log.add("user", "alice", Level::Info)
//!     .add("user", "bob", Level::Info)
//!     .add("code", 500, Level::Error);
//! log.dump(Level::Error)?;
//! # Ok::<(), logbundler::Error>(())
//! ```

pub mod bundler;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod sink;
pub mod timer;
pub mod types;

pub use bundler::LogBundler;
pub use config::{BundlerConfig, BundlerOptions};
pub use dispatch::EnvKind;
pub use error::Error;
pub use render::Record;
pub use sink::{ConsoleSink, LogSink, NoopSink, TracingSink};
pub use timer::Timer;
pub use types::{Entry, Level};
