//! The accumulator — per-request entry storage and the dump path.
//!
//! A [`LogBundler`] is scoped to exactly one logical operation (an HTTP
//! request, a job run). Writes coalesce into tiers throughout the
//! operation; a single [`dump`](LogBundler::dump) at the end folds the
//! accumulated state into one consolidated record and hands it to the
//! configured sink.

use serde_json::Value;
use std::sync::Arc;

use crate::config::BundlerOptions;
use crate::dispatch;
use crate::error::Error;
use crate::render::{self, Record};
use crate::sink::{ConsoleSink, LogSink};
use crate::timer::Timer;
use crate::types::{Entry, Level};

// ---------------------------------------------------------------------------
// Tier storage
// ---------------------------------------------------------------------------

/// An insertion-ordered key → [`Entry`] mapping for one severity tier.
///
/// Per-request tiers hold tens of keys, so lookup is a linear scan; what
/// matters is that iteration order is write order, which is visible in the
/// rendered record.
#[derive(Debug, Default, Clone)]
pub(crate) struct TierMap {
    entries: Vec<(String, Entry)>,
}

impl TierMap {
    fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    fn insert(&mut self, key: String, entry: Entry) {
        self.entries.push((key, entry));
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, entry)| (k.as_str(), entry))
    }
}

// ---------------------------------------------------------------------------
// LogBundler
// ---------------------------------------------------------------------------

/// Per-request log accumulator.
///
/// Buffers structured key/value data tagged by severity across one logical
/// operation, then emits a single consolidated record via
/// [`dump`](Self::dump). One instance belongs to exactly one request
/// lifecycle; there is no internal locking, and concurrent execution
/// contexts must each own their own instance.
///
/// # Example
///
/// ```rust
/// use logbundler::{BundlerOptions, Level, LogBundler};
///
/// let mut log = LogBundler::new(BundlerOptions::with_correlation_id("req-42"));
/// log.add("user", "alice", Level::Info)
///     .add("user", "bob", Level::Info)
///     .add("code", 500, Level::Error);
/// log.dump(Level::Error)?;
/// # Ok::<(), logbundler::Error>(())
/// ```
pub struct LogBundler {
    pub(crate) timer: Timer,
    last_snapshot: Timer,
    info: TierMap,
    warn: TierMap,
    error: TierMap,
    pub(crate) verbose: bool,
    pub(crate) environment: String,
    pub(crate) sink: Arc<dyn LogSink>,
}

impl LogBundler {
    /// Construct from options.
    ///
    /// A supplied correlation id is recorded immediately as `request-id`
    /// under `info`. The monotonic timer starts here; `time-elapsed-ms` in
    /// every rendered record is measured from this point.
    pub fn new(options: BundlerOptions) -> Self {
        let BundlerOptions {
            correlation_id,
            config,
            sink,
        } = options;
        let mut bundler = Self {
            timer: Timer::start(),
            last_snapshot: Timer::start(),
            info: TierMap::default(),
            warn: TierMap::default(),
            error: TierMap::default(),
            verbose: config.verbose,
            environment: config.environment,
            sink: sink.unwrap_or_else(|| Arc::new(ConsoleSink)),
        };
        if let Some(id) = correlation_id {
            bundler.add("request-id", id, Level::Info);
        }
        bundler
    }

    /// Record `value` under `(level, key)`.
    ///
    /// The first write to a pair stores the value bare; repeated writes to
    /// the same pair coalesce into an ordered array in call order. Returns
    /// `&mut Self` so writes can be chained.
    pub fn add(&mut self, key: &str, value: impl Into<Value>, level: Level) -> &mut Self {
        let tier = self.tier_mut(level);
        match tier.get_mut(key) {
            Some(entry) => entry.add(value),
            None => tier.insert(key.to_string(), Entry::new(value)),
        }
        self
    }

    /// Record under the `info` tier.
    pub fn info(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.add(key, value, Level::Info)
    }

    /// Record under the `warn` tier.
    pub fn warn(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.add(key, value, Level::Warn)
    }

    /// Record under the `error` tier.
    pub fn error(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.add(key, value, Level::Error)
    }

    /// Record a human-readable timing snapshot under `info`.
    ///
    /// The message reports milliseconds since the previous snapshot (or
    /// construction) and milliseconds since construction, then resets the
    /// snapshot marker. Repeated snapshots under the same key coalesce
    /// like any other write.
    pub fn snapshot_elapsed(&mut self, key: &str) -> &mut Self {
        let since_last = self.last_snapshot.elapsed_ms();
        let since_start = self.timer.elapsed_ms();
        self.last_snapshot = Timer::start();
        let message = format!(
            "{since_last:.3} ms since last snapshot, {since_start:.3} ms since start"
        );
        self.add(key, message, Level::Info)
    }

    /// Render the record for `requested_level` without emitting it.
    ///
    /// The level is an open string here: `"info"` selects the info tier,
    /// `"warn"` selects info + warn, and anything else — including
    /// `"error"` and `verbose-` prefixed labels — selects all three tiers.
    /// Elapsed time is computed fresh on every call.
    pub fn render(&self, requested_level: &str) -> Record {
        render::render(self, requested_level, self.timer.elapsed_ms())
    }

    /// Serialize the accumulated state and hand it to the sink.
    ///
    /// Whether and how the record is emitted depends on the configured
    /// environment and verbosity — see [`crate::dispatch`]. May be called
    /// more than once; each call re-renders the same accumulated state
    /// with freshly computed elapsed time. A sink failure propagates as
    /// [`Error::Sink`].
    pub fn dump(&self, level: Level) -> Result<(), Error> {
        dispatch::dispatch(self, level)
    }

    /// The configured environment label.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Whether verbose output shaping is enabled.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub(crate) fn tier(&self, level: Level) -> &TierMap {
        match level {
            Level::Info => &self.info,
            Level::Warn => &self.warn,
            Level::Error => &self.error,
        }
    }

    fn tier_mut(&mut self, level: Level) -> &mut TierMap {
        match level {
            Level::Info => &mut self.info,
            Level::Warn => &mut self.warn,
            Level::Error => &mut self.error,
        }
    }
}

impl Default for LogBundler {
    fn default() -> Self {
        Self::new(BundlerOptions::default())
    }
}

impl std::fmt::Debug for LogBundler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogBundler")
            .field("environment", &self.environment)
            .field("verbose", &self.verbose)
            .field("info", &self.info)
            .field("warn", &self.warn)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
