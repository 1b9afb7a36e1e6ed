//! Dispatcher — decides whether and how a rendered record is emitted.
//!
//! The decision is a small state machine over `(environment, verbose)`:
//!
//! | Environment           | Behaviour                                        |
//! |-----------------------|--------------------------------------------------|
//! | `development` / `dev` | always emit; pretty-printed full content         |
//! | `test` / `testing`    | never emit                                       |
//! | anything else         | always emit; shape depends on the `verbose` flag |
//!
//! The dump level drives both the serializer's tier selection and the sink
//! method that is invoked, so `dump(Level::Warn)` serializes the
//! info + warn tiers and calls the sink's `warn` method.

use serde_json::Value;

use crate::bundler::LogBundler;
use crate::error::Error;
use crate::types::Level;

/// Dispatch branch for an environment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKind {
    Development,
    Test,
    /// Anything that is neither development nor test. Emission is never
    /// silent here; only the record shape depends on verbosity.
    ProductionLike,
}

impl EnvKind {
    /// Classify an environment label. `dev` and `testing` are aliases;
    /// unknown labels fall through to production-like.
    pub fn classify(environment: &str) -> Self {
        match environment {
            "development" | "dev" => EnvKind::Development,
            "test" | "testing" => EnvKind::Test,
            _ => EnvKind::ProductionLike,
        }
    }
}

pub(crate) fn dispatch(bundler: &LogBundler, level: Level) -> Result<(), Error> {
    // Verbose mode widens the requested level label; an unrecognized
    // `verbose-*` label falls through to maximal tier selection in the
    // serializer, so verbose output always carries every tier.
    let transformed = if bundler.verbose {
        format!("verbose-{level}")
    } else {
        level.to_string()
    };
    let record = bundler.render(&transformed);

    match EnvKind::classify(&bundler.environment) {
        EnvKind::Development => {
            let pretty = serde_json::to_string_pretty(&record)
                .expect("rendered record must serialize to JSON");
            let message = format!("{} full {}:", bundler.environment, level);
            bundler
                .sink
                .emit(level, &message, &Value::String(pretty))
                .map_err(Error::Sink)
        }
        EnvKind::Test => Ok(()),
        EnvKind::ProductionLike => {
            let message = format!("Full request data (level {transformed})");
            bundler
                .sink
                .emit(level, &message, &Value::Object(record))
                .map_err(Error::Sink)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
