//! Error taxonomy for logbundler.
//!
//! Accumulation and rendering are total over their documented inputs; only
//! the severity-parsing write boundary and the injected sink can fail.

/// Errors surfaced by bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A severity label outside the closed `info | warn | error` set was
    /// passed at the write boundary.
    #[error("invalid log level {given:?}: expected one of info, warn, error")]
    InvalidLevel {
        /// The label as received.
        given: String,
    },

    /// The injected sink failed while emitting a record. Never suppressed
    /// by the core — masking it could hide an observability outage.
    #[error("log sink failed: {0}")]
    Sink(anyhow::Error),
}
