//! Sink capability — the injected collaborator that performs actual
//! output.
//!
//! The bundler core never writes anywhere itself; it hands the final
//! message and rendered record to a [`LogSink`]. The default is
//! [`ConsoleSink`]; hosts that already log through `tracing` can inject
//! [`TracingSink`] instead, and tests or benchmarks can use [`NoopSink`].

use serde_json::Value;

use crate::types::Level;

/// Capability interface for emitting one consolidated record.
///
/// Implementations expose one method per severity. A failed emission is
/// reported through the returned `Result`; the bundler propagates it out
/// of [`dump`](crate::LogBundler::dump) rather than swallowing it.
pub trait LogSink: Send + Sync {
    /// Emit at info severity.
    fn info(&self, message: &str, data: &Value) -> anyhow::Result<()>;
    /// Emit at warn severity.
    fn warn(&self, message: &str, data: &Value) -> anyhow::Result<()>;
    /// Emit at error severity.
    fn error(&self, message: &str, data: &Value) -> anyhow::Result<()>;

    /// Dispatch to the method matching `level`.
    ///
    /// The dump path always goes through here, which keeps the selected
    /// serialization tier and the invoked sink method consistent.
    fn emit(&self, level: Level, message: &str, data: &Value) -> anyhow::Result<()> {
        match level {
            Level::Info => self.info(message, data),
            Level::Warn => self.warn(message, data),
            Level::Error => self.error(message, data),
        }
    }
}

// ---------------------------------------------------------------------------
// Console sink (default)
// ---------------------------------------------------------------------------

/// Default console sink.
///
/// Prints the message line, then the data indented beneath it — the
/// closest terminal equivalent to a grouped console entry. `info` goes to
/// stdout; `warn` and `error` go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn grouped(message: &str, data: &Value) -> String {
        // String data (the pretty-printed development payload) is printed
        // raw; anything else is pretty-printed here.
        let body = match data {
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other)
                .unwrap_or_else(|_| other.to_string()),
        };
        let indented = body
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{message}\n{indented}")
    }
}

impl LogSink for ConsoleSink {
    fn info(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        println!("{}", Self::grouped(message, data));
        Ok(())
    }

    fn warn(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        eprintln!("{}", Self::grouped(message, data));
        Ok(())
    }

    fn error(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        eprintln!("{}", Self::grouped(message, data));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tracing sink
// ---------------------------------------------------------------------------

/// Sink adapter that forwards records through the `tracing` macros at the
/// matching level.
///
/// The record travels as a structured `record` field rather than being
/// embedded in the message body, so downstream formatters and collectors
/// can parse it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        tracing::info!(target: "logbundler", record = %data, "{message}");
        Ok(())
    }

    fn warn(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        tracing::warn!(target: "logbundler", record = %data, "{message}");
        Ok(())
    }

    fn error(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        tracing::error!(target: "logbundler", record = %data, "{message}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Noop sink
// ---------------------------------------------------------------------------

/// Sink that discards everything. Useful in tests and benchmarks where
/// output is irrelevant.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn info(&self, _message: &str, _data: &Value) -> anyhow::Result<()> {
        Ok(())
    }

    fn warn(&self, _message: &str, _data: &Value) -> anyhow::Result<()> {
        Ok(())
    }

    fn error(&self, _message: &str, _data: &Value) -> anyhow::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
