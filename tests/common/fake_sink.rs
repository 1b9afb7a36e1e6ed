//! Fake sinks — record every emission, or fail on purpose.
//!
//! [`RecordingSink`] captures each sink invocation (method, message, data)
//! so harnesses can assert on exactly what the dispatcher emitted.
//! [`FailingSink`] errors from every method to exercise failure
//! propagation out of `dump`.

use anyhow::anyhow;
use logbundler::LogSink;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One recorded sink invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkCall {
    /// Which severity method was invoked.
    pub method: &'static str,
    pub message: String,
    pub data: Value,
}

/// Sink that records every call for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<SinkCall>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of all calls so far, in invocation order.
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The single recorded call. Panics unless exactly one call was made.
    pub fn only_call(&self) -> SinkCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one sink call: {calls:#?}");
        calls.into_iter().next().unwrap()
    }

    fn record(&self, method: &'static str, message: &str, data: &Value) {
        self.calls.lock().unwrap().push(SinkCall {
            method,
            message: message.to_string(),
            data: data.clone(),
        });
    }
}

impl LogSink for RecordingSink {
    fn info(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        self.record("info", message, data);
        Ok(())
    }

    fn warn(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        self.record("warn", message, data);
        Ok(())
    }

    fn error(&self, message: &str, data: &Value) -> anyhow::Result<()> {
        self.record("error", message, data);
        Ok(())
    }
}

/// Sink whose every method fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSink;

impl LogSink for FailingSink {
    fn info(&self, _message: &str, _data: &Value) -> anyhow::Result<()> {
        Err(anyhow!("sink unavailable"))
    }

    fn warn(&self, _message: &str, _data: &Value) -> anyhow::Result<()> {
        Err(anyhow!("sink unavailable"))
    }

    fn error(&self, _message: &str, _data: &Value) -> anyhow::Result<()> {
        Err(anyhow!("sink unavailable"))
    }
}
