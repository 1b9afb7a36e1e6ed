//! Level-gated serialization — folds selected tiers into one flat record.
//!
//! The requested output level is an OPEN string here, unlike the closed
//! [`Level`] used for writes. `"info"` selects the info tier, `"warn"`
//! selects info + warn, and *anything else* — `"error"`, a `verbose-`
//! prefixed label, or a malformed one — selects all three tiers. The
//! fallback-to-maximal default is a deliberate external contract: an
//! unrecognized label must widen output, never lose accumulated data.

use serde_json::{Map, Value};

use crate::bundler::LogBundler;
use crate::types::{Entry, Level};

/// A rendered record: flat, insertion-ordered mapping from key to
/// flattened value, ready for structured serialization.
pub type Record = Map<String, Value>;

/// Tiers a requested output level folds in, lowest severity first.
fn selected_tiers(requested_level: &str) -> &'static [Level] {
    match requested_level {
        "info" => &[Level::Info],
        "warn" => &[Level::Info, Level::Warn],
        _ => &Level::ALL,
    }
}

/// Flatten the selected tiers of `bundler` into a [`Record`].
///
/// Two synthetic entries lead the record: `status` (the requested level
/// string, verbatim) and `time-elapsed-ms`. Both are ordinary [`Entry`]
/// values and flatten like everything else. Accumulated keys follow in
/// tier-then-insertion order; a key colliding across selected tiers
/// resolves last-write-wins, so the highest tier's entry survives while
/// the key keeps its first-insertion position. Cross-tier collisions are
/// NOT merged at the value level — only same-tier repeated writes
/// coalesce.
pub(crate) fn render(bundler: &LogBundler, requested_level: &str, elapsed_ms: f64) -> Record {
    let mut record = Record::new();

    let status = Entry::new(requested_level);
    let elapsed = Entry::new(elapsed_ms);
    record.insert("status".to_string(), status.flatten().clone());
    record.insert("time-elapsed-ms".to_string(), elapsed.flatten().clone());

    for level in selected_tiers(requested_level) {
        for (key, entry) in bundler.tier(*level).iter() {
            record.insert(key.to_string(), entry.flatten().clone());
        }
    }

    record
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
