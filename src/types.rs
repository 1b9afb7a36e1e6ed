//! Core types for logbundler — severity levels and accumulation entries.
//!
//! This module defines the two data structures everything else is built
//! on: the closed [`Level`] severity set a write must land in, and the
//! coalescing [`Entry`] cell that stores everything written under one
//! (tier, key) pair.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::str::FromStr;

use crate::error::Error;

/// Severity tier of an accumulated entry.
///
/// The tier set is closed: every write lands in exactly one of these three
/// buckets. Requested *output* levels are a separate, open concept — see
/// [`LogBundler::render`](crate::LogBundler::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// All tiers, lowest severity first. This is the merge order during
    /// rendering.
    pub const ALL: [Level; 3] = [Level::Info, Level::Warn, Level::Error];
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Parse a severity label at the write boundary.
    ///
    /// `verbose` is accepted as an alias of `info` for input compatibility,
    /// but nothing is ever stored under a `verbose` tier. Any other label
    /// fails with [`Error::InvalidLevel`] instead of silently opening a new
    /// tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" | "verbose" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(Error::InvalidLevel {
                given: other.to_string(),
            }),
        }
    }
}

/// One accumulation cell: everything written under a single (tier, key)
/// pair.
///
/// The first write is stored bare; every write thereafter turns the
/// content into a growing ordered array, in call order. Values are never
/// capped or deduplicated, and an entry is never deleted once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    content: Value,
    is_multiple: bool,
}

impl Entry {
    /// Create an entry holding a single value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            content: value.into(),
            is_multiple: false,
        }
    }

    /// Append a value, coalescing into an ordered array on the second
    /// write.
    pub fn add(&mut self, value: impl Into<Value>) {
        if !self.is_multiple {
            self.is_multiple = true;
            self.content = Value::Array(vec![self.content.take()]);
        }
        if let Value::Array(values) = &mut self.content {
            values.push(value.into());
        }
    }

    /// The stored content as-is: a bare value, or an ordered array once
    /// more than one write has been coalesced.
    pub fn flatten(&self) -> &Value {
        &self.content
    }

    /// Whether this entry has coalesced more than one write.
    pub fn is_multiple(&self) -> bool {
        self.is_multiple
    }
}

impl Serialize for Entry {
    // An entry serializes as its flattened content, not as a struct.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.content.serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_write_stays_bare() {
        let entry = Entry::new("alice");
        assert!(!entry.is_multiple());
        assert_eq!(entry.flatten(), &json!("alice"));
    }

    #[test]
    fn second_write_coalesces_into_array() {
        let mut entry = Entry::new("alice");
        entry.add("bob");
        assert!(entry.is_multiple());
        assert_eq!(entry.flatten(), &json!(["alice", "bob"]));
    }

    #[test]
    fn writes_accumulate_in_call_order() {
        let mut entry = Entry::new(1);
        entry.add(2);
        entry.add(3);
        entry.add(2);
        assert_eq!(entry.flatten(), &json!([1, 2, 3, 2]));
    }

    #[test]
    fn mixed_value_shapes_are_kept() {
        let mut entry = Entry::new(json!({"step": "auth"}));
        entry.add(json!(["retry", 2]));
        entry.add(500);
        assert_eq!(
            entry.flatten(),
            &json!([{"step": "auth"}, ["retry", 2], 500])
        );
    }

    #[test]
    fn entry_serializes_as_content() {
        let mut entry = Entry::new("a");
        entry.add("b");
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn level_labels_round_trip() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn verbose_parses_as_info_alias() {
        assert_eq!("verbose".parse::<Level>().unwrap(), Level::Info);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "fatal".parse::<Level>().unwrap_err();
        assert!(matches!(err, Error::InvalidLevel { given } if given == "fatal"));
    }
}
