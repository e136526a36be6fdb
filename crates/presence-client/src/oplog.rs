//! In-memory operation log.
//!
//! Every user-visible outcome (success or failure) is recorded here with a
//! timestamp and a severity, newest first, so the surface can render a
//! notification feed. The log is bounded and drops the oldest entries.

use std::collections::VecDeque;

use serde::Serialize;

use crate::error::ClientError;

pub const OPLOG_CAPACITY: usize = 500;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Entry {
    pub at: u64,
    pub level: Level,
    pub message: String,
}

#[derive(Debug)]
pub struct OpLog {
    entries: VecDeque<Entry>,
    capacity: usize,
}

impl Default for OpLog {
    fn default() -> Self {
        Self::with_capacity(OPLOG_CAPACITY)
    }
}

impl OpLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OpLog { entries: VecDeque::new(), capacity: capacity.max(1) }
    }

    pub fn push(&mut self, at: u64, level: Level, message: impl Into<String>) {
        self.entries.push_front(Entry { at, level, message: message.into() });
        self.entries.truncate(self.capacity);
    }

    pub fn info(&mut self, at: u64, message: impl Into<String>) {
        self.push(at, Level::Info, message);
    }

    pub fn success(&mut self, at: u64, message: impl Into<String>) {
        self.push(at, Level::Success, message);
    }

    pub fn warning(&mut self, at: u64, message: impl Into<String>) {
        self.push(at, Level::Warning, message);
    }

    /// Records a failed operation, with the follow-up hint when there is one.
    pub fn report(&mut self, at: u64, action: &str, err: &ClientError) {
        let level = match err {
            ClientError::Cancelled => Level::Info,
            ClientError::Ineligible(_) => Level::Warning,
            _ => Level::Error,
        };
        let message = match err.hint() {
            Some(hint) => format!("{action}: {err} ({hint})"),
            None => format!("{action}: {err}"),
        };
        self.push(at, level, message);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Entry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }
}
