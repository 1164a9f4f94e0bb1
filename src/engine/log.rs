//! Turn log: the free-text record of everything that happened

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Turn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: Turn,
    pub actor: String,
    pub text: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TurnLog {
    entries: Vec<LogEntry>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn, actor: impl Into<String>, text: impl Into<String>) {
        let entry = LogEntry {
            turn,
            actor: actor.into(),
            text: text.into(),
        };
        tracing::info!(turn, actor = %entry.actor, "{}", entry.text);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
