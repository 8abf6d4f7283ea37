//! Append-only transcript of a session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Prefix used when rendering the transcript as a prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Assistant => "Assistant",
        }
    }
}

/// One immutable (speaker, text) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    id: MessageId,
    speaker: Speaker,
    text: String,
    created_at: Timestamp,
}

impl TranscriptEntry {
    fn new(speaker: Speaker, text: String) -> Self {
        Self {
            id: MessageId::new(),
            speaker,
            text,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Ordered record of every exchanged message.
///
/// Entries can only be appended; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns it.
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) -> &TranscriptEntry {
        self.entries.push(TranscriptEntry::new(speaker, text.into()));
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    /// Entries appended at or after `index`.
    pub fn since(&self, index: usize) -> &[TranscriptEntry] {
        &self.entries[index.min(self.entries.len())..]
    }
}
