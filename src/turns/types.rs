use crate::captions::Utterance;
use serde::Serialize;
use std::fmt;

/// Consecutive utterances from one speaker, merged for display
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub start_entry: u32,
    pub end_entry: u32,
    pub start_timestamp: String,
    pub speaker: String,
    pub text: String,
}

impl Turn {
    pub(crate) fn open(utterance: &Utterance) -> Self {
        Self {
            start_entry: utterance.entry_number,
            end_entry: utterance.entry_number,
            start_timestamp: utterance.timestamp.clone(),
            speaker: utterance.speaker.clone(),
            text: utterance.text.clone(),
        }
    }

    pub(crate) fn extend(&mut self, utterance: &Utterance) {
        self.text.push(' ');
        self.text.push_str(&utterance.text);
        self.end_entry = utterance.entry_number;
    }

    pub fn range(&self) -> EntryRange {
        EntryRange {
            start: self.start_entry,
            end: self.end_entry,
        }
    }

    /// Number of utterances merged into this turn
    pub fn entry_count(&self) -> usize {
        self.end_entry.saturating_sub(self.start_entry) as usize + 1
    }

    pub fn is_single(&self) -> bool {
        self.start_entry == self.end_entry
    }
}

/// Closed range of entry numbers, shown as `3` or `3-5`
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRange {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for EntryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
