use serde::Serialize;

/// One speaker utterance recovered from the caption lines
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub entry_number: u32,
    /// Start of the most recent cue seen before the utterance opened, or empty
    pub timestamp: String,
    pub speaker: String,
    pub text: String,
}

/// Classification of a single trimmed caption line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    CueHeader { start: &'a str, end: &'a str },
    SpeakerLine { name: &'a str, text: &'a str },
    Continuation(&'a str),
    Blank,
}

/// Speaker accumulator that has been opened but not yet flushed
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenUtterance {
    pub speaker: String,
    pub text: String,
    pub timestamp: String,
}

impl OpenUtterance {
    pub(crate) fn append(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(line);
    }

    pub(crate) fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub(crate) fn into_utterance(self, entry_number: u32) -> Utterance {
        Utterance {
            entry_number,
            timestamp: self.timestamp,
            speaker: self.speaker,
            text: self.text,
        }
    }
}

/// How much of the file the speaker scan reads before deciding on the roster
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RosterPolicy {
    /// Every speaker line in the file counts; a third name is an error.
    #[default]
    WholeFile,
    /// Stop at the second distinct name. Later names are never seen.
    FirstTwo,
}
