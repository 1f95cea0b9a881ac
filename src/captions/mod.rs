mod classify;
mod parser;
mod roster;
mod types;

pub use classify::classify_line;
pub use parser::{parse_utterances, parse_with_leftover, ParseState};
pub use roster::{scan_speakers, SpeakerRoster};
pub use types::{LineKind, OpenUtterance, RosterPolicy, Utterance};
