pub mod captions;
pub use captions::{
    classify_line, parse_utterances, scan_speakers, LineKind, RosterPolicy, SpeakerRoster,
    Utterance,
};

pub mod turns;
pub use turns::{aggregate_turns, CoachAssignment, EntryRange, Role, Turn};

pub mod document;
pub use document::{DocumentOptions, ReviewDocument, ReviewRow};

pub mod errors;
pub use errors::{RosterError, TranscriptError, TranscriptResult};

use log::info;
use std::fs;
use std::path::Path;

/// Options for one formatting pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    /// Name of the speaker acting as coach, matched ignoring case
    pub coach: String,
    pub roster_policy: RosterPolicy,
    pub document: DocumentOptions,
}

impl FormatOptions {
    pub fn new(coach: impl Into<String>) -> Self {
        Self {
            coach: coach.into(),
            ..Self::default()
        }
    }
}

/// Find the two speakers of a transcript so the operator can pick the coach
pub fn discover_speakers(content: &str, policy: RosterPolicy) -> TranscriptResult<SpeakerRoster> {
    Ok(scan_speakers(content.lines(), policy)?)
}

/// Turn raw caption text into a review document.
///
/// The roster is validated and the coach resolved before any parsing, so a
/// malformed roster never produces a partial document.
pub fn format_transcript(content: &str, options: &FormatOptions) -> TranscriptResult<ReviewDocument> {
    let roster = discover_speakers(content, options.roster_policy)?;
    let coach = roster.assign_coach(&options.coach)?;
    info!(
        "Coach: {}, client: {}",
        coach.coach_display_name(),
        coach.client_name()
    );

    let utterances = parse_utterances(content.lines());
    let turns = aggregate_turns(&utterances)?;
    Ok(ReviewDocument::build(&coach, &turns, &options.document))
}

/// Read a UTF-8 caption file from disk and format it
pub fn format_transcript_file<P: AsRef<Path>>(
    path: P,
    options: &FormatOptions,
) -> TranscriptResult<ReviewDocument> {
    let path = path.as_ref();
    info!("Reading transcript {}", path.display());
    let content = fs::read_to_string(path)?;
    format_transcript(&content, options)
}
