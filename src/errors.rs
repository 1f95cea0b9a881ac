use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while formatting a transcript
#[derive(Debug)]
pub enum TranscriptError {
    /// The speaker scan did not find exactly two distinct names.
    MalformedRoster(RosterError),
    /// Parsing produced no utterances, so there is nothing to aggregate.
    EmptyTranscript,
    /// The operator picked a coach that is not one of the two roster names.
    UnknownCoach { choice: String, roster: Vec<String> },
    Io(io::Error),
}

/// Speaker roster validation failure
#[derive(Debug)]
pub struct RosterError {
    pub found: Vec<String>,
}

impl RosterError {
    /// Create a new error from the distinct names that were found.
    pub fn new(found: Vec<String>) -> Self {
        Self { found }
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::MalformedRoster(err) => write!(f, "Roster error: {}", err),
            TranscriptError::EmptyTranscript => {
                write!(f, "Transcript error: no speaker lines could be parsed")
            }
            TranscriptError::UnknownCoach { choice, roster } => write!(
                f,
                "Coach error: '{}' is not one of the speakers [{}]",
                choice,
                roster.join(", ")
            ),
            TranscriptError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not find exactly two speakers in the file (found {}: [{}])",
            self.found.len(),
            self.found.join(", ")
        )
    }
}

impl Error for TranscriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranscriptError::MalformedRoster(err) => Some(err),
            TranscriptError::Io(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for RosterError {}

// Conversion implementations
impl From<io::Error> for TranscriptError {
    fn from(err: io::Error) -> Self {
        TranscriptError::Io(err)
    }
}

impl From<RosterError> for TranscriptError {
    fn from(err: RosterError) -> Self {
        TranscriptError::MalformedRoster(err)
    }
}

// Type alias for Result with TranscriptError
pub type TranscriptResult<T> = Result<T, TranscriptError>;
