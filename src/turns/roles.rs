use crate::captions::SpeakerRoster;
use crate::errors::{TranscriptError, TranscriptResult};
use log::warn;
use serde::Serialize;
use std::fmt;

/// Role of a speaker in a coaching session
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Coach,
    Client,
}

impl Role {
    pub fn name(&self) -> &str {
        match self {
            Role::Coach => "Coach",
            Role::Client => "Client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Roster with one speaker designated as the coach
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CoachAssignment {
    coach_display_name: String,
    coach_key: String,
    client_name: String,
}

impl SpeakerRoster {
    /// Designate the coach. An exact match wins; otherwise case is ignored.
    pub fn assign_coach(&self, choice: &str) -> TranscriptResult<CoachAssignment> {
        let trimmed = choice.trim();
        let wanted = trimmed.to_lowercase();
        let [first, second] = self.names();

        if first.to_lowercase() == second.to_lowercase() {
            warn!(
                "Speakers '{}' and '{}' differ only by case; labels follow exact spelling",
                first, second
            );
        }

        let (coach, client) = if first == trimmed {
            (first, second)
        } else if second == trimmed {
            (second, first)
        } else if first.to_lowercase() == wanted {
            (first, second)
        } else if second.to_lowercase() == wanted {
            (second, first)
        } else {
            return Err(TranscriptError::UnknownCoach {
                choice: choice.to_string(),
                roster: self.names().to_vec(),
            });
        };

        Ok(CoachAssignment {
            coach_display_name: coach.clone(),
            coach_key: coach.to_lowercase(),
            client_name: client.clone(),
        })
    }
}

impl CoachAssignment {
    /// Coach name as written in the transcript
    pub fn coach_display_name(&self) -> &str {
        &self.coach_display_name
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn role_of(&self, speaker: &str) -> Role {
        let speaker = speaker.trim();
        if speaker == self.coach_display_name {
            Role::Coach
        } else if speaker == self.client_name {
            Role::Client
        } else if speaker.to_lowercase() == self.coach_key {
            Role::Coach
        } else {
            Role::Client
        }
    }
}
