use super::classify::classify_line;
use super::types::{LineKind, RosterPolicy};
use crate::errors::RosterError;
use log::{info, warn};
use serde::Serialize;

/// The two distinct speakers of a transcript, sorted by name
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SpeakerRoster {
    names: [String; 2],
}

impl SpeakerRoster {
    /// Build a roster from distinct names; anything but exactly two is rejected.
    pub fn from_names(names: Vec<String>) -> Result<Self, RosterError> {
        match <[String; 2]>::try_from(names) {
            Ok(mut names) => {
                names.sort();
                Ok(Self { names })
            }
            Err(found) => Err(RosterError::new(found)),
        }
    }

    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// Collect distinct speaker names from the caption lines.
pub fn scan_speakers<I, S>(lines: I, policy: RosterPolicy) -> Result<SpeakerRoster, RosterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found: Vec<String> = Vec::new();

    for line in lines {
        if let LineKind::SpeakerLine { name, .. } = classify_line(line.as_ref()) {
            if !found.iter().any(|f| f == name) {
                found.push(name.to_string());
            }
            if policy == RosterPolicy::FirstTwo && found.len() == 2 {
                warn!("Roster scan stopped at the second speaker; later speakers are not checked");
                break;
            }
        }
    }

    info!("Speaker scan found {} distinct names", found.len());
    SpeakerRoster::from_names(found)
}
