use super::types::Turn;
use crate::captions::Utterance;
use crate::errors::{TranscriptError, TranscriptResult};
use log::info;

/// Merge runs of same-speaker utterances into turns.
///
/// Speaker equality is the only criterion; a blank line between two utterances
/// from the same speaker does not split the turn.
pub fn aggregate_turns(utterances: &[Utterance]) -> TranscriptResult<Vec<Turn>> {
    let (first, rest) = utterances
        .split_first()
        .ok_or(TranscriptError::EmptyTranscript)?;

    let mut turns = Vec::new();
    let mut current = Turn::open(first);

    for utterance in rest {
        if utterance.speaker == current.speaker {
            current.extend(utterance);
        } else {
            turns.push(std::mem::replace(&mut current, Turn::open(utterance)));
        }
    }
    turns.push(current);

    info!(
        "Grouped {} utterances into {} turns",
        utterances.len(),
        turns.len()
    );
    Ok(turns)
}
