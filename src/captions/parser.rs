use super::classify::classify_line;
use super::types::{LineKind, OpenUtterance, Utterance};
use log::{debug, info};

/// Accumulator threaded through the caption lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState {
    utterances: Vec<Utterance>,
    open: Option<OpenUtterance>,
    last_cue_start: String,
    next_entry: u32,
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseState {
    pub fn new() -> Self {
        Self {
            utterances: Vec::new(),
            open: None,
            last_cue_start: String::new(),
            next_entry: 1,
        }
    }

    /// Utterances flushed so far
    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    /// Accumulator currently open, if any
    pub fn open(&self) -> Option<&OpenUtterance> {
        self.open.as_ref()
    }

    /// Feed one raw line and return the updated state.
    pub fn step(mut self, raw: &str) -> Self {
        match classify_line(raw) {
            LineKind::CueHeader { start, .. } => {
                self.last_cue_start.clear();
                self.last_cue_start.push_str(start);
            }
            LineKind::SpeakerLine { name, text } => {
                if self.has_open_text() {
                    self.flush();
                }
                // An open accumulator without text is overwritten, not flushed.
                self.open = Some(OpenUtterance {
                    speaker: name.to_string(),
                    text: text.to_string(),
                    timestamp: self.last_cue_start.clone(),
                });
            }
            LineKind::Continuation(text) => match self.open.as_mut() {
                Some(open) => open.append(text),
                None => debug!("Ignoring stray line outside any utterance: {:?}", text),
            },
            LineKind::Blank => {
                if self.has_open_text() {
                    self.flush();
                }
            }
        }
        self
    }

    /// Flush whatever is still buffered and hand back the utterances, plus the
    /// accumulator left over when it never received any text.
    pub fn finish(mut self) -> (Vec<Utterance>, Option<OpenUtterance>) {
        if self.has_open_text() {
            self.flush();
        }
        if let Some(leftover) = &self.open {
            debug!(
                "Dropping empty utterance from {} at end of input",
                leftover.speaker
            );
        }
        (self.utterances, self.open)
    }

    fn has_open_text(&self) -> bool {
        self.open.as_ref().is_some_and(OpenUtterance::has_text)
    }

    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            let utterance = open.into_utterance(self.next_entry);
            debug!(
                "Entry {} [{}] {}: {} chars",
                utterance.entry_number,
                utterance.timestamp,
                utterance.speaker,
                utterance.text.len()
            );
            self.utterances.push(utterance);
            self.next_entry += 1;
        }
    }
}

/// Parse caption lines into utterances, also returning the unflushed accumulator
pub fn parse_with_leftover<I, S>(lines: I) -> (Vec<Utterance>, Option<OpenUtterance>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (utterances, leftover) = lines
        .into_iter()
        .fold(ParseState::new(), |state, line| state.step(line.as_ref()))
        .finish();
    info!("Parsed {} utterances", utterances.len());
    (utterances, leftover)
}

/// Parse caption lines into numbered speaker utterances
pub fn parse_utterances<I, S>(lines: I) -> Vec<Utterance>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with_leftover(lines).0
}
