use super::types::LineKind;
use regex::Regex;
use std::sync::OnceLock;

// Cue timing line, optionally followed by cue settings.
const CUE_TIMESTAMP_PATTERN: &str =
    r"^(\d{2}:\d{2}:\d{2}\.\d{3}) --> (\d{2}:\d{2}:\d{2}\.\d{3})";

// Name runs up to the first colon; text must be separated by whitespace or be absent.
const SPEAKER_PATTERN: &str = r"^([^:]+):(?:\s+(.*))?$";

fn cue_regex() -> &'static Regex {
    static CUE: OnceLock<Regex> = OnceLock::new();
    CUE.get_or_init(|| {
        Regex::new(CUE_TIMESTAMP_PATTERN).expect("Failed to compile cue timing regex")
    })
}

fn speaker_regex() -> &'static Regex {
    static SPEAKER: OnceLock<Regex> = OnceLock::new();
    SPEAKER.get_or_init(|| {
        Regex::new(SPEAKER_PATTERN).expect("Failed to compile speaker regex")
    })
}

/// Classify a raw caption line. Surrounding whitespace is ignored.
pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(caps) = cue_regex().captures(line) {
        if let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) {
            return LineKind::CueHeader {
                start: start.as_str(),
                end: end.as_str(),
            };
        }
    }

    if let Some(caps) = speaker_regex().captures(line) {
        if let Some(name) = caps.get(1) {
            let name = name.as_str().trim();
            if !name.is_empty() {
                return LineKind::SpeakerLine {
                    name,
                    text: caps.get(2).map_or("", |m| m.as_str()),
                };
            }
        }
    }

    LineKind::Continuation(line)
}
