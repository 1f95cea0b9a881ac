//! Fixed text blocks of the review document.

pub const DOCUMENT_TITLE: &str = "Coaching Session Transcript with Feedback";

/// Feedback shorthand used by mentors, in display order
pub const LEGEND: [(&str, &str); 7] = [
    (
        "SD",
        "Evidence of competency demonstration. Demonstrating the skill at one point does not mean the skill was demonstrated throughout the session.",
    ),
    (
        "LD",
        "Lack of evidence of demonstration or contra evidence of competency in the marked moment of the discussion.",
    ),
    ("AMDOS", "Ask Me During Our Session"),
    ("SWMDOS", "Share With Me During Our Session"),
    ("CEQ", "Close Ended Question"),
    ("ECNN", "Expansive conversation not needed."),
    ("CD", "Cognitive Distortion"),
];

pub const TABLE_COLUMNS: [&str; 2] = ["Coaching Transcript", "Mentor's Feedback"];

pub const CLOSING_PROMPTS: [&str; 2] = ["Strengths:", "Progression Ideas:"];
