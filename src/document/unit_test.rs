use crate::captions::{parse_utterances, SpeakerRoster};
use crate::document::{DocumentOptions, FooterPart, PageField, ReviewDocument, LEGEND};
use crate::turns::{aggregate_turns, Role};

#[cfg(test)]
mod test_helpers {
    pub const SESSION: [&str; 9] = [
        "00:00:00.500 --> 00:00:02.000",
        "Dana: What would you like to focus on today?",
        "",
        "00:00:02.100 --> 00:00:05.000",
        "Sam: My presentation next week.",
        "",
        "00:00:05.100 --> 00:00:08.000",
        "Sam: I keep putting it off.",
        "",
    ];
}

fn build(coach: &str) -> ReviewDocument {
    let utterances = parse_utterances(test_helpers::SESSION);
    let turns = aggregate_turns(&utterances).unwrap();
    let roster = SpeakerRoster::from_names(vec!["Sam".to_string(), "Dana".to_string()]).unwrap();
    let assignment = roster.assign_coach(coach).unwrap();
    ReviewDocument::build(&assignment, &turns, &DocumentOptions::default())
}

#[test]
fn test_rows_follow_turns() {
    let doc = build("dana");
    assert_eq!(doc.header, "Dana");
    assert_eq!(doc.rows.len(), 2);

    let first = &doc.rows[0];
    assert_eq!(first.role, Role::Coach);
    assert_eq!(
        first.transcript_cell(),
        "1 [00:00:00.500] Coach Dana What would you like to focus on today?"
    );

    let second = &doc.rows[1];
    assert_eq!(second.role, Role::Client);
    assert_eq!(
        second.transcript_cell(),
        "2-3 [00:00:02.100] Client Sam My presentation next week. I keep putting it off."
    );
    assert!(doc.rows.iter().all(|r| r.feedback.is_empty()));
}

#[test]
fn test_fixed_blocks() {
    let doc = build("Sam");
    assert_eq!(doc.header, "Sam");
    assert_eq!(doc.title, "Coaching Session Transcript with Feedback");
    assert_eq!(doc.legend.len(), LEGEND.len());
    assert_eq!(doc.legend[0].label, "SD");
    assert_eq!(doc.legend[6].description, "Cognitive Distortion");
    assert_eq!(doc.columns, ["Coaching Transcript".to_string(), "Mentor's Feedback".to_string()]);
    assert!(doc.repeat_header_row);
    assert_eq!(doc.closing_prompts, vec!["Strengths:", "Progression Ideas:"]);
    assert_eq!(
        doc.footer,
        vec![
            FooterPart::Text("Page ".to_string()),
            FooterPart::Field(PageField::Page),
            FooterPart::Text(" of ".to_string()),
            FooterPart::Field(PageField::NumPages),
        ]
    );
    assert_eq!(doc.page_setup.top_margin, 0.75);
}

#[test]
fn test_custom_title() {
    let utterances = parse_utterances(["Dana: hi", "Sam: hello"]);
    let turns = aggregate_turns(&utterances).unwrap();
    let roster = SpeakerRoster::from_names(vec!["Sam".to_string(), "Dana".to_string()]).unwrap();
    let options = DocumentOptions {
        title: "Mentor Review".to_string(),
        closing_prompts: vec!["Notes:".to_string()],
        ..DocumentOptions::default()
    };
    let doc = ReviewDocument::build(&roster.assign_coach("Dana").unwrap(), &turns, &options);
    assert_eq!(doc.title, "Mentor Review");
    assert_eq!(doc.closing_prompts, vec!["Notes:"]);
    // no cue headers, so no timestamps
    assert_eq!(doc.rows[0].transcript_cell(), "1 [] Coach Dana hi");
}

#[test]
fn test_serializes_to_json() {
    let doc = build("Dana");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["rows"][1]["range"]["start"], 2);
    assert_eq!(json["rows"][1]["range"]["end"], 3);
    assert_eq!(json["rows"][0]["role"], "Coach");
    assert_eq!(json["footer"][1]["Field"], "Page");
}
