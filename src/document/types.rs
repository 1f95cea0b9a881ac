use super::legend::{CLOSING_PROMPTS, DOCUMENT_TITLE, LEGEND, TABLE_COLUMNS};
use crate::turns::{CoachAssignment, EntryRange, Role, Turn};
use serde::Serialize;

/// Everything an external renderer needs to lay out the review document
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewDocument {
    /// Page header, the coach's name as written in the transcript
    pub header: String,
    pub title: String,
    pub legend: Vec<LegendItem>,
    pub columns: [String; 2],
    /// The column header row is repeated at the top of every page
    pub repeat_header_row: bool,
    pub rows: Vec<ReviewRow>,
    pub closing_prompts: Vec<String>,
    pub footer: Vec<FooterPart>,
    pub page_setup: PageSetup,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    pub label: String,
    pub description: String,
}

/// One table row: a speaker turn paired with an empty feedback cell
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub range: EntryRange,
    pub timestamp: String,
    pub role: Role,
    pub speaker: String,
    pub text: String,
    pub feedback: String,
}

impl ReviewRow {
    pub fn from_turn(turn: &Turn, coach: &CoachAssignment) -> Self {
        Self {
            range: turn.range(),
            timestamp: turn.start_timestamp.clone(),
            role: coach.role_of(&turn.speaker),
            speaker: turn.speaker.clone(),
            text: turn.text.clone(),
            feedback: String::new(),
        }
    }

    /// Left cell as plain text: `3-5 [00:01:02.000] Coach Dana text`
    pub fn transcript_cell(&self) -> String {
        format!(
            "{} [{}] {} {} {}",
            self.range, self.timestamp, self.role, self.speaker, self.text
        )
    }
}

/// Footer pieces; fields are resolved by the renderer at layout time
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum FooterPart {
    Text(String),
    Field(PageField),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageField {
    Page,
    NumPages,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Margins in inches, font sizes in points
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PageSetup {
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub header_color: Rgb,
    pub header_size: f32,
    pub timestamp_color: Rgb,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            top_margin: 0.75,
            bottom_margin: 0.5,
            left_margin: 0.5,
            right_margin: 0.5,
            header_color: Rgb(64, 64, 64),
            header_size: 14.0,
            timestamp_color: Rgb(105, 105, 105),
        }
    }
}

/// Caller-tunable parts of the document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    pub title: String,
    pub closing_prompts: Vec<String>,
    pub page_setup: PageSetup,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: DOCUMENT_TITLE.to_string(),
            closing_prompts: CLOSING_PROMPTS.iter().map(|p| p.to_string()).collect(),
            page_setup: PageSetup::default(),
        }
    }
}

pub(crate) fn default_legend() -> Vec<LegendItem> {
    LEGEND
        .iter()
        .map(|(label, description)| LegendItem {
            label: label.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub(crate) fn default_columns() -> [String; 2] {
    TABLE_COLUMNS.map(String::from)
}

pub(crate) fn page_number_footer() -> Vec<FooterPart> {
    vec![
        FooterPart::Text("Page ".to_string()),
        FooterPart::Field(PageField::Page),
        FooterPart::Text(" of ".to_string()),
        FooterPart::Field(PageField::NumPages),
    ]
}
