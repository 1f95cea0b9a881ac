use super::types::{
    default_columns, default_legend, page_number_footer, DocumentOptions, ReviewDocument,
    ReviewRow,
};
use crate::turns::{CoachAssignment, Role, Turn};
use log::info;

impl ReviewDocument {
    /// Lay out the turns as review rows under the coach's header.
    pub fn build(coach: &CoachAssignment, turns: &[Turn], options: &DocumentOptions) -> Self {
        let rows: Vec<ReviewRow> = turns
            .iter()
            .map(|turn| ReviewRow::from_turn(turn, coach))
            .collect();

        let coach_rows = rows.iter().filter(|r| r.role == Role::Coach).count();
        info!(
            "Built review table: {} rows ({} coach, {} client)",
            rows.len(),
            coach_rows,
            rows.len() - coach_rows
        );

        Self {
            header: coach.coach_display_name().to_string(),
            title: options.title.clone(),
            legend: default_legend(),
            columns: default_columns(),
            repeat_header_row: true,
            rows,
            closing_prompts: options.closing_prompts.clone(),
            footer: page_number_footer(),
            page_setup: options.page_setup.clone(),
        }
    }
}
