mod builder;
mod legend;
mod types;

pub use legend::{CLOSING_PROMPTS, DOCUMENT_TITLE, LEGEND, TABLE_COLUMNS};
pub use types::*;

#[cfg(test)]
pub mod unit_test;
