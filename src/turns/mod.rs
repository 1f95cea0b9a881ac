mod aggregator;
mod roles;
mod types;

pub use aggregator::aggregate_turns;
pub use roles::{CoachAssignment, Role};
pub use types::{EntryRange, Turn};
