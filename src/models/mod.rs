//! Timesheet row models: the raw CSV row and the enriched, split row.

pub mod department;
pub mod enriched_row;
pub mod meeting;
pub mod project;
pub mod raw_row;

pub use department::Department;
pub use enriched_row::EnrichedRow;
pub use meeting::Meeting;
pub use raw_row::RawRow;
