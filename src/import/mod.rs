//! Reading timesheet exports into [`RawRow`](crate::models::RawRow)s.

mod detect;
mod reader;

pub use detect::{Delimiter, decode_content, detect_delimiter};
pub use reader::{read_timesheet, read_timesheet_bytes};
