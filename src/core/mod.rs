pub mod aggregate;
pub mod annotations;
pub mod filter;
pub mod logic;
pub mod transform;

pub use logic::{Core, Report};
pub use transform::{TimesheetTransformer, transform};
