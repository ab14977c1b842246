pub mod commands;
pub mod filters;
pub mod parser;
