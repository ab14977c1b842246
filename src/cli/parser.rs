use crate::cli::filters::FilterArgs;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to split and summarize timesheet CSV exports
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Split timesheet CSV exports by department and summarize hours by department, project and meeting status",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print total hours and the grouped sums for a timesheet export
    Report {
        /// Timesheet CSV export
        #[arg(value_name = "CSV")]
        input: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "rows", help = "Also print the filtered rows")]
        rows: bool,
    },

    /// Export the split and filtered rows
    Export {
        /// Timesheet CSV export
        #[arg(value_name = "CSV")]
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },
}
