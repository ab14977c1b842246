use crate::core::filter::FilterCriteria;
use crate::errors::AppResult;
use crate::models::project::resolve_project_arg;
use crate::models::{Department, Meeting};
use crate::utils::date::{parse_date, parse_range};
use clap::Args;

/// Filter options shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, help = "Case-insensitive substring of the task (Aufgabe)")]
    pub task: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Keep rows starting on or after this day")]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Keep rows ending on or before this day")]
    pub to: Option<String>,

    #[arg(
        long,
        short = 'p',
        value_name = "RANGE",
        conflicts_with_all = ["from", "to"],
        help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)"
    )]
    pub period: Option<String>,

    #[arg(long, help = "Project name or code (PLAN, AT, AV, HT, HA, MEET)")]
    pub project: Option<String>,

    #[arg(long, value_enum)]
    pub meeting: Option<Meeting>,

    #[arg(long, value_enum)]
    pub department: Option<Department>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> AppResult<FilterCriteria> {
        let (date_from, date_to) = match &self.period {
            Some(p) => {
                let (start, end) = parse_range(p)?;
                (Some(start), Some(end))
            }
            None => (
                self.from.as_deref().map(parse_date).transpose()?,
                self.to.as_deref().map(parse_date).transpose()?,
            ),
        };

        Ok(FilterCriteria {
            task: self.task.clone(),
            date_from,
            date_to,
            project: self.project.as_deref().map(resolve_project_arg),
            meeting: self.meeting,
            department: self.department,
        })
    }
}
