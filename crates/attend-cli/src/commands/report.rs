//! Attendance report commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use attend_core::error::AppError;
use attend_core::types::UserId;
use attend_entity::attendance::Defaulter;

use crate::output::{self, OutputFormat};

/// Arguments for report commands
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report subcommand
    #[command(subcommand)]
    pub command: ReportCommand,
}

/// Report subcommands
#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Students below the attendance threshold for a teacher's lectures
    Defaulters {
        /// Teacher id (UUID)
        teacher_id: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct DefaulterRow {
    student_id: String,
    name: String,
    roll_number: String,
    enrollment_number: String,
    attended: String,
    percentage_present: String,
}

impl From<&Defaulter> for DefaulterRow {
    fn from(d: &Defaulter) -> Self {
        Self {
            student_id: d.student_id.to_string(),
            name: d.name.clone(),
            roll_number: d.roll_number.clone().unwrap_or_default(),
            enrollment_number: d.enrollment_number.clone().unwrap_or_default(),
            attended: format!("{}/{}", d.attended, d.total_lectures),
            percentage_present: format!("{:.2}%", d.percentage_present),
        }
    }
}

/// Execute report commands
pub async fn execute(
    args: &ReportArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        ReportCommand::Defaulters { teacher_id } => {
            let teacher_id: UserId = teacher_id.parse().map_err(|_| {
                AppError::validation(format!("Invalid teacher id: '{teacher_id}'"))
            })?;

            let (db, state) = super::connect(config).await?;
            let rows = state.report_service.defaulters(teacher_id).await?;
            db.close().await;

            let table: Vec<DefaulterRow> = rows.iter().map(DefaulterRow::from).collect();
            output::print_list(&table, format);
        }
    }

    Ok(())
}
