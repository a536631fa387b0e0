//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use attend_core::error::{AppError, ErrorKind};
use attend_core::types::UserId;
use attend_database::UserStore;
use attend_database::repositories::UserRepository;
use attend_entity::user::{User, UserRole};
use attend_service::RegisterUser;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a teacher or student (password is prompted)
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        /// Login email
        #[arg(long)]
        email: String,
        /// teacher or student
        #[arg(long)]
        role: String,
        /// Explicit user id (UUID); generated when omitted
        #[arg(long)]
        id: Option<String>,
        /// Student roll number
        #[arg(long)]
        roll_number: Option<String>,
        /// Student enrollment number
        #[arg(long)]
        enrollment_number: Option<String>,
    },
    /// List users
    List {
        /// Filter by role
        #[arg(short, long)]
        role: Option<String>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    roll_number: String,
    enrollment_number: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role.to_string(),
            roll_number: u.roll_number.clone().unwrap_or_default(),
            enrollment_number: u.enrollment_number.clone().unwrap_or_default(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        UserCommand::Register {
            name,
            email,
            role,
            id,
            roll_number,
            enrollment_number,
        } => {
            let role: UserRole = role.parse()?;
            let id = id
                .as_deref()
                .map(|raw| {
                    raw.parse::<UserId>()
                        .map_err(|_| AppError::validation(format!("Invalid user id: '{raw}'")))
                })
                .transpose()?;
            let password = prompt_password()?;

            let (db, state) = super::connect(config).await?;
            let user_id = state
                .auth_service
                .register(RegisterUser {
                    id,
                    name: name.clone(),
                    email: email.clone(),
                    password,
                    role,
                    roll_number: roll_number.clone(),
                    enrollment_number: enrollment_number.clone(),
                })
                .await?;
            db.close().await;

            output::print_success(&format!("Registered {role} '{email}' with id {user_id}"));
        }
        UserCommand::List { role } => {
            let role = role.as_deref().map(str::parse::<UserRole>).transpose()?;
            let db = attend_database::DatabasePool::connect(&config.database).await?;
            let users = UserRepository::new(db.pool().clone()).list(role).await?;
            db.close().await;

            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}

fn prompt_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Input error", e))
}
