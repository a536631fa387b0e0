//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and environment variables. Each sub-module represents a
//! logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod frontend;
pub mod logging;
pub mod reports;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::frontend::FrontendConfig;
pub use self::logging::LoggingConfig;
pub use self::reports::ReportConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Frontend link settings (QR attendance URLs).
    #[serde(default)]
    pub frontend: FrontendConfig,
    /// Reporting settings.
    #[serde(default)]
    pub reports: ReportConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first: `config/default.toml`,
    /// `config/{env}.toml`, `ATTEND__*` variables, then the deployment
    /// variables `DATABASE_URL`, `JWT_SECRET`, `FRONTEND_URL` and `PORT`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("ATTEND")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder, |key| std::env::var(key).ok())
    }

    /// Load configuration from an explicit TOML file path (CLI usage).
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("ATTEND")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder, |key| std::env::var(key).ok())
    }

    /// Parse configuration from a TOML string, applying deployment
    /// variables resolved through `lookup`.
    pub fn from_toml_str(
        toml: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let builder = config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(builder, lookup)
    }

    fn build(
        builder: ConfigBuilder<DefaultState>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let builder = apply_deployment_env(builder, lookup)?;

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Reject configurations the server cannot run with.
    ///
    /// A missing signing secret or database URL is fatal at startup rather
    /// than a per-request failure.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "JWT signing secret is not set (auth.jwt_secret / JWT_SECRET)",
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration(
                "Database connection string is not set (database.url / DATABASE_URL)",
            ));
        }
        if self.auth.token_ttl_minutes == 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_minutes must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Map the plain deployment variables onto their configuration keys.
fn apply_deployment_env(
    builder: ConfigBuilder<DefaultState>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ConfigBuilder<DefaultState>, AppError> {
    let mut builder = builder
        .set_override_option("database.url", lookup("DATABASE_URL"))?
        .set_override_option("auth.jwt_secret", lookup("JWT_SECRET"))?;

    if let Some(port) = lookup("PORT") {
        let port: i64 = port
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("PORT is not a number: '{port}'")))?;
        builder = builder.set_override("server.port", port)?;
    }

    if let Some(frontend) = lookup("FRONTEND_URL") {
        let origins: Vec<String> = frontend
            .split(',')
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(first) = origins.first() {
            builder = builder
                .set_override("frontend.base_url", first.clone())?
                .set_override("server.cors.allowed_origins", origins)?;
        }
    }

    Ok(builder)
}
