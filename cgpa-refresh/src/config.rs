//! Refresh job configuration loaded via OrthoConfig.
//!
//! Values come from `CGPA_REFRESH_*` environment variables or configuration
//! files; the binary layers explicit command-line flags on top through
//! [`RefreshSettings::with_overrides`].

use std::env;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::MetricsRefreshPlan;

/// Registration-number prefix selecting the students whose standings are
/// recomputed when none is configured.
pub const DEFAULT_REG_NO_PREFIX: &str = "2023831";
/// Session label of the cohort ranked when none is configured.
pub const DEFAULT_COHORT_SESSION: &str = "2023-2024";
/// Environment variable consulted when no database URL is configured.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Errors raised while turning loaded settings into runnable values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No database URL was configured anywhere.
    #[error("database URL missing: set --database-url, CGPA_REFRESH_DATABASE_URL, or DATABASE_URL")]
    MissingDatabaseUrl,
    /// A setting was present but blank.
    #[error("{field} must not be empty")]
    Blank {
        /// Name of the offending setting.
        field: &'static str,
    },
}

/// Configuration values controlling a refresh run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CGPA_REFRESH")]
pub struct RefreshSettings {
    /// PostgreSQL connection URL. Falls back to `DATABASE_URL` when unset.
    pub database_url: Option<String>,
    /// Registration-number prefix for the standing pass.
    pub reg_no_prefix: Option<String>,
    /// Session label for the ranking pass.
    pub cohort_session: Option<String>,
    /// Emit JSON log lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

/// Explicit values that take precedence over loaded settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// Database URL override.
    pub database_url: Option<String>,
    /// Registration-number prefix override.
    pub reg_no_prefix: Option<String>,
    /// Cohort session override.
    pub cohort_session: Option<String>,
    /// Force JSON logging on.
    pub json_logs: bool,
}

impl RefreshSettings {
    /// Return the configured registration prefix, falling back to the default.
    pub fn reg_no_prefix(&self) -> &str {
        self.reg_no_prefix.as_deref().unwrap_or(DEFAULT_REG_NO_PREFIX)
    }

    /// Return the configured cohort session, falling back to the default.
    pub fn cohort_session(&self) -> &str {
        self.cohort_session
            .as_deref()
            .unwrap_or(DEFAULT_COHORT_SESSION)
    }

    /// Apply explicit overrides, keeping loaded values where none is given.
    #[must_use]
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if overrides.database_url.is_some() {
            self.database_url = overrides.database_url;
        }
        if overrides.reg_no_prefix.is_some() {
            self.reg_no_prefix = overrides.reg_no_prefix;
        }
        if overrides.cohort_session.is_some() {
            self.cohort_session = overrides.cohort_session;
        }
        self.json_logs |= overrides.json_logs;
        self
    }

    /// Resolve the database URL, consulting `DATABASE_URL` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when no URL is available
    /// and [`SettingsError::Blank`] when the chosen value is blank.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        if let Some(value) = &self.database_url {
            return non_blank("database_url", value);
        }
        let from_env = env::var(DATABASE_URL_ENV).map_err(|_| SettingsError::MissingDatabaseUrl)?;
        non_blank(DATABASE_URL_ENV, &from_env)
    }

    /// Build the refresh plan from the configured selectors.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Blank`] when the prefix or session is blank.
    pub fn refresh_plan(&self) -> Result<MetricsRefreshPlan, SettingsError> {
        Ok(MetricsRefreshPlan {
            reg_no_prefix: non_blank("reg_no_prefix", self.reg_no_prefix())?,
            cohort_session: non_blank("cohort_session", self.cohort_session())?,
        })
    }
}

fn non_blank(field: &'static str, value: &str) -> Result<String, SettingsError> {
    if value.trim().is_empty() {
        return Err(SettingsError::Blank { field });
    }
    Ok(value.to_owned())
}
