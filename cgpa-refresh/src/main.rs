//! Recompute student standings and cohort positions in one batch run.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use cgpa_refresh::config::{RefreshSettings, SettingsOverrides};
use cgpa_refresh::domain::{
    CohortRankingService, MetricsRefreshJob, MetricsRefreshReport, StandingRefreshService,
};
use cgpa_refresh::outbound::persistence::{
    DbPool, DieselCohortRepository, DieselStandingRepository, PoolConfig,
};
use clap::Parser;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const PROGRAM_NAME: &str = "cgpa-refresh";

/// `cgpa-refresh` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "cgpa-refresh",
    about = "Recompute student CGPA, completed credits, and cohort positions",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Registration-number prefix selecting students for the standing pass.
    #[arg(long = "reg-no-prefix", value_name = "prefix")]
    reg_no_prefix: Option<String>,
    /// Session label of the cohort to rank.
    #[arg(long = "cohort-session", value_name = "session")]
    cohort_session: Option<String>,
    /// Emit JSON log lines.
    #[arg(long = "json-logs")]
    json_logs: bool,
}

impl From<CliArgs> for SettingsOverrides {
    fn from(args: CliArgs) -> Self {
        Self {
            database_url: args.database_url,
            reg_no_prefix: args.reg_no_prefix,
            cohort_session: args.cohort_session,
            json_logs: args.json_logs,
        }
    }
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = RefreshSettings::load_from_iter([OsString::from(PROGRAM_NAME)])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?
        .with_overrides(args.into());
    init_tracing(settings.json_logs);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(settings))
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = if json_logs {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn async_main(settings: RefreshSettings) -> io::Result<()> {
    let invalid_input = |error: cgpa_refresh::config::SettingsError| {
        io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
    };
    let database_url = settings.database_url().map_err(invalid_input)?;
    let plan = settings.refresh_plan().map_err(invalid_input)?;

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let standings = StandingRefreshService::new(Arc::new(DieselStandingRepository::new(
        pool.clone(),
    )));
    let ranking = CohortRankingService::new(Arc::new(DieselCohortRepository::new(pool)));
    let job = MetricsRefreshJob::new(Arc::new(standings), Arc::new(ranking));

    let report = job
        .run(&plan)
        .await
        .map_err(|error| io::Error::other(format!("metrics refresh failed: {error}")))?;
    info!("metrics refresh complete");

    for line in summary_lines(&report) {
        println!("{line}");
    }
    Ok(())
}

fn summary_lines(report: &MetricsRefreshReport) -> Vec<String> {
    let standings = &report.standings;
    vec![
        format!("students_scanned={}", standings.students_scanned),
        format!("standings_updated={}", standings.standings_updated),
        format!("standings_inserted={}", standings.standings_inserted),
        format!("students_skipped={}", standings.students_skipped),
        format!("cohort_session={}", report.ranking.session),
        format!("students_ranked={}", report.ranking.students_ranked),
    ]
}
