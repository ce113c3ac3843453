//! CGPA and completed-credit refresh service.
//!
//! Loads every user matched by registration prefix, computes a standing per
//! user, and upserts the results in one repository batch. Users without a
//! qualifying enrollment are skipped and their Student rows, if any, are left
//! untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    StandingRefreshCommand, StandingRefreshOutcome, StandingRefreshRequest, StandingRepository,
    StandingRepositoryError, StandingUpdate, StudentEnrollments,
};
use crate::domain::{AcademicStanding, Error};

/// Domain service implementing the standing refresh command.
#[derive(Clone)]
pub struct StandingRefreshService<R> {
    repository: Arc<R>,
}

impl<R> StandingRefreshService<R> {
    /// Create a new refresh service over the given repository.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> StandingRefreshCommand for StandingRefreshService<R>
where
    R: StandingRepository,
{
    async fn refresh(
        &self,
        request: StandingRefreshRequest,
    ) -> Result<StandingRefreshOutcome, Error> {
        validate_request(&request)?;

        let students = self
            .repository
            .load_student_enrollments(&request.reg_no_prefix)
            .await
            .map_err(map_repository_error)?;
        let students_scanned = count(students.len(), "scanned student")?;

        let updates = students
            .into_iter()
            .filter_map(to_standing_update)
            .collect::<Vec<_>>();
        let standings_computed = count(updates.len(), "computed standing")?;

        let summary = self
            .repository
            .persist_standings(&updates)
            .await
            .map_err(map_repository_error)?;

        let outcome = StandingRefreshOutcome {
            students_scanned,
            standings_updated: summary.updated,
            standings_inserted: summary.inserted,
            students_skipped: students_scanned.saturating_sub(standings_computed),
        };
        info!(
            reg_no_prefix = %request.reg_no_prefix,
            scanned = outcome.students_scanned,
            updated = outcome.standings_updated,
            inserted = outcome.standings_inserted,
            skipped = outcome.students_skipped,
            "standing refresh committed"
        );
        Ok(outcome)
    }
}

fn validate_request(request: &StandingRefreshRequest) -> Result<(), Error> {
    if request.reg_no_prefix.trim().is_empty() {
        return Err(Error::invalid_request(
            "registration number prefix must not be empty",
        ));
    }
    Ok(())
}

fn to_standing_update(student: StudentEnrollments) -> Option<StandingUpdate> {
    let Some(standing) = AcademicStanding::from_enrollments(&student.enrollments) else {
        debug!(
            user_id = %student.user_id,
            reg_no = %student.reg_no,
            "no qualifying enrollments; skipping student"
        );
        return None;
    };

    Some(StandingUpdate {
        user_id: student.user_id,
        standing,
    })
}

fn count(len: usize, subject: &str) -> Result<u64, Error> {
    u64::try_from(len).map_err(|_| Error::internal(format!("{subject} count exceeds supported range")))
}

fn map_repository_error(error: StandingRepositoryError) -> Error {
    match error {
        StandingRepositoryError::Connection { message }
        | StandingRepositoryError::Query { message } => {
            Error::service_unavailable(format!("failed to refresh student standings: {message}"))
        }
    }
}

#[cfg(test)]
#[path = "standing_refresh_tests.rs"]
mod tests;
