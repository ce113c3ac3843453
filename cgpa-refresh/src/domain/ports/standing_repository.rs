//! Driven port for reading graded enrollments and writing student standings.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{AcademicStanding, GradedEnrollment};

/// A user matched by registration prefix, with every graded enrollment.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentEnrollments {
    /// `User` row identifier.
    pub user_id: String,
    /// Registration number the prefix matched.
    pub reg_no: String,
    /// Enrollments whose grade column is non-null, joined to course credit.
    pub enrollments: Vec<GradedEnrollment>,
}

/// Standing to upsert for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingUpdate {
    /// `User` row identifier; the Student upsert key.
    pub user_id: String,
    /// Values to store.
    pub standing: AcademicStanding,
}

/// Row counts reported by a standing write batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandingWriteSummary {
    /// Existing Student rows updated in place.
    pub updated: u64,
    /// Student rows created because none existed for the user.
    pub inserted: u64,
}

define_port_error! {
    /// Errors raised while reading enrollments or writing standings.
    pub enum StandingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "standing repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "standing repository query failed: {message}",
    }
}

/// Port for the CGPA and completed-credit pass.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StandingRepository: Send + Sync {
    /// Load users whose registration number starts with `reg_no_prefix`.
    ///
    /// The prefix is matched literally. Users without graded enrollments are
    /// still returned, with an empty enrollment list.
    async fn load_student_enrollments(
        &self,
        reg_no_prefix: &str,
    ) -> Result<Vec<StudentEnrollments>, StandingRepositoryError>;

    /// Upsert every standing in one transaction keyed by user.
    ///
    /// Implementations must commit all rows or none.
    async fn persist_standings(
        &self,
        updates: &[StandingUpdate],
    ) -> Result<StandingWriteSummary, StandingRepositoryError>;
}
