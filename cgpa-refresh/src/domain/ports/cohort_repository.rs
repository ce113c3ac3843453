//! Driven port for reading a session cohort and writing positions.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{CohortStanding, PositionAssignment};

define_port_error! {
    /// Errors raised while reading cohorts or writing positions.
    pub enum CohortRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "cohort repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "cohort repository query failed: {message}",
    }
}

/// Port for the cohort position pass.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CohortRepository: Send + Sync {
    /// Load Student rows whose user belongs to `session`, ordered by
    /// `(cgpa DESC, credit_completed DESC)`.
    async fn load_cohort(&self, session: &str)
    -> Result<Vec<CohortStanding>, CohortRepositoryError>;

    /// Write every position in one transaction, one statement per row.
    ///
    /// Returns the number of rows updated. An empty batch still opens and
    /// commits a transaction.
    async fn persist_positions(
        &self,
        assignments: &[PositionAssignment],
    ) -> Result<u64, CohortRepositoryError>;
}
