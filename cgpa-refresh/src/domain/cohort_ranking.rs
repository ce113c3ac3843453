//! Cohort position refresh service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    CohortRankingCommand, CohortRankingOutcome, CohortRankingRequest, CohortRepository,
    CohortRepositoryError,
};
use crate::domain::{Error, assign_positions};

/// Domain service implementing the cohort ranking command.
#[derive(Clone)]
pub struct CohortRankingService<R> {
    repository: Arc<R>,
}

impl<R> CohortRankingService<R> {
    /// Create a new ranking service over the given repository.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CohortRankingCommand for CohortRankingService<R>
where
    R: CohortRepository,
{
    async fn rank(&self, request: CohortRankingRequest) -> Result<CohortRankingOutcome, Error> {
        if request.session.trim().is_empty() {
            return Err(Error::invalid_request("cohort session must not be empty"));
        }

        let cohort = self
            .repository
            .load_cohort(&request.session)
            .await
            .map_err(map_repository_error)?;
        let assignments = assign_positions(&cohort);
        let students_ranked = self
            .repository
            .persist_positions(&assignments)
            .await
            .map_err(map_repository_error)?;

        info!(
            session = %request.session,
            ranked = students_ranked,
            "cohort positions committed"
        );
        Ok(CohortRankingOutcome {
            session: request.session,
            students_ranked,
        })
    }
}

fn map_repository_error(error: CohortRepositoryError) -> Error {
    match error {
        CohortRepositoryError::Connection { message }
        | CohortRepositoryError::Query { message } => {
            Error::service_unavailable(format!("failed to rank cohort: {message}"))
        }
    }
}
