//! Driving port for the cohort position pass.

use async_trait::async_trait;

use crate::domain::Error;

/// Command request for ranking one session cohort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortRankingRequest {
    /// Session label identifying the cohort, e.g. `2023-2024`.
    pub session: String,
}

/// Command response for ranking one session cohort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortRankingOutcome {
    /// Session label that was ranked.
    pub session: String,
    /// Student rows whose position was written.
    pub students_ranked: u64,
}

/// Driving port for assigning cohort positions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CohortRankingCommand: Send + Sync {
    /// Rank every student in the cohort and persist positions.
    async fn rank(&self, request: CohortRankingRequest) -> Result<CohortRankingOutcome, Error>;
}
