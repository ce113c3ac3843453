//! Two-pass academic metrics refresh.
//!
//! Standings are recomputed and committed before cohort positions are read,
//! so ranking always sees the CGPA values written by the first pass.

use std::sync::Arc;

use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{
    CohortRankingCommand, CohortRankingOutcome, CohortRankingRequest, StandingRefreshCommand,
    StandingRefreshOutcome, StandingRefreshRequest,
};

/// Selection parameters for one refresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsRefreshPlan {
    /// Registration-number prefix for the standing pass.
    pub reg_no_prefix: String,
    /// Session label for the ranking pass.
    pub cohort_session: String,
}

/// Combined outcome of both passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsRefreshReport {
    /// Standing pass outcome.
    pub standings: StandingRefreshOutcome,
    /// Ranking pass outcome.
    pub ranking: CohortRankingOutcome,
}

/// Runs the standing pass followed by the ranking pass.
pub struct MetricsRefreshJob<S, C> {
    standings: Arc<S>,
    ranking: Arc<C>,
}

impl<S, C> MetricsRefreshJob<S, C>
where
    S: StandingRefreshCommand,
    C: CohortRankingCommand,
{
    /// Create a job from the two pass commands.
    pub const fn new(standings: Arc<S>, ranking: Arc<C>) -> Self {
        Self { standings, ranking }
    }

    /// Execute both passes in order.
    ///
    /// # Errors
    ///
    /// Returns the first pass failure. The ranking pass does not run when the
    /// standing pass fails.
    pub async fn run(&self, plan: &MetricsRefreshPlan) -> Result<MetricsRefreshReport, Error> {
        info!(reg_no_prefix = %plan.reg_no_prefix, "refreshing student standings");
        let standings = self
            .standings
            .refresh(StandingRefreshRequest {
                reg_no_prefix: plan.reg_no_prefix.clone(),
            })
            .await?;

        info!(session = %plan.cohort_session, "ranking cohort");
        let ranking = self
            .ranking
            .rank(CohortRankingRequest {
                session: plan.cohort_session.clone(),
            })
            .await?;

        Ok(MetricsRefreshReport { standings, ranking })
    }
}
