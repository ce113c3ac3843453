//! Driving port for the CGPA and completed-credit pass.

use async_trait::async_trait;

use crate::domain::Error;

/// Command request for one standing refresh pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRefreshRequest {
    /// Registration-number prefix selecting the students to refresh.
    pub reg_no_prefix: String,
}

/// Command response for one standing refresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandingRefreshOutcome {
    /// Users matched by the registration prefix.
    pub students_scanned: u64,
    /// Existing Student rows updated.
    pub standings_updated: u64,
    /// Student rows created.
    pub standings_inserted: u64,
    /// Users left untouched because no enrollment qualified.
    pub students_skipped: u64,
}

/// Driving port for recomputing CGPA and completed credits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StandingRefreshCommand: Send + Sync {
    /// Recompute and persist standings for every matching user.
    async fn refresh(
        &self,
        request: StandingRefreshRequest,
    ) -> Result<StandingRefreshOutcome, Error>;
}
