//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cohort_ranking_command;
mod cohort_repository;
mod standing_refresh_command;
mod standing_repository;

#[cfg(test)]
pub use cohort_ranking_command::MockCohortRankingCommand;
pub use cohort_ranking_command::{
    CohortRankingCommand, CohortRankingOutcome, CohortRankingRequest,
};
#[cfg(test)]
pub use cohort_repository::MockCohortRepository;
pub use cohort_repository::{CohortRepository, CohortRepositoryError};
#[cfg(test)]
pub use standing_refresh_command::MockStandingRefreshCommand;
pub use standing_refresh_command::{
    StandingRefreshCommand, StandingRefreshOutcome, StandingRefreshRequest,
};
#[cfg(test)]
pub use standing_repository::MockStandingRepository;
pub use standing_repository::{
    StandingRepository, StandingRepositoryError, StandingUpdate, StandingWriteSummary,
    StudentEnrollments,
};
