//! Domain primitives, services, and ports for the metrics refresh.
//!
//! Purpose: hold the CGPA, completed-credit, and ranking rules independently
//! of storage. Services talk to persistence only through the traits in
//! [`ports`].
//!
//! Public surface:
//! - `AcademicStanding` / `GradedEnrollment`: standing computation.
//! - `assign_positions`: tie-aware cohort ranking.
//! - `StandingRefreshService`, `CohortRankingService`: the two passes.
//! - `MetricsRefreshJob`: runs both passes in order.

pub mod error;
pub mod ports;

mod cohort_ranking;
mod metrics_refresh;
mod ranking;
mod standing;
mod standing_refresh;

pub use self::cohort_ranking::CohortRankingService;
pub use self::error::{Error, ErrorCode};
pub use self::metrics_refresh::{MetricsRefreshJob, MetricsRefreshPlan, MetricsRefreshReport};
pub use self::ranking::{CohortStanding, PositionAssignment, assign_positions};
pub use self::standing::{AcademicStanding, GradedEnrollment};
pub use self::standing_refresh::StandingRefreshService;
