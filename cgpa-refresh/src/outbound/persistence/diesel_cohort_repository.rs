//! PostgreSQL-backed adapter for the cohort position pass.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::info;

use crate::domain::ports::{CohortRepository, CohortRepositoryError};
use crate::domain::{CohortStanding, PositionAssignment};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::CohortRow;
use super::pool::{DbPool, PoolError};
use super::schema::{students, users};

/// Diesel-backed implementation of the cohort repository port.
#[derive(Clone)]
pub struct DieselCohortRepository {
    pool: DbPool,
}

impl DieselCohortRepository {
    /// Create a new repository over the given connection handle.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CohortRepositoryError {
    map_pool_error(error, CohortRepositoryError::connection)
}

fn diesel_error(operation: &str) -> impl FnOnce(diesel::result::Error) -> CohortRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            CohortRepositoryError::query,
            CohortRepositoryError::connection,
        )
    }
}

impl From<CohortRow> for CohortStanding {
    fn from(row: CohortRow) -> Self {
        Self {
            student_id: row.id,
            cgpa: row.cgpa,
            credit_completed: row.credit_completed,
        }
    }
}

fn to_position_rows(
    assignments: &[PositionAssignment],
) -> Result<Vec<(&str, i32)>, CohortRepositoryError> {
    assignments
        .iter()
        .map(|assignment| {
            i32::try_from(assignment.position)
                .map(|position| (assignment.student_id.as_str(), position))
                .map_err(|_| {
                    CohortRepositoryError::query(format!(
                        "position {} for student {} exceeds supported i32 range",
                        assignment.position, assignment.student_id
                    ))
                })
        })
        .collect()
}

#[async_trait::async_trait]
impl CohortRepository for DieselCohortRepository {
    async fn load_cohort(
        &self,
        session: &str,
    ) -> Result<Vec<CohortStanding>, CohortRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = students::table
            .inner_join(users::table)
            .filter(users::session.eq(session))
            .order((students::cgpa.desc(), students::credit_completed.desc()))
            .select(CohortRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error("load session cohort"))?;
        Ok(rows.into_iter().map(CohortStanding::from).collect())
    }

    async fn persist_positions(
        &self,
        assignments: &[PositionAssignment],
    ) -> Result<u64, CohortRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let position_rows = to_position_rows(assignments)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let written = conn
            .transaction(|conn| {
                async move {
                    let mut written = 0_usize;
                    for (student_id, position) in &position_rows {
                        written += diesel::update(students::table.find(*student_id))
                            .set(students::position.eq(*position))
                            .execute(conn)
                            .await?;
                        info!(student_id, position, "updated student position");
                    }
                    Ok::<_, diesel::result::Error>(written)
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error("persist cohort positions"))?;

        u64::try_from(written).map_err(|_| {
            CohortRepositoryError::query("updated position count exceeds supported range")
        })
    }
}
