//! PostgreSQL-backed adapter for the standing refresh pass.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::GradedEnrollment;
use crate::domain::ports::{
    StandingRepository, StandingRepositoryError, StandingUpdate, StandingWriteSummary,
    StudentEnrollments,
};

use super::diesel_helpers::{LIKE_ESCAPE, like_prefix_pattern, map_diesel_error, map_pool_error};
use super::models::{GradedEnrollmentRow, NewStudentRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{students, users};

/// Grades are free text; the cast happens in SQL so a malformed grade fails
/// the whole pass instead of being silently dropped.
const GRADED_ENROLLMENTS_SQL: &str = r#"
SELECT
    e."userId" AS user_id,
    CAST(c.credit AS DOUBLE PRECISION) AS credit,
    CAST(e.grade AS DOUBLE PRECISION) AS grade
FROM "Enrollment" e
JOIN "Course" c ON e."courseId" = c.id
JOIN "User" u ON e."userId" = u.id
WHERE u."regNo" LIKE $1 ESCAPE '\'
  AND e.grade IS NOT NULL
"#;

/// Diesel-backed implementation of the standing repository port.
#[derive(Clone)]
pub struct DieselStandingRepository {
    pool: DbPool,
}

impl DieselStandingRepository {
    /// Create a new repository over the given connection handle.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> StandingRepositoryError {
    map_pool_error(error, StandingRepositoryError::connection)
}

fn diesel_error(operation: &str) -> impl FnOnce(diesel::result::Error) -> StandingRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            StandingRepositoryError::query,
            StandingRepositoryError::connection,
        )
    }
}

fn group_enrollments(
    users: Vec<UserRow>,
    rows: Vec<GradedEnrollmentRow>,
) -> Vec<StudentEnrollments> {
    let mut by_user: HashMap<String, Vec<GradedEnrollment>> = HashMap::new();
    for row in rows {
        by_user
            .entry(row.user_id)
            .or_default()
            .push(GradedEnrollment::new(row.credit, row.grade));
    }

    users
        .into_iter()
        .map(|user| StudentEnrollments {
            enrollments: by_user.remove(&user.id).unwrap_or_default(),
            user_id: user.id,
            reg_no: user.reg_no,
        })
        .collect()
}

#[async_trait::async_trait]
impl StandingRepository for DieselStandingRepository {
    async fn load_student_enrollments(
        &self,
        reg_no_prefix: &str,
    ) -> Result<Vec<StudentEnrollments>, StandingRepositoryError> {
        let pattern = like_prefix_pattern(reg_no_prefix);
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let users = users::table
            .filter(users::reg_no.like(pattern.as_str()).escape(LIKE_ESCAPE))
            .order(users::reg_no.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error("load users by registration prefix"))?;

        let rows = sql_query(GRADED_ENROLLMENTS_SQL)
            .bind::<Text, _>(pattern.as_str())
            .load::<GradedEnrollmentRow>(&mut conn)
            .await
            .map_err(diesel_error("load graded enrollments"))?;

        Ok(group_enrollments(users, rows))
    }

    async fn persist_standings(
        &self,
        updates: &[StandingUpdate],
    ) -> Result<StandingWriteSummary, StandingRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(pool_error)?;

        conn.transaction(|conn| {
            async move {
                let mut summary = StandingWriteSummary::default();
                for update in updates {
                    let updated = diesel::update(
                        students::table.filter(students::user_id.eq(update.user_id.as_str())),
                    )
                    .set((
                        students::cgpa.eq(update.standing.cgpa),
                        students::credit_completed.eq(update.standing.credit_completed),
                    ))
                    .execute(conn)
                    .await?;

                    if updated == 0 {
                        diesel::insert_into(students::table)
                            .values(&NewStudentRow {
                                id: Uuid::new_v4().to_string(),
                                user_id: update.user_id.as_str(),
                                cgpa: update.standing.cgpa,
                                credit_completed: update.standing.credit_completed,
                            })
                            .execute(conn)
                            .await?;
                        summary.inserted += 1;
                    } else {
                        summary.updated += 1;
                    }
                }
                Ok::<_, diesel::result::Error>(summary)
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error("persist student standings"))
    }
}
