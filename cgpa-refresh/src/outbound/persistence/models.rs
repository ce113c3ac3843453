//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain.

use diesel::prelude::*;
use diesel::sql_types::{Double, Nullable, Text};

use super::schema::{students, users};

/// User matched by registration prefix.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: String,
    pub reg_no: String,
}

/// Graded enrollment with credit and grade already cast to numbers.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct GradedEnrollmentRow {
    #[diesel(sql_type = Text)]
    pub user_id: String,
    #[diesel(sql_type = Double)]
    pub credit: f64,
    #[diesel(sql_type = Nullable<Double>)]
    pub grade: Option<f64>,
}

/// Insertable struct for creating a Student row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub(crate) struct NewStudentRow<'a> {
    pub id: String,
    pub user_id: &'a str,
    pub cgpa: f64,
    pub credit_completed: i32,
}

/// Student row as read for cohort ranking.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CohortRow {
    pub id: String,
    pub cgpa: Option<f64>,
    pub credit_completed: Option<i32>,
}
