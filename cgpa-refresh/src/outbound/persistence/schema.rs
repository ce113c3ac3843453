//! Diesel table definitions for the academic records schema.
//!
//! The schema is owned by the records application, which uses quoted,
//! case-sensitive identifiers (`"User"."regNo"`). Diesel always quotes table
//! and column names, so `sql_name` keeps the Rust side snake_case while the
//! generated SQL matches the live tables exactly.

diesel::table! {
    /// Application users; students are selected by registration prefix.
    #[sql_name = "User"]
    users (id) {
        /// Primary key.
        id -> Text,
        /// Registration number.
        #[sql_name = "regNo"]
        reg_no -> Text,
        /// Academic session label, e.g. `2023-2024`.
        session -> Nullable<Text>,
    }
}

diesel::table! {
    /// Offered courses with their credit weight.
    #[sql_name = "Course"]
    courses (id) {
        /// Primary key.
        id -> Text,
        /// Credit weight.
        credit -> Double,
    }
}

diesel::table! {
    /// Course enrollments; `grade` is free text and cast when read.
    #[sql_name = "Enrollment"]
    enrollments (user_id, course_id) {
        /// Enrolled user.
        #[sql_name = "userId"]
        user_id -> Text,
        /// Enrolled course.
        #[sql_name = "courseId"]
        course_id -> Text,
        /// Recorded grade, if any.
        grade -> Nullable<Text>,
    }
}

diesel::table! {
    /// Per-user academic standing, unique on `userId`.
    #[sql_name = "Student"]
    students (id) {
        /// Primary key (UUID string).
        id -> Text,
        /// Owning user.
        #[sql_name = "userId"]
        user_id -> Text,
        /// Credit-weighted grade average.
        cgpa -> Nullable<Double>,
        /// Completed credit total.
        #[sql_name = "creditCompleted"]
        credit_completed -> Nullable<Integer>,
        /// Rank within the session cohort.
        position -> Nullable<Integer>,
    }
}

diesel::joinable!(students -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, courses, enrollments, students);
