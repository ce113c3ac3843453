//! Academic metrics refresh: recompute student CGPA, completed credits, and
//! cohort positions in PostgreSQL.
//!
//! The crate follows a ports-and-adapters layout. [`domain`] owns the
//! standing and ranking rules plus the port traits, [`outbound`] implements
//! those ports with Diesel, and [`config`] loads the run settings.

pub mod config;
pub mod domain;
pub mod outbound;
