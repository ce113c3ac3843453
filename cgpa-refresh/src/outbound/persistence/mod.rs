//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL through `diesel-async` over a single pooled connection.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. CGPA and ranking rules live in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **One transaction per write batch**: each pass commits all of its rows
//!   or none of them.
//!
//! # Example
//!
//! ```ignore
//! use cgpa_refresh::outbound::persistence::{DbPool, DieselStandingRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/records")).await?;
//! let repo = DieselStandingRepository::new(pool);
//! ```

mod diesel_cohort_repository;
pub(crate) mod diesel_helpers;
mod diesel_standing_repository;
mod models;
mod pool;
mod schema;

pub use diesel_cohort_repository::DieselCohortRepository;
pub use diesel_standing_repository::DieselStandingRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
