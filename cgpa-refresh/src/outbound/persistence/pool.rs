//! Scoped PostgreSQL connection handle for the refresh job.
//!
//! Wraps a `diesel-async` + `bb8` pool. The job runs with a single pooled
//! connection, so every repository call reuses the same physical connection
//! and the connection is closed when the last `DbPool` clone is dropped,
//! whether the run succeeded or failed.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Errors that can occur while opening or checking out the connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out the connection.
    #[error("failed to get database connection: {message}")]
    Checkout {
        /// Underlying pool message.
        message: String,
    },

    /// Failed to open the connection handle.
    #[error("failed to open database connection: {message}")]
    Build {
        /// Underlying pool message.
        message: String,
    },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// The job holds exactly one connection, opened eagerly so a bad URL fails
/// before either pass starts.
const CONNECTIONS: u32 = 1;

/// How long a checkout waits for the connection.
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to open the job's database connection.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
}

impl PoolConfig {
    /// Target the given PostgreSQL URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

/// Connection handle shared by the persistence adapters.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Open the connection handle.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the URL is invalid or the initial
    /// connection cannot be established.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(CONNECTIONS)
            .min_idle(Some(CONNECTIONS))
            .connection_timeout(CHECKOUT_TIMEOUT)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check out the connection.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if the connection is unavailable within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
