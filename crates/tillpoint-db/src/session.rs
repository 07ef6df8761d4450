//! Pooled connections handed out one unit of work at a time.
//!
//! A [`SessionFactory`] owns the process-wide MySQL pool. Each request calls
//! [`SessionFactory::acquire`] and receives a [`Session`], which is the only
//! handle it uses to talk to the database. The session goes back to the pool
//! when it is dropped, so release happens on every exit path: normal return,
//! `?` propagation, panics and cancelled futures alike.

use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use sqlx::mysql::{MySqlConnection, MySqlPool, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{Connection, MySql, Transaction};
use tillpoint_config::{DatabaseConfig, PoolConfig};
use tracing::{debug, info, instrument, trace};

use crate::error::DbError;
use crate::options::connect_options;

#[derive(Debug, Default)]
struct Counters {
    acquired: AtomicU64,
    released: AtomicU64,
}

/// Snapshot of session bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub acquired: u64,
    pub released: u64,
}

impl SessionStats {
    /// Sessions currently checked out.
    pub fn in_use(&self) -> u64 {
        self.acquired.saturating_sub(self.released)
    }
}

/// Creates sessions on top of a single connection pool.
///
/// Cloning is cheap and every clone shares the same pool and counters.
#[derive(Clone, Debug)]
pub struct SessionFactory {
    pool: MySqlPool,
    counters: Arc<Counters>,
}

impl SessionFactory {
    /// Builds the pool and opens its first connection, so a bad host,
    /// credential or certificate fails here rather than on the first request.
    #[instrument(skip_all, fields(host = %config.host, port = config.port, database = %config.name))]
    pub async fn connect(config: &DatabaseConfig, pool_config: &PoolConfig) -> Result<Self, DbError> {
        let options = connect_options(config)?;

        let pool = MySqlPoolOptions::new()
            .max_connections(pool_config.max_connections)
            .acquire_timeout(pool_config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(DbError::Connectivity)?;

        info!(
            max_connections = pool_config.max_connections,
            "Database connection pool ready"
        );

        Ok(Self::from_pool(pool))
    }

    /// Wraps an already configured pool.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self {
            pool,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Checks a connection out of the pool.
    ///
    /// Waits at most the pool's acquire timeout.
    pub async fn acquire(&self) -> Result<Session, DbError> {
        let conn = self.pool.acquire().await.map_err(DbError::Connectivity)?;
        let id = self.counters.acquired.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(session_id = id, "Session acquired");

        Ok(Session {
            id,
            conn,
            counters: Arc::clone(&self.counters),
        })
    }

    /// Runs one unit of work on a fresh session.
    ///
    /// The session is moved into `work` and is released when the returned
    /// future finishes, whether it yields `Ok` or `Err`.
    pub async fn scope<F, Fut, T, E>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<DbError>,
    {
        let session = self.acquire().await?;
        work(session).await
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            acquired: self.counters.acquired.load(Ordering::SeqCst),
            released: self.counters.released.load(Ordering::SeqCst),
        }
    }

    /// Number of open connections, idle or in use.
    pub fn pool_size(&self) -> u32 {
        self.pool.size()
    }

    pub fn idle_connections(&self) -> usize {
        self.pool.num_idle()
    }

    /// Closes every pooled connection. Pending and future `acquire` calls fail.
    pub async fn close(&self) {
        debug!(stats = ?self.stats(), "Closing database connection pool");
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

/// A connection exclusively owned by one unit of work.
///
/// Dereferences to [`MySqlConnection`], so `&mut *session` can be passed
/// wherever sqlx expects an executor.
pub struct Session {
    id: u64,
    conn: PoolConnection<MySql>,
    counters: Arc<Counters>,
}

impl Session {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Starts a database transaction on this session.
    ///
    /// Dropping the transaction without committing rolls it back.
    pub async fn begin(&mut self) -> Result<Transaction<'_, MySql>, sqlx::Error> {
        Connection::begin(&mut *self.conn).await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("id", &self.id).finish()
    }
}

impl Deref for Session {
    type Target = MySqlConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // The pooled connection itself is returned by its own Drop right after this.
        self.counters.released.fetch_add(1, Ordering::SeqCst);
        trace!(session_id = self.id, "Session released");
    }
}
