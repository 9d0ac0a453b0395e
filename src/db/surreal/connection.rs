//! SurrealDB connection and schema management.

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use tracing::{info, warn};

use super::todo::SurrealTodoRepository;
use crate::db::{Database, DbError, DbResult};

/// Namespace and database selected on every connection.
const NAMESPACE: &str = "todos";
const DATABASE: &str = "todos";

/// SurrealDB-backed database implementation.
///
/// The underlying client is safe for concurrent use, so a single handle
/// is shared across all request handlers.
pub struct SurrealDatabase {
    db: Surreal<Any>,
}

impl SurrealDatabase {
    /// Connect to the store at the given engine URL (`surrealkv://path`,
    /// `mem://`, ...) and select the service namespace and database.
    ///
    /// Embedded engines can report unhealthy while still starting up, so
    /// the health check retries with exponential backoff before giving
    /// up.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let db = connect(url).await.map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;

        let mut delay = Duration::from_millis(500);
        for attempt in 1..=3 {
            if db.health().await.is_ok() {
                break;
            }
            if attempt == 3 {
                return Err(DbError::Connection {
                    message: format!("store at '{url}' unhealthy after {attempt} attempts"),
                });
            }
            warn!(attempt, ?delay, "store not ready, retrying");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        let version = db
            .version()
            .await
            .map_or_else(|_| "unknown".to_owned(), |v| v.to_string());
        info!(namespace = NAMESPACE, database = DATABASE, %version, "store connection established");

        Ok(Self { db })
    }

    /// Create an in-memory store (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        Self::connect("mem://").await
    }
}

impl Database for SurrealDatabase {
    type Todos<'a> = SurrealTodoRepository<'a>;

    async fn define_schema(&self) -> DbResult<()> {
        self.db
            .query("DEFINE TABLE IF NOT EXISTS todo SCHEMALESS")
            .await
            .map_err(|e| DbError::Schema {
                message: e.to_string(),
            })?
            .check()
            .map_err(surrealdb::Error::from)
            .map_err(|e| DbError::Schema {
                message: e.to_string(),
            })?;

        Ok(())
    }

    fn todos(&self) -> Self::Todos<'_> {
        SurrealTodoRepository { db: &self.db }
    }
}
