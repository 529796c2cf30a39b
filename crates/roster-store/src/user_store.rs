//! Seeded user directory.
//!
//! A fixed roster of 16 users (uid 1000–1015) is inserted once per store,
//! inside a single transaction, the first time [`UserStore::init`] is
//! called. The records are never mutated afterwards, so lookups need no
//! locking beyond the connection handle itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

use crate::db::Database;
use crate::error::{StoreError, StoreResult};

/// Seed names in uid order; uid = [`BASE_UID`] + index.
pub const SEED_NAMES: [&str; 16] = [
    "Alice", "Bob", "Charlie", "Dave", "Eve", "Frank", "Grace", "Hank", "Ivy", "Jack", "Karen",
    "Leo", "Mia", "Nick", "Olivia", "Paul",
];

/// The uid assigned to the first seed name.
pub const BASE_UID: i64 = 1000;

/// A seeded user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Integer primary key.
    pub uid: i64,
    /// Non-empty display name.
    pub name: String,
}

/// Read-only directory of seeded users backed by [`Database`].
///
/// Cloning the store shares both the connection and the one-shot
/// initialization latch, so any clone may call [`UserStore::init`] and
/// all clones observe the same outcome.
#[derive(Clone)]
pub struct UserStore {
    db: Database,
    seeded: Arc<OnceCell<Result<(), String>>>,
}

impl UserStore {
    /// Create a user store backed by `db`. No schema exists until
    /// [`UserStore::init`] has been called.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            seeded: Arc::new(OnceCell::new()),
        }
    }

    /// One-time setup: create the `users` table and insert the 16 seed
    /// records.
    ///
    /// Safe to call from any number of concurrent tasks; the setup body
    /// runs at most once. The first outcome is latched — `rusqlite::Error`
    /// is not `Clone`, so a failure is stored as its message — and every
    /// caller, first or later, observes that same success or
    /// [`StoreError::Init`].
    pub async fn init(&self) -> StoreResult<()> {
        let outcome = self
            .seeded
            .get_or_init(|| async { self.seed().await.map_err(|e| e.to_string()) })
            .await;
        outcome.clone().map_err(StoreError::Init)
    }

    /// Return the name bound to `uid`, or [`StoreError::NotFound`].
    ///
    /// Defined only after `init()` has been invoked by the caller's own
    /// control flow; there is no lazy initialization.
    #[instrument(skip(self))]
    pub async fn lookup(&self, uid: i64) -> StoreResult<String> {
        self.db
            .execute(move |conn| {
                let result = conn.query_row(
                    "SELECT name FROM users WHERE uid = ?1",
                    rusqlite::params![uid],
                    |row| row.get::<_, String>(0),
                );
                match result {
                    Ok(name) => Ok(name),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::NotFound {
                        entity: "user",
                        id: uid.to_string(),
                    }),
                    Err(e) => Err(StoreError::Sqlite(e)),
                }
            })
            .await
    }

    /// List all records ordered by uid.
    #[instrument(skip(self))]
    pub async fn list(&self) -> StoreResult<Vec<UserRecord>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn.prepare("SELECT uid, name FROM users ORDER BY uid ASC")?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok(UserRecord {
                            uid: row.get(0)?,
                            name: row.get(1)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(rows)
            })
            .await
    }

    /// Return the total number of records.
    #[instrument(skip(self))]
    pub async fn count(&self) -> StoreResult<i64> {
        self.db
            .execute(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
    }

    /// The actual setup body, run at most once via the latch in `init`.
    ///
    /// Table creation and all 16 inserts share one transaction, so a
    /// failure leaves no partial state behind.
    async fn seed(&self) -> StoreResult<()> {
        debug!("seeding user directory");

        self.db
            .execute_mut(|conn| {
                let tx = conn.transaction()?;
                tx.execute_batch(
                    "CREATE TABLE IF NOT EXISTS users (
                        uid  INTEGER PRIMARY KEY,
                        name TEXT NOT NULL CHECK(length(name) > 0)
                    );",
                )?;
                for (i, name) in SEED_NAMES.iter().enumerate() {
                    tx.execute(
                        "INSERT INTO users (uid, name) VALUES (?1, ?2)",
                        rusqlite::params![BASE_UID + i as i64, name],
                    )?;
                }
                tx.commit()?;
                Ok(())
            })
            .await?;

        info!(records = SEED_NAMES.len(), "user directory seeded");
        Ok(())
    }
}

// ── tests ────────────────────────────────────────────────────────────
