//! # roster-store
//!
//! SQLite-backed user directory for roster.
//!
//! An in-memory database holds a fixed roster of 16 seeded users
//! (uid 1000–1015). [`UserStore::init`] performs the one-time schema and
//! seed setup — safe to call from any number of concurrent tasks — and
//! [`UserStore::lookup`] resolves a uid to its name.
//!
//! ## Quick start
//!
//! ```ignore
//! use roster_store::{Database, UserStore};
//!
//! let db = Database::open_in_memory()?;
//! let store = UserStore::new(db);
//! store.init().await?;
//! let name = store.lookup(1000).await?; // "Alice"
//! ```

pub mod db;
pub mod error;
pub mod user_store;

// ── re-exports ───────────────────────────────────────────────────────

pub use db::Database;
pub use error::{StoreError, StoreResult};
pub use user_store::{BASE_UID, SEED_NAMES, UserRecord, UserStore};
