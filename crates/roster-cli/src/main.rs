//! CLI entry point for roster.
//!
//! Greets the user, optionally computes an age from a birthday argument,
//! then seeds the in-memory user directory and prints every record.

use anyhow::Result;
use clap::Parser;
use roster_services::Greeter;
use roster_store::{BASE_UID, Database, SEED_NAMES, UserStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// roster — seeded user directory demo.
#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "roster — seeded user directory demo",
    long_about = "Greets the user, optionally computes an age from a birthday \
                  given as YYYY-MM-DD, and lists the 16 seeded user records."
)]
struct Cli {
    /// Birthday in YYYY-MM-DD format; prints the computed age.
    birthday: Option<String>,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet by default; RUST_LOG overrides.
    init_tracing("warn");

    let cli = Cli::parse();

    println!("{}", Greeter::new("World").greet());

    if let Some(birthday) = cli.birthday.as_deref() {
        // An unparseable birthday exits non-zero with the error on stderr.
        let age = roster_services::age_from_birthday(birthday)?;
        println!("Age: {age}");
    }

    lookup_users().await;
    Ok(())
}

/// Seed the directory and print one line per uid, 1000..=1015 ascending.
///
/// An init failure goes to stderr and skips the listing; a per-uid lookup
/// failure prints an error line and continues. Neither changes the exit
/// status.
async fn lookup_users() {
    let db = match Database::open_in_memory() {
        Ok(db) => db,
        Err(e) => {
            eprintln!("db init error: {e}");
            return;
        }
    };

    let store = UserStore::new(db);
    if let Err(e) = store.init().await {
        eprintln!("db init error: {e}");
        return;
    }
    info!("user directory ready");

    for uid in BASE_UID..BASE_UID + SEED_NAMES.len() as i64 {
        match store.lookup(uid).await {
            Ok(name) => println!("uid {uid}: {name}"),
            Err(e) => println!("uid {uid}: error: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
