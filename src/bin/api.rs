//! Todos API server binary.
//!
//! This binary creates the concrete store implementation and passes it
//! to the API server. The API layer remains agnostic of the storage
//! backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todos::api::{self, ApiError, Config};
use todos::db::{Database, DbError, SurrealDatabase};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Store error: {0}")]
    #[diagnostic(code(todos::binary::store))]
    Store(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(todos::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(todos::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todos-api")]
#[command(author, version, about = "Todo CRUD API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "9000")]
    port: u16,

    /// Store engine URL (defaults to a surrealkv file in the XDG data directory)
    #[arg(long)]
    db: Option<String>,
}

/// Default on-disk store location: `~/.local/share/todos/todos.skv`.
fn default_db_path() -> PathBuf {
    let data_home = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join("todos/todos.skv")
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let db_url = match cli.db {
        Some(url) => url,
        None => {
            let path = default_db_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            format!("surrealkv://{}", path.display())
        }
    };

    println!("Opening store at {db_url}");

    // A store that cannot be reached at startup is fatal; every later
    // failure is reported per-request instead.
    let db = SurrealDatabase::connect(&db_url).await?;
    db.define_schema().await?;

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        db,
    )
    .await?;

    Ok(())
}
