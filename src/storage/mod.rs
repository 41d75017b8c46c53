pub mod mapper;
pub mod registry;

use once_cell::sync::Lazy;
use rusqlite::Connection;
use rusqlite_migration::{Migrations, M};
use std::path::Path;

use crate::utils::error::Result;

pub use mapper::StudentMapper;
pub use registry::MapperRegistry;

// Schema migrations, applied to latest on every open.
static MIGRATIONS: Lazy<Migrations<'static>> = Lazy::new(|| {
    Migrations::new(vec![M::up(
        r#"
        CREATE TABLE IF NOT EXISTS student (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL
        );
        "#,
    )])
});

/// Opens the shared connection used by every mapper for the process
/// lifetime.
pub fn open(path: &Path) -> Result<Connection> {
    let mut conn = Connection::open(path)?;
    MIGRATIONS.to_latest(&mut conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let mut conn = Connection::open_in_memory()?;
    MIGRATIONS.to_latest(&mut conn)?;
    Ok(conn)
}
