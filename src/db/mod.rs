// src/db/mod.rs
// Operation log storage with rusqlite

mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_support;
mod types;

pub use operations::{
    count_operations_sync, filter_operations_sync, insert_operation_sync, latest_operation_sync,
    list_operations_sync, parse_operation_row,
};
pub use types::OperationRecord;

use crate::error::{CalcError, Result};
use rusqlite::Connection;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::{debug, info};

/// Persistence seam for operation records.
///
/// Every call acquires a connection for its own duration only.
pub trait OperationStore {
    /// Append a record
    fn insert(&self, record: &OperationRecord) -> Result<()>;
    /// All records, most recent first
    fn list_all(&self) -> Result<Vec<OperationRecord>>;
    /// Records stored with `display_symbol`, most recent first
    fn filter(&self, display_symbol: char) -> Result<Vec<OperationRecord>>;
    /// Most recent record, or None when the log is empty
    fn latest(&self) -> Result<Option<OperationRecord>>;
}

impl<S: OperationStore + ?Sized> OperationStore for &S {
    fn insert(&self, record: &OperationRecord) -> Result<()> {
        (**self).insert(record)
    }

    fn list_all(&self) -> Result<Vec<OperationRecord>> {
        (**self).list_all()
    }

    fn filter(&self, display_symbol: char) -> Result<Vec<OperationRecord>> {
        (**self).filter(display_symbol)
    }

    fn latest(&self) -> Result<Option<OperationRecord>> {
        (**self).latest()
    }
}

/// How connections are handed out to each store call.
///
/// Config files and the environment share the `FromStr` spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ConnectionMode {
    /// One connection opened at startup, lent to each call behind a mutex
    #[default]
    Shared,
    /// A fresh connection per call, closed when the call returns
    PerCall,
}

impl FromStr for ConnectionMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "shared" | "pooled" => Ok(ConnectionMode::Shared),
            "per_call" | "simple" => Ok(ConnectionMode::PerCall),
            other => Err(CalcError::Config(format!("unknown connection mode: {other}"))),
        }
    }
}

impl TryFrom<String> for ConnectionMode {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

enum Handle {
    Shared(Mutex<Connection>),
    PerCall(PathBuf),
}

/// SQLite-backed operation log
pub struct Database {
    handle: Handle,
    path: Option<PathBuf>,
}

impl Database {
    /// Open the database at path, creating the file, its directory and the table if needed
    pub fn open(path: &Path, mode: ConnectionMode) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(schema::SCHEMA)?;

        let handle = match mode {
            ConnectionMode::Shared => Handle::Shared(Mutex::new(conn)),
            ConnectionMode::PerCall => {
                drop(conn);
                Handle::PerCall(path.to_path_buf())
            }
        };

        info!(path = %path.display(), ?mode, "Operation log opened");
        Ok(Self {
            handle,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Self {
            handle: Handle::Shared(Mutex::new(conn)),
            path: None,
        })
    }

    /// File backing this database, None when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Connection mode in use
    pub fn mode(&self) -> ConnectionMode {
        match self.handle {
            Handle::Shared(_) => ConnectionMode::Shared,
            Handle::PerCall(_) => ConnectionMode::PerCall,
        }
    }

    /// Run `f` with a connection held only for the duration of the call
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> rusqlite::Result<T>) -> Result<T> {
        match &self.handle {
            Handle::Shared(conn) => {
                let guard = conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                Ok(f(&guard)?)
            }
            Handle::PerCall(path) => {
                let conn = Connection::open(path)?;
                Ok(f(&conn)?)
            }
        }
    }

    /// Number of stored records
    pub fn count(&self) -> Result<i64> {
        self.with_conn(count_operations_sync)
    }
}

impl OperationStore for Database {
    fn insert(&self, record: &OperationRecord) -> Result<()> {
        debug!(id = %record.id, symbol = %record.operator_symbol, "Inserting operation");
        self.with_conn(|conn| insert_operation_sync(conn, record))
    }

    fn list_all(&self) -> Result<Vec<OperationRecord>> {
        let records = self.with_conn(list_operations_sync)?;
        debug!(count = records.len(), "Listed operations");
        Ok(records)
    }

    fn filter(&self, display_symbol: char) -> Result<Vec<OperationRecord>> {
        let symbol = display_symbol.to_string();
        let records = self.with_conn(|conn| filter_operations_sync(conn, &symbol))?;
        debug!(symbol = %symbol, count = records.len(), "Filtered operations");
        Ok(records)
    }

    fn latest(&self) -> Result<Option<OperationRecord>> {
        self.with_conn(latest_operation_sync)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{sample_record, setup_test_db};
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = setup_test_db();
        assert!(db.path().is_none());
        assert_eq!(db.mode(), ConnectionMode::Shared);
        assert_eq!(db.count().unwrap(), 0);
        assert!(db.latest().unwrap().is_none());
    }

    #[test]
    fn test_store_operations() {
        let db = setup_test_db();
        db.insert(&sample_record("20240101000001", 2.0, '+', 3.0, "5.0")).unwrap();
        db.insert(&sample_record("20240101000002", 4.0, 'x', 2.0, "8.0")).unwrap();

        let all = db.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "20240101000002");

        let muls = db.filter('x').unwrap();
        assert_eq!(muls.len(), 1);
        assert_eq!(muls[0].result, "8.0");

        assert_eq!(db.latest().unwrap().unwrap().id, "20240101000002");
    }

    #[test]
    fn test_store_through_reference() {
        fn insert_into<S: OperationStore>(store: S, record: &OperationRecord) -> Result<()> {
            store.insert(record)
        }

        let db = setup_test_db();
        insert_into(&db, &sample_record("20240101000001", 1.0, '-', 1.0, "0.0")).unwrap();
        assert_eq!(db.count().unwrap(), 1);
    }

    #[test]
    fn test_open_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log").join("calculadora.db");
        let db = Database::open(&path, ConnectionMode::Shared).unwrap();
        assert!(path.exists());
        assert_eq!(db.path(), Some(path.as_path()));
    }

    #[test]
    fn test_file_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calculadora.db");
        {
            let db = Database::open(&path, ConnectionMode::Shared).unwrap();
            db.insert(&sample_record("20240101000001", 2.0, '+', 3.0, "5.0")).unwrap();
        }
        let db = Database::open(&path, ConnectionMode::Shared).unwrap();
        assert_eq!(db.latest().unwrap().unwrap().result, "5.0");
    }

    #[test]
    fn test_per_call_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calculadora.db");
        let db = Database::open(&path, ConnectionMode::PerCall).unwrap();
        assert_eq!(db.mode(), ConnectionMode::PerCall);

        db.insert(&sample_record("20240101000001", 9.0, '/', 3.0, "3.0")).unwrap();
        db.insert(&sample_record("20240101000002", 9.0, '-', 3.0, "6.0")).unwrap();
        assert_eq!(db.count().unwrap(), 2);
        assert_eq!(db.filter('/').unwrap().len(), 1);
    }

    #[test]
    fn test_connection_mode_from_str() {
        assert_eq!("shared".parse::<ConnectionMode>().unwrap(), ConnectionMode::Shared);
        assert_eq!("Per-Call".parse::<ConnectionMode>().unwrap(), ConnectionMode::PerCall);
        assert_eq!("simple".parse::<ConnectionMode>().unwrap(), ConnectionMode::PerCall);
        assert!(matches!(
            "bogus".parse::<ConnectionMode>(),
            Err(CalcError::Config(_))
        ));
    }
}
