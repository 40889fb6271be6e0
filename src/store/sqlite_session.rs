use std::path::Path;

use rusqlite::{Connection, OpenFlags, params};

use super::DocumentSession;
use crate::category::CanonicalCategory;
use crate::error::StoreError;
use crate::model::StoredDocument;

pub struct SqliteSession {
    connection: Connection,
}

impl SqliteSession {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let connection = Connection::open(path)?;
        Self::from_connection(connection)
    }

    /// Prepares the table and opens the batch transaction.
    pub fn from_connection(connection: Connection) -> Result<Self, StoreError> {
        configure_connection(&connection)?;
        ensure_schema(&connection)?;
        connection.execute_batch("BEGIN")?;
        Ok(Self { connection })
    }
}

impl DocumentSession for SqliteSession {
    fn insert(&mut self, document: &StoredDocument) -> Result<(), StoreError> {
        self.connection.execute(
            "
            INSERT INTO knowledge_documents(title, content, category, source, tags, createdAt)
            VALUES(?1, ?2, ?3, ?4, ?5, ?6)
            ",
            params![
                &document.title,
                &document.content,
                document.category.as_str(),
                &document.source,
                &document.tags,
                document.created_at,
            ],
        )?;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.connection.execute_batch("COMMIT")?;
        Ok(())
    }

    fn close(self) -> Result<(), StoreError> {
        self.connection
            .close()
            .map_err(|(_, err)| StoreError::Sqlite(err))
    }
}

/// Counts through a read-only handle: no pragmas, no schema, no transaction.
pub(super) fn count_by_category_read_only(path: &Path) -> Result<Vec<(String, i64)>, StoreError> {
    let connection = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    let counts = category_counts(&connection)?;
    connection
        .close()
        .map_err(|(_, err)| StoreError::Sqlite(err))?;
    Ok(counts)
}

fn category_counts(connection: &Connection) -> Result<Vec<(String, i64)>, StoreError> {
    let table_exists: bool = connection.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'knowledge_documents')",
        [],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Ok(Vec::new());
    }

    let mut statement = connection.prepare(
        "
        SELECT category, COUNT(*)
        FROM knowledge_documents
        GROUP BY category
        ORDER BY category ASC
        ",
    )?;

    let rows = statement
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<(String, i64)>, _>>()?;

    Ok(rows)
}

fn configure_connection(connection: &Connection) -> Result<(), StoreError> {
    let _mode: String =
        connection.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    connection.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(())
}

fn ensure_schema(connection: &Connection) -> Result<(), StoreError> {
    let allowed = CanonicalCategory::ALL
        .iter()
        .map(|category| format!("'{}'", category.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    connection.execute_batch(&format!(
        "
        CREATE TABLE IF NOT EXISTS knowledge_documents (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          title TEXT NOT NULL,
          content TEXT NOT NULL,
          category TEXT NOT NULL CHECK (category IN ({allowed})),
          source TEXT,
          tags TEXT,
          createdAt TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS category_idx ON knowledge_documents(category);
        CREATE INDEX IF NOT EXISTS title_idx ON knowledge_documents(title);
        "
    ))?;

    Ok(())
}
