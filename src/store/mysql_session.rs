use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder};

use super::DocumentSession;
use crate::config::ConnectionConfig;
use crate::error::StoreError;
use crate::model::StoredDocument;

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
const INSERT_SQL: &str = "
    INSERT INTO knowledge_documents (title, content, category, source, tags, createdAt)
    VALUES (?, ?, ?, ?, ?, ?)
";

pub struct MySqlSession {
    conn: Conn,
}

impl MySqlSession {
    /// Connects with autocommit off so the batch ends at the single `COMMIT`.
    pub fn open(config: &ConnectionConfig) -> Result<Self, StoreError> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(config.host.as_str()))
            .tcp_port(config.port)
            .user(Some(config.user.as_str()))
            .pass(Some(config.credential.as_str()))
            .db_name(Some(config.database.as_str()));

        let mut conn = Conn::new(opts)?;
        conn.query_drop("SET autocommit = 0")?;
        conn.query_drop("SET time_zone = '+00:00'")?;

        Ok(Self { conn })
    }

    pub fn count_by_category(&mut self) -> Result<Vec<(String, i64)>, StoreError> {
        let rows = self.conn.query::<(String, i64), _>(
            "SELECT category, COUNT(*) FROM knowledge_documents GROUP BY category ORDER BY category",
        )?;
        Ok(rows)
    }
}

impl DocumentSession for MySqlSession {
    fn insert(&mut self, document: &StoredDocument) -> Result<(), StoreError> {
        self.conn.exec_drop(
            INSERT_SQL,
            (
                document.title.as_str(),
                document.content.as_str(),
                document.category.as_str(),
                document.source.as_str(),
                document.tags.as_str(),
                document.created_at.format(CREATED_AT_FORMAT).to_string(),
            ),
        )?;

        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.conn.query_drop("COMMIT")?;
        Ok(())
    }

    fn close(self) -> Result<(), StoreError> {
        drop(self.conn);
        Ok(())
    }
}
