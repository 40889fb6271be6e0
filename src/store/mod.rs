//! Write side of the knowledge store.
//!
//! A [`Connector`] opens exactly one [`DocumentSession`] per call; the caller
//! owns that session for the rest of the run and ends it with one `commit`
//! followed by `close`.

mod mysql_session;
mod sqlite_session;

use crate::config::DatabaseTarget;
use crate::error::StoreError;
use crate::model::StoredDocument;

pub use self::mysql_session::MySqlSession;
pub use self::sqlite_session::SqliteSession;

pub trait DocumentSession {
    /// Appends one row. No dedup, no update.
    fn insert(&mut self, document: &StoredDocument) -> Result<(), StoreError>;

    fn commit(&mut self) -> Result<(), StoreError>;

    fn close(self) -> Result<(), StoreError>;
}

pub trait Connector {
    type Session: DocumentSession;

    fn connect(&self) -> Result<Self::Session, StoreError>;

    fn describe(&self) -> String;
}

pub enum Session {
    MySql(MySqlSession),
    Sqlite(SqliteSession),
}

impl DocumentSession for Session {
    fn insert(&mut self, document: &StoredDocument) -> Result<(), StoreError> {
        match self {
            Self::MySql(session) => session.insert(document),
            Self::Sqlite(session) => session.insert(document),
        }
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        match self {
            Self::MySql(session) => session.commit(),
            Self::Sqlite(session) => session.commit(),
        }
    }

    fn close(self) -> Result<(), StoreError> {
        match self {
            Self::MySql(session) => session.close(),
            Self::Sqlite(session) => session.close(),
        }
    }
}

/// Row counts per stored category label, ordered by label.
///
/// Opens its own connection and never creates, alters or writes anything.
/// A SQLite file without the table counts as empty.
pub fn count_by_category(target: &DatabaseTarget) -> Result<Vec<(String, i64)>, StoreError> {
    match target {
        DatabaseTarget::MySql(config) => {
            let mut session = MySqlSession::open(config)?;
            let counts = session.count_by_category()?;
            session.close()?;
            Ok(counts)
        }
        DatabaseTarget::Sqlite(path) => sqlite_session::count_by_category_read_only(path),
    }
}

impl Connector for DatabaseTarget {
    type Session = Session;

    fn connect(&self) -> Result<Session, StoreError> {
        match self {
            Self::MySql(config) => MySqlSession::open(config).map(Session::MySql),
            Self::Sqlite(path) => SqliteSession::open(path).map(Session::Sqlite),
        }
    }

    fn describe(&self) -> String {
        DatabaseTarget::describe(self)
    }
}
