use std::path::PathBuf;

use thiserror::Error;

/// Stages of a single import run, in the order they are entered.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stage {
    Idle,
    ReadingSource,
    Connecting,
    Inserting,
    Committing,
    Closed,
    Failed,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ReadingSource => "reading_source",
            Self::Connecting => "connecting",
            Self::Inserting => "inserting",
            Self::Committing => "committing",
            Self::Closed => "closed",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    Missing,

    #[error("malformed connection string: {reason}")]
    Malformed { reason: String },

    #[error("invalid port in connection string: {value:?}")]
    InvalidPort { value: String },

    #[error("unsupported database scheme: {scheme}")]
    UnsupportedScheme { scheme: String },
}

impl ConfigError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// Driver-level failure from either backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    MySql(#[from] mysql::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(test)]
    #[error("simulated driver error: {0}")]
    Simulated(String),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read source file {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}", path.display())]
    SourceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to connect to {target}")]
    Connection {
        target: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to commit import batch")]
    Commit(#[source] StoreError),
}

impl ImportError {
    /// The stage that was active when the run failed.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Config(_) => Stage::Idle,
            Self::SourceRead { .. } | Self::SourceParse { .. } => Stage::ReadingSource,
            Self::Connection { .. } => Stage::Connecting,
            Self::Commit(_) => Stage::Committing,
        }
    }
}

/// A single rejected row. Counted and logged, never propagated.
#[derive(Debug)]
pub struct InsertFailure {
    pub title: String,
    pub error: StoreError,
}
