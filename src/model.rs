use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::CanonicalCategory;

/// One entry of the source JSON array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SourceRecord {
    pub title: String,
    pub content: String,
    pub category: String,
    pub source: String,
    #[serde(default)]
    pub tags: Option<String>,
}

/// A row of `knowledge_documents`, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub title: String,
    pub content: String,
    pub category: CanonicalCategory,
    pub source: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportCounts {
    pub records_read: usize,
    pub inserted: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub status: String,
    pub started_at: String,
    pub updated_at: String,
    pub source_path: String,
    pub source_sha256: Option<String>,
    pub target: String,
    pub counts: ImportCounts,
    pub category_counts: BTreeMap<CanonicalCategory, usize>,
    pub failed_titles: Vec<String>,
    pub failed_stage: Option<String>,
    pub failure_reason: Option<String>,
}
