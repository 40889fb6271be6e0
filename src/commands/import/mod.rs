use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::category::{CanonicalCategory, CategoryTable};
use crate::cli::ImportArgs;
use crate::commands::RunStatus;
use crate::config::ConnectionUrlParser;
use crate::error::{ImportError, InsertFailure, Stage};
use crate::model::{ImportCounts, ImportRunManifest, SourceRecord, StoredDocument};
use crate::source::read_records;
use crate::store::{Connector, DocumentSession};
use crate::util::{now_utc_string, sha256_file, utc_compact_string, write_json_pretty};

mod batch;
mod manifest;
mod run;

pub use run::run;

use batch::*;
use manifest::*;
