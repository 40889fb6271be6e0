use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::commands::RunStatus;
use crate::config::{ConnectionUrlParser, DatabaseTarget};
use crate::store::count_by_category;

pub fn run(args: StatusArgs) -> Result<RunStatus> {
    let parser = ConnectionUrlParser::new()?;
    let target = parser.resolve(args.database_url.as_deref())?;

    info!(store = %target.describe(), "status requested");

    if let DatabaseTarget::Sqlite(path) = &target {
        if !path.exists() {
            warn!(path = %path.display(), "database file missing");
            return Ok(RunStatus::Clean);
        }
    }

    let counts = count_by_category(&target)
        .with_context(|| format!("failed to count knowledge documents in {}", target.describe()))?;
    let total: i64 = counts.iter().map(|(_, count)| count).sum();

    for (category, documents) in &counts {
        info!(category = %category, documents, "category count");
    }
    info!(documents = total, "knowledge documents total");

    Ok(RunStatus::Clean)
}
