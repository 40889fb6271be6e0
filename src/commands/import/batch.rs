use super::*;

/// Running success/failure totals for one batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct ImportTally {
    pub(super) inserted: usize,
    pub(super) failed: usize,
    pub(super) failed_titles: Vec<String>,
    pub(super) category_counts: BTreeMap<CanonicalCategory, usize>,
}

impl ImportTally {
    fn record(mut self, outcome: Result<CanonicalCategory, InsertFailure>) -> Self {
        match outcome {
            Ok(category) => {
                self.inserted += 1;
                *self.category_counts.entry(category).or_default() += 1;
            }
            Err(failure) => {
                error!(title = %failure.title, error = %failure.error, "failed to insert document");
                self.failed += 1;
                self.failed_titles.push(failure.title);
            }
        }
        self
    }
}

/// Where a run ended up. `error` is set exactly when `stage` is `Failed`.
#[derive(Debug)]
pub(super) struct ImportOutcome {
    pub(super) stage: Stage,
    pub(super) records_read: usize,
    pub(super) tally: ImportTally,
    pub(super) error: Option<ImportError>,
}

impl ImportOutcome {
    fn new() -> Self {
        Self {
            stage: Stage::Idle,
            records_read: 0,
            tally: ImportTally::default(),
            error: None,
        }
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = self.stage.as_str(), to = stage.as_str(), "import stage");
        self.stage = stage;
    }

    pub(super) fn counts(&self) -> ImportCounts {
        ImportCounts {
            records_read: self.records_read,
            inserted: self.tally.inserted,
            failed: self.tally.failed,
        }
    }

    pub(super) fn into_status(self) -> Result<RunStatus> {
        match self.error {
            Some(err) => Err(err.into()),
            None if self.tally.failed > 0 => Ok(RunStatus::CompletedWithErrors),
            None => Ok(RunStatus::Clean),
        }
    }
}

pub(super) fn translate_record(record: &SourceRecord, table: &CategoryTable) -> StoredDocument {
    StoredDocument {
        title: record.title.clone(),
        content: record.content.clone(),
        category: table.translate(&record.category),
        source: record.source.clone(),
        tags: record.tags.clone().unwrap_or_default(),
        created_at: Utc::now(),
    }
}

pub(super) fn insert_record<S: DocumentSession>(
    session: &mut S,
    table: &CategoryTable,
    record: &SourceRecord,
) -> Result<CanonicalCategory, InsertFailure> {
    let document = translate_record(record, table);

    match session.insert(&document) {
        Ok(()) => {
            info!(title = %document.title, category = %document.category, "inserted document");
            Ok(document.category)
        }
        Err(err) => Err(InsertFailure {
            title: document.title,
            error: err,
        }),
    }
}

/// Attempts every record in order; a failed row never stops the batch.
pub(super) fn insert_all<S: DocumentSession>(
    session: &mut S,
    table: &CategoryTable,
    records: &[SourceRecord],
) -> ImportTally {
    records.iter().fold(ImportTally::default(), |tally, record| {
        tally.record(insert_record(session, table, record))
    })
}

/// Reads the source, then writes it through one session and one commit.
pub(super) fn execute<C: Connector>(
    connector: &C,
    source_path: &Path,
    table: &CategoryTable,
) -> ImportOutcome {
    let mut outcome = ImportOutcome::new();

    if let Err(err) = drive(connector, source_path, table, &mut outcome) {
        outcome.enter(Stage::Failed);
        outcome.error = Some(err);
    }

    outcome
}

fn drive<C: Connector>(
    connector: &C,
    source_path: &Path,
    table: &CategoryTable,
    outcome: &mut ImportOutcome,
) -> Result<(), ImportError> {
    outcome.enter(Stage::ReadingSource);
    let records = read_records(source_path)?;
    outcome.records_read = records.len();

    outcome.enter(Stage::Connecting);
    let mut session = connector
        .connect()
        .map_err(|source| ImportError::Connection {
            target: connector.describe(),
            source,
        })?;
    info!(store = %connector.describe(), "connected to knowledge store");

    outcome.enter(Stage::Inserting);
    info!(records = records.len(), "inserting documents");
    outcome.tally = insert_all(&mut session, table, &records);
    info!(
        records_read = outcome.records_read,
        success = outcome.tally.inserted,
        errors = outcome.tally.failed,
        "import summary"
    );

    outcome.enter(Stage::Committing);
    session.commit().map_err(ImportError::Commit)?;
    info!("committed import batch");

    if let Err(err) = session.close() {
        warn!(error = %err, "failed to close database session");
    }
    outcome.enter(Stage::Closed);

    Ok(())
}

/// Reads and translates without touching the store.
pub(super) fn preview(source_path: &Path, table: &CategoryTable) -> Result<RunStatus> {
    let records = read_records(source_path)?;

    let mut category_counts = BTreeMap::<CanonicalCategory, usize>::new();
    for record in &records {
        let category = table.translate(&record.category);
        *category_counts.entry(category).or_default() += 1;
        info!(
            title = %record.title,
            label = %record.category,
            category = %category,
            "would insert document"
        );
    }

    for (category, count) in &category_counts {
        info!(category = %category, documents = count, "dry-run category total");
    }
    info!(
        records = records.len(),
        fallback = %table.fallback(),
        "dry-run complete; no database connection opened"
    );

    Ok(RunStatus::Clean)
}
