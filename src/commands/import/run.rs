use super::*;

pub fn run(args: ImportArgs) -> Result<RunStatus> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("import-{}", utc_compact_string(started_ts));
    let table = CategoryTable::standard();

    if args.dry_run {
        info!(run_id = %run_id, source = %args.source_path.display(), "starting dry-run import");
        return preview(&args.source_path, &table);
    }

    let parser = ConnectionUrlParser::new()?;
    let target = parser
        .resolve(args.database_url.as_deref())
        .map_err(ImportError::from)?;
    let target_description = target.describe();

    info!(
        run_id = %run_id,
        source = %args.source_path.display(),
        store = %target_description,
        "starting import"
    );

    let outcome = execute(&target, &args.source_path, &table);

    if let Some(manifest_path) = &args.manifest_path {
        let context = ManifestContext {
            run_id: &run_id,
            started_at: &started_at,
            source_path: &args.source_path,
            target: &target_description,
        };
        write_json_pretty(manifest_path, &build_manifest(&context, &outcome))?;
        info!(path = %manifest_path.display(), "wrote import run manifest");
    }

    outcome.into_status()
}
