use super::*;

pub(super) struct ManifestContext<'a> {
    pub(super) run_id: &'a str,
    pub(super) started_at: &'a str,
    pub(super) source_path: &'a Path,
    pub(super) target: &'a str,
}

pub(super) fn build_manifest(
    context: &ManifestContext<'_>,
    outcome: &ImportOutcome,
) -> ImportRunManifest {
    let status = match (&outcome.error, outcome.tally.failed) {
        (Some(_), _) => "failed",
        (None, 0) => "completed",
        (None, _) => "completed_with_errors",
    };

    ImportRunManifest {
        manifest_version: 1,
        run_id: context.run_id.to_string(),
        status: status.to_string(),
        started_at: context.started_at.to_string(),
        updated_at: now_utc_string(),
        source_path: context.source_path.display().to_string(),
        source_sha256: sha256_file(context.source_path).ok(),
        target: context.target.to_string(),
        counts: outcome.counts(),
        category_counts: outcome.tally.category_counts.clone(),
        failed_titles: outcome.tally.failed_titles.clone(),
        failed_stage: outcome
            .error
            .as_ref()
            .map(|err| err.stage().as_str().to_string()),
        failure_reason: outcome.error.as_ref().map(render_error_chain),
    }
}

fn render_error_chain(err: &ImportError) -> String {
    use std::error::Error;

    let mut rendered = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        rendered.push_str(": ");
        rendered.push_str(&inner.to_string());
        cause = inner.source();
    }
    rendered
}
