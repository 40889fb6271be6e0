use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::ImportError;
use crate::model::SourceRecord;

/// Reads the whole batch, preserving file order.
pub fn read_records(path: &Path) -> Result<Vec<SourceRecord>, ImportError> {
    let raw = fs::read(path).map_err(|source| ImportError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<SourceRecord> =
        serde_json::from_slice(&raw).map_err(|source| ImportError::SourceParse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), records = records.len(), "read source records");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_source(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn read_records_preserves_order_and_defaults_tags() {
        let file = write_source(
            r#"[
              {"title": "قانون الأوقاف", "content": "نص", "category": "قانوني", "source": "الجريدة الرسمية", "tags": "وقف,قانون"},
              {"title": "Second", "content": "body", "category": "فقهي", "source": "book"},
              {"title": "Third", "content": "body", "category": "other", "source": "book", "tags": null}
            ]"#,
        );

        let records = read_records(file.path()).expect("source should parse");

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["قانون الأوقاف", "Second", "Third"]);
        assert_eq!(records[0].tags.as_deref(), Some("وقف,قانون"));
        assert!(records[1].tags.is_none());
        assert!(records[2].tags.is_none());
    }

    #[test]
    fn read_records_accepts_empty_array() {
        let file = write_source("[]");
        let records = read_records(file.path()).expect("empty array should parse");
        assert!(records.is_empty());
    }

    #[test]
    fn read_records_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let err = read_records(&path).unwrap_err();
        assert!(matches!(
            err,
            ImportError::SourceRead { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn read_records_reports_malformed_json_with_parser_diagnostic() {
        let file = write_source(r#"[{"title": "broken""#);
        let err = read_records(file.path()).unwrap_err();
        let ImportError::SourceParse { source, .. } = err else {
            panic!("expected parse error");
        };
        assert!(source.is_eof());
    }

    #[test]
    fn read_records_requires_mandatory_fields() {
        let file = write_source(r#"[{"title": "t", "content": "c", "category": "مرجع"}]"#);
        let err = read_records(file.path()).unwrap_err();
        let ImportError::SourceParse { source, .. } = err else {
            panic!("expected parse error");
        };
        assert!(source.to_string().contains("source"));
    }
}
