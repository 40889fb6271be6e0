use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Labels accepted by the `knowledge_documents.category` column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalCategory {
    Law,
    Jurisprudence,
    Historical,
    Reference,
    Administrative,
    Majalla,
}

impl CanonicalCategory {
    pub const ALL: [Self; 6] = [
        Self::Law,
        Self::Jurisprudence,
        Self::Historical,
        Self::Reference,
        Self::Administrative,
        Self::Majalla,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Law => "law",
            Self::Jurisprudence => "jurisprudence",
            Self::Historical => "historical",
            Self::Reference => "reference",
            Self::Administrative => "administrative",
            Self::Majalla => "majalla",
        }
    }
}

impl fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed translation from source-file category labels to canonical ones.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    labels: HashMap<&'static str, CanonicalCategory>,
    fallback: CanonicalCategory,
}

impl CategoryTable {
    /// The Arabic source vocabulary used by the reference document files.
    pub fn standard() -> Self {
        let labels = HashMap::from([
            ("قانوني", CanonicalCategory::Law),
            ("فقهي", CanonicalCategory::Jurisprudence),
            ("تاريخي", CanonicalCategory::Historical),
            ("مرجع", CanonicalCategory::Reference),
            ("إداري", CanonicalCategory::Administrative),
            ("مجلة الأحكام", CanonicalCategory::Majalla),
        ]);

        Self {
            labels,
            fallback: CanonicalCategory::Reference,
        }
    }

    /// Total over all inputs: labels outside the table map to the fallback.
    pub fn translate(&self, label: &str) -> CanonicalCategory {
        self.labels.get(label).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> CanonicalCategory {
        self.fallback
    }
}
