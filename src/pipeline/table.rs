use std::fmt;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{PreprocessError, Result};

/// Named partition of the DDXPlus dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
    Validate,
}

impl Split {
    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
            Split::Validate => "validate",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a DDXPlus release CSV, fields as they appear on disk.
///
/// Everything is kept as raw text here; the typed coercion rules live in the
/// normalizer. An absent column or an empty field both deserialize to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientRow {
    #[serde(default, rename = "AGE")]
    pub age: Option<String>,
    #[serde(default, rename = "SEX")]
    pub sex: Option<String>,
    #[serde(default, rename = "PATHOLOGY")]
    pub pathology: Option<String>,
    #[serde(default, rename = "DIFFERENTIAL_DIAGNOSIS")]
    pub differential_diagnosis: Option<String>,
    #[serde(default, rename = "EVIDENCES")]
    pub evidences: Option<String>,
    #[serde(default, rename = "INITIAL_EVIDENCE")]
    pub initial_evidence: Option<String>,
}

/// A fully loaded source table for one split, read-only once constructed.
///
/// Both output stages iterate the same loaded table so their row order (and
/// therefore their identifier sequences) cannot diverge.
#[derive(Debug)]
pub struct PatientTable {
    split: Split,
    rows: Vec<PatientRow>,
}

impl PatientTable {
    /// Load a release CSV. The files are large; rows are read in one pass
    /// through the csv reader's internal buffer.
    pub fn load(split: Split, path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| PreprocessError::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }

        info!(split = %split, rows = rows.len(), "loaded source table");
        Ok(Self { split, rows })
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn rows(&self) -> &[PatientRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_rows(split: Split, rows: Vec<PatientRow>) -> Self {
        Self { split, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_rows_with_quoted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "AGE,DIFFERENTIAL_DIAGNOSIS,SEX,PATHOLOGY,EVIDENCES,INITIAL_EVIDENCE\n\
                   34,\"[['Bronchitis', 0.2], ['URTI', 0.1]]\",M,Bronchitis,\"['E_48', 'E_50']\",E_48\n";
        let path = write_csv(dir.path(), "release_test_patients", csv);

        let table = PatientTable::load(Split::Test, &path).unwrap();
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.age.as_deref(), Some("34"));
        assert_eq!(row.pathology.as_deref(), Some("Bronchitis"));
        // Embedded commas survive the quoting
        assert_eq!(
            row.differential_diagnosis.as_deref(),
            Some("[['Bronchitis', 0.2], ['URTI', 0.1]]")
        );
    }

    #[test]
    fn empty_fields_read_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "AGE,DIFFERENTIAL_DIAGNOSIS,SEX,PATHOLOGY,EVIDENCES,INITIAL_EVIDENCE\n\
                   ,,F,Cold,,\n";
        let path = write_csv(dir.path(), "release_test_patients", csv);

        let table = PatientTable::load(Split::Test, &path).unwrap();
        let row = &table.rows()[0];
        assert!(row.age.is_none());
        assert!(row.differential_diagnosis.is_none());
        assert!(row.evidences.is_none());
        assert!(row.initial_evidence.is_none());
        assert_eq!(row.sex.as_deref(), Some("F"));
    }

    #[test]
    fn absent_optional_column_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "AGE,SEX,PATHOLOGY\n51,M,Flu\n";
        let path = write_csv(dir.path(), "release_test_patients", csv);

        let table = PatientTable::load(Split::Test, &path).unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.age.as_deref(), Some("51"));
        assert!(row.evidences.is_none());
        assert!(row.initial_evidence.is_none());
    }

    #[test]
    fn missing_file_is_a_missing_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release_train_patients");

        let err = PatientTable::load(Split::Train, &path).unwrap_err();
        assert!(matches!(err, PreprocessError::MissingInput { .. }));
        assert!(err.to_string().contains("release_train_patients"));
    }
}
