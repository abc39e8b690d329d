use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::COL_PATHOLOGY;
use crate::error::{PreprocessError, Result};
use crate::pipeline::table::PatientRow;

/// Sequential identifier assigned within one split, starting at 1.
pub type ParticipantId = u64;

/// One normalized patient record, keyed exactly the way the downstream
/// retrieval pipeline expects.
///
/// The diagnosis appears under two keys on purpose, and the two pain fields
/// are fixed empty placeholders kept for schema compatibility with an
/// unrelated consumer of the same record shape. `Age`/`Sex` go to `null`
/// when missing while the evidence fields go to `""`; that asymmetry is
/// load-bearing downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    #[serde(rename = "Participant No.")]
    pub participant_no: ParticipantId,
    #[serde(rename = "Processed Diagnosis")]
    pub processed_diagnosis: String,
    #[serde(rename = "Diagnoses (related to pain)")]
    pub pain_diagnoses: String,
    #[serde(rename = "Age")]
    pub age: Option<i64>,
    #[serde(rename = "Sex")]
    pub sex: Option<String>,
    #[serde(rename = "Differential Diagnosis")]
    pub differential_diagnosis: String,
    #[serde(rename = "Evidences")]
    pub evidences: String,
    #[serde(rename = "Initial Evidence")]
    pub initial_evidence: String,
    #[serde(rename = "Pain Presentation and Description Areas of pain as per physiotherapy input")]
    pub pain_presentation: String,
    #[serde(
        rename = "Pain descriptions and assorted symptoms (self-report) Associated symptoms include: parasthesia, numbness, weakness, tingling, pins and needles"
    )]
    pub pain_symptoms: String,
}

/// Extract the mandatory diagnosis label from a row.
///
/// Shared by the split writer and the ground-truth builder so the per-record
/// files and the ground-truth table cannot disagree on the label.
pub fn diagnosis_label(row: &PatientRow, participant_no: ParticipantId) -> Result<String> {
    match row.pathology.as_deref() {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(PreprocessError::MissingField(format!(
            "{COL_PATHOLOGY} (participant {participant_no})"
        ))),
    }
}

/// Map one source row plus its assigned identifier to a normalized record.
pub fn normalize_row(row: &PatientRow, participant_no: ParticipantId) -> Result<ParticipantRecord> {
    let diagnosis = diagnosis_label(row, participant_no)?;
    Ok(ParticipantRecord {
        participant_no,
        processed_diagnosis: diagnosis.clone(),
        pain_diagnoses: diagnosis,
        age: int_or_null(row.age.as_deref()),
        sex: text_or_null(row.sex.as_deref()),
        differential_diagnosis: text_or_empty(row.differential_diagnosis.as_deref()),
        evidences: text_or_empty(row.evidences.as_deref()),
        initial_evidence: text_or_empty(row.initial_evidence.as_deref()),
        pain_presentation: String::new(),
        pain_symptoms: String::new(),
    })
}

/// Integer when the field parses, otherwise `None`.
///
/// Accepts the float spelling a numeric column picks up once it has gaps
/// ("34.0"); any other uncoercible value is treated as missing rather than
/// failing the row.
fn int_or_null(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f as i64),
        _ => {
            debug!(value = s, "uncoercible numeric field, substituting null");
            None
        }
    }
}

/// Text exactly as it appeared, or `None` when the field was missing.
fn text_or_null(raw: Option<&str>) -> Option<String> {
    raw.map(str::to_string)
}

/// Text exactly as it appeared, or `""` when the field was missing.
fn text_or_empty(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}
