use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::pipeline::normalize::{diagnosis_label, ParticipantId};
use crate::pipeline::table::PatientTable;

/// One row of the ground-truth table. Column names match the per-record
/// JSON keys so downstream evaluation can join on either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthRow {
    #[serde(rename = "Participant No.")]
    pub participant_no: ParticipantId,
    #[serde(rename = "Processed Diagnosis")]
    pub processed_diagnosis: String,
    #[serde(rename = "Diagnoses (related to pain)")]
    pub pain_diagnoses: String,
}

/// Build ground-truth rows for the test split, in table order.
///
/// The identifier accumulator here is separate from the one used when the
/// split's record files were written, but both start at 1 and advance once
/// per row, so row i always describes `participant_i.json`.
pub fn build_ground_truth(table: &PatientTable) -> Result<Vec<GroundTruthRow>> {
    let mut rows = Vec::with_capacity(table.len());
    let mut participant_no: ParticipantId = 1;
    for row in table.rows() {
        let diagnosis = diagnosis_label(row, participant_no)?;
        rows.push(GroundTruthRow {
            participant_no,
            processed_diagnosis: diagnosis.clone(),
            pain_diagnoses: diagnosis,
        });
        participant_no += 1;
    }
    Ok(rows)
}

/// Persist the finalized table as a single CSV with a header row.
pub fn write_ground_truth(rows: &[GroundTruthRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(rows = rows.len(), path = %path.display(), "ground truth written");
    Ok(())
}
