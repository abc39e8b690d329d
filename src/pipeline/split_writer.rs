use std::fs;
use std::path::Path;

use tracing::debug;

use crate::constants::PARTICIPANT_FILE_PREFIX;
use crate::error::Result;
use crate::pipeline::normalize::{normalize_row, ParticipantId};
use crate::pipeline::table::PatientTable;

/// File name of one persisted record, derived from its identifier.
pub fn participant_file_name(id: ParticipantId) -> String {
    format!("{PARTICIPANT_FILE_PREFIX}{id}.json")
}

/// Write every row of `table` as an individually named JSON record file.
///
/// Identifiers are an explicit accumulator: the pass starts at `start_id`,
/// increments by one per row in table order, and the next unused identifier
/// is returned so passes could be chained. The target directory is created
/// before any writes; colliding file names are silently overwritten, so a
/// re-run against unchanged input reproduces the directory byte for byte.
pub fn write_split(
    table: &PatientTable,
    out_dir: &Path,
    start_id: ParticipantId,
) -> Result<ParticipantId> {
    fs::create_dir_all(out_dir)?;

    let mut next_id = start_id;
    for row in table.rows() {
        let record = normalize_row(row, next_id)?;
        let path = out_dir.join(participant_file_name(next_id));
        fs::write(&path, serde_json::to_string(&record)?)?;
        next_id += 1;
    }

    debug!(
        split = %table.split(),
        written = next_id - start_id,
        dir = %out_dir.display(),
        "split written"
    );
    Ok(next_id)
}
