// Conversion pipeline: table loading, per-record split writing, ground truth
pub mod ground_truth;
pub mod normalize;
pub mod split_writer;
pub mod table;

use std::path::PathBuf;

use tracing::{info, info_span};

use crate::config::DatasetPaths;
use crate::error::Result;
use ground_truth::{build_ground_truth, write_ground_truth};
use split_writer::write_split;
use table::{PatientTable, Split};

/// Counts and locations reported after a successful run.
#[derive(Debug)]
pub struct RunSummary {
    pub train_written: usize,
    pub test_written: usize,
    pub ground_truth_path: PathBuf,
}

/// Run the whole conversion: train split, then test split, then the
/// ground-truth table built from the same loaded test table so row i of the
/// table always describes record file i. Each split numbers its records from
/// 1 independently. The first error aborts the run; output already written
/// by earlier stages is left in place.
pub fn run(paths: &DatasetPaths) -> Result<RunSummary> {
    let train = PatientTable::load(Split::Train, &paths.train_csv)?;
    {
        let span = info_span!("write_split", split = %Split::Train);
        let _enter = span.enter();
        write_split(&train, &paths.train_dir, 1)?;
        info!(records = train.len(), dir = %paths.train_dir.display(), "split persisted");
    }

    let test = PatientTable::load(Split::Test, &paths.test_csv)?;
    {
        let span = info_span!("write_split", split = %Split::Test);
        let _enter = span.enter();
        write_split(&test, &paths.test_dir, 1)?;
        info!(records = test.len(), dir = %paths.test_dir.display(), "split persisted");
    }

    let span = info_span!("ground_truth");
    let _enter = span.enter();
    let rows = build_ground_truth(&test)?;
    write_ground_truth(&rows, &paths.ground_truth_csv)?;
    info!(
        rows = rows.len(),
        path = %paths.ground_truth_csv.display(),
        "ground truth persisted"
    );

    Ok(RunSummary {
        train_written: train.len(),
        test_written: test.len(),
        ground_truth_path: paths.ground_truth_csv.clone(),
    })
}
