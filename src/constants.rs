/// Path and column-name constants to ensure consistency across the codebase
/// The dataset layout is fixed; there are no CLI flags to override it.

// Input files (already unpacked DDXPlus release CSVs, no extension)
pub const TRAIN_CSV: &str = "./dataset/DDXplus/release_train_patients";
pub const TEST_CSV: &str = "./dataset/DDXplus/release_test_patients";
pub const VALIDATE_CSV: &str = "./dataset/DDXplus/release_validate_patients";

// Output locations. The input root is spelled "DDXplus" and the output root
// "DDXPlus"; downstream consumers expect exactly this casing.
pub const TRAIN_DIR: &str = "./dataset/DDXPlus/train";
pub const TEST_DIR: &str = "./dataset/DDXPlus/test";
pub const GROUND_TRUTH_FILE: &str = "./dataset/DDXPlus_ground_truth.csv";

// Column headers in the DDXPlus release CSVs
pub const COL_AGE: &str = "AGE";
pub const COL_SEX: &str = "SEX";
pub const COL_PATHOLOGY: &str = "PATHOLOGY";
pub const COL_DIFFERENTIAL: &str = "DIFFERENTIAL_DIAGNOSIS";
pub const COL_EVIDENCES: &str = "EVIDENCES";
pub const COL_INITIAL_EVIDENCE: &str = "INITIAL_EVIDENCE";

// Per-record output files are named <prefix><participant no.>.json
pub const PARTICIPANT_FILE_PREFIX: &str = "participant_";
