use std::env;
use std::path::PathBuf;

use crate::constants;

/// Optional API tokens for the downstream retrieval/evaluation collaborators.
///
/// Resolved once at startup from the process environment (after `main` has
/// loaded a local `.env` file if present). The record transformation itself
/// never reads these; absence of either is not an error at this stage.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub openai_api_key: Option<String>,
    pub huggingface_token: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            huggingface_token: env::var("HUGGINGFACE_TOKEN").ok(),
        }
    }
}

/// Filesystem layout of the conversion run.
///
/// The binary always uses `Default` (the fixed constants); tests point the
/// whole layout into a temporary directory.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub train_csv: PathBuf,
    pub test_csv: PathBuf,
    pub train_dir: PathBuf,
    pub test_dir: PathBuf,
    pub ground_truth_csv: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            train_csv: PathBuf::from(constants::TRAIN_CSV),
            test_csv: PathBuf::from(constants::TEST_CSV),
            train_dir: PathBuf::from(constants::TRAIN_DIR),
            test_dir: PathBuf::from(constants::TEST_DIR),
            ground_truth_csv: PathBuf::from(constants::GROUND_TRUTH_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_match_fixed_layout() {
        let paths = DatasetPaths::default();
        assert_eq!(paths.train_csv, PathBuf::from(constants::TRAIN_CSV));
        assert_eq!(paths.ground_truth_csv, PathBuf::from(constants::GROUND_TRUTH_FILE));
        // Input root and output root deliberately differ in casing.
        assert!(paths.test_csv.to_string_lossy().contains("DDXplus"));
        assert!(paths.test_dir.to_string_lossy().contains("DDXPlus"));
    }
}
