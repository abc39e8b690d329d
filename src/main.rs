use anyhow::Result;
use tracing::info;

use ddx_preprocess::config::{DatasetPaths, Secrets};
use ddx_preprocess::logging;
use ddx_preprocess::pipeline;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Keep the guard alive so buffered file logs flush on exit
    let _guard = logging::init_logging();

    // Tokens are used by downstream consumers of the converted dataset, not
    // by the conversion itself. Resolved once here; only presence is logged.
    let secrets = Secrets::from_env();
    info!(
        openai_api_key = secrets.openai_api_key.is_some(),
        huggingface_token = secrets.huggingface_token.is_some(),
        "resolved optional API tokens"
    );

    let paths = DatasetPaths::default();
    let summary = pipeline::run(&paths)?;

    println!(
        "✅ Wrote {} train JSONs to {}",
        summary.train_written,
        paths.train_dir.display()
    );
    println!(
        "✅ Wrote {} test JSONs to {}",
        summary.test_written,
        paths.test_dir.display()
    );
    println!("📊 Ground truth saved to {}", summary.ground_truth_path.display());

    Ok(())
}
