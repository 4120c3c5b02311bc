// ==========================================
// Medicine Import - batch entry point
// ==========================================
// Flow: connect store → run import → report outcome
// ==========================================

use anyhow::Context;
use medicine_import::importer::ImportError;
use medicine_import::{
    logging, ImportConfig, ImportOutcome, ImportPipeline, ProductImporter, SqliteProductRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", medicine_import::APP_NAME, medicine_import::VERSION);
    tracing::info!("==================================================");

    let config = ImportConfig::default();
    tracing::debug!(config = ?config, "run configuration");

    // store first: a connection failure aborts before the file is read
    let repo = match SqliteProductRepository::connect(&config.store_path) {
        Ok(repo) => {
            tracing::info!(store = %config.store_path, "connected to store");
            repo
        }
        Err(e) => {
            let err = ImportError::from(e);
            tracing::error!(store = %config.store_path, error = %err, "error connecting to store");
            return Err(err).context("store connection");
        }
    };

    let mut pipeline = ImportPipeline::with_defaults(config, repo).await?;
    let report = match pipeline.run().await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(state = %pipeline.state(), error = %e, "import aborted");
            return Err(e).context("import run");
        }
    };

    if let Ok(json) = serde_json::to_string(&report) {
        tracing::debug!(report = %json, "import report");
    }

    match report.outcome {
        ImportOutcome::Inserted(count) => {
            tracing::info!(count, skipped = report.skipped_count(), "data successfully inserted");
        }
        ImportOutcome::NoValidData => {
            tracing::info!(skipped = report.skipped_count(), "no valid data to insert");
        }
    }

    Ok(())
}
