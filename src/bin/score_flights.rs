//! Score a snapshot of operational data and write the result artifacts.
//!
//! Usage: `score_flights [path/to/difficulty.toml]`
//!
//! Without an argument the standard config locations are searched and the
//! defaults apply. Writes `flight_summary.json` and `factor_weights.json`
//! under the configured output directory.

use anyhow::{Context, Result};
use std::env;
use std::fs;

use fdd_rust::config::RunConfig;
use fdd_rust::core::domain::DifficultyCategory;
use fdd_rust::io::loaders::SnapshotLoader;
use fdd_rust::pipeline::DifficultyPipeline;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => RunConfig::from_file(&path)?,
        None => RunConfig::from_default_location()?,
    };

    let snapshot = SnapshotLoader::new()
        .with_carrier(config.data.carrier.clone())
        .with_files(config.snapshot_files())
        .load_from_dir(&config.data.dir)
        .with_context(|| format!("failed to load snapshot from {}", config.data.dir.display()))?;

    let output = DifficultyPipeline::new()
        .run(&snapshot)
        .context("scoring run failed")?;

    fs::create_dir_all(&config.output.dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output.dir.display()
        )
    })?;

    let summary_path = config.output.dir.join(&config.output.summary_file);
    fs::write(
        &summary_path,
        serde_json::to_string_pretty(&output.summaries)?,
    )
    .with_context(|| format!("failed to write {}", summary_path.display()))?;

    let weights_path = config.output.dir.join(&config.output.weights_file);
    fs::write(&weights_path, serde_json::to_string_pretty(&output.weights)?)
        .with_context(|| format!("failed to write {}", weights_path.display()))?;

    let difficult = output
        .summaries
        .iter()
        .filter(|s| s.difficulty_category == DifficultyCategory::Difficult)
        .count();
    log::info!(
        "wrote {} flights across {} dates ({} difficult) to {}",
        output.summaries.len(),
        output.date_count(),
        difficult,
        config.output.dir.display()
    );
    log::info!("output fingerprint: {}", output.fingerprint);

    Ok(())
}
