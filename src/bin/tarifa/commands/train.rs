//! `tarifa train` - fit the pricing model and persist the artifact.

use crate::commands::resolve_model_path;
use crate::error::Result;
use colored::Colorize;
use std::path::Path;
use tarifa::data::{sample_orders, DataFrame, FEATURE_COLUMNS, TARGET_COLUMN};
use tarifa::tree::RandomForestRegressor;

/// Runs the train subcommand.
///
/// Fits a random forest on the CSV at `data_path` (or the built-in sample
/// rows when absent) and writes the artifact to `model_path` (or the
/// default location). An existing artifact is overwritten in place.
pub(crate) fn run(
    data_path: Option<&Path>,
    model_path: Option<&Path>,
    trees: usize,
    seed: Option<u64>,
) -> Result<()> {
    let dataset = match data_path {
        Some(path) => DataFrame::from_csv(path)?,
        None => sample_orders(),
    };

    // Missing columns surface here as the library's missing-column error;
    // no further schema validation is done.
    let x = dataset.select(&FEATURE_COLUMNS)?.to_matrix();
    let y = dataset.column(TARGET_COLUMN)?.clone();

    let mut forest = RandomForestRegressor::new(trees);
    if let Some(seed) = seed {
        forest = forest.with_random_state(seed);
    }
    forest.fit(&x, &y)?;

    let artifact = resolve_model_path(model_path)?;
    forest.save(&artifact)?;

    println!(
        "{} Model trained and saved to {}",
        "✓".green(),
        artifact.display()
    );
    Ok(())
}
