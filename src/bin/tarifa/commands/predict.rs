//! `tarifa predict` - load the artifact and price one shipment.

use crate::commands::resolve_model_path;
use crate::error::{CliError, Result};
use std::path::Path;
use tarifa::data::{DataFrame, FEATURE_COLUMNS};
use tarifa::primitives::Vector;
use tarifa::tree::RandomForestRegressor;

fn parse_feature(arg: &'static str, value: &str) -> Result<f32> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidArgument {
            arg,
            value: value.to_string(),
            expected: "a number",
        })
}

/// Runs the predict subcommand.
///
/// Arguments are parsed here rather than by clap so a malformed value is
/// reported through the top-level `Error:` handler. The single-row feature
/// table uses the same named columns, in the same order, as training.
pub(crate) fn run(
    shipment_type: &str,
    length: &str,
    weight: &str,
    distance: &str,
    model_path: Option<&Path>,
) -> Result<()> {
    let shipment_type: i64 =
        shipment_type
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidArgument {
                arg: "TYPE",
                value: shipment_type.to_string(),
                expected: "an integer category code",
            })?;
    let length = parse_feature("LENGTH", length)?;
    let weight = parse_feature("WEIGHT", weight)?;
    let distance = parse_feature("DISTANCE", distance)?;

    let artifact = resolve_model_path(model_path)?;
    let forest = RandomForestRegressor::load(&artifact)?;

    let values = [shipment_type as f32, length, weight, distance];
    let columns = FEATURE_COLUMNS
        .iter()
        .zip(values)
        .map(|(name, value)| ((*name).to_string(), Vector::from_slice(&[value])))
        .collect();
    let row = DataFrame::new(columns)?;

    let predictions = forest.predict_checked(&row.to_matrix())?;
    println!("{}", predictions[0]);
    Ok(())
}
