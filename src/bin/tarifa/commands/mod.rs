//! Subcommand implementations.

pub(crate) mod predict;
pub(crate) mod train;

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

/// Default artifact location: `model.bin` next to the executable.
///
/// The artifact path must resolve the same way for both subcommands
/// regardless of the working directory they run from.
pub(crate) fn default_model_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        CliError::NoDefaultModelPath("executable has no parent directory".to_string())
    })?;
    Ok(dir.join("model.bin"))
}

/// Resolves the artifact path from an optional override.
pub(crate) fn resolve_model_path(model: Option<&Path>) -> Result<PathBuf> {
    match model {
        Some(path) => Ok(path.to_path_buf()),
        None => default_model_path(),
    }
}
