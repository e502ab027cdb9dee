use std::{collections::HashSet, fs, path::Path};

use tracing::info;

use crate::{domain::CenterDirectory, errors::HemolinkError};

/// Loads a center directory from a JSON array of centers.
///
/// Rejects empty directories and duplicate center identifiers.
pub fn load_directory_from_file(path: &Path) -> Result<CenterDirectory, HemolinkError> {
    let data = fs::read_to_string(path)?;
    let directory: CenterDirectory = serde_json::from_str(&data)?;
    if directory.is_empty() {
        return Err(HemolinkError::InvalidDirectory(format!(
            "{} lists no centers",
            path.display()
        )));
    }
    let mut seen = HashSet::new();
    for center in directory.centers() {
        if !seen.insert(center.id.as_str()) {
            return Err(HemolinkError::InvalidDirectory(format!(
                "duplicate center id `{}`",
                center.id
            )));
        }
    }
    info!(path = %path.display(), centers = directory.len(), "center directory loaded");
    Ok(directory)
}

/// Writes `directory` as pretty JSON, staging through a temporary file.
pub fn save_directory_to_file(directory: &CenterDirectory, path: &Path) -> Result<(), HemolinkError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(directory)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}
