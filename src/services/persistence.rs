use std::fs;
use std::path::Path;

use crate::error::{ClaimError, Result};

/// Reads the free-text requirement document.
pub fn read_requirement(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ClaimError::RequirementRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `xml` to `path`, replacing whatever was there.
pub fn save_claim_xml(xml: &str, path: &Path) -> Result<()> {
    fs::write(path, xml).map_err(|source| ClaimError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = xml.len(), "Claim XML saved");
    Ok(())
}
