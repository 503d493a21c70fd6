use std::path::Path;

use super::model::{ProteinExport, ProteinRecord};
use crate::error::ProteinError;

/// Read and parse a protein export from disk.
pub fn load_export(path: &Path) -> Result<Vec<ProteinRecord>, ProteinError> {
    let text = std::fs::read_to_string(path).map_err(ProteinError::Read)?;
    parse_export(&text)
}

/// Parse an export document. Fails when `results` is absent or any record
/// lacks `primaryAccession`.
pub fn parse_export(text: &str) -> Result<Vec<ProteinRecord>, ProteinError> {
    let export: ProteinExport = serde_json::from_str(text)?;
    log::debug!("Parsed {} protein records", export.results.len());
    Ok(export.results)
}
