use std::io::Read;
use std::path::Path;

use super::model::{SurveyRow, SurveyTable};
use crate::config::REQUIRED_COLUMNS;
use crate::error::SurveyError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the survey table from a UTF-8, comma-separated file with headers.
pub fn load_survey(path: &Path) -> Result<SurveyTable, SurveyError> {
    let reader = csv::Reader::from_path(path)?;
    let table = read_table(reader)?;
    log::info!("Loaded {} survey rows from {}", table.len(), path.display());
    Ok(table)
}

/// Same as [`load_survey`] for any byte source.
pub fn load_survey_from_reader<R: Read>(source: R) -> Result<SurveyTable, SurveyError> {
    read_table(csv::Reader::from_reader(source))
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<SurveyTable, SurveyError> {
    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(SurveyError::MissingColumn(required.to_string()));
        }
    }

    let rows = reader
        .deserialize::<SurveyRow>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SurveyTable { rows })
}
