//! Error types for the two pipelines.
//!
//! Both loaders fail fast: a malformed input aborts the run before any
//! output is produced.

use thiserror::Error;

/// Errors while reading the protein export or writing the hit table.
#[derive(Debug, Error)]
pub enum ProteinError {
    #[error("failed to read protein export: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write hit table: {0}")]
    Write(#[source] std::io::Error),

    /// Covers a missing `results` key and records without `primaryAccession`.
    #[error("malformed protein export: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write hit table: {0}")]
    Tsv(#[from] csv::Error),
}

/// Errors while loading the survey table.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("failed to read survey table: {0}")]
    Csv(#[from] csv::Error),

    #[error("survey table is missing column '{0}'")]
    MissingColumn(String),
}
