//! Two batch pipelines sharing one crate:
//!
//! * [`proteins`] – membrane-protein extraction from a UniProt JSON export.
//! * [`data`] + [`report`] – oral-health survey filtering and the five
//!   descriptive chart reports shown by the viewer binary.

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod proteins;
pub mod report;
pub mod stats;
