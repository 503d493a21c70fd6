/// Membrane-protein extraction.
///
/// ```text
///  PG_data.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse export → Vec<ProteinRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ extract   │  subcellular locations → Vec<MembraneHit>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  report   │  console lines (truncated) + TSV file (full)
///   └──────────┘
/// ```

pub mod extract;
pub mod loader;
pub mod model;
pub mod report;
