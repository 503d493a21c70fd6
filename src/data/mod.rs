/// Survey data layer: row types, loading, and filtering.
///
/// Architecture:
/// ```text
///  Enf_USA.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → SurveyTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Oral Health / teeth / numeric / category → Vec<DentalRow>
///   └──────────┘
///        │
///        ▼
///     report     five independent chart blocks
/// ```

pub mod filter;
pub mod loader;
pub mod model;
