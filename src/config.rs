//! Fixed inputs of both pipelines: file locations, indicator questions,
//! demographic groups and console messages.

// ---------------------------------------------------------------------------
// Membrane-protein extractor
// ---------------------------------------------------------------------------

pub const PROTEIN_INPUT: &str = "PG_data.json";
pub const PROTEIN_OUTPUT: &str = "proteinas_membrana.tsv";

pub const SUBCELLULAR_LOCATION: &str = "SUBCELLULAR LOCATION";
pub const MEMBRANE_KEYWORDS: [&str; 2] = ["outer membrane", "inner membrane"];

/// Characters of the sequence shown on the console before the ellipsis.
pub const CONSOLE_SEQUENCE_CHARS: usize = 30;

pub const HIT_COLUMNS: [&str; 5] = ["Conteo", "ID", "Ubicacion", "Descripcion", "Secuencia"];

// ---------------------------------------------------------------------------
// Survey viewer
// ---------------------------------------------------------------------------

pub const SURVEY_INPUT: &str = "../Datos/Enf_USA.csv";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "LocationDesc",
    "Topic",
    "Question",
    "Response",
    "Stratification1",
    "DataValue",
];

pub const ORAL_HEALTH_TOPIC: &str = "Oral Health";
pub const TEETH_KEYWORD: &str = "teeth";

/// Categories treated as missing in addition to blank text.
pub const SENTINEL_CATEGORIES: [&str; 2] = ["Unknown", "Data not available"];

pub const SEX_CATEGORIES: [&str; 2] = ["Male", "Female"];
pub const RACE_CATEGORIES: [&str; 3] = ["Hispanic", "White, non-Hispanic", "Black, non-Hispanic"];

pub const COGNITIVE_TOPIC: &str = "cognitive health";
pub const COGNITIVE_QUESTION: &str =
    "Subjective cognitive decline among adults aged 45 years and older";

pub const MSG_NO_PAIR_DATA: &str = "No hay datos suficientes para el gráfico 1.";
pub const MSG_NO_SEX_DATA: &str = "No hay datos de sexo para 'All teeth lost'.";
pub const MSG_NO_HEATMAP_DATA: &str = "No hay datos suficientes para el gráfico 3.";
pub const MSG_NO_RACE_DATA: &str = "No hay datos raciales suficientes para el gráfico 4.";
pub const MSG_NO_COGNITIVE_DATA: &str = "No se encontró información de salud cognitiva.";
pub const MSG_NO_COMMON_STATES: &str = "No hay estados comunes entre pérdida dental y cognición.";
