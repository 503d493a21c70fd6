use serde::Deserialize;

use crate::config::CONSOLE_SEQUENCE_CHARS;

// ---------------------------------------------------------------------------
// Export document (UniProt JSON, `results` orientation)
// ---------------------------------------------------------------------------

/// Top-level export document. `results` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ProteinExport {
    pub results: Vec<ProteinRecord>,
}

/// One protein entry. Only `primaryAccession` is mandatory; everything else
/// falls back to an empty value when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinRecord {
    pub primary_accession: String,
    #[serde(default)]
    pub protein_description: Option<ProteinDescription>,
    #[serde(default)]
    pub sequence: Option<TextValue>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinDescription {
    #[serde(default)]
    pub recommended_name: Option<RecommendedName>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedName {
    #[serde(default)]
    pub full_name: Option<TextValue>,
}

/// The `{ "value": ... }` wrapper used throughout the export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub comment_type: String,
    #[serde(default)]
    pub subcellular_locations: Vec<SubcellularLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubcellularLocation {
    #[serde(default)]
    pub location: Option<TextValue>,
}

impl ProteinRecord {
    /// Recommended full name, or `""`.
    pub fn description(&self) -> &str {
        self.protein_description
            .as_ref()
            .and_then(|d| d.recommended_name.as_ref())
            .and_then(|n| n.full_name.as_ref())
            .map(|v| v.value.as_str())
            .unwrap_or("")
    }

    /// Amino-acid sequence, or `""`.
    pub fn sequence(&self) -> &str {
        self.sequence.as_ref().map(|s| s.value.as_str()).unwrap_or("")
    }

    /// Location texts of every `commentType == kind` comment, in document order.
    pub fn locations<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.comments
            .iter()
            .filter(move |c| c.comment_type == kind)
            .flat_map(|c| c.subcellular_locations.iter())
            .filter_map(|l| l.location.as_ref())
            .map(|v| v.value.as_str())
    }
}

// ---------------------------------------------------------------------------
// MembraneHit – one output row
// ---------------------------------------------------------------------------

/// One (protein × matching location) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembraneHit {
    /// Global 1-based ordinal.
    pub count: usize,
    pub accession: String,
    /// Lower-cased location text.
    pub location: String,
    pub description: String,
    pub sequence: String,
}

impl MembraneHit {
    /// Sequence as shown on the console: the first 30 characters followed by
    /// `...`, appended even when nothing was cut.
    pub fn console_sequence(&self) -> String {
        let head: String = self.sequence.chars().take(CONSOLE_SEQUENCE_CHARS).collect();
        format!("{head}...")
    }
}
