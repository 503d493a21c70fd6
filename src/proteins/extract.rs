use super::model::{MembraneHit, ProteinRecord};
use crate::config::{MEMBRANE_KEYWORDS, SUBCELLULAR_LOCATION};

/// Whether a lower-cased location names an outer or inner membrane.
pub fn is_membrane_location(location: &str) -> bool {
    MEMBRANE_KEYWORDS.iter().any(|kw| location.contains(kw))
}

/// Collect one hit per (record × matching subcellular location).
///
/// Hits keep record order, then location order inside the comment list.
/// The counter advances once per hit, so records without a match consume no
/// ordinal.
pub fn extract_hits(records: &[ProteinRecord]) -> Vec<MembraneHit> {
    let mut hits = Vec::new();

    for record in records {
        for location in record.locations(SUBCELLULAR_LOCATION) {
            let location = location.to_lowercase();
            if !is_membrane_location(&location) {
                continue;
            }
            hits.push(MembraneHit {
                count: hits.len() + 1,
                accession: record.primary_accession.clone(),
                location,
                description: record.description().to_string(),
                sequence: record.sequence().to_string(),
            });
        }
    }

    hits
}
