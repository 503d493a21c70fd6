use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::model::MembraneHit;
use crate::config::HIT_COLUMNS;
use crate::error::ProteinError;

/// Console rendering: header plus one tab-separated line per hit, with
/// truncated sequences.
pub fn console_lines(hits: &[MembraneHit]) -> Vec<String> {
    let mut lines = Vec::with_capacity(hits.len() + 1);
    lines.push(HIT_COLUMNS.join("\t"));
    lines.extend(hits.iter().map(|h| {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            h.count,
            h.accession,
            h.location,
            h.description,
            h.console_sequence()
        )
    }));
    lines
}

/// Write the full-fidelity TSV (untruncated sequences, no quoting).
pub fn write_tsv<W: Write>(hits: &[MembraneHit], writer: W) -> Result<(), ProteinError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(HIT_COLUMNS)?;
    for h in hits {
        let count = h.count.to_string();
        wtr.write_record([
            count.as_str(),
            h.accession.as_str(),
            h.location.as_str(),
            h.description.as_str(),
            h.sequence.as_str(),
        ])?;
    }
    wtr.flush().map_err(ProteinError::Write)?;
    Ok(())
}

/// Create `path` and write the TSV into it.
pub fn save_tsv(path: &Path, hits: &[MembraneHit]) -> Result<(), ProteinError> {
    let file = File::create(path).map_err(ProteinError::Write)?;
    write_tsv(hits, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits() -> Vec<MembraneHit> {
        vec![
            MembraneHit {
                count: 1,
                accession: "P0A910".into(),
                location: "cell outer membrane".into(),
                description: "Outer membrane protein A".into(),
                sequence: "MKKTAIAIAVALAGFATVAQAAPKDNTWYTGAKLGWSQ".into(),
            },
            MembraneHit {
                count: 2,
                accession: "P0A910".into(),
                location: "cell inner membrane".into(),
                description: "Outer membrane protein A".into(),
                sequence: "MKKTAIAIAVALAGFATVAQAAPKDNTWYTGAKLGWSQ".into(),
            },
            MembraneHit {
                count: 3,
                accession: "Q1".into(),
                location: "cell outer membrane".into(),
                description: String::new(),
                sequence: "MKV".into(),
            },
        ]
    }

    #[test]
    fn test_console_header() {
        let lines = console_lines(&[]);
        assert_eq!(lines, vec!["Conteo\tID\tUbicacion\tDescripcion\tSecuencia"]);
    }

    #[test]
    fn test_tsv_full_sequence() {
        let mut buf = Vec::new();
        write_tsv(&hits(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Conteo\tID\tUbicacion\tDescripcion\tSecuencia"));
        assert_eq!(
            lines.next(),
            Some("1\tP0A910\tcell outer membrane\tOuter membrane protein A\tMKKTAIAIAVALAGFATVAQAAPKDNTWYTGAKLGWSQ")
        );
        assert_eq!(lines.nth(1), Some("3\tQ1\tcell outer membrane\t\tMKV"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_console_and_tsv_share_rows() {
        let hits = hits();
        let console = console_lines(&hits);
        let mut buf = Vec::new();
        write_tsv(&hits, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let file_lines: Vec<&str> = text.lines().collect();

        assert_eq!(console.len(), file_lines.len());
        for (c, f) in console.iter().zip(&file_lines).skip(1) {
            let c: Vec<&str> = c.split('\t').collect();
            let f: Vec<&str> = f.split('\t').collect();
            assert_eq!(c[..4], f[..4]);

            let head: String = f[4].chars().take(30).collect();
            assert_eq!(c[4], format!("{head}..."));
        }
    }

    #[test]
    fn test_save_tsv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proteinas_membrana.tsv");
        save_tsv(&path, &hits()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_save_tsv_failure_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("proteinas_membrana.tsv");

        let err = save_tsv(&path, &hits()).unwrap_err();
        assert!(matches!(err, ProteinError::Write(_)));
        assert!(err.to_string().starts_with("failed to write hit table"));
    }
}
