use std::path::{Path, PathBuf};

use health_data::data::loader::load_survey;
use health_data::report::{ChartOutcome, SurveyReport};

// ---------------------------------------------------------------------------
// Report tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportTab {
    #[default]
    Pairs,
    Sex,
    Heatmap,
    Race,
    Cognitive,
}

impl ReportTab {
    pub const ALL: [ReportTab; 5] = [
        ReportTab::Pairs,
        ReportTab::Sex,
        ReportTab::Heatmap,
        ReportTab::Race,
        ReportTab::Cognitive,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportTab::Pairs => "1) Relaciones entre indicadores de pérdida dental",
            ReportTab::Sex => "2) Pérdida total de dientes (≥65) por sexo",
            ReportTab::Heatmap => "3) Indicadores dentales promedio por estado",
            ReportTab::Race => "4) Indicadores dentales por raza",
            ReportTab::Cognitive => "5) Pérdida dental vs deterioro cognitivo",
        }
    }

    /// Short label for the tab strip.
    pub fn short_title(self) -> &'static str {
        match self {
            ReportTab::Pairs => "1 Pares",
            ReportTab::Sex => "2 Sexo",
            ReportTab::Heatmap => "3 Estados",
            ReportTab::Race => "4 Raza",
            ReportTab::Cognitive => "5 Cognición",
        }
    }
}

fn outcome_status<T>(outcome: &ChartOutcome<T>, describe: impl Fn(&T) -> String) -> String {
    match outcome {
        ChartOutcome::Ready(data) => describe(data),
        ChartOutcome::Skipped(msg) => (*msg).to_string(),
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Reports of the loaded survey (None until a table is loaded).
    pub report: Option<SurveyReport>,

    /// File the current report was built from.
    pub source: Option<PathBuf>,

    /// Which report block the central panel shows.
    pub active_tab: ReportTab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn with_report(report: SurveyReport, source: PathBuf) -> Self {
        let mut state = Self::default();
        state.set_report(report, source);
        state
    }

    /// Ingest a freshly built report.
    pub fn set_report(&mut self, report: SurveyReport, source: PathBuf) {
        self.report = Some(report);
        self.source = Some(source);
        self.status_message = None;
    }

    /// Load a survey table, rebuild every block and print the console
    /// summary. Errors stay in the status bar; the previous report is kept.
    pub fn load_path(&mut self, path: &Path) {
        match load_survey(path) {
            Ok(table) => {
                let report = SurveyReport::build(&table);
                report.print_console();
                self.set_report(report, path.to_path_buf());
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
                    }
        }
    }

    /// One status line per block: what is drawn, or its fallback message.
    pub fn block_status(&self) -> Vec<(ReportTab, String)> {
        let Some(report) = &self.report else {
            return Vec::new();
        };
        vec![
            (
                ReportTab::Pairs,
                outcome_status(&report.pair_grid, |g| format!("{} estados", g.matrix.len())),
            ),
            (
                ReportTab::Sex,
                outcome_status(&report.sex, |s| {
                    let n: usize = s.groups.iter().map(|g| g.n).sum();
                    format!("{n} registros")
                }),
            ),
            (
                ReportTab::Heatmap,
                outcome_status(&report.heatmap, |h| format!("{} estados", h.matrix.len())),
            ),
            (
                ReportTab::Race,
                outcome_status(&report.race, |r| format!("{} barras", r.bars.len())),
            ),
            (
                ReportTab::Cognitive,
                outcome_status(&report.cognitive, |c| {
                    format!("{} estados, r={:.3}", c.merged.len(), c.correlation)
                }),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_data::config::{MSG_NO_COGNITIVE_DATA, MSG_NO_PAIR_DATA};
    use health_data::data::model::SurveyTable;

    #[test]
    fn test_empty_state() {
        let state = AppState::default();
        assert!(state.block_status().is_empty());
        assert_eq!(state.active_tab, ReportTab::Pairs);
    }

    #[test]
    fn test_block_status_reports_fallbacks() {
        let report = SurveyReport::build(&SurveyTable::default());
        let state = AppState::with_report(report, PathBuf::from("Enf_USA.csv"));

        let status = state.block_status();
        assert_eq!(status.len(), 5);
        assert_eq!(status[0], (ReportTab::Pairs, MSG_NO_PAIR_DATA.to_string()));
        assert_eq!(status[4].1, MSG_NO_COGNITIVE_DATA);
    }

    #[test]
    fn test_failed_load_keeps_previous_report() {
        let report = SurveyReport::build(&SurveyTable::default());
        let mut state = AppState::with_report(report, PathBuf::from("Enf_USA.csv"));
        state.active_tab = ReportTab::Race;

        state.load_path(Path::new("/nonexistent/other.csv"));
        assert!(state.report.is_some());
        assert_eq!(state.source.as_deref(), Some(Path::new("Enf_USA.csv")));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert_eq!(state.active_tab, ReportTab::Race);
    }
}
