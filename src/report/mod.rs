//! The five survey report blocks.
//!
//! Each block is a pure builder over the filtered dental rows returning a
//! [`ChartOutcome`]: either the data a chart needs, or the fallback message
//! printed instead of rendering. Blocks never depend on each other.

pub mod aggregate;
pub mod cognitive;
pub mod heatmap;
pub mod pairs;
pub mod race;
pub mod sex;

use crate::data::filter::filter_dental;
use crate::data::model::SurveyTable;

use cognitive::{build_cognitive, CognitiveComparison};
use heatmap::{build_heatmap, StateHeatmap};
use pairs::{build_pair_grid, PairGrid};
use race::{build_race_bars, RaceBars};
use sex::{build_sex_comparison, SexComparison};

/// Result of one report block.
#[derive(Debug, Clone)]
pub enum ChartOutcome<T> {
    Ready(T),
    /// The block's governing filter came up empty; holds the console message.
    Skipped(&'static str),
}

impl<T> ChartOutcome<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartOutcome::Ready(data) => Some(data),
            ChartOutcome::Skipped(_) => None,
        }
    }

    pub fn fallback_message(&self) -> Option<&'static str> {
        match self {
            ChartOutcome::Ready(_) => None,
            ChartOutcome::Skipped(msg) => Some(*msg),
        }
    }
}

/// All five blocks computed from one survey table.
#[derive(Debug, Clone)]
pub struct SurveyReport {
    pub survey_rows: usize,
    pub dental_rows: usize,
    pub pair_grid: ChartOutcome<PairGrid>,
    pub sex: ChartOutcome<SexComparison>,
    pub heatmap: ChartOutcome<StateHeatmap>,
    pub race: ChartOutcome<RaceBars>,
    pub cognitive: ChartOutcome<CognitiveComparison>,
}

impl SurveyReport {
    pub fn build(table: &SurveyTable) -> Self {
        let dental = filter_dental(&table.rows);

        let report = SurveyReport {
            survey_rows: table.len(),
            dental_rows: dental.len(),
            pair_grid: build_pair_grid(&dental),
            sex: build_sex_comparison(&dental),
            heatmap: build_heatmap(&dental),
            race: build_race_bars(&dental),
            cognitive: build_cognitive(&table.rows, &dental),
        };

        for msg in report.fallback_messages() {
            log::warn!("Report block skipped: {msg}");
        }
        report
    }

    fn fallback_messages(&self) -> Vec<&'static str> {
        [
            self.pair_grid.fallback_message(),
            self.sex.fallback_message(),
            self.heatmap.fallback_message(),
            self.race.fallback_message(),
            self.cognitive.fallback_message(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Console output in block order: fallback messages, then the
    /// correlation line when block 5 rendered.
    pub fn console_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .fallback_messages()
            .into_iter()
            .map(String::from)
            .collect();
        if let Some(cmp) = self.cognitive.ready() {
            lines.push(cmp.correlation_line());
        }
        lines
    }

    pub fn print_console(&self) {
        for line in self.console_lines() {
            println!("{line}");
        }
    }
}
