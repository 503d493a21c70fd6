use super::aggregate::{align_complete, located, state_means, IndicatorMatrix, StateMeans};
use super::ChartOutcome;
use crate::config::MSG_NO_HEATMAP_DATA;
use crate::data::filter::indicator_rows;
use crate::data::model::{DentalRow, Indicator};

pub const COLOR_BAR_LABEL: &str = "Porcentaje promedio (%)";

/// State × indicator matrix of mean values.
#[derive(Debug, Clone)]
pub struct StateHeatmap {
    pub matrix: IndicatorMatrix,
    pub min: f64,
    pub max: f64,
}

impl StateHeatmap {
    /// Position of `value` on the colour scale, `0.0..=1.0`.
    pub fn normalized(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

pub fn build_heatmap(rows: &[DentalRow]) -> ChartOutcome<StateHeatmap> {
    let series: Vec<StateMeans> = Indicator::ALL
        .iter()
        .map(|&ind| state_means(located(indicator_rows(rows, ind))))
        .collect();
    let matrix = align_complete([&series[0], &series[1], &series[2]]);

    let Some((min, max)) = matrix.range() else {
        return ChartOutcome::Skipped(MSG_NO_HEATMAP_DATA);
    };
    ChartOutcome::Ready(StateHeatmap { matrix, min, max })
}
