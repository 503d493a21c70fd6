use super::aggregate::{pivot_indicator_means, IndicatorMatrix};
use super::ChartOutcome;
use crate::config::MSG_NO_PAIR_DATA;
use crate::data::model::{DentalRow, Indicator};
use crate::stats::{kde_1d, linear_fit, LinearFit};

/// Grid points of each diagonal density curve.
pub const DENSITY_STEPS: usize = 200;

/// What a single panel of the pair grid shows.
#[derive(Debug, Clone)]
pub enum PairPanel {
    /// Diagonal: density of one indicator. `None` when it has no spread.
    Density(Option<Vec<[f64; 2]>>),
    /// Off-diagonal: `[x, y]` points and the regression line through them.
    Scatter {
        points: Vec<[f64; 2]>,
        fit: Option<LinearFit>,
    },
}

/// Pairwise relationships between the three indicators, one point per state.
#[derive(Debug, Clone)]
pub struct PairGrid {
    pub matrix: IndicatorMatrix,
    /// `panels[row][col]`: `row` is the y variable, `col` the x variable.
    pub panels: Vec<Vec<PairPanel>>,
}

impl PairGrid {
    pub fn labels() -> [&'static str; 3] {
        Indicator::ALL.map(Indicator::label)
    }
}

pub fn build_pair_grid(rows: &[DentalRow]) -> ChartOutcome<PairGrid> {
    let matrix = pivot_indicator_means(rows);
    if matrix.is_empty() {
        return ChartOutcome::Skipped(MSG_NO_PAIR_DATA);
    }

    let columns: Vec<Vec<f64>> = Indicator::ALL.iter().map(|&i| matrix.column(i)).collect();
    let panels = (0..columns.len())
        .map(|row| {
            (0..columns.len())
                .map(|col| {
                    if row == col {
                        return PairPanel::Density(kde_1d(&columns[col], DENSITY_STEPS));
                    }
                    let (xs, ys) = (&columns[col], &columns[row]);
                    PairPanel::Scatter {
                        points: xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect(),
                        fit: linear_fit(xs, ys),
                    }
                })
                .collect()
        })
        .collect();

    ChartOutcome::Ready(PairGrid { matrix, panels })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dental(state: &str, indicator: Indicator, value: f64) -> DentalRow {
        DentalRow {
            location: Some(state.into()),
            question: indicator.question().into(),
            category: "Overall".into(),
            value,
        }
    }

    #[test]
    fn test_empty_input_skips() {
        let outcome = build_pair_grid(&[]);
        assert_eq!(outcome.fallback_message(), Some(MSG_NO_PAIR_DATA));
    }

    #[test]
    fn test_grid_layout() {
        let mut rows = Vec::new();
        for (k, state) in ["Iowa", "Ohio", "Utah"].iter().enumerate() {
            let k = k as f64;
            rows.push(dental(state, Indicator::AllTeethLost, 10.0 + k));
            rows.push(dental(state, Indicator::SixOrMoreLost, 30.0 + 2.0 * k));
            rows.push(dental(state, Indicator::NoTeethLost, 60.0 - k));
        }

        let grid = build_pair_grid(&rows).ready().cloned().unwrap();
        assert_eq!(grid.matrix.len(), 3);
        assert_eq!(grid.panels.len(), 3);
        assert!(grid.panels.iter().all(|r| r.len() == 3));
        assert!(matches!(grid.panels[1][1], PairPanel::Density(Some(_))));

        // row 1 = "6+ lost" on y, col 0 = "All lost" on x: slope 2.
        match &grid.panels[1][0] {
            PairPanel::Scatter { points, fit } => {
                assert_eq!(points[0], [10.0, 30.0]);
                assert!((fit.unwrap().slope - 2.0).abs() < 1e-9);
            }
            other => panic!("unexpected panel {other:?}"),
        }
        assert_eq!(PairGrid::labels()[2], "No lost (18–64)");
    }
}
