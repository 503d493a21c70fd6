use super::aggregate::{located, state_means};
use super::ChartOutcome;
use crate::config::{MSG_NO_COGNITIVE_DATA, MSG_NO_COMMON_STATES};
use crate::data::filter::{cognitive_decline, indicator_rows};
use crate::data::model::{DentalRow, Indicator, SurveyRow};
use crate::stats::{kde_2d, pearson, DensityGrid};

pub const DENSITY_STEPS: usize = 60;
pub const DENSITY_LEVELS: usize = 15;
/// Share of the total probability mass, lowest densities first, left undrawn.
pub const DENSITY_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct StatePair {
    pub state: String,
    pub teeth_mean: f64,
    pub cognitive_mean: f64,
}

/// A filled rectangle of the quantised density, `level` in `1..=DENSITY_LEVELS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityCell {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub level: usize,
}

/// Per-state tooth loss against subjective cognitive decline.
#[derive(Debug, Clone)]
pub struct CognitiveComparison {
    pub merged: Vec<StatePair>,
    pub density: Option<DensityGrid>,
    pub correlation: f64,
}

impl CognitiveComparison {
    pub fn teeth(&self) -> Vec<f64> {
        self.merged.iter().map(|p| p.teeth_mean).collect()
    }

    pub fn cognitive(&self) -> Vec<f64> {
        self.merged.iter().map(|p| p.cognitive_mean).collect()
    }

    pub fn correlation_line(&self) -> String {
        let r = if self.correlation.is_nan() {
            "nan".to_string()
        } else {
            format!("{:.3}", self.correlation)
        };
        format!("Correlación pérdida dental vs declive cognitivo: r={r}")
    }

    /// Density quantised into filled bands by share of the peak; the cells
    /// holding the lowest 5 % of the mass are dropped.
    pub fn density_cells(&self) -> Vec<DensityCell> {
        let Some(grid) = &self.density else {
            return Vec::new();
        };
        let peak = grid.max();
        if peak <= 0.0 || grid.xs.len() < 2 || grid.ys.len() < 2 {
            return Vec::new();
        }
        let cutoff = grid.mass_cutoff(DENSITY_THRESHOLD);
        let half_dx = (grid.xs[1] - grid.xs[0]) / 2.0;
        let half_dy = (grid.ys[1] - grid.ys[0]) / 2.0;

        let mut cells = Vec::new();
        for (j, row) in grid.density.iter().enumerate() {
            for (i, &d) in row.iter().enumerate() {
                if d < cutoff {
                    continue;
                }
                let share = d / peak;
                let level = ((share * DENSITY_LEVELS as f64).ceil() as usize).clamp(1, DENSITY_LEVELS);
                let (x, y) = (grid.xs[i], grid.ys[j]);
                cells.push(DensityCell {
                    x: [x - half_dx, x + half_dx],
                    y: [y - half_dy, y + half_dy],
                    level,
                });
            }
        }
        cells
    }
}

pub fn build_cognitive(survey: &[SurveyRow], dental: &[DentalRow]) -> ChartOutcome<CognitiveComparison> {
    let decline = cognitive_decline(survey);
    if decline.is_empty() {
        return ChartOutcome::Skipped(MSG_NO_COGNITIVE_DATA);
    }

    let cognitive = state_means(
        decline
            .iter()
            .filter_map(|r| Some((r.location.as_deref()?, r.numeric_value()?))),
    );
    let teeth = state_means(located(indicator_rows(dental, Indicator::AllTeethLost)));

    let merged: Vec<StatePair> = teeth
        .into_iter()
        .filter_map(|(state, teeth_mean)| {
            let cognitive_mean = *cognitive.get(&state)?;
            Some(StatePair {
                state,
                teeth_mean,
                cognitive_mean,
            })
        })
        .collect();
    if merged.is_empty() {
        return ChartOutcome::Skipped(MSG_NO_COMMON_STATES);
    }

    let xs: Vec<f64> = merged.iter().map(|p| p.teeth_mean).collect();
    let ys: Vec<f64> = merged.iter().map(|p| p.cognitive_mean).collect();
    ChartOutcome::Ready(CognitiveComparison {
        density: kde_2d(&xs, &ys, DENSITY_STEPS),
        correlation: pearson(&xs, &ys),
        merged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COGNITIVE_QUESTION;

    fn teeth(state: &str, value: f64) -> DentalRow {
        DentalRow {
            location: Some(state.into()),
            question: Indicator::AllTeethLost.question().into(),
            category: "Overall".into(),
            value,
        }
    }

    fn cognitive(state: &str, value: &str) -> SurveyRow {
        SurveyRow {
            location: Some(state.into()),
            topic: Some("Cognitive Health and Caregiving".into()),
            question: Some(COGNITIVE_QUESTION.into()),
            response: None,
            stratification: Some("Overall".into()),
            data_value: Some(value.into()),
        }
    }

    #[test]
    fn test_perfect_correlation() {
        let dental = vec![teeth("Iowa", 10.0), teeth("Ohio", 20.0), teeth("Utah", 30.0), teeth("Maine", 7.0)];
        let survey = vec![
            cognitive("Iowa", "5"),
            cognitive("Ohio", "10"),
            cognitive("Utah", "15"),
            cognitive("Texas", "99"),
        ];

        let cmp = build_cognitive(&survey, &dental).ready().cloned().unwrap();
        let states: Vec<&str> = cmp.merged.iter().map(|p| p.state.as_str()).collect();
        assert_eq!(states, vec!["Iowa", "Ohio", "Utah"]);
        assert_eq!(cmp.teeth(), vec![10.0, 20.0, 30.0]);
        assert_eq!(cmp.cognitive(), vec![5.0, 10.0, 15.0]);
        assert_eq!(
            cmp.correlation_line(),
            "Correlación pérdida dental vs declive cognitivo: r=1.000"
        );
        assert!(!cmp.density_cells().is_empty());
        assert!(cmp
            .density_cells()
            .iter()
            .all(|c| (1..=DENSITY_LEVELS).contains(&c.level)));

        let grid = cmp.density.as_ref().unwrap();
        let total: f64 = grid.density.iter().flatten().sum();
        let cutoff = grid.mass_cutoff(DENSITY_THRESHOLD);
        let kept: f64 = grid.density.iter().flatten().filter(|d| **d >= cutoff).sum();
        let kept_cells = grid.density.iter().flatten().filter(|d| **d >= cutoff).count();
        assert_eq!(cmp.density_cells().len(), kept_cells);
        assert!(kept >= 0.95 * total);
    }

    #[test]
    fn test_no_cognitive_rows() {
        let outcome = build_cognitive(&[], &[teeth("Iowa", 10.0)]);
        assert_eq!(outcome.fallback_message(), Some(MSG_NO_COGNITIVE_DATA));
    }

    #[test]
    fn test_no_common_states() {
        let outcome = build_cognitive(&[cognitive("Texas", "12")], &[teeth("Iowa", 10.0)]);
        assert_eq!(outcome.fallback_message(), Some(MSG_NO_COMMON_STATES));
    }

    #[test]
    fn test_single_state_has_no_density() {
        let cmp = build_cognitive(&[cognitive("Iowa", "12")], &[teeth("Iowa", 10.0)])
            .ready()
            .cloned()
            .unwrap();
        assert!(cmp.density.is_none());
        assert!(cmp.correlation.is_nan());
        assert_eq!(
            cmp.correlation_line(),
            "Correlación pérdida dental vs declive cognitivo: r=nan"
        );
        assert!(cmp.density_cells().is_empty());
    }
}
