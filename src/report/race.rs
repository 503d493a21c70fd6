use super::ChartOutcome;
use crate::config::{MSG_NO_RACE_DATA, RACE_CATEGORIES};
use crate::data::filter::with_categories;
use crate::data::model::{DentalRow, Indicator};
use crate::stats::{mean, sample_std};

/// Mean ± standard deviation of one (indicator, race) group.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceBar {
    pub indicator: Indicator,
    pub race: &'static str,
    pub mean: f64,
    /// Absent for single-value groups.
    pub sd: Option<f64>,
    pub n: usize,
}

/// Grouped bars: indicators on the axis, races as the hue.
#[derive(Debug, Clone)]
pub struct RaceBars {
    pub bars: Vec<RaceBar>,
}

impl RaceBars {
    pub fn races() -> [&'static str; 3] {
        RACE_CATEGORIES
    }
}

pub fn build_race_bars(rows: &[DentalRow]) -> ChartOutcome<RaceBars> {
    let subset = with_categories(rows, &RACE_CATEGORIES);

    let mut bars = Vec::new();
    for indicator in Indicator::ALL {
        for race in RACE_CATEGORIES {
            let values: Vec<f64> = subset
                .iter()
                .filter(|r| r.category == race && r.question == indicator.question())
                .map(|r| r.value)
                .collect();
            let Some(m) = mean(&values) else {
                continue;
            };
            bars.push(RaceBar {
                indicator,
                race,
                mean: m,
                sd: sample_std(&values),
                n: values.len(),
            });
        }
    }

    if bars.is_empty() {
        return ChartOutcome::Skipped(MSG_NO_RACE_DATA);
    }
    ChartOutcome::Ready(RaceBars { bars })
}
