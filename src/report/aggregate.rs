use std::collections::BTreeMap;

use crate::data::model::{DentalRow, Indicator};

/// Per-state mean, states in lexical order.
pub type StateMeans = BTreeMap<String, f64>;

/// Mean value per state over `(state, value)` pairs.
pub fn state_means<'a, I>(pairs: I) -> StateMeans
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut acc: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for (state, value) in pairs {
        let slot = acc.entry(state).or_insert((0.0, 0));
        slot.0 += value;
        slot.1 += 1;
    }
    acc.into_iter()
        .map(|(state, (sum, n))| (state.to_string(), sum / n as f64))
        .collect()
}

/// `(state, value)` pairs of dental rows that carry a state.
pub fn located<'a, I>(rows: I) -> impl Iterator<Item = (&'a str, f64)>
where
    I: IntoIterator<Item = &'a DentalRow>,
{
    rows.into_iter()
        .filter_map(|r| Some((r.location.as_deref()?, r.value)))
}

// ---------------------------------------------------------------------------
// IndicatorMatrix – state × indicator, complete rows only
// ---------------------------------------------------------------------------

/// One row per state, one column per [`Indicator`] in [`Indicator::ALL`]
/// order. States missing any indicator are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorMatrix {
    pub states: Vec<String>,
    pub values: Vec<[f64; 3]>,
}

impl IndicatorMatrix {
    fn from_partial(partial: BTreeMap<String, [Option<f64>; 3]>) -> Self {
        let mut matrix = IndicatorMatrix::default();
        for (state, cells) in partial {
            if let [Some(a), Some(b), Some(c)] = cells {
                matrix.states.push(state);
                matrix.values.push([a, b, c]);
            }
        }
        matrix
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn column(&self, indicator: Indicator) -> Vec<f64> {
        self.values.iter().map(|row| row[indicator.index()]).collect()
    }

    /// Smallest and largest cell, `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut cells = self.values.iter().flatten().cloned();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Pivot: mean per (state, indicator) in one pass, then drop incomplete states.
pub fn pivot_indicator_means(rows: &[DentalRow]) -> IndicatorMatrix {
    let mut acc: BTreeMap<(&str, Indicator), (f64, usize)> = BTreeMap::new();
    for row in rows {
        let (Some(state), Some(indicator)) =
            (row.location.as_deref(), Indicator::from_question(&row.question))
        else {
            continue;
        };
        let slot = acc.entry((state, indicator)).or_insert((0.0, 0));
        slot.0 += row.value;
        slot.1 += 1;
    }

    let mut partial: BTreeMap<String, [Option<f64>; 3]> = BTreeMap::new();
    for ((state, indicator), (sum, n)) in acc {
        partial.entry(state.to_string()).or_default()[indicator.index()] = Some(sum / n as f64);
    }
    IndicatorMatrix::from_partial(partial)
}

/// Outer-align three independently computed series, then drop incomplete states.
pub fn align_complete(series: [&StateMeans; 3]) -> IndicatorMatrix {
    let mut partial: BTreeMap<String, [Option<f64>; 3]> = BTreeMap::new();
    for (col, means) in series.iter().enumerate() {
        for (state, value) in means.iter() {
            partial.entry(state.clone()).or_default()[col] = Some(*value);
        }
    }
    IndicatorMatrix::from_partial(partial)
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
    fn test_state_means_sorted() {
        let means = state_means([("Utah", 2.0), ("Ohio", 1.0), ("Utah", 4.0)]);
        let got: Vec<(&str, f64)> = means.iter().map(|(s, v)| (s.as_str(), *v)).collect();
        assert_eq!(got, vec![("Ohio", 1.0), ("Utah", 3.0)]);
    }

    #[test]
    fn test_pivot_drops_incomplete_states() {
        let mut rows = Vec::new();
        for ind in Indicator::ALL {
            rows.push(dental("Ohio", ind, 10.0));
            rows.push(dental("Ohio", ind, 20.0));
        }
        rows.push(dental("Utah", Indicator::AllTeethLost, 5.0));
        rows.push(DentalRow {
            location: None,
            ..dental("x", Indicator::NoTeethLost, 1.0)
        });

        let m = pivot_indicator_means(&rows);
        assert_eq!(m.states, vec!["Ohio"]);
        assert_eq!(m.values, vec![[15.0, 15.0, 15.0]]);
    }

    #[test]
    fn test_align_matches_pivot() {
        let rows: Vec<DentalRow> = ["Iowa", "Ohio"]
            .iter()
            .flat_map(|s| {
                Indicator::ALL
                    .into_iter()
                    .enumerate()
                    .map(move |(i, ind)| dental(s, ind, i as f64 + 1.0))
            })
            .collect();

        let per: Vec<StateMeans> = Indicator::ALL
            .iter()
            .map(|ind| {
                state_means(located(rows.iter().filter(|r| r.question == ind.question())))
            })
            .collect();
        let aligned = align_complete([&per[0], &per[1], &per[2]]);

        assert_eq!(aligned, pivot_indicator_means(&rows));
        assert_eq!(aligned.column(Indicator::SixOrMoreLost), vec![2.0, 2.0]);
        assert_eq!(aligned.range(), Some((1.0, 3.0)));
    }
}
