use super::ChartOutcome;
use crate::config::{MSG_NO_SEX_DATA, SEX_CATEGORIES};
use crate::data::filter::{indicator_rows, with_categories};
use crate::data::model::{DentalRow, Indicator};
use crate::stats::BoxStats;

#[derive(Debug, Clone)]
pub struct SexGroup {
    pub category: String,
    pub stats: BoxStats,
    pub n: usize,
}

/// "All teeth lost" distribution per sex, groups in order of first appearance.
#[derive(Debug, Clone)]
pub struct SexComparison {
    pub groups: Vec<SexGroup>,
}

pub fn build_sex_comparison(rows: &[DentalRow]) -> ChartOutcome<SexComparison> {
    let subset = with_categories(indicator_rows(rows, Indicator::AllTeethLost), &SEX_CATEGORIES);

    let mut grouped: Vec<(&str, Vec<f64>)> = Vec::new();
    for row in subset {
        match grouped.iter_mut().find(|(c, _)| *c == row.category) {
            Some((_, values)) => values.push(row.value),
            None => grouped.push((row.category.as_str(), vec![row.value])),
        }
    }

    let groups: Vec<SexGroup> = grouped
        .into_iter()
        .filter_map(|(category, values)| {
            Some(SexGroup {
                category: category.to_string(),
                stats: BoxStats::from_values(&values)?,
                n: values.len(),
            })
        })
        .collect();

    if groups.is_empty() {
        return ChartOutcome::Skipped(MSG_NO_SEX_DATA);
    }
    ChartOutcome::Ready(SexComparison { groups })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dental(indicator: Indicator, category: &str, value: f64) -> DentalRow {
        DentalRow {
            location: Some("Ohio".into()),
            question: indicator.question().into(),
            category: category.into(),
            value,
        }
    }

    #[test]
    fn test_groups_in_appearance_order() {
        let rows = vec![
            dental(Indicator::AllTeethLost, "Female", 12.0),
            dental(Indicator::AllTeethLost, "Male", 14.0),
            dental(Indicator::AllTeethLost, "Female", 16.0),
            dental(Indicator::AllTeethLost, "Overall", 99.0),
            dental(Indicator::SixOrMoreLost, "Male", 40.0),
        ];
        let cmp = build_sex_comparison(&rows).ready().cloned().unwrap();
        let cats: Vec<&str> = cmp.groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(cats, vec!["Female", "Male"]);
        assert_eq!(cmp.groups[0].n, 2);
        assert_eq!(cmp.groups[0].stats.median, 14.0);
    }

    #[test]
    fn test_no_sex_rows_skips() {
        let rows = vec![
            dental(Indicator::AllTeethLost, "Overall", 12.0),
            dental(Indicator::SixOrMoreLost, "Male", 40.0),
        ];
        assert_eq!(build_sex_comparison(&rows).fallback_message(), Some(MSG_NO_SEX_DATA));
    }
}
