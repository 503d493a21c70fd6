use super::model::{DentalRow, Indicator, SurveyRow};
use crate::config::{
    COGNITIVE_QUESTION, COGNITIVE_TOPIC, ORAL_HEALTH_TOPIC, SENTINEL_CATEGORIES, TEETH_KEYWORD,
};

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A category is usable when it has visible text and is not a sentinel.
pub fn is_valid_category(category: &str) -> bool {
    !category.trim().is_empty() && !SENTINEL_CATEGORIES.contains(&category)
}

/// Oral-health rows about teeth with a numeric value and a usable category.
///
/// Feeding the result back through `SurveyRow::from` and this function again
/// yields the same rows.
pub fn filter_dental(rows: &[SurveyRow]) -> Vec<DentalRow> {
    let kept: Vec<DentalRow> = rows
        .iter()
        .filter(|r| r.topic.as_deref() == Some(ORAL_HEALTH_TOPIC))
        .filter_map(|r| {
            let question = r.question.as_deref()?;
            if !contains_ignore_case(question, TEETH_KEYWORD) {
                return None;
            }
            let category = r.category().filter(|c| is_valid_category(c))?;
            let value = r.numeric_value()?;
            Some(DentalRow {
                location: r.location.clone(),
                question: question.to_string(),
                category: category.to_string(),
                value,
            })
        })
        .collect();

    log::info!("Kept {} of {} rows as dental indicators", kept.len(), rows.len());
    kept
}

/// Rows answering exactly the indicator's question.
pub fn indicator_rows(rows: &[DentalRow], indicator: Indicator) -> Vec<&DentalRow> {
    rows.iter()
        .filter(|r| r.question == indicator.question())
        .collect()
}

/// Rows whose category is one of `categories`.
pub fn with_categories<'a, I>(rows: I, categories: &[&str]) -> Vec<&'a DentalRow>
where
    I: IntoIterator<Item = &'a DentalRow>,
{
    rows.into_iter()
        .filter(|r| categories.contains(&r.category.as_str()))
        .collect()
}

/// Rows of the subjective cognitive decline question.
///
/// The topic matches by case-insensitive substring, the question exactly.
/// No category or value filter applies here.
pub fn cognitive_decline(rows: &[SurveyRow]) -> Vec<&SurveyRow> {
    rows.iter()
        .filter(|r| {
            r.topic
                .as_deref()
                .is_some_and(|t| contains_ignore_case(t, COGNITIVE_TOPIC))
        })
        .filter(|r| r.question.as_deref() == Some(COGNITIVE_QUESTION))
        .collect()
}
