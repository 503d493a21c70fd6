use serde::Deserialize;

// ---------------------------------------------------------------------------
// SurveyRow – one row of the source table
// ---------------------------------------------------------------------------

/// A source row. Empty CSV fields deserialize as `None`; columns not named
/// here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SurveyRow {
    #[serde(rename = "LocationDesc")]
    pub location: Option<String>,
    #[serde(rename = "Topic")]
    pub topic: Option<String>,
    #[serde(rename = "Question")]
    pub question: Option<String>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Stratification1")]
    pub stratification: Option<String>,
    #[serde(rename = "DataValue")]
    pub data_value: Option<String>,
}

impl SurveyRow {
    /// `Response`, falling back to `Stratification1` when absent.
    pub fn category(&self) -> Option<&str> {
        self.response
            .as_deref()
            .or(self.stratification.as_deref())
    }

    /// Numeric coercion of `DataValue`: unparsable or non-finite text is missing.
    pub fn numeric_value(&self) -> Option<f64> {
        let raw = self.data_value.as_deref()?.trim();
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                log::debug!("Dropping non-numeric DataValue {raw:?}");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SurveyTable – the complete loaded table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SurveyTable {
    pub rows: Vec<SurveyRow>,
}

impl SurveyTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DentalRow – a row that passed the dental filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DentalRow {
    /// State or territory; rows without one are kept but never aggregated by state.
    pub location: Option<String>,
    pub question: String,
    pub category: String,
    pub value: f64,
}

impl From<&DentalRow> for SurveyRow {
    fn from(row: &DentalRow) -> Self {
        SurveyRow {
            location: row.location.clone(),
            topic: Some(crate::config::ORAL_HEALTH_TOPIC.to_string()),
            question: Some(row.question.clone()),
            response: Some(row.category.clone()),
            stratification: None,
            data_value: Some(row.value.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Indicator – the three headline oral-health questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Indicator {
    AllTeethLost,
    SixOrMoreLost,
    NoTeethLost,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [
        Indicator::AllTeethLost,
        Indicator::SixOrMoreLost,
        Indicator::NoTeethLost,
    ];

    /// Exact survey question text.
    pub fn question(self) -> &'static str {
        match self {
            Indicator::AllTeethLost => "All teeth lost among adults aged 65 years and older",
            Indicator::SixOrMoreLost => "Six or more teeth lost among adults aged 65 years and older",
            Indicator::NoTeethLost => "No teeth lost among adults aged 18-64 years",
        }
    }

    /// Column label used by the pair grid and heat map.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::AllTeethLost => "All lost (65+)",
            Indicator::SixOrMoreLost => "6+ lost (65+)",
            Indicator::NoTeethLost => "No lost (18–64)",
        }
    }

    /// Axis label used by the race bar chart.
    pub fn short_label(self) -> &'static str {
        match self {
            Indicator::AllTeethLost => "All lost",
            Indicator::SixOrMoreLost => "6+ lost",
            Indicator::NoTeethLost => "No lost",
        }
    }

    pub fn from_question(question: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.question() == question)
    }

    /// Position in [`Indicator::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(response: Option<&str>, strat: Option<&str>, value: Option<&str>) -> SurveyRow {
        SurveyRow {
            response: response.map(String::from),
            stratification: strat.map(String::from),
            data_value: value.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_prefers_response() {
        assert_eq!(row(Some("Yes"), Some("Male"), None).category(), Some("Yes"));
        assert_eq!(row(None, Some("Male"), None).category(), Some("Male"));
        assert_eq!(row(None, None, None).category(), None);
    }

    #[test]
    fn test_numeric_value_coercion() {
        assert_eq!(row(None, None, Some(" 12.5 ")).numeric_value(), Some(12.5));
        assert_eq!(row(None, None, Some("~")).numeric_value(), None);
        assert_eq!(row(None, None, Some("NaN")).numeric_value(), None);
        assert_eq!(row(None, None, None).numeric_value(), None);
    }

    #[test]
    fn test_indicator_lookup() {
        for ind in Indicator::ALL {
            assert_eq!(Indicator::from_question(ind.question()), Some(ind));
        }
        assert_eq!(
            Indicator::from_question("all teeth lost among adults aged 65 years and older"),
            None
        );
        assert_eq!(Indicator::NoTeethLost.index(), 2);
    }
}
