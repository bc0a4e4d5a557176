//! Score interpretation: chart pairs, total and band for a stored record.

use serde::Serialize;

use super::catalog::chart_label;
use super::record::AnswerSet;
use super::rubric::{Band, Recommendation};

/// One bar of the result chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub key: String,
    pub label: String,
    pub value: i64,
}

/// Interpreted view of an answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    total_score: i64,
    band: Band,
    chart: Vec<ChartPoint>,
}

impl Interpretation {
    /// Projects answers onto chart labels, sums them and picks the band.
    pub fn of(answers: &AnswerSet) -> Self {
        let chart: Vec<ChartPoint> = answers
            .iter()
            .map(|(key, value)| ChartPoint {
                key: key.as_str().to_string(),
                label: chart_label(key.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| key.as_str().to_string()),
                value,
            })
            .collect();

        let total_score = chart
            .iter()
            .fold(0, |acc: i64, p| acc.saturating_add(p.value));

        Self {
            total_score,
            band: Band::for_score(total_score),
            chart,
        }
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn title(&self) -> &'static str {
        self.band.title()
    }

    pub fn recommendation(&self) -> &'static Recommendation {
        self.band.recommendation()
    }

    /// Chart pairs in question order.
    pub fn chart(&self) -> &[ChartPoint] {
        &self.chart
    }
}
