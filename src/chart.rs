//! Chart data assembly
//!
//! Turns aggregated rows into the document the stacked-bar renderer consumes:
//! one label per row, one dataset per category with values aligned to the
//! labels. Field names are camelCase for the charting library.

use crate::aggregate::EmotionRow;
use crate::emotion::{color_for_label, Emotion};
use crate::logger;
use serde::Serialize;

/// One data series, covering a single emotion category across all dates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<u32>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u8,
}

/// Complete chart input document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Build chart data from aggregated rows.
///
/// Returns `None` for an empty row list; charting nothing is a skip, not an
/// error.
#[must_use]
pub fn build_chart_data(rows: &[EmotionRow], person: &str) -> Option<ChartData> {
    if rows.is_empty() {
        logger::log_warning("No aggregated data to chart");
        return None;
    }

    let labels = rows.iter().map(|r| r.timestamp.clone()).collect();

    let datasets = Emotion::ALL
        .into_iter()
        .map(|emotion| {
            let color = color_for_label(emotion.label());
            ChartDataset {
                label: emotion.label().to_string(),
                data: rows.iter().map(|r| r.counts.get(emotion)).collect(),
                background_color: color.to_string(),
                border_color: color.to_string(),
                border_width: 1,
            }
        })
        .collect();

    Some(ChartData {
        title: format!("{person}의 날짜별 감정 변화 (누적 막대 차트)"),
        labels,
        datasets,
    })
}
