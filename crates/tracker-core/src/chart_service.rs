//! Chart projection of the aggregate map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const DATASET_LABEL: &str = "Expenses";

const PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#7BC225",
    "#E7E9ED", "#B56576",
];

/// Labels plus datasets, shaped like the charting library's `data` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

pub struct ChartService;

impl ChartService {
    /// Builds chart data with categories ordered by descending total.
    pub fn chart_data(aggregate: &BTreeMap<String, f64>) -> ChartData {
        let mut entries: Vec<(&String, &f64)> = aggregate.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(a.1));

        let labels: Vec<String> = entries.iter().map(|(name, _)| (*name).clone()).collect();
        let data: Vec<f64> = entries.iter().map(|(_, total)| **total).collect();
        let colors: Vec<String> = (0..labels.len()).map(Self::color_for).collect();

        ChartData {
            labels,
            datasets: vec![ChartDataset {
                label: DATASET_LABEL.to_string(),
                data,
                background_color: colors.clone(),
                border_color: colors,
                border_width: 1,
            }],
        }
    }

    /// Palette colour for the slice at `index`; wraps once the palette is exhausted.
    pub fn color_for(index: usize) -> String {
        PALETTE[index % PALETTE.len()].to_string()
    }
}
