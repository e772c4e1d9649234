use crate::domain::entities::dataset::{CellValue, ColumnClassification, Dataset, Row};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetOverview {
    pub row_count: usize,
    pub column_count: usize,
    pub numeric_columns: usize,
    pub categorical_columns: usize,
    pub other_columns: usize,
}

pub fn parse_numeric(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(number) if number.is_finite() => Some(*number),
        CellValue::Number(_) | CellValue::Empty => None,
        CellValue::Text(text) => {
            let cleaned = text.trim().replace(',', "");
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}

/// Values that do not parse are skipped. With no valid values every field
/// is zero.
pub fn summarize_column(rows: &[Row], column: &str) -> NumericSummary {
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.get(column))
        .filter_map(parse_numeric)
        .collect();
    if values.is_empty() {
        return NumericSummary::default();
    }

    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    NumericSummary {
        count: values.len(),
        sum,
        mean: sum / values.len() as f64,
        min,
        max,
    }
}

pub fn dataset_overview(dataset: &Dataset, classification: &ColumnClassification) -> DatasetOverview {
    DatasetOverview {
        row_count: dataset.rows.len(),
        column_count: dataset.columns.len(),
        numeric_columns: classification.numeric.len(),
        categorical_columns: classification.categorical.len(),
        other_columns: classification.other.len(),
    }
}
