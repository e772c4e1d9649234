use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::dataset::{ColumnClassification, ColumnKind, Row};
use crate::usecase::services::stats_service::parse_numeric;

pub const CATEGORICAL_DISTINCT_LIMIT: usize = 20;

pub fn classify_column(rows: &[Row], column: &str) -> ColumnKind {
    let values: Vec<_> = rows
        .iter()
        .filter_map(|row| row.get(column))
        .filter(|value| !value.is_empty())
        .collect();
    if values.is_empty() {
        return ColumnKind::Other;
    }
    if values.iter().all(|value| parse_numeric(value).is_some()) {
        return ColumnKind::Numeric;
    }

    let distinct: BTreeSet<String> = values.iter().map(|value| value.to_string()).collect();
    let small_dataset = rows.len() < 4;
    if distinct.len() <= CATEGORICAL_DISTINCT_LIMIT
        && (small_dataset || distinct.len() * 2 <= rows.len())
    {
        ColumnKind::Categorical
    } else {
        ColumnKind::Other
    }
}

pub fn classify_columns(columns: &[String], rows: &[Row]) -> ColumnClassification {
    let mut classification = ColumnClassification::default();
    for column in columns {
        let bucket = match classify_column(rows, column) {
            ColumnKind::Numeric => &mut classification.numeric,
            ColumnKind::Categorical => &mut classification.categorical,
            ColumnKind::Other => &mut classification.other,
        };
        bucket.insert(column.clone());
    }
    classification
}

/// Fills in missing entries as visible and drops entries for columns that
/// no longer exist.
pub fn normalize_column_visibility(
    columns: &[String],
    visibility: &BTreeMap<String, bool>,
) -> BTreeMap<String, bool> {
    columns
        .iter()
        .map(|column| {
            let visible = visibility.get(column).copied().unwrap_or(true);
            (column.clone(), visible)
        })
        .collect()
}

pub fn visible_columns(columns: &[String], visibility: &BTreeMap<String, bool>) -> Vec<String> {
    columns
        .iter()
        .filter(|column| visibility.get(*column).copied().unwrap_or(true))
        .cloned()
        .collect()
}
