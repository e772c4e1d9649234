use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::format_f64;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Blank cells become `Empty`. Numeric text becomes `Number` only when
    /// it prints back identically, so codes like `0050` stay text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && format_f64(value) == trimmed => {
                CellValue::Number(value)
            }
            _ => CellValue::Text(raw.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{text}"),
            CellValue::Number(value) => write!(f, "{}", format_f64(*value)),
            CellValue::Empty => Ok(()),
        }
    }
}

pub type Row = BTreeMap<String, CellValue>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Builds rows from positional records; short records leave trailing
    /// columns out of the row. Header names go through [`unique_headers`]
    /// first, so every column keeps its own cells.
    pub fn from_records(name: &str, columns: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let columns = unique_headers(columns);
        let rows = records
            .into_iter()
            .map(|record| {
                columns
                    .iter()
                    .zip(record.iter())
                    .map(|(column, raw)| (column.clone(), CellValue::from_raw(raw)))
                    .collect::<Row>()
            })
            .collect();
        Self {
            name: name.to_string(),
            columns,
            rows,
        }
    }
}

/// Blank headers become `Column N` (1-based position). Repeats get a
/// ` (2)`, ` (3)`, ... suffix.
pub fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken = BTreeSet::new();
    headers
        .into_iter()
        .enumerate()
        .map(|(idx, header)| {
            let trimmed = header.trim();
            let base = if trimmed.is_empty() {
                format!("Column {}", idx + 1)
            } else {
                trimmed.to_string()
            };
            let mut name = base.clone();
            let mut copy = 2;
            while !taken.insert(name.clone()) {
                name = format!("{base} ({copy})");
                copy += 1;
            }
            name
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Numeric,
    Categorical,
    Other,
}

impl ColumnKind {
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Other => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnClassification {
    pub numeric: BTreeSet<String>,
    pub categorical: BTreeSet<String>,
    pub other: BTreeSet<String>,
}

impl ColumnClassification {
    pub fn kind_of(&self, column: &str) -> ColumnKind {
        if self.numeric.contains(column) {
            ColumnKind::Numeric
        } else if self.categorical.contains(column) {
            ColumnKind::Categorical
        } else {
            ColumnKind::Other
        }
    }
}
