use std::path::PathBuf;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::dataset_name_from_path;
use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::DatasetSource;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => crate::format_f64(*v),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Reads the first worksheet; its first row is the header.
pub struct XlsxSource {
    pub path: PathBuf,
}

impl DatasetSource for XlsxSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset> {
        let mut workbook = open_workbook_auto(&self.path)
            .with_context(|| format!("failed to open workbook: {}", self.path.display()))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .context("workbook has no worksheets")?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

        let mut rows = range
            .rows()
            .map(|r| r.iter().map(cell_to_string).collect::<Vec<String>>());
        let headers: Vec<String> = rows
            .next()
            .context("sheet header is required")?
            .into_iter()
            .map(|header| header.trim().to_string())
            .collect();
        let records: Vec<Vec<String>> = rows
            .filter(|record| record.iter().any(|value| !value.trim().is_empty()))
            .collect();
        debug!(
            "xlsx sheet {sheet_name:?}: {} columns, {} rows",
            headers.len(),
            records.len()
        );

        Ok(Dataset::from_records(
            &dataset_name_from_path(&self.path),
            headers,
            records,
        ))
    }
}
