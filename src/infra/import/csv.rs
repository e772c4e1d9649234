use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::dataset_name_from_path;
use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::DatasetSource;

pub struct CsvSource {
    pub path: PathBuf,
}

impl DatasetSource for CsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset> {
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("failed to open csv: {}", self.path.display()))?;
        read_csv_dataset(&dataset_name_from_path(&self.path), file)
            .with_context(|| format!("failed to read csv: {}", self.path.display()))
    }
}

pub fn read_csv_dataset<R: Read>(name: &str, input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader
        .headers()
        .context("failed to read csv headers")?
        .iter()
        .map(|header| header.trim().to_string())
        .collect::<Vec<String>>();

    if headers.is_empty() || headers.iter().all(|header| header.is_empty()) {
        anyhow::bail!("csv header is required")
    }

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        records.push(record.iter().map(str::to_string).collect::<Vec<String>>());
    }
    debug!("csv {name:?}: {} columns, {} rows", headers.len(), records.len());

    Ok(Dataset::from_records(name, headers, records))
}
