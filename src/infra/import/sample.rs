use anyhow::{Context, Result};

use crate::domain::entities::dataset::Dataset;
use crate::infra::import::csv::read_csv_dataset;
use crate::usecase::ports::source::DatasetSource;

const SAMPLE_CSV: &str = include_str!("../../../assets/sample.csv");

/// The dataset shown before anything is imported.
pub struct SampleSource;

impl DatasetSource for SampleSource {
    fn describe(&self) -> String {
        "bundled sample".to_string()
    }

    fn load(&self) -> Result<Dataset> {
        read_csv_dataset("sample", SAMPLE_CSV.as_bytes()).context("bundled sample is invalid")
    }
}
