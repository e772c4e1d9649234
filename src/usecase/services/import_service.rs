use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use crate::domain::entities::dataset::{ColumnClassification, Dataset};
use crate::infra::import::csv::CsvSource;
use crate::infra::import::xlsx::XlsxSource;
use crate::usecase::ports::source::DatasetSource;
use crate::usecase::services::column_service::classify_columns;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub classification: ColumnClassification,
}

#[derive(Default)]
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    pub fn source_for(&self, path: &Path) -> Result<Box<dyn DatasetSource>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Box::new(CsvSource {
                path: path.to_path_buf(),
            })),
            "xlsx" | "xls" | "xlsm" | "ods" => Ok(Box::new(XlsxSource {
                path: path.to_path_buf(),
            })),
            other => bail!("unsupported file type: {other:?} ({})", path.display()),
        }
    }

    pub fn import_path(&self, path: &Path) -> Result<LoadedDataset> {
        let source = self.source_for(path)?;
        self.load_from(source.as_ref())
    }

    pub fn load_from(&self, source: &dyn DatasetSource) -> Result<LoadedDataset> {
        let dataset = source.load()?;
        let classification = classify_columns(&dataset.columns, &dataset.rows);
        info!(
            "loaded {} from {}: {} rows, {} numeric / {} categorical columns",
            dataset.name,
            source.describe(),
            dataset.rows.len(),
            classification.numeric.len(),
            classification.categorical.len()
        );
        Ok(LoadedDataset {
            dataset,
            classification,
        })
    }
}
