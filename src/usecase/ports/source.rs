use anyhow::Result;

use crate::domain::entities::dataset::Dataset;

pub trait DatasetSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Dataset>;
}
