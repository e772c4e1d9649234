use std::collections::BTreeMap;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::dataset::{ColumnClassification, Dataset};
use crate::domain::entities::table::SortSpec;

/// Widget state owned by the view layer. The pipeline only ever reads it.
pub struct AppState {
    pub dataset: Signal<Dataset>,
    pub classification: Signal<ColumnClassification>,
    pub column_visibility: Signal<BTreeMap<String, bool>>,
    pub search_term: Signal<String>,
    pub sort: Signal<SortSpec>,
    pub page: Signal<i64>,
    pub column_picker_open: Signal<bool>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dataset: use_signal(Dataset::default),
            classification: use_signal(ColumnClassification::default),
            column_visibility: use_signal(BTreeMap::<String, bool>::new),
            search_term: use_signal(String::new),
            sort: use_signal(SortSpec::default),
            page: use_signal(|| 1_i64),
            column_picker_open: use_signal(|| false),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
