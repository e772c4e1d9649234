use std::path::Path;

use dioxus::prelude::*;
use rfd::FileDialog;
use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::domain::entities::table::SortSpec;
use crate::infra::import::sample::SampleSource;
use crate::platform::desktop::blocking::run_blocking;
use crate::root_container_style;
use crate::ui::components::column_selector::ColumnSelector;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::stats_cards::{overview_cards, summary_card, StatsCards};
use crate::ui::state::app_state::AppState;
use crate::usecase::services::column_service::{normalize_column_visibility, visible_columns};
use crate::usecase::services::import_service::{ImportService, LoadedDataset};
use crate::usecase::services::stats_service::{dataset_overview, summarize_column};

#[component]
pub fn App() -> Element {
    let config = use_context::<DashboardConfig>();

    let AppState {
        mut dataset,
        mut classification,
        mut column_visibility,
        mut search_term,
        mut sort,
        mut page,
        mut column_picker_open,
        mut busy,
        mut status,
    } = AppState::new();

    let mut apply_loaded = move |loaded: LoadedDataset| {
        let visibility =
            normalize_column_visibility(&loaded.dataset.columns, &column_visibility.peek());
        *status.write() = format!(
            "Loaded {} ({} rows)",
            loaded.dataset.name,
            loaded.dataset.rows.len()
        );
        *column_visibility.write() = visibility;
        *classification.write() = loaded.classification;
        *dataset.write() = loaded.dataset;
        search_term.set(String::new());
        sort.set(SortSpec::default());
        page.set(1);
    };

    use_hook(move || match ImportService::new().load_from(&SampleSource) {
        Ok(loaded) => apply_loaded(loaded),
        Err(err) => {
            warn!("sample dataset failed to load: {err:#}");
            *status.write() = format!("Failed to load sample: {err}");
        }
    });

    let on_import = move |_: MouseEvent| {
        let Some(path) = FileDialog::new()
            .add_filter("Data", &["csv", "xlsx", "xls", "xlsm", "ods"])
            .pick_file()
        else {
            return;
        };
        *busy.write() = true;
        let result = run_blocking(|| import_file(&path));
        match result {
            Ok(loaded) => apply_loaded(loaded),
            Err(err) => {
                warn!("import failed: {err:#}");
                *status.write() = format!("Import failed: {err}");
            }
        }
        *busy.write() = false;
    };

    let current = dataset.read();
    let current_classification = classification();
    let visibility = column_visibility();
    let shown_columns = visible_columns(&current.columns, &visibility);

    let mut cards = overview_cards(&dataset_overview(&current, &current_classification));
    cards.extend(
        shown_columns
            .iter()
            .filter(|column| current_classification.numeric.contains(*column))
            .map(|column| summary_card(column, &summarize_column(&current.rows, column))),
    );
    let all_columns = current.columns.clone();
    let dataset_name = current.name.clone();
    drop(current);

    rsx! {
        div {
            style: "{root_container_style()}",
            onclick: move |_| column_picker_open.set(false),
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                h2 { style: "margin: 0; font-size: 18px;", "{dataset_name}" }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    disabled: busy(),
                    onclick: on_import,
                    "Import…"
                }
                ColumnSelector {
                    columns: all_columns,
                    classification: current_classification.clone(),
                    visibility: visibility.clone(),
                    open: column_picker_open,
                    on_toggle: move |(column, visible): (String, bool)| {
                        info!("column {column:?} visible={visible}");
                        column_visibility.write().insert(column, visible);
                    },
                }
                span { style: "margin-left: auto; color: #666; font-size: 12px;", "{status}" }
            }
            StatsCards { cards }
            DataTable {
                dataset,
                columns: shown_columns,
                classification: current_classification,
                search_term,
                sort,
                page,
                config: config.table,
            }
        }
    }
}

fn import_file(path: &Path) -> anyhow::Result<LoadedDataset> {
    ImportService::new().import_path(path)
}
