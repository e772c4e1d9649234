use dioxus::prelude::*;
use tracing::debug;

use crate::config::TableConfig;
use crate::domain::entities::dataset::{ColumnClassification, ColumnKind, Dataset};
use crate::domain::entities::overlay::Side;
use crate::domain::entities::table::{SortSpec, TableQuery};
use crate::ui::components::tooltip::Tooltip;
use crate::usecase::services::table_service::{clamp_page, toggle_sort, TablePipeline};
use crate::{table_cell_style, table_container_style, table_header_cell_style};

pub fn column_alignment(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Numeric => "right",
        ColumnKind::Categorical | ColumnKind::Other => "left",
    }
}

pub fn header_label(column: &str, sort: &SortSpec) -> String {
    if sort.is_sorted_by(column) {
        format!("{column} {}", sort.direction.indicator())
    } else {
        column.to_string()
    }
}

fn page_button_style(active: bool) -> &'static str {
    if active {
        "min-width: 32px; padding: 4px 8px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px;"
    } else {
        "min-width: 32px; padding: 4px 8px; border: 1px solid #bbb; background: #fff; border-radius: 6px; cursor: pointer;"
    }
}

#[component]
pub fn DataTable(
    dataset: Signal<Dataset>,
    columns: Vec<String>,
    classification: ColumnClassification,
    mut search_term: Signal<String>,
    mut sort: Signal<SortSpec>,
    mut page: Signal<i64>,
    config: TableConfig,
) -> Element {
    let pipeline = TablePipeline::new(config);
    let query = TableQuery {
        search_term: search_term(),
        sort: sort(),
        page: page(),
    };
    let view = pipeline.run(&dataset.read().rows, &query);
    let current_page = view.page.current_page;
    let total_pages = view.total_pages;
    let strip = pipeline.page_strip(current_page, total_pages);
    let sort_snapshot = sort();

    let mut go_to = move |requested: i64| {
        let next = clamp_page(requested, total_pages) as i64;
        debug!("page {requested} requested, showing {next}/{total_pages}");
        page.set(next);
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; flex: 1; min-height: 0;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                input {
                    style: "flex: 0 1 320px; padding: 6px 8px; border: 1px solid #bbb; border-radius: 6px;",
                    r#type: "search",
                    placeholder: "Search all values…",
                    value: search_term(),
                    oninput: move |event| {
                        search_term.set(event.value());
                        page.set(1);
                    }
                }
                Tooltip {
                    text: "Matches any value in a row, ignoring case. Click a header to sort.".to_string(),
                    side: Side::Right,
                    span { style: "color: #888; cursor: help;", "ⓘ" }
                }
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            for column in columns.iter().cloned() {
                                th {
                                    key: "{column}",
                                    style: "{table_header_cell_style()}",
                                    onclick: {
                                        let column = column.clone();
                                        move |_| {
                                            let next = toggle_sort(&sort.peek(), &column);
                                            sort.set(next);
                                        }
                                    },
                                    "{header_label(&column, &sort_snapshot)}"
                                }
                            }
                        }
                    }
                    tbody {
                        if view.rows.is_empty() {
                            tr {
                                td {
                                    colspan: "{columns.len().max(1)}",
                                    style: "padding: 16px; text-align: center; color: #888;",
                                    "No matching rows"
                                }
                            }
                        }
                        {view.rows.iter().enumerate().map(|(row_idx, row)| {
                            rsx!(
                                tr {
                                    key: "{current_page}-{row_idx}",
                                    {columns.iter().map(|column| {
                                        let alignment = column_alignment(classification.kind_of(column));
                                        let value = row.get(column).map(ToString::to_string).unwrap_or_default();
                                        rsx!(
                                            td { style: "{table_cell_style(alignment)}", "{value}" }
                                        )
                                    })}
                                }
                            )
                        })}
                    }
                }
            }

            div {
                style: "display: flex; gap: 6px; align-items: center;",
                button {
                    style: "{page_button_style(false)}",
                    disabled: current_page <= 1,
                    onclick: move |_| go_to(current_page as i64 - 1),
                    "Prev"
                }
                for number in strip.iter().copied() {
                    button {
                        key: "{number}",
                        style: "{page_button_style(number == current_page)}",
                        onclick: move |_| go_to(number as i64),
                        "{number}"
                    }
                }
                button {
                    style: "{page_button_style(false)}",
                    disabled: current_page >= total_pages,
                    onclick: move |_| go_to(current_page as i64 + 1),
                    "Next"
                }
                span { style: "margin-left: 8px; color: #555;", "Showing {view.range}" }
            }
        }
    }
}
