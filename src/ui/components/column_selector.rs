use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::domain::entities::dataset::{ColumnClassification, ColumnKind};

pub fn kind_badge_style(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Numeric => {
            "font-size: 11px; padding: 1px 6px; border-radius: 10px; background: #e7f5ff; color: #1864ab;"
        }
        ColumnKind::Categorical => {
            "font-size: 11px; padding: 1px 6px; border-radius: 10px; background: #fff4e6; color: #d9480f;"
        }
        ColumnKind::Other => {
            "font-size: 11px; padding: 1px 6px; border-radius: 10px; background: #f1f3f5; color: #495057;"
        }
    }
}

#[component]
pub fn ColumnSelector(
    columns: Vec<String>,
    classification: ColumnClassification,
    visibility: BTreeMap<String, bool>,
    mut open: Signal<bool>,
    on_toggle: EventHandler<(String, bool)>,
) -> Element {
    let shown = columns
        .iter()
        .filter(|column| visibility.get(*column).copied().unwrap_or(true))
        .count();

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    open.set(!open());
                },
                "Columns ({shown}/{columns.len()})"
            }

            if open() {
                div {
                    style: "position: absolute; left: 0; top: calc(100% + 4px); min-width: 240px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 6px;",
                    onclick: move |event| event.stop_propagation(),
                    {columns.iter().map(|column| {
                        let checked = visibility.get(column).copied().unwrap_or(true);
                        let kind = classification.kind_of(column);
                        let column = column.clone();
                        let label = column.clone();
                        rsx!(
                            label {
                                key: "{label}",
                                style: "display: flex; align-items: center; gap: 8px; padding: 6px 4px; cursor: pointer;",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    onclick: move |_| {
                                        on_toggle.call((column.clone(), !checked));
                                    }
                                }
                                span { style: "flex: 1;", "{label}" }
                                span { style: "{kind_badge_style(kind)}", "{kind.label()}" }
                            }
                        )
                    })}
                }
            }
        }
    }
}
