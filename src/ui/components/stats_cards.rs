use dioxus::prelude::*;

use crate::domain::entities::overlay::Side;
use crate::ui::components::tooltip::Tooltip;
use crate::usecase::services::stats_service::{DatasetOverview, NumericSummary};
use crate::{card_style, format_number_with_commas};

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub hint: String,
}

pub fn overview_cards(overview: &DatasetOverview) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Rows".to_string(),
            value: format_number_with_commas(overview.row_count as f64, 0),
            hint: "Records in the loaded dataset".to_string(),
        },
        StatCard {
            title: "Columns".to_string(),
            value: format_number_with_commas(overview.column_count as f64, 0),
            hint: format!("{} text column(s)", overview.other_columns),
        },
        StatCard {
            title: "Numeric".to_string(),
            value: overview.numeric_columns.to_string(),
            hint: "Columns whose values all parse as numbers".to_string(),
        },
        StatCard {
            title: "Categorical".to_string(),
            value: overview.categorical_columns.to_string(),
            hint: "Columns with a small set of repeated values".to_string(),
        },
    ]
}

pub fn summary_card(column: &str, summary: &NumericSummary) -> StatCard {
    StatCard {
        title: format!("Avg {column}"),
        value: format_number_with_commas(summary.mean, 2),
        hint: format!(
            "min {} · max {} · sum {} · {} valid value(s)",
            format_number_with_commas(summary.min, 2),
            format_number_with_commas(summary.max, 2),
            format_number_with_commas(summary.sum, 2),
            summary.count
        ),
    }
}

#[component]
pub fn StatsCards(cards: Vec<StatCard>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 10px;",
            {cards.iter().map(|card| {
                let card = card.clone();
                rsx!(
                    div {
                        key: "{card.title}",
                        style: "{card_style()}",
                        Tooltip {
                            text: card.hint.clone(),
                            side: Side::Bottom,
                            span { style: "font-size: 12px; color: #666;", "{card.title}" }
                        }
                        div { style: "font-size: 22px; font-weight: 600; margin-top: 4px;", "{card.value}" }
                    }
                )
            })}
        }
    }
}
