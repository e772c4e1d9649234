pub mod column_selector;
pub mod data_table;
pub mod stats_cards;
pub mod tooltip;
