pub mod dataset;
pub mod overlay;
pub mod table;
