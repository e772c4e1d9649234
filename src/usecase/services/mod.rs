pub mod column_service;
pub mod import_service;
pub mod overlay_service;
pub mod stats_service;
pub mod table_service;
