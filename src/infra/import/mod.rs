pub mod csv;
pub mod sample;
pub mod xlsx;
