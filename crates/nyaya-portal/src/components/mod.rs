pub mod case_table;
pub mod select_options;
pub mod status_chart;

pub use case_table::*;
pub use select_options::*;
pub use status_chart::*;
