mod csv;
mod model;

pub use csv::write_report_csv;
pub use model::{ReportRow, NOT_CHECKED_IN, NOT_CHECKED_OUT};
