use crate::models::PersonRecord;
use serde::Serialize;

pub const NOT_CHECKED_IN: &str = "Not checked in";
pub const NOT_CHECKED_OUT: &str = "Not checked out";

/// Flat row for report display and CSV export.
/// `date` is set only for ranged reports; daily reports omit the column.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub date: Option<String>,
    pub name: String,
    pub trade: String,
    pub time_in: String,
    pub time_out: String,
}

impl ReportRow {
    pub fn from_record(rec: &PersonRecord, date: Option<String>) -> Self {
        Self {
            date,
            name: rec.name.clone(),
            trade: rec.trade.clone(),
            time_in: rec.time_in.clone(),
            time_out: rec.time_out.clone(),
        }
    }

    pub fn time_in_display(&self) -> &str {
        if self.time_in.is_empty() {
            NOT_CHECKED_IN
        } else {
            &self.time_in
        }
    }

    pub fn time_out_display(&self) -> &str {
        if self.time_out.is_empty() {
            NOT_CHECKED_OUT
        } else {
            &self.time_out
        }
    }
}

/// Header row; ranged reports get a leading Date column.
pub(crate) fn headers(with_date: bool) -> Vec<&'static str> {
    if with_date {
        vec!["Date", "Name", "Trade", "Time In", "Time Out"]
    } else {
        vec!["Name", "Trade", "Time In", "Time Out"]
    }
}

pub(crate) fn row_to_fields(row: &ReportRow, with_date: bool) -> Vec<String> {
    let mut fields = Vec::with_capacity(5);
    if with_date {
        fields.push(row.date.clone().unwrap_or_default());
    }
    fields.push(row.name.clone());
    fields.push(row.trade.clone());
    fields.push(row.time_in_display().to_string());
    fields.push(row.time_out_display().to_string());
    fields
}
