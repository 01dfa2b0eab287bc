//! Historical report aggregation over the archived snapshots.

use crate::errors::{AppError, AppResult};
use crate::export::ReportRow;
use crate::store::{history, KeyValueStore};
use crate::utils::date::{date_range, format_date};
use chrono::NaiveDate;

pub struct ReportAggregator<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ReportAggregator<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// All records archived for `date`, without a date column. An absent or
    /// empty snapshot is a user-facing no-data error, not a crash.
    pub fn daily_report(&self, date: NaiveDate) -> AppResult<Vec<ReportRow>> {
        let snapshot = history::load_snapshot(self.store, date)?
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::NoDataForDate(format_date(date)))?;

        let mut rows: Vec<ReportRow> = snapshot
            .values()
            .map(|rec| ReportRow::from_record(rec, None))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    /// All records archived between `start` and `end`, endpoints included,
    /// weekends included, each row tagged with its date. Days with no
    /// snapshot are skipped; only a fully empty range is an error.
    pub fn range_report(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<ReportRow>> {
        if start > end {
            return Err(AppError::InvalidDate(format!(
                "{} is after {}",
                format_date(start),
                format_date(end)
            )));
        }

        let mut rows = Vec::new();
        for date in date_range(start, end) {
            let Some(snapshot) = history::load_snapshot(self.store, date)? else {
                continue;
            };
            if snapshot.is_empty() {
                continue;
            }
            let mut day_rows: Vec<ReportRow> = snapshot
                .values()
                .map(|rec| ReportRow::from_record(rec, Some(format_date(date))))
                .collect();
            day_rows.sort_by(|a, b| a.name.cmp(&b.name));
            rows.extend(day_rows);
        }

        if rows.is_empty() {
            return Err(AppError::NoDataForRange(
                format_date(start),
                format_date(end),
            ));
        }
        Ok(rows)
    }
}
