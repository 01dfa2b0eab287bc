use crate::cli::commands::Ctx;
use crate::core::report::ReportAggregator;
use crate::errors::{AppError, AppResult};
use crate::export::{write_report_csv, ReportRow};
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(
    ctx: &Ctx,
    date: Option<&str>,
    range: Option<&str>,
    out: Option<&str>,
) -> AppResult<()> {
    let aggregator = ReportAggregator::new(&ctx.store);

    let rows = match (date, range) {
        (Some(d), None) => aggregator.daily_report(parse_date(d)?)?,
        (None, Some(r)) => {
            let (start, end) = r
                .split_once(':')
                .ok_or_else(|| AppError::InvalidDate(format!("expected START:END, got {r}")))?;
            aggregator.range_report(parse_date(start)?, parse_date(end)?)?
        }
        _ => {
            return Err(AppError::Config(
                "report needs exactly one of --date or --range".to_string(),
            ))
        }
    };

    print_rows(&rows);

    if let Some(file) = out {
        write_report_csv(Path::new(file), &rows)?;
        success(format!("CSV report written to {file}"));
    }

    Ok(())
}

fn print_rows(rows: &[ReportRow]) {
    let with_date = rows.iter().any(|r| r.date.is_some());

    let mut columns = Vec::new();
    if with_date {
        columns.push(Column::new("Date", 10));
    }
    columns.push(Column::new("Name", 22));
    columns.push(Column::new("Trade", 14));
    columns.push(Column::new("Time In", 14));
    columns.push(Column::new("Time Out", 15));

    let mut table = Table::new(columns);
    for row in rows {
        let mut fields = Vec::new();
        if with_date {
            fields.push(row.date.clone().unwrap_or_default());
        }
        fields.push(row.name.clone());
        fields.push(row.trade.clone());
        fields.push(row.time_in_display().to_string());
        fields.push(row.time_out_display().to_string());
        table.add_row(fields);
    }
    print!("{}", table.render());
}
