use crate::cli::commands::Ctx;
use crate::core::roster as roster_ops;
use crate::errors::AppResult;
use crate::models::{AttendancePolicy, StatusLabel};
use crate::store::roster;
use crate::utils::table::{Column, Table};

pub fn handle(ctx: &Ctx) -> AppResult<()> {
    print!("{}", render(ctx)?);
    Ok(())
}

/// One dashboard frame: stat counts plus the full roster with freshly
/// derived statuses. Also used by `watch` on every tick.
pub fn render(ctx: &Ctx) -> AppResult<String> {
    let settings = roster::load_settings(&ctx.store)?;
    let policy = AttendancePolicy::from_settings(&settings);
    let all = roster_ops::load_with_status(&ctx.store, &policy)?;

    let total = all.len();
    let count = |label: StatusLabel| all.values().filter(|r| r.status.contains(label)).count();
    let present = count(StatusLabel::Present);
    let late = count(StatusLabel::Late);
    let absent = all.values().filter(|r| r.status.is_absent()).count();
    let left_early = count(StatusLabel::LeftEarly);
    let left_on_time = count(StatusLabel::LeftOnTime);

    let mut out = String::new();
    if !settings.name.is_empty() {
        out.push_str(&format!("{}\n", settings.name));
    }
    out.push_str(&format!(
        "Total: {total}  Present: {present}  Late: {late}  Absent: {absent}  Left early: {left_early}  Left on time: {left_on_time}\n\n"
    ));

    let mut table = Table::new(vec![
        Column::new("Name", 22),
        Column::new("Trade", 14),
        Column::new("Time In", 8),
        Column::new("Time Out", 8),
        Column::new("Status", 28),
    ]);
    for rec in all.values() {
        table.add_row(vec![
            rec.name.clone(),
            rec.trade.clone(),
            rec.time_in.clone(),
            rec.time_out.clone(),
            rec.status.to_string(),
        ]);
    }
    out.push_str(&table.render());
    Ok(out)
}
