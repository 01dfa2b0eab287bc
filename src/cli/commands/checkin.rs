use crate::cli::commands::Ctx;
use crate::core::roster as roster_ops;
use crate::errors::AppResult;
use crate::models::AttendancePolicy;
use crate::store::roster;
use crate::ui::messages::success;
use chrono::{FixedOffset, Utc};

/// Current HH:MM in the organization's fixed offset.
fn now_hhmm(utc_offset_minutes: i32) -> String {
    let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    Utc::now().with_timezone(&offset).format("%H:%M").to_string()
}

pub fn handle_in(ctx: &Ctx, id: &str, time: Option<&str>) -> AppResult<()> {
    let settings = roster::load_settings(&ctx.store)?;
    let policy = AttendancePolicy::from_settings(&settings);
    let time = time
        .map(str::to_string)
        .unwrap_or_else(|| now_hhmm(ctx.cfg.utc_offset_minutes));

    let rec = roster_ops::check_in(&ctx.store, &policy, id, &time)?;
    success(format!("{} checked in at {} [{}]", rec.name, time, rec.status));
    Ok(())
}

pub fn handle_out(ctx: &Ctx, id: &str, time: Option<&str>) -> AppResult<()> {
    let settings = roster::load_settings(&ctx.store)?;
    let policy = AttendancePolicy::from_settings(&settings);
    let time = time
        .map(str::to_string)
        .unwrap_or_else(|| now_hhmm(ctx.cfg.utc_offset_minutes));

    let rec = roster_ops::check_out(&ctx.store, &policy, id, &time)?;
    success(format!(
        "{} checked out at {} [{}]",
        rec.name, time, rec.status
    ));
    Ok(())
}
