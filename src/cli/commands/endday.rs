use crate::cli::commands::Ctx;
use crate::core::rollover::DayRolloverService;
use crate::errors::AppResult;
use crate::models::AttendancePolicy;
use crate::store::roster;
use crate::ui::messages::{info, success};
use crate::utils::date::{parse_date, today_at_offset};

pub fn handle(ctx: &Ctx, resume: bool, date: Option<&str>) -> AppResult<()> {
    let settings = roster::load_settings(&ctx.store)?;
    let policy = AttendancePolicy::from_settings(&settings);
    let service = DayRolloverService::new(&ctx.store, policy);

    if resume {
        return match service.resume(&ctx.session)? {
            Some(outcome) => {
                success(format!(
                    "Resumed day-end for {}: roster reset ({} records)",
                    outcome.date, outcome.archived
                ));
                Ok(())
            }
            None => {
                info("No interrupted day-end to resume");
                Ok(())
            }
        };
    }

    let date = match date {
        Some(d) => parse_date(d)?,
        None => today_at_offset(ctx.cfg.utc_offset_minutes),
    };

    let outcome = service.end_day(&ctx.session, date)?;
    if outcome.roster_reset {
        success(format!(
            "Day ended: {} records archived under {} and roster reset",
            outcome.archived, outcome.date
        ));
    } else {
        success(format!(
            "Day ended: empty roster archived under {}",
            outcome.date
        ));
    }
    Ok(())
}
