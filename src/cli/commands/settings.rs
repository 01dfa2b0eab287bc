use crate::cli::commands::Ctx;
use crate::errors::AppResult;
use crate::store::roster;
use crate::ui::messages::success;
use crate::utils::time::validate_time;

pub fn handle(
    ctx: &Ctx,
    print: bool,
    name: Option<String>,
    start: Option<String>,
    end: Option<String>,
    grace: Option<u32>,
) -> AppResult<()> {
    let mut settings = roster::load_settings(&ctx.store)?;

    let editing = name.is_some() || start.is_some() || end.is_some() || grace.is_some();
    if editing {
        if let Some(n) = name {
            settings.name = n;
        }
        if let Some(s) = start {
            settings.working_hours_start = validate_time(&s)?;
        }
        if let Some(e) = end {
            settings.working_hours_end = validate_time(&e)?;
        }
        if let Some(g) = grace {
            settings.grace_period = g.to_string();
        }
        roster::save_settings(&ctx.store, &settings)?;
        success("Settings updated");
    }

    if print || !editing {
        println!("name:                {}", settings.name);
        println!("working_hours_start: {}", settings.working_hours_start);
        println!("working_hours_end:   {}", settings.working_hours_end);
        println!("grace_period:        {}", settings.grace_period);
    }

    Ok(())
}
