use crate::cli::commands::Ctx;
use crate::cli::parser::RosterAction;
use crate::core::roster as roster_ops;
use crate::errors::AppResult;
use crate::models::AttendancePolicy;
use crate::store::roster;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(ctx: &Ctx, action: &RosterAction) -> AppResult<()> {
    match action {
        RosterAction::Add { name, trade } => {
            let id = roster_ops::add_person(&ctx.store, name, trade)?;
            success(format!("Added {name} with id {id}"));
            Ok(())
        }
        RosterAction::Del { id } => {
            roster_ops::remove_person(&ctx.store, id)?;
            success(format!("Removed {id}"));
            Ok(())
        }
        RosterAction::List => list(ctx),
    }
}

fn list(ctx: &Ctx) -> AppResult<()> {
    let settings = roster::load_settings(&ctx.store)?;
    let policy = AttendancePolicy::from_settings(&settings);
    let all = roster_ops::load_with_status(&ctx.store, &policy)?;

    let mut table = Table::new(vec![
        Column::new("ID", 15),
        Column::new("Name", 22),
        Column::new("Trade", 14),
        Column::new("Time In", 8),
        Column::new("Time Out", 8),
        Column::new("Status", 28),
    ]);
    for rec in all.values() {
        table.add_row(vec![
            rec.id.clone(),
            rec.name.clone(),
            rec.trade.clone(),
            rec.time_in.clone(),
            rec.time_out.clone(),
            rec.status.to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
