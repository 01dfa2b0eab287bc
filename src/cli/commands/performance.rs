use crate::cli::commands::Ctx;
use crate::core::performance::PerformanceScorer;
use crate::errors::AppResult;
use crate::models::PerformanceSummary;
use crate::store::roster;
use crate::ui::messages::warning;
use crate::utils::date::{parse_date, today_at_offset};

pub fn handle(ctx: &Ctx, name: Option<&str>, as_of: Option<&str>) -> AppResult<()> {
    let today = match as_of {
        Some(d) => parse_date(d)?,
        None => today_at_offset(ctx.cfg.utc_offset_minutes),
    };

    let scorer = PerformanceScorer::new(&ctx.store);
    let all = roster::load_roster(&ctx.store)?;

    let summaries: Vec<PerformanceSummary> = match name {
        Some(n) => {
            let trade = all
                .values()
                .find(|rec| rec.name == n)
                .map(|rec| rec.trade.clone())
                .unwrap_or_default();
            vec![scorer.score(n, &trade, today)?]
        }
        None => scorer.score_all(&all, today)?,
    };

    if summaries.is_empty() {
        warning("Roster is empty; nothing to score");
        return Ok(());
    }

    for s in &summaries {
        print_summary(s);
    }
    Ok(())
}

fn print_summary(s: &PerformanceSummary) {
    println!("{} ({})", s.name, s.trade);
    println!(
        "  present {}  late {}  absent {}  left early {}  (over {} working days)",
        s.present, s.late, s.absent, s.left_early, s.total
    );
    println!("  attendance rate: {:.1}%", s.attendance_rate);
    println!(
        "  [{}] {}",
        s.assessment.level.as_str(),
        s.assessment.message
    );
    println!();
}
