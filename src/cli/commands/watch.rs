use crate::cli::commands::{dashboard, Ctx};
use crate::core::watch::Poller;
use crate::errors::AppResult;
use crate::ui::messages::{error, info};
use std::sync::Arc;
use std::time::Duration;

/// Refresh the dashboard on an interval. With `--ticks` the loop stops
/// after that many frames; otherwise it runs until the process is killed.
/// Frames are serialized by the poller, so a slow store read delays the
/// next frame rather than racing it.
pub fn handle(ctx: Ctx, interval: Option<u64>, ticks: Option<u64>) -> AppResult<()> {
    let secs = interval.unwrap_or(ctx.cfg.poll_interval_secs);
    let interval = Duration::from_secs(secs);

    if let Some(n) = ticks {
        for i in 0..n {
            render_frame(&ctx);
            if i + 1 < n {
                std::thread::sleep(interval);
            }
        }
        return Ok(());
    }

    info(format!("Refreshing every {secs}s; Ctrl-C to stop"));
    let ctx = Arc::new(ctx);
    let _poller = Poller::start(interval, move || render_frame(&ctx));

    // Block forever; the poller owns the refresh loop until the process
    // is killed.
    loop {
        std::thread::park();
    }
}

fn render_frame(ctx: &Ctx) {
    match dashboard::render(ctx) {
        Ok(frame) => {
            // Clear screen between frames so the dashboard updates in place.
            print!("\x1b[2J\x1b[H{frame}");
        }
        Err(e) => error(format!("dashboard refresh failed: {e}")),
    }
}
