//! rollcall library root.
//! Exposes the CLI parser, the high-level run() function and the engine
//! modules (status derivation, rollover, reporting, performance scoring).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{self, Ctx};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use models::{Role, Session};

/// Central command dispatcher
pub fn dispatch(cli: Cli, cfg: Config) -> AppResult<()> {
    if let Commands::Init = cli.command {
        return commands::init::handle(cli.data_dir, cli.test);
    }

    let role = Role::from_str_opt(&cli.role)
        .ok_or_else(|| AppError::Config(format!("unknown role: {}", cli.role)))?;
    let ctx = Ctx::new(cfg, Session::new(&cli.user, role));

    match cli.command {
        Commands::Init => unreachable!("handled above"),
        Commands::Settings {
            print,
            name,
            start,
            end,
            grace,
        } => commands::settings::handle(&ctx, print, name, start, end, grace),
        Commands::Roster { action } => commands::roster::handle(&ctx, &action),
        Commands::Checkin { id, time } => {
            commands::checkin::handle_in(&ctx, &id, time.as_deref())
        }
        Commands::Checkout { id, time } => {
            commands::checkin::handle_out(&ctx, &id, time.as_deref())
        }
        Commands::Dashboard => commands::dashboard::handle(&ctx),
        Commands::EndDay { resume, date } => {
            commands::endday::handle(&ctx, resume, date.as_deref())
        }
        Commands::Report { date, range, out } => {
            commands::report::handle(&ctx, date.as_deref(), range.as_deref(), out.as_deref())
        }
        Commands::Performance { name, as_of } => {
            commands::performance::handle(&ctx, name.as_deref(), as_of.as_deref())
        }
        Commands::Watch { interval, ticks } => commands::watch::handle(ctx, interval, ticks),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Command-line data dir wins over the configured one.
    if let Some(custom_dir) = &cli.data_dir {
        cfg.data_dir = custom_dir.clone();
    }

    dispatch(cli, cfg)
}
