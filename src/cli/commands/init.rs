use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Settings;
use crate::store::{paths, roster, FileStore, KeyValueStore};
use crate::ui::messages::{info, success};

/// Create the config file, the data directory and a default settings
/// document. Safe to re-run: existing settings are left alone.
pub fn handle(data_dir: Option<String>, is_test: bool) -> AppResult<()> {
    let cfg = Config::init_all(data_dir, is_test)?;
    let store = FileStore::new(&cfg.data_dir);

    if store.get(paths::SETTINGS)?.is_none() {
        roster::save_settings(&store, &Settings::default())?;
        info("Default settings written (08:30-17:00, 15 min grace)");
    }

    success(format!("Initialized data directory at {}", cfg.data_dir));
    Ok(())
}
