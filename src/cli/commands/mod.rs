pub mod checkin;
pub mod dashboard;
pub mod endday;
pub mod init;
pub mod performance;
pub mod report;
pub mod roster;
pub mod settings;
pub mod watch;

use crate::config::Config;
use crate::models::Session;
use crate::store::FileStore;

/// Everything a command handler needs: the resolved config, the file-backed
/// store rooted at the data dir, and the explicit session of the caller.
pub struct Ctx {
    pub cfg: Config,
    pub store: FileStore,
    pub session: Session,
}

impl Ctx {
    pub fn new(cfg: Config, session: Session) -> Self {
        let store = FileStore::new(&cfg.data_dir);
        Self {
            cfg,
            store,
            session,
        }
    }
}
