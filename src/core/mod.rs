pub mod performance;
pub mod report;
pub mod rollover;
pub mod roster;
pub mod status;
pub mod watch;
