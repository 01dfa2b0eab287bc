use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_START: &str = "08:30";
pub const DEFAULT_WORK_END: &str = "17:00";
pub const DEFAULT_GRACE_MINUTES: u32 = 15;

/// The `settings` document as stored: organization name plus working-hours
/// fields. `grace_period` is kept as a string because that is how the store
/// has always held it; `AttendancePolicy` normalizes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_start")]
    pub working_hours_start: String,
    #[serde(default = "default_end")]
    pub working_hours_end: String,
    #[serde(default = "default_grace")]
    pub grace_period: String,
}

fn default_start() -> String {
    DEFAULT_WORK_START.to_string()
}
fn default_end() -> String {
    DEFAULT_WORK_END.to_string()
}
fn default_grace() -> String {
    DEFAULT_GRACE_MINUTES.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: String::new(),
            working_hours_start: default_start(),
            working_hours_end: default_end(),
            grace_period: default_grace(),
        }
    }
}

/// Immutable policy used for a single status evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendancePolicy {
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub grace_period_minutes: u32,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            working_hours_start: DEFAULT_WORK_START.to_string(),
            working_hours_end: DEFAULT_WORK_END.to_string(),
            grace_period_minutes: DEFAULT_GRACE_MINUTES,
        }
    }
}

impl AttendancePolicy {
    pub fn new(start: &str, end: &str, grace: u32) -> Self {
        Self {
            working_hours_start: start.to_string(),
            working_hours_end: end.to_string(),
            grace_period_minutes: grace,
        }
    }

    /// Build from the settings document; malformed grace values fall back to
    /// the default rather than failing a read path.
    pub fn from_settings(s: &Settings) -> Self {
        let grace = s
            .grace_period
            .trim()
            .parse::<u32>()
            .unwrap_or(DEFAULT_GRACE_MINUTES);
        Self {
            working_hours_start: s.working_hours_start.clone(),
            working_hours_end: s.working_hours_end.clone(),
            grace_period_minutes: grace,
        }
    }
}
