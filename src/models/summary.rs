use serde::Serialize;

/// Severity tag attached to the qualitative assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentLevel {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl AssessmentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentLevel::Excellent => "excellent",
            AssessmentLevel::Good => "good",
            AssessmentLevel::Warning => "warning",
            AssessmentLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub message: String,
    pub level: AssessmentLevel,
}

impl Assessment {
    pub fn new(message: &str, level: AssessmentLevel) -> Self {
        Self {
            message: message.to_string(),
            level,
        }
    }
}

/// Rolling-window attendance statistics for one person.
///
/// `left_early` is tallied independently of the present/late split, so the
/// counters only sum to `total` once `left_early` is set aside.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSummary {
    pub name: String,
    pub trade: String,
    pub present: u32,
    pub late: u32,
    pub absent: u32,
    pub left_early: u32,
    /// Working days actually checked in the window (<= 30 calendar days).
    pub total: u32,
    /// Percentage, already rounded to one decimal.
    pub attendance_rate: f64,
    pub assessment: Assessment,
}
