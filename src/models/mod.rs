pub mod person;
pub mod policy;
pub mod session;
pub mod status;
pub mod summary;

pub use person::{PersonRecord, Roster};
pub use policy::{AttendancePolicy, Settings};
pub use session::{Role, Session};
pub use status::{StatusLabel, StatusSet};
pub use summary::{Assessment, AssessmentLevel, PerformanceSummary};
