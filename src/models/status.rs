//! Attendance status labels and the ordered multi-label set stored per record.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    Present,
    Late,
    LeftEarly,
    LeftOnTime,
    Absent,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Present => "present",
            StatusLabel::Late => "late",
            StatusLabel::LeftEarly => "left_early",
            StatusLabel::LeftOnTime => "left_on_time",
            StatusLabel::Absent => "absent",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim() {
            "present" => Some(StatusLabel::Present),
            "late" => Some(StatusLabel::Late),
            "left_early" => Some(StatusLabel::LeftEarly),
            "left_on_time" => Some(StatusLabel::LeftOnTime),
            "absent" => Some(StatusLabel::Absent),
            _ => None,
        }
    }
}

/// Ordered, non-empty set of status labels.
///
/// A record is either `{absent}` alone, or `present` optionally followed by
/// `late` and then one of `left_early`/`left_on_time`. The display order is
/// fixed and is what the dashboard and reports show.
///
/// Serialized as the comma-joined string the store has always held, e.g.
/// `"present, late, left_early"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSet {
    labels: Vec<StatusLabel>,
}

impl StatusSet {
    pub fn absent() -> Self {
        Self {
            labels: vec![StatusLabel::Absent],
        }
    }

    pub fn present() -> Self {
        Self {
            labels: vec![StatusLabel::Present],
        }
    }

    /// Append a label, keeping the set consistent: nothing may join `absent`,
    /// and the two checkout labels are mutually exclusive.
    pub fn push(&mut self, label: StatusLabel) {
        if self.is_absent() || self.labels.contains(&label) {
            return;
        }
        if matches!(label, StatusLabel::LeftEarly)
            && self.labels.contains(&StatusLabel::LeftOnTime)
        {
            return;
        }
        if matches!(label, StatusLabel::LeftOnTime)
            && self.labels.contains(&StatusLabel::LeftEarly)
        {
            return;
        }
        self.labels.push(label);
    }

    pub fn contains(&self, label: StatusLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn is_absent(&self) -> bool {
        self.labels.contains(&StatusLabel::Absent)
    }

    pub fn labels(&self) -> &[StatusLabel] {
        &self.labels
    }

    /// Parse the stored comma-joined form. Unknown labels are skipped; an
    /// empty or unrecognized string falls back to `{absent}`.
    pub fn parse(s: &str) -> Self {
        let labels: Vec<StatusLabel> = s
            .split(',')
            .filter_map(StatusLabel::from_str_opt)
            .collect();
        if labels.is_empty() {
            return Self::absent();
        }
        Self { labels }
    }
}

impl Default for StatusSet {
    fn default() -> Self {
        Self::absent()
    }
}

impl fmt::Display for StatusSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.labels.iter().map(|l| l.as_str()).collect();
        write!(f, "{}", joined.join(", "))
    }
}

impl Serialize for StatusSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StatusSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct V;
        impl de::Visitor<'_> for V {
            type Value = StatusSet;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a comma-joined status string")
            }
            fn visit_str<E: de::Error>(self, v: &str) -> Result<StatusSet, E> {
                Ok(StatusSet::parse(v))
            }
        }
        deserializer.deserialize_str(V)
    }
}
