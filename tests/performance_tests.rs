mod common;
use common::{archive, date, default_policy, person};

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rollcall::core::performance::PerformanceScorer;
use rollcall::models::AssessmentLevel;
use rollcall::store::MemoryStore;

/// 2025-06-30 is a Monday; the 30-day window ending there covers June,
/// which holds exactly 21 weekdays.
const TODAY: &str = "2025-06-30";
const JUNE_WEEKDAYS: u32 = 21;

fn weekdays_in_window() -> Vec<NaiveDate> {
    let today = date(TODAY);
    (0..30)
        .map(|i| today - Duration::days(i))
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

#[test]
fn the_window_filters_to_weekdays() {
    assert_eq!(weekdays_in_window().len() as u32, JUNE_WEEKDAYS);
}

#[test]
fn missing_days_count_against_the_person() {
    let store = MemoryStore::new();
    let policy = default_policy();
    // Present and on time on the 20 most recent weekdays; no snapshot at
    // all for the earliest one (2025-06-02).
    for day in weekdays_in_window().into_iter().take(20) {
        archive(&store, day, vec![person("1", "Alice", "Electric", "08:00", "17:00", &policy)]);
    }

    let s = PerformanceScorer::new(&store)
        .score("Alice", "Electric", date(TODAY))
        .unwrap();

    assert_eq!(s.total, JUNE_WEEKDAYS);
    assert_eq!(s.present, 20);
    assert_eq!(s.absent, 1);
    assert_eq!(s.late, 0);
    // 20/21, to one decimal.
    assert_eq!(s.attendance_rate, 95.2);
    assert_eq!(s.assessment.level, AssessmentLevel::Excellent);
}

#[test]
fn a_person_absent_from_every_snapshot_scores_zero() {
    let store = MemoryStore::new();
    let policy = default_policy();
    for day in weekdays_in_window() {
        archive(&store, day, vec![person("1", "Alice", "", "08:00", "17:00", &policy)]);
    }

    let s = PerformanceScorer::new(&store)
        .score("Nobody", "", date(TODAY))
        .unwrap();
    assert_eq!(s.absent, JUNE_WEEKDAYS);
    assert_eq!(s.attendance_rate, 0.0);
    assert_eq!(s.assessment.level, AssessmentLevel::Critical);
}

#[test]
fn late_takes_precedence_and_left_early_tallies_independently() {
    let store = MemoryStore::new();
    let policy = default_policy();
    let days = weekdays_in_window();

    // One day late + left early, one day on-time + left early, rest absent.
    archive(&store, days[0], vec![person("1", "Alice", "", "09:00", "16:30", &policy)]);
    archive(&store, days[1], vec![person("1", "Alice", "", "08:00", "16:30", &policy)]);

    let s = PerformanceScorer::new(&store)
        .score("Alice", "", date(TODAY))
        .unwrap();

    assert_eq!(s.late, 1);
    assert_eq!(s.present, 1);
    assert_eq!(s.left_early, 2);
    assert_eq!(s.absent, JUNE_WEEKDAYS - 2);
}

#[test]
fn present_with_on_time_checkout_lands_in_the_present_bucket() {
    let store = MemoryStore::new();
    let policy = default_policy();
    let days = weekdays_in_window();
    archive(&store, days[0], vec![person("1", "Alice", "", "08:00", "17:30", &policy)]);

    let s = PerformanceScorer::new(&store)
        .score("Alice", "", date(TODAY))
        .unwrap();
    assert_eq!(s.present, 1);
    assert_eq!(s.left_early, 0);
}

#[test]
fn weekend_snapshots_are_ignored_entirely() {
    let store = MemoryStore::new();
    let policy = default_policy();
    // 2025-06-28 is a Saturday inside the window.
    archive(&store, date("2025-06-28"), vec![person("1", "Alice", "", "08:00", "17:00", &policy)]);

    let s = PerformanceScorer::new(&store)
        .score("Alice", "", date(TODAY))
        .unwrap();
    assert_eq!(s.total, JUNE_WEEKDAYS);
    assert_eq!(s.present, 0);
    assert_eq!(s.absent, JUNE_WEEKDAYS);
}

#[test]
fn history_is_matched_by_name_not_id() {
    let store = MemoryStore::new();
    let policy = default_policy();
    let days = weekdays_in_window();
    // The archived record carries a different id every day.
    archive(&store, days[0], vec![person("901", "Alice", "", "08:00", "17:00", &policy)]);
    archive(&store, days[1], vec![person("902", "Alice", "", "08:00", "17:00", &policy)]);

    let s = PerformanceScorer::new(&store)
        .score("Alice", "", date(TODAY))
        .unwrap();
    assert_eq!(s.present, 2);
}

#[test]
fn chronic_lateness_stays_a_warning() {
    let store = MemoryStore::new();
    let policy = default_policy();
    // Late every single working day: late_rate is 100%, well past the
    // critical threshold, but the warning rule is checked first and wins.
    for day in weekdays_in_window() {
        archive(&store, day, vec![person("1", "Alice", "", "10:00", "17:00", &policy)]);
    }

    let s = PerformanceScorer::new(&store)
        .score("Alice", "", date(TODAY))
        .unwrap();
    assert_eq!(s.late, JUNE_WEEKDAYS);
    assert_eq!(s.attendance_rate, 100.0);
    assert_eq!(s.assessment.level, AssessmentLevel::Warning);
    assert!(s.assessment.message.contains("Frequently late"));
}

#[test]
fn poor_attendance_is_critical() {
    let store = MemoryStore::new();
    let policy = default_policy();
    // Present 10 of 21 weekdays: 47.6%.
    for day in weekdays_in_window().into_iter().take(10) {
        archive(&store, day, vec![person("1", "Alice", "", "08:00", "17:00", &policy)]);
    }

    let s = PerformanceScorer::new(&store)
        .score("Alice", "", date(TODAY))
        .unwrap();
    assert_eq!(s.attendance_rate, 47.6);
    assert_eq!(s.assessment.level, AssessmentLevel::Critical);
    assert!(s.assessment.message.contains("Poor attendance"));
}

#[test]
fn average_attendance_is_a_warning() {
    let store = MemoryStore::new();
    let policy = default_policy();
    // Present 16 of 21 weekdays: 76.2%, between the 70 and 85 thresholds.
    for day in weekdays_in_window().into_iter().take(16) {
        archive(&store, day, vec![person("1", "Alice", "", "08:00", "17:00", &policy)]);
    }

    let s = PerformanceScorer::new(&store)
        .score("Alice", "", date(TODAY))
        .unwrap();
    assert_eq!(s.attendance_rate, 76.2);
    assert_eq!(s.assessment.level, AssessmentLevel::Warning);
    assert!(s.assessment.message.contains("Average"));
}

#[test]
fn solid_attendance_without_perfection_is_good() {
    let store = MemoryStore::new();
    let policy = default_policy();
    // Present 18 of 21 weekdays: 85.7%, below the 90% tier.
    for day in weekdays_in_window().into_iter().take(18) {
        archive(&store, day, vec![person("1", "Alice", "", "08:00", "17:00", &policy)]);
    }

    let s = PerformanceScorer::new(&store)
        .score("Alice", "", date(TODAY))
        .unwrap();
    assert_eq!(s.attendance_rate, 85.7);
    assert_eq!(s.assessment.level, AssessmentLevel::Good);
    assert!(s.assessment.message.contains("overall"));
}

#[test]
fn score_all_covers_the_whole_roster_sorted_by_name() {
    let store = MemoryStore::new();
    let policy = default_policy();
    let days = weekdays_in_window();
    archive(
        &store,
        days[0],
        vec![
            person("1", "Zoe", "", "08:00", "17:00", &policy),
            person("2", "Alice", "", "10:00", "", &policy),
        ],
    );

    let roster = common::roster_of(vec![
        person("1", "Zoe", "", "", "", &policy),
        person("2", "Alice", "", "", "", &policy),
    ]);

    let all = PerformanceScorer::new(&store)
        .score_all(&roster, date(TODAY))
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Alice");
    assert_eq!(all[0].late, 1);
    assert_eq!(all[1].name, "Zoe");
    assert_eq!(all[1].present, 1);
}
