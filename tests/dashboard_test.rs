mod common;

use common::{d, weight, workout, workout_with_calories};
use fitlog::models::Snapshot;
use fitlog::Dashboard;

fn snapshot_with_logs(logs: Vec<fitlog::models::LogEntry>) -> Snapshot {
    Snapshot {
        routines: Vec::new(),
        logs,
    }
}

#[test]
fn test_dashboard_build_derives_all_metrics() {
    let snapshot = snapshot_with_logs(vec![
        workout("2024-01-08", "Upper Body"),
        workout("2024-01-09", "Lower Body"),
        weight("2024-01-08", "182.5"),
        weight("2024-01-09", "181"),
    ]);

    let dashboard = Dashboard::build(&snapshot, d(2024, 1, 10));
    assert_eq!(dashboard.workouts_this_week, 2);
    assert_eq!(dashboard.weekly_average, 2.0);
    assert_eq!(dashboard.current_weight, Some(181.0));
    assert_eq!(dashboard.weight_series.len(), 2);
    assert_eq!(dashboard.weekly_counts.len(), 1);
    assert_eq!(dashboard.recent_workouts.len(), 2);
}

#[test]
fn test_render_shows_metric_values() {
    let snapshot = snapshot_with_logs(vec![
        workout_with_calories("2024-01-08", "Upper Body", 300.0),
        workout("2024-01-09", "Lower Body"),
        weight("2024-01-08", "182.5"),
        weight("2024-01-09", "181"),
    ]);

    let output = Dashboard::build(&snapshot, d(2024, 1, 10)).render();
    assert!(output.contains("2 this week"));
    assert!(output.contains("2.0 avg / week"));
    assert!(output.contains("181 lbs"));
    assert!(output.contains("Upper Body"));
    assert!(output.contains("~300 cals"));
    assert!(output.contains("No calorie data"));
}

#[test]
fn test_render_empty_snapshot_uses_placeholders() {
    let output = Dashboard::build(&Snapshot::default(), d(2024, 1, 10)).render();
    assert!(output.contains("0 this week"));
    assert!(output.contains("0.0 avg / week"));
    assert!(output.contains("--"));
    assert!(output.contains("Log at least 2 weight entries"));
    assert!(output.contains("Log a workout to see your weekly breakdown"));
    assert!(output.contains("No workouts logged yet"));
}

#[test]
fn test_render_single_weight_point_shows_placeholder() {
    // One point is a degenerate series; the trend section stays hidden even
    // though the current-weight card shows the value.
    let snapshot = snapshot_with_logs(vec![weight("2024-01-08", "182.5")]);
    let output = Dashboard::build(&snapshot, d(2024, 1, 10)).render();
    assert!(output.contains("182.5 lbs"));
    assert!(output.contains("Log at least 2 weight entries"));
}

#[test]
fn test_recent_workouts_capped_at_five() {
    let logs: Vec<_> = (1..=7)
        .map(|day| workout(&format!("2024-01-0{day}"), &format!("Session {day}")))
        .collect();
    let dashboard = Dashboard::build(&snapshot_with_logs(logs), d(2024, 1, 10));

    assert_eq!(dashboard.recent_workouts.len(), 5);
    assert_eq!(dashboard.recent_workouts[0].value, "Session 7");
}

#[test]
fn test_weekly_consistency_renders_one_row_per_active_week() {
    let snapshot = snapshot_with_logs(vec![
        workout("2024-01-08", "Upper Body"),
        workout("2024-01-10", "Lower Body"),
        workout("2024-01-23", "Push Day"),
    ]);

    let output = Dashboard::build(&snapshot, d(2024, 1, 24)).render();
    assert!(output.contains("week of Jan 07  ## 2"));
    assert!(output.contains("week of Jan 21  # 1"));
    // The empty week between them is absent, not rendered as a zero bar
    assert!(!output.contains("week of Jan 14"));
}
